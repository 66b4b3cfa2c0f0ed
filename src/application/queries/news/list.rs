use super::NewsQueryService;
use crate::{
    application::{
        dto::{NewsDto, Page},
        error::ApplicationResult,
        input,
    },
    domain::news::{NewsFilter, NewsSort, PageRequest},
};

/// Listing parameters exactly as received in the query string.
#[derive(Debug, Clone, Default)]
pub struct ListNewsQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub category_id: Option<String>,
    pub classifications: Option<String>,
    pub tags: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub featured: Option<String>,
    pub breaking: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl NewsQueryService {
    /// Administrative listing over every status.
    pub async fn list_news(&self, query: ListNewsQuery) -> ApplicationResult<Page<NewsDto>> {
        let mut filter = build_filter(&query)?;
        if let Some(raw) = input::non_blank(query.status.clone()) {
            filter.status = Some(input::parse_status(&raw)?);
        }
        self.run_listing(filter, &query).await
    }

    /// Public listing: only published articles are ever visible.
    pub async fn list_public_news(&self, query: ListNewsQuery) -> ApplicationResult<Page<NewsDto>> {
        let filter = NewsFilter {
            status: NewsFilter::published().status,
            ..build_filter(&query)?
        };
        self.run_listing(filter, &query).await
    }

    async fn run_listing(
        &self,
        filter: NewsFilter,
        query: &ListNewsQuery,
    ) -> ApplicationResult<Page<NewsDto>> {
        let sort = build_sort(query)?;
        let page = build_page(query)?;
        let (records, total) = self.read_repo.list_paginated(&filter, sort, page).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, page, total))
    }
}

fn build_filter(query: &ListNewsQuery) -> ApplicationResult<NewsFilter> {
    let search = input::non_blank(query.search.clone()).map(|s| s.trim().to_string());
    let category_id = input::non_blank(query.category_id.clone())
        .map(|raw| input::parse_category_id(&raw))
        .transpose()?;
    let date_from = input::non_blank(query.date_from.clone())
        .map(|raw| input::parse_timestamp("dateFrom", &raw))
        .transpose()?;
    let date_to = input::non_blank(query.date_to.clone())
        .map(|raw| input::parse_upper_bound("dateTo", &raw))
        .transpose()?;
    let featured = input::non_blank(query.featured.clone())
        .map(|raw| input::parse_flag("featured", &raw))
        .transpose()?;
    let breaking = input::non_blank(query.breaking.clone())
        .map(|raw| input::parse_flag("breaking", &raw))
        .transpose()?;

    Ok(NewsFilter {
        search,
        status: None,
        category_id,
        classifications: input::split_list(query.classifications.as_deref()),
        tags: input::split_list(query.tags.as_deref()),
        date_from,
        date_to,
        featured,
        breaking,
    })
}

fn build_sort(query: &ListNewsQuery) -> ApplicationResult<NewsSort> {
    let mut sort = NewsSort::default();
    if let Some(raw) = input::non_blank(query.sort_by.clone()) {
        sort.field = raw.parse()?;
    }
    if let Some(raw) = input::non_blank(query.sort_order.clone()) {
        sort.direction = raw.parse()?;
    }
    Ok(sort)
}

fn build_page(query: &ListNewsQuery) -> ApplicationResult<PageRequest> {
    let page = input::non_blank(query.page.clone())
        .map(|raw| input::parse_u32("page", &raw))
        .transpose()?
        .unwrap_or(1);
    let limit = input::non_blank(query.limit.clone())
        .map(|raw| input::parse_u32("limit", &raw))
        .transpose()?
        .unwrap_or(PageRequest::DEFAULT_LIMIT);
    Ok(PageRequest::new(page, limit)?)
}
