use crate::domain::news::PageRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        let limit = u64::from(request.limit());
        Self {
            items,
            pagination: PageMeta {
                page: request.page(),
                limit: request.limit(),
                total,
                total_pages: total.div_ceil(limit),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page: Page<()> = Page::new(vec![], PageRequest::new(1, 10).unwrap(), 21);
        assert_eq!(page.pagination.total_pages, 3);

        let empty: Page<()> = Page::new(vec![], PageRequest::default(), 0);
        assert_eq!(empty.pagination.total_pages, 0);
    }
}
