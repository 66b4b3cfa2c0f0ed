/// Text fields of the news form, exactly as submitted.
///
/// Every field is optional here; create and update decide which ones are
/// required and how blank values are treated.
#[derive(Debug, Clone, Default)]
pub struct NewsFields {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<String>,
    pub status: Option<String>,
    pub tags: Option<String>,
    pub classifications: Option<String>,
    pub metadata: Option<String>,
    pub is_featured: Option<String>,
    pub is_breaking: Option<String>,
    pub published_at: Option<String>,
}

impl NewsFields {
    /// Assign a form field by its wire name. Returns `false` for unknown names.
    pub fn assign(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "title" => &mut self.title,
            "slug" => &mut self.slug,
            "excerpt" => &mut self.excerpt,
            "content" => &mut self.content,
            "categoryId" | "category_id" => &mut self.category_id,
            "status" => &mut self.status,
            "tags" => &mut self.tags,
            "classifications" => &mut self.classifications,
            "metadata" => &mut self.metadata,
            "isFeatured" | "is_featured" => &mut self.is_featured,
            "isBreaking" | "is_breaking" => &mut self.is_breaking,
            "publishedAt" | "published_at" => &mut self.published_at,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}
