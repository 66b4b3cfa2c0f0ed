// src/application/ports/util.rs

/// Turns titles and category names into URL slugs. May return an empty
/// string when the input has no usable characters.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
