// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_lowercase_and_dashed() {
        assert_eq!(DefaultSlugGenerator.slugify("Web Design"), "web-design");
        assert_eq!(DefaultSlugGenerator.slugify("  Brand  Identity "), "brand-identity");
    }
}
