//! Parameter extraction: five independent, all-or-nothing field extractors.
//!
//! Each extractor either yields a complete value or nothing. They share no
//! state, so the order they run in is not observable in the result.

use dp_protocol::ParameterSet;

use crate::catalog::{KeywordRule, PatternCatalog};

impl PatternCatalog {
    /// Extract every recognizable field from the request text.
    pub fn extract(&self, text: &str) -> ParameterSet {
        ParameterSet {
            title: self.extract_title(text),
            template_type: self.extract_template_type(text),
            brand: self.extract_brand(text),
            year: self.extract_year(text),
            categories: self.extract_categories(text),
        }
    }

    /// Title, by priority: first quoted substring, then the text after
    /// "titled"/"called"/"named", then the text after "for" (or "for the").
    pub fn extract_title(&self, text: &str) -> Option<String> {
        let fields = &self.fields;

        if let Some(caps) = fields.quoted_title.captures(text) {
            return Some(caps[1].to_string());
        }

        [&fields.named_title, &fields.for_title]
            .into_iter()
            .find_map(|re| {
                let caps = re.captures(text)?;
                let title = caps[1].trim();
                (!title.is_empty()).then(|| title.to_string())
            })
    }

    pub fn extract_template_type(&self, text: &str) -> Option<String> {
        first_keyword(&self.template_types, &text.to_lowercase())
    }

    pub fn extract_brand(&self, text: &str) -> Option<String> {
        first_keyword(&self.brands, &text.to_lowercase())
    }

    /// First standalone year between 2000 and 2099.
    pub fn extract_year(&self, text: &str) -> Option<String> {
        self.fields
            .year
            .captures(text)
            .map(|caps| caps[1].to_string())
    }

    /// Items listed after "categories"/"items"/"sections"/"topics", split on
    /// commas and "and". A list that trims down to nothing counts as absent.
    pub fn extract_categories(&self, text: &str) -> Option<Vec<String>> {
        let caps = self.fields.categories.captures(text)?;

        let categories: Vec<String> = self
            .fields
            .category_separator
            .split(&caps[1])
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect();

        (!categories.is_empty()).then_some(categories)
    }
}

/// First table entry (in declaration order) with any matching pattern.
fn first_keyword(table: &[KeywordRule], lower: &str) -> Option<String> {
    table
        .iter()
        .find(|rule| rule.patterns.iter().any(|p| p.is_match(lower)))
        .map(|rule| rule.value.to_string())
}
