//! Query specification for the orthographic-form search.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::graph::{OrthVariant, WordCategory, WordClass};

/// A mutable search specification.
///
/// The default restriction sets allow everything; an empty search string or
/// an empty restriction set yields zero results, never an error.
///
/// # Examples
///
/// ```
/// use semnet::filter::FilterConfig;
///
/// let config = FilterConfig::new("Apfel").with_ignore_case(true);
/// assert!(config.ignore_case);
/// assert_eq!(config.edit_distance, 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// The literal or regex search string.
    pub search: String,
    /// Word categories to search in.
    pub categories: HashSet<WordCategory>,
    /// Word classes to search in.
    pub word_classes: HashSet<WordClass>,
    /// Orthographic-form slots to match against.
    pub variants: HashSet<OrthVariant>,
    /// Interpret `search` as a regular expression (full-form match).
    pub reg_ex: bool,
    /// Case-insensitive matching.
    pub ignore_case: bool,
    /// Maximum edit distance for literal searches; ignored when `reg_ex`
    /// is set.
    pub edit_distance: u32,
}

impl FilterConfig {
    /// Create a config matching `search` literally across all categories,
    /// classes and variant slots.
    pub fn new(search: &str) -> Self {
        FilterConfig {
            search: search.to_string(),
            categories: WordCategory::ALL.into_iter().collect(),
            word_classes: WordClass::ALL.into_iter().collect(),
            variants: OrthVariant::ALL.into_iter().collect(),
            reg_ex: false,
            ignore_case: false,
            edit_distance: 0,
        }
    }

    /// Interpret the search string as a regular expression.
    pub fn with_regex(mut self, reg_ex: bool) -> Self {
        self.reg_ex = reg_ex;
        self
    }

    /// Match case-insensitively.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Allow up to `edit_distance` character edits on literal searches.
    pub fn with_edit_distance(mut self, edit_distance: u32) -> Self {
        self.edit_distance = edit_distance;
        self
    }

    /// Restrict to the given categories.
    pub fn with_categories<I: IntoIterator<Item = WordCategory>>(mut self, categories: I) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Restrict to the given word classes.
    pub fn with_word_classes<I: IntoIterator<Item = WordClass>>(mut self, classes: I) -> Self {
        self.word_classes = classes.into_iter().collect();
        self
    }

    /// Restrict to the given orthographic-form slots.
    pub fn with_variants<I: IntoIterator<Item = OrthVariant>>(mut self, variants: I) -> Self {
        self.variants = variants.into_iter().collect();
        self
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig::new("")
    }
}
