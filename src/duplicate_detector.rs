//! # Duplicate Item Detection
//!
//! Decides whether two item names refer to the same shopping list entry.
//! Consolidation uses [`ExactMatcher`] unless configured otherwise; the fuzzy
//! [`DuplicateDetector`] is also used when a user types an item by hand and
//! the list may already contain it under a slightly different name.

/// Strategy for matching an incoming item against existing entries
pub trait ItemMatcher {
    /// Index of the first existing name the item belongs to
    fn find_match(&self, item: &str, existing: &[String]) -> Option<usize>;

    /// Whether only identical names ever match
    fn exact_only(&self) -> bool {
        false
    }
}

/// Literal string equality
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl ItemMatcher for ExactMatcher {
    fn find_match(&self, item: &str, existing: &[String]) -> Option<usize> {
        existing.iter().position(|name| name == item)
    }

    fn exact_only(&self) -> bool {
        true
    }
}

/// Default similarity above which two names are considered duplicates
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;

/// Fuzzy duplicate detector based on normalized Levenshtein similarity
#[derive(Debug, Clone)]
pub struct DuplicateDetector {
    threshold: f64,
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl DuplicateDetector {
    /// Create a detector; the threshold is clamped to `0.0..=1.0`
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Similarity of two item names after normalization, in `0.0..=1.0`
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        let a = normalize_item_name(a);
        let b = normalize_item_name(b);
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }
        if a == b {
            return 1.0;
        }
        strsim::normalized_levenshtein(&a, &b)
    }

    pub fn is_duplicate(&self, a: &str, b: &str) -> bool {
        self.similarity(a, b) >= self.threshold
    }

    /// Best matching existing item for a newly entered one
    pub fn find_duplicate<'a>(&self, new_item: &str, existing: &'a [String]) -> Option<&'a str> {
        existing
            .iter()
            .map(|candidate| (candidate, self.similarity(new_item, candidate)))
            .filter(|(_, score)| *score >= self.threshold)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, _)| candidate.as_str())
    }
}

/// Consolidation matcher backed by a [`DuplicateDetector`]
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    detector: DuplicateDetector,
}

impl FuzzyMatcher {
    pub fn new(threshold: f64) -> Self {
        Self {
            detector: DuplicateDetector::new(threshold),
        }
    }
}

impl ItemMatcher for FuzzyMatcher {
    fn find_match(&self, item: &str, existing: &[String]) -> Option<usize> {
        if let Some(exact) = ExactMatcher.find_match(item, existing) {
            return Some(exact);
        }
        existing
            .iter()
            .enumerate()
            .map(|(index, name)| (index, self.detector.similarity(item, name)))
            .filter(|(_, score)| *score >= self.detector.threshold())
            .max_by(|a, b| a.1.total_cmp(&b.1).then(b.0.cmp(&a.0)))
            .map(|(index, _)| index)
    }
}

/// Lowercase, drop punctuation, collapse whitespace and strip plural endings
pub fn normalize_item_name(name: &str) -> String {
    let cleaned: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .map(singularize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn singularize(word: &str) -> String {
    if word.len() > 4 && word.ends_with("ies") {
        format!("{}y", &word[..word.len() - 3])
    } else if word.len() > 4 && word.ends_with("oes") {
        word[..word.len() - 2].to_string()
    } else if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}
