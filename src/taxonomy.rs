//! # Tag Taxonomy
//!
//! Recipe tags ("breakfast", "vegetarian", ...) live in a versioned,
//! immutable [`TagTaxonomy`]. Every edit returns a new taxonomy with the
//! version bumped together with the [`TagChange`] it represents, so callers
//! can rewrite recipe tags in step. A [`TaxonomyStore`] holds the current
//! version and only accepts a commit built on top of it.
//!
//! ```rust
//! use meal_planner::taxonomy::TagTaxonomy;
//!
//! let taxonomy = TagTaxonomy::new(["dinner", "supper"]);
//! let (merged, change) = taxonomy.merge_tags(&["supper"], "dinner").unwrap();
//! assert_eq!(merged.tags(), ["dinner"]);
//! assert_eq!(change.remap_tags(&["supper".to_string()]), vec!["dinner".to_string()]);
//! ```

use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Errors raised by taxonomy edits
#[derive(Debug, Clone, PartialEq)]
pub enum TaxonomyError {
    EmptyName,
    NotFound(String),
    AlreadyExists(String),
    VersionConflict { expected: u64, actual: u64 },
    Poisoned,
}

impl std::fmt::Display for TaxonomyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxonomyError::EmptyName => write!(f, "Tag name must not be empty"),
            TaxonomyError::NotFound(tag) => write!(f, "Tag not found: {}", tag),
            TaxonomyError::AlreadyExists(tag) => write!(f, "Tag already exists: {}", tag),
            TaxonomyError::VersionConflict { expected, actual } => write!(
                f,
                "Taxonomy version conflict: expected {}, found {}",
                expected, actual
            ),
            TaxonomyError::Poisoned => write!(f, "Taxonomy store lock poisoned"),
        }
    }
}

impl std::error::Error for TaxonomyError {}

/// The edit a taxonomy mutation performed
#[derive(Debug, Clone, PartialEq)]
pub enum TagChange {
    Added(String),
    Renamed { from: String, to: String },
    Deleted(String),
    Merged { sources: Vec<String>, target: String },
}

impl TagChange {
    /// Apply this change to a recipe's tag list, keeping order and dropping duplicates
    pub fn remap_tags(&self, tags: &[String]) -> Vec<String> {
        let mut result: Vec<String> = Vec::with_capacity(tags.len());

        for tag in tags {
            let mapped = match self {
                TagChange::Added(_) => Some(tag.clone()),
                TagChange::Renamed { from, to } if tag == from => Some(to.clone()),
                TagChange::Renamed { .. } => Some(tag.clone()),
                TagChange::Deleted(removed) if tag == removed => None,
                TagChange::Deleted(_) => Some(tag.clone()),
                TagChange::Merged { sources, target } if sources.contains(tag) => {
                    Some(target.clone())
                }
                TagChange::Merged { .. } => Some(tag.clone()),
            };

            if let Some(mapped) = mapped {
                if !result.contains(&mapped) {
                    result.push(mapped);
                }
            }
        }

        result
    }
}

/// Immutable, versioned list of tags
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagTaxonomy {
    version: u64,
    tags: Vec<String>,
}

fn normalize_tag(name: &str) -> Result<String, TaxonomyError> {
    let tag = name.trim().to_lowercase();
    if tag.is_empty() {
        Err(TaxonomyError::EmptyName)
    } else {
        Ok(tag)
    }
}

impl TagTaxonomy {
    /// Build a version-0 taxonomy; names are normalized, blanks and duplicates dropped
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for tag in tags {
            if let Ok(tag) = normalize_tag(tag.as_ref()) {
                if !normalized.contains(&tag) {
                    normalized.push(tag);
                }
            }
        }
        Self {
            version: 0,
            tags: normalized,
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn contains(&self, tag: &str) -> bool {
        normalize_tag(tag)
            .map(|tag| self.tags.contains(&tag))
            .unwrap_or(false)
    }

    fn next(&self, tags: Vec<String>) -> Self {
        Self {
            version: self.version + 1,
            tags,
        }
    }

    fn require(&self, name: &str) -> Result<String, TaxonomyError> {
        let tag = normalize_tag(name)?;
        if self.tags.contains(&tag) {
            Ok(tag)
        } else {
            Err(TaxonomyError::NotFound(tag))
        }
    }

    pub fn add_tag(&self, name: &str) -> Result<(Self, TagChange), TaxonomyError> {
        let tag = normalize_tag(name)?;
        if self.tags.contains(&tag) {
            return Err(TaxonomyError::AlreadyExists(tag));
        }
        let mut tags = self.tags.clone();
        tags.push(tag.clone());
        Ok((self.next(tags), TagChange::Added(tag)))
    }

    pub fn rename_tag(&self, from: &str, to: &str) -> Result<(Self, TagChange), TaxonomyError> {
        let from = self.require(from)?;
        let to = normalize_tag(to)?;
        if from != to && self.tags.contains(&to) {
            return Err(TaxonomyError::AlreadyExists(to));
        }
        let tags = self
            .tags
            .iter()
            .map(|tag| if *tag == from { to.clone() } else { tag.clone() })
            .collect();
        Ok((self.next(tags), TagChange::Renamed { from, to }))
    }

    pub fn delete_tag(&self, name: &str) -> Result<(Self, TagChange), TaxonomyError> {
        let tag = self.require(name)?;
        let tags = self.tags.iter().filter(|t| **t != tag).cloned().collect();
        Ok((self.next(tags), TagChange::Deleted(tag)))
    }

    /// Fold `sources` into `target`. The target is created when missing and
    /// takes the position of the first merged tag.
    pub fn merge_tags(
        &self,
        sources: &[&str],
        target: &str,
    ) -> Result<(Self, TagChange), TaxonomyError> {
        let target = normalize_tag(target)?;
        let mut merged: Vec<String> = Vec::new();
        for source in sources {
            let source = self.require(source)?;
            if source != target && !merged.contains(&source) {
                merged.push(source);
            }
        }

        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in &self.tags {
            let replacement = if merged.contains(tag) { &target } else { tag };
            if !tags.contains(replacement) {
                tags.push(replacement.clone());
            }
        }
        if !tags.contains(&target) {
            tags.push(target.clone());
        }

        Ok((
            self.next(tags),
            TagChange::Merged {
                sources: merged,
                target,
            },
        ))
    }
}

/// Holder of the current taxonomy with optimistic version checks
#[derive(Debug, Default)]
pub struct TaxonomyStore {
    current: RwLock<Arc<TagTaxonomy>>,
}

impl TaxonomyStore {
    pub fn new(taxonomy: TagTaxonomy) -> Self {
        Self {
            current: RwLock::new(Arc::new(taxonomy)),
        }
    }

    /// Snapshot of the current taxonomy
    pub fn current(&self) -> Result<Arc<TagTaxonomy>, TaxonomyError> {
        let guard = self.current.read().map_err(|_| TaxonomyError::Poisoned)?;
        Ok(Arc::clone(&guard))
    }

    /// Replace the taxonomy if `expected_version` is still current
    pub fn commit(&self, expected_version: u64, next: TagTaxonomy) -> Result<(), TaxonomyError> {
        let mut guard = self.current.write().map_err(|_| TaxonomyError::Poisoned)?;
        let actual = guard.version();
        if actual != expected_version {
            debug!(expected_version, actual, "Rejected stale taxonomy commit");
            return Err(TaxonomyError::VersionConflict {
                expected: expected_version,
                actual,
            });
        }
        info!(version = next.version(), tags = next.tags().len(), "Committed taxonomy");
        *guard = Arc::new(next);
        Ok(())
    }
}
