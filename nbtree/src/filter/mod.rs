//! Decode only the parts of a document you care about.
//!
//! An [`NbtFilter`] is a list of dotted paths into the document plus a
//! [`FilterMode`]. With [`FilterMode::Include`] only the named paths are kept;
//! with [`FilterMode::Exclude`] everything except the named paths is kept.
//! Parts that are not kept are skipped over in the input without being
//! decoded, which makes pulling a few values out of a large file cheap.
//!
//! Lists have no names for their elements, so a path continues straight
//! through a list: `sections.palette` picks `palette` out of every compound in
//! the `sections` list.
//!
//! ```
//! # use nbtree::{Compound, Compression, Value};
//! # use nbtree::filter::NbtFilter;
//! let mut a = Compound::new();
//! a.insert("b", 1);
//! a.insert("c", 2);
//! let mut root = Compound::new();
//! root.insert("a", a);
//! root.insert("d", 3);
//!
//! let bytes = nbtree::to_bytes(&root, Compression::None).unwrap();
//!
//! let only_b = nbtree::from_bytes_filtered(&bytes, &NbtFilter::with(["a.b"])).unwrap();
//! assert_eq!(only_b.get_path("a.b"), Some(&Value::Int(1)));
//! assert_eq!(only_b.get_path("a.c"), None);
//! assert_eq!(only_b.get("d"), None);
//!
//! let all_but_b = nbtree::from_bytes_filtered(&bytes, &NbtFilter::without(["a.b"])).unwrap();
//! assert_eq!(all_but_b.get_path("a.b"), None);
//! assert_eq!(all_but_b.get_path("a.c"), Some(&Value::Int(2)));
//! assert_eq!(all_but_b.get("d"), Some(&Value::Int(3)));
//! ```
mod de;
mod tag;

use std::slice;

use crate::error::{Error, Result};

pub use de::FilteredDecoder;
pub use tag::{tokenize, FilteredTag};

/// Whether a filter's paths say what to keep or what to drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Keep only the named paths.
    Include,
    /// Keep everything but the named paths.
    Exclude,
}

/// A set of path rules with a mode.
///
/// Rules never overlap. Adding a path that an existing rule already covers
/// does nothing, and adding a path that covers existing rules replaces them:
///
/// ```
/// # use nbtree::filter::NbtFilter;
/// let filter = NbtFilter::with(["a.b", "a", "a.c"]);
/// let names: Vec<_> = filter.iter().map(|t| t.name()).collect();
/// assert_eq!(names, ["a"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NbtFilter {
    mode: FilterMode,
    tags: Vec<FilteredTag>,
}

impl NbtFilter {
    /// An empty filter. An empty include filter keeps nothing, an empty
    /// exclude filter keeps everything.
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            tags: Vec::new(),
        }
    }

    /// An include filter keeping only `paths`.
    pub fn with<I>(paths: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FilteredTag>,
    {
        let mut filter = Self::new(FilterMode::Include);
        filter.add_tags(paths);
        filter
    }

    /// An exclude filter dropping `paths`.
    pub fn without<I>(paths: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FilteredTag>,
    {
        let mut filter = Self::new(FilterMode::Exclude);
        filter.add_tags(paths);
        filter
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn tags(&self) -> &[FilteredTag] {
        &self.tags
    }

    pub fn iter(&self) -> slice::Iter<'_, FilteredTag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Add one rule. Returns false if it was already covered by the filter.
    pub fn add_tag(&mut self, tag: impl Into<FilteredTag>) -> bool {
        let tag = tag.into();

        if self
            .tags
            .iter()
            .any(|existing| *existing == tag || existing.is_extended_by(&tag))
        {
            return false;
        }

        self.tags.retain(|existing| !tag.is_extended_by(existing));
        self.tags.push(tag);
        true
    }

    pub fn add_tags<I>(&mut self, tags: I)
    where
        I: IntoIterator,
        I::Item: Into<FilteredTag>,
    {
        for tag in tags {
            self.add_tag(tag);
        }
    }

    /// Remove the rule with exactly this path. Returns whether one was found.
    pub fn remove_tag(&mut self, name: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|tag| tag.name() != name);
        self.tags.len() != before
    }

    pub fn remove_tags<I>(&mut self, names: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in names {
            self.remove_tag(name.as_ref());
        }
    }

    /// The first rule whose component at `depth` is `token`.
    pub fn find_match(&self, token: &str, depth: usize) -> Option<&FilteredTag> {
        self.tags.iter().find(|tag| tag.token(depth) == Some(token))
    }

    /// Whether a key `token` found at `depth` is kept, judging by the key
    /// alone.
    pub fn should_include(&self, token: &str, depth: usize) -> bool {
        let matched = self.find_match(token, depth).is_some();
        match self.mode {
            FilterMode::Include => matched,
            FilterMode::Exclude => !matched,
        }
    }

    /// The rules that still apply below the point where `matched` matched,
    /// for filtering at `depth`. These are `matched` itself if it goes deeper
    /// than `depth`, and every other rule that agrees with it on the first
    /// `depth` components and goes deeper too.
    pub fn sub_filter(&self, matched: &FilteredTag, depth: usize) -> Result<NbtFilter> {
        if depth > matched.len() {
            return Err(Error::invariant(format!(
                "depth {} is past the end of filter path {} with {} components",
                depth,
                matched,
                matched.len()
            )));
        }

        let mut sub = NbtFilter::new(self.mode);
        let keep_matched = matched.len() > depth;

        for tag in &self.tags {
            if (keep_matched && tag == matched) || matched.is_extended_by_at(tag, depth) {
                sub.tags.push(tag.clone());
            }
        }

        if keep_matched && !sub.tags.contains(matched) {
            sub.tags.push(matched.clone());
        }

        Ok(sub)
    }
}

impl<'a> IntoIterator for &'a NbtFilter {
    type Item = &'a FilteredTag;
    type IntoIter = slice::Iter<'a, FilteredTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}
