use std::fmt;

/// Split a dotted path into its components. A dot preceded by a backslash is
/// part of the component rather than a separator, and loses its backslash.
///
/// ```
/// # use nbtree::filter::tokenize;
/// assert_eq!(tokenize("a.b"), ["a", "b"]);
/// assert_eq!(tokenize(r"minecraft\.stone.count"), ["minecraft.stone", "count"]);
/// assert_eq!(tokenize(""), [""]);
/// ```
pub fn tokenize(path: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'.') => {
                chars.next();
                current.push('.');
            }
            '.' => tokens.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }

    tokens.push(current);
    tokens
}

/// One filter rule: a path through nested compounds such as
/// `Data.Player.Inventory`.
///
/// Rules compare by their raw path. They are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilteredTag {
    name: String,
    tokens: Vec<String>,
}

impl FilteredTag {
    pub fn new(path: impl Into<String>) -> Self {
        let name = path.into();
        let tokens = tokenize(&name);
        Self { name, tokens }
    }

    /// The path as it was written, escapes included.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The path component at `depth`, if the path is that deep.
    pub fn token(&self, depth: usize) -> Option<&str> {
        self.tokens.get(depth).map(String::as_str)
    }

    /// Number of path components. Never zero.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether `other` is a strictly longer path that starts with this one,
    /// i.e. `other` is this path followed by an unescaped dot. A trailing dot
    /// counts, so `a.` extends `a`.
    pub fn is_extended_by(&self, other: &FilteredTag) -> bool {
        let rest = match other.name.strip_prefix(self.name.as_str()) {
            Some(rest) => rest,
            None => return false,
        };

        rest.starts_with('.') && !self.name.ends_with('\\')
    }

    /// Whether `other` shares this rule's first `depth` components while both
    /// continue past them. A rule never extends itself.
    pub fn is_extended_by_at(&self, other: &FilteredTag, depth: usize) -> bool {
        self.len() > depth
            && other.len() > depth
            && self != other
            && self.tokens[..depth] == other.tokens[..depth]
    }
}

impl fmt::Display for FilteredTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for FilteredTag {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FilteredTag {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
