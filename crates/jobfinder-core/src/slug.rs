//! Slug codec and composite job identifiers.
//!
//! A job has no stored id. Its identity inside a category is the slug of its
//! title, recomputed on every read, so `slugify` must stay byte-for-byte
//! identical to what ingestion used when it published the identifiers.

use std::fmt;

/// Separator between the category key and the title slug in a [`JobId`].
pub const SEPARATOR: &str = "--";

/// Normalize a free-text title into a URL-safe slug.
///
/// Trims and lower-cases the input, drops every character that is not a word
/// character (`[a-z0-9_]`), ASCII whitespace or `-`, and collapses each run of
/// whitespace and hyphens into a single `-`.
///
/// Example: `"  Senior UX Designer (Remote) "` → `"senior-ux-designer-remote"`
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_run = false;

    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch);
            in_run = false;
        } else if ch == '-' || ch.is_ascii_whitespace() {
            if !in_run {
                out.push('-');
                in_run = true;
            }
        }
        // Anything else is stripped without breaking a separator run.
    }

    out
}

/// Returns true if `key` can be embedded in a [`JobId`] without making the
/// split ambiguous.
///
/// Title slugs never contain `--`, but they may start with `-`. A category key
/// must therefore be non-empty, must not contain the separator and must not
/// end with `-`, so the first `--` in an identifier is always the separator.
pub fn is_addressable_category(key: &str) -> bool {
    !key.is_empty() && !key.contains(SEPARATOR) && !key.ends_with('-')
}

/// Composite job identifier: `<category-key>--<title-slug>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId {
    category: String,
    title_slug: String,
}

impl JobId {
    /// Build the identifier for a job titled `title` in `category`.
    ///
    /// Returns `None` when the category key is not addressable.
    pub fn new(category: &str, title: &str) -> Option<Self> {
        if !is_addressable_category(category) {
            return None;
        }
        Some(Self {
            category: category.to_string(),
            title_slug: slugify(title),
        })
    }

    /// Split a client-supplied identifier on the first separator.
    ///
    /// Returns `None` if there is no separator or the category part is empty.
    pub fn parse(full_slug: &str) -> Option<Self> {
        let (category, title_slug) = full_slug.split_once(SEPARATOR)?;
        if category.is_empty() {
            return None;
        }
        Some(Self {
            category: category.to_string(),
            title_slug: title_slug.to_string(),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn title_slug(&self) -> &str {
        &self.title_slug
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.category, SEPARATOR, self.title_slug)
    }
}

/// Build the client-facing identifier string, as ingestion publishes it.
pub fn full_slug(category: &str, title: &str) -> Option<String> {
    JobId::new(category, title).map(|id| id.to_string())
}
