//! Unified error type for all scalefmt operations.

/// Error type for scale table construction.
#[derive(Debug)]
pub enum Error {
    /// Scale has no prefix entries.
    EmptyScale,
    /// Two entries share the same tag.
    DuplicateTag(String),
    /// The tag set produced a pattern the regex engine rejected.
    Pattern(regex::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyScale => write!(f, "scale has no prefixes"),
            Self::DuplicateTag(tag) => write!(f, "duplicate prefix tag: {tag:?}"),
            Self::Pattern(e) => write!(f, "pattern error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pattern(e) => Some(e),
            _ => None,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(e: regex::Error) -> Self {
        Self::Pattern(e)
    }
}
