//! Scale tables: ordered prefix entries, tag lookup, and the compiled
//! pattern that recognizes tagged numbers inside strings.

use crate::error::Error;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Tag row of the default table, ordered from yocto to yotta.
pub(crate) const SI_TAGS: &[&str] = &[
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Multiplier ratio between consecutive SI tags.
pub(crate) const SI_BASE: f64 = 1e3;

/// Exponent of the first SI tag: `y` stands for `1000^-8`.
pub(crate) const SI_FIRST_EXPONENT: i32 = -8;

/// SI powers of 1000, with the empty tag covering the unscaled band.
static SI: LazyLock<Scale> = LazyLock::new(|| {
    Scale::new(SI_TAGS.iter().copied(), SI_BASE, SI_FIRST_EXPONENT)
        .expect("SI scale table is valid")
});

/// IEC powers of 1024, the usual choice for byte counts.
static BINARY: LazyLock<Scale> = LazyLock::new(|| {
    Scale::new(
        ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi", "Yi"],
        1024.0,
        0,
    )
    .expect("binary scale table is valid")
});

/// One row of a scale table: a tag and the multiplier it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct Prefix {
    /// Short marker written between the number and the unit ("k", "Mi", "").
    pub tag: String,
    /// Factor a tagged value is multiplied by to recover the raw magnitude.
    pub multiplier: f64,
}

/// Table entry description accepted by [`Scale::new`].
#[derive(Debug, Clone, PartialEq)]
pub enum PrefixSpec {
    /// Bare tag; its multiplier is `base^(first_exponent + position)`.
    Tag(String),
    /// Tag with an explicit multiplier, for tables that follow no single base.
    Fixed(String, f64),
}

impl From<&str> for PrefixSpec {
    fn from(tag: &str) -> Self {
        Self::Tag(tag.to_string())
    }
}

impl From<String> for PrefixSpec {
    fn from(tag: String) -> Self {
        Self::Tag(tag)
    }
}

impl From<(&str, f64)> for PrefixSpec {
    fn from((tag, multiplier): (&str, f64)) -> Self {
        Self::Fixed(tag.to_string(), multiplier)
    }
}

impl From<(String, f64)> for PrefixSpec {
    fn from((tag, multiplier): (String, f64)) -> Self {
        Self::Fixed(tag, multiplier)
    }
}

/// Immutable prefix table shared by formatting and parsing.
#[derive(Debug, Clone)]
pub struct Scale {
    /// Sorted ascending by multiplier so selection can binary-search.
    entries: Vec<Prefix>,
    /// Tag to multiplier, exact keys only.
    by_tag: HashMap<String, f64>,
    /// Case-insensitive matcher: number, optional whitespace, tag, remainder.
    pattern: Regex,
}

impl Scale {
    /// Builds a table from tag specs. Bare tags get `base^(first_exponent + i)`
    /// where `i` is the spec's position; fixed specs keep their multiplier.
    ///
    /// # Errors
    ///
    /// Fails on an empty spec list, a repeated tag, or a tag set the regex
    /// engine refuses to compile.
    pub fn new<I, S>(specs: I, base: f64, first_exponent: i32) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<PrefixSpec>,
    {
        let mut entries = Vec::new();
        let mut by_tag = HashMap::new();

        for (i, spec) in specs.into_iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let exponent = first_exponent.saturating_add(i as i32);
            let (tag, multiplier) = match spec.into() {
                PrefixSpec::Tag(tag) => (tag, base.powi(exponent)),
                PrefixSpec::Fixed(tag, multiplier) => (tag, multiplier),
            };
            if by_tag.insert(tag.clone(), multiplier).is_some() {
                return Err(Error::DuplicateTag(tag));
            }
            entries.push(Prefix { tag, multiplier });
        }

        if entries.is_empty() {
            return Err(Error::EmptyScale);
        }

        // Compile from spec order so equal-length tags keep their given
        // precedence, then sort for selection.
        let pattern = compile_pattern(&entries)?;
        entries.sort_by(|a, b| a.multiplier.total_cmp(&b.multiplier));

        Ok(Self {
            entries,
            by_tag,
            pattern,
        })
    }

    /// The default table: base-1000 SI prefixes from `y` (1e-24) to `Y` (1e24).
    #[must_use]
    pub fn si() -> &'static Self {
        &SI
    }

    /// IEC base-1024 prefixes (`Ki`, `Mi`, ...) for callers that count bytes.
    #[must_use]
    pub fn binary() -> &'static Self {
        &BINARY
    }

    /// Entries in ascending multiplier order.
    #[must_use]
    pub fn entries(&self) -> &[Prefix] {
        &self.entries
    }

    /// Multiplier for an exact tag, if the table contains it.
    #[must_use]
    pub fn multiplier(&self, tag: &str) -> Option<f64> {
        self.by_tag.get(tag).copied()
    }

    /// Greatest entry whose multiplier does not exceed `value`, floored at
    /// the smallest entry. Selection never fails, even for values below the
    /// whole table.
    #[must_use]
    pub fn prefix_for(&self, value: f64) -> &Prefix {
        let idx = self
            .entries
            .partition_point(|prefix| prefix.multiplier <= value)
            .saturating_sub(1);
        &self.entries[idx]
    }

    pub(crate) const fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::si().clone()
    }
}

/// Longest tags first so "Ki" wins over "K". An empty tag turns the group
/// optional instead of adding an empty alternation branch.
fn compile_pattern(entries: &[Prefix]) -> Result<Regex, Error> {
    let mut tags: Vec<&str> = entries.iter().map(|prefix| prefix.tag.as_str()).collect();
    tags.sort_by(|a, b| b.len().cmp(&a.len()));

    let has_empty = tags.iter().any(|tag| tag.is_empty());
    let alternation = tags
        .into_iter()
        .filter(|tag| !tag.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    let tag_group = if alternation.is_empty() {
        String::from("()")
    } else if has_empty {
        format!("({alternation})?")
    } else {
        format!("({alternation})")
    };

    let pattern = format!(r"(?i)^\s*(\d+(?:\.\d+)?)\s*{tag_group}(.*)$");
    Ok(Regex::new(&pattern)?)
}
