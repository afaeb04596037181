//! Config-file schema for scales and options, kept separate from the runtime
//! types so the serde shapes stay string- and array-friendly.

use crate::error::Error;
use crate::options::Options;
use crate::scale::{PrefixSpec, SI_BASE, SI_FIRST_EXPONENT, SI_TAGS, Scale};
use serde::Deserialize;

/// One prefix row as written in config: a bare tag, or a `[tag, multiplier]`
/// pair when the entry does not follow the table's base.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PrefixConfig {
    /// Bare tag.
    Tag(String),
    /// Tag with an explicit multiplier.
    Fixed(String, f64),
}

impl From<PrefixConfig> for PrefixSpec {
    fn from(config: PrefixConfig) -> Self {
        match config {
            PrefixConfig::Tag(tag) => Self::Tag(tag),
            PrefixConfig::Fixed(tag, multiplier) => Self::Fixed(tag, multiplier),
        }
    }
}

/// Scale section. Field defaults reproduce the SI table, so an empty section
/// still yields the standard prefixes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Tags ordered by exponent.
    pub prefixes: Vec<PrefixConfig>,
    /// Multiplier ratio between consecutive bare tags.
    pub base: f64,
    /// Exponent assigned to the first entry.
    pub first_exponent: i32,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            prefixes: SI_TAGS
                .iter()
                .map(|tag| PrefixConfig::Tag((*tag).to_string()))
                .collect(),
            base: SI_BASE,
            first_exponent: SI_FIRST_EXPONENT,
        }
    }
}

impl TryFrom<ScaleConfig> for Scale {
    type Error = Error;

    fn try_from(config: ScaleConfig) -> Result<Self, Error> {
        Self::new(config.prefixes, config.base, config.first_exponent)
    }
}

/// Options section. Only the fields present in the file override the crate
/// defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
    /// Overrides the "B" unit suffix.
    pub unit: Option<String>,
    /// Overrides the SI scale.
    pub scale: Option<ScaleConfig>,
}

impl TryFrom<OptionsConfig> for Options {
    type Error = Error;

    fn try_from(config: OptionsConfig) -> Result<Self, Error> {
        let scale = config.scale.map(Scale::try_from).transpose()?;
        Ok(Self {
            unit: config.unit,
            scale,
        })
    }
}
