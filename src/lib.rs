#![forbid(unsafe_code)]

//! `scalefmt` - Human-readable metric-prefix formatting and parsing.
//!
//! Converts raw magnitudes into compact strings ("1.5kB", "100mW") and reads
//! such strings back into numbers:
//! - SI scale by default (base 1000, `y` through `Y`), binary preset for bytes
//! - Custom tables via [`Scale::new`], with per-entry explicit multipliers
//! - Options merged over defaults: set only what differs
//! - Parse failures return `None`, never a panic
//!
//! # Example
//!
//! ```
//! use scalefmt::{Options, Scale};
//!
//! assert_eq!(scalefmt::format(1500), "1.5kB");
//! assert_eq!(scalefmt::parse("1.5kB"), Some(1500.0));
//!
//! let watts = Options::new().unit("W");
//! assert_eq!(scalefmt::format_with(0.1, &watts), "100mW");
//!
//! let binary = Options::new().scale(Scale::binary().clone());
//! assert_eq!(scalefmt::format_with(2048, &binary), "2KiB");
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod fmt;
pub mod options;
pub mod parse;
pub mod scale;

// Re-exports for convenience
pub use config::{OptionsConfig, PrefixConfig, ScaleConfig};
pub use error::Error;
pub use fmt::{format, format_with};
pub use options::Options;
pub use parse::{parse, parse_with};
pub use scale::{Prefix, PrefixSpec, Scale};
