//! Xget URL converter - rewrite platform URLs into accelerated Xget URLs.
//!
//! This library provides the core functionality for xget, including:
//! - The ordered platform rule catalog
//! - Input normalization
//! - Host and predicate matching, and per-platform path transformation
//! - Configuration file parsing, cascade discovery and base domain resolution
//!
//! # Example
//!
//! ```
//! use xget_convert::catalog::Catalog;
//! use xget_convert::convert::{DEFAULT_BASE, convert};
//!
//! let catalog = Catalog::builtin();
//! let result = convert(&catalog, "github.com/xixu-me/Xget", DEFAULT_BASE);
//!
//! assert!(result.ok());
//! assert_eq!(result.platform().map(|p| p.id.as_str()), Some("github"));
//! assert_eq!(result.output(), Some("https://xget.xi-xu.me/gh/xixu-me/Xget"));
//! ```

pub mod catalog;
pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod rules;

pub use catalog::{Catalog, PlatformRule};
pub use convert::{ConvertResult, DEFAULT_BASE, convert};
pub use error::{Result, XgetError};
pub use normalize::normalize;
