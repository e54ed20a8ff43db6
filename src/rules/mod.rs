//! Rule matching and path transformation for xget.
//!
//! This module handles:
//! - Host and predicate matching of a URL against the ordered rule table
//! - Deriving the path emitted after a rule's prefix

pub mod matcher;
pub mod transform;

pub use matcher::{compile_regex, find_matching_rule, host_accepted};
pub use transform::{strip_leading_slash, transform_path};
