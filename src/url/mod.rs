//! URL handling module for Link-Harvest
//!
//! This module provides domain extraction, root URL parsing and the
//! external-link validation used when collecting anchors from the root page.

mod domain;
mod validate;

// Re-export main functions
pub use domain::extract_domain;
pub use validate::{external_href, is_external_link, parse_root_url};
