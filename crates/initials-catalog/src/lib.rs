//! css-initials property catalog
//!
//! Loads CSS property metadata (one record per property, in the shape of the
//! `mdn-data` `css/properties.json` file) into an ordered, read-only catalog.
//! Source order is preserved so everything derived from the catalog is
//! byte-for-byte reproducible.
//!
//! # Example
//!
//! ```
//! use initials_catalog::PropertyCatalog;
//!
//! let catalog = PropertyCatalog::from_json(
//!     r#"{ "display": { "status": "standard", "initial": "inline", "inherited": false } }"#,
//! )
//! .unwrap();
//! assert_eq!(catalog.len(), 1);
//! ```

pub mod catalog;
pub mod record;

pub use catalog::PropertyCatalog;
pub use record::{InitialValue, PropertyRecord, Status};

use std::path::PathBuf;

/// Error raised while reading or parsing a property catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog bundle has no `css.properties` object")]
    MissingProperties,
}
