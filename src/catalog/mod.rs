//! Command catalog for distructions.
//!
//! Holds the catalog data model, the project label lookup, and the
//! load-or-generate store that persists detected commands next to the project.

mod label;
pub mod store;
mod types;

pub use label::{label_from_remote_url, project_label, FALLBACK_LABEL};
pub use store::{CatalogStore, CATALOG_FILE_NAME};
pub use types::{Catalog, CommandEntry};
