//! Validation result persistence and static documentation.
//!
//! - [`ValidationStore`]: append-only JSON store of checkpoint runs
//! - [`SiteBuilder`]: renders stored runs into a static HTML site

pub mod error;
pub mod site;
pub mod store;

pub use error::DocsError;
pub use site::SiteBuilder;
pub use store::ValidationStore;
