//! Lookbook: the result data model behind the runway feed.
//!
//! Identifiers come back from the search endpoint as opaque, percent-encoded
//! paths. Everything here is derived from them: the merged result list, the
//! designer facets, the filtered view and the card labels.

pub mod schema;
pub mod aggregate;
pub mod facets;
pub mod filter;
pub mod label;

pub use schema::*;
pub use aggregate::*;
pub use facets::*;
pub use filter::*;
pub use label::*;
