//! # Song Catalog
//!
//! The catalog owns every song record for the lifetime of the process.
//!
//! - Ids are generated by the catalog, never supplied by callers
//! - An id stays attached to its record until the record is deleted
//! - Updates replace all fields except the id
//! - Album references are stored as given and never resolved

pub mod errors;
pub mod ids;
pub mod model;
pub mod store;

pub use errors::{CatalogError, CatalogResult};
pub use ids::{IdGenerator, NanoIdGenerator, SONG_ID_LENGTH};
pub use model::{Song, SongPayload};
pub use store::SongStore;
