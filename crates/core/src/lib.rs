//! Domain policy layer for the camps API.
//!
//! Pure types and functions shared by the database and HTTP crates: the
//! error taxonomy, media-type negotiation, and hypermedia link assembly.
//! Nothing in this crate performs I/O.

pub mod error;
pub mod links;
pub mod media;
pub mod types;
