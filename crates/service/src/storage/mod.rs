//! Storage abstractions for the service layer.
//!
//! `MapStore` is the in-memory backing shared by every map service.

pub mod map_store;

pub use map_store::MapStore;
