//! Service layer for the clinic records.
//! - `storage`: the generic in-memory `MapStore`.
//! - `services`: contracts callers depend on.
//! - `map`: map-backed implementations of those contracts.
//! - `clinic` / `bootstrap`: wiring and start-up data.

pub mod errors;
pub mod storage;
pub mod services;
pub mod map;
pub mod clinic;
pub mod bootstrap;

pub use clinic::Clinic;
