//! Helpers shared by the petclinic binary and its crates.

pub mod utils;
