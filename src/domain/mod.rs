//! Domain layer
//!
//! Plain data types shared by the rest of the crate.

pub mod models;
