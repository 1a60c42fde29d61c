//! External Services
//!
//! This module contains services that interact with external systems:
//! - listing: background fetch of the folder/file listing

pub mod listing;

pub use listing::{ListingLoader, ListingResponse};
