//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - listing: listing fetch results from the background loader
//! - keyboard: User keyboard input

pub mod keyboard;
pub mod listing;

// Re-export for convenience
pub use keyboard::handle_key;
pub use listing::handle_listing_response;
