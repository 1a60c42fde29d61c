//! Backup Set TUI Library
//!
//! Exposes the listing client, the pure model and the business logic
//! for testing

pub mod api;
pub mod logic;
pub mod model;
