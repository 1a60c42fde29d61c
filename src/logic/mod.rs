//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Listing fetch failure classification
//! - formatting: Timestamps, placeholders and name truncation
//! - navigation: Cursor and breadcrumb movement
//! - rows: Table rows built from the model
//! - ui: Toast timing and wording

pub mod errors;
pub mod formatting;
pub mod navigation;
pub mod rows;
pub mod ui;
