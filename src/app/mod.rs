//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule contains methods that orchestrate between:
//! - Model state (pure, in the library's `model`)
//! - Services (listing loader)
//! - Logic (pure business logic in the library's `logic`)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod navigation;
pub(crate) mod selection;
