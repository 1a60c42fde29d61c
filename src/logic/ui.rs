//! UI state transition logic
//!
//! Pure functions for transient UI state.

use crate::model::ToastLevel;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Whether a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use backuptui::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(0));
/// assert!(should_dismiss_toast(1500));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Toast after committing staged removals
pub fn removal_toast(removed: usize) -> (String, ToastLevel) {
    match removed {
        0 => ("Nothing marked for removal".to_string(), ToastLevel::Notice),
        1 => ("Removed 1 item from backup set".to_string(), ToastLevel::Success),
        n => (format!("Removed {} items from backup set", n), ToastLevel::Success),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_boundary() {
        assert!(!should_dismiss_toast(1499));
        assert!(should_dismiss_toast(1501));
    }

    #[test]
    fn test_removal_toast_wording() {
        assert_eq!(
            removal_toast(0),
            ("Nothing marked for removal".to_string(), ToastLevel::Notice)
        );
        assert_eq!(removal_toast(1).0, "Removed 1 item from backup set");
        assert_eq!(removal_toast(3).0, "Removed 3 items from backup set");
        assert_eq!(removal_toast(3).1, ToastLevel::Success);
    }
}
