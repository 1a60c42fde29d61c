//! Cursor movement logic
//!
//! Pure functions for moving table cursors with wrapping behavior.

/// Calculate the next cursor index with wrapping
///
/// # Examples
/// ```
/// use backuptui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous cursor index with wrapping
///
/// # Examples
/// ```
/// use backuptui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(1), 3), Some(0));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) if i >= list_len => list_len - 1,
        Some(i) => i - 1,
    })
}

/// Keep a cursor inside `0..list_len`, selecting the first row of a
/// non-empty list when nothing is selected
///
/// # Examples
/// ```
/// use backuptui::logic::navigation::clamp_cursor;
///
/// assert_eq!(clamp_cursor(Some(4), 0), None);
/// assert_eq!(clamp_cursor(Some(4), 2), Some(1));
/// assert_eq!(clamp_cursor(None, 2), Some(0));
/// ```
pub fn clamp_cursor(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}

/// Move a breadcrumb cursor one segment left or right without wrapping
pub fn step_breadcrumb(current: usize, depth: usize, forward: bool) -> usize {
    if forward {
        (current + 1).min(depth.saturating_sub(1))
    } else {
        current.saturating_sub(1)
    }
}

/// Map a digit key to a breadcrumb index ('1' is the root)
pub fn breadcrumb_index_for_digit(digit: char, depth: usize) -> Option<usize> {
    let n = digit.to_digit(10)? as usize;
    if n == 0 || n > depth {
        None
    } else {
        Some(n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_wrapping() {
        assert_eq!(next_selection(Some(4), 5), Some(0));
        assert_eq!(next_selection(Some(0), 1), Some(0));
        assert_eq!(next_selection(Some(10), 3), Some(0));
    }

    #[test]
    fn test_prev_selection_out_of_bounds() {
        // a cursor left behind by a shrinking list lands on the last row
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_clamp_cursor_keeps_valid_index() {
        assert_eq!(clamp_cursor(Some(1), 3), Some(1));
        assert_eq!(clamp_cursor(None, 0), None);
    }

    #[test]
    fn test_step_breadcrumb_bounds() {
        assert_eq!(step_breadcrumb(0, 3, false), 0);
        assert_eq!(step_breadcrumb(0, 3, true), 1);
        assert_eq!(step_breadcrumb(2, 3, true), 2);
        assert_eq!(step_breadcrumb(0, 1, true), 0);
    }

    #[test]
    fn test_breadcrumb_digits() {
        assert_eq!(breadcrumb_index_for_digit('1', 1), Some(0));
        assert_eq!(breadcrumb_index_for_digit('3', 3), Some(2));
        assert_eq!(breadcrumb_index_for_digit('4', 3), None);
        assert_eq!(breadcrumb_index_for_digit('0', 3), None);
        assert_eq!(breadcrumb_index_for_digit('x', 3), None);
    }
}
