//! Keyboard Input Handler
//!
//! Handles all keyboard input and dispatches it to the App methods of the
//! focused pane.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{FocusPane, VimCommandState};
use crate::{logic, App};

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Keys that behave the same in every pane
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.should_quit = true;
            return;
        }
        KeyCode::Char('q') => {
            app.model.ui.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.cycle_focus(true);
            return;
        }
        KeyCode::BackTab => {
            app.cycle_focus(false);
            return;
        }
        KeyCode::Char('r') => {
            app.refresh_listing();
            return;
        }
        KeyCode::Char(digit @ '1'..='9') => {
            if let Some(index) =
                logic::navigation::breadcrumb_index_for_digit(digit, app.model.navigation.depth())
            {
                app.navigate_breadcrumb(index);
            }
            return;
        }
        _ => {}
    }

    if app.model.ui.vim_mode && handle_vim_key(app, key) {
        return;
    }

    match app.model.ui.focus {
        FocusPane::Listing => handle_listing_key(app, key),
        FocusPane::Selected => handle_selected_key(app, key),
        FocusPane::Breadcrumbs => handle_breadcrumb_key(app, key),
    }
}

/// Vim motions on top of hjkl; returns true when the key was consumed
fn handle_vim_key(app: &mut App, key: KeyEvent) -> bool {
    if key.code != KeyCode::Char('g') {
        app.model.ui.vim_command_state = VimCommandState::None;
    }

    match key.code {
        KeyCode::Char('G') => app.jump_to_last(),
        KeyCode::Char('g') => {
            if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
                app.model.ui.vim_command_state = VimCommandState::None;
                app.jump_to_first();
            } else {
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }
        _ => return false,
    }
    true
}

fn handle_listing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.open_entry_under_cursor(),
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => app.go_to_parent(),
        KeyCode::Char(' ') => app.toggle_entry_under_cursor(),
        KeyCode::Char('a') => app.toggle_all(),
        _ => {}
    }
}

fn handle_selected_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),
        KeyCode::Char(' ') => app.mark_record_under_cursor(),
        KeyCode::Char('a') => app.toggle_all(),
        KeyCode::Char('x') | KeyCode::Delete => app.commit_removal(),
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => app.go_to_parent(),
        _ => {}
    }
}

fn handle_breadcrumb_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') => app.step_breadcrumb_cursor(false),
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') => app.step_breadcrumb_cursor(true),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let index = app.model.ui.breadcrumb_cursor;
            app.navigate_breadcrumb(index);
        }
        _ => {}
    }
}
