use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::model::CheckboxState;

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📁, 📄, etc.)
    NerdFont, // Nerd Fonts icons (U+F07B, etc.)
}

impl IconMode {
    pub fn from_config(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "nerdfont" | "nerd" | "nf" => IconMode::NerdFont,
            _ => IconMode::Emoji,
        }
    }
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub folder_color: Color,
    pub file_color: Color,
    pub checked_color: Color,
    pub unchecked_color: Color,
    pub partial_color: Color,
    pub marked_color: Color,
    pub toolbar_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            folder_color: Color::Blue,
            file_color: Color::Cyan,
            checked_color: Color::Green,
            unchecked_color: Color::Gray,
            partial_color: Color::Yellow,
            marked_color: Color::Red,
            toolbar_color: Color::Magenta,
        }
    }
}

/// Icon renderer that handles both emoji and Nerd Font modes
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    /// Icon in front of a listing or backup-set name
    pub fn entry(&self, is_folder: bool) -> Span<'static> {
        let (glyph, color) = match (self.mode, is_folder) {
            (IconMode::Emoji, true) => ("📁 ", self.theme.folder_color),
            (IconMode::Emoji, false) => ("📄 ", self.theme.file_color),
            (IconMode::NerdFont, true) => ("\u{f07b} ", self.theme.folder_color),
            (IconMode::NerdFont, false) => ("\u{f15b} ", self.theme.file_color),
        };
        Span::styled(glyph, Style::default().fg(color))
    }

    /// Two-state row checkbox
    pub fn checkbox(&self, checked: bool) -> Span<'static> {
        if checked {
            self.tri_state(CheckboxState::Checked)
        } else {
            self.tri_state(CheckboxState::Unchecked)
        }
    }

    /// The "select all" checkbox; the partial mark appears only for
    /// `Indeterminate`
    pub fn tri_state(&self, state: CheckboxState) -> Span<'static> {
        let glyph = match (self.mode, state) {
            (IconMode::Emoji, CheckboxState::Checked) => "[x]",
            (IconMode::Emoji, CheckboxState::Unchecked) => "[ ]",
            (IconMode::Emoji, CheckboxState::Indeterminate) => "[-]",
            (IconMode::NerdFont, CheckboxState::Checked) => "\u{f14a}",
            (IconMode::NerdFont, CheckboxState::Unchecked) => "\u{f096}",
            (IconMode::NerdFont, CheckboxState::Indeterminate) => "\u{f146}",
        };
        let color = match state {
            CheckboxState::Checked => self.theme.checked_color,
            CheckboxState::Unchecked => self.theme.unchecked_color,
            CheckboxState::Indeterminate => self.theme.partial_color,
        };
        Span::styled(glyph, Style::default().fg(color).add_modifier(Modifier::BOLD))
    }

    /// Checkbox of a backup-set row (marked for removal or not)
    pub fn removal_mark(&self, marked: bool) -> Span<'static> {
        let glyph = match (self.mode, marked) {
            (IconMode::Emoji, true) => "[x]",
            (IconMode::Emoji, false) => "[ ]",
            (IconMode::NerdFont, true) => "\u{f14a}",
            (IconMode::NerdFont, false) => "\u{f096}",
        };
        let color = if marked {
            self.theme.marked_color
        } else {
            self.theme.unchecked_color
        };
        Span::styled(glyph, Style::default().fg(color))
    }

    /// Glyph next to the "select all" checkbox: a minus only while partial
    pub fn aggregate_hint(&self, state: CheckboxState) -> Span<'static> {
        let glyph = match (self.mode, state.is_indeterminate()) {
            (IconMode::Emoji, true) => " ➖ ",
            (IconMode::Emoji, false) => " ✔ ",
            (IconMode::NerdFont, true) => " \u{f068} ",
            (IconMode::NerdFont, false) => " \u{f00c} ",
        };
        Span::styled(glyph, Style::default().fg(self.theme.partial_color))
    }

    pub fn home(&self) -> Span<'static> {
        self.toolbar(match self.mode {
            IconMode::Emoji => "🏠 ",
            IconMode::NerdFont => "\u{f015} ",
        })
    }

    pub fn archive(&self) -> Span<'static> {
        self.toolbar(match self.mode {
            IconMode::Emoji => "🗄 ",
            IconMode::NerdFont => "\u{f187} ",
        })
    }

    pub fn search(&self) -> Span<'static> {
        self.toolbar(match self.mode {
            IconMode::Emoji => "🔍 ",
            IconMode::NerdFont => "\u{f002} ",
        })
    }

    pub fn plus(&self) -> Span<'static> {
        self.toolbar(match self.mode {
            IconMode::Emoji => "➕ ",
            IconMode::NerdFont => "\u{f067} ",
        })
    }

    fn toolbar(&self, glyph: &'static str) -> Span<'static> {
        Span::styled(glyph, Style::default().fg(self.theme.toolbar_color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_mode_from_config() {
        assert_eq!(IconMode::from_config("NerdFont"), IconMode::NerdFont);
        assert_eq!(IconMode::from_config("nf"), IconMode::NerdFont);
        assert_eq!(IconMode::from_config("emoji"), IconMode::Emoji);
        assert_eq!(IconMode::from_config("bogus"), IconMode::Emoji);
    }

    #[test]
    fn test_partial_mark_only_when_indeterminate() {
        let icons = IconRenderer::new(IconMode::Emoji, IconTheme::default());
        assert_eq!(icons.tri_state(CheckboxState::Indeterminate).content, "[-]");
        assert_eq!(icons.tri_state(CheckboxState::Checked).content, "[x]");
        assert_eq!(icons.tri_state(CheckboxState::Unchecked).content, "[ ]");
        assert!(icons.aggregate_hint(CheckboxState::Indeterminate).content.contains('➖'));
        assert!(!icons.aggregate_hint(CheckboxState::Checked).content.contains('➖'));
    }
}
