use ratatui::style::{palette::tailwind, Color, Modifier, Style};

/// Brand purple used for the title bar and the selected entry
pub const GOPHER_PURPLE: Color = Color::Rgb(0x7D, 0x56, 0xF4);

/// Application theme - centralized color and style management
///
/// Built once at startup and only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Title bar
    pub title_fg: Color,
    pub title_bg: Color,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,

    // Cursor marker for the selected entry
    pub cursor_marker: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::gopher()
    }
}

impl Theme {
    /// Default theme, purple on the terminal's own background
    pub fn gopher() -> Self {
        Self {
            title_fg: Color::Rgb(0xFA, 0xFA, 0xFA),
            title_bg: GOPHER_PURPLE,

            text_primary: Color::Reset,
            text_muted: Color::Rgb(0x62, 0x62, 0x62),

            accent_primary: GOPHER_PURPLE,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,

            cursor_marker: "►",
        }
    }

    // Prebuilt styles for common use cases

    /// Style for the title bar
    pub fn title(&self) -> Style {
        Style::default().fg(self.title_fg).bg(self.title_bg)
    }

    /// Style for the entry under the cursor
    pub fn selected_item(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for all other entries
    pub fn item(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for entry descriptions
    pub fn description(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for the key hints line
    pub fn help(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for a successful status message
    pub fn status_success(&self) -> Style {
        Style::default().fg(self.status_success)
    }

    /// Style for a failed status message
    pub fn status_error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }
}
