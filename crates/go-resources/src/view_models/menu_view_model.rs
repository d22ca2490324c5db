//! Menu View Model
//!
//! Turns the menu state into styled text. Pure: the same state always
//! produces the same text.

use ratatui::{
    style::Style,
    text::{Line, Span, Text},
};

use crate::command_id::CommandId;
use crate::layout::{HEADER_HEIGHT, ROW_PITCH};
use crate::state::{AppState, StatusKind};

const TITLE: &str = "🐹 Go Resources - Select a resource to learn Go";

/// Commands listed in the help line, in display order
const HINT_COMMANDS: [CommandId; 4] = [
    CommandId::NavigatePrevious,
    CommandId::NavigateNext,
    CommandId::Confirm,
    CommandId::GlobalQuit,
];

/// One catalog entry as drawn on screen
#[derive(Debug, Clone, PartialEq)]
pub struct EntryViewModel {
    /// "  ► Go.dev" or "    Go.dev"
    pub label: String,
    pub label_style: Style,
    pub description: String,
    pub description_style: Style,
}

/// View model for rendering the whole menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuViewModel {
    pub title: String,
    pub title_style: Style,
    /// e.g. "↑/k up • ↓/j down • enter/space open • q/esc/ctrl+c quit"
    pub hints: String,
    pub hints_style: Style,
    pub entries: Vec<EntryViewModel>,
    pub status: Option<(String, Style)>,
}

impl MenuViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;

        let hints = HINT_COMMANDS
            .iter()
            .filter_map(|command| {
                state
                    .keymap
                    .compact_hint_for_command(*command)
                    .map(|hint| format!("{} {}", hint, command.label()))
            })
            .collect::<Vec<_>>()
            .join(" • ");

        let entries = state
            .catalog
            .iter()
            .enumerate()
            .map(|(i, resource)| {
                let selected = i == state.menu.cursor;
                let (label, label_style) = if selected {
                    (
                        format!("  {} {}", theme.cursor_marker, resource.name),
                        theme.selected_item(),
                    )
                } else {
                    (format!("    {}", resource.name), theme.item())
                };
                EntryViewModel {
                    label,
                    label_style,
                    description: format!("      {}", resource.description),
                    description_style: theme.description(),
                }
            })
            .collect();

        let status = state.menu.last_message.as_ref().map(|message| {
            let style = match message.kind {
                StatusKind::Success => theme.status_success(),
                StatusKind::Error => theme.status_error(),
            };
            (message.text.clone(), style)
        });

        Self {
            title: format!(" {} ", TITLE),
            title_style: theme.title(),
            hints,
            hints_style: theme.help(),
            entries,
            status,
        }
    }

    /// Lay the view model out line by line
    ///
    /// Entry `i` starts at line `HEADER_HEIGHT + i * ROW_PITCH`.
    pub fn to_text(&self) -> Text<'static> {
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(
            usize::from(HEADER_HEIGHT) + self.entries.len() * usize::from(ROW_PITCH) + 2,
        );

        lines.push(Line::from(Span::styled(self.title.clone(), self.title_style)));
        lines.push(Line::from(Span::styled(self.hints.clone(), self.hints_style)));
        lines.push(Line::default());

        for entry in &self.entries {
            lines.push(Line::from(Span::styled(entry.label.clone(), entry.label_style)));
            lines.push(Line::from(Span::styled(
                entry.description.clone(),
                entry.description_style,
            )));
            lines.push(Line::default());
        }

        // Status sits one blank line below the last entry's separator
        if let Some((text, style)) = &self.status {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(text.clone(), *style)));
        }

        Text::from(lines)
    }
}
