use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Widget};

use crate::theme::Theme;

/// A centered popup overlay. With `buttons` set it doubles as the yes/no
/// confirmation dialog.
pub struct PopupWidget {
    pub title: String,
    pub lines: Vec<(String, Style)>,
    pub width_percent: u16,
    pub height_percent: u16,
    pub accent: Color,
    /// (confirm label, cancel label, confirm selected)
    pub buttons: Option<(String, String, bool)>,
}

impl PopupWidget {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            width_percent: 60,
            height_percent: 40,
            accent: Theme::GOLD,
            buttons: None,
        }
    }

    pub fn line(mut self, text: impl Into<String>, style: Style) -> Self {
        self.lines.push((text.into(), style));
        self
    }

    pub fn size(mut self, width_percent: u16, height_percent: u16) -> Self {
        self.width_percent = width_percent;
        self.height_percent = height_percent;
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    pub fn buttons(
        mut self,
        confirm: impl Into<String>,
        cancel: impl Into<String>,
        confirm_selected: bool,
    ) -> Self {
        self.buttons = Some((confirm.into(), cancel.into(), confirm_selected));
        self
    }
}

impl Widget for PopupWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect(self.width_percent, self.height_percent, area);

        Clear.render(popup_area, buf);

        let title_line = Line::from(Span::styled(
            format!(" {} ", self.title),
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
        ));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(self.accent))
            .title(title_line)
            .title_alignment(Alignment::Center)
            .padding(Padding::uniform(1))
            .style(Style::default().bg(Theme::PANEL_BG));

        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        for (i, (text, style)) in self.lines.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let width = text.chars().count() as u16;
            let x = inner.x + inner.width.saturating_sub(width) / 2;
            buf.set_string(x, y, text, *style);
        }

        if let Some((confirm, cancel, confirm_selected)) = &self.buttons {
            let selected = Style::default()
                .fg(Theme::BG)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD);
            let idle = Style::default().fg(Theme::MUTED_TEXT);

            let confirm_text = format!("[ {} ]", confirm);
            let cancel_text = format!("[ {} ]", cancel);
            let total = (confirm_text.chars().count() + cancel_text.chars().count() + 4) as u16;
            let y = inner.bottom().saturating_sub(1);
            let x = inner.x + inner.width.saturating_sub(total) / 2;

            let (confirm_style, cancel_style) = if *confirm_selected {
                (selected, idle)
            } else {
                (idle, selected)
            };
            buf.set_string(x, y, &confirm_text, confirm_style);
            buf.set_string(
                x + confirm_text.chars().count() as u16 + 4,
                y,
                &cancel_text,
                cancel_style,
            );
        }
    }
}

/// Helper to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
