use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use memoria_core::{format_mm_ss, GameSession};
use memoria_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

const NAME_LIMIT: usize = 20;

/// Prompt for the winner's name before the score enters the ranking
pub struct NameEntryScreen {
    pub input: String,
}

impl NameEntryScreen {
    pub fn new() -> Self {
        Self {
            input: String::new(),
        }
    }

    pub fn set_input(&mut self, name: &str) {
        self.input = name.to_string();
    }
}

impl Screen for NameEntryScreen {
    fn render(&mut self, frame: &mut Frame, session: &GameSession) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Percentage(25),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Percentage(25),
            Constraint::Min(3),
        ])
        .split(area);

        // === Result recap ===
        let mut lines = vec![Line::from(Span::styled(
            "Entrar para o ranking",
            Style::default()
                .fg(Theme::GOLD)
                .add_modifier(Modifier::BOLD),
        ))];
        lines.push(Line::from(""));
        if let Some(result) = session.last_result() {
            let filled = result.stars.min(3) as usize;
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} pontos  ", result.score),
                    Style::default()
                        .fg(Theme::SCORE_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "\u{2605}".repeat(filled),
                    Style::default().fg(Theme::STAR_COLOR),
                ),
                Span::styled(
                    "\u{2606}".repeat(3 - filled),
                    Style::default().fg(Theme::DIM_TEXT),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "{} jogadas em {}",
                    result.moves,
                    format_mm_ss(result.time_secs)
                ),
                Style::default().fg(Theme::MUTED_TEXT),
            )));
        }
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            chunks[1],
        );

        // === Input box ===
        let row = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(30),
            Constraint::Min(0),
        ])
        .split(chunks[2]);

        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Theme::GOLD))
            .title(Span::styled(" Nome ", Style::default().fg(Theme::MUTED_TEXT)));
        let inner = input_block.inner(row[1]);
        frame.render_widget(input_block, row[1]);

        let input_line = Line::from(vec![
            Span::styled(
                self.input.clone(),
                Style::default().fg(Theme::BRIGHT_TEXT),
            ),
            Span::styled("\u{258c}", Style::default().fg(Theme::CARD_CURSOR)),
        ]);
        frame.render_widget(Paragraph::new(input_line), inner);

        // Footer
        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Enter", Style::default().fg(Theme::GOLD)),
            Span::styled("] Salvar  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Tab", Style::default().fg(Theme::GOLD)),
            Span::styled("] Outro nome  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Esc", Style::default().fg(Theme::GOLD)),
            Span::styled("] Pular", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[4]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Enter => Some(ScreenAction::SubmitName(self.input.clone())),
            KeyCode::Esc => Some(ScreenAction::SkipRanking),
            KeyCode::Tab => Some(ScreenAction::RegenerateName),
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) => {
                if !c.is_control() && self.input.chars().count() < NAME_LIMIT {
                    self.input.push(c);
                }
                None
            }
            _ => None,
        }
    }
}
