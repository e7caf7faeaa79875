use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use memoria_core::{format_mm_ss, GameSession, SessionPhase};
use memoria_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

/// End-of-round screen for both outcomes: the countdown running out
/// and a win that skips the name prompt.
pub struct RoundOverScreen;

impl RoundOverScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for RoundOverScreen {
    fn render(&mut self, frame: &mut Frame, session: &GameSession) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Percentage(30),
            Constraint::Length(10),
            Constraint::Percentage(30),
            Constraint::Min(3),
        ])
        .split(area);

        let won = session.phase() == SessionPhase::RoundSummary;
        let (title, title_color) = if won {
            match session.team() {
                Some(team) => (
                    format!("Vitória do {}!", team.name()),
                    Theme::team_color(team),
                ),
                None => ("VITÓRIA!".to_string(), Theme::GOLD),
            }
        } else {
            ("TEMPO ESGOTADO!".to_string(), Theme::CLOCK_LOW)
        };

        let mut lines = vec![
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(title_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if let Some(result) = session.last_result() {
            if won {
                let filled = result.stars.min(3) as usize;
                lines.push(Line::from(vec![
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
                    format!("Pontos: {}", result.score),
                    Style::default()
                        .fg(Theme::SCORE_COLOR)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    "Mais sorte na próxima!",
                    Style::default().fg(Theme::MUTED_TEXT),
                )));
            }
            lines.push(Line::from(Span::styled(
                format!("Jogadas: {}", result.moves),
                Style::default().fg(Theme::BRIGHT_TEXT),
            )));
            lines.push(Line::from(Span::styled(
                format!("Tempo: {}", format_mm_ss(result.time_secs)),
                Style::default().fg(Theme::CLOCK_COLOR),
            )));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "[Enter] Continuar",
            Style::default().fg(Theme::GOLD),
        )));

        let content = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(content, chunks[1]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => Some(ScreenAction::Acknowledge),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(ScreenAction::Quit),
            _ => None,
        }
    }
}
