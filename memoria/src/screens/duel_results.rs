use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use memoria_core::duel::DuelPlayer;
use memoria_core::{format_mm_ss, DuelOutcome, GameSession};
use memoria_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

pub struct DuelResultsScreen;

impl DuelResultsScreen {
    pub fn new() -> Self {
        Self
    }

    fn render_player_panel(
        &self,
        frame: &mut Frame,
        player: &DuelPlayer,
        highlight: bool,
        area: Rect,
    ) {
        let accent = player
            .team
            .map(Theme::team_color)
            .unwrap_or(Theme::MUTED_TEXT);
        let (border_type, border_color) = if highlight {
            (BorderType::Double, Theme::GOLD)
        } else {
            (BorderType::Rounded, Theme::CARD_BORDER)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(Theme::PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                player.name.clone(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                player
                    .team
                    .map(|t| t.name())
                    .unwrap_or("Sem boi")
                    .to_string(),
                Style::default().fg(Theme::MUTED_TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("{}", player.score),
                Style::default()
                    .fg(Theme::SCORE_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "pontos",
                Style::default().fg(Theme::DIM_TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} jogadas", player.moves),
                Style::default().fg(Theme::BRIGHT_TEXT),
            )),
            Line::from(Span::styled(
                format_mm_ss(player.time_secs),
                Style::default().fg(Theme::CLOCK_COLOR),
            )),
        ];
        if !player.completed {
            lines.push(Line::from(Span::styled(
                "não terminou",
                Style::default().fg(Theme::DIM_TEXT),
            )));
        }

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}

impl Screen for DuelResultsScreen {
    fn render(&mut self, frame: &mut Frame, session: &GameSession) {
        let area = frame.area();
        let Some(duel) = session.duel() else {
            return;
        };

        let chunks = Layout::vertical([
            Constraint::Percentage(15),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Length(2),
            Constraint::Min(3),
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Resultado do duelo",
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            chunks[1],
        );

        let outcome = duel.outcome();
        let row = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(26),
            Constraint::Length(6),
            Constraint::Length(26),
            Constraint::Min(0),
        ])
        .split(chunks[2]);

        for (i, player) in duel.players().iter().enumerate() {
            let highlight = outcome == Some(DuelOutcome::Winner(i));
            let panel_area = if i == 0 { row[1] } else { row[3] };
            self.render_player_panel(frame, player, highlight, panel_area);
        }

        // Outcome banner
        let banner = match outcome {
            Some(DuelOutcome::Winner(i)) => {
                let winner = &duel.players()[i];
                let color = winner
                    .team
                    .map(Theme::team_color)
                    .unwrap_or(Theme::GOLD);
                Line::from(Span::styled(
                    format!("Vitória de {}!", winner.name),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
            }
            Some(DuelOutcome::Tie) => Line::from(Span::styled(
                "Empate!",
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD),
            )),
            None => Line::from(""),
        };
        frame.render_widget(
            Paragraph::new(banner).alignment(Alignment::Center),
            chunks[3],
        );

        // Footer
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "[Enter] Continuar",
                Style::default().fg(Theme::GOLD),
            )))
            .alignment(Alignment::Center),
            chunks[4],
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => Some(ScreenAction::Acknowledge),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(ScreenAction::Quit),
            _ => None,
        }
    }
}
