use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use memoria_core::{GameMode, GameSession, Team};
use memoria_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

pub struct TeamSelectScreen {
    pub cursor: usize, // 0=Garantido, 1=Caprichoso
}

impl TeamSelectScreen {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    fn render_team_panel(&self, frame: &mut Frame, team: Team, selected: bool, area: Rect) {
        let color = Theme::team_color(team);
        let border_type = if selected {
            BorderType::Double
        } else {
            BorderType::Rounded
        };
        let border_color = if selected { color } else { Theme::CARD_BORDER };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(Theme::PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "\u{25CF} \u{25CF} \u{25CF}",
                Style::default().fg(color),
            )),
            Line::from(""),
            Line::from(Span::styled(
                team.name(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                team.color_name(),
                Style::default().fg(Theme::MUTED_TEXT),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
    }
}

impl Screen for TeamSelectScreen {
    fn render(&mut self, frame: &mut Frame, session: &GameSession) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Percentage(22),
            Constraint::Length(2),
            Constraint::Length(11),
            Constraint::Min(3),
        ])
        .split(area);

        // Title: in a duel, name whose pick this is
        let title = match (session.mode(), session.duel()) {
            (GameMode::Duel, Some(duel)) => {
                format!("{}, escolha seu boi", duel.current_player().name)
            }
            _ => "Escolha seu boi".to_string(),
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center),
            chunks[1],
        );

        // Two team panels side by side
        let row = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(26),
            Constraint::Length(4),
            Constraint::Length(26),
            Constraint::Min(0),
        ])
        .split(chunks[2]);

        self.render_team_panel(frame, Team::Garantido, self.cursor == 0, row[1]);
        self.render_team_panel(frame, Team::Caprichoso, self.cursor == 1, row[3]);

        // Footer
        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("\u{2190}\u{2192}", Style::default().fg(Theme::GOLD)),
            Span::styled("] Navegar  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Enter", Style::default().fg(Theme::GOLD)),
            Span::styled("] Confirmar", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[3]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = 0;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor = 1;
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                return Some(ScreenAction::SelectTeam(Team::Garantido));
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                return Some(ScreenAction::SelectTeam(Team::Caprichoso));
            }
            KeyCode::Enter => {
                return Some(ScreenAction::SelectTeam(Team::ALL[self.cursor]));
            }
            _ => {}
        }
        None
    }
}
