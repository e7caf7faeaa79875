use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use memoria_core::{GameMode, GameSession};
use memoria_widgets::theme::Theme;

use crate::app::ScreenAction;
use crate::screens::Screen;

const TITLE_ART: [&str; 5] = [
    " __  __                           _       ",
    "|  \\/  | ___ _ __ ___   ___  _ __(_) __ _ ",
    "| |\\/| |/ _ \\ '_ ` _ \\ / _ \\| '__| |/ _` |",
    "| |  | |  __/ | | | | | (_) | |  | | (_| |",
    "|_|  |_|\\___|_| |_| |_|\\___/|_|  |_|\\__,_|",
];

pub struct ModeSelectScreen {
    pub selected: usize,
}

impl ModeSelectScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }
}

impl Screen for ModeSelectScreen {
    fn render(&mut self, frame: &mut Frame, session: &GameSession) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Percentage(28),
            Constraint::Length(9),
            Constraint::Percentage(30),
            Constraint::Min(3),
        ])
        .split(area);

        // Title - ASCII art
        let mut title_lines: Vec<Line> = TITLE_ART
            .iter()
            .map(|row| {
                Line::from(Span::styled(
                    *row,
                    Style::default()
                        .fg(Theme::GOLD)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        title_lines.push(Line::from(""));
        title_lines.push(Line::from(Span::styled(
            "O jogo da memória do Festival de Parintins",
            Style::default().fg(Theme::MUTED_TEXT),
        )));

        let title = Paragraph::new(title_lines).alignment(Alignment::Center);
        frame.render_widget(title, chunks[1]);

        // Menu options
        let menu_items = [GameMode::Normal.name(), GameMode::Duel.name(), "Sair"];
        let mut menu_lines = Vec::new();
        for (i, item) in menu_items.iter().enumerate() {
            let style = if i == self.selected {
                Style::default()
                    .fg(Theme::CARD_CURSOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::MUTED_TEXT)
            };
            let prefix = if i == self.selected { "> " } else { "  " };
            menu_lines.push(Line::from(Span::styled(
                format!("{}{}", prefix, item),
                style,
            )));
        }
        menu_lines.push(Line::from(""));

        let settings = session.settings();
        menu_lines.push(Line::from(Span::styled(
            format!(
                "Dificuldade: {}   Relógio: {}",
                settings.difficulty.name(),
                settings.timer_mode.name()
            ),
            Style::default().fg(Theme::DIM_TEXT),
        )));

        let menu = Paragraph::new(menu_lines).alignment(Alignment::Center);
        frame.render_widget(menu, chunks[2]);

        // Footer
        let footer = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("\u{2191}\u{2193}", Style::default().fg(Theme::GOLD)),
            Span::styled("] Navegar  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("Enter", Style::default().fg(Theme::GOLD)),
            Span::styled("] Escolher  [", Style::default().fg(Theme::DIM_TEXT)),
            Span::styled("q", Style::default().fg(Theme::GOLD)),
            Span::styled("] Sair", Style::default().fg(Theme::DIM_TEXT)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[3]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected < 2 {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                return match self.selected {
                    0 => Some(ScreenAction::SelectMode(GameMode::Normal)),
                    1 => Some(ScreenAction::SelectMode(GameMode::Duel)),
                    2 => Some(ScreenAction::Quit),
                    _ => None,
                };
            }
            KeyCode::Char('q') => return Some(ScreenAction::Quit),
            _ => {}
        }
        None
    }
}
