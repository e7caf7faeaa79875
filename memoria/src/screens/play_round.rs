use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use memoria_core::{
    format_mm_ss, star_rating, Difficulty, GameMode, GameSession, PendingChange, TimerMode,
};
use memoria_widgets::board::{BoardWidget, BOARD_COLS};
use memoria_widgets::popup::PopupWidget;
use memoria_widgets::ranking_table::RankingTableWidget;
use memoria_widgets::stats::StatsWidget;
use memoria_widgets::theme::Theme;

use crate::app::ScreenAction;

/// Seconds left on the countdown at which the clock turns red
const LOW_TIME_SECS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayTab {
    Game,
    Settings,
    Ranking,
}

impl PlayTab {
    pub const ALL: [PlayTab; 3] = [PlayTab::Game, PlayTab::Settings, PlayTab::Ranking];

    fn label(&self) -> &'static str {
        match self {
            PlayTab::Game => "Jogo",
            PlayTab::Settings => "Ajustes",
            PlayTab::Ranking => "Ranking",
        }
    }
}

const SETTINGS_ROWS: usize = 8;

pub struct PlayRoundScreen {
    pub tab: PlayTab,
    pub cursor: usize,
    pub settings_cursor: usize,
    pub confirm_selected: bool,
    board_area: Rect,
}

impl PlayRoundScreen {
    pub fn new() -> Self {
        Self {
            tab: PlayTab::Game,
            cursor: 0,
            settings_cursor: 0,
            confirm_selected: false,
            board_area: Rect::default(),
        }
    }

    pub fn reset(&mut self) {
        self.tab = PlayTab::Game;
        self.cursor = 0;
        self.board_area = Rect::default();
    }

    pub fn render(&mut self, frame: &mut Frame, session: &GameSession) {
        let area = frame.area();
        let bg = Block::default().style(Style::default().bg(Theme::ARENA));
        frame.render_widget(bg, area);

        // No popup on screen means no button to remember
        if session.pending_change().is_none() {
            self.confirm_selected = false;
        }

        let main_chunks = Layout::vertical([
            Constraint::Length(2), // Tab bar
            Constraint::Min(0),    // Tab content
            Constraint::Length(2), // Help
        ])
        .split(area);

        self.render_tab_bar(frame, session, main_chunks[0]);

        match self.tab {
            PlayTab::Game => self.render_game_tab(frame, session, main_chunks[1]),
            PlayTab::Settings => self.render_settings_tab(frame, session, main_chunks[1]),
            PlayTab::Ranking => self.render_ranking_tab(frame, session, main_chunks[1]),
        }

        self.render_help(frame, main_chunks[2]);

        // Confirmation popup over everything
        if let Some(change) = session.pending_change() {
            let popup = PopupWidget::new("Confirmar")
                .line(change.description(), Style::default().fg(Theme::BRIGHT_TEXT))
                .line(String::new(), Style::default())
                .buttons("Sim", "Não", self.confirm_selected)
                .accent(Theme::GOLD)
                .size(46, 28);
            frame.render_widget(popup, area);
        }
    }

    fn render_tab_bar(&self, frame: &mut Frame, session: &GameSession, area: Rect) {
        let bar_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Theme::CARD_BORDER));
        let inner = bar_block.inner(area);
        frame.render_widget(bar_block, area);

        let mut spans = vec![Span::styled("  ", Style::default())];
        for (i, tab) in PlayTab::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    " \u{2502} ",
                    Style::default().fg(Theme::CARD_BORDER),
                ));
            }
            let style = if *tab == self.tab {
                Style::default()
                    .fg(Theme::GOLD)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::MUTED_TEXT)
            };
            spans.push(Span::styled(tab.label(), style));
        }

        spans.push(Span::styled(
            format!("      {}", session.mode().name()),
            Style::default().fg(Theme::DIM_TEXT),
        ));
        if session.mode() == GameMode::Duel {
            if let Some(duel) = session.duel() {
                spans.push(Span::styled(
                    format!(" \u{2502} {}", duel.current_player().name),
                    Style::default().fg(Theme::BRIGHT_TEXT),
                ));
            }
        }
        if session.settings().music_enabled && session.is_running() {
            spans.push(Span::styled("  \u{266a}", Style::default().fg(Theme::GOLD)));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    }

    fn render_game_tab(&mut self, frame: &mut Frame, session: &GameSession, area: Rect) {
        let Some(board) = session.board() else {
            return;
        };

        let chunks = Layout::vertical([
            Constraint::Length(1), // Stats strip
            Constraint::Length(1),
            Constraint::Min(0),    // Board
            Constraint::Length(1), // Start hint
        ])
        .split(area);

        // === Stats strip ===
        let mut stats = StatsWidget::new(board.moves(), board.pairs_found(), board.pair_count())
            .stars(star_rating(board.moves(), board.pair_count()))
            .team(session.team());
        if let Some(timer) = session.timer() {
            let low = timer.mode() == TimerMode::Countdown
                && session.is_running()
                && timer.remaining() <= LOW_TIME_SECS;
            stats = stats.time(format_mm_ss(timer.display_value()), low);
        }
        frame.render_widget(stats, chunks[0]);

        // === Board ===
        self.board_area = chunks[2];
        let widget = BoardWidget::new(board).cursor(Some(self.cursor));
        frame.render_widget(widget, chunks[2]);

        // === Start hint ===
        if !session.is_running() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Pressione [Espaço] para começar",
                    Style::default()
                        .fg(Theme::GOLD)
                        .add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center),
                chunks[3],
            );
        }
    }

    fn render_settings_tab(&self, frame: &mut Frame, session: &GameSession, area: Rect) {
        let settings = session.settings();
        let on_off = |v: bool| if v { "Ligado" } else { "Desligado" };

        let rows: [(&str, String); SETTINGS_ROWS] = [
            ("Dificuldade", settings.difficulty.name().to_string()),
            ("Relógio", settings.timer_mode.name().to_string()),
            ("Início automático", on_off(settings.auto_start).to_string()),
            ("Ranking", on_off(settings.ranking_enabled).to_string()),
            ("Música", on_off(settings.music_enabled).to_string()),
            ("Sons", on_off(settings.sound_enabled).to_string()),
            ("Reiniciar partida", String::new()),
            ("Voltar ao menu", String::new()),
        ];

        let mut lines = vec![Line::from("")];
        for (i, (label, value)) in rows.iter().enumerate() {
            let selected = i == self.settings_cursor;
            let prefix = if selected { "> " } else { "  " };
            let label_style = if selected {
                Style::default()
                    .fg(Theme::CARD_CURSOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::MUTED_TEXT)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}{:<20}", prefix, label), label_style),
                Span::styled(
                    value.clone(),
                    Style::default().fg(Theme::BRIGHT_TEXT),
                ),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Mudar dificuldade ou relógio inicia um novo jogo",
            Style::default().fg(Theme::DIM_TEXT),
        )));

        let row = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(40),
            Constraint::Min(0),
        ])
        .split(area);
        frame.render_widget(Paragraph::new(lines), row[1]);
    }

    fn render_ranking_tab(&self, frame: &mut Frame, session: &GameSession, area: Rect) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(area);
        let table = RankingTableWidget::new(session.leaderboard().entries());
        frame.render_widget(table, chunks[1]);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let spans = match self.tab {
            PlayTab::Game => vec![
                Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("\u{2190}\u{2191}\u{2193}\u{2192}", Style::default().fg(Theme::GOLD)),
                Span::styled("] Mover  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("Espaço", Style::default().fg(Theme::GOLD)),
                Span::styled("] Virar  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("Tab", Style::default().fg(Theme::GOLD)),
                Span::styled("] Abas  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("r", Style::default().fg(Theme::GOLD)),
                Span::styled("] Reiniciar  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("Esc", Style::default().fg(Theme::GOLD)),
                Span::styled("] Menu", Style::default().fg(Theme::DIM_TEXT)),
            ],
            PlayTab::Settings => vec![
                Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("\u{2191}\u{2193}", Style::default().fg(Theme::GOLD)),
                Span::styled("] Navegar  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("\u{2190}\u{2192}", Style::default().fg(Theme::GOLD)),
                Span::styled("] Ajustar  [", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("Tab", Style::default().fg(Theme::GOLD)),
                Span::styled("] Abas", Style::default().fg(Theme::DIM_TEXT)),
            ],
            PlayTab::Ranking => vec![
                Span::styled("[", Style::default().fg(Theme::DIM_TEXT)),
                Span::styled("Tab", Style::default().fg(Theme::GOLD)),
                Span::styled("] Abas", Style::default().fg(Theme::DIM_TEXT)),
            ],
        };
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }

    pub fn handle_key(&mut self, key: KeyEvent, session: &GameSession) -> Option<ScreenAction> {
        // The confirmation popup owns the keyboard while it is up
        if session.pending_change().is_some() {
            match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                    self.confirm_selected = !self.confirm_selected;
                }
                KeyCode::Enter => {
                    return if self.confirm_selected {
                        Some(ScreenAction::ConfirmChange)
                    } else {
                        Some(ScreenAction::CancelChange)
                    };
                }
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    return Some(ScreenAction::ConfirmChange);
                }
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                    return Some(ScreenAction::CancelChange);
                }
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Tab => {
                let i = PlayTab::ALL.iter().position(|t| *t == self.tab).unwrap_or(0);
                self.tab = PlayTab::ALL[(i + 1) % PlayTab::ALL.len()];
                return None;
            }
            KeyCode::BackTab => {
                let i = PlayTab::ALL.iter().position(|t| *t == self.tab).unwrap_or(0);
                self.tab = PlayTab::ALL[(i + PlayTab::ALL.len() - 1) % PlayTab::ALL.len()];
                return None;
            }
            KeyCode::Char('1') => {
                self.tab = PlayTab::Game;
                return None;
            }
            KeyCode::Char('2') => {
                self.tab = PlayTab::Settings;
                return None;
            }
            KeyCode::Char('3') => {
                self.tab = PlayTab::Ranking;
                return None;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                return Some(ScreenAction::RequestChange(PendingChange::Restart));
            }
            KeyCode::Esc => {
                return Some(ScreenAction::RequestChange(PendingChange::LeaveToMenu));
            }
            _ => {}
        }

        match self.tab {
            PlayTab::Game => self.handle_game_key(key, session),
            PlayTab::Settings => self.handle_settings_key(key, session),
            PlayTab::Ranking => None,
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent, session: &GameSession) -> Option<ScreenAction> {
        let len = session.board().map(|b| b.len()).unwrap_or(0);
        if len == 0 {
            return None;
        }
        let cols = BOARD_COLS as usize;

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.cursor >= cols {
                    self.cursor -= cols;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + cols < len {
                    self.cursor += cols;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                return if session.is_running() {
                    Some(ScreenAction::Reveal(self.cursor))
                } else {
                    Some(ScreenAction::StartRound)
                };
            }
            _ => {}
        }
        None
    }

    fn handle_settings_key(&mut self, key: KeyEvent, session: &GameSession) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if self.settings_cursor > 0 {
                    self.settings_cursor -= 1;
                }
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.settings_cursor + 1 < SETTINGS_ROWS {
                    self.settings_cursor += 1;
                }
                None
            }
            KeyCode::Left | KeyCode::Char('h') => self.adjust_setting(session, -1),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => self.adjust_setting(session, 1),
            _ => None,
        }
    }

    fn adjust_setting(&self, session: &GameSession, step: i32) -> Option<ScreenAction> {
        let settings = session.settings();
        match self.settings_cursor {
            0 => {
                let all = Difficulty::ALL;
                let i = all
                    .iter()
                    .position(|d| *d == settings.difficulty)
                    .unwrap_or(0) as i32;
                let next = (i + step).clamp(0, all.len() as i32 - 1) as usize;
                Some(ScreenAction::RequestChange(PendingChange::Difficulty(
                    all[next],
                )))
            }
            1 => {
                let other = match settings.timer_mode {
                    TimerMode::Countdown => TimerMode::Elapsed,
                    TimerMode::Elapsed => TimerMode::Countdown,
                };
                Some(ScreenAction::RequestChange(PendingChange::TimerMode(other)))
            }
            2 => Some(ScreenAction::ToggleAutoStart),
            3 => Some(ScreenAction::ToggleRanking),
            4 => Some(ScreenAction::ToggleMusic),
            5 => Some(ScreenAction::ToggleSound),
            6 => Some(ScreenAction::RequestChange(PendingChange::Restart)),
            7 => Some(ScreenAction::RequestChange(PendingChange::LeaveToMenu)),
            _ => None,
        }
    }

    pub fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        session: &GameSession,
    ) -> Option<ScreenAction> {
        if session.pending_change().is_some() || self.tab != PlayTab::Game {
            return None;
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if !session.is_running() {
                return Some(ScreenAction::StartRound);
            }
            let board = session.board()?;
            let widget = BoardWidget::new(board);
            if let Some(i) = widget.hit_test(self.board_area, mouse.column, mouse.row) {
                self.cursor = i;
                return Some(ScreenAction::Reveal(i));
            }
        }
        None
    }
}
