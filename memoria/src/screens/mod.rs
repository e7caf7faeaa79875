pub mod duel_results;
pub mod mode_select;
pub mod name_entry;
pub mod play_round;
pub mod round_over;
pub mod team_select;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::app::ScreenAction;
use memoria_core::GameSession;

/// Trait for game screens
pub trait Screen {
    fn render(&mut self, frame: &mut Frame, session: &GameSession);
    fn handle_key(&mut self, key: KeyEvent) -> Option<ScreenAction>;
}
