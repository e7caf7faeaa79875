use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::Frame;
use time::OffsetDateTime;

use memoria_core::{
    GameMode, GameSession, Leaderboard, PendingChange, SessionEvent, SessionPhase, Team,
};

use crate::effects::{self, FxManager};
use crate::screens::duel_results::DuelResultsScreen;
use crate::screens::mode_select::ModeSelectScreen;
use crate::screens::name_entry::NameEntryScreen;
use crate::screens::play_round::PlayRoundScreen;
use crate::screens::round_over::RoundOverScreen;
use crate::screens::team_select::TeamSelectScreen;
use crate::screens::Screen;
use crate::sound::SoundBoard;
use crate::storage::FileStore;

/// Main application state. The session owns the rules; the app routes
/// input to it and its events out to sound and effects.
pub struct App {
    pub session: GameSession,
    pub store: FileStore,
    pub sound: SoundBoard,
    pub tick: u64,
    pub fx: FxManager,
    prev_phase: Option<SessionPhase>,

    // Screens
    pub mode_select: ModeSelectScreen,
    pub team_select: TeamSelectScreen,
    pub play_round: PlayRoundScreen,
    pub round_over: RoundOverScreen,
    pub name_entry: NameEntryScreen,
    pub duel_results: DuelResultsScreen,
}

impl App {
    pub fn new() -> Self {
        let store = FileStore::new();
        let leaderboard = Leaderboard::load(&store);
        let session = GameSession::new(leaderboard);
        let sound = SoundBoard::new(
            session.settings().sound_enabled,
            session.settings().music_enabled,
        );

        let mut fx = FxManager::default();
        // Title shimmer runs forever on mode select
        fx.add_unique_effect("title_shimmer", effects::title_shimmer());

        Self {
            session,
            store,
            sound,
            tick: 0,
            fx,
            prev_phase: None,
            mode_select: ModeSelectScreen::new(),
            team_select: TeamSelectScreen::new(),
            play_round: PlayRoundScreen::new(),
            round_over: RoundOverScreen::new(),
            name_entry: NameEntryScreen::new(),
            duel_results: DuelResultsScreen::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        // Animated arena background for all screens, tinted by team
        let bg = memoria_widgets::background::BackgroundWidget::new(self.tick)
            .team(self.session.team());
        frame.render_widget(bg, area);

        // Decorative frame border, shimmering in the declared side's color
        let frame_border = memoria_widgets::background::FrameWidget::new(self.tick)
            .team(self.session.team());
        frame.render_widget(frame_border, area);

        match self.session.phase() {
            SessionPhase::ModeSelect => self.mode_select.render(frame, &self.session),
            SessionPhase::TeamSelect => self.team_select.render(frame, &self.session),
            SessionPhase::Playing => self.play_round.render(frame, &self.session),
            SessionPhase::TimeUp | SessionPhase::RoundSummary => {
                self.round_over.render(frame, &self.session)
            }
            SessionPhase::NameEntry => self.name_entry.render(frame, &self.session),
            SessionPhase::DuelResults => self.duel_results.render(frame, &self.session),
        }

        // Apply all tachyonfx effects on top of rendered content
        let tick_duration = tachyonfx::Duration::from_millis(33); // ~30fps
        let buf = frame.buffer_mut();
        self.fx.process_effects(tick_duration, buf, area);
    }

    /// Handle key event. Returns true if should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Global quit
        if key.code == KeyCode::Char('q') && self.session.phase() == SessionPhase::ModeSelect {
            return true;
        }

        let action = match self.session.phase() {
            SessionPhase::ModeSelect => self.mode_select.handle_key(key),
            SessionPhase::TeamSelect => self.team_select.handle_key(key),
            SessionPhase::Playing => self.play_round.handle_key(key, &self.session),
            SessionPhase::TimeUp | SessionPhase::RoundSummary => self.round_over.handle_key(key),
            SessionPhase::NameEntry => self.name_entry.handle_key(key),
            SessionPhase::DuelResults => self.duel_results.handle_key(key),
        };

        self.process_action(action)
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.session.phase() == SessionPhase::Playing {
            let action = self.play_round.handle_mouse(mouse, &self.session);
            self.process_action(action);
        }
    }

    pub fn handle_resize(&mut self, _w: u16, _h: u16) {
        // Ratatui handles resize automatically
    }

    /// Advance one frame. `dt` is real time since the previous frame.
    pub fn tick(&mut self, dt: Duration) {
        self.tick += 1;

        // Detect phase changes and trigger transition effects
        let phase = self.session.phase();
        if self.prev_phase != Some(phase) {
            self.fx
                .add_unique_effect("screen_transition", effects::screen_transition());

            match phase {
                SessionPhase::ModeSelect => {
                    // Re-add title shimmer when returning to mode select
                    self.fx
                        .add_unique_effect("title_shimmer", effects::title_shimmer());
                }
                SessionPhase::Playing => {
                    self.play_round.reset();
                    self.fx.add_unique_effect("board_deal", effects::board_deal());
                }
                SessionPhase::NameEntry => {
                    self.name_entry.set_input(self.session.suggested_name());
                }
                _ => {}
            }

            self.prev_phase = Some(phase);
        }

        if phase == SessionPhase::Playing {
            self.session.advance(dt);
            self.pump_events();
        }
    }

    /// Process a screen action. Returns true if should quit.
    fn process_action(&mut self, action: Option<ScreenAction>) -> bool {
        match action {
            Some(ScreenAction::Quit) => return true,
            Some(ScreenAction::SelectMode(mode)) => self.session.select_mode(mode),
            Some(ScreenAction::SelectTeam(team)) => self.session.select_team(team),
            Some(ScreenAction::StartRound) => self.session.start_round(),
            Some(ScreenAction::Reveal(index)) => self.session.reveal(index),
            Some(ScreenAction::RequestChange(change)) => self.session.request_change(change),
            Some(ScreenAction::ConfirmChange) => self.session.confirm_change(),
            Some(ScreenAction::CancelChange) => self.session.cancel_change(),
            Some(ScreenAction::ToggleAutoStart) => self.session.toggle_auto_start(),
            Some(ScreenAction::ToggleRanking) => self.session.toggle_ranking(),
            Some(ScreenAction::ToggleMusic) => {
                let enabled = self.session.toggle_music();
                self.sound.set_music_enabled(enabled);
                // Switched on mid-round: pick the loop back up
                if enabled && self.session.is_running() {
                    self.sound.start_music();
                }
            }
            Some(ScreenAction::ToggleSound) => {
                let enabled = self.session.toggle_sound();
                self.sound.set_sound_enabled(enabled);
            }
            Some(ScreenAction::SubmitName(name)) => {
                let date = today_label();
                self.session.submit_ranking(&name, &date, &mut self.store);
            }
            Some(ScreenAction::SkipRanking) => self.session.skip_ranking(),
            Some(ScreenAction::RegenerateName) => {
                self.session.regenerate_suggested_name();
                self.name_entry.set_input(self.session.suggested_name());
            }
            Some(ScreenAction::Acknowledge) => self.session.acknowledge(),
            None => {}
        }

        self.pump_events();
        false
    }

    /// Route queued session events to sound cues and effects
    fn pump_events(&mut self) {
        for event in self.session.drain_events() {
            self.sound.handle(event);
            match event {
                SessionEvent::RoundWon => {
                    self.fx
                        .add_unique_effect("celebration", effects::celebration_shimmer());
                    self.fx
                        .add_unique_effect("score_highlight", effects::score_highlight());
                }
                SessionEvent::TimeExpired => {
                    self.fx
                        .add_unique_effect("time_up_flash", effects::time_up_flash());
                }
                _ => {}
            }
        }
    }
}

/// Today's date as the ranking label, in dd/mm/yyyy
fn today_label() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format!(
        "{:02}/{:02}/{}",
        now.day(),
        u8::from(now.month()),
        now.year()
    )
}

/// Actions that screens can return
#[derive(Debug, Clone)]
pub enum ScreenAction {
    Quit,
    SelectMode(GameMode),
    SelectTeam(Team),
    StartRound,
    Reveal(usize),
    /// A settings change that needs the confirmation popup first
    RequestChange(PendingChange),
    ConfirmChange,
    CancelChange,
    ToggleAutoStart,
    ToggleRanking,
    ToggleMusic,
    ToggleSound,
    SubmitName(String),
    SkipRanking,
    RegenerateName,
    Acknowledge,
}
