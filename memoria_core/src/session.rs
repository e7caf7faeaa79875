use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, BoardEvent};
use crate::config::{Difficulty, GameMode, Settings, Team};
use crate::deck::Deck;
use crate::duel::Duel;
use crate::ranking::{self, Leaderboard, RankingEntry, RankingStore};
use crate::scoring::RoundResult;
use crate::timer::{RoundTimer, TimerMode};

/// Which screen of the session flow the player is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    ModeSelect,
    TeamSelect,
    Playing,
    /// Countdown ran out
    TimeUp,
    /// Won round with ranking disabled: plain summary
    RoundSummary,
    /// Won round with ranking enabled: asking for a name
    NameEntry,
    DuelResults,
}

/// Cue for the shell: something sound- or effect-worthy happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    RoundStarted,
    CardFlipped,
    PairMatched,
    PairMissed,
    RoundWon,
    TimeExpired,
    RoundAbandoned,
}

/// A settings change that discards round progress and so waits for an
/// explicit yes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingChange {
    Difficulty(Difficulty),
    TimerMode(TimerMode),
    Restart,
    LeaveToMenu,
}

impl PendingChange {
    /// Copy for the confirmation popup
    pub fn description(&self) -> String {
        match self {
            PendingChange::Difficulty(d) => format!("Mudar dificuldade para {}?", d.name()),
            PendingChange::TimerMode(m) => format!("Mudar relógio para {}?", m.name()),
            PendingChange::Restart => "Tem certeza? O progresso será perdido!".to_string(),
            PendingChange::LeaveToMenu => "Voltar ao menu? A partida será perdida!".to_string(),
        }
    }
}

/// The complete session state machine, from mode select through play to
/// the result screens and back.
///
/// Time enters only through `advance`: the shell reports how much real
/// time passed and the session feeds it to the board's sub-second
/// deadlines and the whole-second round timer. Board resolutions are
/// applied before timer ticks, so clearing the final pair outranks the
/// countdown expiring in the same call.
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: SessionPhase,
    settings: Settings,
    mode: GameMode,
    team: Option<Team>,
    board: Option<Board>,
    timer: Option<RoundTimer>,
    duel: Option<Duel>,
    leaderboard: Leaderboard,
    pending_change: Option<PendingChange>,
    last_result: Option<RoundResult>,
    suggested_name: String,
    running: bool,
    round_clock: Duration,
    ticked_secs: u32,
    events: Vec<SessionEvent>,
    rng: StdRng,
}

impl GameSession {
    pub fn new(leaderboard: Leaderboard) -> Self {
        Self::with_seed(rand::thread_rng().gen(), leaderboard)
    }

    pub fn with_seed(seed: u64, leaderboard: Leaderboard) -> Self {
        Self {
            phase: SessionPhase::ModeSelect,
            settings: Settings::default(),
            mode: GameMode::Normal,
            team: None,
            board: None,
            timer: None,
            duel: None,
            leaderboard,
            pending_change: None,
            last_result: None,
            suggested_name: String::new(),
            running: false,
            round_clock: Duration::ZERO,
            ticked_secs: 0,
            events: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick solo or duel play. Only valid on the mode screen.
    pub fn select_mode(&mut self, mode: GameMode) {
        if self.phase != SessionPhase::ModeSelect {
            return;
        }
        self.mode = mode;
        self.duel = match mode {
            GameMode::Duel => Some(Duel::new()),
            GameMode::Normal => None,
        };
        self.team = None;
        self.phase = SessionPhase::TeamSelect;
    }

    /// Declare for a side and deal the round. In a duel this is also how
    /// the second player takes over the board.
    pub fn select_team(&mut self, team: Team) {
        if self.phase != SessionPhase::TeamSelect {
            return;
        }
        self.team = Some(team);
        if let Some(duel) = &mut self.duel {
            duel.set_current_team(team);
        }
        self.deal_round();
        self.phase = SessionPhase::Playing;
        if self.settings.auto_start {
            self.begin_round();
        }
    }

    /// Start the clock on a dealt round. With auto-start off the board
    /// waits face down until this is called.
    pub fn start_round(&mut self) {
        if self.phase == SessionPhase::Playing && !self.running && self.pending_change.is_none() {
            self.begin_round();
        }
    }

    /// Flip the card at a board index
    pub fn reveal(&mut self, index: usize) {
        if self.phase != SessionPhase::Playing || !self.running || self.pending_change.is_some() {
            return;
        }
        let now = self.round_clock;
        if let Some(board) = &mut self.board {
            if board.reveal(index, now).is_some() {
                self.events.push(SessionEvent::CardFlipped);
            }
        }
    }

    /// Advance the round clock by however much real time passed
    pub fn advance(&mut self, dt: Duration) {
        if self.phase != SessionPhase::Playing || !self.running || self.pending_change.is_some() {
            return;
        }
        self.round_clock += dt;
        let now = self.round_clock;

        let board_events = match &mut self.board {
            Some(board) => board.update(now),
            None => Vec::new(),
        };
        for event in board_events {
            match event {
                BoardEvent::Flipped { .. } => {}
                BoardEvent::PairMatched { .. } => self.events.push(SessionEvent::PairMatched),
                BoardEvent::PairMissed { .. } => self.events.push(SessionEvent::PairMissed),
            }
        }
        let complete = self.board.as_ref().map(|b| b.is_complete()).unwrap_or(false);
        if complete {
            self.finish_win();
            return;
        }

        while (self.round_clock.as_secs() as u32) > self.ticked_secs {
            self.ticked_secs += 1;
            let expired = match &mut self.timer {
                Some(timer) => timer.tick(),
                None => false,
            };
            if expired {
                self.finish_timeout();
                return;
            }
        }
    }

    /// Ask for a difficulty/timer change, a restart or a walk back to the
    /// menu. The question stays pending (and the clock held) until
    /// confirmed or cancelled.
    pub fn request_change(&mut self, change: PendingChange) {
        if self.phase != SessionPhase::Playing || self.pending_change.is_some() {
            return;
        }
        let redundant = match change {
            PendingChange::Difficulty(d) => d == self.settings.difficulty,
            PendingChange::TimerMode(m) => m == self.settings.timer_mode,
            PendingChange::Restart | PendingChange::LeaveToMenu => false,
        };
        if !redundant {
            self.pending_change = Some(change);
        }
    }

    /// Apply the pending change, discard the round and return to mode
    /// select
    pub fn confirm_change(&mut self) {
        let Some(change) = self.pending_change.take() else {
            return;
        };
        match change {
            PendingChange::Difficulty(d) => self.settings.difficulty = d,
            PendingChange::TimerMode(m) => self.settings.timer_mode = m,
            PendingChange::Restart | PendingChange::LeaveToMenu => {}
        }
        if self.board.is_some() {
            self.events.push(SessionEvent::RoundAbandoned);
        }
        self.clear_round();
        self.phase = SessionPhase::ModeSelect;
    }

    /// Drop the pending change and resume where the clock stopped
    pub fn cancel_change(&mut self) {
        self.pending_change = None;
    }

    /// Leave a result screen and return to mode select
    pub fn acknowledge(&mut self) {
        match self.phase {
            SessionPhase::TimeUp | SessionPhase::RoundSummary | SessionPhase::DuelResults => {
                self.clear_round();
                self.phase = SessionPhase::ModeSelect;
            }
            _ => {}
        }
    }

    /// File the winning score under `name` and return to mode select. An
    /// empty name falls back to the suggested one.
    pub fn submit_ranking(&mut self, name: &str, date: &str, store: &mut dyn RankingStore) {
        if self.phase != SessionPhase::NameEntry {
            return;
        }
        let Some(result) = &self.last_result else {
            return;
        };
        let name = if name.trim().is_empty() {
            self.suggested_name.clone()
        } else {
            name.trim().to_string()
        };
        let entry = RankingEntry {
            name,
            score: result.score,
            time_secs: result.time_secs,
            difficulty: self.settings.difficulty,
            date: date.to_string(),
            team: self.team,
        };
        self.leaderboard.add(entry);
        self.leaderboard.save(store);
        self.clear_round();
        self.phase = SessionPhase::ModeSelect;
    }

    /// Decline the ranking form
    pub fn skip_ranking(&mut self) {
        if self.phase == SessionPhase::NameEntry {
            self.clear_round();
            self.phase = SessionPhase::ModeSelect;
        }
    }

    /// Roll a fresh placeholder name for the ranking form
    pub fn regenerate_suggested_name(&mut self) {
        self.suggested_name = ranking::random_name(&mut self.rng);
    }

    pub fn toggle_auto_start(&mut self) {
        self.settings.auto_start = !self.settings.auto_start;
    }

    pub fn toggle_ranking(&mut self) {
        self.settings.ranking_enabled = !self.settings.ranking_enabled;
    }

    /// Returns the new state so the shell can start or stop playback
    pub fn toggle_music(&mut self) -> bool {
        self.settings.music_enabled = !self.settings.music_enabled;
        self.settings.music_enabled
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.settings.sound_enabled = !self.settings.sound_enabled;
        self.settings.sound_enabled
    }

    /// Take the cues queued since the last drain
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn team(&self) -> Option<Team> {
        self.team
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn timer(&self) -> Option<&RoundTimer> {
        self.timer.as_ref()
    }

    pub fn duel(&self) -> Option<&Duel> {
        self.duel.as_ref()
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    pub fn pending_change(&self) -> Option<PendingChange> {
        self.pending_change
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn suggested_name(&self) -> &str {
        &self.suggested_name
    }

    fn deal_round(&mut self) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut self.rng);
        self.board = Some(Board::new(deck));
        self.timer = Some(RoundTimer::new(
            self.settings.timer_mode,
            self.settings.difficulty.time_budget(),
        ));
        self.round_clock = Duration::ZERO;
        self.ticked_secs = 0;
        self.running = false;
        self.last_result = None;
    }

    fn begin_round(&mut self) {
        self.running = true;
        self.events.push(SessionEvent::RoundStarted);
    }

    fn finish_win(&mut self) {
        let (moves, pair_count) = match &self.board {
            Some(board) => (board.moves(), board.pair_count()),
            None => return,
        };
        let result = match &self.timer {
            Some(timer) => RoundResult::win(moves, pair_count, timer, self.settings.difficulty),
            None => return,
        };
        self.running = false;
        self.events.push(SessionEvent::RoundWon);
        self.last_result = Some(result.clone());

        match self.mode {
            GameMode::Normal => {
                if self.settings.ranking_enabled {
                    self.suggested_name = ranking::random_name(&mut self.rng);
                    self.phase = SessionPhase::NameEntry;
                } else {
                    self.phase = SessionPhase::RoundSummary;
                }
            }
            GameMode::Duel => {
                if let Some(duel) = &mut self.duel {
                    duel.record_result(&result);
                    if duel.advance() {
                        self.team = None;
                        self.phase = SessionPhase::TeamSelect;
                    } else {
                        self.phase = SessionPhase::DuelResults;
                    }
                }
            }
        }
    }

    fn finish_timeout(&mut self) {
        let moves = self.board.as_ref().map(|b| b.moves()).unwrap_or(0);
        if let Some(timer) = &self.timer {
            self.last_result = Some(RoundResult::timeout(moves, timer));
        }
        self.running = false;
        self.events.push(SessionEvent::TimeExpired);
        self.phase = SessionPhase::TimeUp;
    }

    fn clear_round(&mut self) {
        self.board = None;
        self.timer = None;
        self.duel = None;
        self.team = None;
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::board::CardFace;
    use crate::card::Symbol;
    use crate::duel::DuelOutcome;

    #[derive(Default)]
    struct MemStore {
        slots: HashMap<String, String>,
    }

    impl RankingStore for MemStore {
        fn get(&self, key: &str) -> Option<String> {
            self.slots.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.slots.insert(key.to_string(), value.to_string());
        }
    }

    fn session() -> GameSession {
        GameSession::with_seed(42, Leaderboard::default())
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Matching index pairs on the dealt board, in first-seen order
    fn matching_pairs(session: &GameSession) -> Vec<(usize, usize)> {
        let board = session.board().unwrap();
        let mut pairs = Vec::new();
        let mut seen: Vec<(Symbol, usize)> = Vec::new();
        for i in 0..board.len() {
            let symbol = board.symbol_at(i).unwrap();
            if let Some(pos) = seen.iter().position(|(s, _)| *s == symbol) {
                pairs.push((seen[pos].1, i));
                seen.remove(pos);
            } else {
                seen.push((symbol, i));
            }
        }
        pairs
    }

    fn clear_pair(session: &mut GameSession, first: usize, second: usize) {
        session.reveal(first);
        session.reveal(second);
        session.advance(ms(600));
    }

    fn win_round(session: &mut GameSession) {
        for (first, second) in matching_pairs(session) {
            clear_pair(session, first, second);
        }
    }

    /// Route through the settings confirmation to change difficulty or
    /// timer mode, then re-enter play
    fn reconfigure_and_replay(session: &mut GameSession, change: PendingChange, team: Team) {
        session.request_change(change);
        session.confirm_change();
        assert_eq!(session.phase(), SessionPhase::ModeSelect);
        session.select_mode(GameMode::Normal);
        session.select_team(team);
    }

    #[test]
    fn test_flow_reaches_name_entry_on_win() {
        let mut session = session();
        assert_eq!(session.phase(), SessionPhase::ModeSelect);

        session.select_mode(GameMode::Normal);
        assert_eq!(session.phase(), SessionPhase::TeamSelect);

        session.select_team(Team::Garantido);
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert!(!session.is_running());

        // Reveals are ignored until the round is started
        session.reveal(0);
        assert_eq!(session.board().unwrap().card_face(0), CardFace::Hidden);

        session.start_round();
        assert!(session.is_running());
        assert!(session.drain_events().contains(&SessionEvent::RoundStarted));

        win_round(&mut session);
        assert_eq!(session.phase(), SessionPhase::NameEntry);
        assert!(!session.suggested_name().is_empty());

        let events = session.drain_events();
        assert_eq!(
            events.iter().filter(|e| **e == SessionEvent::RoundWon).count(),
            1
        );
        assert_eq!(
            events.iter().filter(|e| **e == SessionEvent::PairMatched).count(),
            8
        );

        let result = session.last_result().unwrap();
        assert!(result.won);
        assert_eq!(result.moves, 8);
        assert_eq!(result.stars, 3);
    }

    #[test]
    fn test_ranking_disabled_goes_to_summary() {
        let mut session = session();
        session.toggle_ranking();
        session.select_mode(GameMode::Normal);
        session.select_team(Team::Caprichoso);
        session.start_round();
        win_round(&mut session);
        assert_eq!(session.phase(), SessionPhase::RoundSummary);

        session.acknowledge();
        assert_eq!(session.phase(), SessionPhase::ModeSelect);
        assert!(session.board().is_none());
    }

    #[test]
    fn test_auto_start_runs_the_deal_immediately() {
        let mut session = session();
        session.toggle_auto_start();
        session.select_mode(GameMode::Normal);
        session.select_team(Team::Garantido);
        assert!(session.is_running());
        assert!(session.drain_events().contains(&SessionEvent::RoundStarted));
    }

    #[test]
    fn test_countdown_expiry_reaches_time_up() {
        let mut session = session();
        session.select_mode(GameMode::Normal);
        session.select_team(Team::Garantido);
        reconfigure_and_replay(
            &mut session,
            PendingChange::TimerMode(TimerMode::Countdown),
            Team::Garantido,
        );
        session.start_round();

        session.advance(Duration::from_secs(121));
        assert_eq!(session.phase(), SessionPhase::TimeUp);
        assert!(session.drain_events().contains(&SessionEvent::TimeExpired));
        let result = session.last_result().unwrap();
        assert!(!result.won);
        assert_eq!(result.score, 0);

        session.acknowledge();
        assert_eq!(session.phase(), SessionPhase::ModeSelect);
    }

    #[test]
    fn test_win_beats_expiry_in_the_same_advance() {
        let mut session = session();
        session.select_mode(GameMode::Normal);
        session.select_team(Team::Garantido);
        reconfigure_and_replay(
            &mut session,
            PendingChange::TimerMode(TimerMode::Countdown),
            Team::Garantido,
        );
        session.start_round();

        let pairs = matching_pairs(&session);
        for &(first, second) in &pairs[..7] {
            clear_pair(&mut session, first, second);
        }
        let (first, second) = pairs[7];
        session.reveal(first);
        session.reveal(second);
        // One advance that passes both the match deadline and the rest of
        // the countdown: the win must land first
        session.advance(Duration::from_secs(200));

        assert_eq!(session.phase(), SessionPhase::NameEntry);
        let events = session.drain_events();
        assert!(events.contains(&SessionEvent::RoundWon));
        assert!(!events.contains(&SessionEvent::TimeExpired));
    }

    #[test]
    fn test_pending_change_holds_the_clock() {
        let mut session = session();
        session.select_mode(GameMode::Normal);
        session.select_team(Team::Garantido);
        session.start_round();
        session.advance(Duration::from_secs(5));
        assert_eq!(session.timer().unwrap().elapsed(), 5);

        session.request_change(PendingChange::Difficulty(Difficulty::Hard));
        assert!(session.pending_change().is_some());

        // Neither time nor reveals get through while the question is open
        session.advance(Duration::from_secs(30));
        assert_eq!(session.timer().unwrap().elapsed(), 5);
        session.reveal(3);
        assert_eq!(session.board().unwrap().card_face(3), CardFace::Hidden);

        session.cancel_change();
        assert!(session.pending_change().is_none());
        session.advance(Duration::from_secs(1));
        assert_eq!(session.timer().unwrap().elapsed(), 6);
        assert_eq!(session.phase(), SessionPhase::Playing);
    }

    #[test]
    fn test_confirm_change_applies_and_discards_round() {
        let mut session = session();
        session.select_mode(GameMode::Normal);
        session.select_team(Team::Garantido);
        session.start_round();
        session.request_change(PendingChange::Difficulty(Difficulty::Hard));
        session.confirm_change();

        assert_eq!(session.phase(), SessionPhase::ModeSelect);
        assert_eq!(session.settings().difficulty, Difficulty::Hard);
        assert!(session.board().is_none());
        assert!(session.drain_events().contains(&SessionEvent::RoundAbandoned));
    }

    #[test]
    fn test_redundant_change_is_not_asked() {
        let mut session = session();
        session.select_mode(GameMode::Normal);
        session.select_team(Team::Garantido);
        session.request_change(PendingChange::Difficulty(Difficulty::Medium));
        assert!(session.pending_change().is_none());
    }

    #[test]
    fn test_restart_request() {
        let mut session = session();
        session.select_mode(GameMode::Normal);
        session.select_team(Team::Garantido);
        session.start_round();
        session.request_change(PendingChange::Restart);
        session.confirm_change();
        assert_eq!(session.phase(), SessionPhase::ModeSelect);
        // Settings survive a restart
        assert_eq!(session.settings().difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_leave_to_menu_abandons_the_round() {
        let mut session = session();
        session.select_mode(GameMode::Normal);
        session.select_team(Team::Garantido);
        session.start_round();
        session.advance(Duration::from_secs(3));
        session.drain_events();

        session.request_change(PendingChange::LeaveToMenu);
        assert!(session.pending_change().is_some());
        session.confirm_change();

        assert_eq!(session.phase(), SessionPhase::ModeSelect);
        assert!(session.board().is_none());
        assert_eq!(session.settings().difficulty, Difficulty::Medium);
        assert!(session.drain_events().contains(&SessionEvent::RoundAbandoned));
    }

    #[test]
    fn test_submit_ranking_persists_entry() {
        let mut store = MemStore::default();
        let mut session = session();
        session.select_mode(GameMode::Normal);
        session.select_team(Team::Garantido);
        session.start_round();
        win_round(&mut session);
        let score = session.last_result().unwrap().score;

        session.submit_ranking("Maria", "23/08/2026", &mut store);
        assert_eq!(session.phase(), SessionPhase::ModeSelect);
        assert_eq!(session.leaderboard().len(), 1);
        let entry = &session.leaderboard().entries()[0];
        assert_eq!(entry.name, "Maria");
        assert_eq!(entry.score, score);
        assert_eq!(entry.team, Some(Team::Garantido));
        assert!(store.get(ranking::STORAGE_KEY).unwrap().contains("Maria"));
    }

    #[test]
    fn test_blank_name_uses_suggestion() {
        let mut store = MemStore::default();
        let mut session = session();
        session.select_mode(GameMode::Normal);
        session.select_team(Team::Caprichoso);
        session.start_round();
        win_round(&mut session);
        let suggested = session.suggested_name().to_string();

        session.submit_ranking("   ", "23/08/2026", &mut store);
        assert_eq!(session.leaderboard().entries()[0].name, suggested);
    }

    #[test]
    fn test_skip_ranking_saves_nothing() {
        let mut session = session();
        session.select_mode(GameMode::Normal);
        session.select_team(Team::Garantido);
        session.start_round();
        win_round(&mut session);
        session.skip_ranking();
        assert_eq!(session.phase(), SessionPhase::ModeSelect);
        assert!(session.leaderboard().is_empty());
    }

    #[test]
    fn test_duel_hands_over_then_compares_scores() {
        let mut session = session();
        session.select_mode(GameMode::Duel);
        session.select_team(Team::Garantido);
        session.start_round();
        win_round(&mut session);

        // First player done: board goes back to team select for player 2
        assert_eq!(session.phase(), SessionPhase::TeamSelect);
        assert_eq!(session.duel().unwrap().current_index(), 1);
        assert_eq!(session.team(), None);

        session.select_team(Team::Caprichoso);
        session.start_round();
        win_round(&mut session);

        assert_eq!(session.phase(), SessionPhase::DuelResults);
        let duel = session.duel().unwrap();
        assert!(duel.is_finished());
        let players = duel.players();
        assert_eq!(players[0].team, Some(Team::Garantido));
        assert_eq!(players[1].team, Some(Team::Caprichoso));
        // Identical move counts and clock time on both rounds: a tie
        assert_eq!(players[0].score, players[1].score);
        assert_eq!(duel.outcome(), Some(DuelOutcome::Tie));

        session.acknowledge();
        assert_eq!(session.phase(), SessionPhase::ModeSelect);
        assert!(session.duel().is_none());
    }

    #[test]
    fn test_duel_rounds_never_touch_the_leaderboard() {
        let mut session = session();
        session.select_mode(GameMode::Duel);
        session.select_team(Team::Garantido);
        session.start_round();
        win_round(&mut session);
        session.select_team(Team::Caprichoso);
        session.start_round();
        win_round(&mut session);
        assert_eq!(session.phase(), SessionPhase::DuelResults);
        assert!(session.leaderboard().is_empty());
    }

    #[test]
    fn test_mismatch_path_emits_miss_and_recovers() {
        let mut session = session();
        session.select_mode(GameMode::Normal);
        session.select_team(Team::Garantido);
        session.start_round();
        session.drain_events();

        let pairs = matching_pairs(&session);
        let (a, _) = pairs[0];
        let (b, _) = pairs[1];
        session.reveal(a);
        session.reveal(b);
        session.advance(ms(800));
        assert!(session.drain_events().contains(&SessionEvent::PairMissed));
        assert_eq!(session.board().unwrap().card_face(a), CardFace::Wrong);

        session.advance(ms(1_000));
        assert_eq!(session.board().unwrap().card_face(a), CardFace::Hidden);
        assert_eq!(session.board().unwrap().moves(), 1);
        assert_eq!(session.phase(), SessionPhase::Playing);
    }
}
