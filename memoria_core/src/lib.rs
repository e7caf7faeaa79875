pub mod board;
pub mod card;
pub mod config;
pub mod deck;
pub mod duel;
pub mod ranking;
pub mod scoring;
pub mod session;
pub mod timer;

pub use board::{Board, BoardEvent, BoardPhase, CardFace};
pub use card::Symbol;
pub use config::{Difficulty, GameMode, Settings, Team};
pub use deck::Deck;
pub use duel::{Duel, DuelOutcome, DuelPlayer};
pub use ranking::{Leaderboard, RankingEntry, RankingStore};
pub use scoring::{compute_score, star_rating, RoundResult};
pub use session::{GameSession, PendingChange, SessionEvent, SessionPhase};
pub use timer::{format_mm_ss, RoundTimer, TimerMode};
