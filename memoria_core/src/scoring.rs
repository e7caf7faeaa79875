use crate::config::Difficulty;
use crate::timer::{RoundTimer, TimerMode};

/// Outcome of a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub won: bool,
    pub moves: u32,
    /// Seconds spent on the round
    pub time_secs: u32,
    pub score: u32,
    pub stars: u8,
}

impl RoundResult {
    /// Result for a cleared board
    pub fn win(moves: u32, pair_count: usize, timer: &RoundTimer, difficulty: Difficulty) -> Self {
        Self {
            won: true,
            moves,
            time_secs: timer.time_spent(),
            score: compute_score(moves, timer, difficulty),
            stars: star_rating(moves, pair_count),
        }
    }

    /// Result for a countdown that ran out
    pub fn timeout(moves: u32, timer: &RoundTimer) -> Self {
        Self {
            won: false,
            moves,
            time_secs: timer.time_spent(),
            score: 0,
            stars: 0,
        }
    }
}

/// Round score: 1000 base, minus 10 per move, plus a time bonus, scaled by
/// the difficulty multiplier and floored at zero.
///
/// The time bonus rewards what the clock measures: seconds left in
/// countdown mode (x5), seconds under twice the budget in elapsed mode
/// (x2).
pub fn compute_score(moves: u32, timer: &RoundTimer, difficulty: Difficulty) -> u32 {
    let base = 1000_i64 - i64::from(moves) * 10;
    let bonus = match timer.mode() {
        TimerMode::Countdown => i64::from(timer.remaining()) * 5,
        TimerMode::Elapsed => i64::from((2 * timer.budget()).saturating_sub(timer.elapsed())) * 2,
    };
    let scaled = ((base + bonus) as f64 * difficulty.score_multiplier()).floor();
    scaled.max(0.0) as u32
}

/// Stars for a won round, judged by how far the move count strayed from
/// the minimum possible (one move per pair).
pub fn star_rating(moves: u32, pair_count: usize) -> u8 {
    let perfect = pair_count as u32;
    if moves <= perfect + 2 {
        3
    } else if moves <= perfect + 6 {
        2
    } else if moves <= perfect + 10 {
        1
    } else {
        0
    }
}
