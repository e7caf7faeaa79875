use std::fmt;

use serde::{Deserialize, Serialize};

use crate::timer::TimerMode;

/// Difficulty fixes the round's time budget and score multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Seconds granted to a countdown round, and the reference time for
    /// the elapsed-mode bonus
    pub fn time_budget(&self) -> u32 {
        match self {
            Difficulty::Easy => 180,
            Difficulty::Medium => 120,
            Difficulty::Hard => 60,
        }
    }

    /// Multiplier applied to the raw round score
    pub fn score_multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 1.0,
            Difficulty::Medium => 1.5,
            Difficulty::Hard => 2.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Médio",
            Difficulty::Hard => "Difícil",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Solo round or two-player duel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Normal,
    Duel,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Normal, GameMode::Duel];

    pub fn name(&self) -> &'static str {
        match self {
            GameMode::Normal => "Normal",
            GameMode::Duel => "Duelo",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The two festival sides a player declares for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    Garantido,
    Caprichoso,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Garantido, Team::Caprichoso];

    pub fn name(&self) -> &'static str {
        match self {
            Team::Garantido => "Garantido",
            Team::Caprichoso => "Caprichoso",
        }
    }

    /// The side's traditional color, used as a display tag
    pub fn color_name(&self) -> &'static str {
        match self {
            Team::Garantido => "Vermelho",
            Team::Caprichoso => "Azul",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Player-facing options that survive across rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub timer_mode: TimerMode,
    pub auto_start: bool,
    pub ranking_enabled: bool,
    pub music_enabled: bool,
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            timer_mode: TimerMode::Elapsed,
            auto_start: false,
            ranking_enabled: true,
            music_enabled: true,
            sound_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_budgets() {
        assert_eq!(Difficulty::Easy.time_budget(), 180);
        assert_eq!(Difficulty::Medium.time_budget(), 120);
        assert_eq!(Difficulty::Hard.time_budget(), 60);
    }

    #[test]
    fn test_score_multipliers() {
        assert_eq!(Difficulty::Easy.score_multiplier(), 1.0);
        assert_eq!(Difficulty::Medium.score_multiplier(), 1.5);
        assert_eq!(Difficulty::Hard.score_multiplier(), 2.0);
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let back: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(back, Difficulty::Hard);
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.timer_mode, TimerMode::Elapsed);
        assert!(!settings.auto_start);
        assert!(settings.ranking_enabled);
        assert!(settings.music_enabled);
        assert!(settings.sound_enabled);
    }
}
