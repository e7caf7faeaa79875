use crate::config::Team;
use crate::scoring::RoundResult;

/// One duel participant's sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelPlayer {
    pub name: String,
    pub team: Option<Team>,
    pub score: u32,
    pub moves: u32,
    pub time_secs: u32,
    pub completed: bool,
}

impl DuelPlayer {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            team: None,
            score: 0,
            moves: 0,
            time_secs: 0,
            completed: false,
        }
    }
}

/// Comparison of both finished rounds. Scores only: moves and time never
/// break a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelOutcome {
    Winner(usize),
    Tie,
}

/// Two players share the terminal and play one dealt round each; the
/// higher score takes the duel.
#[derive(Debug, Clone)]
pub struct Duel {
    players: [DuelPlayer; 2],
    current: usize,
}

impl Default for Duel {
    fn default() -> Self {
        Self::new()
    }
}

impl Duel {
    pub fn new() -> Self {
        Self {
            players: [DuelPlayer::new("Jogador 1"), DuelPlayer::new("Jogador 2")],
            current: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_player(&self) -> &DuelPlayer {
        &self.players[self.current]
    }

    /// Record the team the current player declared for
    pub fn set_current_team(&mut self, team: Team) {
        self.players[self.current].team = Some(team);
    }

    /// File the current player's finished round
    pub fn record_result(&mut self, result: &RoundResult) {
        let player = &mut self.players[self.current];
        player.score = result.score;
        player.moves = result.moves;
        player.time_secs = result.time_secs;
        player.completed = true;
    }

    /// Pass the board to the next player. Returns false once everyone has
    /// played.
    pub fn advance(&mut self) -> bool {
        if self.current + 1 < self.players.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    pub fn is_finished(&self) -> bool {
        self.players.iter().all(|p| p.completed)
    }

    /// Score comparison, available once both rounds are in
    pub fn outcome(&self) -> Option<DuelOutcome> {
        if !self.is_finished() {
            return None;
        }
        let [a, b] = &self.players;
        Some(if a.score > b.score {
            DuelOutcome::Winner(0)
        } else if b.score > a.score {
            DuelOutcome::Winner(1)
        } else {
            DuelOutcome::Tie
        })
    }

    pub fn players(&self) -> &[DuelPlayer; 2] {
        &self.players
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(score: u32) -> RoundResult {
        RoundResult {
            won: true,
            moves: 12,
            time_secs: 45,
            score,
            stars: 2,
        }
    }

    #[test]
    fn test_new_duel_starts_on_player_one() {
        let duel = Duel::new();
        assert_eq!(duel.current_index(), 0);
        assert_eq!(duel.current_player().name, "Jogador 1");
        assert!(!duel.is_finished());
        assert_eq!(duel.outcome(), None);
    }

    #[test]
    fn test_advance_hands_over_once() {
        let mut duel = Duel::new();
        assert!(duel.advance());
        assert_eq!(duel.current_player().name, "Jogador 2");
        assert!(!duel.advance());
        assert_eq!(duel.current_index(), 1);
    }

    #[test]
    fn test_outcome_picks_higher_score() {
        let mut duel = Duel::new();
        duel.set_current_team(Team::Garantido);
        duel.record_result(&result(1200));
        duel.advance();
        duel.set_current_team(Team::Caprichoso);
        duel.record_result(&result(1500));
        assert!(duel.is_finished());
        assert_eq!(duel.outcome(), Some(DuelOutcome::Winner(1)));
    }

    #[test]
    fn test_outcome_favors_first_player_when_ahead() {
        let mut duel = Duel::new();
        duel.record_result(&result(900));
        duel.advance();
        duel.record_result(&result(850));
        assert_eq!(duel.outcome(), Some(DuelOutcome::Winner(0)));
    }

    #[test]
    fn test_equal_scores_tie() {
        let mut duel = Duel::new();
        duel.record_result(&result(900));
        duel.advance();
        duel.record_result(&result(900));
        assert_eq!(duel.outcome(), Some(DuelOutcome::Tie));
    }

    #[test]
    fn test_moves_and_time_never_break_ties() {
        let mut duel = Duel::new();
        let mut fast = result(900);
        fast.moves = 8;
        fast.time_secs = 20;
        let mut slow = result(900);
        slow.moves = 30;
        slow.time_secs = 300;
        duel.record_result(&fast);
        duel.advance();
        duel.record_result(&slow);
        assert_eq!(duel.outcome(), Some(DuelOutcome::Tie));
    }
}
