use std::time::Duration;

use crate::card::Symbol;
use crate::deck::Deck;

/// Delay before a confirmed pair locks in as matched
pub const MATCH_REVEAL: Duration = Duration::from_millis(600);
/// Delay before a failed pair is flagged as wrong
pub const MISMATCH_REVEAL: Duration = Duration::from_millis(800);
/// Delay before a failed pair flips back face down
pub const MISMATCH_CLEAR: Duration = Duration::from_millis(1800);

/// Where the board stands between reveals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardPhase {
    /// No cards face up
    Idle,
    /// One card face up, waiting for a candidate partner
    OneOpen,
    /// Two cards face up, resolution deadline pending
    Resolving,
    /// Every pair matched
    Complete,
}

/// How a single card should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Hidden,
    Open,
    Matched,
    /// Face up and flagged as part of a failed pair
    Wrong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    Flipped { index: usize },
    PairMatched { first: usize, second: usize },
    PairMissed { first: usize, second: usize },
}

/// A two-card resolution waiting on its deadlines. Dropping the board
/// drops the deadline with it, so a stale resolution can never land on a
/// later round.
#[derive(Debug, Clone, Copy)]
struct PendingPair {
    first: usize,
    second: usize,
    opened_at: Duration,
    is_match: bool,
    missed_shown: bool,
}

/// The face-up/face-down state of one dealt round.
///
/// Match and mismatch outcomes are not applied at reveal time: they are
/// scheduled against the round clock and land in `update`, so the player
/// sees both cards before they lock in or flip back.
#[derive(Debug, Clone)]
pub struct Board {
    deck: Deck,
    opened: Vec<usize>,
    matched: Vec<usize>,
    wrong_pair: Vec<usize>,
    pending: Option<PendingPair>,
    moves: u32,
}

impl Board {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            opened: Vec::new(),
            matched: Vec::new(),
            wrong_pair: Vec::new(),
            pending: None,
            moves: 0,
        }
    }

    /// Flip a card face up at `now` on the round clock.
    ///
    /// No-op while two cards are already open, on matched, open or
    /// wrong-flagged cards, and on out-of-range indices. Opening a second
    /// card counts one move and schedules the pair's resolution.
    pub fn reveal(&mut self, index: usize, now: Duration) -> Option<BoardEvent> {
        if index >= self.deck.len() || self.opened.len() == 2 {
            return None;
        }
        if self.matched.contains(&index)
            || self.opened.contains(&index)
            || self.wrong_pair.contains(&index)
        {
            return None;
        }
        self.opened.push(index);
        if self.opened.len() == 2 {
            self.moves += 1;
            let first = self.opened[0];
            let second = self.opened[1];
            self.pending = Some(PendingPair {
                first,
                second,
                opened_at: now,
                is_match: self.deck.symbol_at(first) == self.deck.symbol_at(second),
                missed_shown: false,
            });
        }
        Some(BoardEvent::Flipped { index })
    }

    /// Apply any pending resolution whose deadline has passed
    pub fn update(&mut self, now: Duration) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        let Some(mut pair) = self.pending else {
            return events;
        };
        if pair.is_match {
            if now >= pair.opened_at + MATCH_REVEAL {
                self.opened.clear();
                self.matched.push(pair.first);
                self.matched.push(pair.second);
                self.pending = None;
                events.push(BoardEvent::PairMatched {
                    first: pair.first,
                    second: pair.second,
                });
            }
            return events;
        }
        if !pair.missed_shown && now >= pair.opened_at + MISMATCH_REVEAL {
            pair.missed_shown = true;
            self.pending = Some(pair);
            self.wrong_pair.clear();
            self.wrong_pair.push(pair.first);
            self.wrong_pair.push(pair.second);
            events.push(BoardEvent::PairMissed {
                first: pair.first,
                second: pair.second,
            });
        }
        if now >= pair.opened_at + MISMATCH_CLEAR {
            self.opened.clear();
            self.wrong_pair.clear();
            self.pending = None;
        }
        events
    }

    pub fn phase(&self) -> BoardPhase {
        if self.is_complete() {
            BoardPhase::Complete
        } else if self.opened.len() == 2 {
            BoardPhase::Resolving
        } else if self.opened.len() == 1 {
            BoardPhase::OneOpen
        } else {
            BoardPhase::Idle
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.deck.is_empty() && self.matched.len() == self.deck.len()
    }

    pub fn card_face(&self, index: usize) -> CardFace {
        if self.matched.contains(&index) {
            CardFace::Matched
        } else if self.wrong_pair.contains(&index) {
            CardFace::Wrong
        } else if self.opened.contains(&index) {
            CardFace::Open
        } else {
            CardFace::Hidden
        }
    }

    pub fn symbol_at(&self, index: usize) -> Option<Symbol> {
        self.deck.symbol_at(index)
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pairs_found(&self) -> usize {
        self.matched.len() / 2
    }

    pub fn pair_count(&self) -> usize {
        self.deck.pair_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Unshuffled two-pair board: indices 0,1 match and 2,3 match
    fn small_board() -> Board {
        Board::new(Deck::from_symbols(&[Symbol::Boi, Symbol::Lua]))
    }

    #[test]
    fn test_first_reveal_opens_card() {
        let mut board = small_board();
        let event = board.reveal(0, ms(0));
        assert_eq!(event, Some(BoardEvent::Flipped { index: 0 }));
        assert_eq!(board.card_face(0), CardFace::Open);
        assert_eq!(board.phase(), BoardPhase::OneOpen);
        assert_eq!(board.moves(), 0);
    }

    #[test]
    fn test_second_reveal_counts_a_move() {
        let mut board = small_board();
        board.reveal(0, ms(0));
        board.reveal(1, ms(100));
        assert_eq!(board.moves(), 1);
        assert_eq!(board.phase(), BoardPhase::Resolving);
    }

    #[test]
    fn test_match_locks_in_after_delay() {
        let mut board = small_board();
        board.reveal(0, ms(0));
        board.reveal(1, ms(100));
        // Before the deadline the pair is still just open
        assert!(board.update(ms(699)).is_empty());
        assert_eq!(board.card_face(0), CardFace::Open);

        let events = board.update(ms(700));
        assert_eq!(events, vec![BoardEvent::PairMatched { first: 0, second: 1 }]);
        assert_eq!(board.card_face(0), CardFace::Matched);
        assert_eq!(board.card_face(1), CardFace::Matched);
        assert_eq!(board.phase(), BoardPhase::Idle);
        assert_eq!(board.pairs_found(), 1);
    }

    #[test]
    fn test_mismatch_flags_then_clears() {
        let mut board = small_board();
        board.reveal(0, ms(0));
        board.reveal(2, ms(0));

        assert!(board.update(ms(799)).is_empty());
        let events = board.update(ms(800));
        assert_eq!(events, vec![BoardEvent::PairMissed { first: 0, second: 2 }]);
        assert_eq!(board.card_face(0), CardFace::Wrong);
        assert_eq!(board.card_face(2), CardFace::Wrong);

        // The wrong pair stays visible and blocks new reveals
        assert_eq!(board.reveal(3, ms(900)), None);

        assert!(board.update(ms(1800)).is_empty());
        assert_eq!(board.card_face(0), CardFace::Hidden);
        assert_eq!(board.card_face(2), CardFace::Hidden);
        assert_eq!(board.phase(), BoardPhase::Idle);
        assert_eq!(board.moves(), 1);
    }

    #[test]
    fn test_large_jump_resolves_mismatch_in_one_update() {
        let mut board = small_board();
        board.reveal(0, ms(0));
        board.reveal(2, ms(0));
        let events = board.update(ms(5_000));
        assert_eq!(events, vec![BoardEvent::PairMissed { first: 0, second: 2 }]);
        assert_eq!(board.card_face(0), CardFace::Hidden);
        assert_eq!(board.phase(), BoardPhase::Idle);
    }

    #[test]
    fn test_reveal_guards() {
        let mut board = small_board();
        assert_eq!(board.reveal(99, ms(0)), None);
        board.reveal(0, ms(0));
        // Same card twice is not a move
        assert_eq!(board.reveal(0, ms(10)), None);
        assert_eq!(board.moves(), 0);
        board.reveal(2, ms(20));
        // Two cards open: everything is blocked
        assert_eq!(board.reveal(3, ms(30)), None);
    }

    #[test]
    fn test_matched_cards_stay_down() {
        let mut board = small_board();
        board.reveal(0, ms(0));
        board.reveal(1, ms(0));
        board.update(ms(600));
        assert_eq!(board.reveal(0, ms(700)), None);
        assert_eq!(board.card_face(0), CardFace::Matched);
    }

    #[test]
    fn test_board_completes_when_all_pairs_found() {
        let mut board = small_board();
        board.reveal(0, ms(0));
        board.reveal(1, ms(0));
        board.update(ms(600));
        assert!(!board.is_complete());

        board.reveal(2, ms(700));
        board.reveal(3, ms(700));
        let events = board.update(ms(1_300));
        assert_eq!(events, vec![BoardEvent::PairMatched { first: 2, second: 3 }]);
        assert!(board.is_complete());
        assert_eq!(board.phase(), BoardPhase::Complete);
        assert_eq!(board.moves(), 2);
    }

    #[test]
    fn test_update_without_pending_is_quiet() {
        let mut board = small_board();
        assert!(board.update(ms(10_000)).is_empty());
        board.reveal(0, ms(10_000));
        assert!(board.update(ms(20_000)).is_empty());
        assert_eq!(board.card_face(0), CardFace::Open);
    }
}
