use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::Symbol;

/// The pool of face-down cards a round is dealt from: every symbol twice,
/// in shuffled positions.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Symbol>,
}

impl Deck {
    /// Create the standard 16-card deck (all eight symbols, paired)
    pub fn standard() -> Self {
        Self::from_symbols(&Symbol::ALL)
    }

    /// Build a deck from a custom symbol set, two cards per symbol
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        let mut cards = Vec::with_capacity(symbols.len() * 2);
        for &symbol in symbols {
            cards.push(symbol);
            cards.push(symbol);
        }
        Self { cards }
    }

    /// Fisher-Yates shuffle of the card positions
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of matching pairs the deck holds
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn symbol_at(&self, index: usize) -> Option<Symbol> {
        self.cards.get(index).copied()
    }

    pub fn cards(&self) -> &[Symbol] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol_counts(deck: &Deck) -> Vec<(Symbol, usize)> {
        Symbol::ALL
            .iter()
            .map(|&s| (s, deck.cards().iter().filter(|&&c| c == s).count()))
            .collect()
    }

    #[test]
    fn test_standard_deck_has_16_cards() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 16);
        assert_eq!(deck.pair_count(), 8);
    }

    #[test]
    fn test_standard_deck_pairs_every_symbol() {
        let deck = Deck::standard();
        for (_, count) in symbol_counts(&deck) {
            assert_eq!(count, 2);
        }
    }

    #[test]
    fn test_shuffle_preserves_card_multiset() {
        let mut rng = rand::thread_rng();
        let mut deck = Deck::standard();
        let before = symbol_counts(&deck);
        deck.shuffle(&mut rng);
        assert_eq!(symbol_counts(&deck), before);
        assert_eq!(deck.len(), 16);
    }

    #[test]
    fn test_from_symbols_doubles_the_set() {
        let deck = Deck::from_symbols(&[Symbol::Boi, Symbol::Lua]);
        assert_eq!(deck.len(), 4);
        assert_eq!(deck.pair_count(), 2);
        assert_eq!(deck.symbol_at(0), Some(Symbol::Boi));
        assert_eq!(deck.symbol_at(4), None);
    }
}
