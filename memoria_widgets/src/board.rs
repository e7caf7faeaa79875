use memoria_core::Board;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::card::{CardWidget, CARD_HEIGHT, CARD_WIDTH};

/// Cards per row on the board grid
pub const BOARD_COLS: u16 = 4;
/// Horizontal gap between cards
pub const CARD_GAP: u16 = 1;

/// The 4-wide memory grid, centered in its area.
/// Rows are laid out top to bottom in deal order.
pub struct BoardWidget<'a> {
    pub board: &'a Board,
    pub cursor: Option<usize>,
}

impl<'a> BoardWidget<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            cursor: None,
        }
    }

    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    fn rows(&self) -> u16 {
        let n = self.board.len() as u16;
        n.div_ceil(BOARD_COLS)
    }

    pub fn total_width(&self) -> u16 {
        BOARD_COLS * CARD_WIDTH + (BOARD_COLS - 1) * CARD_GAP
    }

    pub fn total_height(&self) -> u16 {
        self.rows() * CARD_HEIGHT
    }

    /// The Rect a card occupies inside `area`, if it fits
    pub fn card_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        if index >= self.board.len() {
            return None;
        }
        let start_x = area.x + area.width.saturating_sub(self.total_width()) / 2;
        let start_y = area.y + area.height.saturating_sub(self.total_height()) / 2;

        let col = index as u16 % BOARD_COLS;
        let row = index as u16 / BOARD_COLS;
        let rect = Rect::new(
            start_x + col * (CARD_WIDTH + CARD_GAP),
            start_y + row * CARD_HEIGHT,
            CARD_WIDTH,
            CARD_HEIGHT,
        );
        if rect.right() > area.right() || rect.bottom() > area.bottom() {
            return None;
        }
        Some(rect)
    }

    /// Which card a terminal position lands on, for mouse clicks
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        (0..self.board.len()).find(|&i| {
            self.card_rect(area, i)
                .map(|rect| rect.contains((x, y).into()))
                .unwrap_or(false)
        })
    }
}

impl<'a> Widget for BoardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for i in 0..self.board.len() {
            let Some(card_area) = self.card_rect(area, i) else {
                continue;
            };
            let Some(symbol) = self.board.symbol_at(i) else {
                continue;
            };
            CardWidget::new(symbol)
                .face(self.board.card_face(i))
                .hovered(self.cursor == Some(i))
                .render(card_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use memoria_core::Deck;

    use super::*;

    #[test]
    fn test_hit_test_round_trips_card_rects() {
        let board = Board::new(Deck::standard());
        let widget = BoardWidget::new(&board);
        let area = Rect::new(0, 0, 60, 24);

        for i in 0..board.len() {
            let rect = widget.card_rect(area, i).unwrap();
            assert_eq!(widget.hit_test(area, rect.x + 1, rect.y + 1), Some(i));
        }
    }

    #[test]
    fn test_hit_test_misses_the_gaps() {
        let board = Board::new(Deck::standard());
        let widget = BoardWidget::new(&board);
        let area = Rect::new(0, 0, 60, 24);

        let first = widget.card_rect(area, 0).unwrap();
        // One cell right of the first card is the gap column
        assert_eq!(widget.hit_test(area, first.right(), first.y), None);
        assert_eq!(widget.hit_test(area, 0, 0), None);
    }
}
