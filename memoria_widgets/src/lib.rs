pub mod background;
pub mod board;
pub mod card;
pub mod popup;
pub mod ranking_table;
pub mod stats;
pub mod theme;

pub use theme::Theme;
