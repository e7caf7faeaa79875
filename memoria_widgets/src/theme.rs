use memoria_core::Team;
use ratatui::style::Color;

/// Festival-night color theme for the TUI
pub struct Theme;

impl Theme {
    // Backgrounds
    pub const BG: Color = Color::Rgb(13, 17, 23);
    pub const ARENA: Color = Color::Rgb(26, 18, 46);
    pub const PANEL_BG: Color = Color::Rgb(34, 24, 58);

    // Card colors
    pub const CARD_FACE: Color = Color::Rgb(240, 240, 240);
    pub const CARD_BORDER: Color = Color::Rgb(108, 117, 125);
    pub const CARD_BACK: Color = Color::Rgb(70, 52, 120);
    pub const CARD_CURSOR: Color = Color::Rgb(255, 214, 10);
    pub const CARD_MATCHED: Color = Color::Rgb(6, 214, 160);
    pub const CARD_WRONG: Color = Color::Rgb(230, 57, 70);

    // Team colors
    pub const GARANTIDO: Color = Color::Rgb(230, 57, 70);
    pub const CAPRICHOSO: Color = Color::Rgb(58, 134, 255);

    // Scoreboard
    pub const SCORE_COLOR: Color = Color::Rgb(255, 214, 10);
    pub const STAR_COLOR: Color = Color::Rgb(255, 214, 10);
    pub const CLOCK_COLOR: Color = Color::Rgb(76, 201, 240);
    pub const CLOCK_LOW: Color = Color::Rgb(230, 57, 70);

    // UI elements
    pub const GOLD: Color = Color::Rgb(255, 183, 3);
    pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
    pub const BRIGHT_TEXT: Color = Color::Rgb(255, 255, 255);
    pub const MUTED_TEXT: Color = Color::Rgb(160, 160, 180);

    pub fn team_color(team: Team) -> Color {
        match team {
            Team::Garantido => Self::GARANTIDO,
            Team::Caprichoso => Self::CAPRICHOSO,
        }
    }
}
