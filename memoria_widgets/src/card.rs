use memoria_core::{CardFace, Symbol};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Width and height of a memory card in terminal cells
pub const CARD_WIDTH: u16 = 9;
pub const CARD_HEIGHT: u16 = 5;

/// One tile of the memory board
pub struct CardWidget {
    pub symbol: Symbol,
    pub face: CardFace,
    /// Keyboard cursor or mouse hover sits on this card
    pub hovered: bool,
}

impl CardWidget {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            face: CardFace::Hidden,
            hovered: false,
        }
    }

    pub fn face(mut self, face: CardFace) -> Self {
        self.face = face;
        self
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    fn border_color(&self) -> Color {
        match self.face {
            CardFace::Matched => Theme::CARD_MATCHED,
            CardFace::Wrong => Theme::CARD_WRONG,
            _ if self.hovered => Theme::CARD_CURSOR,
            _ => Theme::CARD_BORDER,
        }
    }

    fn glyph_color(&self) -> Color {
        match self.face {
            CardFace::Matched => Theme::CARD_MATCHED,
            CardFace::Wrong => Theme::CARD_WRONG,
            _ => Theme::CARD_FACE,
        }
    }
}

impl Widget for CardWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < CARD_WIDTH || area.height < CARD_HEIGHT {
            return;
        }

        let border_style = Style::default().fg(self.border_color());

        match self.face {
            CardFace::Hidden => render_face_down(area, buf, border_style),
            CardFace::Wrong => {
                // Failed pairs flash inside a double border
                draw_double_border(area, buf, border_style);
                render_face_up(area, buf, self.symbol, self.glyph_color());
            }
            CardFace::Open | CardFace::Matched => {
                draw_rounded_border(area, buf, border_style);
                render_face_up(area, buf, self.symbol, self.glyph_color());
            }
        }
    }
}

fn render_face_up(area: Rect, buf: &mut Buffer, symbol: Symbol, color: Color) {
    let glyph = symbol.glyph().to_string();
    let glyph_style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    let corner_style = Style::default().fg(color);

    // Small glyphs in opposite corners, large one dead center
    buf.set_string(area.x + 1, area.y + 1, &glyph, corner_style);
    buf.set_string(
        area.x + CARD_WIDTH - 2,
        area.y + CARD_HEIGHT - 2,
        &glyph,
        corner_style,
    );
    buf.set_string(
        area.x + CARD_WIDTH / 2,
        area.y + CARD_HEIGHT / 2,
        &glyph,
        glyph_style,
    );
}

fn render_face_down(area: Rect, buf: &mut Buffer, border_style: Style) {
    let fill_style = Style::default().fg(Theme::CARD_BACK);

    buf.set_string(area.x, area.y, "\u{256d}", border_style); // ╭
    for x in 1..CARD_WIDTH - 1 {
        buf.set_string(area.x + x, area.y, "\u{2500}", border_style);
    }
    buf.set_string(area.x + CARD_WIDTH - 1, area.y, "\u{256e}", border_style); // ╮

    for y in 1..CARD_HEIGHT - 1 {
        buf.set_string(area.x, area.y + y, "\u{2502}", border_style);
        for x in 1..CARD_WIDTH - 1 {
            let pattern = if (x + y) % 2 == 0 {
                "\u{2593}"
            } else {
                "\u{2591}"
            }; // ▓ ░
            buf.set_string(area.x + x, area.y + y, pattern, fill_style);
        }
        buf.set_string(
            area.x + CARD_WIDTH - 1,
            area.y + y,
            "\u{2502}",
            border_style,
        );
    }

    buf.set_string(area.x, area.y + CARD_HEIGHT - 1, "\u{2570}", border_style); // ╰
    for x in 1..CARD_WIDTH - 1 {
        buf.set_string(
            area.x + x,
            area.y + CARD_HEIGHT - 1,
            "\u{2500}",
            border_style,
        );
    }
    buf.set_string(
        area.x + CARD_WIDTH - 1,
        area.y + CARD_HEIGHT - 1,
        "\u{256f}",
        border_style,
    ); // ╯
}

fn draw_rounded_border(area: Rect, buf: &mut Buffer, border_style: Style) {
    draw_border(
        area,
        buf,
        border_style,
        ["\u{256d}", "\u{256e}", "\u{2570}", "\u{256f}"],
        "\u{2500}",
        "\u{2502}",
    );
}

fn draw_double_border(area: Rect, buf: &mut Buffer, border_style: Style) {
    draw_border(
        area,
        buf,
        border_style,
        ["\u{2554}", "\u{2557}", "\u{255a}", "\u{255d}"],
        "\u{2550}",
        "\u{2551}",
    );
}

fn draw_border(
    area: Rect,
    buf: &mut Buffer,
    style: Style,
    corners: [&str; 4],
    horizontal: &str,
    vertical: &str,
) {
    buf.set_string(area.x, area.y, corners[0], style);
    for x in 1..CARD_WIDTH - 1 {
        buf.set_string(area.x + x, area.y, horizontal, style);
    }
    buf.set_string(area.x + CARD_WIDTH - 1, area.y, corners[1], style);

    for y in 1..CARD_HEIGHT - 1 {
        buf.set_string(area.x, area.y + y, vertical, style);
        for x in 1..CARD_WIDTH - 1 {
            buf.set_string(area.x + x, area.y + y, " ", Style::default());
        }
        buf.set_string(area.x + CARD_WIDTH - 1, area.y + y, vertical, style);
    }

    buf.set_string(area.x, area.y + CARD_HEIGHT - 1, corners[2], style);
    for x in 1..CARD_WIDTH - 1 {
        buf.set_string(area.x + x, area.y + CARD_HEIGHT - 1, horizontal, style);
    }
    buf.set_string(
        area.x + CARD_WIDTH - 1,
        area.y + CARD_HEIGHT - 1,
        corners[3],
        style,
    );
}
