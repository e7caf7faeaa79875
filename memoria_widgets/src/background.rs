use memoria_core::Team;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Animated arena-night backdrop. When a team is declared the waves lean
/// toward that side's color.
pub struct BackgroundWidget {
    pub tick: u64,
    pub team: Option<Team>,
}

impl BackgroundWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick, team: None }
    }

    pub fn team(mut self, team: Option<Team>) -> Self {
        self.team = team;
        self
    }
}

impl Widget for BackgroundWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cycle = (self.tick % 360) as f64;

        // Arena night base, nudged toward the declared side
        let (base_r, base_g, base_b) = match self.team {
            Some(Team::Garantido) => (34u8, 16u8, 40u8),
            Some(Team::Caprichoso) => (18u8, 20u8, 56u8),
            None => (26u8, 18u8, 46u8),
        };

        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let wave = ((x as f64 * 0.3 + y as f64 * 0.5 + cycle * 0.02).sin() * 4.0) as i16;

                let r = (base_r as i16 + wave).clamp(0, 255) as u8;
                let g = (base_g as i16 + wave / 2).clamp(0, 255) as u8;
                let b = (base_b as i16 + wave).clamp(0, 255) as u8;

                // Scanline effect: slightly dim every other row
                let (r, g, b) = if y % 2 == 0 {
                    (r, g, b)
                } else {
                    (
                        r.saturating_sub(3),
                        g.saturating_sub(3),
                        b.saturating_sub(3),
                    )
                };

                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(Color::Rgb(r, g, b));
                }
            }
        }
    }
}

/// Decorative border around the whole terminal. The shimmer runs in gold
/// until a side is declared, then in that side's color.
pub struct FrameWidget {
    pub tick: u64,
    pub team: Option<Team>,
}

impl FrameWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick, team: None }
    }

    pub fn team(mut self, team: Option<Team>) -> Self {
        self.team = team;
        self
    }
}

impl Widget for FrameWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 4 {
            return;
        }

        let cycle = (self.tick % 600) as f64;
        let accent = self.team.map(Theme::team_color).unwrap_or(Theme::GOLD);

        // Top and bottom runs
        for x in area.left()..area.right() {
            let t = (x as f64 / area.width as f64 + cycle * 0.005).sin().abs();
            let color = interpolate_color(Theme::ARENA, accent, (t * 0.3) as f32);

            if let Some(cell) = buf.cell_mut((x, area.top())) {
                cell.set_symbol("\u{2500}");
                cell.set_fg(color);
            }
            if let Some(cell) = buf.cell_mut((x, area.bottom().saturating_sub(1))) {
                cell.set_symbol("\u{2500}");
                cell.set_fg(color);
            }
        }

        // Left and right runs
        for y in area.top()..area.bottom() {
            let t = (y as f64 / area.height as f64 + cycle * 0.005).sin().abs();
            let color = interpolate_color(Theme::ARENA, accent, (t * 0.3) as f32);

            if let Some(cell) = buf.cell_mut((area.left(), y)) {
                cell.set_symbol("\u{2502}");
                cell.set_fg(color);
            }
            if let Some(cell) = buf.cell_mut((area.right().saturating_sub(1), y)) {
                cell.set_symbol("\u{2502}");
                cell.set_fg(color);
            }
        }

        // Rounded corners in the full accent
        let corner_style = Style::default().fg(accent);
        set_cell(buf, area.left(), area.top(), "\u{256d}", corner_style);
        set_cell(
            buf,
            area.right().saturating_sub(1),
            area.top(),
            "\u{256e}",
            corner_style,
        );
        set_cell(
            buf,
            area.left(),
            area.bottom().saturating_sub(1),
            "\u{2570}",
            corner_style,
        );
        set_cell(
            buf,
            area.right().saturating_sub(1),
            area.bottom().saturating_sub(1),
            "\u{256f}",
            corner_style,
        );
    }
}

fn set_cell(buf: &mut Buffer, x: u16, y: u16, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol);
        if let Some(fg) = style.fg {
            cell.set_fg(fg);
        }
    }
}

fn interpolate_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let r = (r1 as f32 + (r2 as f32 - r1 as f32) * t) as u8;
            let g = (g1 as f32 + (g2 as f32 - g1 as f32) * t) as u8;
            let b = (b1 as f32 + (b2 as f32 - b1 as f32) * t) as u8;
            Color::Rgb(r, g, b)
        }
        _ => to,
    }
}
