use memoria_core::Team;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// One-row strip with the round's live numbers: team, moves, pairs,
/// star pace and the clock
pub struct StatsWidget {
    pub moves: u32,
    pub pairs_found: usize,
    pub pair_count: usize,
    pub stars: u8,
    pub time_text: String,
    pub low_time: bool,
    pub team: Option<Team>,
}

impl StatsWidget {
    pub fn new(moves: u32, pairs_found: usize, pair_count: usize) -> Self {
        Self {
            moves,
            pairs_found,
            pair_count,
            stars: 0,
            time_text: String::new(),
            low_time: false,
            team: None,
        }
    }

    pub fn stars(mut self, stars: u8) -> Self {
        self.stars = stars;
        self
    }

    pub fn time(mut self, time_text: impl Into<String>, low_time: bool) -> Self {
        self.time_text = time_text.into();
        self.low_time = low_time;
        self
    }

    pub fn team(mut self, team: Option<Team>) -> Self {
        self.team = team;
        self
    }
}

impl Widget for StatsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let chunks = Layout::horizontal([
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
        ])
        .split(area);

        let team_line = match self.team {
            Some(team) => Line::from(vec![
                Span::styled("\u{25cf} ", Style::default().fg(Theme::team_color(team))),
                Span::styled(
                    team.name(),
                    Style::default()
                        .fg(Theme::team_color(team))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            None => Line::from(Span::styled("\u{25cb}", Style::default().fg(Theme::DIM_TEXT))),
        };
        buf.set_line(chunks[0].x, chunks[0].y, &team_line, chunks[0].width);

        let moves_line = Line::from(vec![
            Span::styled("Jogadas: ", Style::default().fg(Theme::MUTED_TEXT)),
            Span::styled(
                format!("{}", self.moves),
                Style::default()
                    .fg(Theme::BRIGHT_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(chunks[1].x, chunks[1].y, &moves_line, chunks[1].width);

        let pairs_line = Line::from(vec![
            Span::styled("Pares: ", Style::default().fg(Theme::MUTED_TEXT)),
            Span::styled(
                format!("{}/{}", self.pairs_found, self.pair_count),
                Style::default()
                    .fg(Theme::CARD_MATCHED)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        buf.set_line(chunks[2].x, chunks[2].y, &pairs_line, chunks[2].width);

        let filled = self.stars.min(3) as usize;
        let stars_line = Line::from(vec![
            Span::styled(
                "\u{2605}".repeat(filled),
                Style::default().fg(Theme::STAR_COLOR),
            ),
            Span::styled(
                "\u{2606}".repeat(3 - filled),
                Style::default().fg(Theme::DIM_TEXT),
            ),
        ]);
        buf.set_line(chunks[3].x, chunks[3].y, &stars_line, chunks[3].width);

        let clock_color = if self.low_time {
            Theme::CLOCK_LOW
        } else {
            Theme::CLOCK_COLOR
        };
        let time_line = Line::from(Span::styled(
            self.time_text.clone(),
            Style::default().fg(clock_color).add_modifier(Modifier::BOLD),
        ));
        buf.set_line(chunks[4].x, chunks[4].y, &time_line, chunks[4].width);
    }
}
