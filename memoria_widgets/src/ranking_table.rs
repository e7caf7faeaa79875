use memoria_core::{format_mm_ss, RankingEntry};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Top-ten score table for the ranking tab
pub struct RankingTableWidget<'a> {
    pub entries: &'a [RankingEntry],
}

impl<'a> RankingTableWidget<'a> {
    pub fn new(entries: &'a [RankingEntry]) -> Self {
        Self { entries }
    }
}

fn truncated(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let mut cut: String = name.chars().take(max.saturating_sub(1)).collect();
        cut.push('\u{2026}');
        cut
    }
}

impl<'a> Widget for RankingTableWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }

        if self.entries.is_empty() {
            let text = "Nenhuma pontuação registrada ainda";
            let x = area.x + area.width.saturating_sub(text.chars().count() as u16) / 2;
            let y = area.y + area.height / 2;
            buf.set_string(x, y, text, Style::default().fg(Theme::DIM_TEXT));
            return;
        }

        let header = format!(
            " {:>2}  {:<20} {:<11} {:<8} {:>6}  {:>7}",
            "#", "Nome", "Equipe", "Nível", "Tempo", "Pontos"
        );
        buf.set_string(
            area.x,
            area.y,
            &header,
            Style::default()
                .fg(Theme::MUTED_TEXT)
                .add_modifier(Modifier::BOLD),
        );

        for (i, entry) in self.entries.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.bottom() {
                break;
            }

            let rank_style = if i == 0 {
                Style::default().fg(Theme::GOLD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::MUTED_TEXT)
            };
            let team_label = entry.team.map(|t| t.name()).unwrap_or("-");
            let team_style = match entry.team {
                Some(team) => Style::default().fg(Theme::team_color(team)),
                None => Style::default().fg(Theme::DIM_TEXT),
            };

            let line = Line::from(vec![
                Span::styled(format!(" {:>2}  ", i + 1), rank_style),
                Span::styled(
                    format!("{:<20} ", truncated(&entry.name, 20)),
                    Style::default().fg(Theme::BRIGHT_TEXT),
                ),
                Span::styled(format!("{:<11} ", team_label), team_style),
                Span::styled(
                    format!("{:<8} ", entry.difficulty.name()),
                    Style::default().fg(Theme::MUTED_TEXT),
                ),
                Span::styled(
                    format!("{:>6}  ", format_mm_ss(entry.time_secs)),
                    Style::default().fg(Theme::CLOCK_COLOR),
                ),
                Span::styled(
                    format!("{:>7}", entry.score),
                    Style::default()
                        .fg(Theme::SCORE_COLOR)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}
