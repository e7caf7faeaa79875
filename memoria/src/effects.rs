use ratatui::style::Color;
use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

/// Our keyed effect manager using tachyonfx's built-in EffectManager
pub type FxManager = EffectManager<&'static str>;

// ─── Effect Factories ────────────────────────────────────────────────

const DARK: Color = Color::Rgb(13, 17, 23);

/// Screen transition: content sweeps in from the left
pub fn screen_transition() -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,
        2,
        DARK,
        (400, Interpolation::CubicOut),
    )
}

/// Coalesce effect: a fresh board materializes from empty space
pub fn board_deal() -> Effect {
    fx::coalesce((450, Interpolation::CubicOut))
}

/// Celebration HSL shift for the victory screens
pub fn celebration_shimmer() -> Effect {
    let shift = fx::hsl_shift_fg([30.0, 0.0, 0.15], (800, Interpolation::SineInOut));
    fx::ping_pong(shift)
}

/// Subtle gold shimmer for the title on mode select
pub fn title_shimmer() -> Effect {
    let shift = fx::hsl_shift_fg([15.0, 0.1, 0.1], (1200, Interpolation::SineInOut));
    fx::repeating(fx::ping_pong(shift))
}

/// Fade foreground to gold (for the score reveal on a win)
pub fn score_highlight() -> Effect {
    let gold = Color::Rgb(255, 214, 10);
    let shift = fx::fade_to_fg(gold, (200, Interpolation::QuadOut));
    let shift_back = fx::fade_from_fg(gold, (600, Interpolation::QuadIn));
    fx::sequence(&[shift, shift_back])
}

/// Fade foreground to red when the countdown runs out
pub fn time_up_flash() -> Effect {
    let red = Color::Rgb(230, 57, 70);
    let shift = fx::fade_to_fg(red, (250, Interpolation::QuadOut));
    let shift_back = fx::fade_from_fg(red, (700, Interpolation::QuadIn));
    fx::sequence(&[shift, shift_back])
}
