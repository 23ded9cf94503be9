use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;
use crate::schedule::speed_level;

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &GameState,
    high_score: u32,
    theme: &Theme,
) -> Rect {
    let [play_area, score_area, settings_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(state, high_score, theme)).alignment(Alignment::Right),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(settings_line(state, theme)).alignment(Alignment::Right),
        settings_area,
    );

    play_area
}

fn score_line(state: &GameState, high_score: u32, theme: &Theme) -> Line<'static> {
    let value = Style::new().fg(theme.hud_score).add_modifier(Modifier::BOLD);
    let label = Style::new().fg(theme.hud_muted);

    Line::from(vec![
        Span::styled("Length ", label),
        Span::styled(state.snake().len().to_string(), value),
        Span::styled("  Speed ", label),
        Span::styled(speed_level(state.score()).to_string(), value),
        Span::styled("  Score ", label),
        Span::styled(state.score().to_string(), value),
        Span::styled("  Hi ", label),
        Span::styled(high_score.max(state.score()).to_string(), value),
    ])
}

fn settings_line(state: &GameState, theme: &Theme) -> Line<'static> {
    let muted = Style::new().fg(theme.hud_muted);
    let bounds = state.bounds();

    Line::from(Span::styled(
        format!(
            "{}x{}  wall pass {}  countdown {}s",
            bounds.width,
            bounds.height,
            if state.wall_pass_enabled() { "on" } else { "off" },
            state.countdown_time()
        ),
        muted,
    ))
}
