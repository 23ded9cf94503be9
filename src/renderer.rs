use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::app::App;
use crate::config::{
    BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN,
    GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL,
    GridSize, THEME_CLASSIC, Theme,
};
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_countdown, render_game_over_menu, render_pause_menu};

/// Renders the full game frame from the session state.
pub fn render(frame: &mut Frame<'_>, app: &App, now: Instant) {
    let theme = &THEME_CLASSIC;
    let state = app.engine().state();
    let play_area = render_hud(frame, frame.area(), state, app.high_score(), theme);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, state, theme);
    render_snake(frame, inner, state, theme);

    if let Some(remaining) = app.countdown_remaining(now) {
        render_countdown(frame, play_area, remaining, theme);
        return;
    }

    match state.status() {
        GameStatus::Paused => render_pause_menu(frame, play_area, state, theme),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            play_area,
            state.score(),
            app.high_score(),
            app.is_new_high_score(),
            state.end_reason(),
            theme,
        ),
        GameStatus::Running => {}
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some(food) = state.food() else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let snake = state.snake();
    let last = snake.len() - 1;

    let buffer = frame.buffer_mut();
    for (idx, segment) in snake.segments().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };

        let (glyph, style) = if idx == 0 {
            (
                head_glyph(state.direction()),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            )
        } else if idx == last {
            (GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail))
        } else {
            (GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body))
        };

        buffer.set_string(x, y, glyph, style);
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Maps a board cell into the inner play rect; `None` when it does not fit.
fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
