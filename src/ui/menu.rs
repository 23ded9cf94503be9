use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::config::Theme;
use crate::game::{EndReason, GameState};

/// Draws the countdown as a small centered popup.
pub fn render_countdown(frame: &mut Frame<'_>, area: Rect, remaining: u8, theme: &Theme) {
    let popup = centered_popup(area, 40, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GET READY"),
        Line::from(""),
        Line::from(remaining.to_string()).style(
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        popup,
    );
}

/// Draws the pause screen, which doubles as the settings screen.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, state: &GameState, theme: &Theme) {
    let popup = centered_popup(area, 70, 50);
    frame.render_widget(Clear, popup);

    let [body_row, footer_row] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(popup);

    let lines = vec![
        Line::from("PAUSED").style(
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!(
            "[T] Wall pass: {}",
            if state.wall_pass_enabled() { "on" } else { "off" }
        )),
        Line::from(format!("[+]/[-] Countdown: {}s", state.countdown_time())),
        Line::from(""),
        Line::from("[Space]/[P] Resume"),
        Line::from("[Q]/[Esc] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        body_row,
    );

    frame.render_widget(
        Paragraph::new(Line::from("Use arrows/WASD to move"))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.menu_footer)),
        footer_row,
    );
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    is_new_high: bool,
    end_reason: Option<EndReason>,
    theme: &Theme,
) {
    let popup = centered_popup(area, 70, 45);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("GAME OVER").style(
            Style::new()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("High score: {}", high_score.max(score))),
        Line::from(match end_reason {
            Some(EndReason::WallCollision) => "Cause: hit wall",
            Some(EndReason::SelfCollision) => "Cause: hit yourself",
            Some(EndReason::BoardFull) => "Cause: no room left for food",
            None => "",
        }),
        Line::from(if is_new_high { "New high score!" } else { "" }),
        Line::from(""),
        Line::from("[Enter] Play Again"),
        Line::from("[Q]/[Esc] Quit"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" game over ")),
        popup,
    );
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}
