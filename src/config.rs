use std::fs;
use std::path::Path;

use log::warn;
use ratatui::style::Color;
use ratatui::symbols::border;
use serde::Deserialize;

use crate::error::ConfigError;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Default board width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 25;

/// Default board height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 25;

/// Smallest accepted board dimension: three columns for the starting snake
/// plus a free one ahead of its head.
pub const MIN_GRID_DIMENSION: u16 = 4;

/// Default countdown before play resumes, in seconds.
pub const DEFAULT_COUNTDOWN_SECS: u8 = 3;

pub const MIN_COUNTDOWN_SECS: u8 = 1;
pub const MAX_COUNTDOWN_SECS: u8 = 10;

/// Score awarded for each food item eaten.
pub const POINTS_PER_FOOD: u32 = 10;

/// Settings accepted when constructing an engine.
///
/// Every field is optional in a config file; missing fields take the defaults
/// and out-of-range values are normalised by [`EngineConfig::normalized`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub wall_pass_enabled: bool,
    pub countdown_time: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            wall_pass_enabled: false,
            countdown_time: i64::from(DEFAULT_COUNTDOWN_SECS),
        }
    }
}

impl EngineConfig {
    /// Loads a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the grid size, replacing unusable dimensions with defaults.
    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        GridSize {
            width: dimension_or_default(self.grid_width, DEFAULT_GRID_WIDTH, "width"),
            height: dimension_or_default(self.grid_height, DEFAULT_GRID_HEIGHT, "height"),
        }
    }

    /// Returns a copy with every field inside its accepted range.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let grid = self.grid_size();
        Self {
            grid_width: grid.width,
            grid_height: grid.height,
            wall_pass_enabled: self.wall_pass_enabled,
            countdown_time: i64::from(clamp_countdown(self.countdown_time)),
        }
    }
}

/// Clamps a countdown duration into `[MIN_COUNTDOWN_SECS, MAX_COUNTDOWN_SECS]`.
#[must_use]
pub fn clamp_countdown(seconds: i64) -> u8 {
    let clamped = seconds.clamp(
        i64::from(MIN_COUNTDOWN_SECS),
        i64::from(MAX_COUNTDOWN_SECS),
    );
    u8::try_from(clamped).unwrap_or(DEFAULT_COUNTDOWN_SECS)
}

fn dimension_or_default(value: u16, default: u16, axis: &str) -> u16 {
    if value < MIN_GRID_DIMENSION {
        warn!("grid {axis} {value} is below {MIN_GRID_DIMENSION}, using {default}");
        return default;
    }
    value
}

/// Colors applied to the board and overlays.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_SNAKE_TAIL: &str = "▓";
pub const GLYPH_FOOD: &str = "●";
