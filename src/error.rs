use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by the game engine.
///
/// Wall and self collisions are not errors; they end the game through the
/// tick outcome instead.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum GameError {
    /// Every cell is covered by the snake, so food has nowhere to go.
    #[error("no free cell left for food on a {width}x{height} board")]
    BoardFull { width: u16, height: u16 },

    /// A caller-supplied layout breaks a board invariant.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}

/// Failures while loading an engine configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
