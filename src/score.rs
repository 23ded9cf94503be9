use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "scores.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// Best score seen so far; only ever moves up.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    #[must_use]
    pub fn new(best: u32) -> Self {
        Self { best }
    }

    #[must_use]
    pub fn best(self) -> u32 {
        self.best
    }

    /// Records `score`; returns true when it beats the previous best.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            return true;
        }
        false
    }
}

/// JSON file holding the single persisted high score.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    /// Store under the platform data directory, or the working directory
    /// when the platform has none.
    #[must_use]
    pub fn default_location() -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::at(base.join(APP_DIR_NAME).join(SCORE_FILE_NAME))
    }

    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored high score.
    ///
    /// A missing file is a first run and reads as `Ok(0)`; an unreadable or
    /// malformed file is an error so the caller can report it.
    pub fn load(&self) -> io::Result<u32> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };

        let file: ScoreFile = serde_json::from_str(&raw)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(file.high_score)
    }

    /// Writes `score`, creating parent directories when needed.
    pub fn save(&self, score: u32) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&ScoreFile { high_score: score })
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}
