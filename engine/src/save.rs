use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::ConfigError;

pub const SAVE_VERSION: u8 = 1;
pub const DEFAULT_SAVE_FILE: &str = "game_save.dat";

/// Host window placement, carried through the save file untouched.
/// The engine never reads these fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub fullscreen: bool,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGame {
    pub current_config: String,
    pub initial_config: String,
    /// Catalog index, or -1 for a random level.
    pub level_index: i32,
    pub score: u32,
    pub best_score: u32,
    pub moves_used: u32,
    pub elapsed_seconds: u32,
    pub window: Option<WindowGeometry>,
}

#[derive(Debug)]
pub enum SaveError {
    IoError(std::io::Error),
    EncodeError(serde_yaml_ng::Error),
    DecodeError(serde_yaml_ng::Error),
    UnsupportedVersion { found: u8, expected: u8 },
    EmptyFile,
    InvalidBoard(ConfigError),
    InvalidState(String),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::IoError(e) => write!(f, "IO error: {}", e),
            SaveError::EncodeError(e) => write!(f, "Encode error: {}", e),
            SaveError::DecodeError(e) => write!(f, "Decode error: {}", e),
            SaveError::UnsupportedVersion { found, expected } => {
                write!(
                    f,
                    "Unsupported save version: found {}, expected {}",
                    found, expected
                )
            }
            SaveError::EmptyFile => write!(f, "Empty save data"),
            SaveError::InvalidBoard(e) => write!(f, "Invalid board in save: {}", e),
            SaveError::InvalidState(reason) => write!(f, "Invalid saved state: {}", reason),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::IoError(e)
    }
}

impl From<ConfigError> for SaveError {
    fn from(e: ConfigError) -> Self {
        SaveError::InvalidBoard(e)
    }
}

pub fn save_to_bytes(save: &SavedGame) -> Result<Vec<u8>, SaveError> {
    let payload = serde_yaml_ng::to_string(save).map_err(SaveError::EncodeError)?;

    let mut result = vec![SAVE_VERSION];
    result.extend(payload.into_bytes());
    Ok(result)
}

pub fn load_from_bytes(bytes: &[u8]) -> Result<SavedGame, SaveError> {
    if bytes.is_empty() {
        return Err(SaveError::EmptyFile);
    }

    let version = bytes[0];
    if version != SAVE_VERSION {
        return Err(SaveError::UnsupportedVersion {
            found: version,
            expected: SAVE_VERSION,
        });
    }

    let payload = std::str::from_utf8(&bytes[1..])
        .map_err(|e| SaveError::InvalidState(format!("Save payload is not UTF-8: {}", e)))?;
    serde_yaml_ng::from_str(payload).map_err(SaveError::DecodeError)
}

pub fn save_game(path: &Path, save: &SavedGame) -> Result<(), SaveError> {
    let bytes = save_to_bytes(save)?;

    let mut file = std::fs::File::create(path)?;
    file.write_all(&bytes)?;

    Ok(())
}

pub fn load_game(path: &Path) -> Result<SavedGame, SaveError> {
    let mut file = std::fs::File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;

    load_from_bytes(&buffer)
}
