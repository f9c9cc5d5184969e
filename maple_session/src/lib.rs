//! maple_session - Save characters and restore the most recently saved one
//!
//! Characters are stored as JSON files. Every save also records the written
//! path in a pointer file, so a later session can pick up where the last one
//! left off with [`SessionStore::load_most_recent`].

use maple_core::Character;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Name of the pointer file holding the last written character path
pub const LAST_MODIFIED_FILE_NAME: &str = ".maplestats_last_modified";

/// Session persistence error
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to access session file: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to encode or decode character JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Character name {0:?} cannot be used as a file name")]
    InvalidName(String),
}

/// Directory-backed store of saved characters
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Store rooted at `dir`; the directory is created on first save
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        SessionStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the pointer file
    pub fn pointer_path(&self) -> PathBuf {
        self.dir.join(LAST_MODIFIED_FILE_NAME)
    }

    /// Default file for a character: `<dir>/<name>.json`
    ///
    /// Names that are empty, `.` or `..`, or contain a path separator are
    /// rejected so the file always lands directly inside the store.
    pub fn default_path(&self, character: &Character) -> Result<PathBuf, SessionError> {
        let name = character.name.as_str();
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
            return Err(SessionError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(format!("{name}.json")))
    }

    /// Save to the character's default file and mark it most recent
    pub fn save(&self, character: &Character) -> Result<PathBuf, SessionError> {
        let path = self.default_path(character)?;
        self.save_to(character, &path)?;
        Ok(path)
    }

    /// Save to an explicit path and mark it most recent
    pub fn save_to(&self, character: &Character, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(character)?;
        fs::write(path, json)?;

        fs::create_dir_all(&self.dir)?;
        fs::write(self.pointer_path(), path.to_string_lossy().as_bytes())?;

        info!(character = %character.name, path = %path.display(), "character saved");
        Ok(())
    }

    /// Load a character file
    pub fn load(path: &Path) -> Result<Character, SessionError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load the most recently saved character, if the pointer and its target exist
    pub fn load_most_recent(&self) -> Result<Option<Character>, SessionError> {
        let pointer = self.pointer_path();
        if !pointer.is_file() {
            return Ok(None);
        }

        let target = PathBuf::from(fs::read_to_string(&pointer)?.trim());
        if !target.is_file() {
            warn!(path = %target.display(), "last saved character no longer exists");
            return Ok(None);
        }

        let character = Self::load(&target)?;
        info!(character = %character.name, path = %target.display(), "character restored");
        Ok(Some(character))
    }
}
