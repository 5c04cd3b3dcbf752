//! Game options and configuration
//!
//! Options come from an rc file in the classic `OPTIONS=` format:
//!
//! ```text
//! # detective-quest configuration
//! OPTIONS=buckets:16,!stop_at_dead_end
//! OPTIONS=msghistory:50
//! ```

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{CONFIG_DIR_NAME, DEFAULT_BUCKET_COUNT, DEFAULT_MSG_HISTORY, OPTIONS_FILE_NAME};

/// Option parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Missing value for option: {0}")]
    MissingValue(String),
}

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Slots in the suspect table
    pub bucket_count: NonZeroUsize,
    /// End the exploration when the player walks into a room with no exits
    pub stop_at_dead_end: bool,
    /// Messages kept in the scrollback
    pub msghistory: usize,
    /// Use the light terminal palette
    pub light: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            stop_at_dead_end: true,
            msghistory: DEFAULT_MSG_HISTORY,
            light: false,
        }
    }
}

impl GameOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::IoError(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Load the user's rc file, falling back to defaults when there is none
    pub fn load_default() -> Result<Self, OptionsError> {
        match default_options_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    let opt = opt.trim();
                    if !opt.is_empty() {
                        options.parse_option(opt)?;
                    }
                }
            }
        }

        Ok(options)
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':').or_else(|| opt.split_once('=')) {
            return self.set_option(key.trim(), value.trim());
        }

        let (negated, name) = if let Some(name) = opt.strip_prefix('!') {
            (true, name)
        } else if let Some(name) = opt.strip_prefix("no").filter(|name| is_bool_option(name)) {
            (true, name)
        } else {
            (false, opt)
        };

        self.set_bool_option(name, !negated)
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "stop_at_dead_end" => self.stop_at_dead_end = value,
            "light" => self.light = value,
            "buckets" | "bucket_count" | "msghistory" => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());

        match name {
            "buckets" | "bucket_count" => {
                self.bucket_count = value
                    .parse::<usize>()
                    .ok()
                    .and_then(NonZeroUsize::new)
                    .ok_or_else(invalid)?;
            }
            "msghistory" => {
                self.msghistory = value.parse().map_err(|_| invalid())?;
            }
            "stop_at_dead_end" | "light" => {
                let flag = match value.to_lowercase().as_str() {
                    "true" | "on" | "yes" | "1" => true,
                    "false" | "off" | "no" | "0" => false,
                    _ => return Err(invalid()),
                };
                self.set_bool_option(name, flag)?;
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Convert options to config file format
    pub fn to_config_string(&self) -> String {
        let flag = |on: bool, name: &str| {
            if on {
                name.to_string()
            } else {
                format!("!{}", name)
            }
        };

        let stop = flag(self.stop_at_dead_end, "stop_at_dead_end");
        let light = flag(self.light, "light");

        [
            "# detective-quest configuration file".to_string(),
            String::new(),
            format!("OPTIONS=buckets:{}", self.bucket_count),
            format!("OPTIONS={}", stop),
            format!("OPTIONS=msghistory:{}", self.msghistory),
            format!("OPTIONS={}", light),
        ]
        .join("\n")
    }
}

/// Options that take no value and accept `!name` / `noname`
fn is_bool_option(name: &str) -> bool {
    matches!(name, "stop_at_dead_end" | "light")
}

/// Where the rc file lives on this platform, if there is a config dir
pub fn default_options_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(CONFIG_DIR_NAME);
    path.push(OPTIONS_FILE_NAME);
    Some(path)
}
