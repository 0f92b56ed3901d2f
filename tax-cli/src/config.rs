//! User preferences persisted between runs.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::i18n::Language;
use crate::render::ResolvedTheme;

const APP_DIR: &str = "sgtax";
const PREFERENCES_FILE: &str = "preferences.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Next theme in the cycle System, Light, Dark.
    pub fn toggle(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }

    /// Resolves `System` from a `COLORFGBG` value such as `"15;0"`.
    ///
    /// The last field is the background colour; 0 to 6 and 8 are dark.
    /// Anything missing or unrecognised resolves to light.
    pub fn resolve(
        self,
        colorfgbg: Option<&str>,
    ) -> ResolvedTheme {
        match self {
            Self::Light => ResolvedTheme::Light,
            Self::Dark => ResolvedTheme::Dark,
            Self::System => {
                let background = colorfgbg
                    .and_then(|value| value.rsplit(';').next())
                    .and_then(|bg| bg.trim().parse::<u8>().ok());
                match background {
                    Some(0..=6 | 8) => ResolvedTheme::Dark,
                    _ => ResolvedTheme::Light,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

impl Preferences {
    /// `<config dir>/sgtax/preferences.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(PREFERENCES_FILE))
    }

    /// Loads preferences from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no preferences file; using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("cannot read preferences '{}'", path.display()));
            }
        };
        toml::from_str(&text)
            .with_context(|| format!("invalid preferences file '{}'", path.display()))
    }

    /// Writes preferences to `path`, creating parent directories.
    pub fn save(
        &self,
        path: &Path,
    ) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create config dir '{}'", parent.display()))?;
        }
        let text = toml::to_string(self).context("cannot serialize preferences")?;
        fs::write(path, text)
            .with_context(|| format!("cannot write preferences '{}'", path.display()))?;
        debug!(path = %path.display(), "saved preferences");
        Ok(())
    }
}
