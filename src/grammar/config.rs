//! YAML chord overrides
//!
//! Parses `chords.yaml` files into bindings that are merged over the defaults.
//!
//! ```yaml
//! chords:
//!   - key: alt+shift+a
//!     token: Forall
//!   - key: "*"
//!     literal: "×"
//!   - key: cmd+enter
//!     mode: text
//!     command: ResolveReferences
//!   - key: alt+w
//!     unbound: true
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use super::chords::{
    default_chords, ChordAction, ChordBinding, ChordTable, EditorCommand, NotationMode,
};
use super::token::TokenId;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Root structure of a chord YAML file
#[derive(Debug, Deserialize)]
pub struct ChordConfig {
    #[serde(default)]
    pub chords: Vec<ChordEntry>,
}

/// A single chord entry from YAML
#[derive(Debug, Deserialize)]
pub struct ChordEntry {
    pub key: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub literal: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub unbound: bool,
    #[serde(default)]
    pub platform: Option<String>,
}

/// A parsed entry: bind a chord, or remove a default one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordOverride {
    Bind(ChordBinding),
    Unbind {
        keystroke: Keystroke,
        mode: NotationMode,
    },
}

#[derive(Debug, Error)]
pub enum ChordConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid key: {0}")]
    InvalidKey(String),
    #[error("Invalid action for {key}: {reason}")]
    InvalidAction { key: String, reason: String },
    #[error("Invalid mode: {0}")]
    InvalidMode(String),
}

/// Load chord overrides from a YAML file
pub fn load_chord_file(path: &Path) -> Result<Vec<ChordOverride>, ChordConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_chord_yaml(&content)
}

/// Parse chord overrides from a YAML string
pub fn parse_chord_yaml(yaml: &str) -> Result<Vec<ChordOverride>, ChordConfigError> {
    let config: ChordConfig = serde_yaml::from_str(yaml)?;
    let current_platform = get_current_platform();
    let mut overrides = Vec::with_capacity(config.chords.len());

    for entry in config.chords {
        if let Some(ref platform) = entry.platform {
            if platform != current_platform {
                continue;
            }
        }
        overrides.push(parse_entry(entry)?);
    }

    Ok(overrides)
}

fn parse_entry(entry: ChordEntry) -> Result<ChordOverride, ChordConfigError> {
    let keystroke = parse_key_string(&entry.key)?;
    let mode = match entry.mode.as_deref() {
        None => NotationMode::Symbolic,
        Some(m) => parse_mode(m)?,
    };

    if entry.unbound {
        return Ok(ChordOverride::Unbind { keystroke, mode });
    }

    let invalid = |reason: &str| ChordConfigError::InvalidAction {
        key: entry.key.clone(),
        reason: reason.to_string(),
    };

    let action = match (&entry.token, &entry.literal, &entry.command) {
        (Some(token), None, None) => TokenId::from_str(token)
            .map(ChordAction::Token)
            .map_err(|_| invalid(&format!("unknown token `{}`", token)))?,
        (None, Some(literal), None) => {
            if literal.is_empty() {
                return Err(invalid("empty literal"));
            }
            ChordAction::Literal(literal.clone())
        }
        (None, None, Some(command)) => EditorCommand::from_name(command)
            .map(ChordAction::Command)
            .ok_or_else(|| invalid(&format!("unknown command `{}`", command)))?,
        (None, None, None) => return Err(invalid("needs one of token, literal, command")),
        _ => return Err(invalid("only one of token, literal, command is allowed")),
    };

    Ok(ChordOverride::Bind(ChordBinding::new(keystroke, mode, action)))
}

pub fn parse_mode(mode: &str) -> Result<NotationMode, ChordConfigError> {
    match mode.to_lowercase().as_str() {
        "text" => Ok(NotationMode::Text),
        "symbolic" | "formal" => Ok(NotationMode::Symbolic),
        _ => Err(ChordConfigError::InvalidMode(mode.to_string())),
    }
}

/// Parse a key string like "alt+shift+a" into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, ChordConfigError> {
    // A bare "+" is the plus key itself
    if key_str == "+" {
        return Ok(Keystroke::char('+'));
    }

    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in key_str.split('+') {
        let part_lower = part.trim().to_lowercase();
        match part_lower.as_str() {
            "cmd" => mods = mods | Modifiers::cmd(),
            "ctrl" | "control" => mods = mods | Modifiers::CTRL,
            "shift" => mods = mods | Modifiers::SHIFT,
            "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
            "meta" | "super" | "win" => mods = mods | Modifiers::META,
            _ => {
                if key_part.is_some() {
                    return Err(ChordConfigError::InvalidKey(format!(
                        "Multiple keys in chord: {}",
                        key_str
                    )));
                }
                key_part = Some(parse_key_code(&part_lower)?);
            }
        }
    }

    let key = key_part.ok_or_else(|| {
        ChordConfigError::InvalidKey(format!("No key found in chord: {}", key_str))
    })?;

    Ok(Keystroke::new(key, mods))
}

/// Parse a key code from string
fn parse_key_code(key: &str) -> Result<KeyCode, ChordConfigError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match key {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "space" => Ok(KeyCode::Space),
        "plus" => Ok(KeyCode::Char('+')),
        _ => key
            .strip_prefix('f')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=24).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| ChordConfigError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

fn get_current_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "linux"
    }
}

/// Build the chord table: defaults, then the user's `chords.yaml` if present.
///
/// A malformed user file is logged and ignored.
pub fn load_chord_table() -> ChordTable {
    let defaults = default_chords();
    let Some(path) = crate::config_paths::chords_file() else {
        return ChordTable::with_bindings(defaults);
    };
    if !path.exists() {
        return ChordTable::with_bindings(defaults);
    }

    match load_chord_file(&path) {
        Ok(overrides) => {
            tracing::info!(
                "Merging user chords from {} ({} entries)",
                path.display(),
                overrides.len()
            );
            ChordTable::with_bindings(merge_chords(defaults, overrides))
        }
        Err(e) => {
            tracing::warn!("Failed to load chords from {}: {}", path.display(), e);
            ChordTable::with_bindings(defaults)
        }
    }
}

/// Merge overrides into base bindings
///
/// - Same keystroke and mode replaces the base binding
/// - `Unbind` removes matching base bindings
/// - Anything else is appended
pub fn merge_chords(base: Vec<ChordBinding>, overrides: Vec<ChordOverride>) -> Vec<ChordBinding> {
    let mut result = base;

    for entry in overrides {
        match entry {
            ChordOverride::Unbind { keystroke, mode } => {
                result.retain(|b| !(b.keystroke == keystroke && b.mode == mode));
            }
            ChordOverride::Bind(binding) => {
                let existing = result
                    .iter()
                    .position(|b| b.keystroke == binding.keystroke && b.mode == binding.mode);
                match existing {
                    Some(idx) => result[idx] = binding,
                    None => result.push(binding),
                }
            }
        }
    }

    result
}
