//! Console types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A handheld console (or console add-on) model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleType {
    Dmg,
    Sgb,
    Mgb,
    Mgl,
    Sgb2,
    Cgb,
    Agb,
    Ags,
    Gbs,
    Oxy,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown console type: {0}")]
pub struct ParseConsoleError(pub String);

impl ConsoleType {
    /// All consoles in site order
    pub const ALL: [ConsoleType; 10] = [
        ConsoleType::Dmg,
        ConsoleType::Sgb,
        ConsoleType::Mgb,
        ConsoleType::Mgl,
        ConsoleType::Sgb2,
        ConsoleType::Cgb,
        ConsoleType::Agb,
        ConsoleType::Ags,
        ConsoleType::Gbs,
        ConsoleType::Oxy,
    ];

    /// Short code used in URLs and file names
    pub fn code(&self) -> &'static str {
        match self {
            ConsoleType::Dmg => "dmg",
            ConsoleType::Sgb => "sgb",
            ConsoleType::Mgb => "mgb",
            ConsoleType::Mgl => "mgl",
            ConsoleType::Sgb2 => "sgb2",
            ConsoleType::Cgb => "cgb",
            ConsoleType::Agb => "agb",
            ConsoleType::Ags => "ags",
            ConsoleType::Gbs => "gbs",
            ConsoleType::Oxy => "oxy",
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ConsoleType::Dmg => "Game Boy",
            ConsoleType::Sgb => "Super Game Boy",
            ConsoleType::Mgb => "Game Boy Pocket",
            ConsoleType::Mgl => "Game Boy Light",
            ConsoleType::Sgb2 => "Super Game Boy 2",
            ConsoleType::Cgb => "Game Boy Color",
            ConsoleType::Agb => "Game Boy Advance",
            ConsoleType::Ags => "Game Boy Advance SP",
            ConsoleType::Gbs => "Game Boy Player",
            ConsoleType::Oxy => "Game Boy Micro",
        }
    }
}

impl fmt::Display for ConsoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ConsoleType {
    type Err = ParseConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        ConsoleType::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| ParseConsoleError(s.to_string()))
    }
}
