//! Slash-command parsing
//!
//! Commands arrive as the raw submitted line. Parsing is strict: one
//! space between tokens, no trailing garbage.

use thiserror::Error;

/// Why a tower could not be placed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("lane already has a tower")]
    Occupied,
    #[error("not enough score to build a tower")]
    InsufficientScore,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid parameter for '{command}'")]
    Parameter { command: String },
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// A successfully parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pause,
    /// 1-based lane slot
    Tower { lane: usize },
}

impl Command {
    /// Parse a submitted line. A single trailing newline is tolerated,
    /// anything else must match a command exactly.
    pub fn parse(line: &str, lane_count: usize) -> Result<Self, CommandError> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let mut tokens = line.split(' ');
        let head = tokens.next().unwrap_or("");

        match head {
            "pause" => {
                if tokens.next().is_some() {
                    return Err(CommandError::Parameter {
                        command: "pause".to_string(),
                    });
                }
                Ok(Command::Pause)
            }
            "tower" => {
                let arg = tokens.next().ok_or_else(|| CommandError::Parameter {
                    command: "tower".to_string(),
                })?;
                if tokens.next().is_some() {
                    return Err(CommandError::Parameter {
                        command: "tower".to_string(),
                    });
                }
                let lane: usize = arg.parse().map_err(|_| CommandError::Parameter {
                    command: "tower".to_string(),
                })?;
                if lane < 1 || lane > lane_count {
                    return Err(CommandError::Parameter {
                        command: "tower".to_string(),
                    });
                }
                Ok(Command::Tower { lane })
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
