use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StudioError};
use crate::io::image_io::validate_quality;
use crate::ops::Operation;

/// A headless editing session: load `input`, play `steps`, save `output`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EditScript {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Used only when `output` is a JPEG; defaults to 0.92.
    #[serde(default)]
    pub jpeg_quality: Option<f32>,
    /// Undo depth; defaults to 20.
    #[serde(default)]
    pub history_capacity: Option<usize>,
    #[serde(default)]
    pub steps: Vec<EditStep>,
}

impl EditScript {
    /// Check everything that can be checked before touching any file.
    pub fn validate(&self) -> Result<()> {
        if let Some(q) = self.jpeg_quality {
            validate_quality(q)?;
        }
        if self.history_capacity == Some(0) {
            return Err(StudioError::Script(
                "history_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// One document command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditStep {
    /// Run the operations as one pipeline, recorded as a single edit.
    Apply { operations: Vec<Operation> },
    Undo,
    Redo,
    Revert,
}

impl std::fmt::Display for EditStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apply { operations } => {
                write!(f, "Apply {}", Operation::pipeline(operations.clone()))
            }
            Self::Undo => write!(f, "Undo"),
            Self::Redo => write!(f, "Redo"),
            Self::Revert => write!(f, "Revert"),
        }
    }
}
