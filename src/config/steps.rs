use std::fs;
use std::path::Path;

use crate::config::error::ConfigError;
use crate::model::step::{StepDescriptor, StepKind};

const DEFAULT_STEPS: &str = include_str!("../../assets/steps.json");

/// Ordered, validated, read-only list of steps.
///
/// Step numbers are 1-based: step `n` is described by the `n`-th entry,
/// whose `id` is also `n`. Step 0 is the ready screen and has no entry.
#[derive(Debug, Clone)]
pub struct StepTable {
    steps: Vec<StepDescriptor>,
}

impl StepTable {
    pub fn new(steps: Vec<StepDescriptor>) -> Result<Self, ConfigError> {
        validate(&steps)?;
        Ok(Self { steps })
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let steps: Vec<StepDescriptor> = serde_json::from_str(json)?;
        Self::new(steps)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Descriptor for step number `step`, `None` for 0 or past the end.
    pub fn get(&self, step: usize) -> Option<&StepDescriptor> {
        step.checked_sub(1).and_then(|index| self.steps.get(index))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepDescriptor> {
        self.steps.iter()
    }
}

impl Default for StepTable {
    fn default() -> Self {
        match Self::from_json(DEFAULT_STEPS) {
            Ok(table) => table,
            Err(e) => {
                log::error!("Built-in step table is invalid: {e}");
                Self { steps: Vec::new() }
            }
        }
    }
}

fn validate(steps: &[StepDescriptor]) -> Result<(), ConfigError> {
    if steps.is_empty() {
        return Err(ConfigError::EmptyTable);
    }

    for (position, step) in steps.iter().enumerate() {
        let expected = position + 1;
        if step.id != expected {
            return Err(ConfigError::StepIdMismatch {
                position,
                expected,
                found: step.id,
            });
        }

        match &step.kind {
            StepKind::Instruction { buttons, .. } if buttons.is_empty() => {
                return Err(ConfigError::EmptyButtons(step.id));
            }
            StepKind::Question { choices, .. } if choices.is_empty() => {
                return Err(ConfigError::EmptyChoices(step.id));
            }
            StepKind::Question { choices, .. } if !choices.iter().any(|c| c.correct) => {
                return Err(ConfigError::NoCorrectChoice(step.id));
            }
            _ => {}
        }
    }

    Ok(())
}
