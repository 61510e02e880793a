use serde::{Deserialize, Serialize};

use crate::model::action::Action;
use crate::model::game_state::{GazeTarget, Item};

/// One entry of the scenario. Field names match the JSON step tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDescriptor {
    pub id: usize,
    pub title: String,

    #[serde(flatten)]
    pub kind: StepKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepKind {
    Instruction {
        content: String,
        buttons: Vec<StepButton>,
    },
    Question {
        question: String,
        choices: Vec<Choice>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    #[default]
    Good,
    Bad,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepButton {
    pub text: String,
    #[serde(default)]
    pub style: ButtonStyle,
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_over_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl StepButton {
    /// Text handed to the action handler, if any.
    pub fn payload(&self) -> Option<&str> {
        self.game_over_message
            .as_deref()
            .or(self.feedback.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub correct: bool,
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

/// Out-of-band condition that can also finish a step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Interaction {
    Gaze {
        targets: Vec<GazeTarget>,
        #[serde(rename = "onComplete")]
        on_complete: Action,
    },
    Pickup {
        items: Vec<Item>,
        #[serde(default)]
        sequence: bool,
        #[serde(rename = "onComplete")]
        on_complete: Action,
    },
}

impl Interaction {
    pub fn on_complete(&self) -> &Action {
        match self {
            Interaction::Gaze { on_complete, .. } | Interaction::Pickup { on_complete, .. } => {
                on_complete
            }
        }
    }
}

impl StepDescriptor {
    pub fn body(&self) -> &str {
        match &self.kind {
            StepKind::Instruction { content, .. } => content,
            StepKind::Question { question, .. } => question,
        }
    }

    /// Title and body as one panel text.
    pub fn panel_text(&self) -> String {
        format!("{}\n\n{}", self.title, self.body())
    }

    pub fn is_gaze_step(&self) -> bool {
        matches!(self.interaction, Some(Interaction::Gaze { .. }))
    }

    pub fn button(&self, index: usize) -> Option<&StepButton> {
        match &self.kind {
            StepKind::Instruction { buttons, .. } => buttons.get(index),
            StepKind::Question { .. } => None,
        }
    }

    pub fn choice(&self, index: usize) -> Option<&Choice> {
        match &self.kind {
            StepKind::Question { choices, .. } => choices.get(index),
            StepKind::Instruction { .. } => None,
        }
    }
}
