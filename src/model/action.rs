use std::fmt;

use serde::{Deserialize, Serialize};

/// Named behaviour a button, choice or interaction can trigger.
/// Names that the table spells wrong survive loading as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Action {
    NextStep,
    MoveBody,
    OpenPhone,
    ShowEhboItems,
    EnableTreatment,
    StartInteraction,
    Win,
    GameOver,
    ShowFeedback,
    Unknown(String),
}

impl Action {
    pub fn name(&self) -> &str {
        match self {
            Action::NextStep => "nextStep",
            Action::MoveBody => "moveBody",
            Action::OpenPhone => "openPhone",
            Action::ShowEhboItems => "showEhboItems",
            Action::EnableTreatment => "enableTreatment",
            Action::StartInteraction => "startInteraction",
            Action::Win => "win",
            Action::GameOver => "gameOver",
            Action::ShowFeedback => "showFeedback",
            Action::Unknown(name) => name,
        }
    }
}

impl From<&str> for Action {
    fn from(name: &str) -> Self {
        match name {
            "nextStep" => Action::NextStep,
            "moveBody" => Action::MoveBody,
            "openPhone" => Action::OpenPhone,
            "showEhboItems" => Action::ShowEhboItems,
            "enableTreatment" => Action::EnableTreatment,
            "startInteraction" => Action::StartInteraction,
            "win" => Action::Win,
            "gameOver" => Action::GameOver,
            "showFeedback" => Action::ShowFeedback,
            other => Action::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Action {
    fn from(name: String) -> Self {
        Action::from(name.as_str())
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.name().to_string()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
