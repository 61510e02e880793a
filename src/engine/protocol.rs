use std::path::PathBuf;

use crate::model::action::Action;
use crate::model::game_state::{GazeTarget, Item};

/* =========================
   Continuations
   ========================= */

/// What the controller does when a gateway hands a ticket back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    /// Advance, but only while still on step `from`.
    Advance { from: usize },
    /// Dispatch a choice's action, but only while still on step `from`.
    Dispatch { from: usize, action: Action },
    /// Show step `step` again.
    Redisplay { step: usize },
    Acknowledge,
    /// Car reached the pedestrian.
    Impact,
    RefreshGlows,
    PlasterApplied,
    /// First-aid box closed; the ambulance may come in.
    BeginArrival,
}

/// Continuation stamped with the generation it was issued in.
/// Gateways return each ticket at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub continuation: Continuation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTarget {
    Step { step: usize, index: usize },
    Start,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonRef {
    pub generation: u64,
    pub target: ButtonTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceRef {
    pub generation: u64,
    pub step: usize,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelButton {
    pub text: String,
    pub good: bool,
    pub target: ButtonRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelChoice {
    pub text: String,
    pub choice: ChoiceRef,
}

/* =========================
   Scene vocabulary
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WoundVisual {
    Open,
    Pulsing,
    Disinfected,
    Covered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbulanceStage {
    /// Drive in and wait at a distance.
    Approach,
    /// Pull up, medics load the victim, drive off.
    Arrive,
}

/* =========================
   Gateway calls
   ========================= */

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelCall {
    Instruction { text: String, buttons: Vec<PanelButton> },
    Question { text: String, choices: Vec<PanelChoice> },
    Feedback { text: String, positive: bool, on_dismiss: Ticket },
    GameOver { text: String },
    Win,
    Hide,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneCall {
    PlayCrash { on_impact: Ticket },
    PlayImpact { on_settled: Ticket },
    RevealFirstAidItems,
    ShowGazeTargets,
    HideGazeTargets,
    SetItemGlow { item: Item, active: bool },
    SetWound(WoundVisual),
    DropItem(Item),
    MoveBody,
    HideFirstAidBox { on_closed: Ticket },
    MoveAmbulance { stage: AmbulanceStage, on_done: Option<Ticket> },
    MarkPersonSaved,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneCall {
    Open,
    Close,
}

/* =========================
   Channel messages
   ========================= */

/// Everything the frontend can tell the engine.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    GazeTargetSelected(GazeTarget),
    GazeBothComplete,
    ItemPickup(Item),
    ItemUseRequested(Item),
    PersonClicked,
    ChoiceSelected(ChoiceRef),
    ButtonClicked(ButtonRef),
    PhoneDialSuccess,
    PhoneDialFailure,
    PhoneDismissed,
    ResetRequested,
    ReadCurrentStepRequested,
    FeedbackDismissed(Ticket),
    StageComplete(Ticket),
    LoadScenario(PathBuf),
}

#[derive(Debug, Clone)]
pub enum EngineResponse {
    Panel(PanelCall),
    Scene(SceneCall),
    Phone(PhoneCall),
    Notice(String),
}
