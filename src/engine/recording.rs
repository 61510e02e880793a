use crate::engine::gateway::ForwardingGateway;
use crate::engine::protocol::{EngineResponse, PanelCall, PhoneCall, SceneCall, Ticket};

/// Gateway that keeps every call in order. Used by tests and headless runs.
pub type RecordingGateway = ForwardingGateway<Vec<EngineResponse>>;

impl RecordingGateway {
    pub fn recording() -> Self {
        ForwardingGateway::new(Vec::new())
    }

    pub fn calls(&self) -> &[EngineResponse] {
        self.sink()
    }

    pub fn take_calls(&mut self) -> Vec<EngineResponse> {
        std::mem::take(self.sink_mut())
    }

    pub fn panels(&self) -> impl Iterator<Item = &PanelCall> {
        self.calls().iter().filter_map(|r| match r {
            EngineResponse::Panel(call) => Some(call),
            _ => None,
        })
    }

    pub fn scenes(&self) -> impl Iterator<Item = &SceneCall> {
        self.calls().iter().filter_map(|r| match r {
            EngineResponse::Scene(call) => Some(call),
            _ => None,
        })
    }

    pub fn phones(&self) -> impl Iterator<Item = &PhoneCall> {
        self.calls().iter().filter_map(|r| match r {
            EngineResponse::Phone(call) => Some(call),
            _ => None,
        })
    }

    pub fn last_panel(&self) -> Option<&PanelCall> {
        self.panels().last()
    }

    /// Ticket of the most recent feedback panel.
    pub fn last_feedback_ticket(&self) -> Option<Ticket> {
        self.panels()
            .filter_map(|call| match call {
                PanelCall::Feedback { on_dismiss, .. } => Some(on_dismiss.clone()),
                _ => None,
            })
            .last()
    }

    /// Ticket of the most recent scene call that carries one.
    pub fn last_scene_ticket(&self) -> Option<Ticket> {
        self.scenes()
            .filter_map(|call| match call {
                SceneCall::PlayCrash { on_impact } => Some(on_impact.clone()),
                SceneCall::PlayImpact { on_settled } => Some(on_settled.clone()),
                SceneCall::HideFirstAidBox { on_closed } => Some(on_closed.clone()),
                SceneCall::MoveAmbulance { on_done, .. } => on_done.clone(),
                _ => None,
            })
            .last()
    }

    pub fn notices(&self) -> Vec<&str> {
        self.calls()
            .iter()
            .filter_map(|r| match r {
                EngineResponse::Notice(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
