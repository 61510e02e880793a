use std::sync::mpsc::Sender;

use crate::engine::protocol::{
    AmbulanceStage, EngineResponse, PanelButton, PanelCall, PanelChoice, PhoneCall, SceneCall,
    Ticket, WoundVisual,
};
use crate::model::game_state::Item;

/// Everything the controller can ask of the presentation side.
///
/// Calls are fire-and-forget. A call that takes a [`Ticket`] promises to
/// hand it back once, after its visual sequence has finished: feedback
/// tickets as `FeedbackDismissed`, scene tickets as `StageComplete`.
/// Reset buttons on the game-over and win screens report `ResetRequested`;
/// the dialer reports `PhoneDialSuccess`, `PhoneDialFailure` or
/// `PhoneDismissed`.
pub trait Gateway {
    // Panel
    fn show_instruction(&mut self, text: &str, buttons: Vec<PanelButton>);
    fn show_question(&mut self, text: &str, choices: Vec<PanelChoice>);
    fn show_feedback(&mut self, text: &str, positive: bool, on_dismiss: Ticket);
    fn show_game_over(&mut self, text: &str);
    fn show_win(&mut self);
    fn hide(&mut self);
    /// The panel on screen, `None` while hidden.
    fn current_panel(&self) -> Option<&PanelCall>;

    fn is_visible(&self) -> bool {
        self.current_panel().is_some()
    }

    // Scene
    fn play_crash_sequence(&mut self, on_impact: Ticket);
    fn play_impact(&mut self, on_settled: Ticket);
    fn reveal_first_aid_items(&mut self);
    fn show_gaze_targets(&mut self);
    fn hide_gaze_targets(&mut self);
    fn set_item_glow(&mut self, item: Item, active: bool);
    fn set_wound(&mut self, wound: WoundVisual);
    fn drop_item(&mut self, item: Item);
    fn move_body(&mut self);
    fn hide_first_aid_box(&mut self, on_closed: Ticket);
    fn move_ambulance(&mut self, stage: AmbulanceStage, on_done: Option<Ticket>);
    fn mark_person_saved(&mut self);
    fn reset_scene_visuals(&mut self);

    // Phone
    fn open_dialer(&mut self);
    fn close_dialer(&mut self);
}

/// Destination for gateway calls turned into [`EngineResponse`]s.
pub trait ResponseSink {
    fn deliver(&mut self, response: EngineResponse);
}

impl ResponseSink for Sender<EngineResponse> {
    fn deliver(&mut self, response: EngineResponse) {
        if let Err(e) = self.send(response) {
            log::warn!("Presentation unavailable, dropping {:?}", e.0);
        }
    }
}

impl ResponseSink for Vec<EngineResponse> {
    fn deliver(&mut self, response: EngineResponse) {
        self.push(response);
    }
}

/// Gateway that turns every call into a message for a sink and keeps
/// track of what the panel shows.
pub struct ForwardingGateway<S> {
    sink: S,
    panel: Option<PanelCall>,
}

pub type ChannelGateway = ForwardingGateway<Sender<EngineResponse>>;

impl<S: ResponseSink> ForwardingGateway<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            panel: None,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn notice(&mut self, text: impl Into<String>) {
        self.sink.deliver(EngineResponse::Notice(text.into()));
    }

    fn panel(&mut self, call: PanelCall) {
        self.panel = match call {
            PanelCall::Hide => None,
            ref shown => Some(shown.clone()),
        };
        self.sink.deliver(EngineResponse::Panel(call));
    }

    fn scene(&mut self, call: SceneCall) {
        self.sink.deliver(EngineResponse::Scene(call));
    }

    fn phone(&mut self, call: PhoneCall) {
        self.sink.deliver(EngineResponse::Phone(call));
    }
}

impl<S: ResponseSink> Gateway for ForwardingGateway<S> {
    fn show_instruction(&mut self, text: &str, buttons: Vec<PanelButton>) {
        self.panel(PanelCall::Instruction {
            text: text.to_string(),
            buttons,
        });
    }

    fn show_question(&mut self, text: &str, choices: Vec<PanelChoice>) {
        self.panel(PanelCall::Question {
            text: text.to_string(),
            choices,
        });
    }

    fn show_feedback(&mut self, text: &str, positive: bool, on_dismiss: Ticket) {
        self.panel(PanelCall::Feedback {
            text: text.to_string(),
            positive,
            on_dismiss,
        });
    }

    fn show_game_over(&mut self, text: &str) {
        self.panel(PanelCall::GameOver {
            text: text.to_string(),
        });
    }

    fn show_win(&mut self) {
        self.panel(PanelCall::Win);
    }

    fn hide(&mut self) {
        self.panel(PanelCall::Hide);
    }

    fn current_panel(&self) -> Option<&PanelCall> {
        self.panel.as_ref()
    }

    fn play_crash_sequence(&mut self, on_impact: Ticket) {
        self.scene(SceneCall::PlayCrash { on_impact });
    }

    fn play_impact(&mut self, on_settled: Ticket) {
        self.scene(SceneCall::PlayImpact { on_settled });
    }

    fn reveal_first_aid_items(&mut self) {
        self.scene(SceneCall::RevealFirstAidItems);
    }

    fn show_gaze_targets(&mut self) {
        self.scene(SceneCall::ShowGazeTargets);
    }

    fn hide_gaze_targets(&mut self) {
        self.scene(SceneCall::HideGazeTargets);
    }

    fn set_item_glow(&mut self, item: Item, active: bool) {
        self.scene(SceneCall::SetItemGlow { item, active });
    }

    fn set_wound(&mut self, wound: WoundVisual) {
        self.scene(SceneCall::SetWound(wound));
    }

    fn drop_item(&mut self, item: Item) {
        self.scene(SceneCall::DropItem(item));
    }

    fn move_body(&mut self) {
        self.scene(SceneCall::MoveBody);
    }

    fn hide_first_aid_box(&mut self, on_closed: Ticket) {
        self.scene(SceneCall::HideFirstAidBox { on_closed });
    }

    fn move_ambulance(&mut self, stage: AmbulanceStage, on_done: Option<Ticket>) {
        self.scene(SceneCall::MoveAmbulance { stage, on_done });
    }

    fn mark_person_saved(&mut self) {
        self.scene(SceneCall::MarkPersonSaved);
    }

    fn reset_scene_visuals(&mut self) {
        self.scene(SceneCall::Reset);
    }

    fn open_dialer(&mut self) {
        self.phone(PhoneCall::Open);
    }

    fn close_dialer(&mut self) {
        self.phone(PhoneCall::Close);
    }
}
