use std::sync::mpsc::{Receiver, Sender};

use crate::config::steps::StepTable;
use crate::engine::controller::GameController;
use crate::engine::gateway::{ChannelGateway, ForwardingGateway};
use crate::engine::protocol::{EngineCommand, EngineResponse};
use crate::model::outcome::EventOutcome;

/// Runs the controller on its own thread, fed by the frontend's commands.
pub struct Engine {
    rx: Receiver<EngineCommand>,
    controller: GameController<ChannelGateway>,
}

impl Engine {
    pub fn new(rx: Receiver<EngineCommand>, tx: Sender<EngineResponse>, steps: StepTable) -> Self {
        Self {
            rx,
            controller: GameController::new(steps, ForwardingGateway::new(tx)),
        }
    }

    /// Shows the ready screen, then handles commands until the frontend
    /// hangs up.
    pub fn run(&mut self) {
        self.controller.reset();

        while let Ok(cmd) = self.rx.recv() {
            let loading = match &cmd {
                EngineCommand::LoadScenario(path) => Some(path.display().to_string()),
                _ => None,
            };

            let outcome = self.controller.handle(cmd);

            if let Some(path) = loading {
                let text = match outcome {
                    EventOutcome::Applied => format!(
                        "Scenario geladen: {} ({} stappen)",
                        path,
                        self.controller.steps().len()
                    ),
                    EventOutcome::Rejected { reason } | EventOutcome::Ignored { reason } => {
                        format!("Scenario niet geladen: {reason}")
                    }
                };
                self.controller.gateway_mut().notice(text);
            }
        }

        log::info!("Frontend disconnected, engine stopping");
    }
}
