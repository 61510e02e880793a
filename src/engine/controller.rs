use std::path::Path;

use crate::config::steps::StepTable;
use crate::engine::gateway::Gateway;
use crate::engine::protocol::{
    AmbulanceStage, ButtonRef, ButtonTarget, ChoiceRef, Continuation, EngineCommand, PanelButton,
    PanelCall, PanelChoice, Ticket, WoundVisual,
};
use crate::model::action::Action;
use crate::model::game_state::{GameState, GazeTarget, Item};
use crate::model::outcome::EventOutcome;
use crate::model::step::{ButtonStyle, Interaction, StepDescriptor, StepKind};

/// First step on which the first-aid items can be picked up and used.
pub const TREATMENT_STEP: usize = 4;

const READY_TEXT: &str = "Klaar?\n\nHet scenario start. Volg de instructies.";
const START_LABEL: &str = "Start";
const CLOSE_LABEL: &str = "Sluiten";
const INFO_TEXT: &str = "Informatie\n\nVolg de instructies op het scherm.";
const DEFAULT_GAME_OVER: &str = "Het scenario is mislukt. Probeer het opnieuw.";
const DEFAULT_BAD_CHOICE: &str = "Dit is niet de beste keuze.";

const SPRAY_APPLIED: &str = "Wond gedesinfecteerd met spray.";
const ALREADY_DISINFECTED: &str = "De wond is al gedesinfecteerd.";
const DISINFECT_FIRST: &str = "Eerst desinfecteren! Gebruik eerst de spray.";
const PLASTER_APPLIED: &str = "Pleister aangebracht. De ambulance zal nu volledig arriveren.";
const PLASTER_ALREADY: &str = "Pleister al aangebracht.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready screen is up, the car has not started.
    Ready,
    Playing,
    Won,
    /// Game-over screen; only a reset gets out of here.
    Failed,
}

/// What the step-text panel was opened over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Covered {
    ReadyScreen,
    Step(usize),
    Nothing,
}

/// The step-text panel while it is up.
#[derive(Debug, Clone)]
struct Reading {
    covered: Covered,
    panel: PanelCall,
}

/// The scenario state machine.
///
/// Owns the game state and drives the gateway. Every gate is checked here,
/// so the gateway may deliver any event at any time.
pub struct GameController<G: Gateway> {
    state: GameState,
    steps: StepTable,
    gateway: G,
    phase: Phase,
    /// Bumped on reset; tickets and refs from older generations are stale.
    generation: u64,
    dialer_open: bool,
    reading: Option<Reading>,
}

impl<G: Gateway> GameController<G> {
    pub fn new(steps: StepTable, gateway: G) -> Self {
        Self {
            state: GameState::default(),
            steps,
            gateway,
            phase: Phase::Ready,
            generation: 0,
            dialer_open: false,
            reading: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn steps(&self) -> &StepTable {
        &self.steps
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    pub fn dialer_open(&self) -> bool {
        self.dialer_open
    }

    pub fn current_step(&self) -> Option<&StepDescriptor> {
        self.steps.get(self.state.step)
    }

    /// Routes one frontend event to its handler.
    pub fn handle(&mut self, command: EngineCommand) -> EventOutcome {
        let label = format!("{:?}", command);
        let outcome = match command {
            EngineCommand::GazeTargetSelected(target) => self.handle_gaze(target),
            EngineCommand::GazeBothComplete => self.handle_gaze_complete(),
            EngineCommand::ItemPickup(item) => self.handle_item_pickup(item),
            EngineCommand::ItemUseRequested(item) => self.handle_item_use(item),
            EngineCommand::PersonClicked => self.handle_person_clicked(),
            EngineCommand::ChoiceSelected(choice) => self.evaluate_choice(choice),
            EngineCommand::ButtonClicked(button) => self.handle_button(button),
            EngineCommand::PhoneDialSuccess => self.handle_phone_success(),
            EngineCommand::PhoneDialFailure => self.handle_phone_failure(),
            EngineCommand::PhoneDismissed => self.handle_phone_dismissed(),
            EngineCommand::ResetRequested => self.reset(),
            EngineCommand::ReadCurrentStepRequested => self.read_current_step(),
            EngineCommand::FeedbackDismissed(ticket) => self.dismiss_feedback(ticket),
            EngineCommand::StageComplete(ticket) => self.resume(ticket),
            EngineCommand::LoadScenario(path) => self.load_scenario(&path),
        };

        match &outcome {
            EventOutcome::Applied => log::debug!("{label}: applied"),
            EventOutcome::Rejected { reason } => log::info!("{label}: rejected ({reason})"),
            EventOutcome::Ignored { reason } => log::debug!("{label}: ignored ({reason})"),
        }

        outcome
    }

    /* =========================
       Step flow
       ========================= */

    /// Moves to the next step and shows it. A missing descriptor leaves the
    /// increment in place and changes nothing else.
    pub fn advance(&mut self) -> EventOutcome {
        let step = self.state.next_step();

        let Some(descriptor) = self.steps.get(step) else {
            log::warn!("No configuration for step {}", step);
            return EventOutcome::ignored(format!("no configuration for step {}", step));
        };

        log::info!("Step {}: {}", step, descriptor.title);
        present_step(&mut self.gateway, self.generation, step, descriptor);
        EventOutcome::Applied
    }

    fn redisplay(&mut self, step: usize) -> EventOutcome {
        if step != self.state.step {
            return EventOutcome::ignored(format!(
                "redisplay of step {} while on step {}",
                step, self.state.step
            ));
        }
        match self.steps.get(step) {
            Some(descriptor) => {
                present_step(&mut self.gateway, self.generation, step, descriptor);
                EventOutcome::Applied
            }
            None => EventOutcome::ignored(format!("no configuration for step {}", step)),
        }
    }

    pub fn dispatch_action(&mut self, action: &Action, payload: Option<&str>) -> EventOutcome {
        log::debug!("Dispatching {action}");

        match action {
            Action::NextStep => self.advance(),
            Action::MoveBody => {
                self.gateway.move_body();
                self.advance()
            }
            Action::OpenPhone => {
                self.gateway.hide();
                self.dialer_open = true;
                self.gateway.open_dialer();
                EventOutcome::Applied
            }
            Action::ShowEhboItems => {
                self.gateway.hide();
                self.gateway.reveal_first_aid_items();
                self.refresh_glows();
                EventOutcome::Applied
            }
            Action::EnableTreatment => {
                self.gateway.hide();
                self.refresh_glows();
                EventOutcome::Applied
            }
            Action::StartInteraction => {
                self.gateway.hide();
                self.gateway.show_gaze_targets();
                EventOutcome::Applied
            }
            Action::Win => self.win(),
            Action::GameOver => self.game_over(payload.unwrap_or(DEFAULT_GAME_OVER)),
            Action::ShowFeedback => self.show_step_feedback(payload, false),
            Action::Unknown(name) => {
                log::warn!("Action {} not found", name);
                EventOutcome::ignored(format!("unknown action '{}'", name))
            }
        }
    }

    /// Feedback that returns to the current step once dismissed.
    fn show_step_feedback(&mut self, text: Option<&str>, positive: bool) -> EventOutcome {
        let ticket = self.ticket(Continuation::Redisplay {
            step: self.state.step,
        });
        let text = text.unwrap_or(DEFAULT_BAD_CHOICE);
        self.gateway.show_feedback(text, positive, ticket);
        EventOutcome::Applied
    }

    /// Runs the current step's interaction completion action once its
    /// condition holds.
    fn complete_interaction(&mut self) -> EventOutcome {
        let Some(interaction) = self.current_step().and_then(|d| d.interaction.clone()) else {
            return EventOutcome::ignored(format!("step {} has no interaction", self.state.step));
        };

        if !self.interaction_satisfied(&interaction) {
            return EventOutcome::rejected("interaction not finished");
        }

        self.dispatch_action(interaction.on_complete(), None)
    }

    fn interaction_satisfied(&self, interaction: &Interaction) -> bool {
        match interaction {
            Interaction::Gaze { .. } => self.state.gaze_check_completed,
            Interaction::Pickup { items, .. } => items.iter().all(|&item| self.item_used(item)),
        }
    }

    fn item_used(&self, item: Item) -> bool {
        match item {
            Item::Spray => self.state.wound_disinfected,
            Item::Plaster => self.state.plaster_applied,
        }
    }

    /// First item the current step wants used before `item`, if it has not been.
    fn item_out_of_order(&self, item: Item) -> Option<Item> {
        let Some(Interaction::Pickup {
            items,
            sequence: true,
            ..
        }) = self.current_step().and_then(|d| d.interaction.as_ref())
        else {
            return None;
        };

        items
            .iter()
            .take_while(|&&i| i != item)
            .copied()
            .find(|&i| !self.item_used(i))
    }

    /* =========================
       Panel input
       ========================= */

    pub fn evaluate_choice(&mut self, choice_ref: ChoiceRef) -> EventOutcome {
        if let Some(stale) = self.check_generation(choice_ref.generation) {
            return stale;
        }
        if self.phase != Phase::Playing {
            return EventOutcome::ignored("not playing");
        }
        let step = choice_ref.step;
        if step != self.state.step {
            return EventOutcome::ignored(format!(
                "choice for step {} while on step {}",
                step, self.state.step
            ));
        }

        let Some(choice) = self
            .steps
            .get(step)
            .and_then(|d| d.choice(choice_ref.index))
            .cloned()
        else {
            log::warn!("Step {} has no choice {}", step, choice_ref.index);
            return EventOutcome::ignored("no such choice");
        };

        let continuation = match (&choice.action, choice.correct) {
            (Some(action), _) => Continuation::Dispatch {
                from: step,
                action: action.clone(),
            },
            (None, true) => Continuation::Advance { from: step },
            (None, false) => Continuation::Redisplay { step },
        };

        let ticket = self.ticket(continuation);
        self.gateway
            .show_feedback(&choice.feedback, choice.correct, ticket);
        EventOutcome::Applied
    }

    pub fn handle_button(&mut self, button_ref: ButtonRef) -> EventOutcome {
        if let Some(stale) = self.check_generation(button_ref.generation) {
            return stale;
        }

        match button_ref.target {
            ButtonTarget::Start => self.start(),
            ButtonTarget::Close => match self.reading.take() {
                Some(reading) if self.reading_shown(&reading) => self.uncover(reading.covered),
                _ => EventOutcome::ignored("step text not shown"),
            },
            ButtonTarget::Step { step, index } => {
                if self.phase != Phase::Playing {
                    return EventOutcome::ignored("not playing");
                }
                if step != self.state.step {
                    return EventOutcome::ignored(format!(
                        "button for step {} while on step {}",
                        step, self.state.step
                    ));
                }
                let Some(button) = self.steps.get(step).and_then(|d| d.button(index)).cloned()
                else {
                    log::warn!("Step {} has no button {}", step, index);
                    return EventOutcome::ignored("no such button");
                };
                match button.action {
                    Action::ShowFeedback => self.show_step_feedback(
                        button.payload(),
                        button.style == ButtonStyle::Good,
                    ),
                    ref action => self.dispatch_action(action, button.payload()),
                }
            }
        }
    }

    fn start(&mut self) -> EventOutcome {
        if self.phase != Phase::Ready {
            return EventOutcome::ignored("scenario already started");
        }
        self.phase = Phase::Playing;
        self.gateway.hide();
        self.state.set_car_moving(true);
        let ticket = self.ticket(Continuation::Impact);
        self.gateway.play_crash_sequence(ticket);
        log::info!("Scenario started");
        EventOutcome::Applied
    }

    /// Toggles a panel repeating the current step's text. Closing it puts
    /// back whatever it covered. Panels waiting for a response stay up.
    pub fn read_current_step(&mut self) -> EventOutcome {
        if let Some(reading) = self.reading.take() {
            if self.reading_shown(&reading) {
                return self.uncover(reading.covered);
            }
        }

        let covered = match self.gateway.current_panel() {
            Some(PanelCall::Feedback { .. } | PanelCall::GameOver { .. } | PanelCall::Win) => {
                return EventOutcome::ignored("panel is waiting for a response");
            }
            _ if self.phase == Phase::Ready => Covered::ReadyScreen,
            Some(_) => Covered::Step(self.state.step),
            None => Covered::Nothing,
        };

        let close = vec![PanelButton {
            text: CLOSE_LABEL.to_string(),
            good: true,
            target: ButtonRef {
                generation: self.generation,
                target: ButtonTarget::Close,
            },
        }];

        let text = match self.steps.get(self.state.step) {
            Some(descriptor) => descriptor.panel_text(),
            None => INFO_TEXT.to_string(),
        };
        self.gateway.show_instruction(&text, close.clone());
        self.reading = Some(Reading {
            covered,
            panel: PanelCall::Instruction {
                text,
                buttons: close,
            },
        });
        EventOutcome::Applied
    }

    /// False once anything else has replaced the step-text panel.
    fn reading_shown(&self, reading: &Reading) -> bool {
        self.gateway.current_panel() == Some(&reading.panel)
    }

    fn uncover(&mut self, covered: Covered) -> EventOutcome {
        match covered {
            Covered::ReadyScreen if self.phase == Phase::Ready => {
                self.show_ready_screen();
                EventOutcome::Applied
            }
            Covered::Step(step) if self.phase == Phase::Playing => self.redisplay(step),
            _ => {
                self.gateway.hide();
                EventOutcome::Applied
            }
        }
    }

    /* =========================
       Continuations
       ========================= */

    fn dismiss_feedback(&mut self, ticket: Ticket) -> EventOutcome {
        if let Some(stale) = self.check_generation(ticket.generation) {
            return stale;
        }
        self.gateway.hide();
        self.resume(ticket)
    }

    /// Picks up where an earlier call to the gateway left off.
    pub fn resume(&mut self, ticket: Ticket) -> EventOutcome {
        if let Some(stale) = self.check_generation(ticket.generation) {
            return stale;
        }

        match ticket.continuation {
            Continuation::Advance { from } => {
                if self.state.step != from {
                    return EventOutcome::ignored(format!(
                        "advance from step {} while on step {}",
                        from, self.state.step
                    ));
                }
                self.advance()
            }
            Continuation::Dispatch { from, action } => {
                if self.phase != Phase::Playing || self.state.step != from {
                    return EventOutcome::ignored(format!(
                        "{} from step {} while on step {}",
                        action, from, self.state.step
                    ));
                }
                self.dispatch_action(&action, None)
            }
            Continuation::Redisplay { step } => self.redisplay(step),
            Continuation::Acknowledge => EventOutcome::Applied,
            Continuation::Impact => self.on_impact(),
            Continuation::RefreshGlows => {
                self.refresh_glows();
                EventOutcome::Applied
            }
            Continuation::PlasterApplied => {
                self.gateway.set_item_glow(Item::Plaster, false);
                let ticket = self.ticket(Continuation::BeginArrival);
                self.gateway.hide_first_aid_box(ticket);
                EventOutcome::Applied
            }
            Continuation::BeginArrival => self.begin_arrival(),
        }
    }

    fn on_impact(&mut self) -> EventOutcome {
        if self.phase != Phase::Playing || self.state.crashed {
            return EventOutcome::ignored("impact already handled");
        }
        self.state.set_crashed(true);
        self.state.set_car_moving(false);
        log::info!("Impact");

        let ticket = self.ticket(Continuation::Advance {
            from: self.state.step,
        });
        self.gateway.play_impact(ticket);
        EventOutcome::Applied
    }

    fn begin_arrival(&mut self) -> EventOutcome {
        if self.phase != Phase::Playing {
            return EventOutcome::ignored("not playing");
        }

        if self.state.start_ambulance_arrival() {
            // The departure lands one step later: the interaction below advances first.
            let ticket = self.ticket(Continuation::Advance {
                from: self.state.step + 1,
            });
            self.gateway
                .move_ambulance(AmbulanceStage::Arrive, Some(ticket));
        } else {
            log::debug!("Ambulance not en route, skipping arrival");
        }

        self.complete_interaction()
    }

    /* =========================
       Scene input
       ========================= */

    pub fn handle_gaze(&mut self, target: GazeTarget) -> EventOutcome {
        if self.phase != Phase::Playing {
            return EventOutcome::ignored("not playing");
        }
        if self.state.gaze_check_completed {
            return EventOutcome::ignored("gaze check already completed");
        }
        if !self.current_step().is_some_and(|d| d.is_gaze_step()) {
            return EventOutcome::rejected(format!("no gaze check on step {}", self.state.step));
        }

        self.state.look(target);

        if self.state.has_looked_both_ways() {
            self.handle_gaze_complete()
        } else {
            EventOutcome::Applied
        }
    }

    /// Idempotent: only the first call after both looks does anything.
    pub fn handle_gaze_complete(&mut self) -> EventOutcome {
        if self.state.gaze_check_completed {
            return EventOutcome::ignored("gaze check already completed");
        }
        if self.phase != Phase::Playing {
            return EventOutcome::ignored("not playing");
        }
        if !self.current_step().is_some_and(|d| d.is_gaze_step()) {
            return EventOutcome::rejected(format!("no gaze check on step {}", self.state.step));
        }
        if !self.state.complete_gaze_check() {
            return EventOutcome::rejected("look both left and right first");
        }

        log::info!("Gaze check completed");
        self.gateway.hide_gaze_targets();
        self.complete_interaction()
    }

    pub fn handle_item_pickup(&mut self, item: Item) -> EventOutcome {
        if self.phase != Phase::Playing {
            return EventOutcome::ignored("not playing");
        }
        if self.state.step < TREATMENT_STEP {
            return EventOutcome::rejected(format!(
                "items can be picked up from step {}",
                TREATMENT_STEP
            ));
        }
        if let Some(held) = self.state.held_item {
            return EventOutcome::rejected(format!("already holding {:?}", held));
        }
        if let Some(first) = self.item_out_of_order(item) {
            let ticket = self.ticket(Continuation::Acknowledge);
            self.gateway.show_feedback(DISINFECT_FIRST, false, ticket);
            return EventOutcome::rejected(format!("use {:?} before {:?}", first, item));
        }

        self.state.hold_item(item);
        self.gateway.set_item_glow(item, false);

        let text = format!(
            "Je hebt de {} gepakt. Klik op het slachtoffer om het te gebruiken.",
            item.display_name()
        );
        let ticket = self.ticket(Continuation::Acknowledge);
        self.gateway.show_feedback(&text, true, ticket);
        EventOutcome::Applied
    }

    pub fn handle_item_use(&mut self, item: Item) -> EventOutcome {
        if self.phase != Phase::Playing {
            return EventOutcome::ignored("not playing");
        }
        if self.state.step < TREATMENT_STEP {
            return EventOutcome::rejected(format!(
                "items can be used from step {}",
                TREATMENT_STEP
            ));
        }
        match self.state.held_item {
            None => return EventOutcome::rejected("no item in hand"),
            Some(held) if held != item => {
                return EventOutcome::rejected(format!("holding {:?}, not {:?}", held, item));
            }
            Some(_) => {}
        }

        match item {
            Item::Spray => self.use_spray(),
            Item::Plaster => self.use_plaster(),
        }
    }

    pub fn handle_person_clicked(&mut self) -> EventOutcome {
        match self.state.held_item {
            Some(item) => self.handle_item_use(item),
            None => EventOutcome::ignored("no item in hand"),
        }
    }

    fn use_spray(&mut self) -> EventOutcome {
        if self.state.wound_disinfected {
            let ticket = self.ticket(Continuation::Acknowledge);
            self.gateway.show_feedback(ALREADY_DISINFECTED, true, ticket);
            return EventOutcome::ignored("wound already disinfected");
        }

        self.state.disinfect_wound();
        self.gateway.set_wound(WoundVisual::Disinfected);
        self.gateway.drop_item(Item::Spray);
        self.state.release_item();

        let ticket = self.ticket(Continuation::RefreshGlows);
        self.gateway.show_feedback(SPRAY_APPLIED, true, ticket);
        EventOutcome::Applied
    }

    fn use_plaster(&mut self) -> EventOutcome {
        if !self.state.wound_disinfected {
            // Back in the box, so the spray can still be picked up.
            self.state.release_item();
            self.refresh_glows();
            let ticket = self.ticket(Continuation::Acknowledge);
            self.gateway.show_feedback(DISINFECT_FIRST, false, ticket);
            return EventOutcome::rejected("wound not disinfected");
        }
        if self.state.plaster_applied {
            let ticket = self.ticket(Continuation::Acknowledge);
            self.gateway.show_feedback(PLASTER_ALREADY, true, ticket);
            return EventOutcome::ignored("plaster already applied");
        }

        self.state.apply_plaster();
        self.gateway.set_wound(WoundVisual::Covered);
        self.gateway.drop_item(Item::Plaster);
        self.state.release_item();

        let ticket = self.ticket(Continuation::PlasterApplied);
        self.gateway.show_feedback(PLASTER_APPLIED, true, ticket);
        EventOutcome::Applied
    }

    fn refresh_glows(&mut self) {
        let s = &self.state;
        let active = s.step >= TREATMENT_STEP && s.ambulance_en_route;

        let spray = active && !s.wound_disinfected;
        let plaster = active && s.wound_disinfected && !s.plaster_applied;
        let wound = if s.plaster_applied {
            WoundVisual::Covered
        } else if s.wound_disinfected {
            WoundVisual::Disinfected
        } else if active {
            WoundVisual::Pulsing
        } else {
            WoundVisual::Open
        };

        self.gateway.set_item_glow(Item::Spray, spray);
        self.gateway.set_item_glow(Item::Plaster, plaster);
        self.gateway.set_wound(wound);
    }

    /* =========================
       Phone input
       ========================= */

    pub fn handle_phone_success(&mut self) -> EventOutcome {
        if !self.dialer_open {
            return EventOutcome::ignored("dialer not open");
        }
        self.dialer_open = false;
        self.gateway.close_dialer();

        self.state.start_ambulance_route();
        self.gateway.move_ambulance(AmbulanceStage::Approach, None);
        log::info!("Ambulance dispatched");
        self.advance()
    }

    pub fn handle_phone_failure(&mut self) -> EventOutcome {
        if !self.dialer_open {
            return EventOutcome::ignored("dialer not open");
        }
        log::info!("Emergency call failed, restarting");
        self.reset()
    }

    pub fn handle_phone_dismissed(&mut self) -> EventOutcome {
        if !self.dialer_open {
            return EventOutcome::ignored("dialer not open");
        }
        self.dialer_open = false;
        self.gateway.close_dialer();
        self.redisplay(self.state.step)
    }

    /* =========================
       Lifecycle
       ========================= */

    /// Back to the ready screen from anywhere. Pending tickets go stale.
    pub fn reset(&mut self) -> EventOutcome {
        self.generation += 1;
        self.state.reset();
        self.phase = Phase::Ready;
        self.dialer_open = false;
        self.reading = None;

        self.gateway.reset_scene_visuals();
        self.gateway.hide();
        self.gateway.close_dialer();
        self.show_ready_screen();

        log::info!("Scenario reset (generation {})", self.generation);
        EventOutcome::Applied
    }

    fn show_ready_screen(&mut self) {
        let start = vec![PanelButton {
            text: START_LABEL.to_string(),
            good: true,
            target: ButtonRef {
                generation: self.generation,
                target: ButtonTarget::Start,
            },
        }];
        self.gateway.show_instruction(READY_TEXT, start);
    }

    pub fn win(&mut self) -> EventOutcome {
        if self.phase != Phase::Playing {
            return EventOutcome::ignored("not playing");
        }
        self.phase = Phase::Won;
        self.gateway.mark_person_saved();
        self.gateway.show_win();
        log::info!("Scenario won");
        EventOutcome::Applied
    }

    pub fn game_over(&mut self, text: &str) -> EventOutcome {
        if self.phase != Phase::Playing {
            return EventOutcome::ignored("not playing");
        }
        self.phase = Phase::Failed;
        self.gateway.show_game_over(text);
        log::info!("Game over: {}", text);
        EventOutcome::Applied
    }

    /// Swaps in another step table and starts over.
    pub fn load_scenario(&mut self, path: &Path) -> EventOutcome {
        match StepTable::load(path) {
            Ok(steps) => {
                log::info!("Loaded {} steps from {}", steps.len(), path.display());
                self.steps = steps;
                self.reset()
            }
            Err(e) => {
                log::warn!("Keeping current scenario: {e}");
                EventOutcome::rejected(e.to_string())
            }
        }
    }

    fn ticket(&self, continuation: Continuation) -> Ticket {
        Ticket {
            generation: self.generation,
            continuation,
        }
    }

    fn check_generation(&self, generation: u64) -> Option<EventOutcome> {
        if generation == self.generation {
            None
        } else {
            Some(EventOutcome::ignored(format!(
                "stale generation {} (current {})",
                generation, self.generation
            )))
        }
    }
}

fn present_step<G: Gateway>(
    gateway: &mut G,
    generation: u64,
    step: usize,
    descriptor: &StepDescriptor,
) {
    let text = descriptor.panel_text();

    match &descriptor.kind {
        StepKind::Instruction { buttons, .. } => {
            let buttons = buttons
                .iter()
                .enumerate()
                .map(|(index, b)| PanelButton {
                    text: b.text.clone(),
                    good: b.style == ButtonStyle::Good,
                    target: ButtonRef {
                        generation,
                        target: ButtonTarget::Step { step, index },
                    },
                })
                .collect();
            gateway.show_instruction(&text, buttons);
        }
        StepKind::Question { choices, .. } => {
            let choices = choices
                .iter()
                .enumerate()
                .map(|(index, c)| PanelChoice {
                    text: c.text.clone(),
                    choice: ChoiceRef {
                        generation,
                        step,
                        index,
                    },
                })
                .collect();
            gateway.show_question(&text, choices);
        }
    }
}
