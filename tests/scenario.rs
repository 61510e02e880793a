//! End-to-end runs of the first-aid scenario.
//!
//! Drives `GameController` with a `RecordingGateway`: every panel, scene
//! and phone call is recorded, tickets are handed back by hand.
//! Pure logic, no rendering.

use ehbo_trainer::config::steps::StepTable;
use ehbo_trainer::engine::controller::{GameController, Phase};
use ehbo_trainer::engine::protocol::{
    AmbulanceStage, ButtonTarget, Continuation, EngineCommand, PanelCall, PhoneCall, SceneCall,
};
use ehbo_trainer::engine::recording::RecordingGateway;
use ehbo_trainer::model::game_state::{GameState, GazeTarget, Item};
use ehbo_trainer::model::outcome::EventOutcome;

// ── Helpers ────────────────────────────────────────────────────────────

type Controller = GameController<RecordingGateway>;

fn controller_with(steps: StepTable) -> Controller {
    let mut c = GameController::new(steps, RecordingGateway::recording());
    c.reset();
    c
}

fn controller() -> Controller {
    controller_with(StepTable::default())
}

fn click_button(c: &mut Controller, index: usize) -> EventOutcome {
    let target = match c.gateway().last_panel() {
        Some(PanelCall::Instruction { buttons, .. }) => buttons[index].target,
        other => panic!("expected an instruction panel, got {other:?}"),
    };
    c.handle(EngineCommand::ButtonClicked(target))
}

fn choose(c: &mut Controller, index: usize) -> EventOutcome {
    let choice = match c.gateway().last_panel() {
        Some(PanelCall::Question { choices, .. }) => choices[index].choice,
        other => panic!("expected a question panel, got {other:?}"),
    };
    c.handle(EngineCommand::ChoiceSelected(choice))
}

fn dismiss(c: &mut Controller) -> EventOutcome {
    let ticket = c.gateway().last_feedback_ticket().expect("no feedback shown");
    c.handle(EngineCommand::FeedbackDismissed(ticket))
}

fn finish_scene(c: &mut Controller) -> EventOutcome {
    let ticket = c.gateway().last_scene_ticket().expect("no scene sequence running");
    c.handle(EngineCommand::StageComplete(ticket))
}

fn last_feedback(c: &Controller) -> (String, bool) {
    c.gateway()
        .panels()
        .filter_map(|p| match p {
            PanelCall::Feedback { text, positive, .. } => Some((text.clone(), *positive)),
            _ => None,
        })
        .last()
        .expect("no feedback shown")
}

/// Start, car drives, person falls: step 1 is up.
fn play_to_step_1(c: &mut Controller) {
    assert!(click_button(c, 0).is_applied());
    assert!(finish_scene(c).is_applied());
    assert!(finish_scene(c).is_applied());
    assert_eq!(c.state().step, 1);
}

fn play_to_step_2(c: &mut Controller) {
    play_to_step_1(c);
    click_button(c, 0);
    c.handle(EngineCommand::GazeTargetSelected(GazeTarget::Left));
    c.handle(EngineCommand::GazeTargetSelected(GazeTarget::Right));
    assert_eq!(c.state().step, 2);
}

fn play_to_step_3(c: &mut Controller) {
    play_to_step_2(c);
    choose(c, 0);
    dismiss(c);
    assert_eq!(c.state().step, 3);
}

fn play_to_step_4(c: &mut Controller) {
    play_to_step_3(c);
    choose(c, 0);
    dismiss(c);
    assert!(c.dialer_open());
    assert!(c.handle(EngineCommand::PhoneDialSuccess).is_applied());
    assert_eq!(c.state().step, 4);
}

fn treat_wound(c: &mut Controller) {
    c.handle(EngineCommand::ItemPickup(Item::Spray));
    dismiss(c);
    c.handle(EngineCommand::PersonClicked);
    dismiss(c);
    c.handle(EngineCommand::ItemPickup(Item::Plaster));
    dismiss(c);
    c.handle(EngineCommand::PersonClicked);
    dismiss(c);
}

// ── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn ready_screen_offers_only_start() {
    let c = controller();
    assert_eq!(c.phase(), Phase::Ready);
    assert_eq!(c.state(), &GameState::default());

    match c.gateway().last_panel() {
        Some(PanelCall::Instruction { text, buttons }) => {
            assert!(text.starts_with("Klaar?"));
            assert_eq!(buttons.len(), 1);
            assert_eq!(buttons[0].target.target, ButtonTarget::Start);
        }
        other => panic!("unexpected panel {other:?}"),
    }
}

#[test]
fn crash_runs_before_step_1() {
    let mut c = controller();
    click_button(&mut c, 0);
    assert_eq!(c.phase(), Phase::Playing);
    assert!(c.state().car_moving);
    assert_eq!(c.gateway().last_panel(), Some(&PanelCall::Hide));

    finish_scene(&mut c);
    assert!(c.state().crashed);
    assert!(!c.state().car_moving);
    assert_eq!(c.state().step, 0);

    finish_scene(&mut c);
    assert_eq!(c.state().step, 1);
    assert!(matches!(
        c.gateway().last_panel(),
        Some(PanelCall::Instruction { text, .. }) if text.contains("Stap 1")
    ));
}

#[test]
fn second_start_click_is_ignored() {
    let mut c = controller();
    let start = match c.gateway().last_panel() {
        Some(PanelCall::Instruction { buttons, .. }) => buttons[0].target,
        _ => unreachable!(),
    };
    assert!(c.handle(EngineCommand::ButtonClicked(start)).is_applied());
    assert!(matches!(
        c.handle(EngineCommand::ButtonClicked(start)),
        EventOutcome::Ignored { .. }
    ));

    let crashes = c
        .gateway()
        .scenes()
        .filter(|s| matches!(s, SceneCall::PlayCrash { .. }))
        .count();
    assert_eq!(crashes, 1);
}

#[test]
fn full_happy_path_ends_in_win() {
    let mut c = controller();
    play_to_step_4(&mut c);
    assert!(c.state().ambulance_en_route);
    assert!(c.gateway().scenes().any(|s| matches!(
        s,
        SceneCall::MoveAmbulance { stage: AmbulanceStage::Approach, on_done: None }
    )));
    assert!(c.gateway().scenes().any(|s| matches!(s, SceneCall::MoveBody)));

    click_button(&mut c, 0);
    assert!(c
        .gateway()
        .scenes()
        .any(|s| matches!(s, SceneCall::RevealFirstAidItems)));
    assert!(c.gateway().scenes().any(|s| s
        == &SceneCall::SetItemGlow {
            item: Item::Spray,
            active: true
        }));

    treat_wound(&mut c);
    assert!(c.state().wound_disinfected);
    assert!(c.state().plaster_applied);
    assert_eq!(c.state().held_item, None);

    // Box closes, ambulance pulls up, step 5 appears.
    assert!(finish_scene(&mut c).is_applied());
    assert!(c.state().ambulance_arriving);
    assert_eq!(c.state().step, 5);

    click_button(&mut c, 0);
    assert_eq!(c.gateway().last_panel(), Some(&PanelCall::Hide));

    // Ambulance leaves with the victim.
    assert!(finish_scene(&mut c).is_applied());
    assert_eq!(c.state().step, 6);

    choose(&mut c, 0);
    assert!(last_feedback(&c).1);
    assert!(dismiss(&mut c).is_applied());

    assert_eq!(c.phase(), Phase::Won);
    assert_eq!(c.gateway().last_panel(), Some(&PanelCall::Win));
    assert!(c
        .gateway()
        .scenes()
        .any(|s| matches!(s, SceneCall::MarkPersonSaved)));
}

#[test]
fn wrong_answer_shows_feedback_and_stays() {
    let mut c = controller();
    play_to_step_2(&mut c);

    assert!(choose(&mut c, 1).is_applied());
    let (text, positive) = last_feedback(&c);
    assert_eq!(text, "Schudden kan gevaarlijk zijn; probeer eerst verbaal contact.");
    assert!(!positive);
    assert_eq!(c.state().step, 2);

    dismiss(&mut c);
    assert_eq!(c.state().step, 2);
    assert!(matches!(c.gateway().last_panel(), Some(PanelCall::Question { .. })));
    assert!(!c.gateway().scenes().any(|s| matches!(s, SceneCall::MoveBody)));
}

#[test]
fn waiting_for_ambulance_is_game_over() {
    let mut c = controller();
    play_to_step_4(&mut c);

    assert!(click_button(&mut c, 1).is_applied());
    assert_eq!(c.phase(), Phase::Failed);
    assert_eq!(
        c.gateway().last_panel(),
        Some(&PanelCall::GameOver {
            text: "Wachten kost tijd. Kleine handelingen zoals desinfecteren kunnen wél levensreddend zijn."
                .into()
        })
    );

    // Only a reset gets out.
    assert!(matches!(
        c.handle(EngineCommand::ItemPickup(Item::Spray)),
        EventOutcome::Ignored { .. }
    ));
    assert!(c.handle(EngineCommand::ResetRequested).is_applied());
    assert_eq!(c.phase(), Phase::Ready);
    assert_eq!(c.state(), &GameState::default());
}

#[test]
fn plaster_before_spray_is_refused() {
    let mut c = controller();
    play_to_step_4(&mut c);
    click_button(&mut c, 0);

    assert!(matches!(
        c.handle(EngineCommand::ItemPickup(Item::Plaster)),
        EventOutcome::Rejected { .. }
    ));
    assert_eq!(c.state().held_item, None);
    let (text, positive) = last_feedback(&c);
    assert!(text.starts_with("Eerst desinfecteren"));
    assert!(!positive);
    dismiss(&mut c);

    // The spray is still reachable and the treatment finishes.
    assert!(c.handle(EngineCommand::ItemPickup(Item::Spray)).is_applied());
    assert_eq!(c.state().held_item, Some(Item::Spray));
    dismiss(&mut c);
    c.handle(EngineCommand::PersonClicked);
    dismiss(&mut c);
    assert!(c.state().wound_disinfected);

    assert!(c.handle(EngineCommand::ItemPickup(Item::Plaster)).is_applied());
    dismiss(&mut c);
    assert!(c.handle(EngineCommand::PersonClicked).is_applied());
    assert!(c.state().plaster_applied);
}

#[test]
fn pickup_while_holding_keeps_first_item() {
    let mut c = controller();
    play_to_step_4(&mut c);
    click_button(&mut c, 0);

    c.handle(EngineCommand::ItemPickup(Item::Spray));
    assert!(matches!(
        c.handle(EngineCommand::ItemPickup(Item::Plaster)),
        EventOutcome::Rejected { .. }
    ));
    assert_eq!(c.state().held_item, Some(Item::Spray));
}

#[test]
fn using_an_item_not_in_hand_is_refused() {
    let mut c = controller();
    play_to_step_4(&mut c);
    click_button(&mut c, 0);

    c.handle(EngineCommand::ItemPickup(Item::Spray));
    assert!(matches!(
        c.handle(EngineCommand::ItemUseRequested(Item::Plaster)),
        EventOutcome::Rejected { .. }
    ));
    assert!(!c.state().wound_disinfected);
}

#[test]
fn items_cannot_be_picked_up_before_step_4() {
    let mut c = controller();
    play_to_step_2(&mut c);
    assert!(matches!(
        c.handle(EngineCommand::ItemPickup(Item::Spray)),
        EventOutcome::Rejected { .. }
    ));
    assert_eq!(c.state().held_item, None);
}

// ── Gaze check ─────────────────────────────────────────────────────────

#[test]
fn gaze_needs_both_sides() {
    let mut c = controller();
    play_to_step_1(&mut c);
    click_button(&mut c, 0);
    assert!(c
        .gateway()
        .scenes()
        .any(|s| matches!(s, SceneCall::ShowGazeTargets)));

    c.handle(EngineCommand::GazeTargetSelected(GazeTarget::Left));
    c.handle(EngineCommand::GazeTargetSelected(GazeTarget::Left));
    assert!(matches!(
        c.handle(EngineCommand::GazeBothComplete),
        EventOutcome::Rejected { .. }
    ));
    assert_eq!(c.state().step, 1);

    c.handle(EngineCommand::GazeTargetSelected(GazeTarget::Right));
    assert!(c.state().gaze_check_completed);
    assert_eq!(c.state().step, 2);
}

#[test]
fn gaze_complete_twice_equals_once() {
    let mut c = controller();
    play_to_step_2(&mut c);

    let state = c.state().clone();
    let calls = c.gateway().calls().len();

    assert!(matches!(
        c.handle(EngineCommand::GazeBothComplete),
        EventOutcome::Ignored { .. }
    ));
    assert_eq!(c.state(), &state);
    assert_eq!(c.gateway().calls().len(), calls);
}

#[test]
fn gaze_before_start_is_ignored() {
    let mut c = controller();
    play_to_step_1(&mut c);
    c.handle(EngineCommand::ResetRequested);

    assert!(matches!(
        c.handle(EngineCommand::GazeTargetSelected(GazeTarget::Left)),
        EventOutcome::Ignored { .. }
    ));
    assert!(!c.state().looked_left);
}

// ── Phone ──────────────────────────────────────────────────────────────

#[test]
fn failed_call_restarts_scenario() {
    let mut c = controller();
    play_to_step_3(&mut c);
    choose(&mut c, 0);
    dismiss(&mut c);
    assert_eq!(c.gateway().phones().last(), Some(&PhoneCall::Open));

    let generation = c.generation();
    assert!(c.handle(EngineCommand::PhoneDialFailure).is_applied());
    assert_eq!(c.phase(), Phase::Ready);
    assert_eq!(c.generation(), generation + 1);
    assert_eq!(c.state(), &GameState::default());
    assert_eq!(c.gateway().phones().last(), Some(&PhoneCall::Close));
}

#[test]
fn closing_the_phone_shows_step_again() {
    let mut c = controller();
    play_to_step_3(&mut c);
    choose(&mut c, 0);
    dismiss(&mut c);

    assert!(c.handle(EngineCommand::PhoneDismissed).is_applied());
    assert!(!c.dialer_open());
    assert_eq!(c.state().step, 3);
    assert!(matches!(c.gateway().last_panel(), Some(PanelCall::Question { .. })));

    // Phone results without an open dialer change nothing.
    assert!(matches!(
        c.handle(EngineCommand::PhoneDialSuccess),
        EventOutcome::Ignored { .. }
    ));
    assert!(!c.state().ambulance_en_route);
}

// ── Lifecycle ──────────────────────────────────────────────────────────

#[test]
fn stale_ticket_after_reset_is_ignored() {
    let mut c = controller();
    click_button(&mut c, 0);
    let crash = c.gateway().last_scene_ticket().unwrap();
    assert_eq!(crash.continuation, Continuation::Impact);

    c.handle(EngineCommand::ResetRequested);
    assert!(matches!(
        c.handle(EngineCommand::StageComplete(crash)),
        EventOutcome::Ignored { .. }
    ));
    assert!(!c.state().crashed);
    assert_eq!(c.phase(), Phase::Ready);
}

#[test]
fn stale_feedback_after_reset_does_not_advance() {
    let mut c = controller();
    play_to_step_2(&mut c);
    choose(&mut c, 0);
    let ticket = c.gateway().last_feedback_ticket().unwrap();

    c.handle(EngineCommand::ResetRequested);
    assert!(matches!(
        c.handle(EngineCommand::FeedbackDismissed(ticket)),
        EventOutcome::Ignored { .. }
    ));
    assert_eq!(c.state().step, 0);
}

#[test]
fn reset_from_any_phase_restores_defaults() {
    let mut treating = controller();
    play_to_step_4(&mut treating);
    click_button(&mut treating, 0);
    treat_wound(&mut treating);

    let mut failed = controller();
    play_to_step_4(&mut failed);
    click_button(&mut failed, 1);

    let mut fresh = controller();

    for c in [&mut treating, &mut failed, &mut fresh] {
        c.reset();
        assert_eq!(c.state(), &GameState::default());
        assert_eq!(c.phase(), Phase::Ready);
        assert!(!c.dialer_open());
    }
}

fn read_step(c: &mut Controller) -> EventOutcome {
    c.handle(EngineCommand::ReadCurrentStepRequested)
}

/// The close button of the step-text panel, if that is what is shown.
fn step_text_close(c: &Controller) -> Option<EngineCommand> {
    match c.gateway().last_panel() {
        Some(PanelCall::Instruction { buttons, .. })
            if buttons.len() == 1 && buttons[0].target.target == ButtonTarget::Close =>
        {
            Some(EngineCommand::ButtonClicked(buttons[0].target))
        }
        _ => None,
    }
}

#[test]
fn read_step_toggles_panel() {
    let mut c = controller();
    play_to_step_2(&mut c);

    assert!(read_step(&mut c).is_applied());
    match c.gateway().last_panel() {
        Some(PanelCall::Instruction { text, .. }) => assert!(text.contains("aanspreekbaar")),
        other => panic!("unexpected panel {other:?}"),
    }
    assert!(step_text_close(&c).is_some());

    // Second press puts the question back.
    assert!(read_step(&mut c).is_applied());
    assert!(matches!(c.gateway().last_panel(), Some(PanelCall::Question { .. })));

    read_step(&mut c);
    let close = step_text_close(&c).expect("step text not shown");
    assert!(c.handle(close.clone()).is_applied());
    assert!(matches!(c.gateway().last_panel(), Some(PanelCall::Question { .. })));
    assert_eq!(c.state().step, 2);

    // A close button that is no longer on screen does nothing.
    assert!(matches!(c.handle(close), EventOutcome::Ignored { .. }));
    assert!(choose(&mut c, 0).is_applied());
}

#[test]
fn read_step_leaves_feedback_alone() {
    let mut c = controller();
    play_to_step_3(&mut c);
    choose(&mut c, 0);
    let feedback = c.gateway().last_panel().cloned();

    assert!(matches!(read_step(&mut c), EventOutcome::Ignored { .. }));
    assert!(matches!(read_step(&mut c), EventOutcome::Ignored { .. }));
    assert_eq!(c.gateway().last_panel().cloned(), feedback);

    assert!(dismiss(&mut c).is_applied());
    assert!(c.dialer_open());
}

#[test]
fn read_step_on_ready_screen_brings_start_back() {
    let mut c = controller();

    read_step(&mut c);
    match c.gateway().last_panel() {
        Some(PanelCall::Instruction { text, .. }) => assert!(text.starts_with("Informatie")),
        other => panic!("unexpected panel {other:?}"),
    }
    read_step(&mut c);
    read_step(&mut c);
    let close = step_text_close(&c).expect("step text not shown");
    c.handle(close);

    assert!(matches!(
        c.gateway().last_panel(),
        Some(PanelCall::Instruction { text, .. }) if text.starts_with("Klaar?")
    ));
    assert!(click_button(&mut c, 0).is_applied());
    assert_eq!(c.phase(), Phase::Playing);
}

#[test]
fn read_step_over_scene_closes_to_scene() {
    let mut c = controller();
    play_to_step_4(&mut c);
    click_button(&mut c, 0);
    assert_eq!(c.gateway().last_panel(), Some(&PanelCall::Hide));

    read_step(&mut c);
    assert!(step_text_close(&c).is_some());

    // Feedback takes over; the step text is gone and stays gone.
    c.handle(EngineCommand::ItemPickup(Item::Spray));
    assert!(matches!(read_step(&mut c), EventOutcome::Ignored { .. }));
    dismiss(&mut c);

    read_step(&mut c);
    read_step(&mut c);
    assert_eq!(c.gateway().last_panel(), Some(&PanelCall::Hide));
    assert_eq!(c.state().held_item, Some(Item::Spray));
}

// ── Configuration ──────────────────────────────────────────────────────

const TWO_STEPS: &str = r#"[
    { "id": 1, "title": "Een", "type": "instruction", "content": "Eerste stap",
      "buttons": [
        { "text": "Verder", "action": "nextStep" },
        { "text": "Raar", "action": "teleport", "style": "bad" }
      ] },
    { "id": 2, "title": "Twee", "type": "instruction", "content": "Laatste stap",
      "buttons": [{ "text": "Klaar", "action": "win" }] }
]"#;

const UNORDERED_TREATMENT: &str = r#"[
    { "id": 1, "title": "Een", "type": "instruction", "content": "Start",
      "buttons": [{ "text": "Verder", "action": "nextStep" }] },
    { "id": 2, "title": "Twee", "type": "instruction", "content": "Nog even",
      "buttons": [{ "text": "Verder", "action": "nextStep" }] },
    { "id": 3, "title": "Drie", "type": "instruction", "content": "Bijna",
      "buttons": [
        { "text": "Tip", "action": "showFeedback", "feedback": "Goed bezig." },
        { "text": "Twijfel", "action": "showFeedback", "style": "bad",
          "feedback": "Denk nog eens na." },
        { "text": "Verder", "action": "nextStep" }
      ] },
    { "id": 4, "title": "Vier", "type": "instruction", "content": "Behandel de wond",
      "interaction": { "type": "pickup", "items": ["spray", "plaster"], "onComplete": "nextStep" },
      "buttons": [{ "text": "Spullen", "action": "showEhboItems" }] }
]"#;

#[test]
fn feedback_button_follows_its_style() {
    let mut c = controller_with(StepTable::from_json(UNORDERED_TREATMENT).unwrap());
    play_to_step_1(&mut c);
    click_button(&mut c, 0);
    click_button(&mut c, 0);
    assert_eq!(c.state().step, 3);

    click_button(&mut c, 0);
    assert_eq!(last_feedback(&c), ("Goed bezig.".to_string(), true));
    dismiss(&mut c);
    assert_eq!(c.state().step, 3);

    click_button(&mut c, 1);
    assert_eq!(last_feedback(&c), ("Denk nog eens na.".to_string(), false));
    dismiss(&mut c);
    assert!(matches!(
        c.gateway().last_panel(),
        Some(PanelCall::Instruction { text, .. }) if text.contains("Bijna")
    ));
}

#[test]
fn refused_plaster_goes_back_in_the_box() {
    let mut c = controller_with(StepTable::from_json(UNORDERED_TREATMENT).unwrap());
    play_to_step_1(&mut c);
    click_button(&mut c, 0);
    click_button(&mut c, 0);
    click_button(&mut c, 2);
    assert_eq!(c.state().step, 4);
    click_button(&mut c, 0);

    // Without a fixed order the plaster can be picked up, but not used yet.
    assert!(c.handle(EngineCommand::ItemPickup(Item::Plaster)).is_applied());
    dismiss(&mut c);
    assert!(matches!(
        c.handle(EngineCommand::PersonClicked),
        EventOutcome::Rejected { .. }
    ));
    assert_eq!(c.state().held_item, None);
    assert!(!c.state().plaster_applied);
    dismiss(&mut c);

    assert!(c.handle(EngineCommand::ItemPickup(Item::Spray)).is_applied());
    dismiss(&mut c);
    assert!(c.handle(EngineCommand::PersonClicked).is_applied());
    assert!(c.state().wound_disinfected);
}

#[test]
fn advance_past_last_step_only_increments() {
    let mut c = controller_with(StepTable::from_json(TWO_STEPS).unwrap());
    assert!(c.advance().is_applied());
    assert!(c.advance().is_applied());

    let calls = c.gateway().calls().len();
    assert!(matches!(c.advance(), EventOutcome::Ignored { .. }));
    assert_eq!(c.state().step, 3);
    assert_eq!(c.gateway().calls().len(), calls);
}

#[test]
fn unknown_action_changes_nothing() {
    let mut c = controller_with(StepTable::from_json(TWO_STEPS).unwrap());
    play_to_step_1(&mut c);

    let calls = c.gateway().calls().len();
    assert!(matches!(click_button(&mut c, 1), EventOutcome::Ignored { .. }));
    assert_eq!(c.state().step, 1);
    assert_eq!(c.gateway().calls().len(), calls);
}

#[test]
fn loading_scenario_replaces_table_and_resets() {
    let path = std::env::temp_dir().join(format!("ehbo_trainer_{}.json", std::process::id()));
    std::fs::write(&path, TWO_STEPS).unwrap();

    let mut c = controller();
    play_to_step_1(&mut c);

    assert!(c.handle(EngineCommand::LoadScenario(path.clone())).is_applied());
    assert_eq!(c.steps().len(), 2);
    assert_eq!(c.phase(), Phase::Ready);

    play_to_step_1(&mut c);
    click_button(&mut c, 0);
    click_button(&mut c, 0);
    assert_eq!(c.phase(), Phase::Won);

    std::fs::remove_file(path).ok();
}

#[test]
fn broken_scenario_file_keeps_current_table() {
    let path = std::env::temp_dir().join(format!("ehbo_trainer_bad_{}.json", std::process::id()));
    std::fs::write(&path, "[]").unwrap();

    let mut c = controller();
    assert!(matches!(
        c.handle(EngineCommand::LoadScenario(path.clone())),
        EventOutcome::Rejected { .. }
    ));
    assert_eq!(c.steps().len(), 6);

    std::fs::remove_file(path).ok();
}
