use std::collections::HashSet;
use std::f32::consts::FRAC_PI_2;
use std::time::Duration;

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::config::game::AnimationTimings;
use crate::engine::protocol::{AmbulanceStage, EngineCommand, SceneCall, Ticket, WoundVisual};
use crate::engine::sequence::{
    SceneStage, StageSequence, APPROACH, ARRIVAL, BOX_CLOSE, CRASH, IMPACT,
};
use crate::model::game_state::{GazeTarget, Item};

/* =========================
   Layout (fractions of the scene rect)
   ========================= */

const ROAD_TOP: f32 = 0.42;
const ROAD_BOTTOM: f32 = 0.66;
const PERSON: (f32, f32) = (0.5, 0.55);
const RECOVERY: (f32, f32) = (0.5, 0.74);
const CAR_START_X: f32 = -0.12;
const CAR_IMPACT_X: f32 = 0.42;
const AMBULANCE_Y: f32 = 0.5;
const AMBULANCE_OFFSCREEN_X: f32 = 1.15;
const AMBULANCE_WAIT_X: f32 = 0.85;
const AMBULANCE_STOP_X: f32 = 0.62;
const LOOK_LEFT: (f32, f32) = (0.07, 0.54);
const LOOK_RIGHT: (f32, f32) = (0.93, 0.54);
const BOX: (f32, f32) = (0.5, 0.86);
const SPRAY: (f32, f32) = (0.47, 0.86);
const PLASTER: (f32, f32) = (0.53, 0.86);

const GRASS: Color32 = Color32::from_rgb(70, 110, 60);
const ROAD: Color32 = Color32::from_rgb(70, 70, 75);
const LANE: Color32 = Color32::from_rgb(220, 220, 210);
const CAR: Color32 = Color32::from_rgb(50, 90, 170);
const SKIN: Color32 = Color32::from_rgb(230, 190, 150);
const SHIRT: Color32 = Color32::from_rgb(200, 80, 60);
const MEDIC: Color32 = Color32::from_rgb(40, 160, 90);
const GLOW: Color32 = Color32::from_rgb(255, 220, 60);

/// Presentation-side copy of the scene. Fed by [`SceneCall`]s, advanced
/// by frame time, drawn with the egui painter.
pub struct SceneModel {
    timings: AnimationTimings,
    sequences: Vec<StageSequence>,
    done: HashSet<SceneStage>,

    items_visible: bool,
    gaze_visible: bool,
    looked: HashSet<GazeTarget>,
    glowing: HashSet<Item>,
    dropped: HashSet<Item>,
    wound: WoundVisual,
    body_moved: bool,
    ambulance_called: bool,
    person_saved: bool,
}

impl SceneModel {
    pub fn new(timings: AnimationTimings) -> Self {
        Self {
            timings,
            sequences: Vec::new(),
            done: HashSet::new(),
            items_visible: false,
            gaze_visible: false,
            looked: HashSet::new(),
            glowing: HashSet::new(),
            dropped: HashSet::new(),
            wound: WoundVisual::Open,
            body_moved: false,
            ambulance_called: false,
            person_saved: false,
        }
    }

    pub fn apply(&mut self, call: SceneCall) {
        match call {
            SceneCall::PlayCrash { on_impact } => self.play(CRASH, Some(on_impact)),
            SceneCall::PlayImpact { on_settled } => self.play(IMPACT, Some(on_settled)),
            SceneCall::RevealFirstAidItems => self.items_visible = true,
            SceneCall::ShowGazeTargets => {
                self.gaze_visible = true;
                self.looked.clear();
            }
            SceneCall::HideGazeTargets => self.gaze_visible = false,
            SceneCall::SetItemGlow { item, active } => {
                if active {
                    self.glowing.insert(item);
                } else {
                    self.glowing.remove(&item);
                }
            }
            SceneCall::SetWound(wound) => self.wound = wound,
            SceneCall::DropItem(item) => {
                self.dropped.insert(item);
                self.glowing.remove(&item);
            }
            SceneCall::MoveBody => self.body_moved = true,
            SceneCall::HideFirstAidBox { on_closed } => self.play(BOX_CLOSE, Some(on_closed)),
            SceneCall::MoveAmbulance { stage, on_done } => {
                self.ambulance_called = true;
                match stage {
                    AmbulanceStage::Approach => self.play(APPROACH, on_done),
                    AmbulanceStage::Arrive => self.play(ARRIVAL, on_done),
                }
            }
            SceneCall::MarkPersonSaved => self.person_saved = true,
            SceneCall::Reset => *self = SceneModel::new(self.timings.clone()),
        }
    }

    fn play(&mut self, stages: &[SceneStage], on_complete: Option<Ticket>) {
        self.sequences
            .push(StageSequence::new(stages, &self.timings, on_complete));
    }

    /// Advances running sequences; returns tickets whose sequence ended.
    pub fn tick(&mut self, dt: Duration) -> Vec<Ticket> {
        let mut tickets = Vec::new();

        for seq in &mut self.sequences {
            let result = seq.tick(dt);
            self.done.extend(result.finished);
            tickets.extend(result.completed);
        }
        self.sequences.retain(|s| !s.is_finished());

        tickets
    }

    /// True while anything on screen moves.
    pub fn is_animating(&self) -> bool {
        !self.sequences.is_empty() || !self.glowing.is_empty() || self.wound == WoundVisual::Pulsing
    }

    /// Progress of `stage`: 0 before it starts, 1 once it is over.
    fn amount(&self, stage: SceneStage) -> f32 {
        self.sequences
            .iter()
            .filter_map(|seq| seq.current())
            .find(|(s, _)| *s == stage)
            .map(|(_, progress)| progress)
            .unwrap_or(if self.done.contains(&stage) { 1.0 } else { 0.0 })
    }

    fn box_open(&self) -> bool {
        self.items_visible && !self.done.contains(&SceneStage::BoxClose)
    }

    fn ambulance_x(&self) -> f32 {
        let leave = self.amount(SceneStage::AmbulanceLeave);
        let arrive = self.amount(SceneStage::AmbulanceArrive);
        let approach = self.amount(SceneStage::AmbulanceApproach);

        if leave > 0.0 {
            lerp(AMBULANCE_STOP_X, AMBULANCE_OFFSCREEN_X + 0.1, leave)
        } else if arrive > 0.0 {
            lerp(AMBULANCE_WAIT_X, AMBULANCE_STOP_X, arrive)
        } else {
            lerp(AMBULANCE_OFFSCREEN_X, AMBULANCE_WAIT_X, approach)
        }
    }

    /* =========================
       Drawing
       ========================= */

    pub fn show(&self, ui: &mut egui::Ui) -> Vec<EngineCommand> {
        let mut commands = Vec::new();

        let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let painter = ui.painter_at(rect);
        let at = |(x, y): (f32, f32)| rect.min + Vec2::new(x * rect.width(), y * rect.height());
        let scale = rect.height() / 600.0;
        let pulse = ((ui.input(|i| i.time) as f32) * 4.0).sin() * 0.5 + 0.5;

        // Ground
        painter.rect_filled(rect, 0.0, GRASS);
        let road = Rect::from_min_max(at((0.0, ROAD_TOP)), at((1.0, ROAD_BOTTOM)));
        painter.rect_filled(road, 0.0, ROAD);
        let mid = (ROAD_TOP + ROAD_BOTTOM) / 2.0;
        for i in 0..12 {
            let x = i as f32 / 12.0 + 0.02;
            painter.line_segment([at((x, mid)), at((x + 0.04, mid))], Stroke::new(3.0 * scale, LANE));
        }

        // Car
        let car_x = lerp(CAR_START_X, CAR_IMPACT_X, self.amount(SceneStage::CarDrive));
        let car = Rect::from_center_size(at((car_x, 0.58)), Vec2::new(90.0, 44.0) * scale);
        painter.rect_filled(car, 6.0 * scale, CAR);

        // Ambulance and medics
        let amb_pos = at((self.ambulance_x(), AMBULANCE_Y));
        if self.ambulance_called {
            let amb = Rect::from_center_size(amb_pos, Vec2::new(110.0, 50.0) * scale);
            painter.rect_filled(amb, 6.0 * scale, Color32::WHITE);
            let arm = 14.0 * scale;
            painter.line_segment(
                [amb.center() - Vec2::new(arm, 0.0), amb.center() + Vec2::new(arm, 0.0)],
                Stroke::new(6.0 * scale, Color32::RED),
            );
            painter.line_segment(
                [amb.center() - Vec2::new(0.0, arm), amb.center() + Vec2::new(0.0, arm)],
                Stroke::new(6.0 * scale, Color32::RED),
            );
        }

        let rest = if self.body_moved { RECOVERY } else { PERSON };
        let person_pos = lerp_pos(at(rest), amb_pos, self.amount(SceneStage::Carry));
        let in_ambulance = self.done.contains(&SceneStage::Carry);

        let walk = self.amount(SceneStage::MedicWalk);
        if walk > 0.0 && !in_ambulance {
            let medic = lerp_pos(amb_pos, person_pos, walk);
            for dy in [-16.0, 16.0] {
                painter.circle_filled(medic + Vec2::new(0.0, dy * scale), 9.0 * scale, MEDIC);
            }
        }

        // Person
        if !in_ambulance {
            let fall = self.amount(SceneStage::PersonFall);
            let angle = fall * FRAC_PI_2;
            let body = Vec2::new(angle.sin(), -angle.cos()) * (10.0 + 26.0 * fall) * scale;
            let lift = self.amount(SceneStage::PersonLift) * 6.0 * scale;
            let feet = person_pos - Vec2::new(0.0, lift);
            let head = feet + body;

            painter.line_segment([feet, head], Stroke::new(12.0 * scale, SHIRT));
            painter.circle_filled(head, 9.0 * scale, SKIN);

            if self.done.contains(&SceneStage::PersonFall) {
                let wound_pos = feet + body * 0.5;
                let (color, radius) = match self.wound {
                    WoundVisual::Open => (Color32::DARK_RED, 5.0),
                    WoundVisual::Pulsing => (Color32::RED, 5.0 + 3.0 * pulse),
                    WoundVisual::Disinfected => (Color32::from_rgb(230, 150, 60), 5.0),
                    WoundVisual::Covered => (Color32::from_rgb(240, 220, 180), 7.0),
                };
                painter.circle_filled(wound_pos, radius * scale, color);
            }

            if self.person_saved {
                painter.circle_stroke(person_pos, 40.0 * scale, Stroke::new(3.0, MEDIC));
            }

            let hit = Rect::from_center_size(feet + body * 0.5, Vec2::splat(70.0 * scale));
            if ui
                .interact(hit, ui.id().with("person"), Sense::click())
                .clicked()
            {
                commands.push(EngineCommand::PersonClicked);
            }
        }

        // Gaze markers
        if self.gaze_visible {
            for (target, pos, label) in [
                (GazeTarget::Left, LOOK_LEFT, "Links"),
                (GazeTarget::Right, LOOK_RIGHT, "Rechts"),
            ] {
                let center = at(pos);
                let color = if self.looked.contains(&target) {
                    Color32::GRAY
                } else {
                    GLOW
                };
                painter.circle_filled(center, 16.0 * scale, color);
                painter.text(
                    center + Vec2::new(0.0, 28.0 * scale),
                    Align2::CENTER_CENTER,
                    label,
                    FontId::proportional(14.0),
                    Color32::WHITE,
                );

                let hit = Rect::from_center_size(center, Vec2::splat(40.0 * scale));
                if ui
                    .interact(hit, ui.id().with(("gaze", label)), Sense::click())
                    .clicked()
                {
                    commands.push(EngineCommand::GazeTargetSelected(target));
                }
            }
        }

        // First-aid box
        if self.box_open() {
            let open = 1.0 - self.amount(SceneStage::BoxClose);
            let case = Rect::from_center_size(at(BOX), Vec2::new(120.0, 56.0) * scale * open);
            painter.rect_filled(case, 4.0 * scale, Color32::from_rgb(200, 40, 40));

            for (item, pos, color) in [
                (Item::Spray, SPRAY, Color32::from_rgb(90, 170, 220)),
                (Item::Plaster, PLASTER, Color32::from_rgb(240, 220, 180)),
            ] {
                if self.dropped.contains(&item) {
                    continue;
                }
                let center = at(pos);
                let size = Vec2::new(24.0, 34.0) * scale * open;
                painter.rect_filled(Rect::from_center_size(center, size), 3.0, color);
                if self.glowing.contains(&item) {
                    painter.circle_stroke(
                        center,
                        (22.0 + 6.0 * pulse) * scale,
                        Stroke::new(3.0, GLOW),
                    );
                }

                let hit = Rect::from_center_size(center, Vec2::splat(40.0 * scale));
                if ui
                    .interact(hit, ui.id().with(("item", item.display_name())), Sense::click())
                    .clicked()
                {
                    commands.push(EngineCommand::ItemPickup(item));
                }
            }
        }

        commands
    }

    /// Marks a gaze marker as looked at. Only affects drawing.
    pub fn mark_looked(&mut self, target: GazeTarget) {
        self.looked.insert(target);
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn lerp_pos(a: Pos2, b: Pos2, t: f32) -> Pos2 {
    a + (b - a) * t
}
