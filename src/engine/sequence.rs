use std::collections::VecDeque;
use std::time::Duration;

use crate::config::game::AnimationTimings;
use crate::engine::protocol::Ticket;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneStage {
    CarDrive,
    PersonFall,
    ImpactHold,
    BoxClose,
    AmbulanceApproach,
    AmbulanceArrive,
    MedicWalk,
    PersonLift,
    Carry,
    AmbulanceLeave,
}

impl SceneStage {
    pub fn duration(self, timings: &AnimationTimings) -> Duration {
        let ms = match self {
            SceneStage::CarDrive => timings.car_drive,
            SceneStage::PersonFall => timings.person_fall,
            SceneStage::ImpactHold => timings.impact_hold,
            SceneStage::BoxClose => timings.box_close,
            SceneStage::AmbulanceApproach => timings.ambulance_approach,
            SceneStage::AmbulanceArrive => timings.ambulance_arrive,
            SceneStage::MedicWalk => timings.medic_walk,
            SceneStage::PersonLift => timings.person_lift,
            SceneStage::Carry => timings.carry,
            SceneStage::AmbulanceLeave => timings.ambulance_leave,
        };
        Duration::from_millis(ms)
    }
}

pub const CRASH: &[SceneStage] = &[SceneStage::CarDrive];
pub const IMPACT: &[SceneStage] = &[SceneStage::PersonFall, SceneStage::ImpactHold];
pub const BOX_CLOSE: &[SceneStage] = &[SceneStage::BoxClose];
pub const APPROACH: &[SceneStage] = &[SceneStage::AmbulanceApproach];
pub const ARRIVAL: &[SceneStage] = &[
    SceneStage::AmbulanceArrive,
    SceneStage::MedicWalk,
    SceneStage::PersonLift,
    SceneStage::Carry,
    SceneStage::AmbulanceLeave,
];

/// What one `tick` produced.
#[derive(Debug, Default)]
pub struct TickResult {
    pub finished: Vec<SceneStage>,
    pub completed: Option<Ticket>,
}

/// Named stages played back to back, with one completion ticket at the end.
#[derive(Debug, Clone)]
pub struct StageSequence {
    stages: VecDeque<(SceneStage, Duration)>,
    elapsed: Duration,
    on_complete: Option<Ticket>,
}

impl StageSequence {
    pub fn new(stages: &[SceneStage], timings: &AnimationTimings, on_complete: Option<Ticket>) -> Self {
        Self {
            stages: stages
                .iter()
                .map(|&stage| (stage, stage.duration(timings)))
                .collect(),
            elapsed: Duration::ZERO,
            on_complete,
        }
    }

    /// Stage playing now and how far into it, 0.0..=1.0.
    pub fn current(&self) -> Option<(SceneStage, f32)> {
        self.stages.front().map(|&(stage, len)| {
            let progress = if len.is_zero() {
                1.0
            } else {
                (self.elapsed.as_secs_f32() / len.as_secs_f32()).min(1.0)
            };
            (stage, progress)
        })
    }

    pub fn is_finished(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn tick(&mut self, dt: Duration) -> TickResult {
        let mut result = TickResult::default();
        self.elapsed += dt;

        while let Some(&(stage, len)) = self.stages.front() {
            if self.elapsed < len {
                break;
            }
            self.elapsed -= len;
            self.stages.pop_front();
            result.finished.push(stage);
        }

        if self.stages.is_empty() {
            self.elapsed = Duration::ZERO;
            result.completed = self.on_complete.take();
        }

        result
    }
}
