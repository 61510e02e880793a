use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Item {
    Spray,
    Plaster,
}

impl Item {
    /// Name used in player-facing text.
    pub fn display_name(self) -> &'static str {
        match self {
            Item::Spray => "spraybus",
            Item::Plaster => "pleister",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GazeTarget {
    #[serde(rename = "lookLeft")]
    Left,
    #[serde(rename = "lookRight")]
    Right,
}

/// Mutable record of one play-through.
/// Only the controller mutates it; the setters refuse transitions that
/// would break an invariant and report that with `false`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    /// 0 = not started, otherwise the 1-based number of the step on screen.
    pub step: usize,

    pub crashed: bool,
    pub car_moving: bool,

    pub wound_disinfected: bool,
    pub plaster_applied: bool,

    pub looked_left: bool,
    pub looked_right: bool,
    pub gaze_check_completed: bool,

    pub held_item: Option<Item>,

    pub ambulance_en_route: bool,
    pub ambulance_arriving: bool,
}

impl GameState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn next_step(&mut self) -> usize {
        self.step += 1;
        self.step
    }

    pub fn set_car_moving(&mut self, moving: bool) {
        self.car_moving = moving;
    }

    pub fn set_crashed(&mut self, crashed: bool) {
        self.crashed = crashed;
    }

    /// Records a look. Returns `false` once the gaze check is already done.
    pub fn look(&mut self, target: GazeTarget) -> bool {
        if self.gaze_check_completed {
            return false;
        }
        match target {
            GazeTarget::Left => self.looked_left = true,
            GazeTarget::Right => self.looked_right = true,
        }
        true
    }

    pub fn has_looked_both_ways(&self) -> bool {
        self.looked_left && self.looked_right
    }

    pub fn complete_gaze_check(&mut self) -> bool {
        if self.gaze_check_completed || !self.has_looked_both_ways() {
            return false;
        }
        self.gaze_check_completed = true;
        true
    }

    pub fn hold_item(&mut self, item: Item) -> bool {
        if self.held_item.is_some() {
            return false;
        }
        self.held_item = Some(item);
        true
    }

    pub fn release_item(&mut self) -> Option<Item> {
        self.held_item.take()
    }

    pub fn disinfect_wound(&mut self) -> bool {
        if self.wound_disinfected {
            return false;
        }
        self.wound_disinfected = true;
        true
    }

    pub fn apply_plaster(&mut self) -> bool {
        if !self.wound_disinfected || self.plaster_applied {
            return false;
        }
        self.plaster_applied = true;
        true
    }

    pub fn start_ambulance_route(&mut self) {
        self.ambulance_en_route = true;
    }

    pub fn start_ambulance_arrival(&mut self) -> bool {
        if !self.ambulance_en_route || self.ambulance_arriving {
            return false;
        }
        self.ambulance_arriving = true;
        true
    }
}
