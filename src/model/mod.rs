pub mod action;
pub mod game_state;
pub mod outcome;
pub mod step;
