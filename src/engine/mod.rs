pub mod controller;
pub mod engine;
pub mod gateway;
pub mod phone;
pub mod protocol;
pub mod recording;
pub mod sequence;
