//! Animation-time layer for the Twistcube kinematics engine.
//!
//! A host drives [`CubeController::frame`] once per animation tick; the
//! controller advances the in-flight [`Move`] and reports the incremental
//! slice rotation for the rendering layer to apply, committing the logical
//! permutation to the position store only at the completion boundary.

mod animations;
mod controller;
mod geom;
mod scramble;

pub use animations::{CLOCKWISE, COUNTERCLOCKWISE, DEFAULT_STEP_ANGLE, Move, TickEvent};
pub use controller::{CubeController, FrameUpdate, RequestOutcome};
pub use geom::world_axis;
pub use scramble::{random_turns, scramble};
