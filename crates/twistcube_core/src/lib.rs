//! 3×3×3 twisty-puzzle kinematics engine.
//!
//! Tracks which physical sub-piece occupies which of the 26 named positions
//! on the cube ([`CubeState`]), selects the positions gripped by each of the
//! 9 rotation axes ([`slice_members`]), and recomputes the mapping when a
//! quarter turn is applied ([`CubeState::apply`]).
//!
//! Everything animation-related lives in `twistcube_view`; this crate is pure
//! combinatorics and has no notion of time or angles.

mod axis;
mod label;
mod rotate;
mod state;

/// Re-export of `strum`'s enum-iteration trait, for walking [`Face`]s and
/// [`Axis`]es.
pub use strum::IntoEnumIterator;

pub use crate::axis::{Axis, Face, RING};
pub use crate::label::{BadLabel, FaceSet, LABEL_COUNT, LABELS, Label, LabelKind, slice_members};
pub use crate::rotate::{BadTurn, Turn};
pub use crate::state::{CubeState, Piece};
