//! Quarter-turn permutation engine.
//!
//! Face turns derive their relabeling 4-cycle from [`RING`]; the three
//! middle-slice turns use hand-authored 8-cycles, since a slice turn touches
//! no face the ring models directly.

use std::fmt;
use std::str::FromStr;

use crate::axis::{Axis, Face, RING};
use crate::label::{FaceSet, Label, center, edge, slice_members};
use crate::state::CubeState;

/// A quarter turn of one of the nine rotation axes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    /// Axis to rotate.
    pub axis: Axis,
    /// Whether to rotate against the axis's normal direction.
    pub inverted: bool,
}

impl Turn {
    /// Returns a turn of `axis` in its normal direction.
    pub const fn new(axis: Axis) -> Self {
        Self {
            axis,
            inverted: false,
        }
    }

    /// Returns the reverse of the turn.
    #[must_use]
    pub const fn rev(self) -> Self {
        Self {
            axis: self.axis,
            inverted: !self.inverted,
        }
    }

    /// Returns the position that the piece currently at `label` occupies after
    /// the turn. Positions outside the turned slice are unaffected.
    pub fn destination(self, label: Label) -> Label {
        if !label.in_slice(self.axis) {
            return label;
        }
        match self.axis.face() {
            Some(face) => {
                let cycle = face_cycle(face, self.inverted);
                let mut faces = FaceSet::empty();
                for f in label.iter_faces() {
                    let turned = if f == face { f } else { next_in_cycle(cycle, f) };
                    faces |= FaceSet::from(turned);
                }
                Label::from_faces(faces).expect("turned a label out of the position domain")
            }
            None => {
                let cycle = slice_cycle(self.axis);
                let i = cycle
                    .iter()
                    .position(|&l| l == label)
                    .expect("slice member missing from its 8-cycle");
                // The 8-cycle has half-turn granularity; a quarter turn is a
                // 2-step advance.
                let step = if self.inverted { cycle.len() - 2 } else { 2 };
                cycle[(i + step) % cycle.len()]
            }
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.axis, if self.inverted { "'" } else { "" })
    }
}

/// Error from parsing a [`Turn`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{0:?} is not a turn")]
pub struct BadTurn(String);

impl FromStr for Turn {
    type Err = BadTurn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, inverted) = match s.strip_suffix('\'') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        let axis: Axis = name.parse().map_err(|_| BadTurn(s.to_owned()))?;
        Ok(Self { axis, inverted })
    }
}

/// Returns the 4-cycle of faces that a turn of `face` steps every other face
/// letter through.
///
/// The cycle is [`RING`] with the turned face and its opposite removed,
/// reversed for faces at an odd ring index (which normalizes rotation
/// direction for faces whose handedness is flipped relative to the ring), and
/// reversed again when inverted.
fn face_cycle(face: Face, inverted: bool) -> [Face; 4] {
    let opposite = face.opposite();
    let mut cycle = [face; 4];
    let mut i = 0;
    for f in RING {
        if f != face && f != opposite {
            cycle[i] = f;
            i += 1;
        }
    }
    if face.ring_index() % 2 == 1 {
        cycle.reverse();
    }
    if inverted {
        cycle.reverse();
    }
    cycle
}

fn next_in_cycle(cycle: [Face; 4], face: Face) -> Face {
    match cycle.iter().position(|&f| f == face) {
        Some(i) => cycle[(i + 1) % cycle.len()],
        // A slice member never contains the turned face's opposite, so every
        // other face letter is in the cycle.
        None => face,
    }
}

const M_CYCLE: [Label; 8] = [
    center(Face::F),
    edge(Face::U, Face::F),
    center(Face::U),
    edge(Face::U, Face::B),
    center(Face::B),
    edge(Face::D, Face::B),
    center(Face::D),
    edge(Face::D, Face::F),
];
const S_CYCLE: [Label; 8] = [
    center(Face::L),
    edge(Face::U, Face::L),
    center(Face::U),
    edge(Face::U, Face::R),
    center(Face::R),
    edge(Face::D, Face::R),
    center(Face::D),
    edge(Face::D, Face::L),
];
const E_CYCLE: [Label; 8] = [
    center(Face::L),
    edge(Face::F, Face::L),
    center(Face::B),
    edge(Face::L, Face::B),
    center(Face::R),
    edge(Face::B, Face::R),
    center(Face::F),
    edge(Face::R, Face::F),
];

fn slice_cycle(axis: Axis) -> &'static [Label; 8] {
    match axis {
        Axis::M => &M_CYCLE,
        Axis::S => &S_CYCLE,
        Axis::E => &E_CYCLE,
        _ => unreachable!("face axis {axis} has no slice cycle"),
    }
}

impl CubeState {
    /// Applies one quarter turn to the mapping.
    ///
    /// Source reads go through a snapshot of the pre-turn mapping, so the
    /// relabeling commits as a single permutation even though the writes
    /// overlap the reads.
    pub fn apply(&mut self, turn: Turn) {
        let before = self.clone();
        for old in slice_members(turn.axis) {
            self.set(turn.destination(old), before.piece_at(old));
        }
        debug_assert!(self.is_bijection(), "{turn} broke the bijection");
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::label::LABELS;

    fn label(name: &str) -> Label {
        name.parse().expect("bad test label")
    }

    fn turn(name: &str) -> Turn {
        name.parse().expect("bad test turn")
    }

    #[test]
    fn test_turn_notation() {
        assert_eq!(turn("U"), Turn::new(Axis::U));
        assert_eq!(turn("M'"), Turn::new(Axis::M).rev());
        assert_eq!(turn("F'").to_string(), "F'");
        assert_eq!(Turn::new(Axis::E).to_string(), "E");
        assert!("U''".parse::<Turn>().is_err());
        assert!("X".parse::<Turn>().is_err());
        for axis in Axis::iter() {
            let t = Turn::new(axis);
            assert_eq!(t.rev().rev(), t);
        }
    }

    #[test]
    fn test_u_turn_four_cycles() {
        let mut state = CubeState::new();
        state.apply(turn("U"));

        // Corners.
        assert_eq!(state.piece_at(label("U-L-B")).home(), label("U-F-L"));
        assert_eq!(state.piece_at(label("U-B-R")).home(), label("U-L-B"));
        assert_eq!(state.piece_at(label("U-R-F")).home(), label("U-B-R"));
        assert_eq!(state.piece_at(label("U-F-L")).home(), label("U-R-F"));
        // Edges.
        assert_eq!(state.piece_at(label("U-L")).home(), label("U-F"));
        assert_eq!(state.piece_at(label("U-B")).home(), label("U-L"));
        assert_eq!(state.piece_at(label("U-R")).home(), label("U-B"));
        assert_eq!(state.piece_at(label("U-F")).home(), label("U-R"));
        // The turned face's center is a fixed point.
        assert_eq!(state.piece_at(label("U-U")).home(), label("U-U"));
        // Everything outside the U slice is unaffected.
        for l in LABELS {
            if !l.in_slice(Axis::U) {
                assert_eq!(state.piece_at(l).home(), l, "{l} moved");
            }
        }
    }

    #[test]
    fn test_f_turn_sends_top_edge_down_the_right() {
        let mut state = CubeState::new();
        state.apply(turn("F"));
        assert_eq!(state.piece_at(label("R-F")).home(), label("U-F"));
        assert_eq!(state.piece_at(label("D-R-F")).home(), label("U-R-F"));
        assert_eq!(state.piece_at(label("U-F")).home(), label("F-L"));
    }

    #[test]
    fn test_middle_slice_quarter_steps() {
        let mut state = CubeState::new();
        state.apply(turn("M"));
        assert_eq!(state.piece_at(label("U-U")).home(), label("F-F"));
        assert_eq!(state.piece_at(label("U-B")).home(), label("U-F"));
        assert_eq!(state.piece_at(label("B-B")).home(), label("U-U"));

        let mut state = CubeState::new();
        state.apply(turn("M'"));
        assert_eq!(state.piece_at(label("D-D")).home(), label("F-F"));

        let mut state = CubeState::new();
        state.apply(turn("E"));
        assert_eq!(state.piece_at(label("B-B")).home(), label("L-L"));
        assert_eq!(state.piece_at(label("L-B")).home(), label("F-L"));

        let mut state = CubeState::new();
        state.apply(turn("S"));
        assert_eq!(state.piece_at(label("U-U")).home(), label("L-L"));
    }

    #[test]
    fn test_every_turn_displaces_exactly_eight_labels() {
        for axis in Axis::iter() {
            for t in [Turn::new(axis), Turn::new(axis).rev()] {
                let displaced = LABELS
                    .into_iter()
                    .filter(|&l| t.destination(l) != l)
                    .count();
                assert_eq!(displaced, 8, "bad displacement count for {t}");
            }
        }
    }

    #[test]
    fn test_destination_is_a_permutation() {
        for axis in Axis::iter() {
            let t = Turn::new(axis);
            assert!(LABELS.into_iter().map(|l| t.destination(l)).all_unique());
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        for axis in Axis::iter() {
            let mut state = CubeState::new();
            // Start from a non-identity mapping to catch errors a solved cube
            // would mask.
            state.apply(turn("U"));
            state.apply(turn("S"));
            let before = state.clone();

            let t = Turn::new(axis);
            state.apply(t);
            state.apply(t.rev());
            assert_eq!(state, before, "{axis} inverse round-trip failed");
        }
    }

    #[test]
    fn test_four_turn_identity() {
        for axis in Axis::iter() {
            for t in [Turn::new(axis), Turn::new(axis).rev()] {
                let mut state = CubeState::new();
                for _ in 0..4 {
                    state.apply(t);
                }
                assert!(state.is_solved(), "{t}*4 is not the identity");
            }
        }
    }

    #[test]
    fn test_scramble_sequence_stays_bijective_and_undoes() {
        let sequence = ["U", "F'", "M", "R", "E'", "B", "S", "D'", "L"];
        let mut state = CubeState::new();
        for name in sequence {
            state.apply(turn(name));
            assert!(state.is_bijection());
        }
        assert!(!state.is_solved());
        for name in sequence.iter().rev() {
            state.apply(turn(name).rev());
        }
        assert!(state.is_solved());
    }
}
