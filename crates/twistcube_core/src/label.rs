use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use strum::IntoEnumIterator;

use crate::axis::{Axis, Face};

bitflags! {
    /// Set of face letters.
    #[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct FaceSet: u8 {
        /// Up face
        const U = 1 << 0;
        /// Down face
        const D = 1 << 1;
        /// Left face
        const L = 1 << 2;
        /// Right face
        const R = 1 << 3;
        /// Front face
        const F = 1 << 4;
        /// Back face
        const B = 1 << 5;
    }
}

impl From<Face> for FaceSet {
    fn from(face: Face) -> Self {
        FaceSet::from_bits_truncate(face.bit())
    }
}

/// Number of tracked positions on the cube.
///
/// The 27th sub-cube, the invisible core, is never tracked.
pub const LABEL_COUNT: usize = 26;

/// Canonical name of one of the 26 tracked positions on the cube, as an
/// unordered set of the face letters it touches: 3 for a corner, 2 for an
/// edge, 1 for a center.
///
/// Labels are compared structurally, so `U-F-L` and `L-F-U` parse to the same
/// value. [`fmt::Display`] renders the canonical dashed spelling, with center
/// labels doubled (`U-U`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(FaceSet);

/// Which kind of sub-piece a position holds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LabelKind {
    /// Touches three faces.
    Corner,
    /// Touches two faces.
    Edge,
    /// Touches one face.
    Center,
}

pub(crate) const fn corner(a: Face, b: Face, c: Face) -> Label {
    Label(FaceSet::from_bits_truncate(a.bit() | b.bit() | c.bit()))
}
pub(crate) const fn edge(a: Face, b: Face) -> Label {
    Label(FaceSet::from_bits_truncate(a.bit() | b.bit()))
}
pub(crate) const fn center(a: Face) -> Label {
    Label(FaceSet::from_bits_truncate(a.bit()))
}

/// All 26 position labels: 8 corners, then 12 edges, then 6 centers.
pub const LABELS: [Label; LABEL_COUNT] = [
    corner(Face::U, Face::F, Face::L),
    corner(Face::U, Face::L, Face::B),
    corner(Face::U, Face::B, Face::R),
    corner(Face::U, Face::R, Face::F),
    corner(Face::D, Face::F, Face::L),
    corner(Face::D, Face::L, Face::B),
    corner(Face::D, Face::B, Face::R),
    corner(Face::D, Face::R, Face::F),
    edge(Face::U, Face::F),
    edge(Face::U, Face::L),
    edge(Face::U, Face::B),
    edge(Face::U, Face::R),
    edge(Face::F, Face::L),
    edge(Face::L, Face::B),
    edge(Face::B, Face::R),
    edge(Face::R, Face::F),
    edge(Face::D, Face::F),
    edge(Face::D, Face::L),
    edge(Face::D, Face::B),
    edge(Face::D, Face::R),
    center(Face::U),
    center(Face::F),
    center(Face::D),
    center(Face::B),
    center(Face::L),
    center(Face::R),
];

/// Canonical dashed spelling for each entry of [`LABELS`].
const NAMES: [&str; LABEL_COUNT] = [
    "U-F-L", "U-L-B", "U-B-R", "U-R-F", "D-F-L", "D-L-B", "D-B-R", "D-R-F", "U-F", "U-L", "U-B",
    "U-R", "F-L", "L-B", "B-R", "R-F", "D-F", "D-L", "D-B", "D-R", "U-U", "F-F", "D-D", "B-B",
    "L-L", "R-R",
];

const INVALID: u8 = u8::MAX;

/// Dense label index for each 6-bit face set, or [`INVALID`] for sets that
/// name no position (empty, opposite-face pairs, 4+ faces, ...).
const INDEX_BY_BITS: [u8; 64] = {
    let mut table = [INVALID; 64];
    let mut i = 0;
    while i < LABEL_COUNT {
        table[LABELS[i].0.bits() as usize] = i as u8;
        i += 1;
    }
    table
};

/// Error from parsing or constructing a position label.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BadLabel {
    /// A token was not one of the six face letters.
    #[error("unknown face letter {0:?}")]
    UnknownFace(String),
    /// The face letters do not name a tracked position (e.g. they contain a
    /// pair of opposite faces).
    #[error("{0:?} does not name a position on the cube")]
    NotAPosition(String),
}

impl Label {
    /// Returns the label naming the position that touches exactly `faces`, or
    /// an error if no tracked position does.
    pub fn from_faces(faces: FaceSet) -> Result<Self, BadLabel> {
        match INDEX_BY_BITS[faces.bits() as usize] {
            INVALID => Err(BadLabel::NotAPosition(format!("{faces:?}"))),
            _ => Ok(Label(faces)),
        }
    }

    /// Returns the set of faces the position touches.
    pub const fn faces(self) -> FaceSet {
        self.0
    }

    /// Returns the dense index of the label, in `0..LABEL_COUNT`.
    pub fn index(self) -> usize {
        INDEX_BY_BITS[self.0.bits() as usize] as usize
    }

    /// Returns whether the position touches `face`.
    pub fn touches(self, face: Face) -> bool {
        self.0.contains(FaceSet::from(face))
    }

    /// Iterates over the faces the position touches.
    pub fn iter_faces(self) -> impl Iterator<Item = Face> {
        Face::iter().filter(move |&f| self.touches(f))
    }

    /// Returns whether the label is a corner, edge, or center.
    pub fn kind(self) -> LabelKind {
        match self.0.bits().count_ones() {
            3 => LabelKind::Corner,
            2 => LabelKind::Edge,
            _ => LabelKind::Center,
        }
    }

    /// Returns whether the position is currently a member of the slice turned
    /// by `axis`.
    ///
    /// Face turns grip every position touching the turned face, including the
    /// face's own center (which the turn leaves in place). Middle-slice turns
    /// grip every position touching neither of the two faces the slice runs
    /// between.
    pub fn in_slice(self, axis: Axis) -> bool {
        match axis {
            Axis::M => !self.touches(Face::L) && !self.touches(Face::R),
            Axis::S => !self.touches(Face::F) && !self.touches(Face::B),
            Axis::E => !self.touches(Face::U) && !self.touches(Face::D),
            Axis::U => self.touches(Face::U),
            Axis::D => self.touches(Face::D),
            Axis::L => self.touches(Face::L),
            Axis::R => self.touches(Face::R),
            Axis::F => self.touches(Face::F),
            Axis::B => self.touches(Face::B),
        }
    }
}

/// Returns the position labels in the slice turned by `axis`.
pub fn slice_members(axis: Axis) -> impl Iterator<Item = Label> {
    LABELS.into_iter().filter(move |label| label.in_slice(axis))
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", NAMES[self.index()])
    }
}

impl FromStr for Label {
    type Err = BadLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut faces = FaceSet::empty();
        for token in s.split('-') {
            let face: Face = token
                .parse()
                .map_err(|_| BadLabel::UnknownFace(token.to_owned()))?;
            faces |= FaceSet::from(face);
        }
        Label::from_faces(faces).map_err(|_| BadLabel::NotAPosition(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_label_domain() {
        assert!(LABELS.iter().all_unique());
        assert_eq!(
            LABELS.iter().filter(|l| l.kind() == LabelKind::Corner).count(),
            8,
        );
        assert_eq!(
            LABELS.iter().filter(|l| l.kind() == LabelKind::Edge).count(),
            12,
        );
        assert_eq!(
            LABELS.iter().filter(|l| l.kind() == LabelKind::Center).count(),
            6,
        );
        for (i, label) in LABELS.into_iter().enumerate() {
            assert_eq!(label.index(), i);
        }
    }

    #[test]
    fn test_parse_and_display() {
        for (label, name) in LABELS.into_iter().zip(NAMES) {
            assert_eq!(label.to_string(), name);
            assert_eq!(name.parse::<Label>(), Ok(label));
        }
        // Token order doesn't matter.
        assert_eq!("L-F-U".parse::<Label>(), Ok(corner(Face::U, Face::F, Face::L)));
        assert_eq!("F-U".parse::<Label>(), Ok(edge(Face::U, Face::F)));
    }

    #[test]
    fn test_bad_labels() {
        assert_eq!(
            "U-X".parse::<Label>(),
            Err(BadLabel::UnknownFace("X".to_owned())),
        );
        // Opposite faces never meet at a position.
        assert!(matches!(
            "U-D".parse::<Label>(),
            Err(BadLabel::NotAPosition(_)),
        ));
        assert!(matches!(
            "U-F-L-B".parse::<Label>(),
            Err(BadLabel::NotAPosition(_)),
        ));
        assert!(Label::from_faces(FaceSet::empty()).is_err());
        assert!(Label::from_faces(FaceSet::all()).is_err());
    }

    #[test]
    fn test_slice_membership() {
        for axis in Axis::iter() {
            let members = slice_members(axis).collect_vec();
            match axis.face() {
                // 4 corners + 4 edges + the face's own center.
                Some(face) => {
                    assert_eq!(members.len(), 9, "bad member count for {axis}");
                    assert!(members.iter().all(|l| l.touches(face)));
                }
                // 4 edges + 4 centers.
                None => {
                    assert_eq!(members.len(), 8, "bad member count for {axis}");
                    assert!(members.iter().all(|l| l.kind() != LabelKind::Corner));
                }
            }
        }
    }

    #[test]
    fn test_middle_slice_members() {
        let m = slice_members(Axis::M).collect_vec();
        for name in ["U-F", "U-B", "D-F", "D-B", "U-U", "D-D", "F-F", "B-B"] {
            let label: Label = name.parse().expect("bad test label");
            assert!(m.contains(&label), "{name} missing from M slice");
        }
    }
}
