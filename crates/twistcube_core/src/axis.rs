use strum::{Display, EnumIter, EnumString};

/// One of the six outer faces of the cube.
#[derive(
    Debug, Display, EnumIter, EnumString, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Face {
    /// Up
    U,
    /// Down
    D,
    /// Left
    L,
    /// Right
    R,
    /// Front
    F,
    /// Back
    B,
}

/// Fixed face-adjacency ring used to derive face-turn cycles.
///
/// A face and the face three places later in the ring are opposites.
pub const RING: [Face; 6] = [Face::U, Face::F, Face::L, Face::D, Face::B, Face::R];

impl Face {
    /// Returns the index of the face in [`RING`].
    pub const fn ring_index(self) -> usize {
        match self {
            Face::U => 0,
            Face::F => 1,
            Face::L => 2,
            Face::D => 3,
            Face::B => 4,
            Face::R => 5,
        }
    }

    /// Returns the opposite face.
    pub const fn opposite(self) -> Face {
        RING[(self.ring_index() + 3) % RING.len()]
    }

    /// Returns the face's bit in a [`FaceSet`](crate::FaceSet).
    pub(crate) const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// One of the nine rotation axes: a face turn on one of the six outer faces,
/// or one of the three middle-slice turns.
#[derive(
    Debug, Display, EnumIter, EnumString, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Axis {
    /// Up face turn
    U,
    /// Down face turn
    D,
    /// Left face turn
    L,
    /// Right face turn
    R,
    /// Front face turn
    F,
    /// Back face turn
    B,
    /// Middle-slice turn between L and R
    M,
    /// Middle-slice turn between F and B
    S,
    /// Middle-slice turn between U and D
    E,
}

impl Axis {
    /// Returns the turned face for a face-turn axis, or `None` for the three
    /// middle slices.
    pub const fn face(self) -> Option<Face> {
        match self {
            Axis::U => Some(Face::U),
            Axis::D => Some(Face::D),
            Axis::L => Some(Face::L),
            Axis::R => Some(Face::R),
            Axis::F => Some(Face::F),
            Axis::B => Some(Face::B),
            Axis::M | Axis::S | Axis::E => None,
        }
    }

    /// Returns whether the axis's visible rotation handedness is opposite to
    /// the permutation convention, in which case the animation direction must
    /// be flipped to keep the on-screen turn consistent with the committed
    /// relabeling.
    ///
    /// This is a fixed lookup (`B`, `L` and `D`), not derived from [`RING`].
    pub const fn flips_handedness(self) -> bool {
        matches!(self, Axis::B | Axis::L | Axis::D)
    }
}

impl From<Face> for Axis {
    fn from(face: Face) -> Self {
        match face {
            Face::U => Axis::U,
            Face::D => Axis::D,
            Face::L => Axis::L,
            Face::R => Axis::R,
            Face::F => Axis::F,
            Face::B => Axis::B,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_opposites() {
        assert_eq!(Face::U.opposite(), Face::D);
        assert_eq!(Face::D.opposite(), Face::U);
        assert_eq!(Face::L.opposite(), Face::R);
        assert_eq!(Face::R.opposite(), Face::L);
        assert_eq!(Face::F.opposite(), Face::B);
        assert_eq!(Face::B.opposite(), Face::F);
    }

    #[test]
    fn test_face_letter_round_trip() {
        for face in Face::iter() {
            assert_eq!(face.to_string().parse::<Face>(), Ok(face));
        }
        for axis in Axis::iter() {
            assert_eq!(axis.to_string().parse::<Axis>(), Ok(axis));
        }
        assert!("X".parse::<Axis>().is_err());
        assert!("u".parse::<Face>().is_err());
    }

    #[test]
    fn test_handedness_table() {
        let flipped: Vec<Axis> = Axis::iter().filter(|a| a.flips_handedness()).collect();
        assert_eq!(flipped, vec![Axis::D, Axis::L, Axis::B]);
    }
}
