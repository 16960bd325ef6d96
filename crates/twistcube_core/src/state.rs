use std::fmt;

use itertools::Itertools;

use crate::axis::Axis;
use crate::label::{LABEL_COUNT, LABELS, Label, slice_members};

/// Identity of a physical sub-piece, independent of its current position.
///
/// A piece's identity is the label of the position it occupies on a freshly
/// reset cube; it never changes afterwards, only the position label associated
/// with it does.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Piece(Label);

impl Piece {
    /// Returns the position the piece occupies on a reset cube.
    pub const fn home(self) -> Label {
        self.0
    }
}

impl From<Label> for Piece {
    fn from(label: Label) -> Self {
        Piece(label)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Current mapping of position labels to piece identities.
///
/// This is a bijection from the fixed 26-label domain onto the 26 pieces at
/// all times. It is only ever mutated at a move's completion boundary, so a
/// reader between ticks always observes a fully-resolved state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    /// Piece at each position, indexed by [`Label::index`].
    pieces: [Piece; LABEL_COUNT],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// Returns a solved cube, where every piece is at its home position.
    pub fn new() -> Self {
        Self {
            pieces: LABELS.map(Piece),
        }
    }

    /// Returns the piece currently at `label`.
    pub fn piece_at(&self, label: Label) -> Piece {
        self.pieces[label.index()]
    }

    /// Places `piece` at `label`.
    ///
    /// The caller is responsible for preserving the bijection invariant; the
    /// permutation engine does so by always writing a full relabeling from a
    /// snapshot.
    pub fn set(&mut self, label: Label, piece: Piece) {
        self.pieces[label.index()] = piece;
    }

    /// Replaces the entire mapping, indexed by [`Label::index`].
    pub fn replace_all(&mut self, pieces: [Piece; LABEL_COUNT]) {
        self.pieces = pieces;
    }

    /// Iterates over all `(position, piece)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Label, Piece)> + '_ {
        LABELS.into_iter().zip(self.pieces)
    }

    /// Iterates over the `(position, piece)` pairs currently in the slice
    /// turned by `axis`.
    ///
    /// Membership is by current position label, not by piece identity, since
    /// pieces move between slices across turns.
    pub fn pieces_in(&self, axis: Axis) -> impl Iterator<Item = (Label, Piece)> + '_ {
        slice_members(axis).map(|label| (label, self.piece_at(label)))
    }

    /// Returns whether the mapping is a bijection over the 26 labels.
    pub fn is_bijection(&self) -> bool {
        self.pieces.iter().all_unique()
    }

    /// Returns whether every piece is at its home position.
    pub fn is_solved(&self) -> bool {
        self.iter().all(|(label, piece)| piece.home() == label)
    }
}
