use rand::Rng;
use twistcube_core::{Axis, CubeState, Turn};

use crate::animations::{DEFAULT_STEP_ANGLE, Move, TickEvent};
use crate::scramble::random_turns;

/// Outcome of a rotation request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub enum RequestOutcome {
    /// A move was created; subsequent frames will report rotation progress.
    Accepted,
    /// Another rotation is in flight. The request was discarded, not queued,
    /// which is the expected behavior rather than a failure.
    Dropped,
}

impl RequestOutcome {
    /// Returns whether the request created a move.
    pub const fn is_accepted(self) -> bool {
        matches!(self, RequestOutcome::Accepted)
    }
}

/// Instruction for the rendering layer, produced once per frame while a
/// rotation is in flight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FrameUpdate {
    /// Rotate every visual object whose current name is a member of the
    /// axis's slice by the signed increment around the axis's world vector
    /// (see [`world_axis`](crate::world_axis)).
    Rotate {
        /// Axis being rotated.
        axis: Axis,
        /// Signed increment for this frame, in degrees.
        degrees: f32,
    },
    /// The rotation finished. Its permutation is already committed, so the
    /// layer may now rename its visual objects from
    /// [`CubeController::state`].
    Finished {
        /// Axis that finished rotating.
        axis: Axis,
    },
}

#[derive(Debug)]
struct ActiveRotation {
    anim: Move,
    /// Turn to commit on completion. Uncompensated: the handedness flip
    /// applies to the animation only, never to the relabeling.
    turn: Turn,
}

/// Orchestrates rotations: owns the position store and the single
/// active-move slot, and translates move ticks into rendering-layer updates.
///
/// The slot is claimed in [`Self::request_rotation`] and released at the
/// completion boundary in [`Self::frame`]; the position store is only ever
/// mutated at that boundary.
#[derive(Debug, Default)]
pub struct CubeController {
    state: CubeState,
    active: Option<ActiveRotation>,
}

impl CubeController {
    /// Returns a controller for a freshly reset cube.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current position mapping.
    ///
    /// Between frames this is always a fully-resolved bijection, never a
    /// partially-applied permutation.
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    /// Returns the axis of the rotation in flight, if any.
    pub fn active_axis(&self) -> Option<Axis> {
        Some(self.active.as_ref()?.turn.axis)
    }

    /// Returns whether a rotation is in flight.
    pub fn is_rotating(&self) -> bool {
        self.active.is_some()
    }

    /// Requests a rotation with the default step angle.
    pub fn request_rotation(&mut self, axis: Axis, inverted: bool) -> RequestOutcome {
        self.request_rotation_with_step(axis, inverted, DEFAULT_STEP_ANGLE)
    }

    /// Requests a rotation of `axis`, stepping `step_angle` degrees per frame.
    ///
    /// If a rotation is already in flight the request is dropped, not queued.
    pub fn request_rotation_with_step(
        &mut self,
        axis: Axis,
        inverted: bool,
        step_angle: f32,
    ) -> RequestOutcome {
        let turn = Turn { axis, inverted };
        if self.active.is_some() {
            log::trace!("rotation in flight; dropping request for {turn}");
            return RequestOutcome::Dropped;
        }
        log::trace!("starting rotation {turn}");
        self.active = Some(ActiveRotation {
            anim: Move::new(axis, inverted, step_angle),
            turn,
        });
        RequestOutcome::Accepted
    }

    /// Advances the active rotation by one frame of the host's animation
    /// clock.
    ///
    /// Returns `None` when no rotation is in flight. On the completing frame
    /// the turn's permutation is committed to the position store and the
    /// active-move slot is released, unblocking the next request.
    pub fn frame(&mut self) -> Option<FrameUpdate> {
        let active = self.active.as_mut()?;
        let turn = active.turn;
        match active.anim.tick()? {
            TickEvent::Progress { degrees } => Some(FrameUpdate::Rotate {
                axis: turn.axis,
                degrees,
            }),
            TickEvent::Complete => {
                self.active = None;
                self.state.apply(turn);
                log::trace!("committed {turn}");
                Some(FrameUpdate::Finished { axis: turn.axis })
            }
        }
    }

    /// Applies `length` random turns to the position store instantly, with no
    /// animation. Dropped while a rotation is in flight.
    pub fn scramble(&mut self, rng: &mut impl Rng, length: usize) -> RequestOutcome {
        if self.active.is_some() {
            log::trace!("rotation in flight; dropping scramble request");
            return RequestOutcome::Dropped;
        }
        for turn in random_turns(rng, length) {
            self.state.apply(turn);
        }
        RequestOutcome::Accepted
    }
}
