use twistcube_core::Axis;

/// Target angle in degrees for a clockwise quarter turn.
pub const CLOCKWISE: f32 = -90.0;
/// Target angle in degrees for a counterclockwise quarter turn.
pub const COUNTERCLOCKWISE: f32 = 90.0;
/// Default angle in degrees that a move advances per tick.
pub const DEFAULT_STEP_ANGLE: f32 = 6.0;

/// One in-flight rotation, advancing an angle from 0° toward ±90° in fixed
/// per-tick steps.
///
/// A move only knows angles; committing the logical permutation when it
/// completes is the controller's job. At most one move exists at a time.
#[derive(Debug, Clone)]
pub struct Move {
    axis: Axis,
    target_angle: f32,
    current_angle: f32,
    step_angle: f32,
    completed: bool,
}

/// What happened during one tick of a [`Move`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TickEvent {
    /// The move advanced. The slice's visual objects must be rotated by this
    /// signed increment, in degrees — the increment for this tick, not the
    /// cumulative angle.
    Progress {
        /// Signed angle to rotate by, in degrees.
        degrees: f32,
    },
    /// The move reached its target angle. Fired exactly once, on the tick
    /// after the final [`TickEvent::Progress`].
    Complete,
}

impl Move {
    /// Returns a new move for one quarter turn of `axis`.
    ///
    /// Axes whose visible handedness is opposite to the permutation
    /// convention ([`Axis::flips_handedness`]) animate in the flipped
    /// direction, so the on-screen rotation matches the relabeling the
    /// controller commits on completion.
    ///
    /// # Panics
    ///
    /// Panics if `step_angle` is not a positive angle.
    pub fn new(axis: Axis, inverted: bool, step_angle: f32) -> Self {
        assert!(step_angle > 0.0, "step angle must be positive");
        let inverted = inverted != axis.flips_handedness();
        Self {
            axis,
            target_angle: if inverted { COUNTERCLOCKWISE } else { CLOCKWISE },
            current_angle: 0.0,
            step_angle,
            completed: false,
        }
    }

    /// Returns the axis being rotated.
    pub fn axis(&self) -> Axis {
        self.axis
    }
    /// Returns the signed target angle in degrees.
    pub fn target_angle(&self) -> f32 {
        self.target_angle
    }
    /// Returns the signed angle advanced so far, in degrees.
    pub fn current_angle(&self) -> f32 {
        self.current_angle
    }
    /// Returns the per-tick step angle in degrees.
    pub fn step_angle(&self) -> f32 {
        self.step_angle
    }
    /// Returns whether the move has fired [`TickEvent::Complete`].
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Advances the move by one frame.
    ///
    /// Returns a [`TickEvent::Progress`] per advancing tick, with the final
    /// increment clamped so the increments sum to exactly the target angle;
    /// then [`TickEvent::Complete`] once; then `None` forever.
    pub fn tick(&mut self) -> Option<TickEvent> {
        if self.completed {
            return None;
        }

        let remaining = self.target_angle - self.current_angle;
        if remaining == 0.0 {
            self.completed = true;
            return Some(TickEvent::Complete);
        }

        let degrees = if self.step_angle >= remaining.abs() {
            self.current_angle = self.target_angle;
            remaining
        } else {
            let step = self.step_angle.copysign(remaining);
            self.current_angle += step;
            step
        };
        Some(TickEvent::Progress { degrees })
    }
}
