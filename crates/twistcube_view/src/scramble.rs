use rand::Rng;
use twistcube_core::{Axis, CubeState, IntoEnumIterator, Turn};

/// Returns `count` uniformly random turns over the 9 axes and 2 directions.
pub fn random_turns(rng: &mut impl Rng, count: usize) -> Vec<Turn> {
    let axes: Vec<Axis> = Axis::iter().collect();
    (0..count)
        .map(|_| Turn {
            axis: axes[rng.random_range(0..axes.len())],
            inverted: rng.random(),
        })
        .collect()
}

/// Applies `count` random turns to `state` instantly, returning the turns.
pub fn scramble(state: &mut CubeState, rng: &mut impl Rng, count: usize) -> Vec<Turn> {
    let turns = random_turns(rng, count);
    for &turn in &turns {
        state.apply(turn);
    }
    turns
}
