use crate::{Events, RingTick, Score};

/// Award one point per pair passed while the player still has control.
///
/// Passes made after a collision still move the ring's cursor but score
/// nothing.
pub fn award_passes(tick: &RingTick, controls_on: bool, score: &mut Score, events: &mut Events) {
    if !controls_on {
        return;
    }
    for _ in 0..tick.passed {
        score.increment();
        events.points_scored += 1;
    }
}
