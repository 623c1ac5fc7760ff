//! Tolerance schedules
//!
//! A schedule is a step function from elapsed search time to the largest
//! attribute distance still accepted. Steps are checked in order; the first
//! whose threshold exceeds the elapsed time wins, otherwise the cap applies.

use types::game::GameKey;

/// One step: searches shorter than `below_secs` accept up to `tolerance`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub below_secs: f64,
    pub tolerance: f64,
}

impl Step {
    pub const fn new(below_secs: f64, tolerance: f64) -> Self {
        Self { below_secs, tolerance }
    }
}

/// Step function over elapsed search time, capped at `max`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceSchedule {
    steps: &'static [Step],
    max: f64,
}

/// Deadlock: ladder tiers
pub const DEADLOCK_SCHEDULE: ToleranceSchedule = ToleranceSchedule::new(
    &[Step::new(20.0, 1.0), Step::new(40.0, 2.0), Step::new(60.0, 3.0)],
    5.0,
);

/// Valorant: ladder tiers
pub const VALORANT_SCHEDULE: ToleranceSchedule = ToleranceSchedule::new(
    &[Step::new(20.0, 1.0), Step::new(40.0, 2.0), Step::new(60.0, 3.0)],
    4.0,
);

/// Dota 2: absolute rating points
pub const DOTA2_SCHEDULE: ToleranceSchedule = ToleranceSchedule::new(
    &[Step::new(20.0, 250.0), Step::new(40.0, 500.0), Step::new(60.0, 750.0)],
    1000.0,
);

/// CS2: absolute elo points
pub const CS2_SCHEDULE: ToleranceSchedule = ToleranceSchedule::new(
    &[Step::new(20.0, 100.0), Step::new(40.0, 200.0), Step::new(60.0, 300.0)],
    500.0,
);

/// Rust: relative hours difference, `|h1 - h2| / max(h1, h2)`
pub const RUST_SCHEDULE: ToleranceSchedule = ToleranceSchedule::new(
    &[Step::new(20.0, 0.25), Step::new(40.0, 0.5), Step::new(60.0, 0.75)],
    1.0,
);

/// PUBG: absolute kill/death ratio
pub const PUBG_SCHEDULE: ToleranceSchedule = ToleranceSchedule::new(
    &[Step::new(20.0, 0.5), Step::new(40.0, 1.0), Step::new(60.0, 1.5)],
    2.0,
);

impl ToleranceSchedule {
    pub const fn new(steps: &'static [Step], max: f64) -> Self {
        Self { steps, max }
    }

    /// Schedule used by `game`'s rule
    pub fn for_game(game: GameKey) -> &'static ToleranceSchedule {
        match game {
            GameKey::Deadlock => &DEADLOCK_SCHEDULE,
            GameKey::Dota2 => &DOTA2_SCHEDULE,
            GameKey::Cs2 => &CS2_SCHEDULE,
            GameKey::Valorant => &VALORANT_SCHEDULE,
            GameKey::Rust => &RUST_SCHEDULE,
            GameKey::Pubg => &PUBG_SCHEDULE,
        }
    }

    /// Accepted distance after `search_time_secs` of searching
    ///
    /// Negative or NaN elapsed time counts as zero.
    pub fn tolerance(&self, search_time_secs: f64) -> f64 {
        let elapsed = if search_time_secs.is_nan() {
            0.0
        } else {
            search_time_secs.max(0.0)
        };

        self.steps
            .iter()
            .find(|step| elapsed < step.below_secs)
            .map(|step| step.tolerance)
            .unwrap_or(self.max)
    }

    pub fn steps(&self) -> &'static [Step] {
        self.steps
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}
