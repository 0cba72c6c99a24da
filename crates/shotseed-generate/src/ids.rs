//! Explicit identifier allocation for generated entities.
//!
//! Each entity type owns a numeric band. Users, the project, and episodes
//! derive ids from their position; shots and tasks draw from an
//! [`IdSequence`] the caller creates and threads through, so no hidden
//! shared counter exists between generators.

/// Base for user ids; the roster occupies 1001..=1012.
pub const USER_ID_BASE: i64 = 1000;

/// The single project's id.
pub const PROJECT_ID: i64 = 100;

/// Base for episode ids; the three episodes occupy 201..=203.
pub const EPISODE_ID_BASE: i64 = 200;

/// First shot id; shots count up from here across all episodes.
pub const SHOT_ID_START: i64 = 301;

/// First task id; tasks count up from here across all shots.
pub const TASK_ID_START: i64 = 401;

/// Monotonic id counter threaded through generator calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: i64,
}

impl IdSequence {
    /// Sequence whose first allocated id is `start`.
    pub fn new(start: i64) -> Self {
        Self { next: start }
    }

    /// Allocate the next id, advancing the sequence.
    pub fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_hands_out_consecutive_ids() {
        let mut ids = IdSequence::new(SHOT_ID_START);
        assert_eq!(ids.next_id(), 301);
        assert_eq!(ids.next_id(), 302);
        assert_eq!(ids.next_id(), 303);
    }

    #[test]
    fn bands_do_not_overlap_within_run_sizes() {
        // 12 users, 1 project, 3 episodes, 30 shots, 180 tasks.
        assert!(PROJECT_ID < EPISODE_ID_BASE);
        assert!(EPISODE_ID_BASE + 3 < SHOT_ID_START);
        assert!(SHOT_ID_START + 30 < TASK_ID_START);
        assert!(TASK_ID_START + 180 < USER_ID_BASE + 1);
    }
}
