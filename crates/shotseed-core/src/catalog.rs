//! Fixed reference data consumed by every generator.
//!
//! Everything in this module is hard-coded: the artist roster names, the
//! discipline and status vocabularies with their weights, and the schedule
//! anchor dates for the demo project. Nothing here mutates at runtime.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// First names for the demo artist roster, paired positionally with
/// [`LAST_NAMES`].
pub const FIRST_NAMES: [&str; 12] = [
    "Alex", "Jordan", "Casey", "Morgan", "Taylor", "Riley", "Quinn", "Avery", "Cameron", "Drew",
    "Jamie", "Skyler",
];

/// Last names for the demo artist roster.
pub const LAST_NAMES: [&str; 12] = [
    "Chen", "Patel", "Kim", "Garcia", "Smith", "Johnson", "Williams", "Brown", "Jones", "Davis",
    "Miller", "Wilson",
];

/// Studio departments, in roster assignment order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Department {
    Layout,
    Animation,
    #[serde(rename = "FX")]
    Fx,
    Lighting,
    Compositing,
    Production,
}

/// Department list cycled over when assigning users.
pub const DEPARTMENTS: [Department; 6] = [
    Department::Layout,
    Department::Animation,
    Department::Fx,
    Department::Lighting,
    Department::Compositing,
    Department::Production,
];

/// Pipeline steps that make up a shot, one task per step.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum TaskType {
    Layout,
    Animation,
    #[serde(rename = "FX")]
    Fx,
    Lighting,
    Compositing,
    Review,
}

/// Fixed pipeline order; every shot gets exactly one task per entry.
pub const TASK_TYPES: [TaskType; 6] = [
    TaskType::Layout,
    TaskType::Animation,
    TaskType::Fx,
    TaskType::Lighting,
    TaskType::Compositing,
    TaskType::Review,
];

impl TaskType {
    /// Fraction of the parent shot's bid carried by this step.
    ///
    /// The six weights sum to 1.0, so a shot's task bids add back up to the
    /// shot bid apart from per-task rounding.
    pub fn bid_weight(self) -> f64 {
        match self {
            TaskType::Layout => 0.10,
            TaskType::Animation => 0.35,
            TaskType::Fx => 0.15,
            TaskType::Lighting => 0.15,
            TaskType::Compositing => 0.20,
            TaskType::Review => 0.05,
        }
    }

    /// Department that staffs this step. Review work is owned by Production;
    /// the other five map to the department of the same name.
    pub fn department(self) -> Department {
        match self {
            TaskType::Layout => Department::Layout,
            TaskType::Animation => Department::Animation,
            TaskType::Fx => Department::Fx,
            TaskType::Lighting => Department::Lighting,
            TaskType::Compositing => Department::Compositing,
            TaskType::Review => Department::Production,
        }
    }
}

/// Shot pipeline status.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum ShotStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Pending Review")]
    PendingReview,
    Approved,
    Final,
}

/// Shot statuses with their draw weights. Weights sum to 1.0.
pub const SHOT_STATUS_WEIGHTS: [(ShotStatus, f64); 5] = [
    (ShotStatus::NotStarted, 0.10),
    (ShotStatus::InProgress, 0.30),
    (ShotStatus::PendingReview, 0.20),
    (ShotStatus::Approved, 0.25),
    (ShotStatus::Final, 0.15),
];

/// Task workflow status.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Waiting,
    Ready,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Pending Review")]
    PendingReview,
    Complete,
}

/// Full task status vocabulary, from untouched to done.
pub const TASK_STATUSES: [TaskStatus; 5] = [
    TaskStatus::Waiting,
    TaskStatus::Ready,
    TaskStatus::InProgress,
    TaskStatus::PendingReview,
    TaskStatus::Complete,
];

/// First day of the demo project.
pub fn project_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default()
}

/// Last day of the demo project.
pub fn project_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 19).unwrap_or_default()
}

/// Anchor for task schedules, one week after project start.
pub fn task_schedule_base() -> NaiveDate {
    project_start() + Duration::days(7)
}
