//! Entity records produced by the generators.
//!
//! Each struct serializes into the JSON payload persisted in its raw
//! table's `data` column. The `sg_id` lives in the row envelope, not the
//! payload, so it is skipped during serialization.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::{Department, ShotStatus, TaskStatus, TaskType};

/// An artist on the demo team.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    #[serde(skip)]
    pub sg_id: i64,
    pub name: String,
    /// Derived from the name: `first.last@studio.local`, lowercased.
    pub email: String,
    pub department: Department,
    pub is_active: bool,
}

/// The single demo project.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Project {
    #[serde(skip)]
    pub sg_id: i64,
    pub code: String,
    pub name: String,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// One episode of the project.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Episode {
    #[serde(skip)]
    pub sg_id: i64,
    /// Parent project's `sg_id`.
    pub project_id: i64,
    pub code: String,
    pub name: String,
    pub status: String,
    pub cut_order: i32,
}

/// A single continuous camera take within an episode.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Shot {
    #[serde(skip)]
    pub sg_id: i64,
    /// Parent episode's `sg_id`.
    pub episode_id: i64,
    /// Episode code plus a zero-padded sequence, e.g. `EP101_SH003`.
    pub code: String,
    pub name: String,
    pub status: ShotStatus,
    pub frame_count: i32,
    pub frame_in: i32,
    pub frame_out: i32,
    pub bid_hours: f64,
    pub actual_hours: f64,
    pub cut_order: i32,
}

/// One unit of discipline work on a shot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Task {
    #[serde(skip)]
    pub sg_id: i64,
    /// Parent shot's `sg_id`.
    pub shot_id: i64,
    pub task_type: TaskType,
    pub status: TaskStatus,
    /// Assigned user's `sg_id`.
    pub assignee_id: i64,
    pub bid_hours: f64,
    pub actual_hours: f64,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    /// Present only once the task is complete; serialized as `null` otherwise.
    pub completed_date: Option<NaiveDate>,
}
