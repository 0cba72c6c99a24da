//! Core contracts and reference data for Shotseed.
//!
//! This crate defines the fixed catalog tables, the entity records produced
//! by the generators, and the `(sg_id, data)` envelope shared with the
//! persistence sink.

pub mod catalog;
pub mod error;
pub mod record;
pub mod types;

pub use catalog::{
    Department, DEPARTMENTS, FIRST_NAMES, LAST_NAMES, SHOT_STATUS_WEIGHTS, ShotStatus,
    TASK_STATUSES, TASK_TYPES, TaskStatus, TaskType,
};
pub use error::{Error, Result};
pub use record::{Entity, RawTable, SgRecord, to_records};
pub use types::{Episode, Project, Shot, Task, User};
