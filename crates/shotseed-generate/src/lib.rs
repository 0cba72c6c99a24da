//! Demo data generation for the Shotseed pipeline.
//!
//! Catalog-driven entity generators plus the seeded engine that runs them
//! in dependency order: users, project, episodes, shots, tasks.

pub mod engine;
pub mod generators;
pub mod ids;

pub use engine::{generate_all, SeedData, SeedSummary};
pub use generators::{
    generate_episodes, generate_project, generate_shots, generate_tasks, generate_users,
    SHOTS_PER_EPISODE,
};
pub use ids::{
    EPISODE_ID_BASE, IdSequence, PROJECT_ID, SHOT_ID_START, TASK_ID_START, USER_ID_BASE,
};
