//! The five entity generators.
//!
//! Structure is deterministic; magnitudes come from the injected RNG and
//! identifiers from positional formulas or a threaded [`IdSequence`].

use std::collections::HashMap;

use chrono::Duration;
use rand::Rng;
use rand::seq::IndexedRandom;

use shotseed_core::catalog::{
    self, Department, DEPARTMENTS, FIRST_NAMES, LAST_NAMES, SHOT_STATUS_WEIGHTS, ShotStatus,
    TASK_TYPES, TaskStatus, TaskType,
};
use shotseed_core::{Episode, Project, Shot, Task, User};

use crate::ids::{EPISODE_ID_BASE, IdSequence, PROJECT_ID, USER_ID_BASE};

/// Shots generated per episode.
pub const SHOTS_PER_EPISODE: usize = 10;

const EPISODE_PAIRS: [(&str, &str); 3] = [
    ("EP101", "The Launch"),
    ("EP102", "First Contact"),
    ("EP103", "The Return"),
];

/// Roster of 12 artists, departments cycling by 1-based position.
pub fn generate_users() -> Vec<User> {
    FIRST_NAMES
        .iter()
        .zip(LAST_NAMES.iter())
        .enumerate()
        .map(|(idx, (first, last))| {
            let seq = idx as i64 + 1;
            User {
                sg_id: USER_ID_BASE + seq,
                name: format!("{first} {last}"),
                email: format!(
                    "{}.{}@studio.local",
                    first.to_lowercase(),
                    last.to_lowercase()
                ),
                department: DEPARTMENTS[(idx + 1) % DEPARTMENTS.len()],
                is_active: true,
            }
        })
        .collect()
}

/// The single COSMOS project record.
pub fn generate_project() -> Project {
    Project {
        sg_id: PROJECT_ID,
        code: "COSMOS".to_string(),
        name: "Cosmos: A Space Journey".to_string(),
        status: "Active".to_string(),
        start_date: catalog::project_start(),
        end_date: catalog::project_end(),
    }
}

/// Three fixed episodes; the first two are already in production.
pub fn generate_episodes(project_id: i64) -> Vec<Episode> {
    EPISODE_PAIRS
        .iter()
        .enumerate()
        .map(|(idx, (code, name))| {
            let seq = idx as i64 + 1;
            let status = if seq <= 2 {
                "In Production"
            } else {
                "Pre-Production"
            };
            Episode {
                sg_id: EPISODE_ID_BASE + seq,
                project_id,
                code: (*code).to_string(),
                name: (*name).to_string(),
                status: status.to_string(),
                cut_order: seq as i32,
            }
        })
        .collect()
}

/// Ten shots per episode with randomized frame ranges and bids.
///
/// Shot ids come from `ids` and keep counting across episodes; they never
/// reset at an episode boundary.
pub fn generate_shots<R: Rng>(
    episodes: &[Episode],
    ids: &mut IdSequence,
    rng: &mut R,
) -> Vec<Shot> {
    let mut shots = Vec::with_capacity(episodes.len() * SHOTS_PER_EPISODE);
    for episode in episodes {
        for shot_num in 1..=SHOTS_PER_EPISODE {
            let frame_in = 1001;
            // 2 to 10 seconds at 24 fps
            let frame_count = rng.random_range(48..=240);
            let frame_out = frame_in + frame_count - 1;

            let base_bid = f64::from(frame_count) * 0.15;
            let bid_hours = round2(base_bid * rng.random_range(0.8..=1.3));

            let status = sample_shot_status(rng);
            let actual_hours = match status {
                ShotStatus::Approved | ShotStatus::Final => {
                    round2(bid_hours * rng.random_range(0.7..=1.4))
                }
                ShotStatus::InProgress => round2(bid_hours * rng.random_range(0.2..=0.8)),
                ShotStatus::NotStarted | ShotStatus::PendingReview => 0.0,
            };

            shots.push(Shot {
                sg_id: ids.next_id(),
                episode_id: episode.sg_id,
                code: format!("{}_SH{:03}", episode.code, shot_num),
                name: format!("Shot {shot_num}"),
                status,
                frame_count,
                frame_in,
                frame_out,
                bid_hours,
                actual_hours,
                cut_order: shot_num as i32,
            });
        }
    }
    shots
}

/// Six tasks per shot, one per pipeline step in fixed order.
///
/// How far a shot's tasks have progressed follows the shot status; dates
/// hang off the schedule base, one step every three days.
pub fn generate_tasks<R: Rng>(
    shots: &[Shot],
    users: &[User],
    ids: &mut IdSequence,
    rng: &mut R,
) -> Vec<Task> {
    let mut users_by_dept: HashMap<Department, Vec<i64>> = HashMap::new();
    for user in users {
        users_by_dept
            .entry(user.department)
            .or_default()
            .push(user.sg_id);
    }
    let all_user_ids: Vec<i64> = users.iter().map(|u| u.sg_id).collect();
    let base_date = catalog::task_schedule_base();

    let mut tasks = Vec::with_capacity(shots.len() * TASK_TYPES.len());
    for shot in shots {
        let completed = completed_task_count(shot.status, rng);

        for (idx, task_type) in TASK_TYPES.iter().enumerate() {
            let sg_id = ids.next_id();
            let assignee_id = pick_assignee(*task_type, &users_by_dept, &all_user_ids, rng);
            let task_bid = round2(shot.bid_hours * task_type.bid_weight());

            let task = if idx < completed {
                let actual_hours = round2(task_bid * rng.random_range(0.75..=1.35));
                let start_offset = idx as i64 * 3 + rng.random_range(0..=2);
                let duration = ((task_bid / 8.0) as i64 + rng.random_range(0..=2)).max(1);
                let start_date = base_date + Duration::days(start_offset);
                Task {
                    sg_id,
                    shot_id: shot.sg_id,
                    task_type: *task_type,
                    status: TaskStatus::Complete,
                    assignee_id,
                    bid_hours: task_bid,
                    actual_hours,
                    start_date,
                    due_date: start_date + Duration::days(duration + 2),
                    completed_date: Some(start_date + Duration::days(duration)),
                }
            } else if idx == completed
                && matches!(
                    shot.status,
                    ShotStatus::InProgress | ShotStatus::PendingReview
                )
            {
                let actual_hours = round2(task_bid * rng.random_range(0.2..=0.7));
                let start_offset = idx as i64 * 3 + rng.random_range(0..=2);
                let start_date = base_date + Duration::days(start_offset);
                Task {
                    sg_id,
                    shot_id: shot.sg_id,
                    task_type: *task_type,
                    status: TaskStatus::InProgress,
                    assignee_id,
                    bid_hours: task_bid,
                    actual_hours,
                    start_date,
                    due_date: start_date + Duration::days(5),
                    completed_date: None,
                }
            } else {
                // The ready slot only opens once the shot has work underway;
                // an untouched shot keeps every task waiting.
                let status = if completed > 0 && idx == completed + 1 {
                    TaskStatus::Ready
                } else {
                    TaskStatus::Waiting
                };
                let start_offset = idx as i64 * 3 + rng.random_range(5..=10);
                let start_date = base_date + Duration::days(start_offset);
                Task {
                    sg_id,
                    shot_id: shot.sg_id,
                    task_type: *task_type,
                    status,
                    assignee_id,
                    bid_hours: task_bid,
                    actual_hours: 0.0,
                    start_date,
                    due_date: start_date + Duration::days(5),
                    completed_date: None,
                }
            };
            tasks.push(task);
        }
    }
    tasks
}

/// Weighted draw over the shot status catalog.
fn sample_shot_status<R: Rng>(rng: &mut R) -> ShotStatus {
    SHOT_STATUS_WEIGHTS
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(status, _)| *status)
        .unwrap_or(ShotStatus::InProgress)
}

/// How many of the six ordinal task slots a shot has already finished.
fn completed_task_count<R: Rng>(status: ShotStatus, rng: &mut R) -> usize {
    match status {
        ShotStatus::Final => 6,
        ShotStatus::Approved => 5,
        ShotStatus::PendingReview => rng.random_range(4..=5),
        ShotStatus::InProgress => rng.random_range(1..=3),
        ShotStatus::NotStarted => 0,
    }
}

/// Uniform pick from the staffing department, falling back to the whole
/// roster when that department is empty.
fn pick_assignee<R: Rng>(
    task_type: TaskType,
    users_by_dept: &HashMap<Department, Vec<i64>>,
    all_user_ids: &[i64],
    rng: &mut R,
) -> i64 {
    let pool = users_by_dept
        .get(&task_type.department())
        .map(Vec::as_slice)
        .filter(|ids| !ids.is_empty())
        .unwrap_or(all_user_ids);
    pool.choose(rng).copied().unwrap_or(USER_ID_BASE + 1)
}

/// Hour figures are stored rounded to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
