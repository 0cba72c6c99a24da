//! The `(sg_id, data)` row envelope shared with the persistence sink.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Episode, Project, Shot, Task, User};

/// One sink-ready row: a synthetic identifier plus the JSON attribute
/// payload persisted alongside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SgRecord {
    pub sg_id: i64,
    pub data: serde_json::Value,
}

/// Raw landing tables, one per entity type, in persistence order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RawTable {
    Users,
    Projects,
    Episodes,
    Shots,
    Tasks,
}

impl RawTable {
    /// All landing tables in the order batches are persisted.
    pub const ALL: [RawTable; 5] = [
        RawTable::Users,
        RawTable::Projects,
        RawTable::Episodes,
        RawTable::Shots,
        RawTable::Tasks,
    ];

    /// Table name in the demo schema.
    pub fn table_name(self) -> &'static str {
        match self {
            RawTable::Users => "raw_users",
            RawTable::Projects => "raw_projects",
            RawTable::Episodes => "raw_episodes",
            RawTable::Shots => "raw_shots",
            RawTable::Tasks => "raw_tasks",
        }
    }
}

/// A generated entity that can be flattened into a raw-table row.
pub trait Entity: Serialize {
    /// Synthetic identifier, unique within the entity's table.
    fn sg_id(&self) -> i64;

    /// Flatten into the `(sg_id, data)` envelope. The payload carries every
    /// serialized field; the identifier is lifted out of it.
    fn to_record(&self) -> Result<SgRecord> {
        Ok(SgRecord {
            sg_id: self.sg_id(),
            data: serde_json::to_value(self)?,
        })
    }
}

impl Entity for User {
    fn sg_id(&self) -> i64 {
        self.sg_id
    }
}

impl Entity for Project {
    fn sg_id(&self) -> i64 {
        self.sg_id
    }
}

impl Entity for Episode {
    fn sg_id(&self) -> i64 {
        self.sg_id
    }
}

impl Entity for Shot {
    fn sg_id(&self) -> i64 {
        self.sg_id
    }
}

impl Entity for Task {
    fn sg_id(&self) -> i64 {
        self.sg_id
    }
}

/// Flatten a batch of entities into sink-ready records.
pub fn to_records<E: Entity>(entities: &[E]) -> Result<Vec<SgRecord>> {
    entities.iter().map(|entity| entity.to_record()).collect()
}
