//! Ledger of host resources registered by site components.
//!
//! Browser drivers record every observer, listener, timer and frame request they
//! create and release it on teardown. A component that tears down with live
//! handles left in the ledger is leaking.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LifecycleError;
use crate::ids::{HandleId, IdAllocator};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Observer,
    Listener,
    Interval,
    Timeout,
    AnimationFrame,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleRecord {
    pub id: HandleId,
    pub kind: ResourceKind,
    pub owner: String,
}

#[derive(Debug, Default)]
pub struct ResourceLedger {
    ids: IdAllocator,
    live: BTreeMap<HandleId, HandleRecord>,
    /// Highest id handed out plus one; anything below it that is not live was released.
    issued: u32,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: ResourceKind, owner: &str) -> HandleId {
        let id = self.ids.alloc_handle();
        self.issued = id.0.wrapping_add(1);
        self.live.insert(
            id,
            HandleRecord {
                id,
                kind,
                owner: owner.to_string(),
            },
        );
        log::trace!("registered {kind:?} {id:?} for `{owner}`");
        id
    }

    pub fn release(&mut self, id: HandleId) -> Result<HandleRecord, LifecycleError> {
        match self.live.remove(&id) {
            Some(record) => {
                log::trace!("released {:?} {:?} for `{}`", record.kind, id, record.owner);
                Ok(record)
            }
            None if id.0 < self.issued => Err(LifecycleError::AlreadyReleased(id)),
            None => Err(LifecycleError::UnknownHandle(id)),
        }
    }

    /// Release everything `owner` still holds, returning what was released.
    pub fn release_owner(&mut self, owner: &str) -> Vec<HandleRecord> {
        let ids: Vec<HandleId> = self
            .live
            .values()
            .filter(|r| r.owner == owner)
            .map(|r| r.id)
            .collect();
        ids.into_iter()
            .filter_map(|id| self.live.remove(&id))
            .collect()
    }

    pub fn is_live(&self, id: HandleId) -> bool {
        self.live.contains_key(&id)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn live_for(&self, owner: &str) -> usize {
        self.live.values().filter(|r| r.owner == owner).count()
    }

    pub fn live_records(&self) -> impl Iterator<Item = &HandleRecord> {
        self.live.values()
    }
}
