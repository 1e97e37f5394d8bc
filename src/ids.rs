//! Identifiers for engine entities.
//!
//! `AnimId` is a dense slot index into the engine's instance storage. Slots of
//! retired pooled instances are recycled, so an id held across a pooled
//! instance's retirement may alias the slot's next occupant; holding ids past
//! completion is only meaningful for non-pooled (`spawn`-issued) instances.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct AnimId(pub u32);

impl AnimId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
