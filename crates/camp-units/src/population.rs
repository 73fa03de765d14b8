//! `Population` — one unit's candidate store.

use camp_core::CandidateId;

use crate::CandidateAttributes;

/// Vec-backed store of the candidates in one unit.
///
/// Slots are tombstoned on removal so `CandidateId`s stay stable for the
/// whole run — queued handles must never be re-pointed at a different person
/// by a reallocation.
#[derive(Default)]
pub struct Population {
    slots: Vec<Option<CandidateAttributes>>,
    live:  usize,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate and return its ID.
    pub fn insert(&mut self, attrs: CandidateAttributes) -> CandidateId {
        let id = CandidateId(self.slots.len() as u32);
        self.slots.push(Some(attrs));
        self.live += 1;
        id
    }

    /// Remove a candidate (death, emigration).  Returns the attributes if the
    /// candidate was present.
    pub fn remove(&mut self, id: CandidateId) -> Option<CandidateAttributes> {
        let slot = self.slots.get_mut(id.index())?;
        let attrs = slot.take();
        if attrs.is_some() {
            self.live -= 1;
        }
        attrs
    }

    pub fn get(&self, id: CandidateId) -> Option<&CandidateAttributes> {
        self.slots.get(id.index())?.as_ref()
    }

    pub fn get_mut(&mut self, id: CandidateId) -> Option<&mut CandidateAttributes> {
        self.slots.get_mut(id.index())?.as_mut()
    }

    /// Visit every live candidate in ID order.
    pub fn visit(&self, mut f: impl FnMut(CandidateId, &CandidateAttributes)) {
        for (i, slot) in self.slots.iter().enumerate() {
            if let Some(attrs) = slot {
                f(CandidateId(i as u32), attrs);
            }
        }
    }

    /// Number of live candidates.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}
