//! Topping placement ledger
//!
//! Single owner of every live topping instance and of the per-topping filled
//! slice sets. A slice holds at most one topping type at a time; dropping a
//! second type evicts the first (last write wins at slice granularity).
//! Multiple instances of the same type may share a slice.

use std::collections::{BTreeMap, BTreeSet};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::PizzaLayout;
use super::result::PlacedTopping;
use super::state::Topping;

/// Handle to a live topping instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ToppingId(pub u32);

/// Where an instance currently sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementState {
    /// Held by the player or freshly spawned, not on any pizza
    Off,
    /// Resting on the given global slice
    OnSlice(u32),
}

/// One topping on (or headed to) the board, internal to the ledger
#[derive(Debug, Clone, PartialEq)]
pub struct ToppingInstance {
    pub id: ToppingId,
    pub topping: Topping,
    pub pos: Vec2,
    pub state: PlacementState,
}

/// What happened to a dropped topping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaceOutcome {
    /// Board has no pizzas or no slices yet; the instance was discarded
    NotReady,
    /// Dropped outside every pizza; the instance was discarded
    Discarded,
    /// Landed on a slice, evicting any other topping type that held it
    Placed { pizza: u8, slice: u32, evicted: Vec<ToppingId> },
}

/// Arena of live toppings plus the per-topping filled slice sets
///
/// Iteration order is stable everywhere: instances by ID, slices in
/// ascending global index.
#[derive(Debug, Clone)]
pub struct ToppingLedger {
    instances: BTreeMap<ToppingId, ToppingInstance>,
    /// Global slice indices filled, one set per topping type
    filled: [BTreeSet<u32>; Topping::COUNT],
    next_id: u32,
}

impl Default for ToppingLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ToppingLedger {
    pub fn new() -> Self {
        Self {
            instances: BTreeMap::new(),
            filled: Default::default(),
            next_id: 1,
        }
    }

    /// Start tracking a new off-pizza instance (drag began)
    pub fn spawn(&mut self, topping: Topping) -> ToppingId {
        let id = ToppingId(self.next_id);
        self.next_id += 1;
        self.instances.insert(
            id,
            ToppingInstance { id, topping, pos: Vec2::ZERO, state: PlacementState::Off },
        );
        id
    }

    /// Settle a drag: the instance lands on a slice or leaves the board
    ///
    /// Off-pizza drops destroy the instance and free its old slice. On-slice
    /// drops evict every other topping type holding that slice and report
    /// the destroyed IDs so the UI can drop its sprites.
    pub fn place(&mut self, id: ToppingId, pos: Vec2, layout: &PizzaLayout) -> PlaceOutcome {
        let Some(instance) = self.instances.get(&id) else {
            log::warn!("place: unknown topping instance {:?}", id);
            return PlaceOutcome::Discarded;
        };
        let topping = instance.topping;
        let previous = match instance.state {
            PlacementState::OnSlice(slice) => Some(slice),
            PlacementState::Off => None,
        };

        if !layout.is_ready() {
            self.discard(id, topping, previous);
            return PlaceOutcome::NotReady;
        }

        let Some(slice) = layout.global_slice_index(pos) else {
            self.discard(id, topping, previous);
            return PlaceOutcome::Discarded;
        };
        let pizza = (slice / layout.slice_count) as u8;

        // One topping type per slice: evict everything else sitting on it
        let mut evicted = Vec::new();
        for other in Topping::ALL {
            if other == topping {
                continue;
            }
            if self.filled[other.index()].remove(&slice) {
                let ids: Vec<ToppingId> = self
                    .instances
                    .values()
                    .filter(|i| i.topping == other && i.state == PlacementState::OnSlice(slice))
                    .map(|i| i.id)
                    .collect();
                for other_id in &ids {
                    self.instances.remove(other_id);
                }
                evicted.extend(ids);
            }
        }

        if let Some(prev) = previous {
            if prev != slice {
                self.release_slice(id, topping, prev);
            }
        }

        self.filled[topping.index()].insert(slice);
        if let Some(instance) = self.instances.get_mut(&id) {
            instance.pos = pos;
            instance.state = PlacementState::OnSlice(slice);
        }

        PlaceOutcome::Placed { pizza, slice, evicted }
    }

    /// Take an instance off the board (remove tool, cancelled drag)
    pub fn remove(&mut self, id: ToppingId) {
        let Some(instance) = self.instances.get(&id) else {
            return;
        };
        let topping = instance.topping;
        let previous = match instance.state {
            PlacementState::OnSlice(slice) => Some(slice),
            PlacementState::Off => None,
        };
        self.discard(id, topping, previous);
    }

    fn discard(&mut self, id: ToppingId, topping: Topping, previous: Option<u32>) {
        if let Some(slice) = previous {
            self.release_slice(id, topping, slice);
        }
        self.instances.remove(&id);
    }

    /// Unfill a slice unless another live same-type instance still sits there
    fn release_slice(&mut self, id: ToppingId, topping: Topping, slice: u32) {
        let shared = self.instances.values().any(|instance| {
            instance.id != id
                && instance.topping == topping
                && instance.state == PlacementState::OnSlice(slice)
        });
        if !shared {
            self.filled[topping.index()].remove(&slice);
        }
    }

    /// Distinct filled slices for a topping (never instance counts)
    pub fn filled_count(&self, topping: Topping) -> u32 {
        self.filled[topping.index()].len() as u32
    }

    pub fn filled_slices(&self, topping: Topping) -> &BTreeSet<u32> {
        &self.filled[topping.index()]
    }

    /// Filled slices summed across every topping
    pub fn total_filled(&self) -> u32 {
        self.filled.iter().map(|set| set.len() as u32).sum()
    }

    pub fn instance(&self, id: ToppingId) -> Option<&ToppingInstance> {
        self.instances.get(&id)
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Drop every instance and filled slice (board reconfigured, order done)
    pub fn clear(&mut self) {
        self.instances.clear();
        for set in &mut self.filled {
            set.clear();
        }
    }

    /// Plain snapshot of on-pizza toppings, decoupled from live state
    pub fn snapshot(&self, layout: &PizzaLayout) -> Vec<PlacedTopping> {
        self.instances
            .values()
            .filter_map(|instance| match instance.state {
                PlacementState::OnSlice(slice) if layout.slice_count > 0 => Some(PlacedTopping {
                    topping: instance.topping,
                    pos: instance.pos,
                    pizza: (slice / layout.slice_count) as u8,
                }),
                _ => None,
            })
            .collect()
    }
}
