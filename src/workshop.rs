//! Placement engine: workbench, cabinet chain, and the outside area.

use tracing::debug;

use crate::cabinet::Cabinet;
use crate::types::{Item, Location, Outcome};

/// Owns every container an item can live in and moves items between them.
#[derive(Debug)]
pub struct Workshop {
    workbench: Cabinet,
    cabinets: Vec<Cabinet>,
    outside: Cabinet,
}

impl Workshop {
    /// Build a workshop with one cabinet per capacity, in order.
    pub fn new(capacities: &[usize]) -> Self {
        let cabinets: Vec<Cabinet> = capacities.iter().map(|&c| Cabinet::bounded(c)).collect();
        debug!(
            "[SETUP] cabinets={} capacities={:?}",
            cabinets.len(),
            cabinets.iter().map(Cabinet::capacity).collect::<Vec<_>>()
        );
        Self {
            workbench: Cabinet::bounded(1),
            cabinets,
            outside: Cabinet::unbounded(),
        }
    }

    /// Put away whatever is on the workbench, then fetch `item` onto it and
    /// report where it was found.
    pub fn process(&mut self, item: Item) -> Outcome {
        if let Some(previous) = self.workbench.remove_oldest() {
            self.stow(previous);
        }
        debug_assert!(self.workbench.is_empty(), "workbench not cleared");

        let outcome = self.take(item);
        let evicted = self.workbench.insert_front(item);
        debug_assert!(evicted.is_none(), "workbench evicted an item");
        debug!("[WORK] item {item} -> {outcome:?}");
        outcome
    }

    /// Remove `item` from wherever it is stored and classify the find.
    fn take(&mut self, item: Item) -> Outcome {
        if let Some(slot) = self.outside.find(item) {
            slot.remove();
            debug!("[FIND] item {item} found outside");
            return Outcome::Outside;
        }
        for (index, cabinet) in self.cabinets.iter_mut().enumerate() {
            if let Some(slot) = cabinet.find(item) {
                slot.remove();
                debug!("[FIND] item {item} found in cabinet {}", index + 1);
                return Outcome::Cabinet(index + 1);
            }
        }
        Outcome::New
    }

    /// Cascade an item down the cabinet chain; whatever falls off the last
    /// cabinet goes outside.
    fn stow(&mut self, item: Item) {
        let mut carried = item;
        for (index, cabinet) in self.cabinets.iter_mut().enumerate() {
            match cabinet.insert_front(carried) {
                None => {
                    debug!("[STOW] item {carried} -> cabinet {}", index + 1);
                    return;
                }
                Some(evicted) => {
                    debug!(
                        "[STOW] item {carried} -> cabinet {} evicting {evicted}",
                        index + 1
                    );
                    carried = evicted;
                }
            }
        }
        let evicted = self.outside.insert_front(carried);
        debug_assert!(evicted.is_none(), "outside evicted an item");
        debug!("[STOW] item {carried} -> outside");
    }

    /// Item currently on the workbench.
    pub fn workbench(&self) -> Option<Item> {
        self.workbench.iter().next()
    }

    pub fn cabinets(&self) -> &[Cabinet] {
        &self.cabinets
    }

    pub fn outside(&self) -> &Cabinet {
        &self.outside
    }

    /// Total items held across workbench, cabinets, and outside.
    pub fn item_count(&self) -> usize {
        self.workbench.len()
            + self.outside.len()
            + self.cabinets.iter().map(Cabinet::len).sum::<usize>()
    }

    /// Where `item` currently sits, if the workshop holds it.
    #[allow(dead_code)]
    pub fn locate(&self, item: Item) -> Option<Location> {
        if self.workbench.contains(item) {
            return Some(Location::Workbench);
        }
        if let Some(index) = self.cabinets.iter().position(|c| c.contains(item)) {
            return Some(Location::Cabinet(index + 1));
        }
        self.outside.contains(item).then_some(Location::Outside)
    }
}
