use serde::{Deserialize, Serialize};

use kitbag_core::{Aggregate, DomainError, DomainResult};

use crate::item::{Category, Item, ItemName, Quantity};

/// Number of slots in a backpack.
pub const CAPACITY: usize = 10;

/// Aggregate: a fixed set of slots, each empty or holding one item.
///
/// Slots are filled lowest-index first. Removing an item empties its slot in
/// place; nothing is compacted, so indices stay stable for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backpack {
    slots: [Option<Item>; CAPACITY],
    version: u64,
}

impl Default for Backpack {
    fn default() -> Self {
        Self::new()
    }
}

impl Backpack {
    /// A backpack with every slot empty.
    pub fn new() -> Self {
        Self {
            slots: [const { None }; CAPACITY],
            version: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        CAPACITY
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn is_full(&self) -> bool {
        self.first_empty_slot().is_none()
    }

    pub fn get(&self, slot: usize) -> Option<&Item> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Index of the first empty slot, scanning from 0.
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Occupied slots in index order.
    pub fn active_items(&self) -> impl Iterator<Item = (usize, &Item)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, item)| item.as_ref().map(|item| (slot, item)))
    }

    /// Lowest-index occupied slot whose name matches, ignoring ASCII case.
    pub fn find_by_name(&self, name: &str) -> Option<(usize, &Item)> {
        self.active_items()
            .find(|(_, item)| item.name().eq_ignore_case(name))
    }

    /// Store an item in the first empty slot and return that slot.
    pub fn add_item(&mut self, cmd: AddItem) -> DomainResult<usize> {
        let event = self.decide_add(&cmd)?;
        let slot = event.slot;
        self.apply(&BackpackEvent::ItemAdded(event));
        Ok(slot)
    }

    /// Empty the first slot whose item name matches and return what was removed.
    pub fn remove_item_by_name(&mut self, name: &str) -> DomainResult<ItemRemoved> {
        let event = self.decide_remove(&RemoveItem::new(name))?;
        self.apply(&BackpackEvent::ItemRemoved(event.clone()));
        Ok(event)
    }

    fn decide_add(&self, cmd: &AddItem) -> DomainResult<ItemAdded> {
        let slot = self
            .first_empty_slot()
            .ok_or_else(|| DomainError::capacity_exceeded(CAPACITY))?;
        Ok(ItemAdded {
            slot,
            item: Item::new(cmd.name.clone(), cmd.category.clone(), cmd.quantity),
        })
    }

    fn decide_remove(&self, cmd: &RemoveItem) -> DomainResult<ItemRemoved> {
        let (slot, item) = self
            .find_by_name(&cmd.name)
            .ok_or_else(|| DomainError::not_found(cmd.name.clone()))?;
        Ok(ItemRemoved {
            slot,
            item: item.clone(),
        })
    }
}

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItem {
    pub name: ItemName,
    pub category: Category,
    pub quantity: Quantity,
}

impl AddItem {
    pub fn new(
        name: impl Into<ItemName>,
        category: impl Into<Category>,
        quantity: impl Into<Quantity>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
        }
    }

    /// Build from raw console fields. Fails only when `quantity` is not an integer.
    pub fn parse(name: &str, category: &str, quantity: &str) -> DomainResult<Self> {
        let quantity: Quantity = quantity.parse()?;
        Ok(Self::new(name, category, quantity))
    }
}

/// Command: RemoveItem (by name, case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveItem {
    pub name: String,
}

impl RemoveItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackpackCommand {
    AddItem(AddItem),
    RemoveItem(RemoveItem),
}

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub slot: usize,
    pub item: Item,
}

/// Event: ItemRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRemoved {
    pub slot: usize,
    pub item: Item,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackpackEvent {
    ItemAdded(ItemAdded),
    ItemRemoved(ItemRemoved),
}

impl BackpackEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            BackpackEvent::ItemAdded(_) => "backpack.item.added",
            BackpackEvent::ItemRemoved(_) => "backpack.item.removed",
        }
    }

    pub fn slot(&self) -> usize {
        match self {
            BackpackEvent::ItemAdded(e) => e.slot,
            BackpackEvent::ItemRemoved(e) => e.slot,
        }
    }
}

impl Aggregate for Backpack {
    type Command = BackpackCommand;
    type Event = BackpackEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            BackpackEvent::ItemAdded(e) => {
                if let Some(slot) = self.slots.get_mut(e.slot) {
                    *slot = Some(e.item.clone());
                }
            }
            BackpackEvent::ItemRemoved(e) => {
                if let Some(slot) = self.slots.get_mut(e.slot) {
                    *slot = None;
                }
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            BackpackCommand::AddItem(cmd) => {
                Ok(vec![BackpackEvent::ItemAdded(self.decide_add(cmd)?)])
            }
            BackpackCommand::RemoveItem(cmd) => {
                Ok(vec![BackpackEvent::ItemRemoved(self.decide_remove(cmd)?)])
            }
        }
    }
}
