//! Ordered, id-indexed item collection with copy-on-write updates.
//!
//! Every mutating operation returns a new snapshot and leaves `self`
//! untouched, so observers always see a fully formed collection.

use std::collections::HashMap;

use crate::item::{Item, ItemId};

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<Item>", into = "Vec<Item>")
)]
pub struct ItemCollection {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl ItemCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection, keeping the first occurrence of any repeated id.
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut collection = Self {
            items: Vec::with_capacity(items.len()),
            index: HashMap::with_capacity(items.len()),
        };
        for item in items {
            if collection.index.contains_key(&item.id) {
                tracing::warn!(item = %item.id, "dropping item with duplicate id");
                continue;
            }
            collection.index.insert(item.id, collection.items.len());
            collection.items.push(item);
        }
        collection
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&slot| &self.items[slot])
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn in_grid(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.is_in_grid())
    }

    pub fn in_scratch(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| !item.is_in_grid())
    }

    /// Snapshot with `item` appended. An item whose id is already present
    /// replaces the existing entry in place.
    pub fn with_appended(&self, item: Item) -> Self {
        let mut next = self.clone();
        match next.index.get(&item.id) {
            Some(&slot) => next.items[slot] = item,
            None => {
                next.index.insert(item.id, next.items.len());
                next.items.push(item);
            }
        }
        next
    }

    /// Snapshot with the entry sharing `item.id` replaced, or `None` when
    /// the id is unknown.
    pub fn with_replaced(&self, item: Item) -> Option<Self> {
        let slot = *self.index.get(&item.id)?;
        let mut next = self.clone();
        next.items[slot] = item;
        Some(next)
    }

    /// Snapshot with `f` applied to item `id`. The id itself cannot change.
    pub fn with_updated<F>(&self, id: ItemId, f: F) -> Option<Self>
    where
        F: FnOnce(&mut Item),
    {
        let slot = *self.index.get(&id)?;
        let mut next = self.clone();
        let item = &mut next.items[slot];
        f(item);
        item.id = id;
        Some(next)
    }

    /// Snapshot without item `id`, or `None` when the id is unknown.
    pub fn with_removed(&self, id: ItemId) -> Option<Self> {
        let slot = *self.index.get(&id)?;
        let mut items = self.items.clone();
        items.remove(slot);
        Some(Self::from_items(items))
    }

    pub fn into_vec(self) -> Vec<Item> {
        self.items
    }
}

impl PartialEq for ItemCollection {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl From<Vec<Item>> for ItemCollection {
    fn from(items: Vec<Item>) -> Self {
        Self::from_items(items)
    }
}

impl From<ItemCollection> for Vec<Item> {
    fn from(collection: ItemCollection) -> Self {
        collection.items
    }
}

impl FromIterator<Item> for ItemCollection {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::from_items(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ItemCollection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::ItemFactory;

    fn three() -> (ItemCollection, [ItemId; 3]) {
        let items = vec![
            ItemFactory::custom("Torch", None),
            ItemFactory::custom("Rope", None),
            ItemFactory::custom("Rations", None),
        ];
        let ids = [items[0].id, items[1].id, items[2].id];
        (ItemCollection::from_items(items), ids)
    }

    #[test]
    fn updates_leave_original_snapshot_untouched() {
        let (items, [torch, ..]) = three();
        let next = items
            .with_updated(torch, |item| item.name = "Lantern".into())
            .unwrap();
        assert_eq!(items.get(torch).unwrap().name, "Torch");
        assert_eq!(next.get(torch).unwrap().name, "Lantern");
    }

    #[test]
    fn removal_reindexes_remaining_items() {
        let (items, [torch, rope, rations]) = three();
        let next = items.with_removed(rope).unwrap();
        assert_eq!(next.len(), 2);
        assert!(next.get(rope).is_none());
        assert_eq!(next.get(rations).unwrap().name, "Rations");
        assert_eq!(next.as_slice()[0].id, torch);
    }

    #[test]
    fn unknown_ids_yield_none() {
        let (items, _) = three();
        let stranger = ItemId::new();
        assert!(items.with_removed(stranger).is_none());
        assert!(items.with_updated(stranger, |_| {}).is_none());
    }

    #[test]
    fn update_cannot_rewrite_identity() {
        let (items, [torch, ..]) = three();
        let next = items
            .with_updated(torch, |item| item.id = ItemId::new())
            .unwrap();
        assert!(next.get(torch).is_some());
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let torch = ItemFactory::custom("Torch", None);
        let mut copy = torch.clone();
        copy.name = "Copy".into();
        let items = ItemCollection::from_items(vec![torch.clone(), copy]);
        assert_eq!(items.len(), 1);
        assert_eq!(items.get(torch.id).unwrap().name, "Torch");
    }
}
