//! Inventory interaction orchestration.
//!
//! [`InventoryController`] is what a UI calls into. It keeps only transient
//! drag and selection bookkeeping; the item collection is passed in on every
//! call and, when an operation commits, the complete new snapshot is handed
//! to the [`ItemsObserver`] and returned as [`InventoryOutcome::Changed`].
//! Rejected operations leave the snapshot alone and report why.

mod events;
mod outcome;

pub use events::{DragEnd, DragSession, DragStart, InteractionMode};
pub use outcome::{InventoryOutcome, UnchangedReason};

use crate::collection::ItemCollection;
use crate::error::SheetError;
use crate::geometry::Cell;
use crate::item::{Item, ItemId, Placement};
use crate::layout::PixelPoint;
use crate::placement::{PlacementEngine, RotationOutcome};
use crate::translate::{DropTarget, GrabOffset, RegionTransform, Viewport};

/// Receives every committed item collection.
pub trait ItemsObserver {
    fn items_changed(&mut self, items: &ItemCollection);
}

impl<F> ItemsObserver for F
where
    F: FnMut(&ItemCollection),
{
    fn items_changed(&mut self, items: &ItemCollection) {
        self(items)
    }
}

/// Observer for callers that only use the returned outcomes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Detached;

impl ItemsObserver for Detached {
    fn items_changed(&mut self, _items: &ItemCollection) {}
}

pub struct InventoryController<O = Detached> {
    engine: PlacementEngine,
    viewport: Viewport,
    mode: InteractionMode,
    drag: Option<DragSession>,
    selection: Option<ItemId>,
    observer: O,
}

impl<O: ItemsObserver> InventoryController<O> {
    pub fn new(viewport: Viewport, observer: O) -> Self {
        Self {
            engine: PlacementEngine::new(viewport.dims),
            viewport,
            mode: InteractionMode::for_profile(viewport.metrics.profile),
            drag: None,
            selection: None,
            observer,
        }
    }

    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InteractionMode) {
        self.mode = mode;
        self.drag = None;
        self.selection = None;
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn selection(&self) -> Option<ItemId> {
        self.selection
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    // ------------------------------------------------------------------
    // Drag mode
    // ------------------------------------------------------------------

    /// Records where on the item the pointer went down.
    pub fn on_drag_start(
        &mut self,
        items: &ItemCollection,
        event: DragStart,
    ) -> Result<GrabOffset, UnchangedReason> {
        let Some(item) = items.get(event.item) else {
            return Err(UnchangedReason::UnknownItem);
        };
        let grab = self.viewport.grab_offset(item, event.pointer);
        self.drag = Some(DragSession {
            item: event.item,
            grab,
        });
        Ok(grab)
    }

    /// Finishes the current drag. Drops over no zone, or onto an illegal
    /// grid position, leave the item where it was.
    pub fn on_drag_end(&mut self, items: &ItemCollection, event: DragEnd) -> InventoryOutcome {
        let Some(session) = self.drag.take() else {
            return self.reject("drag_end", None, UnchangedReason::NoDragSession);
        };
        let Some(item) = items.get(session.item) else {
            return self.reject("drag_end", Some(session.item), UnchangedReason::UnknownItem);
        };
        let Some(zone) = event.over else {
            return self.reject("drag_end", Some(item.id), UnchangedReason::NoDropZone);
        };

        let target = self
            .viewport
            .resolve_drop(item, zone, event.pointer(), session.grab);
        self.move_to(items, item, target, "drag_end")
    }

    // ------------------------------------------------------------------
    // Tap mode
    // ------------------------------------------------------------------

    /// Selects `id`, or clears the selection when `id` is already selected.
    pub fn select_item(
        &mut self,
        items: &ItemCollection,
        id: ItemId,
    ) -> Result<Option<ItemId>, UnchangedReason> {
        if !items.contains(id) {
            return Err(UnchangedReason::UnknownItem);
        }
        self.selection = if self.selection == Some(id) {
            None
        } else {
            Some(id)
        };
        Ok(self.selection)
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Places the selected item at `cell`. A rejected tap keeps the selection
    /// so another cell can be tried.
    pub fn tap_cell(&mut self, items: &ItemCollection, cell: Cell) -> InventoryOutcome {
        let Some(item) = self.selected_item(items) else {
            return self.missing_selection(items);
        };
        let outcome = self.move_to(items, item, DropTarget::Grid(cell), "tap_cell");
        if outcome.is_changed() {
            self.selection = None;
        }
        outcome
    }

    /// Moves the selected item so its top-left corner lands on `point`
    /// (screen coordinates), clamped into the scratch area.
    pub fn tap_scratch(&mut self, items: &ItemCollection, point: PixelPoint) -> InventoryOutcome {
        let Some(item) = self.selected_item(items) else {
            return self.missing_selection(items);
        };
        let position = self
            .viewport
            .scratch_region()
            .pixel_to_logical(point, item.footprint());
        let outcome = self.move_to(items, item, DropTarget::Scratch(position), "tap_scratch");
        if outcome.is_changed() {
            self.selection = None;
        }
        outcome
    }

    // ------------------------------------------------------------------
    // Item edits
    // ------------------------------------------------------------------

    pub fn rotate_item(&mut self, items: &ItemCollection, id: ItemId) -> InventoryOutcome {
        let Some(item) = items.get(id) else {
            return self.reject("rotate", Some(id), UnchangedReason::UnknownItem);
        };
        let scratch = self.viewport.scratch_region();

        match self.engine.rotate(item, items.as_slice(), Some(&scratch)) {
            RotationOutcome::Rejected => {
                self.reject("rotate", Some(id), UnchangedReason::RotationBlocked)
            }
            RotationOutcome::Relocated { item, from, to } => {
                tracing::debug!(item = %id, %from, %to, "rotation relocated item");
                self.replace(items, item)
            }
            RotationOutcome::Rotated(item) => self.replace(items, item),
        }
    }

    pub fn delete_item(&mut self, items: &ItemCollection, id: ItemId) -> InventoryOutcome {
        let Some(next) = items.with_removed(id) else {
            return self.reject("delete", Some(id), UnchangedReason::UnknownItem);
        };
        if self.selection == Some(id) {
            self.selection = None;
        }
        if self.drag.is_some_and(|session| session.item == id) {
            self.drag = None;
        }
        self.commit(next)
    }

    /// Fills through an empty pip or empties down to a filled one.
    pub fn toggle_usage_pip(
        &mut self,
        items: &ItemCollection,
        id: ItemId,
        pip_index: u8,
    ) -> InventoryOutcome {
        let Some(item) = items.get(id) else {
            return self.reject("toggle_pip", Some(id), UnchangedReason::UnknownItem);
        };
        if item.usage.capacity() == 0 {
            return self.reject("toggle_pip", Some(id), UnchangedReason::NotApplicable);
        }
        match items.with_updated(id, |item| item.usage.toggle(pip_index)) {
            Some(next) => self.commit(next),
            None => self.reject("toggle_pip", Some(id), UnchangedReason::UnknownItem),
        }
    }

    /// Sets a purse balance, clamped into `[0, max]`.
    pub fn set_pip_value(
        &mut self,
        items: &ItemCollection,
        id: ItemId,
        value: i64,
    ) -> InventoryOutcome {
        let Some(item) = items.get(id) else {
            return self.reject("set_pips", Some(id), UnchangedReason::UnknownItem);
        };
        if item.kind.pip_purse().is_none() {
            return self.reject("set_pips", Some(id), UnchangedReason::NotApplicable);
        }
        let next = items.with_updated(id, |item| {
            if let Some(purse) = item.kind.pip_purse_mut() {
                purse.set_value(value);
            }
        });
        match next {
            Some(next) => self.commit(next),
            None => self.reject("set_pips", Some(id), UnchangedReason::UnknownItem),
        }
    }

    /// Appends a new item. Scratch positions are clamped into the visible
    /// area; grid placements must be legal.
    pub fn add_item(&mut self, items: &ItemCollection, item: Item) -> InventoryOutcome {
        let item = match item.placement {
            Placement::Scratch { position } => {
                let position = self
                    .viewport
                    .scratch_region()
                    .clamp(position, item.footprint());
                item.moved_to_scratch(position)
            }
            Placement::Grid { cell } => {
                if let Err(err) = self.engine.check_placement(&item, cell, items.as_slice()) {
                    let reason = UnchangedReason::PlacementRejected(err);
                    return self.reject("add", Some(item.id), reason);
                }
                item
            }
        };
        self.commit(items.with_appended(item))
    }

    /// Switches to a new viewport (resize or profile change) and pulls every
    /// scratch item back inside the scratch area.
    pub fn set_viewport(&mut self, items: &ItemCollection, viewport: Viewport) -> InventoryOutcome {
        if viewport.metrics.profile != self.viewport.metrics.profile {
            self.mode = InteractionMode::for_profile(viewport.metrics.profile);
            self.drag = None;
        }
        self.viewport = viewport;
        self.engine = PlacementEngine::new(viewport.dims);

        let scratch = viewport.scratch_region();
        let mut moved = 0usize;
        let clamped: Vec<Item> = items
            .iter()
            .map(|item| match item.placement {
                Placement::Scratch { position } => {
                    let clamped = scratch.clamp(position, item.footprint());
                    if clamped == position {
                        item.clone()
                    } else {
                        moved += 1;
                        item.moved_to_scratch(clamped)
                    }
                }
                Placement::Grid { .. } => item.clone(),
            })
            .collect();

        if moved == 0 {
            return InventoryOutcome::Unchanged(UnchangedReason::NothingToDo);
        }
        tracing::debug!(moved, profile = %viewport.metrics.profile, "re-clamped scratch items");
        self.commit(ItemCollection::from_items(clamped))
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn selected_item<'a>(&self, items: &'a ItemCollection) -> Option<&'a Item> {
        self.selection.and_then(|id| items.get(id))
    }

    fn missing_selection(&mut self, items: &ItemCollection) -> InventoryOutcome {
        match self.selection.take() {
            Some(id) if !items.contains(id) => {
                self.reject("tap", Some(id), UnchangedReason::UnknownItem)
            }
            _ => self.reject("tap", None, UnchangedReason::NoSelection),
        }
    }

    fn move_to(
        &mut self,
        items: &ItemCollection,
        item: &Item,
        target: DropTarget,
        op: &'static str,
    ) -> InventoryOutcome {
        match target {
            DropTarget::Grid(cell) => {
                if let Err(err) = self.engine.check_placement(item, cell, items.as_slice()) {
                    let reason = UnchangedReason::PlacementRejected(err);
                    return self.reject(op, Some(item.id), reason);
                }
                self.replace(items, item.placed_at(cell))
            }
            DropTarget::Scratch(position) => self.replace(items, item.moved_to_scratch(position)),
        }
    }

    fn replace(&mut self, items: &ItemCollection, item: Item) -> InventoryOutcome {
        let id = item.id;
        match items.with_replaced(item) {
            Some(next) => self.commit(next),
            None => self.reject("replace", Some(id), UnchangedReason::UnknownItem),
        }
    }

    fn commit(&mut self, items: ItemCollection) -> InventoryOutcome {
        self.observer.items_changed(&items);
        InventoryOutcome::Changed(items)
    }

    fn reject(
        &self,
        op: &'static str,
        item: Option<ItemId>,
        reason: UnchangedReason,
    ) -> InventoryOutcome {
        let code = reason.error_code();
        let severity = reason.severity().as_str();
        match item {
            Some(item) => {
                tracing::debug!(op, %item, code, severity, %reason, "inventory operation rejected")
            }
            None => tracing::debug!(op, code, severity, %reason, "inventory operation rejected"),
        }
        InventoryOutcome::Unchanged(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::ItemFactory;
    use crate::geometry::{GridDimensions, SizeCategory};
    use crate::item::ItemCategory;
    use crate::layout::LayoutMetrics;
    use crate::translate::DropZone;

    /// Records the length of every committed snapshot.
    #[derive(Default)]
    struct Lengths(Vec<usize>);

    impl ItemsObserver for Lengths {
        fn items_changed(&mut self, items: &ItemCollection) {
            self.0.push(items.len());
        }
    }

    fn controller() -> InventoryController<Lengths> {
        InventoryController::new(
            Viewport::stacked(LayoutMetrics::desktop(), GridDimensions::DEFAULT),
            Lengths::default(),
        )
    }

    #[test]
    fn observer_only_sees_commits() {
        let mut controller = controller();
        let torch = ItemFactory::custom("Torch", None);
        let id = torch.id;
        let items = controller
            .add_item(&ItemCollection::new(), torch)
            .into_items()
            .unwrap();

        let outcome = controller.rotate_item(&items, ItemId::new());
        assert_eq!(
            outcome,
            InventoryOutcome::Unchanged(UnchangedReason::UnknownItem)
        );

        controller.delete_item(&items, id);
        assert_eq!(controller.observer().0, vec![1, 0]);
    }

    #[test]
    fn drag_without_zone_is_a_no_op() {
        let mut controller = controller();
        let torch = ItemFactory::custom("Torch", None);
        let items = ItemCollection::from_items(vec![torch.clone()]);

        let start = DragStart {
            item: torch.id,
            pointer: PixelPoint::ZERO,
        };
        controller.on_drag_start(&items, start).unwrap();
        let outcome = controller.on_drag_end(
            &items,
            DragEnd {
                pointer_origin: PixelPoint::ZERO,
                delta: PixelPoint::new(5000.0, 5000.0),
                over: None,
            },
        );
        assert_eq!(outcome.reason(), Some(&UnchangedReason::NoDropZone));
        assert!(controller.drag_session().is_none());
    }

    #[test]
    fn drag_from_scratch_into_grid() {
        let mut controller = controller();
        let mut sword = ItemFactory::custom("Sword", None);
        sword.size = SizeCategory::Wide;
        let items = ItemCollection::from_items(vec![sword.clone()]);

        let start = controller.viewport().item_origin(&sword) + PixelPoint::new(10.0, 10.0);
        let event = DragStart {
            item: sword.id,
            pointer: start,
        };
        controller.on_drag_start(&items, event).unwrap();

        // Grid cell (1, 1) starts at (16 + 130, 16 + 130).
        let release = PixelPoint::new(146.0 + 10.0, 146.0 + 10.0);
        let items = controller
            .on_drag_end(
                &items,
                DragEnd {
                    pointer_origin: start,
                    delta: release - start,
                    over: Some(DropZone::Grid),
                },
            )
            .into_items()
            .unwrap();
        assert_eq!(
            items.get(sword.id).unwrap().grid_cell(),
            Some(Cell::new(1, 1))
        );
    }

    #[test]
    fn tap_flow_places_selected_item() {
        let mut controller = controller();
        controller.set_mode(InteractionMode::Tap);
        let torch = ItemFactory::custom("Torch", None);
        let items = ItemCollection::from_items(vec![torch.clone()]);

        assert_eq!(
            controller.tap_cell(&items, Cell::new(0, 0)).reason(),
            Some(&UnchangedReason::NoSelection)
        );
        assert_eq!(controller.select_item(&items, torch.id), Ok(Some(torch.id)));
        let items = controller
            .tap_cell(&items, Cell::new(4, 1))
            .into_items()
            .unwrap();
        assert_eq!(
            items.get(torch.id).unwrap().grid_cell(),
            Some(Cell::new(4, 1))
        );
        assert_eq!(controller.selection(), None);
    }

    #[test]
    fn usage_toggle_needs_a_track() {
        let mut controller = controller();
        let spell = ItemFactory::blank(ItemCategory::Spell);
        let items = ItemCollection::from_items(vec![spell.clone()]);
        assert_eq!(
            controller.toggle_usage_pip(&items, spell.id, 0).reason(),
            Some(&UnchangedReason::NotApplicable)
        );
        assert_eq!(
            controller.set_pip_value(&items, spell.id, 10).reason(),
            Some(&UnchangedReason::NotApplicable)
        );
    }

    #[test]
    fn shrinking_viewport_reclamps_scratch_items() {
        let mut controller = controller();
        let mut lantern = ItemFactory::custom("Lantern", Some(PixelPoint::new(500.0, 100.0)));
        lantern.size = SizeCategory::Small;
        let items = ItemCollection::from_items(vec![lantern.clone()]);

        let mobile = Viewport::stacked(LayoutMetrics::mobile(), GridDimensions::DEFAULT);
        let items = controller.set_viewport(&items, mobile).into_items().unwrap();
        let region = mobile.scratch_region();
        let position = items.get(lantern.id).unwrap().scratch_position().unwrap();
        assert!(region.contains(position, lantern.footprint()));
        assert_eq!(controller.mode(), InteractionMode::Tap);

        assert_eq!(
            controller.set_viewport(&items, mobile).reason(),
            Some(&UnchangedReason::NothingToDo)
        );
    }
}
