use sheet_core::{
    CatalogEntry, CatalogOracle, Cell, DragEnd, DragStart, DropZone, GridDimensions,
    InventoryController, InventoryOutcome, Item, ItemCategory, ItemCollection, ItemFactory,
    ItemKind, ItemsObserver, LayoutMetrics, PipPurse, PixelPoint, Placement, PlacementEngine,
    PlacementError, Rotation, RotationOutcome, SizeCategory, UnchangedReason, UsageTrack,
    Viewport,
};

// ================================================================
// Fixtures
// ================================================================

fn item(size: SizeCategory) -> Item {
    let mut item = ItemFactory::blank(ItemCategory::Item);
    item.size = size;
    item
}

fn at(size: SizeCategory, x: i32, y: i32) -> Item {
    let mut item = item(size);
    item.placement = Placement::Grid {
        cell: Cell::new(x, y),
    };
    item
}

/// Every snapshot the controller committed, oldest first.
#[derive(Default)]
struct History(Vec<ItemCollection>);

impl ItemsObserver for History {
    fn items_changed(&mut self, items: &ItemCollection) {
        self.0.push(items.clone());
    }
}

fn desktop_controller() -> InventoryController<History> {
    InventoryController::new(
        Viewport::stacked(LayoutMetrics::desktop(), GridDimensions::DEFAULT),
        History::default(),
    )
}

/// Catalog with no entries at all.
struct EmptyCatalog;

impl CatalogOracle for EmptyCatalog {
    fn find(&self, _name: &str) -> Option<(ItemCategory, &CatalogEntry)> {
        None
    }

    fn entries(&self, _category: ItemCategory) -> &[CatalogEntry] {
        &[]
    }

    fn pip_purse(&self) -> Option<&CatalogEntry> {
        None
    }
}

// ================================================================
// Overlap against a wide item
// ================================================================

#[test]
fn wide_item_blocks_its_second_cell() {
    let engine = PlacementEngine::new(GridDimensions::DEFAULT);
    let sword = item(SizeCategory::Wide);
    assert!(engine.can_place(&sword, Cell::new(0, 0), &[]));

    let sword = sword.placed_at(Cell::new(0, 0));
    let covered: Vec<Cell> = sword
        .footprint()
        .cells(Cell::new(0, 0))
        .into_iter()
        .collect();
    assert_eq!(covered, vec![Cell::new(0, 0), Cell::new(1, 0)]);

    let torch = item(SizeCategory::Small);
    let items = vec![sword.clone(), torch.clone()];
    assert!(!engine.can_place(&torch, Cell::new(1, 0), &items));
    assert!(engine.can_place(&torch, Cell::new(1, 1), &items));
}

// ================================================================
// Rotation at the right edge
// ================================================================

#[test]
fn rotation_stays_in_place_when_cell_below_is_free() {
    let engine = PlacementEngine::new(GridDimensions::DEFAULT);
    let spear = at(SizeCategory::Wide, 3, 0);

    let outcome = engine.rotate(&spear, &[spear.clone()], None);
    let RotationOutcome::Rotated(rotated) = outcome else {
        panic!("expected in-place rotation, got {outcome:?}");
    };
    assert_eq!(rotated.rotation, Rotation::Deg90);
    assert_eq!(rotated.grid_cell(), Some(Cell::new(3, 0)));
}

#[test]
fn rotation_relocates_to_first_row_major_fit() {
    let engine = PlacementEngine::new(GridDimensions::DEFAULT);
    let spear = at(SizeCategory::Wide, 3, 0);
    let blocker = at(SizeCategory::Small, 3, 1);
    let corner = at(SizeCategory::Small, 0, 0);
    let items = vec![spear.clone(), blocker, corner];

    let outcome = engine.rotate(&spear, &items, None);
    let RotationOutcome::Relocated { item, from, to } = outcome else {
        panic!("expected relocation, got {outcome:?}");
    };
    assert_eq!(from, Cell::new(3, 0));
    assert_eq!(to, Cell::new(1, 0));
    assert_eq!(item.grid_cell(), Some(Cell::new(1, 0)));
    assert_eq!(item.footprint().height, 2);
}

#[test]
fn blocked_rotation_surfaces_as_unchanged() {
    let mut controller = desktop_controller();
    let spear = at(SizeCategory::Wide, 3, 0);
    let mut items = vec![spear.clone()];
    // Fill the bottom row so no 1x2 slot exists anywhere.
    for x in 0..5 {
        items.push(at(SizeCategory::Small, x, 1));
    }
    let items = ItemCollection::from_items(items);

    let outcome = controller.rotate_item(&items, spear.id);
    assert_eq!(
        outcome,
        InventoryOutcome::Unchanged(UnchangedReason::RotationBlocked)
    );
    assert!(controller.observer().0.is_empty());
}

// ================================================================
// Usage pips
// ================================================================

#[test]
fn toggling_a_usage_pip_fills_then_empties() {
    let mut controller = desktop_controller();
    let mut rations = ItemFactory::custom("Rations", None);
    rations.usage = UsageTrack::new(1, 3);
    let id = rations.id;
    let items = ItemCollection::from_items(vec![rations]);

    let items = controller
        .toggle_usage_pip(&items, id, 1)
        .into_items()
        .expect("pip toggle commits");
    assert_eq!(items.get(id).map(|item| item.usage.used()), Some(2));

    let items = controller
        .toggle_usage_pip(&items, id, 1)
        .into_items()
        .expect("pip toggle commits");
    assert_eq!(items.get(id).map(|item| item.usage.used()), Some(1));

    // Observer saw both snapshots, in order.
    let seen: Vec<u8> = controller
        .observer()
        .0
        .iter()
        .filter_map(|snapshot| snapshot.get(id).map(|item| item.usage.used()))
        .collect();
    assert_eq!(seen, vec![2, 1]);
}

// ================================================================
// Pip purse clamping
// ================================================================

#[test]
fn pip_value_is_clamped_to_purse_range() {
    let mut controller = desktop_controller();
    let purse = ItemFactory::pip_purse(&EmptyCatalog, None);
    let id = purse.id;
    let items = ItemCollection::from_items(vec![purse]);

    let balance = |items: &ItemCollection| {
        items
            .get(id)
            .and_then(|item| item.kind.pip_purse())
            .map(PipPurse::value)
    };

    let items = controller
        .set_pip_value(&items, id, 300)
        .into_items()
        .expect("purse update commits");
    assert_eq!(balance(&items), Some(250));

    let items = controller
        .set_pip_value(&items, id, -10)
        .into_items()
        .expect("purse update commits");
    assert_eq!(balance(&items), Some(0));
}

// ================================================================
// Catalog miss
// ================================================================

#[test]
fn unknown_name_becomes_custom_item() {
    let item = ItemFactory::from_name(&EmptyCatalog, "Lucky Acorn", None);
    assert_eq!(item.name, "Lucky Acorn");
    assert_eq!(item.kind, ItemKind::Item);
    assert_eq!(item.size, SizeCategory::Small);
    assert_eq!(item.usage.capacity(), UsageTrack::CUSTOM_CAPACITY);
    assert_eq!(item.usage.used(), 0);
    assert!(!item.is_in_grid());
}

// ================================================================
// Drag and drop end to end
// ================================================================

#[test]
fn illegal_drop_keeps_previous_position() {
    let mut controller = desktop_controller();
    let shield = at(SizeCategory::Large, 0, 0);
    let dagger = at(SizeCategory::Small, 4, 0);
    let items = ItemCollection::from_items(vec![shield.clone(), dagger.clone()]);

    let start = controller.viewport().item_origin(&dagger) + PixelPoint::new(5.0, 5.0);
    controller
        .on_drag_start(
            &items,
            DragStart {
                item: dagger.id,
                pointer: start,
            },
        )
        .expect("dagger exists");

    // Drag the dagger onto cell (1, 0), which the shield covers.
    let outcome = controller.on_drag_end(
        &items,
        DragEnd {
            pointer_origin: start,
            delta: PixelPoint::new(-3.0 * 130.0, 0.0),
            over: Some(DropZone::Grid),
        },
    );
    assert_eq!(
        outcome,
        InventoryOutcome::Unchanged(UnchangedReason::PlacementRejected(
            PlacementError::Overlap {
                cell: Cell::new(1, 0),
                occupant: shield.id,
            }
        ))
    );
    assert!(controller.observer().0.is_empty());
}

#[test]
fn drop_into_scratch_clamps_to_content_box() {
    let mut controller = desktop_controller();
    let dagger = at(SizeCategory::Small, 0, 0);
    let items = ItemCollection::from_items(vec![dagger.clone()]);

    let start = controller.viewport().item_origin(&dagger);
    controller
        .on_drag_start(
            &items,
            DragStart {
                item: dagger.id,
                pointer: start,
            },
        )
        .expect("dagger exists");

    let items = controller
        .on_drag_end(
            &items,
            DragEnd {
                pointer_origin: start,
                delta: PixelPoint::new(10_000.0, 10_000.0),
                over: Some(DropZone::Scratch),
            },
        )
        .into_items()
        .expect("scratch drops always commit");

    let moved = items.get(dagger.id).expect("still present");
    let region = controller.viewport().scratch_region();
    let content = region.content_size();
    assert_eq!(
        moved.scratch_position(),
        Some(PixelPoint::new(content.width - 128.0, content.height - 128.0))
    );
    assert!(region.contains(
        moved.scratch_position().expect("in scratch"),
        moved.footprint()
    ));
}

#[test]
fn adding_items_clamps_far_scratch_positions() {
    let mut controller = desktop_controller();
    let far = ItemFactory::custom("Lantern", Some(PixelPoint::new(-40.0, 9_000.0)));
    let id = far.id;

    let items = controller
        .add_item(&ItemCollection::new(), far)
        .into_items()
        .expect("add commits");
    let position = items
        .get(id)
        .and_then(Item::scratch_position)
        .expect("in scratch");
    assert_eq!(position.x, 0.0);
    assert_eq!(position.y, 256.0 - 128.0);
}
