//! Exhaustive checks of the committed-state invariants on small grids.

use sheet_core::{
    Cell, DragEnd, DragStart, DropZone, GridDimensions, InventoryController, Item, ItemCategory,
    ItemCollection, ItemFactory, LayoutMetrics, PixelPoint, Placement, PlacementEngine, Rotation,
    RotationOutcome, SizeCategory, UsageTrack, Viewport,
};
use strum::IntoEnumIterator;

fn item(size: SizeCategory, rotation: Rotation) -> Item {
    let mut item = ItemFactory::blank(ItemCategory::Item);
    item.size = size;
    item.rotation = rotation;
    item
}

fn variants() -> Vec<(SizeCategory, Rotation)> {
    SizeCategory::iter()
        .flat_map(|size| [(size, Rotation::Deg0), (size, Rotation::Deg90)])
        .collect()
}

fn assert_grid_invariants(engine: &PlacementEngine, items: &[Item]) {
    let violations = engine.audit(items);
    assert!(violations.is_empty(), "committed state broke: {violations:?}");
}

#[test]
fn greedy_packing_never_commits_an_overlap() {
    for dims in [
        GridDimensions::new(3, 2),
        GridDimensions::DEFAULT,
        GridDimensions::new(2, 3),
    ] {
        let engine = PlacementEngine::new(dims);
        for first in variants() {
            let mut committed: Vec<Item> = Vec::new();
            // Seed with one variant, then try every variant at every cell.
            let order = std::iter::once(first).chain(variants());
            for (size, rotation) in order {
                let candidate = item(size, rotation);
                for cell in dims.row_major() {
                    if engine.can_place(&candidate, cell, &committed) {
                        committed.push(candidate.placed_at(cell));
                        break;
                    }
                }
                assert_grid_invariants(&engine, &committed);
            }
        }
    }
}

#[test]
fn can_place_agrees_with_brute_force_cell_sets() {
    let dims = GridDimensions::new(4, 3);
    let engine = PlacementEngine::new(dims);
    let anchor = item(SizeCategory::Large, Rotation::Deg0).placed_at(Cell::new(1, 1));
    let occupied: Vec<Cell> = anchor.footprint().cells(Cell::new(1, 1)).to_vec();

    for (size, rotation) in variants() {
        let candidate = item(size, rotation);
        for y in -1..=dims.height as i32 {
            for x in -1..=dims.width as i32 {
                let cell = Cell::new(x, y);
                let cells = candidate.footprint().cells(cell);
                let in_bounds = cells.iter().all(|&c| dims.contains(c));
                let disjoint = cells.iter().all(|c| !occupied.contains(c));
                assert_eq!(
                    engine.can_place(&candidate, cell, &[anchor.clone()]),
                    in_bounds && disjoint,
                    "{size} at {cell} rotated {}",
                    rotation.degrees()
                );
            }
        }
    }
}

#[test]
fn rotating_twice_restores_rotation_and_stays_valid() {
    let dims = GridDimensions::DEFAULT;
    let engine = PlacementEngine::new(dims);
    let blockers = [
        item(SizeCategory::Small, Rotation::Deg0).placed_at(Cell::new(3, 1)),
        item(SizeCategory::Small, Rotation::Deg0).placed_at(Cell::new(0, 0)),
    ];

    for size in SizeCategory::iter() {
        for cell in dims.row_major() {
            let subject = item(size, Rotation::Deg0);
            let mut items = blockers.to_vec();
            if !engine.can_place(&subject, cell, &items) {
                continue;
            }
            let subject = subject.placed_at(cell);
            items.push(subject.clone());

            let once = match engine.rotate(&subject, &items, None) {
                RotationOutcome::Rejected => continue,
                outcome => outcome.into_item().expect("rotated"),
            };
            let items: Vec<Item> = items
                .into_iter()
                .map(|item| if item.id == once.id { once.clone() } else { item })
                .collect();
            assert_grid_invariants(&engine, &items);

            match engine.rotate(&once, &items, None) {
                RotationOutcome::Rejected => {}
                outcome => {
                    let twice = outcome.into_item().expect("rotated");
                    assert_eq!(twice.rotation, subject.rotation);
                    let items: Vec<Item> = items
                        .into_iter()
                        .map(|item| if item.id == twice.id { twice.clone() } else { item })
                        .collect();
                    assert_grid_invariants(&engine, &items);
                }
            }
        }
    }
}

#[test]
fn drag_sweep_preserves_every_invariant() {
    for metrics in [LayoutMetrics::desktop(), LayoutMetrics::mobile()] {
        let viewport = Viewport::stacked(metrics, GridDimensions::DEFAULT);
        let mut controller = InventoryController::new(viewport, sheet_core::Detached);
        let scratch = viewport.scratch_region();

        let mut items = ItemCollection::from_items(
            SizeCategory::iter()
                .enumerate()
                .map(|(index, size)| {
                    let mut item = item(size, Rotation::Deg0);
                    item.placement = Placement::Scratch {
                        position: scratch.clamp(Placement::staggered(index), item.footprint()),
                    };
                    item
                })
                .collect(),
        );

        let step = metrics.cell_size / 2.0;
        let sweep: Vec<PixelPoint> = (-2..16)
            .flat_map(|i| {
                (-2..12).map(move |j| PixelPoint::new(i as f64 * step, j as f64 * step))
            })
            .collect();

        for (n, target) in sweep.iter().enumerate() {
            let ids: Vec<_> = items.iter().map(|item| item.id).collect();
            let id = ids[n % ids.len()];
            let origin = controller
                .viewport()
                .item_origin(items.get(id).expect("present"));
            let start = DragStart {
                item: id,
                pointer: origin,
            };
            controller.on_drag_start(&items, start).expect("known item");

            let end = DragEnd {
                pointer_origin: origin,
                delta: *target - origin,
                over: viewport.hit_test(*target),
            };
            if let Some(next) = controller.on_drag_end(&items, end).into_items() {
                items = next;
            }
            if n % 7 == 0 {
                if let Some(next) = controller.rotate_item(&items, id).into_items() {
                    items = next;
                }
            }

            assert_grid_invariants(controller.engine(), items.as_slice());
            for item in items.in_scratch() {
                let position = item.scratch_position().expect("scratch item");
                assert!(
                    scratch.contains(position, item.footprint()),
                    "{} escaped the scratch area at {position:?}",
                    item.name
                );
            }
        }
    }
}

#[test]
fn pip_toggle_stays_within_capacity() {
    for capacity in 0..=6u8 {
        for used in 0..=capacity {
            for pip in 0..=capacity + 1 {
                let mut usage = UsageTrack::new(used, capacity);
                usage.toggle(pip);
                let expected = (if pip < used { pip } else { pip + 1 }).min(capacity);
                assert_eq!(usage.used(), expected);
                assert!(usage.used() <= capacity);
            }
        }
    }
}

#[test]
fn drop_zone_strings_round_trip() {
    assert_eq!("grid".parse::<DropZone>(), Ok(DropZone::Grid));
    assert_eq!(DropZone::Scratch.to_string(), "scratch");
}
