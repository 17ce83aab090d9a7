use crate::geometry::{Cell, Footprint, GridDimensions};
use crate::item::{Item, ItemId};

/// Dense cell → occupant table for one grid snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyMap {
    dims: GridDimensions,
    cells: Vec<Option<ItemId>>,
}

impl OccupancyMap {
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            dims,
            cells: vec![None; dims.cell_count()],
        }
    }

    /// Marks every in-grid item except `exclude`. Items whose footprint does
    /// not fit inside the grid are skipped; the first item to claim a cell
    /// keeps it.
    pub fn build<'a, I>(dims: GridDimensions, items: I, exclude: Option<ItemId>) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut map = Self::new(dims);
        for item in items {
            if Some(item.id) == exclude {
                continue;
            }
            let Some(origin) = item.grid_cell() else {
                continue;
            };
            let footprint = item.footprint();
            if dims.fits(origin, footprint) {
                map.mark(item.id, origin, footprint);
            }
        }
        map
    }

    pub fn dims(&self) -> GridDimensions {
        self.dims
    }

    pub fn occupant(&self, cell: Cell) -> Option<ItemId> {
        self.dims.index_of(cell).and_then(|index| self.cells[index])
    }

    pub fn is_free(&self, cell: Cell) -> bool {
        self.occupant(cell).is_none()
    }

    /// Claims the footprint's cells for `id`, returning the first cell that
    /// already belonged to someone else.
    pub fn mark(&mut self, id: ItemId, origin: Cell, footprint: Footprint) -> Option<(Cell, ItemId)> {
        let mut conflict = None;
        for cell in footprint.cells(origin) {
            let Some(index) = self.dims.index_of(cell) else {
                continue;
            };
            match self.cells[index] {
                Some(occupant) if occupant != id => {
                    conflict.get_or_insert((cell, occupant));
                }
                _ => self.cells[index] = Some(id),
            }
        }
        conflict
    }

    /// First occupied cell under `footprint` anchored at `origin`.
    pub fn first_conflict(&self, origin: Cell, footprint: Footprint) -> Option<(Cell, ItemId)> {
        footprint
            .cells(origin)
            .into_iter()
            .find_map(|cell| self.occupant(cell).map(|occupant| (cell, occupant)))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }
}
