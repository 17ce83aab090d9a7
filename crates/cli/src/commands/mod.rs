//! Subcommand implementations.

mod catalog;
mod character;
mod inventory;

pub use catalog::CatalogList;
pub use character::{Delete, Export, Import, List, New, Select, Show};
pub use inventory::{AddItem, AddPurse, Move, Pip, Purse, RemoveItem, Rotate};
