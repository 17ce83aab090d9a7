//! Repository layer for character persistence.
//!
//! Stores hold the saved character list; [`CharacterRoster`] is the working
//! copy the application mutates between explicit loads and saves.
//!
//! Static content (the item catalog, layout parameters) lives in
//! `sheet-content`, not here.

mod error;
mod file;
mod memory;
mod roster;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileCharacterStore;
pub use memory::InMemoryCharacterStore;
pub use roster::CharacterRoster;
pub use traits::CharacterStore;
