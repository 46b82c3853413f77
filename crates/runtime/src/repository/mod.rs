//! Persistence for runs between sessions.
//!
//! Saves use a flat `KEY value` text format (see [`format`]). The file
//! repository writes through a temp file and an atomic rename; the in-memory
//! repository keeps the encoded text so tests exercise the same codec.

mod error;
pub mod format;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSaveRepository;
pub use format::SaveData;
pub use memory::InMemorySaveRepository;
pub use traits::SaveRepository;
