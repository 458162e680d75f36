//! Store implementations
//!
//! Both back the [`shared::Store`] contract: whole-collection load/save per
//! entity kind, nothing finer.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
