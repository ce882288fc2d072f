//! Key-value storage handlers

mod filesystem;
mod memory;

pub use filesystem::FilesystemStorageHandler;
pub use memory::MemoryStorageHandler;
