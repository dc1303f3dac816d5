//! Key-value storage adapters

mod file_kv;
mod memory_kv;

pub use file_kv::FileKeyValueStorage;
pub use memory_kv::InMemoryKeyValueStorage;
