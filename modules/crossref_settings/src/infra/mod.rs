//! Infrastructure layer - settings store implementations

pub mod memory;
pub mod storage;

pub use memory::InMemorySettingsStore;
pub use storage::repositories::SeaOrmPluginSettingsRepository;
