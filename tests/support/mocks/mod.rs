// tests/support/mocks/mod.rs
pub mod security;
pub mod storage;
pub mod store;
pub mod time;

pub use security::StrictPasswordHasher;
pub use storage::MemoryBlobStorage;
pub use store::InMemoryStore;
pub use time::{FIXED_NOW, FixedClock};
