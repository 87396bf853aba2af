// src/infrastructure/i18n/mod.rs
mod catalog;

pub use catalog::StaticCatalog;
