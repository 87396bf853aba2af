// src/infrastructure/mod.rs
pub mod database;
pub mod i18n;
pub mod repositories;
pub mod security;
pub mod storage;
pub mod time;
pub mod util;
