// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod categories;
pub mod health;
pub mod images;
pub mod portfolios;
pub mod posts;
pub mod users;
