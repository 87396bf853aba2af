// src/domain/mod.rs
pub mod category;
pub mod errors;
pub mod media;
pub mod message;
pub mod portfolio;
pub mod post;
pub mod user;
