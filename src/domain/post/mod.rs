// src/domain/post/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{NewPost, Post, PostCategory, PostId, PostUpdate};
pub use repository::PostRepository;
