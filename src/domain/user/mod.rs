// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, ProfileFields, User, UserUpdate};
pub use repository::{ProfileRepository, UserRepository};
pub use value_objects::{Email, PasswordHash, UserId, Username};
