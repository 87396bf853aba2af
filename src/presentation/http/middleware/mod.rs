// src/presentation/http/middleware/mod.rs
pub mod localize;
pub mod rate_limit;
