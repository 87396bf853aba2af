pub mod categories;
pub mod portfolios;
pub mod posts;
pub mod users;
