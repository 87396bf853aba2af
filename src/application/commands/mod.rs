pub mod categories;
pub mod portfolios;
pub mod posts;
pub(crate) mod uploads;
pub mod users;
