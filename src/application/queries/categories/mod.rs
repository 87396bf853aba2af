mod get;
mod service;

pub use service::CategoryQueryService;
