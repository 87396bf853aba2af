mod get;
mod list;
mod service;

pub use list::{ListPortfoliosQuery, MAX_PAGE_SIZE};
pub use service::{ListingSettings, PortfolioQueryService};
