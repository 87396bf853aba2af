mod create;
mod delete;
mod images;
pub(crate) mod policy;
mod service;
mod update;

pub use create::CreatePortfolioCommand;
pub use delete::DeletePortfolioCommand;
pub use images::{AddPortfolioImageCommand, DeletePortfolioImageCommand};
pub use service::PortfolioCommandService;
pub use update::{ImageChange, UpdatePortfolioCommand};
