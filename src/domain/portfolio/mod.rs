// src/domain/portfolio/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{
    NewPortfolio, NewPortfolioImage, Portfolio, PortfolioImage, PortfolioInfo,
    PortfolioInfoChanges, PortfolioUpdate,
};
pub use repository::{
    PortfolioFilter, PortfolioImageRepository, PortfolioInfoRepository, PortfolioRepository,
    Window,
};
pub use value_objects::{PortfolioBody, PortfolioId, PortfolioImageId, PortfolioTitle};
