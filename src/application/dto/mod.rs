pub mod auth;
pub mod categories;
pub mod pagination;
pub mod portfolios;
pub mod posts;
pub mod serde_time;
pub mod users;

pub use auth::{
    AccessToken, AuthenticatedUser, LoginResponseDto, RefreshResponseDto, TokenPair, TokenType,
    VerifiedToken,
};
pub use categories::CategoryDto;
pub use pagination::{Listing, Page};
pub use portfolios::{PortfolioDto, PortfolioImageDto, PortfolioInfoDto};
pub use posts::PostDto;
pub use users::{DetailDto, ProfileDto, UserDto};
