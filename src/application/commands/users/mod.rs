mod change_password;
mod login;
mod logout;
mod password;
pub(crate) mod policy;
mod profile;
mod refresh;
mod register;
mod service;

pub use change_password::ChangePasswordCommand;
pub use login::LoginUserCommand;
pub use profile::UpdateProfileCommand;
pub use refresh::{RefreshTokenCommand, VerifyTokenCommand};
pub use register::CreateSuperuserCommand;
pub use service::UserCommandService;
