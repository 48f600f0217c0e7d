mod change_password;
mod login;
mod register;
mod service;
mod update_profile;

pub use change_password::ChangePasswordCommand;
pub use login::{LoginCommand, LoginResult};
pub use register::{RegisterAccountCommand, RegisterResult};
pub use service::AccountCommandService;
pub use update_profile::UpdateProfileCommand;
