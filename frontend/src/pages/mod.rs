pub mod forgot_password;
pub mod login;
pub mod not_found;
pub mod reset_password;

pub use forgot_password::{ForgotPassword, ForgotPasswordState};
pub use login::Login;
pub use not_found::NotFound;
pub use reset_password::ResetPassword;
