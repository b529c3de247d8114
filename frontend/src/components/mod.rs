pub mod auth;
pub mod auth_backdrop;
pub mod image_carousel;
pub mod password_field;

pub use auth::*;
pub use auth_backdrop::AuthBackdrop;
pub use image_carousel::ImageCarousel;
pub use password_field::PasswordField;
