pub mod auth_service;
pub mod carousel;
pub mod constants;
pub mod flow_cell;
pub mod forgot_flow;
pub mod gateway;
pub mod password_reset;
pub mod reset_flow;
pub mod task;
pub mod validation;

pub use auth_service::AuthService;
pub use flow_cell::FlowCell;
pub use forgot_flow::{ForgotPasswordFlow, ForgotStatus};
pub use gateway::{GatewayError, GatewayResponse, GatewayResult, HttpGateway};
pub use reset_flow::{PasswordResetFlow, ResetStatus};
