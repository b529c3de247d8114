pub mod use_forgot_flow;
pub mod use_mount_task;
pub mod use_reset_flow;

pub use use_forgot_flow::*;
pub use use_mount_task::*;
pub use use_reset_flow::*;
