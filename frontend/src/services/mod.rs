pub mod http;

pub use http::{auth_service, FetchGateway};
