pub mod api_client;
pub mod credentials;

pub use api_client::*;
pub use credentials::*;
