mod api_config;
mod auth_config;
mod log_config;
mod session_config;
mod tls_config;

pub use api_config::*;
pub use auth_config::*;
pub use log_config::*;
pub use session_config::*;
pub use tls_config::*;
