//! HTTP传输层：端点、传输安全、带认证的客户端和REST适配器

mod adapter;
mod api;
mod authenticated_client;
mod security;

pub use adapter::{Params, RestAdapter, RestAdapterBuilder};
pub use api::{TwitterApi, UPLOAD_ENDPOINT};
pub use authenticated_client::AuthenticatedClient;
pub use security::TransportSecurity;
