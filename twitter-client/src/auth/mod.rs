//! 认证相关：会话类型与请求签名

pub mod oauth1;
mod session;

pub use common::configs::AuthConfig;
pub use oauth1::OAuth1aSigner;
pub use session::{GuestAuthToken, GuestSession, Session, TwitterAuthToken, TwitterSession};
