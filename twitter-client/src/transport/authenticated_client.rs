use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Method};
use url::Url;

use common::configs::AuthConfig;
use common::{Error, Result};

use crate::auth::{OAuth1aSigner, Session};

use super::TransportSecurity;

const GUEST_TOKEN_HEADER: &str = "x-guest-token";

/// 为每个请求附加会话凭证的HTTP客户端
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    http: Client,
    session: Session,
    signer: Option<OAuth1aSigner>,
}

impl AuthenticatedClient {
    pub fn new(auth_config: AuthConfig, session: Session, security: &TransportSecurity) -> Result<Self> {
        let http = security.apply(Client::builder())?.build()?;
        let signer = match &session {
            Session::User(user) => Some(OAuth1aSigner::new(auth_config, Some(user.auth_token.clone()))),
            Session::Guest(_) => None,
        };

        Ok(Self {
            http,
            session,
            signer,
        })
    }

    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// 计算认证请求头
    ///
    /// 用户会话使用 OAuth 1.0a 签名，`form_params` 为参与签名的表单参数
    pub fn auth_headers(
        &self,
        method: &Method,
        url: &Url,
        form_params: &[(String, String)],
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        match (&self.session, &self.signer) {
            (Session::User(_), Some(signer)) => {
                let header = signer.authorization_header(method.as_str(), url, form_params)?;
                headers.insert(AUTHORIZATION, header_value(&header)?);
            }
            (Session::Guest(guest), _) => {
                let bearer = format!("Bearer {}", guest.auth_token.access_token);
                headers.insert(AUTHORIZATION, header_value(&bearer)?);
                if let Some(guest_token) = &guest.auth_token.guest_token {
                    headers.insert(GUEST_TOKEN_HEADER, header_value(guest_token)?);
                }
            }
            (Session::User(_), None) => {
                return Err(Error::Internal("用户会话缺少签名器".to_string()));
            }
        }
        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidArgument(format!("无效的请求头: {}", e)))
}
