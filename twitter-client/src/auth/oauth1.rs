use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use tracing::trace;
use url::Url;

use common::configs::AuthConfig;
use common::utils::{generate_nonce, percent_encode, unix_timestamp};
use common::{Error, Result};

use super::TwitterAuthToken;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LENGTH: usize = 32;

/// OAuth 1.0a 请求签名器 (RFC 5849)
#[derive(Debug, Clone)]
pub struct OAuth1aSigner {
    auth_config: AuthConfig,
    token: Option<TwitterAuthToken>,
}

impl OAuth1aSigner {
    pub fn new(auth_config: AuthConfig, token: Option<TwitterAuthToken>) -> Self {
        Self { auth_config, token }
    }

    /// 生成 `Authorization` 请求头
    ///
    /// `form_params` 只应包含 `application/x-www-form-urlencoded` 请求体参数，
    /// multipart 请求体不参与签名
    pub fn authorization_header(
        &self,
        method: &str,
        url: &Url,
        form_params: &[(String, String)],
    ) -> Result<String> {
        self.authorization_header_with(
            method,
            url,
            form_params,
            &generate_nonce(NONCE_LENGTH),
            unix_timestamp(),
        )
    }

    /// 使用给定的 nonce 与时间戳生成请求头
    pub fn authorization_header_with(
        &self,
        method: &str,
        url: &Url,
        form_params: &[(String, String)],
        nonce: &str,
        timestamp: i64,
    ) -> Result<String> {
        let mut oauth_params = vec![
            ("oauth_consumer_key".to_string(), self.auth_config.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), SIGNATURE_METHOD.to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
        ];
        if let Some(token) = &self.token {
            oauth_params.push(("oauth_token".to_string(), token.token.clone()));
        }
        oauth_params.push(("oauth_version".to_string(), OAUTH_VERSION.to_string()));

        let base_string = self.signature_base_string(method, url, &oauth_params, form_params)?;
        let signature = self.sign(&base_string)?;
        oauth_params.push(("oauth_signature".to_string(), signature));
        oauth_params.sort();

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {}", header))
    }

    /// 拼接签名基础串
    pub(crate) fn signature_base_string(
        &self,
        method: &str,
        url: &Url,
        oauth_params: &[(String, String)],
        form_params: &[(String, String)],
    ) -> Result<String> {
        // 1. 规范化URL：去掉查询串和片段，默认端口不写
        let host = url
            .host_str()
            .ok_or_else(|| Error::Signature(format!("URL缺少主机: {}", url)))?;
        let base_url = match url.port() {
            Some(port) => format!("{}://{}:{}{}", url.scheme(), host, port, url.path()),
            None => format!("{}://{}{}", url.scheme(), host, url.path()),
        };

        // 2. 合并并编码全部参数后排序
        let mut params: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .chain(oauth_params.iter().cloned())
            .chain(form_params.iter().cloned())
            .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
            .collect();
        params.sort();

        let param_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        // 3. 方法&URL&参数
        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(&base_url),
            percent_encode(&param_string)
        );
        trace!("OAuth签名基础串: {}", base_string);

        Ok(base_string)
    }

    fn sign(&self, base_string: &str) -> Result<String> {
        let token_secret = self
            .token
            .as_ref()
            .map(|t| percent_encode(&t.secret))
            .unwrap_or_default();
        let key = format!("{}&{}", percent_encode(&self.auth_config.consumer_secret), token_secret);

        let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes())
            .map_err(|e| Error::Signature(format!("HMAC初始化失败: {}", e)))?;
        mac.update(base_string.as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Twitter开发者文档中的签名示例
    fn reference_signer() -> OAuth1aSigner {
        OAuth1aSigner::new(
            AuthConfig::new(
                "xvz1evFS4wEEPTGEFPHBog",
                "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
            ),
            Some(TwitterAuthToken::new(
                "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb",
                "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
            )),
        )
    }

    fn reference_form() -> Vec<(String, String)> {
        vec![(
            "status".to_string(),
            "Hello Ladies + Gentlemen, a signed OAuth request!".to_string(),
        )]
    }

    const NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
    const TIMESTAMP: i64 = 1318622958;

    #[test]
    fn test_signature_base_string() {
        let signer = reference_signer();
        let url = Url::parse("https://api.twitter.com/1.1/statuses/update.json?include_entities=true")
            .unwrap();
        let oauth_params = vec![
            ("oauth_consumer_key".to_string(), "xvz1evFS4wEEPTGEFPHBog".to_string()),
            ("oauth_nonce".to_string(), NONCE.to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), TIMESTAMP.to_string()),
            (
                "oauth_token".to_string(),
                "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_string(),
            ),
            ("oauth_version".to_string(), "1.0".to_string()),
        ];

        let base = signer
            .signature_base_string("post", &url, &oauth_params, &reference_form())
            .unwrap();

        assert_eq!(
            base,
            "POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json&include_entities%3Dtrue%26oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958%26oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb%26oauth_version%3D1.0%26status%3DHello%2520Ladies%2520%252B%2520Gentlemen%252C%2520a%2520signed%2520OAuth%2520request%2521"
        );
    }

    #[test]
    fn test_reference_signature() {
        let signer = reference_signer();
        let url = Url::parse("https://api.twitter.com/1.1/statuses/update.json?include_entities=true")
            .unwrap();

        let header = signer
            .authorization_header_with("POST", &url, &reference_form(), NONCE, TIMESTAMP)
            .unwrap();

        assert!(header.starts_with("OAuth "));
        assert!(header.contains("oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\""));
        assert!(header.contains("oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\""));
        assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(header.contains("oauth_version=\"1.0\""));
    }

    #[test]
    fn test_non_default_port_kept_in_base_url() {
        let signer = OAuth1aSigner::new(AuthConfig::new("ck", "cs"), None);
        let url = Url::parse("http://127.0.0.1:8080/1.1/help/configuration.json").unwrap();
        let base = signer.signature_base_string("GET", &url, &[], &[]).unwrap();
        assert!(base.starts_with("GET&http%3A%2F%2F127.0.0.1%3A8080%2F1.1%2Fhelp%2Fconfiguration.json&"));
    }

    #[test]
    fn test_header_changes_with_nonce() {
        let signer = reference_signer();
        let url = Url::parse("https://api.twitter.com/1.1/account/verify_credentials.json").unwrap();
        let first = signer.authorization_header("GET", &url, &[]).unwrap();
        let second = signer.authorization_header("GET", &url, &[]).unwrap();
        assert_ne!(first, second);
    }
}
