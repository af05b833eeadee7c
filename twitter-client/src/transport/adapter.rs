use std::fmt;
use std::future::Future;
use std::sync::Arc;

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

use common::utils::percent_encode;
use common::{Error, Result};

use crate::converter::JsonConverter;
use crate::models::ApiErrors;

use super::AuthenticatedClient;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// 请求参数，保持插入顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// 值为 `None` 时不添加
    pub fn push_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// 把查询结构体展开为参数，`null` 字段和空数组跳过，数组以逗号连接
    pub fn from_query<Q: Serialize>(query: &Q) -> Result<Self> {
        let Value::Object(fields) = serde_json::to_value(query)? else {
            return Err(Error::InvalidArgument("查询参数必须是结构体".to_string()));
        };

        let mut params = Self::new();
        for (key, value) in fields {
            if let Some(value) = param_value(value) {
                params.0.push((key, value));
            }
        }
        Ok(params)
    }

    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn to_form_body(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn param_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(param_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

/// 绑定到单个API地址的REST适配器
pub struct RestAdapter {
    endpoint: String,
    client: AuthenticatedClient,
    converter: Arc<JsonConverter>,
    executor: Handle,
}

impl fmt::Debug for RestAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestAdapter")
            .field("endpoint", &self.endpoint)
            .field("session_id", &self.client.session().id())
            .finish()
    }
}

impl RestAdapter {
    pub fn builder() -> RestAdapterBuilder {
        RestAdapterBuilder::default()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn converter(&self) -> &Arc<JsonConverter> {
        &self.converter
    }

    pub fn executor(&self) -> &Handle {
        &self.executor
    }

    pub fn client(&self) -> &AuthenticatedClient {
        &self.client
    }

    /// 拼接请求地址，路径需以 `/` 开头
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.endpoint, path))?)
    }

    pub async fn get<T: DeserializeOwned + 'static>(&self, path: &str, params: &Params) -> Result<T> {
        let mut url = self.url(path)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.as_slice());
        }

        let headers = self.client.auth_headers(&Method::GET, &url, &[])?;
        let request = self.client.http().get(url).headers(headers);
        self.execute(request).await
    }

    pub async fn post_form<T: DeserializeOwned + 'static>(&self, path: &str, params: &Params) -> Result<T> {
        let url = self.url(path)?;
        let headers = self.client.auth_headers(&Method::POST, &url, params.as_slice())?;
        let request = self
            .client
            .http()
            .post(url)
            .headers(headers)
            .header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
            .body(params.to_form_body());
        self.execute(request).await
    }

    /// multipart 请求体不参与 OAuth 签名
    pub async fn post_multipart<T: DeserializeOwned + 'static>(&self, path: &str, form: Form) -> Result<T> {
        let url = self.url(path)?;
        let headers = self.client.auth_headers(&Method::POST, &url, &[])?;
        let request = self.client.http().post(url).headers(headers).multipart(form);
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned + 'static>(&self, request: RequestBuilder) -> Result<T> {
        let request = request.build()?;
        debug!("请求 {} {}", request.method(), request.url().path());

        let response = self.client.http().execute(request).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(self.api_error(status, &body));
        }
        self.converter.decode(&body)
    }

    fn api_error(&self, status: StatusCode, body: &[u8]) -> Error {
        let first = self
            .converter
            .decode::<ApiErrors>(body)
            .ok()
            .and_then(|errors| errors.first().cloned());

        let error = match first {
            Some(api_error) => Error::Api {
                status: status.as_u16(),
                code: Some(api_error.code),
                message: api_error.message,
            },
            None => Error::Api {
                status: status.as_u16(),
                code: None,
                message: String::from_utf8_lossy(body).into_owned(),
            },
        };
        warn!("Twitter API错误 ({}): {}", self.endpoint, error);
        error
    }

    /// 在适配器的执行器上运行调用，结果交给回调
    pub fn enqueue<F, T, C>(&self, call: F, callback: C) -> JoinHandle<()>
    where
        F: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
        C: FnOnce(Result<T>) + Send + 'static,
    {
        self.executor.spawn(async move {
            callback(call.await);
        })
    }
}

/// [`RestAdapter`] 构建器，所有部件都是必需的
#[derive(Default)]
pub struct RestAdapterBuilder {
    endpoint: Option<String>,
    client: Option<AuthenticatedClient>,
    converter: Option<Arc<JsonConverter>>,
    executor: Option<Handle>,
}

impl RestAdapterBuilder {
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn client(mut self, client: AuthenticatedClient) -> Self {
        self.client = Some(client);
        self
    }

    pub fn converter(mut self, converter: Arc<JsonConverter>) -> Self {
        self.converter = Some(converter);
        self
    }

    pub fn executor(mut self, executor: Handle) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn build(self) -> Result<RestAdapter> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| Error::InvalidArgument("缺少API地址".to_string()))?;
        // 提前校验，避免请求时才发现地址错误
        Url::parse(&endpoint)?;

        Ok(RestAdapter {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client: self
                .client
                .ok_or_else(|| Error::InvalidArgument("缺少HTTP客户端".to_string()))?,
            converter: self
                .converter
                .ok_or_else(|| Error::InvalidArgument("缺少JSON转换器".to_string()))?,
            executor: self
                .executor
                .ok_or_else(|| Error::InvalidArgument("缺少执行器".to_string()))?,
        })
    }
}
