use crate::config::ClientConfig;
use crate::core::{Notifier, Result, Severity};
use crate::utils::error::{ApiError, FALLBACK_MESSAGE};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use serde_json::Value;
use url::Url;

/// 單次請求的選項
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            query: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    /// POST 並以 JSON 序列化 body
    pub fn post_json<T: Serialize + ?Sized>(body: &T) -> Result<Self> {
        Self::with_method(Method::POST).json(body)
    }

    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }
}

/// 所有網路呼叫都經過這裡
pub struct ApiClient<N: Notifier> {
    base_url: Url,
    client: Client,
    notifier: N,
}

impl<N: Notifier> ApiClient<N> {
    pub fn new(base_url: &str, notifier: N) -> Result<Self> {
        let client = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            base_url: Url::parse(base_url)?,
            client,
            notifier,
        })
    }

    pub fn from_config(config: &ClientConfig, notifier: N) -> Result<Self> {
        Self::new(&config.server.base_url, notifier)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// 執行一次請求並回傳解析後的 JSON。
    ///
    /// 失敗時記錄日誌、以 `error` 通知使用者，再把錯誤回傳給呼叫端。
    pub async fn call(&self, path: &str, options: RequestOptions) -> Result<Value> {
        match self.perform(path, options).await {
            Ok(data) => Ok(data),
            Err(e) => {
                tracing::error!("❌ API Error on {}: {}", path, e);
                self.notifier.notify(&e.to_string(), Severity::Error);
                Err(e)
            }
        }
    }

    async fn perform(&self, path: &str, options: RequestOptions) -> Result<Value> {
        let url = self.base_url.join(path)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        // 呼叫端的 header 覆蓋預設值
        for (name, value) in options.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        tracing::debug!("Making API request: {} {}", options.method, url);
        let mut request = self.client.request(options.method, url).headers(headers);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = options.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let bytes = response.bytes().await?;
        let data: Value =
            serde_json::from_slice(&bytes).map_err(|source| ApiError::InvalidBody {
                status: status.as_u16(),
                source,
            })?;

        if !status.is_success() {
            let message = data
                .get("message")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .unwrap_or(FALLBACK_MESSAGE)
                .to_string();
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                message,
            });
        }

        Ok(data)
    }
}
