/// 搜索 API 客户端
///
/// 封装对热度搜索接口的原始调用，不解释返回内容
use crate::config::Config;
use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// 主题搜索能力
#[async_trait]
pub trait TopicSearch: Send + Sync {
    /// 以 `query` 参数请求搜索接口，成功时返回 JSON 响应体
    async fn search(&self, topic: &str) -> Result<Value, ApiError>;
}

/// 搜索客户端
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    /// 创建新的搜索客户端
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(
            &config.search_api_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Self {
        // 构建失败时退回到默认客户端（只会丢失超时设置）
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl TopicSearch for SearchClient {
    async fn search(&self, topic: &str) -> Result<Value, ApiError> {
        debug!("请求搜索接口: {} (query={})", self.endpoint, topic);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("query", topic)])
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(&self.endpoint, e))?;

        // 只有 200 才算有数据，其他 2xx 也按失败处理
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ApiError::BadResponse {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(&self.endpoint, e))?;

        Ok(serde_json::from_str(&body)?)
    }
}
