//! 主题热度服务 - 业务能力层
//!
//! 只负责"查询热度"能力。任何失败都归结为"未知"，不会向上抛错。

use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::clients::TopicSearch;

/// 响应中的热度字段名
pub const POPULARITY_FIELD: &str = "popularity_score";

/// 主题热度服务
pub struct PopularityService {
    search: Arc<dyn TopicSearch>,
}

impl PopularityService {
    pub fn new(search: Arc<dyn TopicSearch>) -> Self {
        Self { search }
    }

    /// 查询主题热度
    ///
    /// # 返回
    /// - `Some(score)`：请求成功；字段缺失时为 0
    /// - `None`：网络错误、超时、非 2xx 状态或响应格式异常
    pub async fn check(&self, topic: &str) -> Option<f64> {
        match self.search.search(topic).await {
            Ok(payload) => {
                let score = extract_score(&payload);
                debug!("主题 '{}' 热度: {:?}", topic, score);
                score
            }
            Err(e) => {
                warn!("⚠️ 热度查询失败，按未知处理: {}", e);
                None
            }
        }
    }
}

/// 从响应体中提取热度分数
///
/// 字段缺失视为 0；字段存在但不是数字，或响应体不是 JSON 对象，视为未知
pub fn extract_score(payload: &Value) -> Option<f64> {
    let object = payload.as_object()?;
    match object.get(POPULARITY_FIELD) {
        None => Some(0.0),
        Some(value) => value.as_f64(),
    }
}

/// 面向用户的热度提示
pub fn describe(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("Popularity Score: {} (Higher is better)", score),
        None => "Could not determine popularity. Proceeding with book outline.".to_string(),
    }
}
