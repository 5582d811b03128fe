//! 单元测试用的文本生成器替身

use async_trait::async_trait;
use std::sync::Mutex;

use crate::clients::{GenerationRequest, TextGenerator};
use crate::error::LlmError;

/// 记录所有请求并返回固定回复（或固定失败）
pub struct RecordingGenerator {
    reply: Option<String>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl RecordingGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().ok_or_else(|| LlmError::ApiCallFailed {
            model: "test".to_string(),
            message: "boom".to_string(),
        })
    }
}
