#![allow(dead_code)]

use async_trait::async_trait;
use ebook_writer::error::{ApiError, LlmError};
use ebook_writer::services::outline_service::OUTLINE_SYSTEM_MESSAGE;
use ebook_writer::{GenerationRequest, TextGenerator, TopicSearch};
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// 大纲请求返回固定大纲，章节请求返回 "Body of <标题>"
pub struct ScriptedGenerator {
    outline: Mutex<String>,
    fail: AtomicBool,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn new(outline: &str) -> Self {
        Self {
            outline: Mutex::new(outline.to_string()),
            fail: AtomicBool::new(false),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn set_outline(&self, outline: &str) {
        *self.outline.lock().unwrap() = outline.to_string();
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// 从章节提示词中取出 'titled '...'' 里的标题
pub fn titled(prompt: &str) -> &str {
    prompt
        .split("titled '")
        .nth(1)
        .and_then(|rest| rest.split('\'').next())
        .unwrap_or("")
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());

        if self.fail.load(Ordering::SeqCst) {
            return Err(LlmError::ApiCallFailed {
                model: "scripted".to_string(),
                message: "service unavailable".to_string(),
            });
        }

        if request.system_message == OUTLINE_SYSTEM_MESSAGE {
            Ok(self.outline.lock().unwrap().clone())
        } else {
            Ok(format!("Body of {}", titled(&request.user_message)))
        }
    }
}

/// 总是返回同一个结果的搜索接口
pub struct StaticSearch(pub Option<Value>);

#[async_trait]
impl TopicSearch for StaticSearch {
    async fn search(&self, _topic: &str) -> Result<Value, ApiError> {
        self.0.clone().ok_or_else(|| ApiError::BadResponse {
            endpoint: "static".to_string(),
            status: 503,
        })
    }
}
