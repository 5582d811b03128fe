//! LLM API 客户端
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::LlmError;
use crate::utils::logging::truncate_text;

/// 一次文本生成请求：系统消息 + 用户消息 + 温度
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_message: String,
    pub user_message: String,
    pub temperature: f32,
}

/// 文本生成能力
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 返回第一个候选回复的原文
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError>;
}

/// LLM 客户端
pub struct LlmClient {
    client: Client<OpenAIConfig>,
    model_name: String,
    has_credential: bool,
    timeout: Duration,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    ///
    /// 没有 API 密钥时也能创建，第一次调用时返回 `LlmError::MissingCredential`
    pub fn new(config: &Config) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_base(&config.llm_api_base_url);
        if let Some(key) = &config.llm_api_key {
            openai_config = openai_config.with_api_key(key);
        }

        Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
            has_credential: config.llm_api_key.is_some(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }

    fn build_messages(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<ChatCompletionRequestMessage>, LlmError> {
        let system_msg = ChatCompletionRequestSystemMessageArgs::default()
            .content(request.system_message.as_str())
            .build()
            .map_err(|e| LlmError::RequestBuildFailed(e.to_string()))?;

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(request.user_message.as_str())
            .build()
            .map_err(|e| LlmError::RequestBuildFailed(e.to_string()))?;

        Ok(vec![
            ChatCompletionRequestMessage::System(system_msg),
            ChatCompletionRequestMessage::User(user_msg),
        ])
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        if !self.has_credential {
            return Err(LlmError::MissingCredential);
        }

        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息: {}", truncate_text(&request.user_message, 120));

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(self.build_messages(request)?)
            .temperature(request.temperature)
            .build()
            .map_err(|e| LlmError::RequestBuildFailed(e.to_string()))?;

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(chat_request))
            .await
            .map_err(|_| {
                warn!("LLM API 调用超时 ({} 秒)", self.timeout.as_secs());
                LlmError::Timeout {
                    model: self.model_name.clone(),
                    secs: self.timeout.as_secs(),
                }
            })?
            .map_err(|e| {
                warn!("LLM API 调用失败: {}", e);
                classify_error(&self.model_name, e)
            })?;

        debug!("LLM API 调用成功");

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::EmptyContent {
                model: self.model_name.clone(),
            })
    }
}

/// 把 async-openai 的错误转换为 LlmError，认证失败单独区分
fn classify_error(model: &str, err: OpenAIError) -> LlmError {
    let unauthorized = match &err {
        OpenAIError::ApiError(api) => {
            is_auth_failure(api.code.as_deref(), api.r#type.as_deref(), &api.message)
        }
        _ => false,
    };

    if unauthorized {
        LlmError::Unauthorized {
            model: model.to_string(),
            message: err.to_string(),
        }
    } else {
        LlmError::ApiCallFailed {
            model: model.to_string(),
            message: err.to_string(),
        }
    }
}

/// 401 响应体的判断：错误码、错误类型或消息中的认证关键字
fn is_auth_failure(code: Option<&str>, kind: Option<&str>, message: &str) -> bool {
    const AUTH_CODES: [&str; 3] = ["invalid_api_key", "invalid_authentication", "401"];
    const AUTH_TYPES: [&str; 2] = ["authentication_error", "invalid_authentication"];

    if code.is_some_and(|c| AUTH_CODES.contains(&c)) {
        return true;
    }
    if kind.is_some_and(|k| AUTH_TYPES.contains(&k)) {
        return true;
    }

    let message = message.to_ascii_lowercase();
    message.contains("incorrect api key")
        || message.contains("invalid api key")
        || message.contains("unauthorized")
}
