//! 大纲生成服务 - 业务能力层
//!
//! 只负责"生成大纲"能力，返回 LLM 原文，不做任何后处理

use std::sync::Arc;
use tracing::{debug, info};

use crate::clients::{GenerationRequest, TextGenerator};
use crate::error::LlmError;
use crate::models::Audience;
use crate::utils::logging::truncate_text;

/// 大纲生成的系统消息
pub const OUTLINE_SYSTEM_MESSAGE: &str = "You are an expert book writer and publisher.";

/// 大纲生成服务
pub struct OutlineService {
    generator: Arc<dyn TextGenerator>,
    temperature: f32,
}

impl OutlineService {
    pub fn new(generator: Arc<dyn TextGenerator>, temperature: f32) -> Self {
        Self {
            generator,
            temperature,
        }
    }

    /// 为主题和读者生成章节大纲
    pub async fn generate(&self, topic: &str, audience: Audience) -> Result<String, LlmError> {
        info!("📝 正在为《{}》生成大纲 (读者: {})", topic, audience);

        let request = self.build_request(topic, audience);
        let outline = self.generator.generate(&request).await?;

        debug!("大纲预览: {}", truncate_text(&outline, 200));
        Ok(outline)
    }

    fn build_request(&self, topic: &str, audience: Audience) -> GenerationRequest {
        GenerationRequest {
            system_message: OUTLINE_SYSTEM_MESSAGE.to_string(),
            user_message: build_outline_prompt(topic, audience),
            temperature: self.temperature,
        }
    }
}

/// 构建大纲提示词，主题和读者原样嵌入
pub fn build_outline_prompt(topic: &str, audience: Audience) -> String {
    format!(
        "Generate a detailed chapter outline for an eBook titled '{}'.\n\
         The book is targeted at {} and should be well-structured to maximize reader engagement and marketability.",
        topic,
        audience.label()
    )
}
