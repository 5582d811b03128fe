//! 章节写作服务 - 业务能力层
//!
//! 只负责"写一章"能力。可选地带上前文作为上下文，
//! 前文只截取前 [`CONTINUITY_PREFIX_CHARS`] 个字符以控制提示词长度。

use std::sync::Arc;
use tracing::{debug, info};

use crate::clients::{GenerationRequest, TextGenerator};
use crate::error::LlmError;
use crate::models::Audience;

/// 章节写作的系统消息
pub const CHAPTER_SYSTEM_MESSAGE: &str = "You are a professional book author.";

/// 上下文前文的最大字符数
pub const CONTINUITY_PREFIX_CHARS: usize = 500;

/// 章节写作服务
pub struct ChapterService {
    generator: Arc<dyn TextGenerator>,
    temperature: f32,
}

impl ChapterService {
    pub fn new(generator: Arc<dyn TextGenerator>, temperature: f32) -> Self {
        Self {
            generator,
            temperature,
        }
    }

    /// 生成单个章节
    ///
    /// # 参数
    /// - `chapter_title`: 章节标题
    /// - `topic`: 书名/主题
    /// - `audience`: 目标读者
    /// - `previous_content`: 前文（空字符串表示不带上下文）
    pub async fn write(
        &self,
        chapter_title: &str,
        topic: &str,
        audience: Audience,
        previous_content: &str,
    ) -> Result<String, LlmError> {
        info!("✍️ 正在写章节: {}", chapter_title);
        if !previous_content.is_empty() {
            debug!("带上下文写作，前文长度: {} 字符", previous_content.chars().count());
        }

        let request = GenerationRequest {
            system_message: CHAPTER_SYSTEM_MESSAGE.to_string(),
            user_message: build_chapter_prompt(chapter_title, topic, audience, previous_content),
            temperature: self.temperature,
        };

        let body = self.generator.generate(&request).await?;
        debug!("章节 '{}' 完成，长度: {} 字符", chapter_title, body.chars().count());
        Ok(body)
    }
}

/// 构建章节提示词
pub fn build_chapter_prompt(
    chapter_title: &str,
    topic: &str,
    audience: Audience,
    previous_content: &str,
) -> String {
    let mut prompt = format!(
        "Write a compelling chapter titled '{}' for the book '{}'.\n\
         The book is designed for {} and should be engaging, informative, and valuable.\n\
         Ensure it follows a structured format with an introduction, main content, actionable steps, and key takeaways.",
        chapter_title,
        topic,
        audience.label()
    );

    if !previous_content.is_empty() {
        prompt.push_str(&format!(
            " Consider the previous content: {}...",
            continuity_prefix(previous_content)
        ));
    }

    prompt
}

/// 截取前文的前 500 个字符（按字符而非字节）
pub fn continuity_prefix(previous_content: &str) -> &str {
    match previous_content.char_indices().nth(CONTINUITY_PREFIX_CHARS) {
        Some((byte_index, _)) => &previous_content[..byte_index],
        None => previous_content,
    }
}
