//! 写书流程 - 流程层
//!
//! 核心职责：把各个能力服务串成写书流程，每个用户动作对应一个处理函数
//!
//! 流程顺序：
//! 1. 热度查询（仅展示，不改变会话）
//! 2. 生成大纲 → 保存到会话
//! 3. 逐章生成 → 写入会话
//! 4. 全部完成后 → 组装 Word 文档
//!
//! 每个动作的失败只影响该动作本身，会话保持上一次成功后的状态。

use std::sync::Arc;
use tracing::{info, warn};

use crate::clients::{LlmClient, SearchClient, TextGenerator, TopicSearch};
use crate::config::Config;
use crate::error::AppResult;
use crate::models::{Audience, GeneratedDocument, Outline};
use crate::services::{ChapterService, DocumentService, OutlineService, PopularityService};
use crate::workflow::book_session::{BookSession, SessionPhase};

/// 写书流程
///
/// - 持有唯一的会话状态
/// - 决定何时生成、何时允许导出
/// - 只依赖业务能力（services）
pub struct EbookFlow {
    popularity: PopularityService,
    outlines: OutlineService,
    chapters: ChapterService,
    documents: DocumentService,
    session: BookSession,
    chain_chapters: bool,
}

impl EbookFlow {
    /// 使用真实的 API 客户端创建流程
    pub fn new(config: &Config, topic: impl Into<String>, audience: Audience) -> Self {
        Self::with_clients(
            config,
            Arc::new(LlmClient::new(config)),
            Arc::new(SearchClient::new(config)),
            topic,
            audience,
        )
    }

    /// 使用指定的客户端创建流程
    pub fn with_clients(
        config: &Config,
        generator: Arc<dyn TextGenerator>,
        search: Arc<dyn TopicSearch>,
        topic: impl Into<String>,
        audience: Audience,
    ) -> Self {
        Self {
            popularity: PopularityService::new(search),
            outlines: OutlineService::new(generator.clone(), config.llm_temperature),
            chapters: ChapterService::new(generator, config.llm_temperature),
            documents: DocumentService::new(),
            session: BookSession::new(topic, audience),
            chain_chapters: config.chain_chapters,
        }
    }

    pub fn session(&self) -> &BookSession {
        &self.session
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    /// 查询主题热度，只用于展示
    pub async fn check_popularity(&self) -> Option<f64> {
        info!("{} 🔍 查询主题热度...", self.session);
        self.popularity.check(self.session.topic()).await
    }

    /// 生成（或重新生成）大纲
    ///
    /// # 返回
    /// 成功保存的大纲
    pub async fn generate_outline(&mut self) -> AppResult<&Outline> {
        let raw = self
            .outlines
            .generate(self.session.topic(), self.session.audience())
            .await?;

        self.session.set_outline(Outline::parse(raw))?;

        let titles = self.session.candidate_titles();
        info!("{} ✓ 大纲已生成，共 {} 个候选章节", self.session, titles.len());

        self.session
            .outline()
            .ok_or_else(|| crate::error::SessionError::NoOutline.into())
    }

    /// 生成（或重新生成）某一章
    pub async fn generate_chapter(&mut self, title: &str) -> AppResult<&str> {
        self.session.ensure_known(title)?;

        let previous = if self.chain_chapters {
            self.session.previous_body(title).unwrap_or("").to_string()
        } else {
            String::new()
        };

        let body = self
            .chapters
            .write(
                title,
                self.session.topic(),
                self.session.audience(),
                &previous,
            )
            .await?;

        self.session.record_chapter(title, body)?;
        info!("{} ✓ 章节完成: {}", self.session, title);

        if self.session.is_complete() {
            info!("{} 🎉 所有章节已完成，可以导出文档", self.session);
        }

        Ok(self.session.chapters().get(title).unwrap_or(""))
    }

    /// 按大纲顺序生成所有尚未完成的章节
    ///
    /// 大纲中重复的标题只生成一次。遇到第一个失败即停止，已完成的章节保留
    pub async fn generate_remaining(&mut self) -> AppResult<usize> {
        let pending: Vec<String> = self
            .session
            .pending_titles()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut written = 0;
        for title in pending {
            if let Err(e) = self.generate_chapter(&title).await {
                warn!("{} ⚠️ 章节 '{}' 生成失败，停止批量生成", self.session, title);
                return Err(e);
            }
            written += 1;
        }
        Ok(written)
    }

    /// 组装最终文档，只有所有章节完成后才可用
    pub fn assemble_document(&self) -> AppResult<GeneratedDocument> {
        let chapters = self.session.ordered_chapters()?;
        let document = self.documents.assemble(self.session.topic(), chapters)?;
        Ok(document)
    }
}
