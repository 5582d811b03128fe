//! 写书会话状态
//!
//! 显式的会话状态结构，持有主题、读者、大纲和已完成的章节。
//! 状态（[`SessionPhase`]）由内容推导，不单独存储。

use std::fmt::Display;
use tracing::info;

use crate::error::SessionError;
use crate::models::{Audience, ChapterMap, Outline};

/// 会话阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// 只能输入主题、查询热度
    Idle,
    /// 大纲已生成，还没有任何章节
    OutlineReady,
    /// 部分章节已完成
    ChaptersInProgress,
    /// 所有章节已完成，可以导出
    Complete,
}

/// 单个用户的写书会话
#[derive(Debug, Clone)]
pub struct BookSession {
    topic: String,
    audience: Audience,
    outline: Option<Outline>,
    chapters: ChapterMap,
}

impl BookSession {
    /// 创建新会话，主题和读者在会话内不可变
    pub fn new(topic: impl Into<String>, audience: Audience) -> Self {
        Self {
            topic: topic.into(),
            audience,
            outline: None,
            chapters: ChapterMap::new(),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn audience(&self) -> Audience {
        self.audience
    }

    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    pub fn chapters(&self) -> &ChapterMap {
        &self.chapters
    }

    /// 当前大纲的候选章节标题
    pub fn candidate_titles(&self) -> &[String] {
        self.outline.as_ref().map(Outline::titles).unwrap_or(&[])
    }

    pub fn phase(&self) -> SessionPhase {
        match &self.outline {
            None => SessionPhase::Idle,
            Some(_) if self.is_complete() => SessionPhase::Complete,
            Some(_) if self.chapters.is_empty() => SessionPhase::OutlineReady,
            Some(_) => SessionPhase::ChaptersInProgress,
        }
    }

    /// 去重后的章节标题（大纲中重复的行只算一章）
    pub fn distinct_titles(&self) -> Vec<&str> {
        self.outline
            .as_ref()
            .map(Outline::distinct_titles)
            .unwrap_or_default()
    }

    /// 每个候选标题都有章节时才算完成
    pub fn is_complete(&self) -> bool {
        let titles = self.candidate_titles();
        !titles.is_empty() && titles.iter().all(|t| self.chapters.contains(t))
    }

    /// 尚未完成的章节标题，按大纲顺序且不重复
    pub fn pending_titles(&self) -> Vec<&str> {
        self.distinct_titles()
            .into_iter()
            .filter(|t| !self.chapters.contains(t))
            .collect()
    }

    /// 尚未完成的章节数
    pub fn missing_chapters(&self) -> usize {
        self.pending_titles().len()
    }

    /// 章节进度 (已完成, 总数)，都按去重后的标题计算
    pub fn progress(&self) -> (usize, usize) {
        let total = self.distinct_titles().len();
        (total - self.missing_chapters(), total)
    }

    /// 保存新大纲
    ///
    /// 空大纲会被拒绝，原有状态保持不变。
    /// 替换大纲时，删除标题已不在新大纲中的章节。
    pub fn set_outline(&mut self, outline: Outline) -> Result<usize, SessionError> {
        if outline.is_empty() {
            return Err(SessionError::EmptyOutline);
        }

        let purged = self.chapters.retain_titles(|title| outline.contains(title));
        if purged > 0 {
            info!("🧹 大纲已更新，删除 {} 个过期章节", purged);
        }

        self.outline = Some(outline);
        Ok(purged)
    }

    /// 写入或覆盖某一章
    pub fn record_chapter(&mut self, title: &str, body: String) -> Result<(), SessionError> {
        self.ensure_known(title)?;
        self.chapters.insert(title, body);
        Ok(())
    }

    /// 检查标题是否属于当前大纲
    pub fn ensure_known(&self, title: &str) -> Result<(), SessionError> {
        match &self.outline {
            None => Err(SessionError::NoOutline),
            Some(outline) if outline.contains(title) => Ok(()),
            Some(_) => Err(SessionError::UnknownChapter {
                title: title.to_string(),
            }),
        }
    }

    /// 大纲中上一章已生成的正文（用于上下文）
    pub fn previous_body(&self, title: &str) -> Option<&str> {
        let previous = self.outline.as_ref()?.previous_title(title)?;
        self.chapters.get(previous)
    }

    /// 按大纲顺序取出全部章节，未完成时报错
    pub fn ordered_chapters(&self) -> Result<Vec<(&str, &str)>, SessionError> {
        if self.outline.is_none() {
            return Err(SessionError::NoOutline);
        }
        let missing = self.missing_chapters();
        if missing > 0 {
            return Err(SessionError::ChaptersIncomplete { missing });
        }
        Ok(self.chapters.ordered(self.distinct_titles()))
    }
}

impl Display for BookSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (done, total) = self.progress();
        write!(
            f,
            "[《{}》 读者#{} 章节#{}/{}]",
            self.topic, self.audience, done, total
        )
    }
}
