//! 大纲
//!
//! LLM 返回的原始大纲文本，每个非空行视为一个候选章节标题。
//! 不做任何结构校验（编号、格式都原样保留）。
//! 重复出现的行在候选列表中保留，但只对应一个章节。

use std::collections::HashSet;

/// 生成的大纲
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    raw: String,
    titles: Vec<String>,
}

impl Outline {
    /// 从 LLM 原始输出构建大纲
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let titles = candidate_titles(&raw);
        Self { raw, titles }
    }

    /// 原始文本
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 候选章节标题（按大纲顺序）
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// 去重后的章节标题，保留第一次出现的顺序
    pub fn distinct_titles(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.titles
            .iter()
            .map(String::as_str)
            .filter(|t| seen.insert(*t))
            .collect()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// 返回某个章节在去重后的大纲中的前一个章节
    pub fn previous_title(&self, title: &str) -> Option<&str> {
        let distinct = self.distinct_titles();
        let index = distinct.iter().position(|t| *t == title)?;
        index.checked_sub(1).map(|prev| distinct[prev])
    }
}

/// 按行切分并丢弃空白行
pub fn candidate_titles(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
