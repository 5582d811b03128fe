use std::collections::HashMap;

/// 已生成的章节正文，按章节标题索引
///
/// 同一标题重复生成时覆盖旧内容。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterMap {
    bodies: HashMap<String, String>,
}

impl ChapterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入或覆盖章节，返回被覆盖的旧内容
    pub fn insert(&mut self, title: impl Into<String>, body: impl Into<String>) -> Option<String> {
        self.bodies.insert(title.into(), body.into())
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.bodies.get(title).map(String::as_str)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.bodies.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// 只保留满足条件的标题，返回被删除的数量
    pub fn retain_titles<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let before = self.bodies.len();
        self.bodies.retain(|title, _| keep(title));
        before - self.bodies.len()
    }

    /// 按给定标题顺序取出 (标题, 正文)，缺失的标题被跳过
    pub fn ordered<'a, I>(&'a self, titles: I) -> Vec<(&'a str, &'a str)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        titles
            .into_iter()
            .filter_map(|t| self.get(t).map(|body| (t, body)))
            .collect()
    }
}
