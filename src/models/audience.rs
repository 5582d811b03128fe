/// 目标读者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    /// 入门读者
    Beginners,
    /// 专业人士
    Professionals,
    /// 创业者
    Entrepreneurs,
    /// 普通读者
    GeneralReaders,
}

impl Audience {
    /// 所有可选读者，按界面显示顺序
    pub const ALL: [Audience; 4] = [
        Audience::Beginners,
        Audience::Professionals,
        Audience::Entrepreneurs,
        Audience::GeneralReaders,
    ];

    /// 写入提示词的标签
    pub fn label(self) -> &'static str {
        match self {
            Audience::Beginners => "Beginners",
            Audience::Professionals => "Professionals",
            Audience::Entrepreneurs => "Entrepreneurs",
            Audience::GeneralReaders => "General Readers",
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
