use regex::Regex;
use std::sync::OnceLock;

/// Word 文档的 MIME 类型
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// 导出的文档
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// 由书名推导出的文件名（含 .docx 后缀）
    pub file_name: String,
    /// 完整的 docx 字节
    pub bytes: Vec<u8>,
}

impl GeneratedDocument {
    pub fn new(book_title: &str, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name_for(book_title),
            bytes,
        }
    }

    pub fn media_type(&self) -> &'static str {
        DOCX_MEDIA_TYPE
    }
}

fn invalid_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"[\\/:*?"<>|\x00-\x1f]"#).expect("static regex"))
}

/// 书名转文件名：替换文件系统不允许的字符，空书名使用 "ebook"
pub fn file_name_for(book_title: &str) -> String {
    let cleaned = invalid_chars().replace_all(book_title.trim(), "_");
    let stem = cleaned.trim_matches(|c: char| c == '.' || c.is_whitespace());
    if stem.is_empty() {
        "ebook.docx".to_string()
    } else {
        format!("{}.docx", stem)
    }
}
