//! 文档组装服务 - 业务能力层
//!
//! 把书名和有序的 (章节标题, 正文) 组装成 Word 文档。
//! 先生成与格式无关的 [`Block`] 序列，再交给 `docx-rs` 渲染。

use docx_rs::{Docx, Paragraph, Run, Style, StyleType};
use std::io::Cursor;
use tracing::{debug, info};

use crate::error::DocumentError;
use crate::models::GeneratedDocument;

const TITLE_STYLE: &str = "Title";
const HEADING_STYLE: &str = "Heading1";

/// 文档中的一个段落
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// 顶层书名
    Title(String),
    /// 章节标题（一级标题）
    Heading(String),
    /// 普通正文段落
    Body(String),
}

/// 按输入顺序排列的段落：书名、然后每章一个标题加一个正文
pub fn layout<'a, I>(book_title: &str, chapters: I) -> Vec<Block>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut blocks = vec![Block::Title(book_title.to_string())];
    for (title, body) in chapters {
        blocks.push(Block::Heading(title.to_string()));
        blocks.push(Block::Body(body.to_string()));
    }
    blocks
}

/// 文档组装服务
#[derive(Debug, Default)]
pub struct DocumentService;

impl DocumentService {
    pub fn new() -> Self {
        Self
    }

    /// 组装文档
    ///
    /// 不校验标题或正文内容（空正文也照常写入）
    pub fn assemble<'a, I>(&self, book_title: &str, chapters: I) -> Result<GeneratedDocument, DocumentError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let blocks = layout(book_title, chapters);
        debug!("组装文档，共 {} 个段落", blocks.len());

        let bytes = render(&blocks)?;
        let document = GeneratedDocument::new(book_title, bytes);

        info!(
            "📄 文档已生成: {} ({} 字节)",
            document.file_name,
            document.bytes.len()
        );
        Ok(document)
    }
}

fn render(blocks: &[Block]) -> Result<Vec<u8>, DocumentError> {
    let mut docx = Docx::new()
        .add_style(
            Style::new(TITLE_STYLE, StyleType::Paragraph)
                .name("Title")
                .size(56)
                .bold(),
        )
        .add_style(
            Style::new(HEADING_STYLE, StyleType::Paragraph)
                .name("Heading 1")
                .size(32)
                .bold(),
        );

    for block in blocks {
        let paragraph = match block {
            Block::Title(text) => text_paragraph(text).style(TITLE_STYLE),
            Block::Heading(text) => text_paragraph(text).style(HEADING_STYLE),
            Block::Body(text) => text_paragraph(text),
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| DocumentError::PackFailed(Box::new(e)))?;

    Ok(buffer.into_inner())
}

fn text_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}
