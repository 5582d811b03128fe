//! 交互式应用 - 编排层
//!
//! 负责终端交互：输入主题、选择读者、按菜单触发动作、导出文件。
//! 每个动作的错误都在这里展示，然后回到菜单，不会终止会话。

use inquire::{InquireError, Select, Text};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Audience, GeneratedDocument};
use crate::services::popularity_service;
use crate::utils::logging::{log_startup, print_session_summary};
use crate::workflow::{BookSession, EbookFlow};

/// 菜单动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CheckPopularity,
    GenerateOutline,
    ShowOutline,
    WriteChapter { title: String, done: bool },
    WriteRemaining { missing: usize },
    Export,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::CheckPopularity => write!(f, "🔍 检查主题热度"),
            Action::GenerateOutline => write!(f, "📝 生成大纲"),
            Action::ShowOutline => write!(f, "📋 查看大纲"),
            Action::WriteChapter { title, done } => {
                let mark = if *done { "✓" } else { "○" };
                write!(f, "{} 生成 {}", mark, title)
            }
            Action::WriteRemaining { missing } => write!(f, "✍️ 生成剩余 {} 章", missing),
            Action::Export => write!(f, "📄 导出 Word 文档"),
            Action::Quit => write!(f, "🚪 退出"),
        }
    }
}

/// 根据会话状态构建菜单
///
/// 导出动作只在所有章节完成后出现
pub fn menu(session: &BookSession) -> Vec<Action> {
    let mut actions = vec![Action::CheckPopularity, Action::GenerateOutline];

    if session.outline().is_some() {
        actions.push(Action::ShowOutline);
        for title in session.distinct_titles() {
            actions.push(Action::WriteChapter {
                title: title.to_string(),
                done: session.chapters().contains(title),
            });
        }

        let missing = session.missing_chapters();
        if missing > 1 {
            actions.push(Action::WriteRemaining { missing });
        }
        if session.is_complete() {
            actions.push(Action::Export);
        }
    }

    actions.push(Action::Quit);
    actions
}

/// 把文档写入输出目录，返回完整路径
pub async fn save_document(output_dir: &Path, document: &GeneratedDocument) -> AppResult<PathBuf> {
    tokio::fs::create_dir_all(output_dir)
        .await
        .map_err(|e| AppError::io(output_dir.display().to_string(), e))?;

    let path = output_dir.join(&document.file_name);
    tokio::fs::write(&path, &document.bytes)
        .await
        .map_err(|e| AppError::io(path.display().to_string(), e))?;

    Ok(path)
}

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);
        Self { config }
    }

    /// 运行交互主循环
    pub async fn run(&self) -> AppResult<()> {
        println!("AI eBook Writer");
        println!("Generate and publish your eBook with AI-powered assistance!\n");

        let topic = match Text::new("请输入书的主题/创意:").prompt() {
            Ok(topic) => topic,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(())
            }
            Err(e) => return Err(e.into()),
        };
        let audience = match Select::new("选择目标读者:", Audience::ALL.to_vec()).prompt() {
            Ok(audience) => audience,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(())
            }
            Err(e) => return Err(e.into()),
        };

        let mut flow = EbookFlow::new(&self.config, topic, audience);
        let mut exported: Option<String> = None;

        loop {
            let (done, total) = flow.session().progress();
            let progress = format!("请选择操作 (章节 {}/{})", done, total);

            let action = match Select::new(&progress, menu(flow.session()))
                .with_page_size(15)
                .prompt()
            {
                Ok(action) => action,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
                Err(e) => return Err(e.into()),
            };

            if action == Action::Quit {
                break;
            }

            match self.handle(&mut flow, action).await {
                Ok(Some(path)) => exported = Some(path),
                Ok(None) => {}
                Err(e) => {
                    error!("❌ 操作失败: {}", e);
                    println!("⚠️ {}（可以重试）\n", e);
                }
            }
        }

        let (done, total) = flow.session().progress();
        print_session_summary(done, total, exported.as_deref());
        Ok(())
    }

    /// 处理单个动作；导出成功时返回文件路径
    async fn handle(&self, flow: &mut EbookFlow, action: Action) -> AppResult<Option<String>> {
        match action {
            Action::CheckPopularity => {
                println!("⏳ 正在查询热度...");
                let score = flow.check_popularity().await;
                println!("{}\n", popularity_service::describe(score));
            }
            Action::GenerateOutline => {
                println!("⏳ 正在生成大纲，请稍候...");
                let outline = flow.generate_outline().await?;
                println!("## Suggested Outline:\n{}\n", outline.raw());
            }
            Action::ShowOutline => {
                if let Some(outline) = flow.session().outline() {
                    println!("## Suggested Outline:\n{}\n", outline.raw());
                }
            }
            Action::WriteChapter { title, .. } => {
                println!("⏳ 正在生成 {} ...", title);
                let body = flow.generate_chapter(&title).await?;
                println!("### {}\n{}\n", title, body);
            }
            Action::WriteRemaining { .. } => {
                let written = flow.generate_remaining().await?;
                println!("✓ 新生成 {} 章\n", written);
            }
            Action::Export => {
                let document = flow.assemble_document()?;
                let path = save_document(Path::new(&self.config.output_dir), &document).await?;
                let path = path.display().to_string();
                info!("📄 已导出 ({}): {}", document.media_type(), path);
                println!("📥 eBook 已保存: {}\n", path);
                return Ok(Some(path));
            }
            Action::Quit => {}
        }
        Ok(None)
    }
}
