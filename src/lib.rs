//! # eBook Writer
//!
//! 一个用 LLM 辅助起草电子书的终端工具：查询主题热度、生成大纲、逐章写作、导出 Word 文档
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 只封装外部 API 调用，不解释业务含义
//! - `SearchClient` - 热度搜索接口（`TopicSearch`）
//! - `LlmClient` - OpenAI 兼容的聊天接口（`TextGenerator`）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心会话
//! - `PopularityService` / `OutlineService` / `ChapterService` / `DocumentService`
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 会话状态和写书流程
//! - `BookSession` - 显式的会话状态（主题、读者、大纲、章节）
//! - `EbookFlow` - 每个用户动作一个处理函数
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 终端交互和文件导出
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{GenerationRequest, TextGenerator, TopicSearch};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Audience, GeneratedDocument, Outline};
pub use orchestrator::App;
pub use workflow::{BookSession, EbookFlow, SessionPhase};
