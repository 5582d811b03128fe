//! 编排层（Orchestration Layer）
//!
//! 终端交互入口，把用户动作分发给 `workflow::EbookFlow`。
//!
//! ```text
//! orchestrator::App (终端交互 / 导出文件)
//!     ↓
//! workflow::EbookFlow (会话状态 + 流程)
//!     ↓
//! services (能力层：popularity / outline / chapter / document)
//!     ↓
//! clients (外部 API：search / llm)
//! ```

pub mod app;

pub use app::{menu, save_document, Action, App};
