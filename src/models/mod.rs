pub mod audience;
pub mod chapter;
pub mod document;
pub mod outline;

pub use audience::Audience;
pub use chapter::ChapterMap;
pub use document::{file_name_for, GeneratedDocument, DOCX_MEDIA_TYPE};
pub use outline::Outline;
