pub mod chapter_service;
pub mod document_service;
pub mod outline_service;
pub mod popularity_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use chapter_service::ChapterService;
pub use document_service::DocumentService;
pub use outline_service::OutlineService;
pub use popularity_service::PopularityService;
