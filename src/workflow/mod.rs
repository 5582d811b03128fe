pub mod book_session;
pub mod ebook_flow;

pub use book_session::{BookSession, SessionPhase};
pub use ebook_flow::EbookFlow;
