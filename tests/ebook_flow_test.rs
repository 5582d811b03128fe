mod common;

use common::{ScriptedGenerator, StaticSearch};
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use ebook_writer::error::{AppError, LlmError, SessionError};
use ebook_writer::{Audience, Config, EbookFlow, SessionPhase};
use serde_json::json;
use std::sync::Arc;

const OUTLINE: &str = "Introduction\nChapter 1: Waking Up\nChapter 2: Rituals";

fn flow_with(generator: Arc<ScriptedGenerator>, config: &Config) -> EbookFlow {
    EbookFlow::with_clients(
        config,
        generator,
        Arc::new(StaticSearch(Some(json!({"popularity_score": 12})))),
        "Mindful Mornings",
        Audience::GeneralReaders,
    )
}

/// 读回 docx 中每个段落的 (样式, 文本)
fn paragraphs(bytes: &[u8]) -> Vec<(Option<String>, String)> {
    let docx = docx_rs::read_docx(bytes).unwrap();
    docx.document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => {
                let text = p
                    .children
                    .iter()
                    .filter_map(|pc| match pc {
                        ParagraphChild::Run(run) => Some(
                            run.children
                                .iter()
                                .filter_map(|rc| match rc {
                                    RunChild::Text(t) => Some(t.text.clone()),
                                    _ => None,
                                })
                                .collect::<String>(),
                        ),
                        _ => None,
                    })
                    .collect::<String>();
                let style = p.property.style.as_ref().map(|s| s.val.clone());
                Some((style, text))
            }
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_end_to_end_mindful_mornings() {
    let generator = Arc::new(ScriptedGenerator::new(OUTLINE));
    let mut flow = flow_with(generator.clone(), &Config::default());
    assert_eq!(flow.phase(), SessionPhase::Idle);

    assert_eq!(flow.check_popularity().await, Some(12.0));
    assert_eq!(flow.phase(), SessionPhase::Idle);

    let titles = flow.generate_outline().await.unwrap().titles().to_vec();
    assert_eq!(
        titles,
        ["Introduction", "Chapter 1: Waking Up", "Chapter 2: Rituals"]
    );
    assert_eq!(flow.phase(), SessionPhase::OutlineReady);

    for title in &titles {
        tokio_test::assert_err!(flow.assemble_document());
        let body = flow.generate_chapter(title).await.unwrap();
        assert_eq!(body, format!("Body of {}", title));
    }
    assert_eq!(flow.phase(), SessionPhase::Complete);

    let document = tokio_test::assert_ok!(flow.assemble_document());
    assert_eq!(document.file_name, "Mindful Mornings.docx");

    let paragraphs = paragraphs(&document.bytes);
    let texts: Vec<&str> = paragraphs.iter().map(|(_, t)| t.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Mindful Mornings",
            "Introduction",
            "Body of Introduction",
            "Chapter 1: Waking Up",
            "Body of Chapter 1: Waking Up",
            "Chapter 2: Rituals",
            "Body of Chapter 2: Rituals",
        ]
    );

    let headings = paragraphs
        .iter()
        .filter(|(style, _)| style.as_deref() == Some("Heading1"))
        .count();
    let title_headings = paragraphs
        .iter()
        .filter(|(style, _)| style.as_deref() == Some("Title"))
        .count();
    assert_eq!(title_headings, 1);
    assert_eq!(headings, 3);
}

#[tokio::test]
async fn test_chapters_are_independent_by_default() {
    let generator = Arc::new(ScriptedGenerator::new(OUTLINE));
    let mut flow = flow_with(generator.clone(), &Config::default());
    flow.generate_outline().await.unwrap();
    flow.generate_remaining().await.unwrap();

    let requests = generator.requests();
    assert_eq!(requests.len(), 4);
    assert!(requests
        .iter()
        .all(|r| !r.user_message.contains("Consider the previous content")));
}

#[tokio::test]
async fn test_chained_chapters_carry_previous_body() {
    let generator = Arc::new(ScriptedGenerator::new(OUTLINE));
    let config = Config {
        chain_chapters: true,
        ..Config::default()
    };
    let mut flow = flow_with(generator.clone(), &config);
    flow.generate_outline().await.unwrap();
    assert_eq!(flow.generate_remaining().await.unwrap(), 3);

    let requests = generator.requests();
    assert!(!requests[1].user_message.contains("Consider the previous content"));
    assert!(requests[2]
        .user_message
        .ends_with("Consider the previous content: Body of Introduction..."));
}

#[tokio::test]
async fn test_regenerating_a_chapter_overwrites() {
    let generator = Arc::new(ScriptedGenerator::new("Only Chapter"));
    let mut flow = flow_with(generator.clone(), &Config::default());
    flow.generate_outline().await.unwrap();

    flow.generate_chapter("Only Chapter").await.unwrap();
    flow.generate_chapter("Only Chapter").await.unwrap();

    assert_eq!(flow.session().chapters().len(), 1);
    assert_eq!(generator.requests().len(), 3);
}

#[tokio::test]
async fn test_failed_generation_leaves_session_untouched() {
    let generator = Arc::new(ScriptedGenerator::new(OUTLINE));
    let mut flow = flow_with(generator.clone(), &Config::default());
    flow.generate_outline().await.unwrap();
    flow.generate_chapter("Introduction").await.unwrap();

    generator.set_failing(true);
    let err = flow.generate_chapter("Chapter 1: Waking Up").await.unwrap_err();
    assert!(matches!(err, AppError::Llm(LlmError::ApiCallFailed { .. })));
    assert!(flow.generate_outline().await.is_err());

    assert_eq!(flow.session().chapters().len(), 1);
    assert_eq!(flow.session().candidate_titles().len(), 3);
    assert_eq!(flow.phase(), SessionPhase::ChaptersInProgress);

    generator.set_failing(false);
    flow.generate_chapter("Chapter 1: Waking Up").await.unwrap();
    assert_eq!(flow.session().chapters().len(), 2);
}

#[tokio::test]
async fn test_empty_outline_is_reported() {
    let generator = Arc::new(ScriptedGenerator::new("\n   \n"));
    let mut flow = flow_with(generator, &Config::default());

    let err = flow.generate_outline().await.unwrap_err();
    assert!(matches!(err, AppError::Session(SessionError::EmptyOutline)));
    assert_eq!(flow.phase(), SessionPhase::Idle);
}

#[tokio::test]
async fn test_outline_regeneration_purges_stale_chapters() {
    let generator = Arc::new(ScriptedGenerator::new(OUTLINE));
    let mut flow = flow_with(generator.clone(), &Config::default());
    flow.generate_outline().await.unwrap();
    flow.generate_remaining().await.unwrap();
    assert_eq!(flow.phase(), SessionPhase::Complete);

    generator.set_outline("Introduction\nChapter 1: New Dawn");
    flow.generate_outline().await.unwrap();

    let chapters = flow.session().chapters();
    assert_eq!(chapters.len(), 1);
    assert!(chapters.contains("Introduction"));
    assert_eq!(flow.phase(), SessionPhase::ChaptersInProgress);
}

#[tokio::test]
async fn test_unknown_chapter_is_rejected_without_calling_llm() {
    let generator = Arc::new(ScriptedGenerator::new(OUTLINE));
    let mut flow = flow_with(generator.clone(), &Config::default());
    flow.generate_outline().await.unwrap();

    let err = flow.generate_chapter("Appendix").await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Session(SessionError::UnknownChapter { .. })
    ));
    assert_eq!(generator.requests().len(), 1);
}

#[tokio::test]
async fn test_popularity_unknown_when_search_fails() {
    let flow = EbookFlow::with_clients(
        &Config::default(),
        Arc::new(ScriptedGenerator::new(OUTLINE)),
        Arc::new(StaticSearch(None)),
        "Mindful Mornings",
        Audience::Beginners,
    );
    assert_eq!(flow.check_popularity().await, None);
}

#[tokio::test]
async fn test_repeated_outline_line_is_written_once() {
    let generator = Arc::new(ScriptedGenerator::new(
        "Intro\nKey Takeaways\nChapter 1\nKey Takeaways",
    ));
    let mut flow = flow_with(generator.clone(), &Config::default());
    flow.generate_outline().await.unwrap();
    assert_eq!(flow.session().candidate_titles().len(), 4);

    assert_eq!(flow.generate_remaining().await.unwrap(), 3);
    assert_eq!(generator.requests().len(), 4);
    assert_eq!(flow.session().chapters().len(), 3);
    assert_eq!(flow.session().progress(), (3, 3));
    assert_eq!(flow.phase(), SessionPhase::Complete);

    let document = flow.assemble_document().unwrap();
    let headings = paragraphs(&document.bytes)
        .into_iter()
        .filter(|(style, _)| style.as_deref() == Some("Heading1"))
        .map(|(_, text)| text)
        .collect::<Vec<_>>();
    assert_eq!(headings, ["Intro", "Key Takeaways", "Chapter 1"]);
}
