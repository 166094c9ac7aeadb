//! Session lifecycle driven end to end against a scripted generator,
//! covering the paths the interactive loop exercises: submit, complete,
//! overlapping submissions, late responses, and the copy action.

use async_trait::async_trait;
use chrono::Utc;
use copyforge_core::{
    BrandProfile, ContentRequest, Framework, GenerateError, GeneratedResponse, OutputLanguage,
    Phase, Pillar, RequestDefaults, Session, SessionError, TextGenerator, Tone,
};
use std::sync::Mutex;
use std::time::Instant;

/// Generator that replays a fixed script of outcomes.
struct ScriptedGenerator {
    script: Mutex<Vec<Result<String, GenerateError>>>,
}

impl ScriptedGenerator {
    fn new(script: Vec<Result<String, GenerateError>>) -> Self {
        Self {
            script: Mutex::new(script),
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        request: &ContentRequest,
    ) -> Result<GeneratedResponse, GenerateError> {
        let next = self
            .script
            .lock()
            .unwrap()
            .pop()
            .expect("script exhausted");
        next.map(|content| GeneratedResponse {
            content,
            framework: request.framework,
            timestamp: Utc::now(),
        })
    }
}

fn session() -> Session {
    Session::new(RequestDefaults::default())
}

fn fill_form(session: &mut Session) {
    session.set_topic("Wireless Earbuds");
    session.set_description("Launch post for the new model");
    session.set_framework(Framework::Pas);
    session.set_pillar(Pillar::Promotional);
    session.set_language(OutputLanguage::English);
    session.set_tone(Tone::Witty);
}

#[tokio::test]
async fn submit_generate_complete_happy_path() {
    let generator = ScriptedGenerator::new(vec![Ok("Fresh earbud copy".to_string())]);
    let mut session = session();
    fill_form(&mut session);

    let id = session.begin_submit().unwrap();
    assert_eq!(session.phase(), Phase::Submitting { request_id: id });

    let result = generator.generate(session.request()).await;
    assert!(session.complete(id, result));

    assert_eq!(session.phase(), Phase::Idle);
    let output = session.output().unwrap();
    assert_eq!(output.content, "Fresh earbud copy");
    assert_eq!(output.framework, Framework::Pas);
}

#[tokio::test]
async fn failure_keeps_form_and_reports_generic_error() {
    let generator = ScriptedGenerator::new(vec![Err(GenerateError::Api {
        status: 429,
        message: "quota exceeded".to_string(),
    })]);
    let mut session = session();
    fill_form(&mut session);

    let id = session.begin_submit().unwrap();
    let result = generator.generate(session.request()).await;
    session.complete(id, result);

    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.output().is_none());
    // The surfaced message never leaks provider details.
    let error = session.last_error().unwrap();
    assert!(!error.contains("quota"));
    assert!(!error.contains("429"));
    // The form survives for a retry.
    assert_eq!(session.request().topic, "Wireless Earbuds");
}

#[tokio::test]
async fn second_submit_while_in_flight_is_refused() {
    let mut session = session();
    fill_form(&mut session);

    let id = session.begin_submit().unwrap();
    assert_eq!(session.begin_submit(), Err(SessionError::RequestInFlight));

    // The in-flight request is unaffected by the refused attempt.
    assert!(session.complete(
        id,
        Ok(GeneratedResponse {
            content: "copy".to_string(),
            framework: Framework::Pas,
            timestamp: Utc::now(),
        })
    ));
    assert_eq!(session.output().unwrap().content, "copy");
}

#[tokio::test]
async fn late_response_for_an_old_request_is_dropped() {
    let generator = ScriptedGenerator::new(vec![
        Ok("second response".to_string()),
        Ok("first response".to_string()),
    ]);
    let mut session = session();
    fill_form(&mut session);

    let first = session.begin_submit().unwrap();
    let first_result = generator.generate(session.request()).await;
    assert!(session.complete(first, first_result));

    let second = session.begin_submit().unwrap();
    let second_result = generator.generate(session.request()).await;

    // The first request's response arrives again after the second began.
    let duplicate = Ok(GeneratedResponse {
        content: "first response".to_string(),
        framework: Framework::Pas,
        timestamp: Utc::now(),
    });
    assert!(!session.complete(first, duplicate));
    assert!(session.output().is_none());

    assert!(session.complete(second, second_result));
    assert_eq!(session.output().unwrap().content, "second response");
}

#[tokio::test]
async fn copy_after_generation_exposes_exact_content() {
    let generator = ScriptedGenerator::new(vec![Ok("Post this today!".to_string())]);
    let mut session = session();
    fill_form(&mut session);

    let id = session.begin_submit().unwrap();
    let result = generator.generate(session.request()).await;
    session.complete(id, result);

    let now = Instant::now();
    assert_eq!(session.copy(now).unwrap(), "Post this today!");
    assert_eq!(session.clipboard(), Some("Post this today!"));
    assert!(session.copy_indicator_visible(now));
}

#[tokio::test]
async fn brand_defaults_flow_into_generated_request() {
    let generator = ScriptedGenerator::new(vec![Ok("Branded copy".to_string())]);
    let mut session = session();
    fill_form(&mut session);
    session.add_brand(BrandProfile {
        id: "soundly".to_string(),
        name: "Soundly".to_string(),
        industry: "Consumer electronics".to_string(),
        description: "Audio gear for everyday listeners".to_string(),
        default_tone: Tone::Casual,
        default_audience: "Commuters aged 20-35".to_string(),
    });

    assert_eq!(session.request().tone, Tone::Casual);
    assert_eq!(
        session.request().target_audience.as_deref(),
        Some("Commuters aged 20-35")
    );

    let id = session.begin_submit().unwrap();
    let result = generator.generate(session.request()).await;
    assert!(session.complete(id, result));
    assert_eq!(session.output().unwrap().content, "Branded copy");
}
