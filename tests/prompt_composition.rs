//! End-to-end prompt assembly checks through the public API: form values
//! in, the exact prompt text the wire request would carry out.

use copyforge_core::prompt;
use copyforge_core::{
    BrandProfile, ContentRequest, Framework, OutputLanguage, Pillar, Tone,
};

fn request() -> ContentRequest {
    ContentRequest {
        topic: "Wireless Earbuds".to_string(),
        description: "Launch post for the new model".to_string(),
        framework: Framework::Aida,
        pillar: Pillar::Promotional,
        language: OutputLanguage::English,
        tone: Tone::Friendly,
        target_audience: None,
        brand: None,
    }
}

fn soundly() -> BrandProfile {
    BrandProfile {
        id: "soundly".to_string(),
        name: "Soundly".to_string(),
        industry: "Consumer electronics".to_string(),
        description: "Audio gear for everyday listeners".to_string(),
        default_tone: Tone::Casual,
        default_audience: "Commuters aged 20-35".to_string(),
    }
}

#[test]
fn prompt_sections_appear_in_order() {
    let built = prompt::build(&request());

    let brand = built.prompt.find("== Brand identity ==").unwrap();
    let form = built.prompt.find("== Content request ==").unwrap();
    let framework = built.prompt.find(Framework::Aida.instruction()).unwrap();
    let pillar = built.prompt.find(Pillar::Promotional.instruction()).unwrap();
    let language = built
        .prompt
        .find(OutputLanguage::English.instruction())
        .unwrap();

    assert!(brand < form);
    assert!(form < framework);
    assert!(framework < pillar);
    assert!(pillar < language);
}

#[test]
fn form_values_surface_verbatim() {
    let built = prompt::build(&request());

    assert!(built.prompt.contains("Topic: Wireless Earbuds\n"));
    assert!(built.prompt.contains("Details: Launch post for the new model\n"));
    assert!(built.prompt.contains("Target audience: General Audience\n"));
    assert!(built.prompt.contains("Tone of voice: Friendly\n"));
    assert!(built.prompt.contains("Content pillar: Promotional\n"));
}

#[test]
fn brand_identity_feeds_the_brand_block() {
    let mut req = request();
    req.brand = Some(soundly());
    let built = prompt::build(&req);

    assert!(built.prompt.contains("Brand: Soundly\n"));
    assert!(built.prompt.contains("Industry: Consumer electronics\n"));
    assert!(built
        .prompt
        .contains("About the brand: Audio gear for everyday listeners\n"));
    assert!(built.prompt.contains("House audience: Commuters aged 20-35\n"));
    assert!(built.prompt.contains("Target audience: Commuters aged 20-35\n"));
}

#[test]
fn switching_language_swaps_only_the_language_fragment() {
    let mut req = request();
    req.language = OutputLanguage::Vietnamese;
    let built = prompt::build(&req);

    assert!(built.prompt.contains(OutputLanguage::Vietnamese.instruction()));
    assert!(!built.prompt.contains(OutputLanguage::English.instruction()));
    assert!(!built.prompt.contains(OutputLanguage::Spanish.instruction()));
    // Field labels stay in English regardless of output language.
    assert!(built.prompt.contains("Tone of voice: Friendly\n"));
}

#[test]
fn every_framework_round_trips_through_its_id() {
    for framework in Framework::ALL {
        let parsed: Framework = framework.as_str().parse().unwrap();
        assert_eq!(parsed, framework);

        let mut req = request();
        req.framework = framework;
        let built = prompt::build(&req);
        assert!(built.prompt.contains(framework.instruction()));
    }
}
