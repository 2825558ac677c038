use vigil_core::{create_reviewer_config, get_config, ReviewerOptions, SupportedLanguage};
use vigil_review::prompt::create_analysis_prompt;

#[test]
fn every_preset_focus_reaches_the_prompt() {
    for preset in ["quick", "thorough", "security", "performance"] {
        let config = get_config(preset);
        let prompt =
            create_analysis_prompt("let x = 1;", "a.rs", &config.focus, SupportedLanguage::Rust);
        assert!(
            prompt.contains(&format!("with emphasis on: {}", config.focus)),
            "focus for preset {preset} missing from prompt"
        );
    }
}

#[test]
fn overridden_focus_replaces_the_preset_focus_in_the_prompt() {
    let options = ReviewerOptions {
        focus: Some("panic safety".into()),
        ..Default::default()
    };
    let config = create_reviewer_config("security", &options);
    let prompt =
        create_analysis_prompt("let x = 1;", "a.rs", &config.focus, SupportedLanguage::Rust);

    assert!(prompt.contains("with emphasis on: panic safety"));
    assert!(!prompt.contains("security vulnerabilities and input validation"));
}

#[test]
fn detected_language_labels_the_prompt_fence() {
    let cases = [
        ("a.js", "```javascript"),
        ("a.py", "```python"),
        ("a.go", "```go"),
        ("a.unknown-ext", "```unknown"),
    ];
    for (filename, fence) in cases {
        let language = SupportedLanguage::from_filename(filename);
        let config = get_config("quick");
        let prompt = create_analysis_prompt("x", filename, &config.focus, language);
        assert!(prompt.contains(fence), "{filename} should produce {fence}");
    }
}
