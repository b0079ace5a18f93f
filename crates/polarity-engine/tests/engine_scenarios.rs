//! End-to-end engine tests
//!
//! Engines are built from YAML configuration and word files on disk, the
//! same way the CLI builds them.

use polarity_core::{Error, Polarity, SentimentVector};
use polarity_engine::prelude::*;
use polarity_engine::{Analysis, ComposerKind, NativeComposer};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_words(dir: &Path, name: &str, words: &[&str]) -> String {
    let path = dir.join(name);
    fs::write(&path, words.join("\n")).unwrap();
    path.display().to_string()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("polarity_engine=debug")
        .with_test_writer()
        .try_init();
}

/// Build an engine over a custom wordset written to a temp directory
fn engine(model: &str, positive: &[&str], negative: &[&str]) -> (TempDir, SentimentEngine) {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let positive = write_words(dir.path(), "positive.txt", positive);
    let negative = write_words(dir.path(), "negative.txt", negative);

    let yaml = format!(
        "model: \"{model}\"\nwordset: custom\npositive_words: {positive}\nnegative_words: {negative}\n"
    );
    let config = EngineConfig::from_yaml(&yaml).unwrap();
    let engine = SentimentEngine::from_config(&config).unwrap();
    (dir, engine)
}

fn only_clause(analysis: &Analysis) -> &polarity_engine::ClauseAnalysis {
    assert_eq!(analysis.sentences.len(), 1);
    assert_eq!(analysis.sentences[0].clauses.len(), 1);
    &analysis.sentences[0].clauses[0]
}

#[test]
fn test_not_happy_at_all() {
    let (_dir, engine) = engine("1.0", &["happy"], &[]);
    assert_eq!(engine.table_set(), Some(TableSet::Classic));

    let analysis = engine.analyze("I am not happy at all.");
    assert_eq!(analysis.normalized, "i am not happy at-all.");

    let clause = only_clause(&analysis);
    assert_eq!(clause.text, "i am not happy at-all");
    assert_eq!(clause.breakdown.positive_count, 1);
    assert_eq!(clause.breakdown.negative_count, 0);
    assert_eq!(clause.breakdown.negation_count, 1);
    // "at-all" follows "happy", so the multiplier is not flipped
    assert_eq!(clause.breakdown.quantifier_multiplier, 1.25);
    assert_eq!(
        clause.vector,
        SentimentVector::new(1.0, Polarity::Negative, 1.25)
    );

    assert!(analysis.score < 0.0);
    assert_eq!(analysis.score, 0.745 * (-1.25f64).atan());
}

#[test]
fn test_really_happy_and_love_it() {
    for model in ["1.0", "2.0"] {
        let (_dir, engine) = engine(model, &["happy", "love"], &[]);
        let analysis = engine.analyze("I am really happy and I love it.");

        let sentence = &analysis.sentences[0];
        assert_eq!(sentence.clauses.len(), 2);
        assert_eq!(sentence.clauses[0].text, "i am really happy and");
        assert_eq!(sentence.clauses[1].text, "i love it");

        let first = sentence.clauses[0].scalar;
        let second = sentence.clauses[1].scalar;
        assert!(first > 0.0 && second > 0.0);
        assert!(analysis.score > first, "model {model}");
        assert!(analysis.score > second, "model {model}");
    }
}

#[test]
fn test_negated_multiplier_is_flipped() {
    let (_dir, engine) = engine("2.0", &["good"], &[]);
    let analysis = engine.analyze("It is not very good");

    let clause = only_clause(&analysis);
    // "very" (1.41) follows "not": 2 - 1.41
    assert!((clause.breakdown.quantifier_multiplier - 0.59).abs() < 1e-12);
    assert_eq!(clause.vector.polarity, Polarity::Negative);
}

#[test]
fn test_contractions_feed_negation() {
    let (_dir, engine) = engine("2.0", &["happy"], &[]);
    let analysis = engine.analyze("I don't think I'm happy");

    let clause = only_clause(&analysis);
    assert_eq!(clause.text, "i dont think im happy");
    assert_eq!(clause.breakdown.negation_count, 1);
    assert!(analysis.score < 0.0);
}

#[test]
fn test_double_negation_is_positive() {
    let (_dir, engine) = engine("2.0", &["happy"], &[]);
    let score = engine.evaluate("It is not that I am not happy");
    assert!(score > 0.0);
}

#[test]
fn test_standard_wordset_from_assets_dir() {
    let dir = TempDir::new().unwrap();
    let standard = dir.path().join("standard");
    fs::create_dir_all(&standard).unwrap();
    write_words(&standard, "positive_words.txt", &["bright", "cheerful"]);
    write_words(&standard, "negative_words.txt", &["gloomy"]);

    let config = EngineConfig {
        assets_dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let engine = SentimentEngine::from_config(&config).unwrap();

    assert_eq!(engine.lexicon().counts(), (2, 1));
    assert!(engine.evaluate("A bright and cheerful morning.") > 0.0);
    assert!(engine.evaluate("A gloomy evening.") < 0.0);
}

#[test]
fn test_missing_lexicon_file() {
    let dir = TempDir::new().unwrap();
    let config = EngineConfig {
        assets_dir: dir.path().to_path_buf(),
        ..Default::default()
    };

    let err = SentimentEngine::from_config(&config).unwrap_err();
    match err {
        Error::LexiconLoad { path, .. } => {
            assert!(path.ends_with("standard/positive_words.txt"));
        }
        other => panic!("expected lexicon load error, got {other:?}"),
    }
}

#[test]
fn test_invalid_configuration_is_rejected_eagerly() {
    let config = EngineConfig::from_yaml("wordset: custom").unwrap();
    assert!(matches!(
        SentimentEngine::from_config(&config),
        Err(Error::MissingCustomFiles)
    ));

    let config = EngineConfig::from_yaml("model: \"0.9\"").unwrap();
    assert!(matches!(
        SentimentEngine::from_config(&config),
        Err(Error::InvalidModel(_))
    ));
}

#[test]
fn test_conversation_score_gating() {
    let (_dir, v1) = engine("1.0", &["love"], &["hate"]);
    let err = v1.conversation_score(["I love it"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "the current model (1.0) does not support the requested functionality: \
         Conversation Score. Please upgrade your model to 2.0 or 3.0"
    );

    for model in ["2.0", "3.0"] {
        let (_dir, engine) = engine(model, &["love"], &["hate"]);
        let improving = engine
            .conversation_score(["I hate it", "I hate it less", "I love it"])
            .unwrap();
        let souring = engine
            .conversation_score(["I love it", "I love it less", "I hate it"])
            .unwrap();
        assert!(improving > 0.0);
        assert!(souring < 0.0);
    }
}

#[test]
fn test_gated_capabilities_by_model() {
    let (_dir, v1) = engine("1.0", &[], &[]);
    let (_dir3, v3) = engine("3.0", &[], &[]);

    for capability in [Capability::SarcasmDetection, Capability::EmotionDetection] {
        assert!(matches!(
            v1.require(capability),
            Err(Error::ModelNotSupported { .. })
        ));
        assert!(v3.require(capability).is_ok());
    }
}

#[test]
fn test_native_composer_end_to_end() {
    let dir = TempDir::new().unwrap();
    let positive = write_words(dir.path(), "positive.txt", &["happy", "love"]);
    let negative = write_words(dir.path(), "negative.txt", &["sad"]);

    let config = EngineConfig {
        wordset: "custom".to_string(),
        positive_words: Some(positive.into()),
        negative_words: Some(negative.into()),
        composer: ComposerKind::Native,
        ..Default::default()
    };
    let engine = SentimentEngine::from_config(&config).unwrap();

    let score = engine.evaluate("I am happy and I love it.");
    assert!(score > 0.0);
    assert!(score < NativeComposer.bound());
}

#[test]
fn test_analysis_serializes_to_json() {
    let (_dir, engine) = engine("2.0", &["happy"], &[]);
    let analysis = engine.analyze("So happy. Not happy!");

    let json = serde_json::to_value(&analysis).unwrap();
    assert_eq!(json["sentences"].as_array().unwrap().len(), 2);
    assert_eq!(json["sentences"][1]["clauses"][0]["vector"]["polarity"], "negative");
    assert!(json["score"].is_number());
}

#[test]
fn test_trajectory_threads_across_messages() {
    let (_dir, engine) = engine("2.0", &["love"], &["hate"]);

    let mut trajectory = None;
    for message in ["I love it.", "I hate it.", "I love it."] {
        trajectory = engine.evaluate_continuing(message, trajectory);
    }

    let threaded = trajectory.unwrap().score();
    let joined = engine.evaluate("I love it. I hate it. I love it.");
    assert_eq!(threaded, joined);
}

#[test]
fn test_shared_engine_across_threads() {
    let (_dir, engine) = engine("2.0", &["love"], &["hate"]);
    let engine = std::sync::Arc::new(engine);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                let text = if i % 2 == 0 { "I love it" } else { "I hate it" };
                engine.evaluate(text)
            })
        })
        .collect();

    let scores: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(scores[0] > 0.0 && scores[2] > 0.0);
    assert!(scores[1] < 0.0 && scores[3] < 0.0);
}

#[test]
fn test_bundled_wordsets_load() {
    let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets");

    let mut sizes = Vec::new();
    for wordset in ["standard", "extended"] {
        let config = EngineConfig {
            wordset: wordset.to_string(),
            assets_dir: assets.clone(),
            ..Default::default()
        };
        let engine = SentimentEngine::from_config(&config).unwrap();
        assert!(engine.evaluate("What a wonderful day.") > 0.0, "{wordset}");
        assert!(engine.evaluate("This is terrible.") < 0.0, "{wordset}");
        sizes.push(engine.lexicon().counts());
    }

    assert!(sizes[1].0 > sizes[0].0);
    assert!(sizes[1].1 > sizes[0].1);
}

#[test]
fn test_long_quantifier_run_stays_finite() {
    let (_dir, engine) = engine("2.0", &["happy"], &[]);

    let silent = engine.evaluate(&"very ".repeat(3000));
    assert_eq!(silent, 0.0);

    let saturated = engine.evaluate(&("completely ".repeat(100) + "happy"));
    assert!(saturated > 0.0);
    assert!(saturated < engine.composer().bound());

    let negated = engine.evaluate(&("completely ".repeat(3000) + "not happy"));
    assert!(negated < 0.0);
    assert!(negated > -engine.composer().bound());

    let score = engine
        .conversation_score([
            "very ".repeat(3000),
            "completely ".repeat(3000) + "happy",
        ])
        .unwrap();
    assert!(score.is_finite());
}
