use datastory::config::Config;
use datastory::insights::InsightsGenerator;
use datastory::report::analyze;
use datastory::table::{Column, Table};
use datastory::Error;

fn small_table() -> Table {
    let mut table = Table::new();
    table
        .add_column(Column::numeric("x", vec![Some(1.0), Some(2.0), Some(3.0)]))
        .unwrap();
    table
}

fn unreachable_config() -> Config {
    Config {
        // Nothing listens here; requests fail fast with a refused
        // connection instead of waiting out the timeout.
        ollama_base_url: "http://127.0.0.1:1".to_string(),
        ..Config::default()
    }
}

#[test]
fn test_service_failure_is_an_explicit_error() {
    let generator = InsightsGenerator::new(&unreachable_config()).unwrap();
    let report = analyze(&small_table());

    let result = generator.generate_data_story(&report);
    match result {
        Err(Error::Insight(reason)) => assert!(reason.contains("request failed")),
        other => panic!("expected Insight error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_generate_all_degrades_to_inline_messages() {
    let generator = InsightsGenerator::new(&unreachable_config()).unwrap();
    let report = analyze(&small_table());

    // Service failure must not panic or abort; each slot carries a
    // descriptive message instead of generated text.
    let insights = generator.generate_all(&report);
    for text in [
        &insights.data_story,
        &insights.visualization_suggestions,
        &insights.next_steps,
    ] {
        assert!(text.contains("error generating insights"));
    }
}

#[test]
fn test_base_url_trailing_slash_is_tolerated() {
    let config = Config {
        ollama_base_url: "http://127.0.0.1:1/".to_string(),
        ..Config::default()
    };
    // Construction succeeds; the trailing slash is normalized away.
    assert!(InsightsGenerator::new(&config).is_ok());
}
