use common::config::Config;
use judge::Lexer;
use judge::highlight::render;
use judge::types::LexComparison;

fn flagged_texts(result: &LexComparison) -> Vec<&str> {
    result
        .rich_texts
        .iter()
        .filter(|rt| rt.colorful())
        .map(|rt| rt.text.as_str())
        .collect()
}

#[test]
fn accepts_reformatted_numeric_output() {
    let lexer = Lexer::new(6);
    let expected = "3\n1 2 3\n0.500000\n";
    let actual = "3\n\n001   +2 3\n0.5\n\n\n";

    let result = lexer.compare_text(expected, actual);
    assert!(result.matched, "unexpected flags: {:?}", flagged_texts(&result));
}

#[test]
fn rejects_wrong_answer_and_reports_lexeme() {
    let lexer = Lexer::new(6);
    let result = lexer.compare_text("YES\n10\n", "YES\n11\n");

    assert!(!result.matched);
    assert_eq!(flagged_texts(&result), vec!["10"]);
    assert_eq!(result.mismatch_count(), 1);
}

#[test]
fn float_answers_within_precision_are_accepted() {
    let config = Config {
        precision: 3,
        ..Config::default()
    };
    let lexer = Lexer::from_config(&config);

    assert!(lexer.compare_text("3.14159265", "3.14100000").matched);
    assert!(!lexer.compare_text("3.14159265", "3.15").matched);
}

#[test]
fn missing_blank_line_is_rendered() {
    colored::control::set_override(false);
    let lexer = Lexer::new(6);
    let result = lexer.compare_text("Case 1:\n\n42\n", "Case 1:\n42\n");
    let rendered = render(&result.rich_texts);
    colored::control::unset_override();

    assert!(!result.matched);
    assert_eq!(rendered, "Case 1:\n↵\n42\n");
}

#[test]
fn truncated_output_flags_the_rest() {
    let lexer = Lexer::new(6);
    let result = lexer.compare_text("1 2 3 4\n", "1 2");

    assert!(!result.matched);
    assert_eq!(flagged_texts(&result), vec!["3", "4", "\n"]);
    assert_eq!(result.mismatch_count(), 3);
    assert_eq!(result.rich_texts.len(), 5);
}

#[test]
fn comparison_result_is_json_serializable() {
    let result = Lexer::new(6).compare_text("-7", "7");
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["matched"], false);
    assert_eq!(value["rich_texts"][0]["text"], "-7");
    assert_eq!(value["rich_texts"][0]["mask"], serde_json::json!([true, false]));
}
