//! End-to-end pipeline behavior over the public API.

use markdiff::{
    compare, diff, normalize, render, source_text, target_text, CompareConfig, CompareResponse,
    EditOp, OpKind,
};

#[test]
fn cosmetic_whitespace_differences_render_without_annotations() {
    let markup = compare("Hello   World", "Hello World", &CompareConfig::default())
        .expect("small inputs");
    assert_eq!(markup.as_str(), "Hello World");
}

#[test]
fn word_replacement_is_annotated_once_per_side() {
    let markup = compare("The cat sat.\n\n\n", "The dog sat.", &CompareConfig::default())
        .expect("small inputs");
    assert_eq!(
        markup.as_str(),
        "The <span class=\"diff-delete\">cat</span>\
         <span class=\"diff-insert\">dog</span> sat."
    );
}

#[test]
fn empty_left_input_renders_entirely_as_insertion() {
    let markup = compare("", "New content", &CompareConfig::default()).expect("small inputs");
    assert_eq!(
        markup.as_str(),
        "<span class=\"diff-insert\">New content</span>"
    );
}

#[test]
fn empty_right_input_renders_entirely_as_deletion() {
    let markup = compare("Old content", "", &CompareConfig::default()).expect("small inputs");
    assert_eq!(
        markup.as_str(),
        "<span class=\"diff-delete\">Old content</span>"
    );
}

#[test]
fn identical_documents_render_verbatim() {
    let text = "Several lines\nof the same\ndocument content.";
    let markup = compare(text, text, &CompareConfig::default()).expect("small inputs");
    assert_eq!(markup.as_str(), text);
}

#[test]
fn normalization_is_idempotent_through_the_public_api() {
    let inputs = [
        "plain",
        "  noisy\u{00A0}\u{00AD} input \r\n\r\n lines \t",
        "\u{FEFF}bom then text",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(once.as_str()), once);
    }
}

#[test]
fn whitespace_substitutions_are_invisible_to_the_diff() {
    // Same text with NBSP/thin-space substitutions and CRLF endings.
    let original = "alpha beta\ngamma delta";
    let mangled = "alpha\u{00A0}beta\r\ngamma\u{2009}delta";
    assert_eq!(normalize(original), normalize(mangled));
    let ops = diff(&normalize(original), &normalize(mangled));
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].kind(), OpKind::Equal);
}

#[test]
fn edit_scripts_reconstruct_both_documents() {
    let pairs = [
        ("first document text", "second document text"),
        ("only left", ""),
        ("", "only right"),
        ("a shared line\nan old line", "a shared line\na new line"),
    ];
    for (a, b) in pairs {
        let (ca, cb) = (normalize(a), normalize(b));
        let ops = diff(&ca, &cb);
        assert_eq!(source_text(&ops), ca.as_str());
        assert_eq!(target_text(&ops), cb.as_str());
        for window in ops.windows(2) {
            assert_ne!(window[0].kind(), window[1].kind());
        }
    }
}

#[test]
fn whitespace_only_ops_are_suppressed_in_markup() {
    let ops = vec![
        EditOp::Equal("before".into()),
        EditOp::Delete(" \n\t ".into()),
        EditOp::Insert("   ".into()),
        EditOp::Equal("after".into()),
    ];
    assert_eq!(render(&ops).as_str(), "beforeafter");
}

#[test]
fn markup_is_injection_safe() {
    let markup = compare(
        "safe text",
        "safe <script>alert(1)</script> text",
        &CompareConfig::default(),
    )
    .expect("small inputs");
    assert!(!markup.as_str().contains("<script>"));
    assert!(markup.as_str().contains("&lt;script&gt;"));
}

#[test]
fn response_contract_round_trips_as_json() {
    let markup = compare("The cat sat.", "The dog sat.", &CompareConfig::default())
        .expect("small inputs");
    let response = CompareResponse::success("old.pdf", "new.docx", markup);
    let json = serde_json::to_string(&response).expect("serialize");
    let back: CompareResponse = serde_json::from_str(&json).expect("deserialize");
    assert!(back.success);
    assert_eq!(back.file1_name.as_deref(), Some("old.pdf"));
    assert_eq!(back.file2_name.as_deref(), Some("new.docx"));
    assert!(back.diff_html.expect("diff present").contains("diff-insert"));
    assert_eq!(back.error, None);
}

#[test]
fn comparisons_are_independent_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let left = format!("document number {i} left side");
                let right = format!("document number {i} right side");
                compare(&left, &right, &CompareConfig::default()).expect("small inputs")
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let markup = handle.join().expect("no panic");
        assert!(markup.as_str().contains(&format!("document number {i}")));
    }
}
