// tests/controller_test.rs
//
// Upload-and-render controller: file label, local gate, busy lifecycle and
// result rendering against a scripted transport.

mod test_utils;

use std::io;
use std::panic::{self, AssertUnwindSafe};

use test_utils::{replying, CountingView, ScriptedTransport};
use voicecheckr::cli::format_alerts;
use voicecheckr::{
    ClientConfig, DetectionMethod, HttpReply, SelectedFile, SubmitError, TransportError,
    UploadController, UploadForm, Verdict,
};

const HYBRID_FAKE: &str = r#"{
    "is_fake": true,
    "score": 0.8765,
    "confidence": 0.42,
    "method": "hybrid",
    "details": {"rule_score": 0.6, "ml_score": 0.9}
}"#;

fn wav() -> SelectedFile {
    SelectedFile::new("sample.wav", vec![0u8; 64])
}

fn controller<T: voicecheckr::Transport>(transport: T) -> UploadController<CountingView, T> {
    UploadController::new(CountingView::default(), transport, ClientConfig::default())
}

#[test]
fn test_file_label_follows_selection() {
    let mut c = controller(replying(200, HYBRID_FAKE));

    c.on_file_selected(Some(wav()));
    assert_eq!(c.view().page.file_label, "sample.wav");

    c.on_file_selected(None);
    assert_eq!(c.view().page.file_label, "Click to upload or drag and drop");
    assert!(c.form().file.is_none());
}

#[test]
fn test_submit_without_file_never_hits_network() {
    let transport = replying(200, HYBRID_FAKE);
    let mut c = controller(&transport);

    let err = c.submit().unwrap_err();
    assert!(matches!(err, SubmitError::NoFile));
    assert_eq!(transport.calls.get(), 0);
    assert_eq!(c.view().page.alerts, vec!["Please select an audio file"]);
    // Never went busy
    assert_eq!(c.view().disables, 0);
    assert!(c.view().page.is_idle());
}

#[test]
fn test_unsupported_extension_is_rejected_locally() {
    let transport = replying(200, HYBRID_FAKE);
    let mut c = controller(&transport);
    c.on_file_selected(Some(SelectedFile::new("notes.txt", b"hello".to_vec())));

    assert!(matches!(c.submit(), Err(SubmitError::UnsupportedType { .. })));
    assert_eq!(transport.calls.get(), 0);
    assert_eq!(
        c.view().page.alerts,
        vec!["Error: Invalid file type. Allowed: wav, mp3, flac, ogg, m4a"]
    );
}

#[test]
fn test_fake_result_is_rendered() {
    let transport = replying(200, HYBRID_FAKE);
    let mut c = controller(&transport);
    c.on_file_selected(Some(wav()));
    c.select_method(DetectionMethod::Hybrid);

    let result = c.submit().unwrap();
    assert_eq!(result.verdict, Verdict::Fake);
    assert_eq!(transport.calls.get(), 1);
    assert_eq!(transport.last_method.borrow().as_deref(), Some("hybrid"));
    assert_eq!(transport.last_file.borrow().as_deref(), Some("sample.wav"));

    let page = &c.view().page;
    assert!(page.result_visible);
    assert_eq!(page.result_icon, "🚨");
    assert_eq!(page.result_text, "FAKE DETECTED");
    assert_eq!(page.result_text_class, "result-text result-fake");
    assert_eq!(page.scroll_requests, 1);

    let details = page.result_details.as_ref().unwrap();
    assert_eq!(details.score_text, "87.65%");
    assert_eq!(details.bar_width, "87.65%");
    assert_eq!(details.bar_label, "87.7%");
    assert_eq!(details.row("Confidence").unwrap().value, "42.00%");
    assert_eq!(details.row("Rule-Based Score").unwrap().value, "60.00%");
    assert_eq!(details.row("ML-Based Score").unwrap().value, "90.00%");
    assert_eq!(details.row("Method Used").unwrap().value, "HYBRID");
}

#[test]
fn test_real_result_label() {
    let mut c = controller(replying(
        200,
        r#"{"is_fake": false, "score": 0.1, "confidence": 0.9, "method": "rule"}"#,
    ));
    c.on_file_selected(Some(wav()));
    c.submit().unwrap();

    let page = &c.view().page;
    assert_eq!(page.result_icon, "✅");
    assert_eq!(page.result_text, "REAL VOICE");
    assert_eq!(page.result_text_class, "result-text result-real");

    // Rule method adds no breakdown rows
    let details = page.result_details.as_ref().unwrap();
    assert!(details.row("Rule-Based Score").is_none());
    assert!(details.row("Logistic Regression").is_none());
    assert_eq!(details.row("Method Used").unwrap().value, "RULE");
}

#[test]
fn test_null_and_missing_flag_are_uncertain() {
    for body in [
        r#"{"is_fake": null, "score": 0.5, "confidence": 0.1, "method": "hybrid"}"#,
        r#"{"score": 0.5, "confidence": 0.1, "method": "hybrid"}"#,
    ] {
        let mut c = controller(replying(200, body));
        c.on_file_selected(Some(wav()));
        c.submit().unwrap();

        let page = &c.view().page;
        assert_eq!(page.result_icon, "❓");
        assert_eq!(page.result_text, "UNCERTAIN");
        assert_eq!(page.result_text_class, "result-text");
    }
}

#[test]
fn test_ml_breakdown_and_uppercased_tag() {
    let mut c = controller(replying(
        200,
        r#"{"is_fake": true, "score": 0.7, "confidence": 0.4, "method": "ml",
            "details": {"lr_score": 0.65, "svm_score": 0.75}}"#,
    ));
    c.on_file_selected(Some(wav()));
    c.select_method(DetectionMethod::Ml);
    c.submit().unwrap();

    let details = c.view().page.result_details.clone().unwrap();
    assert_eq!(details.row("Logistic Regression").unwrap().value, "65.00%");
    assert_eq!(details.row("SVM Score").unwrap().value, "75.00%");
    assert_eq!(details.row("Method Used").unwrap().value, "ML");
}

#[test]
fn test_unrecognised_tags_add_no_rows() {
    for (body, shown) in [
        (
            r#"{"is_fake": true, "score": 0.7, "confidence": 0.4, "method": "ml-based",
                "details": {"lr_score": 0.65, "svm_score": 0.75}}"#,
            "ML-BASED",
        ),
        (
            r#"{"is_fake": false, "score": 0.2, "confidence": 0.9, "method": "bayes",
                "details": {"rule_score": 0.1, "ml_score": 0.3}}"#,
            "BAYES",
        ),
    ] {
        let mut c = controller(replying(200, body));
        c.on_file_selected(Some(wav()));
        c.submit().unwrap();

        let details = c.view().page.result_details.clone().unwrap();
        let labels: Vec<_> = details.rows.iter().map(|row| row.label).collect();
        assert_eq!(labels, vec!["Confidence:", "Method Used:"]);
        assert_eq!(details.row("Method Used").unwrap().value, shown);
    }
}

#[test]
fn test_null_numbers_render_as_zero() {
    let mut c = controller(replying(
        200,
        r#"{"is_fake": null, "score": null, "confidence": null, "method": "hybrid"}"#,
    ));
    c.on_file_selected(Some(wav()));

    let result = c.submit().unwrap();
    assert_eq!(result.verdict, Verdict::Uncertain);

    let page = &c.view().page;
    assert!(page.alerts.is_empty());
    assert_eq!(page.result_icon, "❓");
    assert_eq!(page.result_text, "UNCERTAIN");
    assert_eq!(page.result_text_class, "result-text");

    let details = page.result_details.as_ref().unwrap();
    assert_eq!(details.score_text, "0.00%");
    assert_eq!(details.bar_width, "0%");
    assert_eq!(details.row("Confidence").unwrap().value, "0.00%");
}

#[test]
fn test_missing_numbers_render_as_nan() {
    let mut c = controller(replying(200, r#"{"is_fake": true, "method": "rule"}"#));
    c.on_file_selected(Some(wav()));
    c.submit().unwrap();

    let page = &c.view().page;
    assert!(page.alerts.is_empty());
    assert_eq!(page.result_text, "FAKE DETECTED");

    let details = page.result_details.as_ref().unwrap();
    assert_eq!(details.score_text, "NaN%");
    assert_eq!(details.row("Confidence").unwrap().value, "NaN%");
}

#[test]
fn test_server_error_is_alerted_without_rendering() {
    let mut c = controller(replying(400, r#"{"error": "bad file"}"#));
    c.on_file_selected(Some(wav()));

    match c.submit() {
        Err(SubmitError::Server { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "bad file");
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    let view = c.view();
    assert_eq!(view.page.alerts, vec!["Error: bad file"]);
    assert_eq!(view.alerts_while_busy, 1);
    assert!(!view.page.result_visible);
    assert!(view.page.result_details.is_none());
}

#[test]
fn test_page_alerts_print_as_received() {
    let mut c = UploadController::new(
        voicecheckr::PageState::new("Click to upload or drag and drop"),
        replying(400, r#"{"error": "bad file"}"#),
        ClientConfig::default(),
    );
    c.on_file_selected(Some(wav()));

    let err = c.submit().unwrap_err();
    assert_eq!(format_alerts(c.view()), "Error: bad file");
    assert_eq!(format_alerts(c.view()), err.to_string());
}

#[test]
fn test_server_error_without_message_uses_fallback() {
    let mut c = controller(replying(500, "{}"));
    c.on_file_selected(Some(wav()));
    assert!(c.submit().is_err());
    assert_eq!(c.view().page.alerts, vec!["Error: Unknown error"]);
}

#[test]
fn test_previous_result_hidden_on_new_submission() {
    let ok = replying(200, HYBRID_FAKE);
    let mut c = controller(&ok);
    c.on_file_selected(Some(wav()));
    c.submit().unwrap();
    assert!(c.view().page.result_visible);

    let failing = replying(400, r#"{"error": "bad file"}"#);
    let view = c.into_view();
    let mut c = UploadController::new(view, &failing, ClientConfig::default());
    c.on_file_selected(Some(wav()));
    assert!(c.submit().is_err());
    assert!(!c.view().page.result_visible);
}

#[test]
fn test_idle_restored_exactly_once_on_every_path() {
    let success = replying(200, HYBRID_FAKE);
    let server_error = replying(422, r#"{"error": "bad file"}"#);
    let not_json = replying(502, "<html>Bad Gateway</html>");
    let refused = ScriptedTransport::new(|_: &UploadForm| {
        Err(TransportError::Io(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    });

    let outcomes = [
        run_once(&success),
        run_once(&server_error),
        run_once(&not_json),
        run_once(&refused),
    ];

    for (view, ok) in outcomes.iter() {
        assert_eq!(view.disables, 1);
        assert_eq!(view.enables, 1);
        assert_eq!(view.loader_hides, 1);
        assert!(view.page.is_idle());
        if !ok {
            assert_eq!(view.page.alerts.len(), 1);
            assert!(view.page.alerts[0].starts_with("Error: "));
        }
    }

    let (refused_view, _) = &outcomes[3];
    assert_eq!(refused_view.page.alerts, vec!["Error: connection refused"]);
}

fn run_once<T: voicecheckr::Transport>(transport: &T) -> (CountingView, bool) {
    let mut c = UploadController::new(CountingView::default(), transport, ClientConfig::default());
    c.on_file_selected(Some(wav()));
    let ok = c.submit().is_ok();
    (c.into_view(), ok)
}

#[test]
fn test_idle_restored_when_transport_panics() {
    let exploding = ScriptedTransport::new(|_: &UploadForm| -> Result<HttpReply, TransportError> {
        panic!("transport blew up")
    });
    let mut c = controller(&exploding);
    c.on_file_selected(Some(wav()));

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| c.submit()));
    assert!(outcome.is_err());

    let view = c.view();
    assert_eq!(view.enables, 1);
    assert!(view.page.is_idle());
}

#[test]
fn test_result_section_markup() {
    let mut c = controller(replying(200, HYBRID_FAKE));
    c.on_file_selected(Some(wav()));
    c.submit().unwrap();

    let html = c.view().page.result_section_html();
    assert!(html.contains("style=\"display: block\""));
    assert!(html.contains("<div id=\"resultText\" class=\"result-text result-fake\">FAKE DETECTED</div>"));
    assert!(html.contains("<div class=\"score-fill\" style=\"width: 87.65%\">87.7%</div>"));
}
