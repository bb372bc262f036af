//! Tests for readiness gating, queue flushing and inbound routing.

use std::sync::{Arc, Mutex};

use nativeapp_common::BridgeError;
use serde_json::{json, Value};

use super::*;
use crate::codec::{encode_enveloped, ParameterMap};

// -----------------------------------------------------------------
// Fakes
// -----------------------------------------------------------------

/// Records what the bridge asks of the renderer. Evaluations are held
/// until the test completes them, unless `auto_reply` is set.
#[derive(Default)]
struct FakeRenderer {
    loads: Mutex<Vec<String>>,
    evaluated: Mutex<Vec<String>>,
    held: Mutex<Vec<EvalResultCallback>>,
    auto_reply: Mutex<Option<Result<Option<Value>, BridgeError>>>,
    fail_load: bool,
}

impl FakeRenderer {
    fn replying(result: Result<Option<Value>, BridgeError>) -> Self {
        Self {
            auto_reply: Mutex::new(Some(result)),
            ..Default::default()
        }
    }

    fn evaluated(&self) -> Vec<String> {
        self.evaluated.lock().unwrap().clone()
    }

    fn loads(&self) -> Vec<String> {
        self.loads.lock().unwrap().clone()
    }

    /// Complete held evaluations, last-dispatched first.
    fn complete_in_reverse(&self, results: Vec<Result<Option<Value>, BridgeError>>) {
        let mut held = std::mem::take(&mut *self.held.lock().unwrap());
        for result in results {
            if let Some(done) = held.pop() {
                done(result);
            }
        }
    }
}

impl RendererAdapter for FakeRenderer {
    fn load(&self, target: &str) -> Result<(), BridgeError> {
        self.loads.lock().unwrap().push(target.to_string());
        if self.fail_load {
            Err(BridgeError::Renderer("load refused".into()))
        } else {
            Ok(())
        }
    }

    fn evaluate(&self, script: &str, done: EvalResultCallback) {
        self.evaluated.lock().unwrap().push(script.to_string());
        let reply = self.auto_reply.lock().unwrap().clone();
        match reply {
            Some(result) => done(result),
            None => self.held.lock().unwrap().push(done),
        }
    }
}

#[derive(Default)]
struct RecordingObserver {
    messages: Mutex<Vec<Value>>,
    parameters: Mutex<Vec<ParameterMap>>,
}

impl RecordingObserver {
    fn messages(&self) -> Vec<Value> {
        self.messages.lock().unwrap().clone()
    }

    fn parameters(&self) -> Vec<ParameterMap> {
        self.parameters.lock().unwrap().clone()
    }
}

impl BridgeObserver for RecordingObserver {
    fn on_message(&self, message: Value) {
        self.messages.lock().unwrap().push(message);
    }

    fn on_parameters(&self, parameters: ParameterMap) {
        self.parameters.lock().unwrap().push(parameters);
    }
}

type Outcomes = Arc<Mutex<Vec<(String, CallOutcome)>>>;

fn record(outcomes: &Outcomes, tag: &str) -> impl FnOnce(CallOutcome) + Send + 'static {
    let outcomes = Arc::clone(outcomes);
    let tag = tag.to_string();
    move |outcome| outcomes.lock().unwrap().push((tag, outcome))
}

fn setup() -> (Arc<FakeRenderer>, Arc<RecordingObserver>, Bridge) {
    let renderer = Arc::new(FakeRenderer::replying(Ok(None)));
    let observer = Arc::new(RecordingObserver::default());
    let bridge = Bridge::new(&renderer).with_observer(&observer);
    (renderer, observer, bridge)
}

fn params(pairs: &[(&str, &str)]) -> ParameterMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// -----------------------------------------------------------------
// Readiness and queueing
// -----------------------------------------------------------------

#[test]
fn new_bridge_is_not_loaded() {
    let (_renderer, _observer, bridge) = setup();
    assert_eq!(bridge.state(), ReadinessState::NotLoaded);
    assert!(!bridge.is_loaded());
    assert_eq!(bridge.pending_len(), 0);
}

#[test]
fn calls_before_load_are_queued_in_order() {
    let (renderer, _observer, mut bridge) = setup();
    let outcomes: Outcomes = Arc::default();

    bridge.invoke("f(1)", record(&outcomes, "first"));
    bridge.invoke("f(1)", record(&outcomes, "second"));

    assert!(renderer.evaluated().is_empty());
    assert_eq!(bridge.pending_len(), 2);

    bridge.on_load_finished();

    assert_eq!(renderer.evaluated(), vec!["f(1)", "f(1)"]);
    assert_eq!(bridge.pending_len(), 0);
    let tags: Vec<String> = outcomes.lock().unwrap().iter().map(|(t, _)| t.clone()).collect();
    assert_eq!(tags, vec!["first", "second"]);
}

#[test]
fn flush_preserves_invoke_order() {
    let (renderer, _observer, mut bridge) = setup();
    for i in 0..5 {
        bridge.invoke(format!("step({i})"), |_| {});
    }
    bridge.on_load_finished();
    assert_eq!(
        renderer.evaluated(),
        vec!["step(0)", "step(1)", "step(2)", "step(3)", "step(4)"]
    );
}

#[test]
fn calls_after_load_dispatch_immediately() {
    let (renderer, _observer, mut bridge) = setup();
    bridge.on_load_finished();

    bridge.invoke("initPage(false)", |_| {});
    assert_eq!(renderer.evaluated(), vec!["initPage(false)"]);
    assert_eq!(bridge.pending_len(), 0);
}

#[test]
fn begin_load_resets_readiness_and_loads() {
    let (renderer, _observer, mut bridge) = setup();
    bridge.on_load_finished();
    assert!(bridge.is_loaded());

    bridge.begin_load("app://localhost/index.html").unwrap();
    assert!(!bridge.is_loaded());
    assert_eq!(renderer.loads(), vec!["app://localhost/index.html"]);

    bridge.invoke("f()", |_| {});
    assert!(renderer.evaluated().is_empty());
    assert_eq!(bridge.pending_len(), 1);
}

#[test]
fn begin_load_keeps_queued_calls() {
    let (renderer, _observer, mut bridge) = setup();
    bridge.invoke("old()", |_| {});
    bridge.begin_load("app://localhost/a.html").unwrap();
    bridge.invoke("new()", |_| {});
    assert_eq!(bridge.pending_len(), 2);

    bridge.on_load_finished();
    assert_eq!(renderer.evaluated(), vec!["old()", "new()"]);
}

#[test]
fn begin_load_reports_renderer_errors() {
    let renderer = Arc::new(FakeRenderer {
        fail_load: true,
        ..Default::default()
    });
    let mut bridge = Bridge::new(&renderer);
    bridge.on_load_finished();

    let err = bridge.begin_load("app://localhost/x.html").unwrap_err();
    assert_eq!(err, BridgeError::Renderer("load refused".into()));
    assert!(!bridge.is_loaded());
}

#[test]
fn begin_load_without_renderer_fails() {
    let renderer = Arc::new(FakeRenderer::default());
    let mut bridge = Bridge::new(&renderer);
    drop(renderer);
    assert_eq!(
        bridge.begin_load("app://localhost/x.html"),
        Err(BridgeError::RendererGone)
    );
}

#[test]
fn repeated_load_finished_is_harmless() {
    let (renderer, _observer, mut bridge) = setup();
    bridge.invoke("once()", |_| {});
    bridge.on_load_finished();
    bridge.on_load_finished();
    assert_eq!(renderer.evaluated(), vec!["once()"]);
}

// -----------------------------------------------------------------
// Outcomes
// -----------------------------------------------------------------

#[test]
fn success_with_value() {
    let renderer = Arc::new(FakeRenderer::replying(Ok(Some(json!("KO")))));
    let mut bridge = Bridge::new(&renderer);
    bridge.on_load_finished();

    let outcomes: Outcomes = Arc::default();
    bridge.invoke("initPage(false)", record(&outcomes, "init"));

    let outcomes = outcomes.lock().unwrap();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].1, CallOutcome::Success(Some(json!("KO"))));
    assert_eq!(outcomes[0].1.value(), Some(&json!("KO")));
}

#[test]
fn success_without_value() {
    let (_renderer, _observer, mut bridge) = setup();
    bridge.on_load_finished();

    let outcomes: Outcomes = Arc::default();
    bridge.invoke("noop()", record(&outcomes, "noop"));

    let outcomes = outcomes.lock().unwrap();
    assert_eq!(outcomes[0].1, CallOutcome::Success(None));
    assert!(outcomes[0].1.is_success());
    assert!(outcomes[0].1.value().is_none());
}

#[test]
fn renderer_error_becomes_failure() {
    let renderer = Arc::new(FakeRenderer::replying(Err(BridgeError::Evaluate(
        "ReferenceError".into(),
    ))));
    let mut bridge = Bridge::new(&renderer);
    bridge.on_load_finished();

    let outcomes: Outcomes = Arc::default();
    bridge.invoke("missing()", record(&outcomes, "missing"));

    let outcomes = outcomes.lock().unwrap();
    assert_eq!(outcomes[0].1, CallOutcome::Failure);
    assert!(!outcomes[0].1.is_success());
}

#[test]
fn flushed_calls_are_pipelined() {
    let renderer = Arc::new(FakeRenderer::default());
    let mut bridge = Bridge::new(&renderer);
    let outcomes: Outcomes = Arc::default();

    bridge.invoke("a()", record(&outcomes, "a"));
    bridge.invoke("b()", record(&outcomes, "b"));
    bridge.on_load_finished();

    // Both were dispatched before either completed.
    assert_eq!(renderer.evaluated(), vec!["a()", "b()"]);
    assert!(outcomes.lock().unwrap().is_empty());

    // Completions may arrive in any order.
    renderer.complete_in_reverse(vec![Ok(Some(json!(2))), Ok(Some(json!(1)))]);
    let outcomes = outcomes.lock().unwrap();
    assert_eq!(outcomes[0], ("b".to_string(), CallOutcome::Success(Some(json!(2)))));
    assert_eq!(outcomes[1], ("a".to_string(), CallOutcome::Success(Some(json!(1)))));
}

#[test]
fn dispatch_without_renderer_fails_the_call() {
    let renderer = Arc::new(FakeRenderer::default());
    let mut bridge = Bridge::new(&renderer);
    let outcomes: Outcomes = Arc::default();
    bridge.invoke("late()", record(&outcomes, "late"));

    drop(renderer);
    bridge.on_load_finished();

    assert_eq!(
        *outcomes.lock().unwrap(),
        vec![("late".to_string(), CallOutcome::Failure)]
    );
}

#[test]
fn dropping_bridge_fails_queued_calls() {
    let (_renderer, _observer, mut bridge) = setup();
    let outcomes: Outcomes = Arc::default();
    bridge.invoke("never()", record(&outcomes, "never"));
    drop(bridge);

    assert_eq!(
        *outcomes.lock().unwrap(),
        vec![("never".to_string(), CallOutcome::Failure)]
    );
}

#[tokio::test]
async fn invoke_with_reply_resolves_after_flush() {
    let renderer = Arc::new(FakeRenderer::replying(Ok(Some(json!("OK")))));
    let mut bridge = Bridge::new(&renderer);

    let reply = bridge.invoke_with_reply("initPage(true)");
    bridge.on_load_finished();

    let outcome = reply.await.unwrap();
    assert_eq!(outcome, CallOutcome::Success(Some(json!("OK"))));
}

#[tokio::test]
async fn invoke_with_reply_reports_failure_on_drop() {
    let (_renderer, _observer, mut bridge) = setup();
    let reply = bridge.invoke_with_reply("never()");
    drop(bridge);
    assert_eq!(reply.await.unwrap(), CallOutcome::Failure);
}

// -----------------------------------------------------------------
// Navigation interception
// -----------------------------------------------------------------

#[test]
fn reserved_url_parameters_reach_observer() {
    let (_renderer, observer, mut bridge) = setup();
    bridge.on_navigation_intercepted("nativeapp://parameters?a=1");

    assert_eq!(observer.parameters(), vec![params(&[("a", "1")])]);
    assert!(observer.messages().is_empty());
}

#[test]
fn sample_page_parameters_url() {
    let (_renderer, observer, mut bridge) = setup();
    bridge.on_navigation_intercepted(
        "nativeapp://parameters?parameter1=100&parameter2=200&parameter3=abcd",
    );
    assert_eq!(
        observer.parameters(),
        vec![params(&[
            ("parameter1", "100"),
            ("parameter2", "200"),
            ("parameter3", "abcd"),
        ])]
    );
}

#[test]
fn other_urls_are_ignored() {
    let (_renderer, observer, mut bridge) = setup();
    bridge.on_navigation_intercepted("https://example.com/page?a=1");
    bridge.on_navigation_intercepted("app://localhost/index.html?x=2");
    assert!(observer.parameters().is_empty());
    assert!(observer.messages().is_empty());
}

#[test]
fn undecodable_reserved_url_is_dropped() {
    let (_renderer, observer, mut bridge) = setup();
    bridge.on_navigation_intercepted("nativeapp://parameters?a=%zz");
    bridge.on_navigation_intercepted("nativeapp://no-query-and-not-base64!");
    assert!(observer.parameters().is_empty());
    assert!(observer.messages().is_empty());
}

#[test]
fn json_in_reserved_url_is_dropped() {
    let (_renderer, observer, mut bridge) = setup();
    let dictionary = json!({"key1": "value1&value1b", "key2": [{"key5": "a?b"}]});
    let url = format!(
        "nativeapp://message={}",
        urlencoding::encode(&dictionary.to_string())
    );

    bridge.on_navigation_intercepted(&url);

    assert!(observer.parameters().is_empty());
    assert!(observer.messages().is_empty());
}

#[test]
fn base64_json_url_reaches_on_message() {
    let (_renderer, observer, mut bridge) = setup();
    let dictionary = json!({"key1": "value1&value1b", "key2": [{"key5": "a?b"}]});
    let url = encode_enveloped(&dictionary.to_string(), "nativeapp://");

    bridge.on_navigation_intercepted(&url);

    assert_eq!(observer.messages(), vec![dictionary]);
    assert!(observer.parameters().is_empty());
}

#[test]
fn base64_query_url_reaches_on_parameters() {
    let (_renderer, observer, mut bridge) = setup();
    let url = encode_enveloped("parameters?z=26", "nativeapp://");
    bridge.on_navigation_intercepted(&url);
    assert_eq!(observer.parameters(), vec![params(&[("z", "26")])]);
}

#[test]
fn custom_prefix_is_honoured() {
    let renderer = Arc::new(FakeRenderer::default());
    let observer = Arc::new(RecordingObserver::default());
    let mut bridge = Bridge::new(&renderer)
        .with_observer(&observer)
        .with_options(BridgeOptions {
            url_prefix: "myapp://".into(),
            channel: "myapp".into(),
        });

    bridge.on_navigation_intercepted("nativeapp://p?a=1");
    bridge.on_navigation_intercepted("myapp://p?b=2");
    assert_eq!(observer.parameters(), vec![params(&[("b", "2")])]);
}

// -----------------------------------------------------------------
// Posted messages
// -----------------------------------------------------------------

#[test]
fn posted_object_reaches_on_message_only() {
    let (_renderer, observer, mut bridge) = setup();
    let body = json!({"parameter1": "value1", "parameter2": "value2"});
    bridge.on_message_posted(body.clone());

    assert_eq!(observer.messages(), vec![body]);
    assert!(observer.parameters().is_empty());
}

#[test]
fn posted_text_reaches_on_parameters_only() {
    let (_renderer, observer, mut bridge) = setup();
    bridge.on_message_posted(json!("parameter1=100&parameter2=200"));

    assert_eq!(
        observer.parameters(),
        vec![params(&[("parameter1", "100"), ("parameter2", "200")])]
    );
    assert!(observer.messages().is_empty());
}

#[test]
fn undecodable_text_reaches_neither() {
    let (_renderer, observer, mut bridge) = setup();
    bridge.on_message_posted(json!("100%"));
    bridge.on_message_posted(json!(""));
    bridge.on_message_posted(json!(r#"{"parameter1":"value1"}"#));
    bridge.on_message_posted(json!("just some words"));
    assert!(observer.parameters().is_empty());
    assert!(observer.messages().is_empty());
}

#[test]
fn other_payload_kinds_are_dropped() {
    let (_renderer, observer, mut bridge) = setup();
    bridge.on_message_posted(json!([1, 2, 3]));
    bridge.on_message_posted(json!(42));
    bridge.on_message_posted(Value::Null);
    assert!(observer.parameters().is_empty());
    assert!(observer.messages().is_empty());
}

#[test]
fn ipc_frames_are_filtered_by_channel() {
    let (_renderer, observer, mut bridge) = setup();
    bridge.on_ipc_message(r#"{"channel":"nativeapp","body":{"message":"hi"}}"#);
    bridge.on_ipc_message(r#"{"channel":"other","body":{"message":"nope"}}"#);
    bridge.on_ipc_message(r#"{"channel":"nativeapp","body":"a=1"}"#);
    bridge.on_ipc_message("not even json");

    assert_eq!(observer.messages(), vec![json!({"message": "hi"})]);
    assert_eq!(observer.parameters(), vec![params(&[("a", "1")])]);
}

#[test]
fn missing_observer_is_tolerated() {
    let renderer = Arc::new(FakeRenderer::default());
    let mut bridge = Bridge::new(&renderer);
    bridge.on_message_posted(json!({"a": 1}));
    bridge.on_navigation_intercepted("nativeapp://p?a=1");
}

#[test]
fn dropped_observer_is_tolerated() {
    let (_renderer, observer, mut bridge) = setup();
    drop(observer);
    bridge.on_message_posted(json!({"a": 1}));
    bridge.on_message_posted(json!("a=1"));
}

#[test]
fn cleared_observer_receives_nothing() {
    let (_renderer, observer, mut bridge) = setup();
    bridge.clear_observer();
    bridge.on_message_posted(json!({"a": 1}));
    assert!(observer.messages().is_empty());
}
