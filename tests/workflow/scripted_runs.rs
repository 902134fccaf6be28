use std::sync::Arc;
use toneflow::error::{FlowError, LlmError};
use toneflow::llm::ScriptedClient;
use toneflow::prompt::TurnRole;
use toneflow::{Config, Tone, ToneWorkflow};

const CLASSIFIER: &str = "detect the tone";

fn workflow(client: &ScriptedClient) -> ToneWorkflow {
    ToneWorkflow::from_config(&Config::default(), Arc::new(client.clone())).unwrap()
}

fn scripted(classification: &'static str) -> ScriptedClient {
    ScriptedClient::by_system_text(&[
        (CLASSIFIER, classification),
        ("categorized as happy", "That's wonderful, enjoy the sunshine!"),
        ("categorized as sad", "Hang in there, brighter days are coming."),
        ("categorized as angry", "Take a deep breath."),
    ])
}

#[tokio::test]
async fn happy_message_gets_a_happy_response() {
    let client = scripted("happy");
    let run = workflow(&client)
        .run("It's such a beautiful day today!")
        .await
        .unwrap();

    assert_eq!(run.classification, "happy");
    assert_eq!(run.tone, Some(Tone::Happy));
    assert_eq!(
        run.response.as_deref(),
        Some("That's wonderful, enjoy the sunshine!")
    );

    let calls = client.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].system_text.as_deref().unwrap().contains(CLASSIFIER));
    assert!(
        calls[1]
            .system_text
            .as_deref()
            .unwrap()
            .contains("categorized as happy")
    );
    for call in &calls {
        assert_eq!(call.turns.len(), 1);
        assert_eq!(call.turns[0].role, TurnRole::User);
        assert_eq!(call.turns[0].text, "It's such a beautiful day today!");
        assert_eq!(call.max_tokens, 1000);
        assert!(call.temperature.abs() < f64::EPSILON);
    }
}

#[tokio::test]
async fn sad_and_angry_take_their_own_branches() {
    let sad = workflow(&scripted("sad")).run("I lost my keys").await.unwrap();
    assert_eq!(sad.tone, Some(Tone::Sad));
    assert_eq!(
        sad.response.as_deref(),
        Some("Hang in there, brighter days are coming.")
    );

    let angry = workflow(&scripted("angry"))
        .run("The train is late again!")
        .await
        .unwrap();
    assert_eq!(angry.tone, Some(Tone::Angry));
    assert_eq!(angry.response.as_deref(), Some("Take a deep breath."));
}

#[tokio::test]
async fn unmatched_classification_produces_no_response() {
    for answer in ["HAPPY", "confused", "happy\n", ""] {
        let client = scripted(answer);
        let run = workflow(&client).run("hmm").await.unwrap();

        assert_eq!(run.classification, answer);
        assert_eq!(run.tone, None);
        assert_eq!(run.response, None);
        assert_eq!(client.call_count(), 1, "only the classifier runs for {answer:?}");
    }
}

#[tokio::test]
async fn responder_failure_names_the_node() {
    let client = ScriptedClient::by_system_text(&[(CLASSIFIER, "happy")]);
    let err = workflow(&client).run("sunny").await.unwrap_err();

    match err {
        FlowError::Llm(LlmError::Invocation { node, .. }) => assert_eq!(node, "be_happy"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn concurrent_runs_do_not_share_state() {
    // Classify on the message itself so each run routes differently.
    let client = ScriptedClient::new(|request| {
        let system = request.system_text.as_deref().unwrap_or_default();
        let message = request.turns[0].text.as_str();
        let answer = if system.contains(CLASSIFIER) {
            if message.contains("sun") { "happy" } else { "angry" }
        } else if system.contains("categorized as happy") {
            "yay"
        } else {
            "calm down"
        };
        Ok(vec![answer.to_string()])
    });
    let wf = workflow(&client);

    let (first, second) = tokio::join!(wf.run("sun is out"), wf.run("stuck in traffic"));
    let (first, second) = (first.unwrap(), second.unwrap());

    assert_eq!(first.tone, Some(Tone::Happy));
    assert_eq!(first.response.as_deref(), Some("yay"));
    assert_eq!(second.tone, Some(Tone::Angry));
    assert_eq!(second.response.as_deref(), Some("calm down"));
    assert_eq!(client.call_count(), 4);
}

#[tokio::test]
async fn multi_segment_response_is_concatenated() {
    let client = ScriptedClient::new(|request| {
        let system = request.system_text.as_deref().unwrap_or_default();
        Ok(if system.contains(CLASSIFIER) {
            vec!["sad".to_string()]
        } else {
            vec!["Chin up, ".to_string(), "friend.".to_string()]
        })
    });

    let run = workflow(&client).run("gloomy").await.unwrap();
    assert_eq!(run.response.as_deref(), Some("Chin up, friend."));
}

#[test]
fn run_serializes_with_snake_case_tone() {
    let run = toneflow::WorkflowRun {
        classification: "sad".into(),
        tone: Some(Tone::Sad),
        response: Some("there there".into()),
    };
    let json = serde_json::to_value(&run).unwrap();
    assert_eq!(json["tone"], "sad");
    assert_eq!(json["response"], "there there");
}
