use muninn::convert::messages_to_events;
use muninn::{MuninnError, OutputItem, StreamEventType, TokenUsage};
use serde_json::json;

#[test]
fn test_tool_result_becomes_function_call_output() {
    let events = messages_to_events(&[json!({
        "role": "tool",
        "content": "sunny",
        "tool_call_id": "abc"
    })])
    .unwrap();

    assert_eq!(events.len(), 1);
    match &events[0].item {
        OutputItem::FunctionCallOutput {
            output,
            call_id,
            content,
        } => {
            assert_eq!(output, "sunny");
            assert_eq!(call_id, "abc");
            assert_eq!(content, "sunny");
        }
        other => panic!("expected function_call_output, got {other:?}"),
    }
    assert!(events[0].usage.is_zero());
}

#[test]
fn test_plain_assistant_text_becomes_output_text() {
    let events = messages_to_events(&[json!({
        "role": "assistant",
        "id": "m1",
        "content": "Hello"
    })])
    .unwrap();

    assert_eq!(events.len(), 1);
    match &events[0].item {
        OutputItem::OutputText { text, id } => {
            assert_eq!(text, "Hello");
            assert_eq!(id, "m1");
        }
        other => panic!("expected output_text, got {other:?}"),
    }
}

#[test]
fn test_tool_call_fanout_carries_usage_on_first_item_only() {
    let events = messages_to_events(&[json!({
        "role": "assistant",
        "id": "m2",
        "content": "",
        "tool_calls": [
            {"id": "c1", "name": "get_weather", "args": {"city": "Oslo"}},
            {"id": "c2", "name": "get_weather", "args": {"city": "Bergen"}}
        ],
        "response_metadata": {
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }
    })])
    .unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(
        events[0].usage,
        TokenUsage {
            input_tokens: 10,
            output_tokens: 5,
            total_tokens: 15
        }
    );
    assert!(events[1].usage.is_zero());

    match &events[0].item {
        OutputItem::FunctionCall {
            id,
            call_id,
            name,
            arguments,
            content,
        } => {
            assert_eq!(id, "m2");
            assert_eq!(call_id, "c1");
            assert_eq!(name, "get_weather");
            assert_eq!(arguments, r#"{"city":"Oslo"}"#);
            assert_eq!(content, "get_weather");
        }
        other => panic!("expected function_call, got {other:?}"),
    }
    match &events[1].item {
        OutputItem::FunctionCall { call_id, .. } => assert_eq!(call_id, "c2"),
        other => panic!("expected function_call, got {other:?}"),
    }
}

#[test]
fn test_usage_is_split_out_of_event_metadata() {
    let events = messages_to_events(&[json!({
        "role": "assistant",
        "id": "m3",
        "content": "done",
        "response_metadata": {
            "usage": {"prompt_tokens": 3, "completion_tokens": 1, "total_tokens": 4},
            "model_name": "test-model"
        }
    })])
    .unwrap();

    assert_eq!(events[0].usage.input_tokens, 3);
    assert!(events[0].metadata.0.get("usage").is_none());
    assert_eq!(events[0].metadata.0["model_name"], json!("test-model"));
}

#[test]
fn test_unknown_message_kind_fails_with_zero_events() {
    let result = messages_to_events(&[
        json!({"role": "assistant", "id": "m1", "content": "ok"}),
        json!({"role": "system", "content": "nope"}),
    ]);

    match result {
        Err(MuninnError::UnrecognizedMessage(kind)) => assert_eq!(kind, "system"),
        other => panic!("expected UnrecognizedMessage, got {other:?}"),
    }
}

#[test]
fn test_message_without_role_is_unrecognized() {
    let err = messages_to_events(&[json!({"content": "?"})]).unwrap_err();
    assert!(matches!(err, MuninnError::UnrecognizedMessage(_)));
}

#[test]
fn test_events_preserve_message_order() {
    let events = messages_to_events(&[
        json!({"role": "assistant", "id": "a", "content": "first", "tool_calls": [
            {"id": "c1", "name": "t", "args": {}}
        ]}),
        json!({"role": "tool", "content": "result", "tool_call_id": "c1"}),
        json!({"role": "assistant", "id": "b", "content": "last"}),
    ])
    .unwrap();

    assert_eq!(events.len(), 3);
    assert_eq!(events[0].item.kind(), "function_call");
    assert_eq!(events[1].item.kind(), "function_call_output");
    assert_eq!(events[2].item.kind(), "output_text");
}

#[test]
fn test_every_event_is_tagged_done() {
    let events = messages_to_events(&[json!({"role": "assistant", "id": "x", "content": "y"})])
        .unwrap();
    assert!(matches!(
        events[0].event_type,
        StreamEventType::OutputItemDone
    ));
    let wire = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(wire["type"], json!("response.output_item.done"));
}

#[test]
fn test_missing_assistant_id_yields_empty_item_id() {
    let events = messages_to_events(&[json!({"role": "assistant", "content": "hi"})]).unwrap();
    match &events[0].item {
        OutputItem::OutputText { id, .. } => assert!(id.is_empty()),
        other => panic!("expected output_text, got {other:?}"),
    }
}
