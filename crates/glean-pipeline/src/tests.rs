//! Integration tests for the pipeline

#[cfg(test)]
mod tests {
    use crate::{Pipeline, PipelineConfig, PipelineError};
    use glean_domain::{Credential, SessionState};
    use glean_llm::{MockChat, MockModeration};
    use serde_json::json;

    fn pipeline(chat: MockChat, moderation: MockModeration) -> Pipeline<MockChat, MockModeration> {
        Pipeline::new(chat, moderation, PipelineConfig::default())
    }

    fn session_with_key() -> SessionState {
        let mut session = SessionState::new();
        session.set_credential(Credential::new("sk-test"));
        session
    }

    #[tokio::test]
    async fn test_successful_extraction_updates_cache() {
        let chat = MockChat::new(r#"{"schema": {"topic": "colors"}, "summary": "색에 대한 글"}"#);
        let pipeline = pipeline(chat, MockModeration::allowing());
        let mut session = session_with_key();

        let result = pipeline
            .process(&mut session, "A short note about colors.")
            .await
            .unwrap();

        assert_eq!(result.schema["topic"], json!("colors"));
        assert!(!result.summary.is_empty());
        assert_eq!(session.last_result(), &result);
    }

    #[tokio::test]
    async fn test_favorite_color_scenario() {
        let chat = MockChat::new(
            r#"{"schema": {"favorite_color": "blue"}, "summary": "이 사람이 가장 좋아하는 색은 파란색이에요."}"#,
        );
        let pipeline = pipeline(chat, MockModeration::allowing());
        let mut session = session_with_key();

        let result = pipeline
            .process(&mut session, "My favorite color is blue.")
            .await
            .unwrap();

        assert_eq!(result.schema["favorite_color"], json!("blue"));
        assert_eq!(session.last_result().schema["favorite_color"], json!("blue"));
    }

    #[tokio::test]
    async fn test_empty_input_returns_cache_without_network_calls() {
        let chat = MockChat::new(r#"{"schema": {}, "summary": "s"}"#);
        let moderation = MockModeration::allowing();
        let pipeline = pipeline(chat.clone(), moderation.clone());
        let mut session = session_with_key();

        let result = pipeline.process(&mut session, "").await.unwrap();

        assert_eq!(&result, session.last_result());
        assert_eq!(chat.call_count(), 0);
        assert_eq!(moderation.call_count(), 0);

        // Whitespace-only input is Idle too.
        pipeline.process(&mut session, "   \n\t").await.unwrap();
        assert_eq!(moderation.call_count(), 0);
    }

    #[tokio::test]
    async fn test_flagged_input_leaves_cache_untouched() {
        let ok_chat = MockChat::new(r#"{"schema": {"k": "v"}, "summary": "first"}"#);
        let pipeline_ok = pipeline(ok_chat, MockModeration::allowing());
        let mut session = session_with_key();
        pipeline_ok.process(&mut session, "fine text").await.unwrap();
        let before = session.last_result().clone();

        let chat = MockChat::new(r#"{"schema": {}, "summary": "should never be reached"}"#);
        let pipeline_flagging = pipeline(chat.clone(), MockModeration::flagging());

        let err = pipeline_flagging
            .process(&mut session, "offensive text")
            .await
            .unwrap_err();

        assert!(err.is_policy_violation());
        assert_eq!(
            err.to_string(),
            "The input text violates our content policy. Please revise and try again."
        );
        assert_eq!(session.last_result(), &before);
        assert_eq!(chat.call_count(), 0);
    }

    #[tokio::test]
    async fn test_flagged_on_first_run_preserves_empty_cache() {
        let pipeline = pipeline(
            MockChat::new(r#"{"schema": {}, "summary": "unused"}"#),
            MockModeration::flagging(),
        );
        let mut session = session_with_key();

        let err = pipeline.process(&mut session, "bad").await.unwrap_err();
        assert!(err.is_policy_violation());
        assert!(session.last_result().schema.is_empty());
        assert_eq!(session.last_result().summary, "");
    }

    #[tokio::test]
    async fn test_malformed_completion_is_decode_error_and_cache_unchanged() {
        let good = MockChat::new(r#"{"schema": {"a": 1}, "summary": "good"}"#);
        let pipeline_good = pipeline(good, MockModeration::allowing());
        let mut session = session_with_key();
        pipeline_good.process(&mut session, "seed the cache").await.unwrap();
        let before = session.last_result().clone();

        let bad = MockChat::new("definitely not json");
        let pipeline_bad = pipeline(bad, MockModeration::allowing());

        let err = pipeline_bad.process(&mut session, "more text").await.unwrap_err();
        match err {
            PipelineError::Decode(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Decode, got {:?}", other),
        }
        assert_eq!(session.last_result(), &before);
    }

    #[tokio::test]
    async fn test_missing_summary_key_surfaces_and_skips_cache() {
        let chat = MockChat::new(r#"{"schema": {"a": 1}}"#);
        let pipeline = pipeline(chat, MockModeration::allowing());
        let mut session = session_with_key();

        let err = pipeline.process(&mut session, "text").await.unwrap_err();
        assert!(matches!(err, PipelineError::MissingField("summary")));
        assert!(session.last_result().schema.is_empty());
    }

    #[tokio::test]
    async fn test_missing_credential_blocks_processing() {
        let chat = MockChat::new(r#"{"schema": {}, "summary": "s"}"#);
        let moderation = MockModeration::allowing();
        let pipeline = pipeline(chat, moderation.clone());
        let mut session = SessionState::new();

        let err = pipeline.process(&mut session, "text").await.unwrap_err();
        assert!(matches!(err, PipelineError::MissingCredential));
        assert_eq!(moderation.call_count(), 0);
    }

    #[tokio::test]
    async fn test_moderation_failure_propagates() {
        let pipeline = pipeline(
            MockChat::new(r#"{"schema": {}, "summary": "s"}"#),
            MockModeration::failing("connection refused"),
        );
        let mut session = session_with_key();

        let err = pipeline.process(&mut session, "text").await.unwrap_err();
        match err {
            PipelineError::Moderation(msg) => assert!(msg.contains("connection refused")),
            other => panic!("expected Moderation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_completion_failure_propagates() {
        let pipeline = pipeline(
            MockChat::failing("timed out"),
            MockModeration::allowing(),
        );
        let mut session = session_with_key();

        let err = pipeline.process(&mut session, "text").await.unwrap_err();
        assert!(matches!(err, PipelineError::Completion(_)));
        assert!(session.last_result().schema.is_empty());
    }

    #[tokio::test]
    async fn test_input_too_long_is_rejected_before_moderation() {
        let moderation = MockModeration::allowing();
        let pipeline = Pipeline::new(
            MockChat::new(r#"{"schema": {}, "summary": "s"}"#),
            moderation.clone(),
            PipelineConfig { max_input_chars: 10 },
        );
        let mut session = session_with_key();

        let err = pipeline
            .process(&mut session, "this input is longer than ten characters")
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::InputTooLong(_, 10)));
        assert_eq!(moderation.call_count(), 0);
    }

    #[tokio::test]
    async fn test_second_extraction_overwrites_first() {
        let mut session = session_with_key();

        let first = pipeline(
            MockChat::new(r#"{"schema": {"v": 1}, "summary": "one"}"#),
            MockModeration::allowing(),
        );
        first.process(&mut session, "text one").await.unwrap();

        let second = pipeline(
            MockChat::new(r#"{"schema": {"v": 2}, "summary": "two"}"#),
            MockModeration::allowing(),
        );
        second.process(&mut session, "text two").await.unwrap();

        assert_eq!(session.last_result().schema["v"], json!(2));
        assert_eq!(session.last_result().summary, "two");
    }
}
