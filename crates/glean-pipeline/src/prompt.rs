//! The fixed two-message extraction prompt

/// System instruction sent with every extraction call.
///
/// Asks the model for a JSON object with a free-form `schema` of the
/// important facts and a `summary` written in Korean simple enough for a
/// middle schooler. The completion request pins the response format to a
/// JSON object; the instruction shows the expected shape.
const SYSTEM_INSTRUCTIONS: &str = r#"다음 글에서 중요한 정보를 뽑아 JSON 형식으로 정리해주세요. 그리고 주요 내용과 중요한 정보들 사이의 관계를 간단하게 요약해주세요. 모든 내용은 중학생이 이해할 수 있는 쉬운 한국어로 작성해주세요.
다음 형식을 사용해주세요:
{
    "schema": {
        "key": "value",
        ... return as many as necessary
    },
    "summary": "중학생이 이해할 수 있는 쉬운 한국어로 작성해주세요."
}"#;

/// Builds the two-message prompt for one extraction call.
///
/// The system message is fixed; the user message carries the raw text
/// verbatim.
pub struct ExtractionPrompt {
    text: String,
}

impl ExtractionPrompt {
    /// Create a prompt for the given source text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The fixed system instruction.
    pub fn system(&self) -> &'static str {
        SYSTEM_INSTRUCTIONS
    }

    /// The user message: the source text, prefixed only with a `Content:`
    /// marker.
    pub fn user(&self) -> String {
        format!("Content: {}", self.text)
    }
}
