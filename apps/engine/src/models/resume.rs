use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Validated résumé text: UTF-8 with at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResumeText(String);

impl ResumeText {
    pub fn new(text: impl Into<String>) -> Result<Self, EngineError> {
        let text = text.into();
        validate(&text)?;
        Ok(Self(text))
    }

    /// Accepts raw bytes from an extraction collaborator; anything but UTF-8 is rejected.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, EngineError> {
        let text = String::from_utf8(bytes)
            .map_err(|e| EngineError::invalid_input(format!("resume text is not UTF-8: {e}")))?;
        Self::new(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ResumeText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResumeText {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ResumeText> for String {
    fn from(value: ResumeText) -> Self {
        value.0
    }
}

/// Rejects empty and whitespace-only text.
pub(crate) fn validate(text: &str) -> Result<(), EngineError> {
    if text.trim().is_empty() {
        return Err(EngineError::invalid_input(
            "resume text must be a non-empty string",
        ));
    }
    Ok(())
}
