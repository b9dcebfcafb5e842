//! Gemini `generateContent` wire types.
//!
//! Only the fields this client sends or reads are modelled. Response fields
//! are optional so a missing level surfaces as a shape failure instead of a
//! decode failure.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub system_instruction: Content,
}

impl GenerateContentRequest {
    /// One user turn plus the persona as system instruction
    pub fn new(system_instruction: &str, user_text: &str) -> Self {
        Self {
            contents: vec![Content::text(user_text)],
            system_instruction: Content::text(system_instruction),
        }
    }
}

/// A list of parts; the request side never sets a role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Response body of `generateContent`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<Part>>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    ///
    /// Each `Err` names the first missing level.
    pub fn first_text(&self) -> Result<&str, &'static str> {
        let candidate = self
            .candidates
            .as_deref()
            .ok_or("missing candidates")?
            .first()
            .ok_or("empty candidates")?;
        let part = candidate
            .content
            .as_ref()
            .ok_or("missing candidates[0].content")?
            .parts
            .as_deref()
            .ok_or("missing candidates[0].content.parts")?
            .first()
            .ok_or("empty candidates[0].content.parts")?;
        let text = part
            .text
            .as_deref()
            .ok_or("missing candidates[0].content.parts[0].text")?;
        if text.is_empty() {
            return Err("empty reply text");
        }
        Ok(text)
    }
}
