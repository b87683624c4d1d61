// ABOUTME: Parser for LLM generation responses
// ABOUTME: Strict JSON parse with one lenient structural fallback

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{PipelineError, Result};

/// The structured draft a generation call must produce.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDraft {
    pub title: String,
    #[serde(default)]
    pub outline: Option<String>,
    #[serde(alias = "content")]
    pub body: String,
    #[serde(default)]
    pub suggested_image_prompt: Option<String>,
}

/// Parse the raw model text into a draft. Tries strict JSON first (after
/// stripping markdown code fences and locating the outermost object), then
/// one lenient structural extraction from free text. Anything that fails
/// both is a hard parse error; nothing partial leaves this function.
pub fn parse_generated_draft(raw: &str) -> Result<GeneratedDraft> {
    match parse_strict(raw) {
        Ok(draft) => validate(draft),
        Err(strict_err) => {
            warn!(
                "Strict parse of generation response failed ({}), attempting structural recovery",
                strict_err
            );
            let draft = parse_lenient(raw).ok_or_else(|| {
                PipelineError::Parse(format!(
                    "response is neither valid JSON nor recoverable text: {}",
                    strict_err
                ))
            })?;
            validate(draft)
        }
    }
}

fn validate(draft: GeneratedDraft) -> Result<GeneratedDraft> {
    if draft.title.trim().is_empty() {
        return Err(PipelineError::Parse("generated title is empty".to_string()));
    }
    if draft.body.trim().is_empty() {
        return Err(PipelineError::Parse("generated body is empty".to_string()));
    }
    Ok(draft)
}

fn parse_strict(raw: &str) -> std::result::Result<GeneratedDraft, serde_json::Error> {
    let text = strip_code_fences(raw);

    serde_json::from_str(text).or_else(|err| {
        // Models sometimes wrap the object in prose; try the outermost
        // brace-delimited slice before giving up on JSON entirely.
        match (text.find('{'), text.rfind('}')) {
            (Some(start), Some(end)) if start < end => serde_json::from_str(&text[start..=end]),
            _ => Err(err),
        }
    })
}

/// Strip markdown code fences if present (```json ... ```)
fn strip_code_fences(raw: &str) -> &str {
    let cleaned = raw.trim();
    if cleaned.starts_with("```") {
        // Find the first newline after opening fence
        let start = cleaned.find('\n').map(|i| i + 1).unwrap_or(0);
        // Find the closing fence (search from start position to avoid finding opening fence)
        let end = cleaned[start..]
            .rfind("```")
            .map(|i| i + start)
            .unwrap_or(cleaned.len());
        cleaned[start..end].trim()
    } else {
        cleaned
    }
}

/// Lenient extraction: first heading (or first non-empty line) becomes the
/// title, a bulleted block directly after an "outline" heading becomes the
/// outline, everything else is the body.
fn parse_lenient(raw: &str) -> Option<GeneratedDraft> {
    let text = strip_code_fences(raw);

    let mut title = None;
    let mut outline_lines: Vec<String> = Vec::new();
    let mut body_lines: Vec<String> = Vec::new();
    let mut in_outline = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !body_lines.is_empty() {
                body_lines.push(String::new());
            }
            continue;
        }

        if title.is_none() {
            title = Some(trimmed.trim_start_matches('#').trim().to_string());
            continue;
        }

        let lowered = trimmed.trim_start_matches('#').trim().to_lowercase();
        if lowered == "outline" || lowered == "outline:" {
            in_outline = true;
            continue;
        }

        if in_outline {
            if trimmed.starts_with('-') || trimmed.starts_with('*') || trimmed.starts_with(char::is_numeric) {
                outline_lines.push(trimmed.to_string());
                continue;
            }
            in_outline = false;
        }

        body_lines.push(line.to_string());
    }

    let title = title?;
    let body = body_lines.join("\n").trim().to_string();
    if body.is_empty() {
        return None;
    }

    Some(GeneratedDraft {
        title,
        outline: if outline_lines.is_empty() {
            None
        } else {
            Some(outline_lines.join("\n"))
        },
        body,
        suggested_image_prompt: None,
    })
}
