// ABOUTME: AI prompts for SEO content generation
// ABOUTME: Structured prompts for drafting and regenerating article content

use trygo_ideas::IdeaCategory;

use super::adapters::GenerationRequest;

/// System prompt for all content generation tasks
pub const CONTENT_SYSTEM_PROMPT: &str = r#"You are an expert SEO content writer for early-stage startups.

Your role is to:
- Turn validated customer insights into long-form SEO articles
- Write for the startup's ideal customer profile, not a generic audience
- Keep claims grounded in the provided context, no invented product facts
- Structure articles with clear headings suitable for organic search

Always respond in valid JSON format matching the requested structure."#;

fn category_angle(category: IdeaCategory) -> &'static str {
    match category {
        IdeaCategory::Pain => "a customer pain point the product addresses",
        IdeaCategory::Goal => "a goal the target customer wants to reach",
        IdeaCategory::Trigger => "an event that makes customers look for a solution",
        IdeaCategory::Feature => "a concrete product capability",
        IdeaCategory::Benefit => "an outcome customers get from the product",
        IdeaCategory::Faq => "a frequently asked question from prospects",
        IdeaCategory::Info => "an informational topic the audience searches for",
    }
}

/// Draft a full article for a backlog idea
pub fn generation_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"Write an SEO article about the following topic. The topic represents {angle}.

Topic: {title}
{description}
{lean_canvas}
{icp}
{keywords}
{extra}
Respond in this JSON format:

{{
  "title": "Final article title, may refine the topic phrasing",
  "outline": "Markdown bullet list of the article sections",
  "body": "The full article body in markdown",
  "suggestedImagePrompt": "One-sentence description of a fitting hero image"
}}"#,
        angle = category_angle(request.category),
        title = request.title,
        description = request
            .description
            .as_deref()
            .map(|d| format!("Details: {}\n", d))
            .unwrap_or_default(),
        lean_canvas = request
            .lean_canvas
            .as_deref()
            .map(|c| format!("Lean canvas context:\n{}\n", c))
            .unwrap_or_default(),
        icp = request
            .icp
            .as_deref()
            .map(|i| format!("Ideal customer profile:\n{}\n", i))
            .unwrap_or_default(),
        keywords = request
            .keywords
            .as_deref()
            .map(|k| format!("Target keywords: {}\n", k))
            .unwrap_or_default(),
        extra = request
            .prompt_part
            .as_deref()
            .map(|p| format!("Additional instructions: {}\n", p))
            .unwrap_or_default(),
    )
}

/// Regenerate only the body of an existing article; title stays fixed
pub fn regeneration_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"Rewrite the body of an SEO article titled "{title}". Keep the title and topic unchanged.
{extra}
Respond in this JSON format:

{{
  "title": "{title}",
  "body": "The rewritten article body in markdown"
}}"#,
        title = request.title,
        extra = request
            .prompt_part
            .as_deref()
            .map(|p| format!("Additional instructions: {}\n", p))
            .unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_prompt_includes_context_blocks() {
        let request = GenerationRequest {
            title: "Solo founder onboarding".to_string(),
            description: Some("Founders struggle alone".to_string()),
            category: IdeaCategory::Pain,
            lean_canvas: Some("canvas".to_string()),
            icp: None,
            keywords: Some("onboarding, solo founder".to_string()),
            prompt_part: None,
        };

        let prompt = generation_prompt(&request);
        assert!(prompt.contains("Solo founder onboarding"));
        assert!(prompt.contains("customer pain point"));
        assert!(prompt.contains("Founders struggle alone"));
        assert!(prompt.contains("onboarding, solo founder"));
        assert!(prompt.contains("suggestedImagePrompt"));
        assert!(!prompt.contains("Ideal customer profile"));
    }

    #[test]
    fn regeneration_prompt_pins_the_title() {
        let request = GenerationRequest {
            title: "Fixed title".to_string(),
            description: None,
            category: IdeaCategory::Info,
            lean_canvas: None,
            icp: None,
            keywords: None,
            prompt_part: Some("shorter".to_string()),
        };

        let prompt = regeneration_prompt(&request);
        assert!(prompt.contains("\"Fixed title\""));
        assert!(prompt.contains("shorter"));
    }
}
