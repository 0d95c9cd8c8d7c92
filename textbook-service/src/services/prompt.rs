//! Prompt assembly for the three endpoints.
//!
//! Every prompt is an ordered list of text segments. Chat prompts are built from
//! several segments; personalize and translate send one combined segment.

use crate::dtos::{ChatRequest, PersonalizeRequest, TranslateRequest, UserProfile};

/// Role and citation expectations for the teaching assistant.
pub const SYSTEM_INSTRUCTION: &str = "You are the AI Teaching Assistant for the 'Physical AI & Humanoid Robotics' textbook.
Your goal is to explain complex robotics concepts (ROS 2, RL, Control Theory) clearly.
Always cite specific weeks/chapters if relevant.";

/// Longest content payload forwarded to the backend, in characters.
pub const MAX_CONTENT_CHARS: usize = 8000;

/// First [`MAX_CONTENT_CHARS`] characters of `content`.
pub fn truncate_content(content: &str) -> &str {
    match content.char_indices().nth(MAX_CONTENT_CHARS) {
        Some((byte_idx, _)) => &content[..byte_idx],
        None => content,
    }
}

fn background_segment(profile: &UserProfile) -> String {
    format!(
        "User Context: Software BG: '{}', Hardware BG: '{}'.",
        profile.software_background, profile.hardware_background
    )
}

pub fn chat_segments(request: &ChatRequest) -> Vec<String> {
    let mut segments = vec![SYSTEM_INSTRUCTION.to_string()];

    if let Some(profile) = &request.user_profile {
        segments.push(background_segment(profile));
    }

    if let Some(context) = request.context.as_deref().filter(|c| !c.is_empty()) {
        segments.push(format!("Context from Book:\n\n'{}'", context));
    }

    segments.push(format!("Student Question: {}", request.message));
    segments
}

pub fn personalize_prompt(request: &PersonalizeRequest) -> String {
    format!(
        "Act as an expert technical editor. Rewrite the following content to be understandable for a student with this background:
- Software: {}
- Hardware: {}

Maintain technical accuracy but use relevant analogies.

Original Content:
{}",
        request.user_profile.software_background,
        request.user_profile.hardware_background,
        truncate_content(&request.content)
    )
}

pub fn translate_prompt(request: &TranslateRequest) -> String {
    format!(
        "Translate technical documentation to {}. Keep keywords (ROS 2, PID) in English.\n\n{}",
        request.target_language,
        truncate_content(&request.content)
    )
}
