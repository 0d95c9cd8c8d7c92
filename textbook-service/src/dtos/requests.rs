use serde::Deserialize;

const DEFAULT_TARGET_LANGUAGE: &str = "Urdu";

/// Reader background supplied with a request. Never stored.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub name: String,
    #[serde(alias = "software_bg")]
    pub software_background: String,
    #[serde(alias = "hardware_bg")]
    pub hardware_background: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub user_profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonalizeRequest {
    pub content: String,
    pub user_profile: UserProfile,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateRequest {
    pub content: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

fn default_target_language() -> String {
    DEFAULT_TARGET_LANGUAGE.to_string()
}
