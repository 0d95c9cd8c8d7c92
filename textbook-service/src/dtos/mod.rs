pub mod requests;
pub mod responses;

pub use requests::{ChatRequest, PersonalizeRequest, TranslateRequest, UserProfile};
pub use responses::{ChatResponse, ContentResponse, StatusResponse};
