pub mod metrics;
pub mod prompt;
pub mod providers;
pub mod responder;

pub use self::metrics::{get_metrics, init_metrics};
pub use providers::{Generation, ProviderError, TextProvider};
pub use responder::generate_reply;
