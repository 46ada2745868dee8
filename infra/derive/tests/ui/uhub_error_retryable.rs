use std::borrow::Cow;
use uhub_derive::uhub_error;

#[uhub_error]
pub enum DemoError {
    #[retryable]
    #[error("Provider unreachable{}: {message}", format_context(.context))]
    Unreachable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unsupported mapping for {provider}")]
    Unsupported { provider: String },
}

fn main() {
    let err = DemoError::Unreachable { message: "timeout".into(), context: None };
    assert!(err.is_retryable());
    assert!(!DemoError::Unsupported { provider: "zoho".to_owned() }.is_retryable());
}
