use std::borrow::Cow;
use uhub_derive::uhub_error;

#[uhub_error]
pub enum DemoError {
    #[error("Payload error{}: {source}", format_context(.context))]
    Payload {
        #[source]
        source: std::fmt::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}
