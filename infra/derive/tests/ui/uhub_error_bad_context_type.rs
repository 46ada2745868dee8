use uhub_derive::uhub_error;

#[uhub_error]
pub enum DemoError {
    #[error("Payload error: {source}")]
    Payload {
        #[source]
        source: std::fmt::Error,
        context: Option<String>,
    },
}

fn main() {}
