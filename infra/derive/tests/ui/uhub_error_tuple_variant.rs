use uhub_derive::uhub_error;

#[uhub_error]
pub enum DemoError {
    #[error("Payload error: {0}")]
    Payload(std::fmt::Error),
}

fn main() {}
