use anyhow::Context;
use uhub::domain::config::ApiConfig;
use uhub::kernel::config::load_config;
use uhub_logger::Logger;
use uhub_server::Server;

fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig = load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let _log = Logger::builder(env!("CARGO_PKG_NAME")).configure(&cfg.logging)?.init()?;
    let runtime = uhub_runtime::build(&cfg.runtime)?;

    let server = Server::builder().config(cfg).build()?;
    runtime.block_on(server.run())
}
