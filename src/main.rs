use hello_app::{config::Config, routes, server::HttpServerBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to info so the startup line prints without RUST_LOG set.
    pretty_env_logger::formatted_builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = Config::from_env()?;

    let srv = HttpServerBuilder::default()
        .bind(config.listen_addr())
        .router(routes::router())
        .build()?;

    srv.serve().await
}
