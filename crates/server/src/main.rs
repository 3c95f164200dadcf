use sirius_api::{
    app,
    logging::{self, LoggingConfig},
    state::AppState,
};
use sirius_api_config::{Args, SiriusConfig, load_env_file};

#[cfg(not(target_os = "windows"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    load_env_file(&args.env_file);

    let config = SiriusConfig::from_env()?;

    logging::init_with_config(LoggingConfig {
        level: &config.log.level,
        json_format: config.log.json,
        strip_ansi: config.log.strip_ansi,
        write_to_file: config.log.write_to_file,
        write_path: &config.log.write_path,
        write_max_file_size: config.log.write_max_file_size,
        write_max_files: config.log.write_max_files,
    })?;

    // Extract values we need before moving config into state
    let log_level = config.log.level.clone();
    let addr = format!("{}:{}", config.http.host, config.http.port);

    let state = AppState::new(config);
    let app = app::create_app(state);

    tracing::info!("Starting server on {}", addr);
    tracing::info!("Log level: {}", log_level);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
