use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use smartcam_cache::application::{SetupSmartcamsUseCase, SmartcamImageCache};
use smartcam_cache::domain::CameraPort;
use smartcam_cache::infrastructure::{
    AppConfig, CliArgs, ConfigLoader, ReplaySession, ShutdownHooks,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }

    Ok(())
}

fn load_config(args: CliArgs) -> Result<AppConfig> {
    let loader = ConfigLoader::new()?;
    let mut config = loader.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

async fn poll(cameras: &[SmartcamImageCache]) {
    for camera in cameras {
        let name = CameraPort::name(camera).unwrap_or_else(|| camera.device().to_string());
        match CameraPort::camera_image(camera).await {
            Some(image) => info!(
                camera = %name,
                image_id = ?camera.current_image_id().map(|id| id.to_string()),
                size = image.len(),
                "Serving image"
            ),
            None => info!(camera = %name, "No image available"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let max_polls = args.polls;
    let config = load_config(args)?;

    init_logging(&config)?;

    info!(version = smartcam_cache::VERSION, "Starting {}", smartcam_cache::NAME);

    let overview = config
        .replay
        .overview
        .clone()
        .ok_or_else(|| eyre!("no overview file configured (--overview)"))?;
    let mirror = config
        .replay
        .mirror
        .clone()
        .or_else(|| overview.parent().map(std::path::Path::to_path_buf))
        .ok_or_else(|| eyre!("no mirror directory configured (--mirror)"))?;

    let session = Arc::new(ReplaySession::open(overview, mirror).await?);
    let hooks = Arc::new(ShutdownHooks::new());

    let setup = SetupSmartcamsUseCase::new(session.clone(), session, hooks.clone());
    let cameras = setup.execute(&config.smartcam_settings())?;
    if cameras.is_empty() {
        warn!("No Smartcam to poll");
        return Ok(());
    }

    let mut interval = tokio::time::interval(Duration::from_secs(config.poll_interval_secs.max(1)));
    let mut polls = 0u64;
    loop {
        tokio::select! {
            _ = interval.tick() => {
                poll(&cameras).await;
                polls += 1;
                if max_polls.is_some_and(|max| polls >= max) {
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        }
    }

    info!("Shutting down");
    hooks.fire()?;
    Ok(())
}
