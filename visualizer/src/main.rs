use anyhow::Context;
use app::App;
use chartcore::ApiClient;
use clap::Parser;
use config::ViewerConfig;
use iced::Theme;
use log::info;
use std::path::PathBuf;

mod app;
mod chart;
mod config;
mod view;

#[derive(Parser)]
#[command(author, version, about = "Metrics and ROC/PR chart viewer for the local metrics API")]
struct Args {
    /// Load viewer settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Base URL of the metrics API
    #[arg(long)]
    base_url: Option<String>,
    /// Initial series kind (sine, cosine, ramp, random, ...)
    #[arg(long)]
    kind: Option<String>,
    /// Initial sample count
    #[arg(long)]
    samples: Option<u32>,
    /// Initial noise level
    #[arg(long)]
    noise: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        ViewerConfig::load(path)?
    } else {
        ViewerConfig::default()
    }
    .with_overrides(args.base_url, args.kind, args.samples, args.noise);

    let client = ApiClient::new(&config.base_url)
        .with_context(|| format!("configuring metrics api at {}", config.base_url))?;
    info!("Metrics API at {}", client.base_url());

    iced::application(
        move || App::boot(client.clone(), &config),
        App::update,
        App::view,
    )
    .title(application_title)
    .theme(application_theme)
    .run()
    .context("running viewer")?;

    Ok(())
}

fn application_title(_: &App) -> String {
    "Minimal ML Charts".into()
}

fn application_theme(_: &App) -> Theme {
    Theme::Dark
}
