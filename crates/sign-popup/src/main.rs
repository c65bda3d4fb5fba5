//! Sign popup: review and answer a pending wallet sign request.

use std::path::{Path, PathBuf};

use eframe::egui;
use eyre::{Result, WrapErr};
use sign_popup_adapters::PopupConfig;

mod app;
mod demo;
mod sign_ui;
mod ui;

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    location: Option<String>,
    config_path: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| eyre::eyre!("--config requires a path"))?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => eyre::bail!("unknown flag: {flag}"),
            _ if parsed.location.is_some() => eyre::bail!("unexpected argument: {arg}"),
            _ => parsed.location = Some(arg),
        }
    }
    Ok(parsed)
}

fn load_config(path: Option<&Path>) -> Result<PopupConfig> {
    let Some(path) = path else {
        return Ok(PopupConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading config {}", path.display()))?;
    PopupConfig::from_json(&raw).wrap_err_with(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let config = load_config(args.config_path.as_deref())?;

    tracing::info!(
        git = env!("GIT_HASH"),
        built = env!("BUILD_TIME"),
        "Starting sign popup"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sign Request")
            .with_inner_size([config.window_width, config.window_height])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "sign-popup",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::App::new(cc, config, args.location)))),
    )
    .map_err(|e| eyre::eyre!("popup window failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::{parse_args, CliArgs};
    use std::path::PathBuf;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn location_and_config_are_parsed() {
        let parsed = parse_args(args(&["/sign/2?external=true", "--config", "popup.json"]))
            .expect("valid args");
        assert_eq!(
            parsed,
            CliArgs {
                location: Some("/sign/2?external=true".to_owned()),
                config_path: Some(PathBuf::from("popup.json")),
            }
        );
    }

    #[test]
    fn no_args_means_demo_mode() {
        assert_eq!(parse_args(args(&[])).expect("empty"), CliArgs::default());
    }

    #[test]
    fn bad_args_are_rejected() {
        assert!(parse_args(args(&["--config"])).is_err());
        assert!(parse_args(args(&["--verbose"])).is_err());
        assert!(parse_args(args(&["/sign/1", "/sign/2"])).is_err());
    }
}
