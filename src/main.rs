// SPDX-License-Identifier: MIT
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use sitenotice::render::to_page;
use sitenotice::{
    evaluate, read_config_file, render, BasePath, ConfigFetcher, Decision, Document, LiveUpdater,
    SiteLocation,
};

#[derive(Parser)]
#[command(
    name = "sitenotice",
    about = "Site status announcements for static sites — banners and maintenance overlays",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Site origin the engine runs against, e.g. https://user.github.io
    #[arg(long, env = "SITENOTICE_ORIGIN", default_value = "http://127.0.0.1:8000")]
    origin: String,

    /// Path of the page being evaluated (pre-normalization)
    #[arg(long, env = "SITENOTICE_PAGE_PATH", default_value = "/index.html")]
    page_path: String,

    /// Explicit base-path override; otherwise auto-detected from the origin
    #[arg(long, env = "SITENOTICE_BASE")]
    base: Option<String>,

    /// Read the configuration from a local file instead of fetching it
    #[arg(long)]
    file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "SITENOTICE_LOG")]
    log: Option<String>,

    /// Write logs to this file path (rotated daily). Optional.
    #[arg(long, env = "SITENOTICE_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log output format: "pretty" (default) | "json"
    #[arg(long, env = "SITENOTICE_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate the configuration and print the decision.
    ///
    /// Examples:
    ///   sitenotice --origin https://user.github.io --page-path /repo/index.html check
    ///   sitenotice --file config.json check --json
    Check {
        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render the announcement as a standalone HTML page.
    ///
    /// Prints to stdout unless --output is given. Renders nothing (and says
    /// so in the logs) when the decision is a skip.
    Render {
        /// Write the page here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Render and keep the page live until interrupted.
    ///
    /// Rewrites the output file on every live-update mutation: rotating
    /// status line (4s), elapsed/ETA labels (1s), simulated progress (6s).
    Watch {
        /// Output HTML file, rewritten on every tick
        #[arg(long, default_value = "maintenance.html")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.log.as_deref().unwrap_or("info").to_owned();
    let _file_guard = setup_logging(&log_level, args.log_file.as_deref(), &args.log_format);

    let location = SiteLocation::new(args.origin.as_str(), args.page_path.as_str());
    let base = BasePath::detect(location, args.base.as_deref());

    let config = match &args.file {
        Some(path) => read_config_file(path),
        None => ConfigFetcher::new().fetch(&base).await,
    };

    let current_path = base.normalized_path();
    let decision = evaluate(config.as_ref(), &current_path);

    match args.command {
        Command::Check { json } => run_check(&decision, &current_path, json),
        Command::Render { output } => run_render(&decision, &base, output.as_deref())?,
        Command::Watch { output } => run_watch(decision, &base, &output).await?,
    }

    Ok(())
}

fn run_check(decision: &Decision, current_path: &str, json: bool) {
    if json {
        let value = match decision {
            Decision::Skip(reason) => serde_json::json!({
                "announce": false,
                "path": current_path,
                "reason": reason,
            }),
            Decision::Announce(policy) => serde_json::json!({
                "announce": true,
                "path": current_path,
                "policy": policy,
            }),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&value).unwrap_or_default()
        );
        return;
    }

    match decision {
        Decision::Skip(reason) => println!("{current_path}: nothing to announce ({reason})"),
        Decision::Announce(policy) => println!(
            "{current_path}: announce {} / {} — {}",
            policy.mode, policy.severity, policy.title
        ),
    }
}

fn run_render(decision: &Decision, base: &BasePath, output: Option<&Path>) -> Result<()> {
    match decision {
        Decision::Skip(reason) => {
            info!(%reason, "nothing to render");
        }
        Decision::Announce(policy) => {
            let doc = render(policy, base);
            let page = to_page(&doc, &policy.site_name);
            match output {
                Some(path) => std::fs::write(path, page)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => print!("{page}"),
            }
        }
    }
    Ok(())
}

async fn run_watch(decision: Decision, base: &BasePath, output: &Path) -> Result<()> {
    let policy = match decision {
        Decision::Skip(reason) => {
            info!(%reason, "nothing to announce");
            return Ok(());
        }
        Decision::Announce(policy) => policy,
    };

    let doc = render(&policy, base);
    write_page(output, &doc, &policy.site_name)?;

    let Some(updater) = LiveUpdater::mount(&policy, doc, Utc::now()) else {
        info!(path = %output.display(), "banner mode is static — wrote once");
        return Ok(());
    };

    let title = policy.site_name.clone();
    let out = output.to_path_buf();
    let sink = move |doc: &Document| {
        if let Err(e) = std::fs::write(&out, to_page(doc, &title)) {
            warn!(path = %out.display(), err = %e, "failed to write output");
        }
    };

    info!(path = %output.display(), "watching — Ctrl-C to stop");
    tokio::select! {
        _ = updater.run(sink) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("stopped");
        }
    }
    Ok(())
}

fn write_page(path: &Path, doc: &Document, title: &str) -> Result<()> {
    std::fs::write(path, to_page(doc, title))
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Initialize the tracing subscriber.
/// If `log_file` is set, logs go to both stdout and a daily-rolling file.
/// Returns a `WorkerGuard` that must stay alive for the process lifetime.
///
/// If the log directory cannot be created, falls back to stdout-only logging
/// with a warning — never panics.
fn setup_logging(
    log_level: &str,
    log_file: Option<&Path>,
    log_format: &str,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let use_json = log_format == "json";

    if let Some(path) = log_file {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let filename = path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("sitenotice.log"));

        // Ensure the directory exists before tracing-appender tries to open it.
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!(
                "warn: could not create log directory '{}': {e} — falling back to stdout",
                dir.display()
            );
            if use_json {
                tracing_subscriber::fmt().json().with_env_filter(log_level).init();
            } else {
                tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
            }
            return None;
        }

        let appender = tracing_appender::rolling::daily(dir, filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);

        if use_json {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().json())
                .with(fmt::layer().json().with_writer(non_blocking))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(EnvFilter::new(log_level))
                .with(fmt::layer().compact())
                .with(fmt::layer().with_writer(non_blocking))
                .init();
        }

        Some(guard)
    } else if use_json {
        tracing_subscriber::fmt().json().with_env_filter(log_level).init();
        None
    } else {
        tracing_subscriber::fmt().with_env_filter(log_level).compact().init();
        None
    }
}
