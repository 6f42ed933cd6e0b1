//! tabgrab - CLI entry point.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use tabgrab::{
    browser::{ActiveTabProvider, ExplicitUrl, FrontmostBrowser},
    cli::Args,
    config::Config,
    download::{run_batch, run_single, YtDlpDownloader},
    error::{Error, Result},
    fs::{ensure_dir, plan_destination},
    media::{MediaUnit, MetadataResult},
    output::{
        metadata_spinner, Broadcast, ConsoleSink, DesktopSink, Notification, NotificationSink,
    },
    tools::Toolchain,
    ytdlp::YtDlp,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse_lenient();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    let sink = Broadcast::new(vec![
        Box::new(ConsoleSink::new(args.quiet)),
        Box::new(DesktopSink::new()),
    ]);

    if let Err(e) = run(args, &sink).await {
        match e {
            // No usable tab is a quiet no-op; the run was likely triggered
            // by accident.
            Error::NoActiveTabUrl => tracing::debug!("{}", e),
            e => {
                sink.notify(&Notification::error("tabgrab", &e.to_string()))
                    .await;
            }
        }
    }

    // Success and failure are signaled through notifications; the caller
    // always sees a clean exit.
    ExitCode::SUCCESS
}

async fn run(args: Args, sink: &dyn NotificationSink) -> Result<()> {
    let quiet = args.quiet;
    let debug = args.debug;
    let config_path = args.config.clone();

    // Resolve the URL to operate on
    let provider: Box<dyn ActiveTabProvider> = match &args.url {
        Some(url) => Box::new(ExplicitUrl(url.clone())),
        None => Box::new(FrontmostBrowser::new()),
    };
    let url = provider.active_url().await.ok_or(Error::NoActiveTabUrl)?;
    tracing::info!("Resolved URL: {}", url);

    // Load configuration and merge CLI overrides
    let mut config = Config::load_or_default(config_path.as_deref())?;
    args.merge_into_config(&mut config);

    // Locate external tools
    let toolchain = Toolchain::locate()?;
    let ytdlp = YtDlp::new(
        toolchain.ytdlp.clone(),
        toolchain.ffmpeg.clone(),
        config.downloader.cookies_from_browser.clone(),
        config.downloader.archive.clone(),
    );
    if debug {
        if let Some(version) = ytdlp.version().await {
            tracing::debug!("yt-dlp {}", version);
        }
    }

    // Resolve the URL into a unit of work
    let spinner = (!quiet).then(|| metadata_spinner("Fetching metadata..."));
    let metadata = ytdlp.fetch_metadata(&url).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let unit = match metadata {
        MetadataResult::Resolved(unit) => unit,
        MetadataResult::FetchFailed(detail) => {
            sink.notify(&Notification::warning(
                "Metadata lookup failed",
                &format!("Downloading the URL directly\n{detail}"),
            ))
            .await;
            MediaUnit::fallback(&url)
        }
        MetadataResult::ParseFailed(detail) => {
            sink.notify(&Notification::warning(
                "Metadata was unreadable",
                &format!("Downloading the URL directly\n{detail}"),
            ))
            .await;
            MediaUnit::fallback(&url)
        }
    };

    // Plan the destination and download
    let plan = plan_destination(&config, &unit);
    ensure_dir(&plan.directory)?;

    let downloader = YtDlpDownloader::new(&ytdlp, sink);
    let result = if unit.is_collection {
        run_batch(&unit, &plan, &downloader, sink, quiet).await
    } else {
        run_single(&unit, &plan, &downloader).await
    };

    tracing::info!(
        "Finished: {} ok, {} failed of {}",
        result.success_count,
        result.failure_count,
        result.total()
    );

    Ok(())
}
