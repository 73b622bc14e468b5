use clap::Parser;
use post_search::core::config::{self, CliOverrides};
use post_search::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "post-search", about = "Fetch posts and search them by title")]
struct Args {
    /// Endpoint returning a JSON array of posts
    #[arg(short, long)]
    url: Option<String>,

    /// Log level written to post-search.log (off, error, warn, info, debug, trace)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config errors are reported once the logger is up
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::PostSearchConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            url: args.url.as_deref(),
            log_level: args.log_level.as_deref(),
        },
    );

    // Initialize file logger - writes to post-search.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("post-search.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("post-search starting up, fetching from {}", resolved.posts_url);

    tui::run(resolved)
}
