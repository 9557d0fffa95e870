mod common;
mod config;
mod error;
mod identity;
mod network;
mod storage;
mod ui;

use std::error::Error;
use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use network::{ChatApi, HttpChatApi};
use storage::LocalStore;
use ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "chatspace",
    version,
    about = "Desktop chat client for a polled HTTP chat endpoint"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Chat endpoint URL (overrides config file and CHAT_ENDPOINT)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,
    /// Directory holding the local identity store
    #[arg(long, value_name = "DIR")]
    data_dir: Option<String>,
    /// Write the effective configuration to the config path and exit
    #[arg(long)]
    write_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    app_config.apply_env();
    if let Some(endpoint) = &cli.endpoint {
        app_config.override_endpoint(endpoint);
    }
    if let Some(data_dir) = cli.data_dir {
        app_config.data_dir = data_dir;
    }

    if cli.write_config {
        config::save_config(&cli.config, &app_config)?;
        log::info!("Wrote configuration to {}", cli.config);
        return Ok(());
    }

    storage::ensure_data_dir(&app_config.data_dir)?;
    let store = LocalStore::open_in(&app_config.data_dir)?;
    let identity = identity::resolve_identity(&store)?;
    let http_api = HttpChatApi::new(&app_config.endpoint, app_config.request_timeout())?;
    log::info!(
        "Starting as {} against {}",
        identity.user_id,
        http_api.endpoint()
    );
    let api: Arc<dyn ChatApi> = Arc::new(http_api);

    let runtime = tokio::runtime::Handle::current();
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "ChatSpace",
        options,
        Box::new(move |cc| {
            Ok(Box::new(ChatApp::new(
                cc, app_config, runtime, api, store, identity,
            )))
        }),
    )?;

    Ok(())
}
