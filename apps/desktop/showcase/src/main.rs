//! Headless host for the widget page.
//!
//! Reads one command per line from stdin, dispatches it to the page and
//! prints the rendered document to stdout. `quit` or end of input
//! unmounts the page.

use showcase::error::ShowcaseError;
use showcase::event::parse_command;
use showcase::logger::initialize as LoggerInitialize;
use showcase::page::{PageSetup, spawn_page};

use common::ErrorLocation;
use widget_core::config::faq::FaqConfig;
use widget_core::config::{PageConfig, default_config_dir, default_log_dir};
use widget_core::profile::ProfileClient;

use std::env::current_dir;
use std::fs::create_dir_all;
use std::panic::Location;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::io::{AsyncBufReadExt, BufReader, stdin};

const QUIT_COMMAND: &str = "quit";

#[tokio::main]
async fn main() -> Result<(), ShowcaseError> {
    let log_dir = default_log_dir()?;
    create_dir_all(&log_dir).map_err(|e| ShowcaseError::Showcase {
        message: format!("Failed to create log directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    LoggerInitialize(&log_dir)?;

    info!("Widget showcase starting");
    info!("Log directory: {}", log_dir.display());

    let config_dir = default_config_dir()?;
    let page_config = PageConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!("Falling back to default config: {e}");
        PageConfig::default()
    });

    let resource_dir = current_dir().unwrap_or_else(|_| config_dir.clone());
    let faq_config = FaqConfig::load(&resource_dir)?;

    let client = ProfileClient::new(&page_config.profile.endpoint, page_config.profile.timeout())?;
    info!("Profiles from {}", client.endpoint());

    let page = spawn_page(
        PageSetup::from_config(&page_config, &faq_config),
        Arc::new(client),
    );
    print!("{}", page.document().await);

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await.map_err(|e| ShowcaseError::Showcase {
        message: format!("Failed to read stdin: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })? {
        if line.trim() == QUIT_COMMAND {
            break;
        }

        let events = match parse_command(&line) {
            Ok(events) => events,
            Err(e) => {
                error!("{e}");
                continue;
            }
        };

        for event in events {
            page.dispatch(event).await?;
        }
        page.flush().await?;
        print!("{}", page.document().await);
    }

    page.unmount().await?;
    info!("Widget showcase stopped");
    Ok(())
}
