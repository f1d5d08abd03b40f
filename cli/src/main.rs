//! Slice CLI - console entry point.
//!
//! # Architecture
//!
//! The CLI wires [`slice_config`] (settings) and [`slice_core`] (ordering
//! logic) to stdin/stdout:
//!
//! ```text
//! main() -> init_tracing() -> SliceConfig::load_or_default() -> Conversation::run()
//!                                                         |
//!                                                         v
//!                                          Ending::Confirmed | InputClosed
//! ```
//!
//! Logs go to a file so they never interleave with the conversation.

mod console;
mod conversation;

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use slice_config::{DisplaySettings, SliceConfig};
use slice_core::SummaryOptions;

use crate::console::Console;
use crate::conversation::Conversation;

/// Route tracing to the Slice log file. Stdout belongs to the conversation,
/// so when no log file can be opened events are filtered but not written.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let mut problems = Vec::new();
    let Some((path, file)) = log_file_locations()
        .into_iter()
        .find_map(|path| match open_log_file(&path) {
            Ok(file) => Some((path, file)),
            Err(problem) => {
                problems.push(problem);
                None
            }
        })
    else {
        tracing_subscriber::registry().with(env_filter).init();
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();

    tracing::info!(path = %path.display(), "Slice log opened");
    for problem in problems {
        tracing::warn!("{problem}");
    }
}

fn open_log_file(path: &Path) -> Result<fs::File, String> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|e| format!("Cannot create log directory {}: {e}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Cannot open log file {}: {e}", path.display()))
}

/// Next to the config file first, then under the working directory.
fn log_file_locations() -> Vec<PathBuf> {
    let beside_config = SliceConfig::path()
        .as_deref()
        .and_then(Path::parent)
        .map(|dir| dir.join("logs").join("slice.log"));
    let local = PathBuf::from(".slice").join("logs").join("slice.log");

    beside_config.into_iter().chain([local]).collect()
}

fn main() -> Result<()> {
    init_tracing();

    let config = SliceConfig::load_or_default();
    let settings = DisplaySettings::resolve(config.as_ref());
    let shop_name = config
        .as_ref()
        .map_or(slice_config::DEFAULT_SHOP_NAME, SliceConfig::shop_name)
        .to_string();

    let stdout = io::stdout();
    let color = settings.color && stdout.is_terminal();
    let console = Console::new(io::stdin().lock(), stdout, color);
    let mut conversation = Conversation::new(
        console,
        shop_name,
        SummaryOptions {
            show_empty: settings.show_empty,
        },
    );

    let ending = conversation.run()?;

    let session = conversation.session();
    tracing::info!(
        ?ending,
        utterances = session.log().len(),
        check = ?session.check(),
        "Session finished"
    );

    Ok(())
}
