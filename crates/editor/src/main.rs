// Chunk: docs/chunks/appkit_shell - Native AppKit window shell
// Chunk: docs/chunks/editor_config - Config file resolution and parsing
//!
//! mesa-notepad: a minimal tabbed plain-text editor for macOS.
//!
//! Startup installs the log subscriber, reads the user configuration and
//! hands control to the AppKit event loop. Log verbosity follows `RUST_LOG`
//! (default `info`).

#[cfg(target_os = "macos")]
mod macos;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use mesa_notepad::config::EditorConfig;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EditorConfig::load();
    tracing::info!(title = %config.window_title, "starting editor");

    run(config)
}

#[cfg(target_os = "macos")]
fn run(config: EditorConfig) -> ExitCode {
    macos::run(config)
}

#[cfg(not(target_os = "macos"))]
fn run(_config: EditorConfig) -> ExitCode {
    tracing::error!("mesa-notepad needs macOS; the window shell is AppKit-only");
    ExitCode::FAILURE
}
