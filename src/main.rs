// ChromaLog - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and validation
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use chromalog::app;
pub use chromalog::core;
pub use chromalog::platform;
pub use chromalog::ui;
pub use chromalog::util;

use clap::Parser;

/// Compile-time-embedded icon PNG bytes.
///
/// Using `include_bytes!` ensures the asset is baked into the binary so the
/// icon is always available regardless of the working directory at runtime.
static ICON_PNG: &[u8] = include_bytes!("../assets/icon.png");

/// Decode the embedded PNG and return an `eframe`-compatible `IconData`.
///
/// Falls back to a transparent 1x1 placeholder if decoding fails so the
/// application always launches rather than panicking on a bad asset.
fn load_icon() -> egui::IconData {
    match image::load_from_memory_with_format(ICON_PNG, image::ImageFormat::Png) {
        Ok(img) => {
            let rgba = img.into_rgba8();
            let (width, height) = rgba.dimensions();
            egui::IconData {
                rgba: rgba.into_raw(),
                width,
                height,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode icon PNG; using placeholder");
            egui::IconData {
                rgba: vec![0u8; 4],
                width: 1,
                height: 1,
            }
        }
    }
}

/// ChromaLog - colour-coded, thread-safe logging console demo.
///
/// Opens a window hosting the console; any thread holding the sink handle
/// can append entries, which are marshaled onto the UI thread for display.
#[derive(Parser, Debug)]
#[command(name = "ChromaLog", version, about)]
struct Cli {
    /// Palette override: "dark" or "light" (takes precedence over config.toml).
    #[arg(short = 't', long = "theme")]
    theme: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before the subscriber exists;
    // validation warnings are re-logged once logging is up.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (mut config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref(), config.log_file.as_deref());

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    // CLI palette override.
    if let Some(ref theme) = cli.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => tracing::warn!(
                theme = other,
                "Unrecognised --theme value; expected \"dark\" or \"light\""
            ),
        }
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        dark_mode = config.dark_mode,
        "ChromaLog starting"
    );

    let state = app::state::AppState::new(&config, platform::fs::default_save_dir());

    // The icon is applied at two levels:
    //   1. OS-level (Windows EXE resource), embedded by build.rs via winres.
    //      This covers the taskbar, Alt+Tab, title bar, and Explorer.
    //   2. Runtime (eframe viewport), loaded here from the PNG asset.
    //      This covers the eframe-managed window icon on all platforms and
    //      acts as the canonical source on Linux/macOS.
    let icon_data = load_icon();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([480.0, 320.0])
            .with_icon(icon_data),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::ChromaLogApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ChromaLog GUI: {e}");
        std::process::exit(1);
    }
}
