use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;
use std::fs;

// Define where to store logs
const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "pass_planner.log";

/// Initializes the global logger.
///
/// Call once at the start of `main`. The library never installs a logger on its own.
///
/// Log level is controlled by the `RUST_LOG` environment variable and defaults to `info`.
/// Example: `RUST_LOG=debug pass-planner --passes passes.json`
///
/// Logs are written to stderr and to `logs/pass_planner.log`.
pub fn init() {
    if let Err(e) = fs::create_dir_all(LOG_DIR) {
        eprintln!("Failed to create log directory at '{}': {}", LOG_DIR, e);
    }

    let log_file_path = format!("{}/{}", LOG_DIR, LOG_FILE);

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let log_level_filter = log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info);

    let base_config = Dispatch::new().level(log_level_filter).level_for("serde", LevelFilter::Warn);

    let console_config = Dispatch::new()
        .format(|out, message, record| {
            let colors = fern::colors::ColoredLevelConfig::new()
                .error(fern::colors::Color::Red)
                .warn(fern::colors::Color::Yellow)
                .info(fern::colors::Color::Green)
                .debug(fern::colors::Color::Blue)
                .trace(fern::colors::Color::BrightBlack);

            out.finish(format_args!("[{} {} {}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), colors.color(record.level()), record.target(), message))
        })
        .chain(std::io::stderr());

    let mut dispatch = base_config.chain(console_config);

    match fern::log_file(&log_file_path) {
        Ok(file) => {
            let file_config = Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!("[{} {} {}] {}", Local::now().format("%Y-%m-%d %H:%M:%S"), record.level(), record.target(), message))
                })
                .chain(file);
            dispatch = dispatch.chain(file_config);
        }
        Err(e) => eprintln!("Failed to open log file '{}': {}. Logging to console only.", log_file_path, e),
    }

    dispatch.apply().unwrap_or_else(|e| {
        eprintln!("Failed to apply logger configuration: {}", e);
    });

    log::info!("Logger initialized. Logging to console and '{}'.", log_file_path);
}
