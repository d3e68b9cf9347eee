// server/src/cli/logging.rs

use std::io::Write;

use chrono::Local;
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs the process logger: `[2025-01-31 12:00:00.000] INFO: message`.
///
/// `RUST_LOG` still wins over the level picked here.
pub fn init_logging(debug: bool) {
    let level = default_level(debug);
    let installed = Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();
    // A logger installed earlier in the process stays in place.
    if let Err(e) = installed {
        log::debug!("Keeping existing logger: {}", e);
    }
}

fn default_level(debug: bool) -> LevelFilter {
    if debug { LevelFilter::Debug } else { LevelFilter::Info }
}
