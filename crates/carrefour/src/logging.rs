use colored::Colorize;
use env_logger::{Builder, Env};

use std::io::Write;

/// Initializes the logger used by Carrefour.
///
/// Should be called once, early in the host application's entrypoint. The
/// filter defaults to `info` and can be overridden through `RUST_LOG`.
pub fn init_logging() {
    let logging_env = Env::default().filter_or("RUST_LOG", "info");
    Builder::from_env(logging_env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}",
                chrono::Local::now().format("%H:%M:%S").to_string().dimmed(),
                record.target().to_ascii_lowercase().bold().bright_yellow(),
                record.args()
            )
        })
        .init();
}
