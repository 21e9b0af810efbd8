use std::io::Write;

use env_logger::WriteStyle;
use log::LevelFilter;

/// Installs an `env_logger` backend for the `log` macros used by this crate.
///
/// Fails if a logger is already installed, so it is safe to call from every test.
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "[SIMWORLD | {}] {}", record.level(), record.args()))
        .write_style(WriteStyle::Always)
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .try_init()
}
