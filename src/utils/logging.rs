use std::io::IsTerminal;

use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, LevelPadding, TermLogger, TerminalMode};

/// Installs a terminal logger on stderr, leaving stdout to the reports.
pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let mut builder = ConfigBuilder::new();
    builder.set_time_level(LevelFilter::Off);
    builder.set_thread_level(LevelFilter::Off);
    builder.set_target_level(LevelFilter::Error);
    builder.set_location_level(LevelFilter::Trace);
    builder.set_level_padding(LevelPadding::Right);

    let color = if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    TermLogger::init(level, builder.build(), TerminalMode::Stderr, color)
}
