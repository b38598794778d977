use std::io::Write;

use env_logger::{Builder, Env};

/// Initializes the logger: Debug level under `--debug`, Info otherwise,
/// `RUST_LOG` overriding both. Lines go to stderr.
pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };

    Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            let level_color = match record.level() {
                log::Level::Error => "\x1b[31;1m",
                log::Level::Warn => "\x1b[33m",
                log::Level::Info => "\x1b[32m",
                log::Level::Debug => "\x1b[34m",
                log::Level::Trace => "\x1b[36m",
            };
            let reset = "\x1b[0m";

            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);

            // 2025-12-29 10:30:45.123 INFO [server.rs:58] [cw_server::server] listening on port 5025
            writeln!(
                buf,
                "{} {}{} [{}:{}] [{}] {}{}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                level_color,
                record.level(),
                file,
                line,
                record.target(),
                record.args(),
                reset
            )
        })
        .init();
}
