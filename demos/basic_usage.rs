//! Basic logger usage example
//!
//! Demonstrates levels, hierarchical names, fields, printf formatting,
//! themes and file output.
//!
//! Run with: cargo run --example basic_usage [level]

use redlog::prelude::*;
use redlog::{fields, fmt, info, warn};
use std::fmt as stdfmt;

struct Endpoint {
    host: &'static str,
    port: u16,
}

impl stdfmt::Display for Endpoint {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

fn main() -> Result<()> {
    println!("=== redlog - Basic Usage Example ===\n");

    let level = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<Level>().map_err(LoggerError::other)?,
        None => Level::Annoying,
    };
    redlog::set_level(level);

    let log = redlog::get_logger("demo");

    println!("1. Logging at every level (threshold: {}):", level);
    log.critical("This is a critical message");
    log.error("This is an error message");
    log.warn("This is a warning message");
    log.info("This is an info message");
    log.verbose("This is a verbose message");
    log.trace("This is a trace message");
    log.debug("This is a debug message");
    log.pedantic("This is a pedantic message");
    log.annoying("This is an annoying message");

    println!("\n2. Hierarchical names and fields:");
    let db = log.with_name("db").with_field("pool", "primary");
    db.inf("connected");
    db.with_name("query")
        .info_with("slow query", fields!("ms" => 1250, "rows" => 42));

    println!("\n3. printf-style formatting:");
    let endpoint = Endpoint { host: "localhost", port: 8080 };
    info!(log, "listening on %s", endpoint);
    log.wrn_f("disk usage at %.1f%%", &[Arg::Float(91.25)]);
    println!("   fmt!: {}", fmt!("[%08d] %-8s|%5.2f", 42, "status", 3.14159));

    println!("\n4. Changing the threshold at runtime:");
    redlog::set_level(Level::Info);
    log.debug("Debug message (hidden)");
    warn!(log, "Warning message (visible)");

    println!("\n5. Themes:");
    redlog::set_theme(Theme::minlog());
    log.info("minlog theme");
    redlog::set_theme(Theme::plain());
    log.info("plain theme");
    redlog::set_theme(Theme::default());

    println!("\n6. File and JSON output:");
    let path = std::env::temp_dir().join("redlog_demo.log");
    let file_log = Logger::builder()
        .name("file")
        .formatter(JsonFormatter::new())
        .sink(FileSink::new(&path)?)
        .build();
    file_log.info_with("written to file", Field::new("path", path.display().to_string()));
    file_log.flush()?;
    println!("   wrote JSON lines to {}", path.display());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
