use lazy_static::lazy_static;
use std::{env, io};
use tracing::{debug, warn, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

lazy_static! {
    static ref LOG_LEVEL: Option<String> = env::var("LOG_LEVEL").ok();
}

fn crate_level() -> Level {
    match LOG_LEVEL.as_ref() {
        None => Level::INFO,
        Some(level) => level.parse().unwrap_or_else(|_| {
            eprintln!("Invalid LOG_LEVEL '{}'. Falling back to INFO.", level);
            Level::INFO
        }),
    }
}

pub fn setup_tracing() {
    let level = crate_level();
    let filter = filter::Targets::new()
        .with_target("musicvibes", level)
        .with_default(Level::WARN);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stdout));

    match registry.try_init() {
        Ok(_) => debug!("Tracing initialized at {}", level),
        Err(_) => warn!("Tracing was already initialized. Keeping the existing subscriber."),
    }
}
