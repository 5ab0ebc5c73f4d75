use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use tokio::sync::watch;
use crate::config::structs::configuration::Configuration;

pub fn setup_logging(config: &Configuration) -> Result<(), log::SetLoggerError>
{
    let level = match config.log_level.as_str() {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(io::stdout())
        .apply()?;
    info!("logging initialized.");
    Ok(())
}

/// Sleeps for `duration` unless shutdown is signalled first.
///
/// Returns `true` when the caller should stop.
pub async fn shutdown_waiting(duration: Duration, rx: &mut watch::Receiver<bool>) -> bool
{
    if *rx.borrow() {
        return true;
    }
    tokio::select! {
        _ = tokio::time::sleep(duration) => *rx.borrow(),
        changed = rx.changed() => changed.is_err() || *rx.borrow(),
    }
}

/// Resolves `host[:port]`, falling back to `default_port` when no port is given.
pub async fn resolve_address(address: &str, default_port: u16) -> io::Result<SocketAddr>
{
    if let Ok(socket_addr) = address.parse::<SocketAddr>() {
        return Ok(socket_addr);
    }
    let target = if address.rsplit_once(':').is_some_and(|(_, port)| port.parse::<u16>().is_ok()) {
        address.to_string()
    } else {
        format!("{address}:{default_port}")
    };
    tokio::net::lookup_host(target.as_str()).await?
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("could not resolve {address}")))
}
