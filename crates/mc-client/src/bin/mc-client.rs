use std::path::Path;
use std::sync::Arc;

use mc_client::Connection;
use mc_data::GameVersion;
use tracing::{error, info};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("mc_client=info".parse()?),
        )
        .init();

    if let Err(err) = run() {
        error!("{err:?}");
        return Err(err);
    }
    Ok(())
}

fn run() -> eyre::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let host = args.get(1).map_or("127.0.0.1", |s| s.as_str());
    let port: u16 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(25565);
    let protocol_version: i32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(763);
    let blocks_path = args.get(4).map_or("blocks.json", |s| s.as_str());
    let biomes_path = args.get(5).map_or("biomes.json", |s| s.as_str());

    info!(host, port, protocol_version, "loading game version registry");
    let version = Arc::new(GameVersion::load(
        protocol_version,
        Path::new(blocks_path),
        Path::new(biomes_path),
    )?);

    info!(host, port, "connecting");
    let mut connection = Connection::connect(host, port, protocol_version, version)?;
    info!("logged in, entering play loop");

    connection.events.on_event(|event| {
        info!(?event, "event");
        0
    });

    connection.run()?;
    info!("disconnected");
    Ok(())
}
