use clap::Parser;
use courier_desk::utils::logger;
use courier_desk::{CliConfig, MenuSession, Package, PackageRegistry, ServiceTier, StdConsole};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting courier-desk");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut registry = PackageRegistry::new();
    if config.sample_data {
        seed_sample_data(&mut registry)?;
        tracing::info!("Preloaded {} sample packages", registry.len());
    }

    let mut session = MenuSession::new(registry, StdConsole::new());
    session.run()?;

    tracing::info!("Session closed");
    Ok(())
}

fn seed_sample_data(registry: &mut PackageRegistry) -> anyhow::Result<()> {
    registry.add(Package::new(
        "PKG00001",
        "12 Elm St",
        5.0,
        ServiceTier::Standard,
    )?);
    registry.add(Package::new(
        "PKG00002",
        "5 Oak Ave",
        2.0,
        ServiceTier::Express,
    )?);
    registry.add(Package::new(
        "PKG00003",
        "221 Baker Street",
        2.0,
        ServiceTier::Standard,
    )?);
    Ok(())
}
