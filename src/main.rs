use latticekit::{cli, init_logging, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::info!("LatticeKit {} (built {})", VERSION, BUILD_DATE);

    let args: Vec<String> = std::env::args().skip(1).collect();
    cli::run(args.as_slice())?;

    Ok(())
}
