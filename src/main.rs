use clap::Parser;
use enzyme_export::cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("enzyme_export=debug,info")
    } else {
        EnvFilter::new("enzyme_export=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::export::run(cli.export, cli.verbose)?;

    Ok(())
}
