use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::catalog::provider::{CatalogProvider, EmbeddedCatalog, JsonFileCatalog};
use crate::codegen::typescript::TypeScriptModule;
use crate::export::{export_catalog, DEFAULT_OUTPUT};

#[derive(Args)]
pub struct ExportArgs {
    /// JSON catalog dump to read instead of the embedded sample
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Destination of the generated TypeScript module
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

pub fn run(args: ExportArgs, verbose: bool) -> anyhow::Result<()> {
    let provider: Box<dyn CatalogProvider> = match args.catalog {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => {
            warn!(
                "No --catalog given; exporting the embedded sample, not the full enzyme catalog"
            );
            Box::new(EmbeddedCatalog)
        }
    };

    if verbose {
        eprintln!("Reading enzyme catalog from {}", provider.source());
    }

    let module = TypeScriptModule::default().with_source(provider.source());
    let summary = export_catalog(provider.as_ref(), &module, &args.output)?;

    if verbose {
        eprintln!("Skipped {} catalog entries", summary.skipped);
    }

    println!(
        "Generated {} with {} enzymes",
        summary.path.display(),
        summary.emitted
    );

    Ok(())
}
