use anyhow::{Context, Result};

fn main() -> Result<()> {
    let _cli = qualgen::cli::parse_args();
    qualgen::observability::init_tracing();

    qualgen::commands::run_generate()
        .context("Failed to write specializations to standard output")?;

    Ok(())
}
