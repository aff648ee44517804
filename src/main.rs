use anyhow::{Context, Result, bail};
use clap::Parser;

use calipers::Measurer;
use calipers::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(&cli);

    let measurer = Measurer::default();
    let mut failed = 0usize;

    for path in &cli.paths {
        match measurer.measure_path(path) {
            Ok(measurement) => {
                let line = cli::render(path, &measurement, cli.json)
                    .with_context(|| format!("Failed to render result for {:?}", path))?;
                println!("{}", line);
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), error = ?err, "measurement failed");
                eprintln!("{}", cli::render_error(path, &err));
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} files could not be measured", failed, cli.paths.len());
    }

    Ok(())
}
