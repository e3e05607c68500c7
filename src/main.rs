use anyhow::{Context, Result};
use log::LevelFilter;

use lerpvar::config::build::build_stream;
use lerpvar::config::choices::default_experiments;
use lerpvar::tasks::VarianceComparisonTask;
use lerpvar::utils::logging::init_logger;

fn main() -> Result<()> {
    init_logger(LevelFilter::Info).context("Failed to set the logger")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for choice in default_experiments() {
        let kind = choice.kind();
        let stream = build_stream(choice).with_context(|| format!("building {kind} stream"))?;
        VarianceComparisonTask::new(stream)
            .run(&mut out)
            .with_context(|| format!("comparing variances for {kind}"))?;
    }

    Ok(())
}
