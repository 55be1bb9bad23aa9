use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use embedgen_core::driver;
use embedgen_core::manifest::{manifest_base_dir, Manifest};
use embedgen_core::model::{EmissionRequest, GenerationReport};
use tracing::{debug, info};

use crate::commands::name_policy;

/// Directory the reference payloads are read from when no manifest is given.
pub const DEFAULT_PAYLOAD_DIR: &str = "user_programs";

/// Collect requests from a manifest, or the default pair in `dir`.
pub fn generate_requests(manifest: Option<&Path>, dir: &Path) -> Result<Vec<EmissionRequest>> {
    match manifest {
        Some(path) => {
            let manifest = Manifest::load(path)
                .with_context(|| format!("Failed to load manifest {}", path.display()))?;
            Ok(manifest.requests(&manifest_base_dir(path)))
        }
        None => Ok(Manifest::default_targets().requests(dir)),
    }
}

/// Embed every target and report what was written.
pub fn generate_command(
    manifest: Option<PathBuf>,
    dir: &Path,
    strict_names: bool,
    json: bool,
) -> Result<Vec<GenerationReport>> {
    let requests = generate_requests(manifest.as_deref(), dir)?;
    debug!(count = requests.len(), "collected emission requests");
    let reports =
        driver::run(&requests, name_policy(strict_names)).context("Failed to generate units")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(reports);
    }

    for report in &reports {
        info!("Generated {} ({} bytes)", report.output, report.size);
    }
    println!("Generated {}", summary_line(&reports));

    Ok(reports)
}

/// `a.c and b.c` / `a.c, b.c and c.c`, using output file names.
pub fn summary_line(reports: &[GenerationReport]) -> String {
    let names: Vec<String> = reports
        .iter()
        .map(|r| {
            Path::new(&r.output)
                .file_name()
                .map(|os| os.to_string_lossy().to_string())
                .unwrap_or_else(|| r.output.clone())
        })
        .collect();

    match names.split_last() {
        None => "nothing".to_string(),
        Some((last, [])) => last.clone(),
        Some((last, rest)) => format!("{} and {}", rest.join(", "), last),
    }
}
