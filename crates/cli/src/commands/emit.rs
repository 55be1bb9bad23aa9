use std::path::Path;

use anyhow::{Context, Result};
use embedgen_core::driver;
use embedgen_core::emit::emit;
use embedgen_core::emit::ident::identifier_from_path;
use embedgen_core::model::EmissionRequest;

use crate::commands::name_policy;

/// Embed a single payload, either to a file or to stdout.
pub fn emit_command(
    input: &Path,
    name: Option<String>,
    output: Option<&Path>,
    to_stdout: bool,
    strict_names: bool,
) -> Result<()> {
    let name = name.unwrap_or_else(|| identifier_from_path(input));

    if to_stdout {
        name_policy(strict_names).check(&name)?;
        let unit =
            emit(input, &name).with_context(|| format!("Failed to embed {}", input.display()))?;
        print!("{}", unit.text);
        return Ok(());
    }

    let mut request = EmissionRequest::new(input, name);
    if let Some(output) = output {
        request = request.with_output(output);
    }

    let report = driver::run_one(&request, name_policy(strict_names))
        .with_context(|| format!("Failed to embed {}", input.display()))?;

    println!("Generated {} ({} bytes)", report.output, report.size);
    Ok(())
}
