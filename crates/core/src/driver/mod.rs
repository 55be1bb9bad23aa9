//! Runs a sequence of emission requests.
//!
//! Requests are handled one at a time, in order. The first failure stops the
//! run; units written before it stay on disk (each one complete).

use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::emit::ident::check_identifier;
use crate::emit::{emit_payload, read_payload};
use crate::error::{EmbedError, EmbedResult};
use crate::model::{EmissionRequest, GenerationReport};
use crate::output::write_unit;

/// What to do with an identifier that is not a valid C identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamePolicy {
    /// Emit verbatim without checking.
    Allow,
    /// Log a warning, then emit verbatim.
    #[default]
    Warn,
    /// Fail the request before the payload is read.
    Reject,
}

impl NamePolicy {
    /// Apply the policy to `name`; only `Reject` can fail.
    pub fn check(self, name: &str) -> EmbedResult<()> {
        if self == Self::Allow {
            return Ok(());
        }
        match check_identifier(name) {
            Ok(()) => Ok(()),
            Err(err) if self == Self::Reject => Err(err),
            Err(EmbedError::InvalidIdentifier { reason, .. }) => {
                warn!(ident = name, reason, "identifier will not compile as C");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

/// Embed every request, writing each unit to its destination.
pub fn run(
    requests: &[EmissionRequest],
    policy: NamePolicy,
) -> EmbedResult<Vec<GenerationReport>> {
    requests.iter().map(|request| run_one(request, policy)).collect()
}

/// Embed one request.
pub fn run_one(request: &EmissionRequest, policy: NamePolicy) -> EmbedResult<GenerationReport> {
    policy.check(&request.name)?;

    let payload = read_payload(&request.source)?;
    let unit = emit_payload(&payload, &request.name);
    write_unit(&unit, &request.output)?;

    info!(
        name = %unit.name,
        source = %unit.source,
        output = %request.output.display(),
        bytes = unit.size,
        "generated unit"
    );

    Ok(GenerationReport {
        name: unit.name,
        source: unit.source,
        output: request.output.display().to_string(),
        size: unit.size,
        sha256: sha256_hex(payload.bytes()),
        generated_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
