pub mod emit;
pub mod generate;

pub use emit::*;
pub use generate::*;

use embedgen_core::driver::NamePolicy;

/// Name policy for the `--strict-names` flag.
pub fn name_policy(strict_names: bool) -> NamePolicy {
    if strict_names {
        NamePolicy::Reject
    } else {
        NamePolicy::Warn
    }
}
