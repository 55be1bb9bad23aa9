use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use embedgen::commands::{emit_command, generate_command, DEFAULT_PAYLOAD_DIR};
use embedgen::init_logging;

/// Embed binary payloads into C source as constant byte arrays.
///
/// This CLI is a thin wrapper around `embedgen-core` (exposed in code as `embedgen_core`).
#[derive(Parser, Debug)]
#[command(
    name = "embedgen",
    version,
    about = "Embed binary payloads as C byte arrays",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Embed every target of a manifest, or the default user programs.
    ///
    /// Without `--manifest`, embeds `hello.elf` and `calc.elf` from `--dir`
    /// as `hello_elf_data` and `calc_elf_data`.
    Generate {
        /// JSON or YAML manifest listing `{source, name, output}` targets.
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Directory holding the default payloads (ignored with --manifest).
        #[arg(long, default_value = DEFAULT_PAYLOAD_DIR)]
        dir: PathBuf,

        /// Fail on identifiers that are not valid C identifiers.
        #[arg(long, default_value_t = false)]
        strict_names: bool,

        /// Emit JSON reports instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Embed a single payload file.
    Emit {
        /// Payload to embed.
        #[arg(long)]
        input: PathBuf,

        /// Array identifier. Defaults to the file name with `.` -> `_`, plus `_data`.
        #[arg(long)]
        name: Option<String>,

        /// Destination file. Defaults to `<name>.c` next to the input.
        #[arg(long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the generated unit instead of writing it.
        #[arg(long, default_value_t = false)]
        stdout: bool,

        /// Fail on identifiers that are not valid C identifiers.
        #[arg(long, default_value_t = false)]
        strict_names: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    // Default to generating the reference pair if no command is given.
    let command = cli.command.unwrap_or(Command::Generate {
        manifest: None,
        dir: PathBuf::from(DEFAULT_PAYLOAD_DIR),
        strict_names: false,
        json: false,
    });

    match command {
        Command::Generate { manifest, dir, strict_names, json } => {
            generate_command(manifest, &dir, strict_names, json)?;
        }
        Command::Emit { input, name, output, stdout, strict_names } => {
            emit_command(&input, name, output.as_deref(), stdout, strict_names)?
        }
    }

    Ok(())
}
