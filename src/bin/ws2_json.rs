//! `ws2-json` — extract dialogue text from `.ws2` scripts to JSON, and
//! reimport translated text back into a new `.ws2` binary.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use ws2_toolkit::config::{ConfigLoader, DefaultMode, ToolConfig};
use ws2_toolkit::error::CliError;
use ws2_toolkit::{cli, codec, disassembler, json_layer, types::Encryption};

#[derive(Debug, Parser)]
#[command(author, version, about = "Extract and reimport WS2 dialogue text as JSON", long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EncryptionArg {
    Auto,
    Encrypted,
    Decrypted,
}

/// Resolve an `--encryption` flag against the loaded config: an explicit
/// `encrypted`/`decrypted` always wins, `auto` falls through to
/// `disasm.default_mode` (itself `auto` unless overridden).
fn resolve_mode(arg: EncryptionArg, config: &ToolConfig) -> Option<Encryption> {
    match arg {
        EncryptionArg::Auto => match config.disasm.default_mode {
            DefaultMode::Auto => None,
            DefaultMode::Encrypted => Some(Encryption::Encrypted),
            DefaultMode::Decrypted => Some(Encryption::Decrypted),
        },
        EncryptionArg::Encrypted => Some(Encryption::Encrypted),
        EncryptionArg::Decrypted => Some(Encryption::Decrypted),
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract every display name and dialogue message to a JSON array.
    Extract {
        /// Input `.ws2` file.
        input: PathBuf,

        /// Output JSON path.
        output: PathBuf,

        #[arg(long, value_enum, default_value = "auto")]
        encryption: EncryptionArg,
    },

    /// Reimport a JSON array of (possibly translated) entries into a fresh
    /// `.ws2` binary, using the original file as a structural template.
    /// `ws2_input`/`json_input` must both be files or both be directories;
    /// in the directory form, each `.ws2` file is paired with the `.json`
    /// file of the same relative name.
    Import {
        /// Original `.ws2` file or directory (template for structure and
        /// control codes).
        ws2_input: PathBuf,

        /// Input JSON file or directory, in the shape produced by `extract`.
        json_input: PathBuf,

        /// Output `.ws2` path, or output directory in the batch form.
        output: PathBuf,

        #[arg(long, value_enum, default_value = "auto")]
        encryption: EncryptionArg,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);
    let config = ConfigLoader::load().unwrap_or_default();

    let result = match cli.command {
        Command::Extract {
            input,
            output,
            encryption,
        } => run_extract(&input, &output, resolve_mode(encryption, &config), config.output.json_indent),
        Command::Import {
            ws2_input,
            json_input,
            output,
            encryption,
        } => run_import(
            &ws2_input,
            &json_input,
            &output,
            resolve_mode(encryption, &config),
            config.disasm.continue_on_error,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run_extract(
    input: &std::path::Path,
    output: &std::path::Path,
    mode: Option<Encryption>,
    indent: usize,
) -> ws2_toolkit::Result<()> {
    let data = std::fs::read(input)?;
    let lines = disassembler::disassemble(&data, mode);
    let entries = json_layer::extract(&lines);

    let indent_str = " ".repeat(indent);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent_str.as_bytes());
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(&entries, &mut ser)?;

    std::fs::write(output, buf)?;
    info!(count = entries.len(), output = %output.display(), "extracted");
    Ok(())
}

/// Import `<orig.ws2> <in.json> <out.ws2>`, either as a single file triple
/// or, when both inputs are directories, as a batch over every `.ws2` file
/// under `ws2_input` paired with the `.json` file of the same relative
/// name under `json_input`. Mixing a directory with a file is rejected as
/// a `ModeMismatch`, matching the original tool's batch contract.
fn run_import(
    ws2_input: &Path,
    json_input: &Path,
    output: &Path,
    mode: Option<Encryption>,
    continue_on_error: bool,
) -> ws2_toolkit::Result<()> {
    match (ws2_input.is_dir(), json_input.is_dir()) {
        (false, false) => import_one(ws2_input, json_input, output, mode),
        (true, true) => run_import_batch(ws2_input, json_input, output, mode, continue_on_error),
        (ws2_is_dir, _) => Err(CliError::ModeMismatch {
            reason: format!(
                "{} is a {} but {} is a {}",
                ws2_input.display(),
                if ws2_is_dir { "directory" } else { "file" },
                json_input.display(),
                if ws2_is_dir { "file" } else { "directory" },
            ),
        }
        .into()),
    }
}

fn run_import_batch(
    ws2_input: &Path,
    json_input: &Path,
    output_dir: &Path,
    mode: Option<Encryption>,
    continue_on_error: bool,
) -> ws2_toolkit::Result<()> {
    let files = cli::find_ws2_files(ws2_input)?;
    info!(count = files.len(), "importing");
    std::fs::create_dir_all(output_dir)?;

    for ws2_path in &files {
        let relative = ws2_path.strip_prefix(ws2_input).unwrap_or(ws2_path);
        let json_path = json_input.join(relative).with_extension("json");
        let out_path = output_dir.join(relative);

        let result = out_path
            .parent()
            .map(std::fs::create_dir_all)
            .transpose()
            .map_err(ws2_toolkit::Error::from)
            .and_then(|_| import_one(ws2_path, &json_path, &out_path, mode));

        match result {
            Ok(()) => info!(file = %ws2_path.display(), "imported"),
            Err(e) => {
                error!(file = %ws2_path.display(), error = %e, "failed to import");
                if !continue_on_error {
                    return Err(e);
                }
            }
        }
    }
    Ok(())
}

fn import_one(
    ws2_path: &Path,
    json_path: &Path,
    output: &Path,
    mode: Option<Encryption>,
) -> ws2_toolkit::Result<()> {
    let original = std::fs::read(ws2_path)?;
    let effective_mode = mode.unwrap_or_else(|| ws2_toolkit::detect::detect(&original));
    let lines = disassembler::disassemble(&original, Some(effective_mode));

    let json = std::fs::read_to_string(json_path)?;
    let entries = serde_json::from_str(&json)?;

    let assembled = json_layer::import(lines, &entries)?;
    let final_data = match effective_mode {
        Encryption::Encrypted => codec::encode(&assembled),
        Encryption::Decrypted => assembled,
    };
    std::fs::write(output, final_data)?;
    Ok(())
}
