//! `ws2-asm` — disassemble, assemble, and encrypt/decrypt `.ws2` scripts.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use ws2_toolkit::config::{ConfigLoader, DefaultMode, ToolConfig};
use ws2_toolkit::{assembler, cli, codec, disassembler, text, types::Encryption};

#[derive(Debug, Parser)]
#[command(author, version, about = "Disassemble, assemble, and encrypt WS2 scripts", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
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

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ToolMode {
    Encrypt,
    Decrypt,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Disassemble a `.ws2` file, or every `.ws2` file under a directory.
    Disasm {
        /// Input `.ws2` file or directory to walk recursively.
        input: PathBuf,

        /// Output directory; each file is written as `<name>.ws2.asm.txt`.
        /// Defaults to `output.default_disasm_dir` from the config file.
        output_dir: Option<PathBuf>,

        /// Obfuscation mode; default auto-detects per file.
        #[arg(long, value_enum, default_value = "auto")]
        encryption: EncryptionArg,
    },

    /// Assemble a disassembly text file back into a `.ws2` binary.
    Assemble {
        /// Input `.asm.txt` source.
        input: PathBuf,

        /// Output `.ws2` path.
        output: PathBuf,

        /// Write the raw (unencrypted) bytecode instead of encrypting it.
        #[arg(long)]
        no_encrypt: bool,
    },

    /// Encrypt or decrypt `.ws2` files without touching their bytecode.
    Tool {
        #[arg(value_enum)]
        mode: ToolMode,

        /// Input `.ws2` file or directory to walk recursively.
        input: PathBuf,

        /// Output directory.
        output_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);
    let config = ConfigLoader::load().unwrap_or_default();

    let result = match cli.command {
        Command::Disasm {
            input,
            output_dir,
            encryption,
        } => {
            let output_dir = output_dir.unwrap_or_else(|| config.output.default_disasm_dir.clone().into());
            run_disasm(
                &input,
                &output_dir,
                resolve_mode(encryption, &config),
                config.disasm.continue_on_error,
            )
        }
        Command::Assemble {
            input,
            output,
            no_encrypt,
        } => run_assemble(&input, &output, !no_encrypt),
        Command::Tool { mode, input, output_dir } => {
            run_tool(mode, &input, &output_dir, config.disasm.continue_on_error)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run_disasm(
    input: &std::path::Path,
    output_dir: &std::path::Path,
    mode: Option<Encryption>,
    continue_on_error: bool,
) -> ws2_toolkit::Result<()> {
    let files = cli::find_ws2_files(input)?;
    info!(count = files.len(), "disassembling");
    std::fs::create_dir_all(output_dir)?;

    for file in &files {
        let result = std::fs::read(file).and_then(|data| {
            let lines = disassembler::disassemble(&data, mode);
            let rendered = text::render_lines(&lines);
            let out_name = format!(
                "{}.asm.txt",
                file.file_name().unwrap_or_default().to_string_lossy()
            );
            std::fs::write(output_dir.join(out_name), rendered)
        });
        match result {
            Ok(()) => info!(file = %file.display(), "disassembled"),
            Err(e) => {
                error!(file = %file.display(), error = %e, "failed to disassemble");
                if !continue_on_error {
                    return Err(e.into());
                }
            }
        }
    }
    Ok(())
}

fn run_assemble(input: &std::path::Path, output: &std::path::Path, should_encrypt: bool) -> ws2_toolkit::Result<()> {
    let source = std::fs::read_to_string(input)?;
    let lines = text::parse_lines(&source)?;
    let assembled = assembler::assemble(&lines)?;
    let final_data = if should_encrypt {
        codec::encode(&assembled)
    } else {
        assembled
    };
    std::fs::write(output, final_data)?;
    info!(output = %output.display(), "assembled");
    Ok(())
}

fn run_tool(
    mode: ToolMode,
    input: &std::path::Path,
    output_dir: &std::path::Path,
    continue_on_error: bool,
) -> ws2_toolkit::Result<()> {
    let files = cli::find_ws2_files(input)?;
    info!(count = files.len(), mode = ?mode, "processing");
    std::fs::create_dir_all(output_dir)?;

    for file in &files {
        let result = std::fs::read(file).map(|data| match mode {
            ToolMode::Encrypt => codec::encode(&data),
            ToolMode::Decrypt => codec::decode(&data),
        });
        match result {
            Ok(out_data) => {
                let name = file.file_name().unwrap_or_default().to_string_lossy().to_string();
                let out_name = if name.to_lowercase().ends_with(".ws2") {
                    name
                } else {
                    format!("{name}.ws2")
                };
                if let Err(e) = std::fs::write(output_dir.join(&out_name), out_data) {
                    error!(file = %file.display(), error = %e, "failed to write output");
                    if !continue_on_error {
                        return Err(e.into());
                    }
                } else {
                    info!(file = %file.display(), output = %out_name, "processed");
                }
            }
            Err(e) => {
                error!(file = %file.display(), error = %e, "failed to read input");
                if !continue_on_error {
                    return Err(e.into());
                }
            }
        }
    }
    Ok(())
}
