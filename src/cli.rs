//! Shared command-line plumbing for the `ws2-asm` and `ws2-json` binaries:
//! logging setup and the recursive `.ws2` file walk used by batch commands.

use std::path::{Path, PathBuf};

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ConfigLoader;
use crate::error::{CliError, Result};

/// Initialize `tracing` output. `-v` raises the default level one step per
/// occurrence; `WS2_TOOLKIT_LOG` (or the config file) always wins when set.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let config = ConfigLoader::load().unwrap_or_default();
    let default_directive = ConfigLoader::effective_log_filter(&config);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{default_directive},ws2_toolkit={level}")));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve `path` to the list of `.ws2` files it names: the file itself if
/// it is one, or every `.ws2` file found by walking it recursively.
pub fn find_ws2_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(CliError::PathNotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut out = Vec::new();
    collect_ws2_files(path, &mut out)?;
    if out.is_empty() {
        return Err(CliError::NoInputFiles {
            path: path.display().to_string(),
        }
        .into());
    }
    Ok(out)
}

fn collect_ws2_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_ws2_files(&path, out)?;
        } else if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ws2"))
        {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_file_input_is_returned_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.ws2");
        std::fs::write(&file, b"").unwrap();
        assert_eq!(find_ws2_files(&file).unwrap(), vec![file]);
    }

    #[test]
    fn directory_is_walked_recursively() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.WS2"), b"").unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("b.ws2"), b"").unwrap();
        std::fs::write(dir.path().join("c.txt"), b"").unwrap();

        let mut files = find_ws2_files(dir.path()).unwrap();
        files.sort();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn missing_path_is_an_error() {
        let err = find_ws2_files(Path::new("/no/such/path")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Cli(CliError::PathNotFound { .. })));
    }

    #[test]
    fn empty_directory_has_no_input_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = find_ws2_files(dir.path()).unwrap_err();
        assert!(matches!(err, crate::error::Error::Cli(CliError::NoInputFiles { .. })));
    }
}
