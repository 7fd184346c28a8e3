//! Command-line argument handling for the huffpack binary.
//!
//! Parsing is deliberately plain: three subcommands with positional
//! arguments, no flags. A parse failure produces a usage string; the
//! caller turns that into exit code 1.

use std::path::{Path, PathBuf};

const USAGE: &str = "Usage: huffpack <compress|decompress|preview> <source> [dest]";

/// A fully resolved invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pack `source` (file or directory) into the archive `dest`
    Compress { source: PathBuf, dest: PathBuf },
    /// Extract the archive `source` under the directory `dest_root`
    Decompress { source: PathBuf, dest_root: PathBuf },
    /// Print the path tree stored in the archive's manifest
    Preview { source: PathBuf },
}

impl Command {
    /// Parse the arguments following the program name.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let subcommand = args.first().ok_or_else(|| USAGE.to_string())?;
        match subcommand.as_str() {
            "compress" => match args.len() {
                2 => {
                    let source = PathBuf::from(&args[1]);
                    let dest = default_archive_path(&source);
                    Ok(Command::Compress { source, dest })
                }
                3 => Ok(Command::Compress {
                    source: PathBuf::from(&args[1]),
                    dest: PathBuf::from(&args[2]),
                }),
                _ => Err("Usage: huffpack compress <source> [dest]".to_string()),
            },
            "decompress" => match args.len() {
                2 => {
                    let source = PathBuf::from(&args[1]);
                    let dest_root = default_extract_root(&source);
                    Ok(Command::Decompress { source, dest_root })
                }
                3 => Ok(Command::Decompress {
                    source: PathBuf::from(&args[1]),
                    dest_root: PathBuf::from(&args[2]),
                }),
                _ => Err("Usage: huffpack decompress <source> [dest]".to_string()),
            },
            "preview" => match args.len() {
                2 => Ok(Command::Preview {
                    source: PathBuf::from(&args[1]),
                }),
                _ => Err("Usage: huffpack preview <source>".to_string()),
            },
            other => Err(format!("unknown command '{other}'\n{USAGE}")),
        }
    }
}

/// Default archive name: source with its extension changed to (or
/// suffixed with) `.huff`.
fn default_archive_path(source: &Path) -> PathBuf {
    let mut dest = source.to_path_buf();
    dest.set_extension("huff");
    dest
}

/// Default extraction root: the archive's parent directory.
fn default_extract_root(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
