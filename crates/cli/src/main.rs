//! huffpack: Huffman file/directory archiver.
//!
//! Subcommands:
//! - `compress <source> [dest]`: pack a file or directory tree
//! - `decompress <source> [dest]`: extract an archive
//! - `preview <source>`: print the archived path tree from the manifest
//!
//! All failures print a diagnostic and exit 1; the core library never
//! terminates the process itself.

mod config;
mod prompt;
mod treeprint;

use config::Command;
use huffpack_core::archive::{self, OverwriteDecision, OverwritePolicy};
use prompt::StdinPrompt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::from_args(&args) {
        Ok(command) => command,
        Err(usage) => {
            eprintln!("{usage}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(command) {
        eprintln!("ERROR: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> huffpack_core::Result<()> {
    match command {
        Command::Compress { source, dest } => run_compress(&source, &dest),
        Command::Decompress { source, dest_root } => run_decompress(&source, &dest_root),
        Command::Preview { source } => run_preview(&source),
    }
}

fn run_compress(source: &Path, dest: &Path) -> huffpack_core::Result<()> {
    let start = Instant::now();

    // writing the archive into itself would corrupt the input mid-scan
    if source == dest {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "source and destination are the same path",
        )
        .into());
    }

    if dest.exists() {
        let mut prompt = StdinPrompt;
        match prompt.ask(dest, dest.is_dir()) {
            OverwriteDecision::Overwrite | OverwriteDecision::OverwriteAll => {}
            OverwriteDecision::SkipAll => {
                println!("Not overwriting {}.", dest.display());
                return Ok(());
            }
        }
    }

    let root = archive_root(source);
    let mut out = BufWriter::new(File::create(dest)?);
    let original_size = archive::compress(&root, source, &mut out)?;
    out.flush()?;

    let compressed_size = std::fs::metadata(dest)?.len();
    println!("Compression finished");
    if original_size == 0 {
        println!("Compression ratio: No non-empty file");
    } else {
        let percentage = compressed_size as f64 / original_size as f64 * 100.0;
        println!("Compression ratio: {percentage:.2}%");
    }
    println!(
        "Time Usage:      {:.3} seconds",
        start.elapsed().as_secs_f64()
    );
    println!("Original Size:   {}KB", original_size as f64 / 1000.0);
    println!("Compressed Size: {}KB", compressed_size as f64 / 1000.0);
    Ok(())
}

fn run_decompress(source: &Path, dest_root: &Path) -> huffpack_core::Result<()> {
    let start = Instant::now();

    if !source.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} is not a file", source.display()),
        )
        .into());
    }
    if !dest_root.exists() {
        std::fs::create_dir_all(dest_root)?;
    }

    let mut input = BufReader::new(File::open(source)?);
    let mut prompt = StdinPrompt;
    archive::decompress(dest_root, &mut input, &mut prompt)?;

    println!(
        "Decompression finished in {:.3} seconds",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn run_preview(source: &Path) -> huffpack_core::Result<()> {
    let start = Instant::now();

    if !source.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} is not a file", source.display()),
        )
        .into());
    }

    let mut input = BufReader::new(File::open(source)?);
    let paths = archive::read_manifest(&mut input)?;
    treeprint::print_tree(&paths);

    println!(
        "Preview finished in {:.3} seconds",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Archive paths are stored relative to the source's parent, so the
/// archive contains the source entry itself.
fn archive_root(source: &Path) -> PathBuf {
    match source.parent() {
        Some(parent) => parent.to_path_buf(),
        None => PathBuf::from("."),
    }
}
