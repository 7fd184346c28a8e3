//! Interactive overwrite confirmation on stdin.
//!
//! Implements the core's `OverwritePolicy`, keeping all terminal
//! interaction out of the archive codec. "n" answers skip-all rather
//! than terminating: exit decisions belong to main alone.

use huffpack_core::archive::{OverwriteDecision, OverwritePolicy};
use std::io::BufRead;
use std::path::Path;

/// Prompts the user on stdin for each existing target.
pub struct StdinPrompt;

impl OverwritePolicy for StdinPrompt {
    fn ask(&mut self, path: &Path, is_dir: bool) -> OverwriteDecision {
        let kind = if is_dir { "Directory" } else { "File" };
        println!("{kind}: {} already exists.", path.display());
        println!("Do you want to overwrite it? (y/n)  Overwrite all? (a)");

        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            line.clear();
            match stdin.lock().read_line(&mut line) {
                // closed stdin: safest answer is to touch nothing
                Ok(0) | Err(_) => return OverwriteDecision::SkipAll,
                Ok(_) => {}
            }
            match line.trim().to_ascii_lowercase().as_str() {
                "y" => return OverwriteDecision::Overwrite,
                "n" => return OverwriteDecision::SkipAll,
                "a" => return OverwriteDecision::OverwriteAll,
                _ => {
                    println!("Invalid input. 'y' to overwrite, 'n' to skip remaining, 'a' to overwrite all")
                }
            }
        }
    }
}
