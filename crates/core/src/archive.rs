//! Archive framing: header, manifest, and per-entry blocks over a
//! directory tree.
//!
//! # Container Format
//!
//! ```text
//! +--------------------+
//! | Magic (2 bytes)    |  0x7F 0x9B
//! +--------------------+
//! | manifest           |  NUL-terminated relative paths, one per
//! | (variable)         |  entry, in DFS order
//! +--------------------+
//! | manifest end (1)   |  0xB7
//! +--------------------+
//! | entry blocks       |  repeated to end of stream
//! | (variable)         |
//! +--------------------+
//! ```
//!
//! Entry block: 1 tag byte (0xBC file, 0xB1 directory) + NUL-terminated
//! relative path. File entries additionally carry the 257-byte length
//! table and a bit-packed payload terminated by the sentinel's code --
//! no length prefix, decoding self-terminates.
//!
//! The manifest and the entry blocks enumerate entries in the same
//! order: a depth-first traversal with an explicit stack, children
//! pushed in enumeration order (sorted by file name) and therefore
//! visited in reverse of it. Both passes share one collected entry
//! list, so the orders cannot diverge.
//!
//! Paths are stored as raw UTF-8 bytes with `/`-separated components
//! and no escaping; a path containing the terminator byte is rejected.

use crate::canonical::{lengths_from_tree, tree_from_lengths, LengthTable};
use crate::codec::{encode_stream, Decoder};
use crate::error::{FormatError, Result};
use crate::freq::{FrequencyTable, ALPHABET_SIZE};
use crate::tree::{build_tree, CodeTable};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 2-byte magic identifying a huffpack archive.
pub const ARCHIVE_MAGIC: [u8; 2] = [0x7F, 0x9B];

/// Marks the end of the manifest, distinct from any path content.
pub const MANIFEST_END: u8 = 0xB7;

/// Tag byte opening a file entry block.
pub const FILE_TAG: u8 = 0xBC;

/// Tag byte opening a directory entry block.
pub const DIRECTORY_TAG: u8 = 0xB1;

/// Terminates every path string.
pub const PATH_TERMINATOR: u8 = 0x00;

/// Answer from the overwrite collaborator for one existing target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteDecision {
    /// Overwrite this target and keep asking for later ones
    Overwrite,
    /// Skip this and every remaining existing target without asking
    SkipAll,
    /// Overwrite this and every remaining existing target without asking
    OverwriteAll,
}

/// Overwrite confirmation collaborator, consulted only when a
/// destination already exists. Once `OverwriteAll` (or `SkipAll`) is
/// returned, the core never calls it again for the rest of the run.
pub trait OverwritePolicy {
    fn ask(&mut self, path: &Path, is_dir: bool) -> OverwriteDecision;
}

/// Run-scoped overwrite state, owned by the core so policies stay
/// stateless about "all remaining" decisions.
struct OverwriteGuard<'a> {
    policy: &'a mut dyn OverwritePolicy,
    mode: GuardMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardMode {
    Ask,
    AllowAll,
    SkipAll,
}

impl<'a> OverwriteGuard<'a> {
    fn new(policy: &'a mut dyn OverwritePolicy) -> Self {
        Self {
            policy,
            mode: GuardMode::Ask,
        }
    }

    /// Whether an existing target may be overwritten.
    fn allow(&mut self, path: &Path, is_dir: bool) -> bool {
        match self.mode {
            GuardMode::AllowAll => true,
            GuardMode::SkipAll => false,
            GuardMode::Ask => match self.policy.ask(path, is_dir) {
                OverwriteDecision::Overwrite => true,
                OverwriteDecision::OverwriteAll => {
                    self.mode = GuardMode::AllowAll;
                    true
                }
                OverwriteDecision::SkipAll => {
                    self.mode = GuardMode::SkipAll;
                    false
                }
            },
        }
    }
}

/// One source tree entry in archive order.
#[derive(Debug)]
struct SourceEntry {
    path: PathBuf,
    relative: String,
    is_dir: bool,
}

/// Compress `source` (a file or directory under `root`) into `dest`.
///
/// Paths inside the archive are relative to `root`; callers normally
/// pass the source's parent so the archive contains the source entry
/// itself. Returns the total raw size of all archived files in bytes,
/// for ratio reporting.
pub fn compress<W: Write>(root: &Path, source: &Path, dest: &mut W) -> Result<u64> {
    let entries = collect_entries(root, source)?;
    info!(entries = entries.len(), "writing archive");

    dest.write_all(&ARCHIVE_MAGIC)?;
    for entry in &entries {
        write_path(dest, &entry.relative)?;
    }
    dest.write_all(&[MANIFEST_END])?;

    let mut raw_total = 0u64;
    for entry in &entries {
        if entry.is_dir {
            dest.write_all(&[DIRECTORY_TAG])?;
            write_path(dest, &entry.relative)?;
        } else {
            raw_total += compress_file(&entry.path, &entry.relative, dest)?;
        }
    }
    Ok(raw_total)
}

/// Extract an archive from `source` into `dest_root`.
///
/// A bad magic or an unrecognized entry tag aborts the whole
/// operation: the format has no resynchronization marker, so nothing
/// past a corrupt point can be recovered. Failures scoped to a single
/// file entry (destination cannot be opened, payload fails to decode)
/// are logged and extraction continues with the next entry.
pub fn decompress<R: Read>(
    dest_root: &Path,
    source: &mut R,
    policy: &mut dyn OverwritePolicy,
) -> Result<()> {
    check_magic(source)?;
    skip_manifest(source)?;

    let mut guard = OverwriteGuard::new(policy);
    loop {
        // input exhausted at a block boundary means we are done
        let tag = match read_byte(source)? {
            Some(tag) => tag,
            None => break,
        };
        match tag {
            DIRECTORY_TAG => {
                let relative = read_path(source)?;
                extract_directory(dest_root, &relative, &mut guard)?;
            }
            FILE_TAG => {
                let relative = read_path(source)?;
                if let Err(err) = extract_file(dest_root, &relative, source, &mut guard) {
                    warn!(path = %relative, error = %err, "failed to extract file entry, continuing");
                }
            }
            other => return Err(FormatError::UnknownTag(other).into()),
        }
    }
    Ok(())
}

/// Read only the manifest: the relative path of every entry, in
/// archive order. Never touches entry blocks or payloads.
pub fn read_manifest<R: Read>(source: &mut R) -> Result<Vec<String>> {
    check_magic(source)?;
    let mut paths = Vec::new();
    loop {
        match read_byte(source)? {
            None => return Err(FormatError::Truncated("manifest").into()),
            Some(MANIFEST_END) => return Ok(paths),
            Some(first) => {
                let mut bytes = vec![first];
                read_until_terminator(source, &mut bytes)?;
                paths.push(decode_path(bytes)?);
            }
        }
    }
}

/// Enumerate the source tree in archive order: explicit stack,
/// children pushed sorted by name, visited in reverse.
fn collect_entries(root: &Path, source: &Path) -> Result<Vec<SourceEntry>> {
    let mut stack = vec![source.to_path_buf()];
    let mut entries = Vec::new();
    while let Some(path) = stack.pop() {
        let relative = relative_path_string(root, &path)?;
        let metadata = std::fs::metadata(&path)?;
        let is_dir = metadata.is_dir();
        if is_dir {
            for child in list_children(&path)? {
                stack.push(child);
            }
        }
        entries.push(SourceEntry {
            path,
            relative,
            is_dir,
        });
    }
    Ok(entries)
}

/// Immediate children of a directory, sorted by name so archive order
/// is reproducible across platforms.
fn list_children(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        children.push(entry?.path());
    }
    children.sort();
    Ok(children)
}

/// Compress one file: scan for frequencies, build the greedy tree,
/// canonicalize to lengths, rebuild the canonical tree, write tag +
/// path + 257 length bytes + encoded payload from a second scan.
/// Returns the file's raw size in bytes.
fn compress_file<W: Write>(path: &Path, relative: &str, dest: &mut W) -> Result<u64> {
    let freqs = FrequencyTable::from_reader(BufReader::new(File::open(path)?))?;
    // total counts = raw bytes + 1 forced sentinel increment
    let raw_len: u64 = freqs.iter().map(|(_, count)| count).sum::<u64>() - 1;

    let greedy = build_tree(&freqs)?;
    let lengths = lengths_from_tree(&greedy)?;
    // encode with the canonical tree's codes, exactly what the decoder
    // will rebuild from the length table
    let canonical = tree_from_lengths(&lengths)?;
    let codes = CodeTable::from_tree(&canonical)?;

    dest.write_all(&[FILE_TAG])?;
    write_path(dest, relative)?;
    dest.write_all(&lengths)?;

    let input = BufReader::new(File::open(path)?);
    encode_stream(&codes, input, dest)?;

    debug!(path = %relative, raw_len, "file entry written");
    Ok(raw_len)
}

fn extract_directory(dest_root: &Path, relative: &str, guard: &mut OverwriteGuard) -> Result<()> {
    let target = join_relative(dest_root, relative);
    if target.exists() {
        // nothing to replace for a directory, but the collaborator
        // still gets its say (it may flip the run into skip/allow all)
        guard.allow(&target, true);
        return Ok(());
    }
    std::fs::create_dir_all(&target)?;
    debug!(path = %relative, "directory created");
    Ok(())
}

fn extract_file<R: Read>(
    dest_root: &Path,
    relative: &str,
    source: &mut R,
    guard: &mut OverwriteGuard,
) -> Result<()> {
    let mut lengths: LengthTable = [0u8; ALPHABET_SIZE];
    source
        .read_exact(&mut lengths)
        .map_err(|_| FormatError::Truncated("length table"))?;
    let tree = tree_from_lengths(&lengths)?;

    let target = join_relative(dest_root, relative);
    let skip = target.exists() && !guard.allow(&target, false);

    let mut decoder = Decoder::new(&tree, source);
    if skip {
        // the payload must still be consumed to keep the stream aligned
        decoder.read_to_end(&mut std::io::sink())?;
        info!(path = %relative, "skipped existing file");
    } else {
        let mut out = BufWriter::new(File::create(&target)?);
        decoder.read_to_end(&mut out)?;
        out.flush()?;
        debug!(path = %relative, "file extracted");
    }
    Ok(())
}

/// Relative path of `path` under `root` as a `/`-separated string.
fn relative_path_string(root: &Path, path: &Path) -> Result<String> {
    let rel = path.strip_prefix(root).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} is not under {}", path.display(), root.display()),
        )
    })?;
    let mut parts = Vec::new();
    for component in rel.components() {
        match component.as_os_str().to_str() {
            Some(s) => parts.push(s),
            None => return Err(FormatError::InvalidPathBytes.into()),
        }
    }
    let joined = parts.join("/");
    if joined.as_bytes().contains(&PATH_TERMINATOR) {
        return Err(FormatError::PathContainsNul(joined).into());
    }
    Ok(joined)
}

fn join_relative(dest_root: &Path, relative: &str) -> PathBuf {
    let mut target = dest_root.to_path_buf();
    for part in relative.split('/') {
        target.push(part);
    }
    target
}

fn write_path<W: Write>(dest: &mut W, relative: &str) -> Result<()> {
    if relative.as_bytes().contains(&PATH_TERMINATOR) {
        return Err(FormatError::PathContainsNul(relative.to_string()).into());
    }
    dest.write_all(relative.as_bytes())?;
    dest.write_all(&[PATH_TERMINATOR])?;
    Ok(())
}

fn check_magic<R: Read>(source: &mut R) -> Result<()> {
    let mut actual = [0u8; 2];
    source
        .read_exact(&mut actual)
        .map_err(|_| FormatError::Truncated("magic"))?;
    if actual != ARCHIVE_MAGIC {
        return Err(FormatError::InvalidMagic {
            expected: ARCHIVE_MAGIC,
            actual,
        }
        .into());
    }
    Ok(())
}

fn skip_manifest<R: Read>(source: &mut R) -> Result<()> {
    loop {
        match read_byte(source)? {
            None => return Err(FormatError::Truncated("manifest").into()),
            Some(MANIFEST_END) => return Ok(()),
            Some(_) => {}
        }
    }
}

fn read_path<R: Read>(source: &mut R) -> Result<String> {
    let mut bytes = Vec::new();
    read_until_terminator(source, &mut bytes)?;
    decode_path(bytes)
}

fn read_until_terminator<R: Read>(source: &mut R, bytes: &mut Vec<u8>) -> Result<()> {
    loop {
        match read_byte(source)? {
            None => return Err(FormatError::Truncated("entry path").into()),
            Some(PATH_TERMINATOR) => return Ok(()),
            Some(byte) => bytes.push(byte),
        }
    }
}

fn decode_path(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| FormatError::InvalidPathBytes.into())
}

/// Read one byte, or `None` on a clean end of stream.
fn read_byte<R: Read>(source: &mut R) -> Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match source.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;
    use tempfile::tempdir;

    /// Policy that answers the same decision every time and counts calls.
    struct FixedPolicy {
        decision: OverwriteDecision,
        calls: usize,
    }

    impl FixedPolicy {
        fn new(decision: OverwriteDecision) -> Self {
            Self { decision, calls: 0 }
        }
    }

    impl OverwritePolicy for FixedPolicy {
        fn ask(&mut self, _path: &Path, _is_dir: bool) -> OverwriteDecision {
            self.calls += 1;
            self.decision
        }
    }

    fn compress_tree(root: &Path, source: &Path) -> Vec<u8> {
        let mut archive = Vec::new();
        compress(root, source, &mut archive).unwrap();
        archive
    }

    fn decompress_into(dest: &Path, archive: &[u8]) {
        let mut policy = FixedPolicy::new(OverwriteDecision::Overwrite);
        let mut cursor = Cursor::new(archive);
        decompress(dest, &mut cursor, &mut policy).unwrap();
    }

    #[test]
    fn test_single_file_round_trip() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        std::fs::write(src.path().join("data.bin"), [0x41, 0x41, 0x42]).unwrap();

        let archive = compress_tree(src.path(), &src.path().join("data.bin"));
        decompress_into(dst.path(), &archive);

        let restored = std::fs::read(dst.path().join("data.bin")).unwrap();
        assert_eq!(restored, vec![0x41, 0x41, 0x42]);
    }

    #[test]
    fn test_empty_file_round_trip() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        std::fs::write(src.path().join("empty"), b"").unwrap();

        let archive = compress_tree(src.path(), &src.path().join("empty"));
        decompress_into(dst.path(), &archive);

        let restored = std::fs::read(dst.path().join("empty")).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_empty_directory_round_trip() {
        // archive with one empty subdirectory and no files
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        std::fs::create_dir(src.path().join("hollow")).unwrap();

        let archive = compress_tree(src.path(), &src.path().join("hollow"));

        let manifest = read_manifest(&mut Cursor::new(&archive[..])).unwrap();
        assert_eq!(manifest, vec!["hollow".to_string()]);
        // no file blocks follow: manifest end is followed by exactly
        // one directory block (tag + path + NUL)
        decompress_into(dst.path(), &archive);
        assert!(dst.path().join("hollow").is_dir());
        assert_eq!(std::fs::read_dir(dst.path().join("hollow")).unwrap().count(), 0);
    }

    #[test]
    fn test_nested_tree_round_trip() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        let top = src.path().join("top");
        std::fs::create_dir_all(top.join("sub/inner")).unwrap();
        std::fs::write(top.join("a.txt"), b"alpha alpha alpha").unwrap();
        std::fs::write(top.join("sub/b.txt"), b"").unwrap();
        std::fs::write(top.join("sub/inner/c.bin"), (0u8..=255).collect::<Vec<_>>()).unwrap();

        let archive = compress_tree(src.path(), &top);
        decompress_into(dst.path(), &archive);

        assert_eq!(
            std::fs::read(dst.path().join("top/a.txt")).unwrap(),
            b"alpha alpha alpha"
        );
        assert_eq!(std::fs::read(dst.path().join("top/sub/b.txt")).unwrap(), b"");
        assert_eq!(
            std::fs::read(dst.path().join("top/sub/inner/c.bin")).unwrap(),
            (0u8..=255).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_manifest_order_matches_entry_blocks() {
        let src = tempdir().unwrap();
        let top = src.path().join("tree");
        std::fs::create_dir_all(top.join("d1")).unwrap();
        std::fs::write(top.join("d1/f1"), b"one").unwrap();
        std::fs::write(top.join("f0"), b"zero").unwrap();

        let archive = compress_tree(src.path(), &top);
        let manifest = read_manifest(&mut Cursor::new(&archive[..])).unwrap();

        // replay the blocks and collect their paths in order
        let mut cursor = Cursor::new(&archive[..]);
        check_magic(&mut cursor).unwrap();
        skip_manifest(&mut cursor).unwrap();
        let mut block_paths = Vec::new();
        while let Some(tag) = read_byte(&mut cursor).unwrap() {
            let relative = read_path(&mut cursor).unwrap();
            block_paths.push(relative.clone());
            if tag == FILE_TAG {
                let mut lengths = [0u8; ALPHABET_SIZE];
                cursor.read_exact(&mut lengths).unwrap();
                let tree = tree_from_lengths(&lengths).unwrap();
                let mut decoder = Decoder::new(&tree, &mut cursor);
                decoder.read_to_end(&mut std::io::sink()).unwrap();
            }
        }
        assert_eq!(manifest, block_paths);
    }

    #[test]
    fn test_identical_input_yields_identical_archives() {
        let src = tempdir().unwrap();
        let top = src.path().join("stable");
        std::fs::create_dir(&top).unwrap();
        std::fs::write(top.join("x"), b"deterministic output please").unwrap();

        let first = compress_tree(src.path(), &top);
        let second = compress_tree(src.path(), &top);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bad_magic_aborts() {
        let dst = tempdir().unwrap();
        let archive = vec![0xFF, 0xFF, MANIFEST_END];
        let mut policy = FixedPolicy::new(OverwriteDecision::Overwrite);
        let result = decompress(dst.path(), &mut Cursor::new(&archive[..]), &mut policy);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::InvalidMagic { .. }))
        ));
    }

    #[test]
    fn test_unknown_tag_aborts() {
        let dst = tempdir().unwrap();
        let mut archive = ARCHIVE_MAGIC.to_vec();
        archive.push(MANIFEST_END);
        archive.push(0x33); // neither file nor directory tag
        let mut policy = FixedPolicy::new(OverwriteDecision::Overwrite);
        let result = decompress(dst.path(), &mut Cursor::new(&archive[..]), &mut policy);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::UnknownTag(0x33)))
        ));
    }

    #[test]
    fn test_corrupt_file_entry_is_skipped() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        std::fs::write(src.path().join("good"), b"survives the bad neighbor").unwrap();
        let mut archive = compress_tree(src.path(), &src.path().join("good"));

        // append a file entry whose length table violates the Kraft
        // equality, as the final block in the stream
        archive.push(FILE_TAG);
        archive.extend_from_slice(b"bad\0");
        archive.extend_from_slice(&[1u8; ALPHABET_SIZE]);

        let mut policy = FixedPolicy::new(OverwriteDecision::Overwrite);
        decompress(dst.path(), &mut Cursor::new(&archive[..]), &mut policy).unwrap();

        assert_eq!(
            std::fs::read(dst.path().join("good")).unwrap(),
            b"survives the bad neighbor"
        );
        assert!(!dst.path().join("bad").exists());
    }

    #[test]
    fn test_unwritable_file_target_is_skipped() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        std::fs::write(src.path().join("clash"), b"cannot land here").unwrap();
        let archive = compress_tree(src.path(), &src.path().join("clash"));

        // a directory already occupies the file's target path, so the
        // destination cannot be created
        std::fs::create_dir(dst.path().join("clash")).unwrap();

        let mut policy = FixedPolicy::new(OverwriteDecision::Overwrite);
        decompress(dst.path(), &mut Cursor::new(&archive[..]), &mut policy).unwrap();

        assert_eq!(policy.calls, 1);
        assert!(dst.path().join("clash").is_dir());
    }

    #[test]
    fn test_skip_all_preserves_existing_and_stops_asking() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        let top = src.path().join("t");
        std::fs::create_dir(&top).unwrap();
        std::fs::write(top.join("a"), b"new a").unwrap();
        std::fs::write(top.join("b"), b"new b").unwrap();
        let archive = compress_tree(src.path(), &top);

        // both targets already exist
        std::fs::create_dir(dst.path().join("t")).unwrap();
        std::fs::write(dst.path().join("t/a"), b"old a").unwrap();
        std::fs::write(dst.path().join("t/b"), b"old b").unwrap();

        let mut policy = FixedPolicy::new(OverwriteDecision::SkipAll);
        decompress(dst.path(), &mut Cursor::new(&archive[..]), &mut policy).unwrap();

        // asked once (for the directory), then never again
        assert_eq!(policy.calls, 1);
        assert_eq!(std::fs::read(dst.path().join("t/a")).unwrap(), b"old a");
        assert_eq!(std::fs::read(dst.path().join("t/b")).unwrap(), b"old b");
    }

    #[test]
    fn test_overwrite_all_replaces_and_stops_asking() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        let top = src.path().join("t");
        std::fs::create_dir(&top).unwrap();
        std::fs::write(top.join("a"), b"new a").unwrap();
        std::fs::write(top.join("b"), b"new b").unwrap();
        let archive = compress_tree(src.path(), &top);

        std::fs::create_dir(dst.path().join("t")).unwrap();
        std::fs::write(dst.path().join("t/a"), b"old a").unwrap();
        std::fs::write(dst.path().join("t/b"), b"old b").unwrap();

        let mut policy = FixedPolicy::new(OverwriteDecision::OverwriteAll);
        decompress(dst.path(), &mut Cursor::new(&archive[..]), &mut policy).unwrap();

        assert_eq!(policy.calls, 1);
        assert_eq!(std::fs::read(dst.path().join("t/a")).unwrap(), b"new a");
        assert_eq!(std::fs::read(dst.path().join("t/b")).unwrap(), b"new b");
    }

    #[test]
    fn test_policy_not_consulted_when_nothing_exists() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        std::fs::write(src.path().join("f"), b"fresh").unwrap();
        let archive = compress_tree(src.path(), &src.path().join("f"));

        let mut policy = FixedPolicy::new(OverwriteDecision::SkipAll);
        decompress(dst.path(), &mut Cursor::new(&archive[..]), &mut policy).unwrap();
        assert_eq!(policy.calls, 0);
        assert_eq!(std::fs::read(dst.path().join("f")).unwrap(), b"fresh");
    }

    #[test]
    fn test_compress_reports_total_raw_size() {
        let src = tempdir().unwrap();
        let top = src.path().join("sized");
        std::fs::create_dir(&top).unwrap();
        std::fs::write(top.join("a"), vec![0u8; 100]).unwrap();
        std::fs::write(top.join("b"), vec![1u8; 23]).unwrap();

        let mut archive = Vec::new();
        let raw = compress(src.path(), &top, &mut archive).unwrap();
        assert_eq!(raw, 123);
    }

    #[test]
    fn test_manifest_of_truncated_archive_fails() {
        let archive = ARCHIVE_MAGIC.to_vec(); // manifest end never arrives
        let result = read_manifest(&mut Cursor::new(&archive[..]));
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::Truncated("manifest")))
        ));
    }

    #[test]
    fn test_path_with_nul_rejected() {
        let mut out = Vec::new();
        assert!(write_path(&mut out, "bad\0name").is_err());
    }
}
