//! Developer tooling for the stringhash workspace.
//!
//! Usage:
//!   cargo xtask hash [--hex] [--file <path>]... [<text>]...
//!   cargo xtask check [<vectors>]

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::Command;

use stringhash_core::{hash_compat, HashScratch};

/// Vector table checked when `check` is given no path.
const DEFAULT_VECTORS: &str = "vectors/reference.tsv";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = match args.first().map(String::as_str) {
        Some("hash") => run_hash(&args[1..]),
        Some("check") => run_check(&args[1..]),
        _ => {
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: cargo xtask <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  hash     Print the string-hash of each input (stdin if none given)");
    eprintln!("  check    Verify a vector table (default: {})", DEFAULT_VECTORS);
    eprintln!();
    eprintln!("Hash options:");
    eprintln!("  --hex           Print hashes as 8-digit hex");
    eprintln!("  --file <path>   Hash the raw bytes of a file (repeatable)");
    eprintln!("  --              Treat all remaining arguments as text");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  cargo xtask hash \"Hello, world!\"");
    eprintln!("  cargo xtask hash --hex --file Cargo.toml");
    eprintln!("  echo -n Hello | cargo xtask hash");
    eprintln!("  cargo xtask check vectors/reference.tsv");
}

// =============================================================================
// Errors
// =============================================================================

/// Errors reported by xtask commands.
#[derive(Debug)]
enum XtaskError {
    /// Bad command line.
    Usage(String),
    /// Reading an input failed.
    Io { path: PathBuf, source: io::Error },
    /// A vector table line could not be parsed.
    InvalidVector { line: usize, reason: String },
    /// Some vectors hashed to a different value.
    Mismatch { failed: usize, total: usize },
    /// The workspace root could not be determined.
    Workspace(String),
}

impl fmt::Display for XtaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "{}", msg),
            Self::Io { path, source } => write!(f, "Failed to read {}: {}", path.display(), source),
            Self::InvalidVector { line, reason } => write!(f, "Invalid vector on line {}: {}", line, reason),
            Self::Mismatch { failed, total } => write!(f, "{} of {} vectors failed", failed, total),
            Self::Workspace(msg) => write!(f, "Failed to locate workspace: {}", msg),
        }
    }
}

impl std::error::Error for XtaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

type XtaskResult<T> = Result<T, XtaskError>;

// =============================================================================
// hash
// =============================================================================

/// Parsed `hash` arguments.
#[derive(Debug, Default, PartialEq)]
struct HashOptions {
    hex: bool,
    files: Vec<PathBuf>,
    texts: Vec<String>,
}

fn parse_hash_args(args: &[String]) -> XtaskResult<HashOptions> {
    let mut options = HashOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--hex" => options.hex = true,
            "--file" => {
                let path = iter
                    .next()
                    .ok_or_else(|| XtaskError::Usage("--file requires a path".to_string()))?;
                options.files.push(PathBuf::from(path));
            }
            "--" => {
                options.texts.extend(iter.by_ref().cloned());
            }
            flag if flag.starts_with("--") => {
                return Err(XtaskError::Usage(format!("Unknown option: {}", flag)));
            }
            text => options.texts.push(text.to_string()),
        }
    }

    Ok(options)
}

fn run_hash(args: &[String]) -> XtaskResult<()> {
    let options = parse_hash_args(args)?;
    let mut scratch = HashScratch::new();

    if options.texts.is_empty() && options.files.is_empty() {
        let mut bytes = Vec::new();
        io::stdin()
            .read_to_end(&mut bytes)
            .map_err(|source| XtaskError::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        println!("{}\t-", format_hash(scratch.hash(&bytes), options.hex));
        return Ok(());
    }

    for text in &options.texts {
        println!("{}\t{}", format_hash(scratch.hash(text), options.hex), text);
    }

    for path in &options.files {
        let bytes = read_file(path)?;
        println!("{}\t{}", format_hash(scratch.hash(&bytes), options.hex), path.display());
    }

    Ok(())
}

fn format_hash(hash: u32, hex: bool) -> String {
    if hex {
        format!("{:08x}", hash)
    } else {
        hash.to_string()
    }
}

fn read_file(path: &Path) -> XtaskResult<Vec<u8>> {
    fs::read(path).map_err(|source| XtaskError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// check
// =============================================================================

/// One entry of a vector table.
#[derive(Debug, PartialEq)]
struct Vector {
    line: usize,
    expected: u32,
    bytes: Vec<u8>,
}

fn run_check(args: &[String]) -> XtaskResult<()> {
    let path = match args {
        [] => get_workspace_root()?.join(DEFAULT_VECTORS),
        [path] => PathBuf::from(path),
        _ => return Err(XtaskError::Usage("check takes at most one path".to_string())),
    };

    let bytes = read_file(&path)?;
    let table = String::from_utf8_lossy(&bytes);
    let vectors = parse_vectors(&table)?;

    let failures = failed_vectors(&vectors);
    for (vector, actual) in &failures {
        println!(
            "FAIL line {}: expected {}, got {} ({})",
            vector.line,
            vector.expected,
            actual,
            hex::encode(&vector.bytes)
        );
    }

    println!(
        "{}/{} vectors passed ({})",
        vectors.len() - failures.len(),
        vectors.len(),
        path.display()
    );

    if failures.is_empty() {
        Ok(())
    } else {
        Err(XtaskError::Mismatch {
            failed: failures.len(),
            total: vectors.len(),
        })
    }
}

/// Parse `<decimal hash><TAB><hex bytes>` lines. Blank lines and lines whose
/// first non-blank character is `#` are skipped.
fn parse_vectors(table: &str) -> XtaskResult<Vec<Vector>> {
    let mut vectors = Vec::new();

    for (index, raw) in table.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim_end_matches('\r');
        if trimmed.trim().is_empty() || trimmed.trim_start().starts_with('#') {
            continue;
        }

        let (hash, hex_bytes) = trimmed.split_once('\t').ok_or_else(|| XtaskError::InvalidVector {
            line,
            reason: "expected <hash><TAB><hex bytes>".to_string(),
        })?;

        let expected = hash.trim().parse::<u32>().map_err(|e| XtaskError::InvalidVector {
            line,
            reason: format!("bad hash {:?}: {}", hash, e),
        })?;

        let bytes = hex::decode(hex_bytes.trim()).map_err(|e| XtaskError::InvalidVector {
            line,
            reason: e.to_string(),
        })?;

        vectors.push(Vector {
            line,
            expected,
            bytes,
        });
    }

    Ok(vectors)
}

/// Vectors whose hash differs from the expected value, with the actual hash.
fn failed_vectors(vectors: &[Vector]) -> Vec<(&Vector, u32)> {
    vectors
        .iter()
        .map(|vector| (vector, hash_compat(&vector.bytes)))
        .filter(|(vector, actual)| *actual != vector.expected)
        .collect()
}

fn get_workspace_root() -> XtaskResult<PathBuf> {
    let output = Command::new("cargo")
        .args(["locate-project", "--workspace", "--message-format=plain"])
        .output()
        .map_err(|e| XtaskError::Workspace(e.to_string()))?;

    if !output.status.success() {
        return Err(XtaskError::Workspace("cargo locate-project failed".to_string()));
    }

    let cargo_toml = String::from_utf8_lossy(&output.stdout);
    let path = PathBuf::from(cargo_toml.trim());
    path.parent()
        .map(|p| p.to_path_buf())
        .ok_or_else(|| XtaskError::Workspace("invalid workspace path".to_string()))
}
