//! Plain-text ledger of investment options.
//!
//! One option per line: `NAME COST RETURN`, whitespace separated. The last
//! two tokens are the cost and return; everything before them is the name,
//! so names may contain spaces. Blank lines are skipped.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use outlay_core::InvestmentOption;
use tracing::{debug, warn};

use crate::error::{CliError, CliResult};

/// Ledger file used when neither a flag nor the configuration names one.
pub const DEFAULT_LEDGER: &str = "investments.txt";

/// Parses one ledger line. Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<InvestmentOption>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.len() {
        0 => Ok(None),
        1 | 2 => Err(format!("expected NAME COST RETURN, got '{}'", line.trim())),
        n => {
            let cost = tokens[n - 2]
                .parse::<i64>()
                .map_err(|_| format!("cost '{}' is not an integer", tokens[n - 2]))?;
            let expected_return = tokens[n - 1]
                .parse::<i64>()
                .map_err(|_| format!("return '{}' is not an integer", tokens[n - 1]))?;
            let name = tokens[..n - 2].join(" ");
            Ok(Some(InvestmentOption::new(name, cost, expected_return)))
        }
    }
}

/// Parses a whole ledger, reporting the first bad line.
pub fn parse_ledger(path: &Path, content: &str) -> CliResult<Vec<InvestmentOption>> {
    let mut options = Vec::new();
    for (number, line) in content.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(option)) => options.push(option),
            Ok(None) => {}
            Err(reason) => {
                return Err(CliError::LedgerParse {
                    path: path.to_path_buf(),
                    line: number + 1,
                    reason,
                })
            }
        }
    }
    Ok(options)
}

/// Reads the ledger at `path`. A missing file reads as an empty ledger.
pub fn read_ledger(path: &Path) -> CliResult<Vec<InvestmentOption>> {
    if !path.exists() {
        warn!(path = %path.display(), "ledger not found, treating as empty");
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)?;
    let options = parse_ledger(path, &content)?;
    debug!(path = %path.display(), count = options.len(), "ledger loaded");
    Ok(options)
}

/// Formats an option as a ledger line (without the newline).
pub fn format_record(option: &InvestmentOption) -> String {
    let name: Vec<&str> = option.name.split_whitespace().collect();
    format!("{} {} {}", name.join(" "), option.cost, option.expected_return)
}

/// Appends an option to the ledger, creating the file if needed.
pub fn append_record(path: &Path, option: &InvestmentOption) -> CliResult<()> {
    if option.name.trim().is_empty() {
        return Err(CliError::Input("option name must not be empty".to_string()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let needs_newline = match std::fs::read(path) {
        Ok(bytes) => bytes.last().is_some_and(|&b| b != b'\n'),
        Err(_) => false,
    };

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if needs_newline {
        writeln!(file)?;
    }
    writeln!(file, "{}", format_record(option))?;
    debug!(path = %path.display(), name = %option.name, "ledger record appended");
    Ok(())
}
