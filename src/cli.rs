//! Command-line argument parsing and report output
//!
//! Runs one jump over a file: opens it at a viewport, labels the visible
//! words, replays a key script and reports where the caret ended up.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::editor::{EditorView, Viewport};
use crate::jump::{JumpIndex, Label, Resolution, ScanMode};
use crate::keys::{parse_key_script, Keystroke};

/// Jump to any visible word by typing its two-letter label
#[derive(Parser, Debug)]
#[command(name = "wordjump", version, about = "Jump to any visible word")]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// First visible line (1-indexed)
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub top: usize,

    /// Number of visible rows
    #[arg(long, value_name = "N", default_value_t = 25)]
    pub rows: usize,

    /// Number of visible columns
    #[arg(long, value_name = "N", default_value_t = 80)]
    pub columns: usize,

    /// Horizontal scroll in columns
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub left: usize,

    /// Also split camelCase and ACRONYMWord identifiers
    #[arg(long)]
    pub camel_case: bool,

    /// Whitespace-separated keys to type, e.g. "a b" or "z esc"
    #[arg(long, value_name = "KEYS")]
    pub keys: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub path: PathBuf,
    pub viewport: Viewport,
    /// Overrides the configured scan mode when set
    pub scan_mode: Option<ScanMode>,
    pub keys: Vec<Keystroke>,
    pub json: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        if self.rows == 0 || self.columns == 0 {
            return Err("Viewport must have at least one row and one column".to_string());
        }

        let keys = match &self.keys {
            Some(script) => parse_key_script(script).map_err(|e| e.to_string())?,
            None => Vec::new(),
        };

        // Convert from 1-indexed (user input) to 0-indexed (internal)
        let viewport = Viewport {
            top_line: self.top.saturating_sub(1),
            left_column: self.left,
            visible_lines: self.rows,
            visible_columns: self.columns,
        };

        Ok(RunConfig {
            path: self.path,
            viewport,
            scan_mode: self.camel_case.then_some(ScanMode::CamelCase),
            keys,
            json: self.json,
        })
    }
}

/// One labelled target, 1-indexed for display
#[derive(Debug, Clone, Serialize)]
pub struct LabelEntry {
    pub label: Label,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// What a run produced
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// File the jump ran over, if it came from disk
    pub file: Option<PathBuf>,
    pub labels: Vec<LabelEntry>,
    pub resolution: Option<Resolution>,
    pub caret: CaretEntry,
}

/// Final caret location, 1-indexed
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CaretEntry {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Report {
    pub fn new(index: &JumpIndex, resolution: Option<Resolution>, view: &EditorView) -> Self {
        let caret = view.caret;
        let labels = index
            .iter()
            .map(|(label, position)| LabelEntry {
                label: *label,
                offset: position.offset,
                line: position.line + 1,
                column: position.column + 1,
            })
            .collect();

        Self {
            file: view.document.file_path.clone(),
            labels,
            resolution,
            caret: CaretEntry {
                offset: caret.offset,
                line: caret.line + 1,
                column: caret.column + 1,
            },
        }
    }

    /// Plain-text rendering: one label per line, then the outcome
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        if let Some(file) = &self.file {
            out.push_str(&format!("{}\n", file.display()));
        }
        for entry in &self.labels {
            out.push_str(&format!("{}  {}:{}\n", entry.label, entry.line, entry.column));
        }

        let outcome = match &self.resolution {
            None => "no keys typed".to_string(),
            Some(Resolution::AwaitingMore(prefix)) => format!("awaiting more after {:?}", prefix),
            Some(Resolution::Resolved(_)) => "jumped".to_string(),
            Some(Resolution::Unmatched) => "no such label".to_string(),
            Some(Resolution::Cancelled) => "cancelled".to_string(),
        };
        out.push_str(&format!(
            "{} (caret at {}:{})\n",
            outcome, self.caret.line, self.caret.column
        ));
        out
    }
}
