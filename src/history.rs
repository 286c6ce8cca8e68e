//! Command history tracking for debugging and diagnostics.

use std::collections::{BTreeMap, VecDeque};
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// A command forwarded to a bulb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Power { on: bool },
    Brightness { percent: u8 },
    Rgb { red: u8, green: u8, blue: u8 },
    Temperature { percent: u8 },
}

impl Command {
    /// Short name used as the counter key.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Power { .. } => "power",
            Command::Brightness { .. } => "brightness",
            Command::Rgb { .. } => "rgb",
            Command::Temperature { .. } => "temperature",
        }
    }
}

/// A recorded command in the history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub command: Command,
    /// Seconds since history creation
    pub timestamp: f64,
}

/// Tracks the commands sent to a single bulb.
#[derive(Debug, Clone)]
pub struct CommandHistory {
    counts: BTreeMap<&'static str, usize>,
    last_error: Option<String>,
    start_time: Instant,
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            last_error: None,
            start_time: Instant::now(),
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            max_entries,
            ..Self::new()
        }
    }

    pub fn record(&mut self, command: Command) {
        *self.counts.entry(command.name()).or_default() += 1;

        self.entries.push_back(HistoryEntry {
            command,
            timestamp: self.start_time.elapsed().as_secs_f64(),
        });

        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn record_error(&mut self, error: &str) {
        self.last_error = Some(error.to_string());
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.entries.clear();
        self.last_error = None;
    }

    pub fn summary(&self) -> HistorySummary {
        HistorySummary {
            command_counts: self
                .counts
                .iter()
                .map(|(name, count)| (name.to_string(), *count))
                .collect(),
            total_entries: self.entries.len(),
            last_error: self.last_error.clone(),
        }
    }
}

/// Summary of command history for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Commands sent since the last clear, by name. Not capped by the entry limit.
    pub command_counts: BTreeMap<String, usize>,
    pub total_entries: usize,
    pub last_error: Option<String>,
}
