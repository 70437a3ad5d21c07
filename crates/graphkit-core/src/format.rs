//! Output formats for graphkit
//!
//! - human: the plain text the interactive menu prints
//! - json: pretty-printed result structs
//! - records: one fact per line, easy to grep or feed to other tools

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphkitError;

/// Version stamped into every records header
pub const RECORDS_VERSION: u32 = 1;

/// Output format for graphkit commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Records,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Human,
        OutputFormat::Json,
        OutputFormat::Records,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Human => "human",
            OutputFormat::Json => "json",
            OutputFormat::Records => "records",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = GraphkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == lowered)
            .ok_or(GraphkitError::UnknownFormat(lowered))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a records header line: `H graphkit=1 records=1 mode=<mode> k=v ...`
pub fn records_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut header = format!(
        "H graphkit={} records={} mode={}",
        RECORDS_VERSION, RECORDS_VERSION, mode
    );
    for (key, value) in fields {
        header.push_str(&format!(" {}={}", key, value));
    }
    header
}
