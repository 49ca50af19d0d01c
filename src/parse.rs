//! Input parsing for benchmark latency logs
//!
//! Two producer formats exist: one integer per line ("simple"), and
//! `opcode value` pairs ("tagged"). In both, the final record of a file may
//! be cut short when the producer is killed mid-write, so the last line
//! (simple) or last demultiplexed element (tagged) is discarded.

use crate::error::{Result, StatsError};

/// Number of leading samples discarded from each tagged sequence (warm-up)
pub const WARMUP_TRIM: usize = 300;

/// Operation tag in the tagged input format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Read,
    Remove,
}

impl Operation {
    /// Map a wire opcode to an operation; unknown codes are producer noise
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Operation::Insert),
            1 => Some(Operation::Read),
            2 => Some(Operation::Remove),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Insert => "INSERT",
            Operation::Read => "READ",
            Operation::Remove => "REMOVE",
        }
    }
}

/// Samples demultiplexed by operation, after warm-up/sentinel trimming
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaggedSamples {
    pub insert: Vec<i64>,
    pub read: Vec<i64>,
    pub remove: Vec<i64>,
}

impl TaggedSamples {
    /// Iterate the three sequences in a fixed operation order
    pub fn by_operation(&self) -> [(Operation, &[i64]); 3] {
        [
            (Operation::Insert, &self.insert),
            (Operation::Read, &self.read),
            (Operation::Remove, &self.remove),
        ]
    }
}

/// Parse the simple format: one base-10 integer per line.
///
/// The last line is dropped unconditionally, whatever it contains. Every
/// retained line must parse; the first failure aborts with the 1-based line
/// number and offending content.
pub fn parse_samples(input: &str) -> Result<Vec<i64>> {
    let lines: Vec<&str> = input.lines().collect();
    let retained = lines.len().saturating_sub(1);
    let mut samples = Vec::with_capacity(retained);

    for (idx, line) in lines[..retained].iter().enumerate() {
        let value = line.trim().parse::<i64>().map_err(|_| StatsError::Parse {
            line: idx + 1,
            content: (*line).to_string(),
        })?;
        samples.push(value);
    }

    Ok(samples)
}

/// Parse the tagged format: `opcode value` pairs, demultiplexed by opcode.
///
/// Lines that do not contain exactly two integers are skipped, as are
/// records with an opcode outside the known set. Each resulting sequence is
/// then trimmed independently: more than [`WARMUP_TRIM`] samples keeps
/// everything between the warm-up and the final (possibly partial) record,
/// anything shorter is unusable and becomes empty.
pub fn parse_tagged_samples(input: &str) -> TaggedSamples {
    let mut insert = Vec::new();
    let mut read = Vec::new();
    let mut remove = Vec::new();

    for line in input.lines() {
        let mut fields = line.split_whitespace();
        let (Some(code), Some(value), None) = (fields.next(), fields.next(), fields.next()) else {
            continue;
        };
        let (Ok(code), Ok(value)) = (code.parse::<i64>(), value.parse::<i64>()) else {
            continue;
        };
        match Operation::from_code(code) {
            Some(Operation::Insert) => insert.push(value),
            Some(Operation::Read) => read.push(value),
            Some(Operation::Remove) => remove.push(value),
            None => {}
        }
    }

    TaggedSamples {
        insert: trim_warmup(insert),
        read: trim_warmup(read),
        remove: trim_warmup(remove),
    }
}

fn trim_warmup(mut samples: Vec<i64>) -> Vec<i64> {
    if samples.len() > WARMUP_TRIM {
        samples.pop();
        samples.drain(..WARMUP_TRIM);
        samples
    } else {
        Vec::new()
    }
}
