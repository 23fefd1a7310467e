use super::{note_trailing, DriverSettings, Kernel, TokenReader};
use crate::error::Result;
use crate::pair_sum::{find_pair, IndexPair};
use tracing::debug;

/// Parsed two-sum input: `n`, then `n` values, then the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoSumInput {
    pub values: Vec<i64>,
    pub target: i64,
}

pub fn parse(input: &str) -> Result<TwoSumInput> {
    let mut reader = TokenReader::new(input);
    let n = reader.next_count("element count")?;
    let values = reader.next_ints(n, "element")?;
    let target = reader.next_int("target")?;
    note_trailing(Kernel::TwoSum, reader);
    Ok(TwoSumInput { values, target })
}

pub fn render(result: Option<IndexPair>, settings: &DriverSettings) -> String {
    match result {
        Some(pair) => pair.to_string(),
        None => settings.no_solution_message.clone(),
    }
}

pub fn solve(input: &str, settings: &DriverSettings) -> Result<String> {
    let parsed = parse(input)?;
    debug!(n = parsed.values.len(), target = parsed.target, "running two-sum");
    let result = find_pair(&parsed.values, parsed.target);
    Ok(render(result, settings))
}
