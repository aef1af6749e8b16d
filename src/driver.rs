//! Line-oriented input parsing and the run loop feeding the workshop.

use std::io::{self, BufRead};

use thiserror::Error;
use tracing::debug;

use crate::types::{Item, Outcome};
use crate::workshop::Workshop;

/// Most cabinets a workshop may be configured with.
pub const MAX_CABINETS: usize = 64;
/// Largest capacity a single cabinet may have.
pub const MAX_CABINET_CAPACITY: usize = 1023;

/// Reasons the startup input or item stream is rejected.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unexpected character {0:?} in cabinet line")]
    InvalidCharacter(char),

    #[error("cabinet capacity {0} outside 1..={max}", max = MAX_CABINET_CAPACITY)]
    CapacityOutOfRange(String),

    #[error("{0} cabinets configured, at most {max} allowed", max = MAX_CABINETS)]
    TooManyCabinets(usize),

    #[error("input ended before the {0} line")]
    MissingLine(&'static str),

    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("item count must be > 0")]
    ZeroItems,

    #[error("item count must not be negative: {0}")]
    NegativeItemCount(i64),

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Parse the space-separated cabinet capacities; an empty line means none.
pub fn parse_cabinet_line(line: &str) -> Result<Vec<usize>, InputError> {
    if let Some(bad) = line.chars().find(|&c| c != ' ' && !c.is_ascii_digit()) {
        return Err(InputError::InvalidCharacter(bad));
    }
    let mut capacities = Vec::new();
    for token in line.split(' ').filter(|t| !t.is_empty()) {
        let capacity = token
            .parse::<usize>()
            .ok()
            .filter(|c| (1..=MAX_CABINET_CAPACITY).contains(c))
            .ok_or_else(|| InputError::CapacityOutOfRange(token.to_string()))?;
        capacities.push(capacity);
    }
    if capacities.len() > MAX_CABINETS {
        return Err(InputError::TooManyCabinets(capacities.len()));
    }
    Ok(capacities)
}

/// Parse a leading integer the way `strtoll` does: optional whitespace and
/// sign, at least one digit, anything after the digits ignored.
pub fn parse_leading_i64(text: &str) -> Result<Item, InputError> {
    let trimmed = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let sign_len = trimmed.len() - unsigned.len();
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(InputError::NotANumber(text.to_string()));
    }
    // Overflow is the only way this parse can fail.
    trimmed[..sign_len + digits]
        .parse::<i64>()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

/// Parse the declared item count; it must be positive.
pub fn parse_item_count(line: &str) -> Result<u64, InputError> {
    match parse_leading_i64(line)? {
        0 => Err(InputError::ZeroItems),
        count if count < 0 => Err(InputError::NegativeItemCount(count)),
        count => Ok(count as u64),
    }
}

/// Read one line without its `\n`; a carriage return is kept.
fn read_line<R: BufRead>(input: &mut R, what: &'static str) -> Result<String, InputError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::MissingLine(what));
    }
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}

/// Read the startup parameters, feed every declared item to a fresh
/// workshop, and return the outcome of the last one.
pub fn run<R: BufRead>(mut input: R) -> Result<Outcome, InputError> {
    let capacities = parse_cabinet_line(&read_line(&mut input, "cabinet")?)?;
    let count = parse_item_count(&read_line(&mut input, "item count")?)?;
    debug!("[INPUT] cabinets={} items={count}", capacities.len());

    let mut workshop = Workshop::new(&capacities);
    let mut last = None;
    for _ in 0..count {
        let item = parse_leading_i64(&read_line(&mut input, "item")?)?;
        last = Some(workshop.process(item));
    }

    debug!(
        "[DONE] held={} outside={} workbench={:?}",
        workshop.item_count(),
        workshop.outside().len(),
        workshop.workbench()
    );
    for (index, cabinet) in workshop.cabinets().iter().enumerate() {
        debug!(
            "[DONE] cabinet {} holds {}/{}",
            index + 1,
            cabinet.len(),
            cabinet.capacity().unwrap_or_default()
        );
    }
    last.ok_or(InputError::ZeroItems)
}
