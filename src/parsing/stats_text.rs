use log::debug;

use crate::domain::{HalfStats, TeamHalfPair};
use crate::errors::WatcherError;

/// Minimum extracted numbers for a line to count as a stats row; looser
/// lines are captions, totals or OCR noise
const MIN_ROW_NUMBERS: usize = 3;

/// Positional columns recovered from one OCR table row
const ROW_WIDTH: usize = 5;

const FIRST_HALF_HEADERS: [&str; 3] = ["1st half", "ist half", "first half"];
const SECOND_HALF_HEADERS: [&str; 2] = ["2nd half", "second half"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Section {
    #[default]
    None,
    FirstHalf,
    SecondHalf,
}

/// Rows captured for one half: first qualifying row is ours, second is
/// the opposition's, anything after that is a summary row and ignored
#[derive(Debug, Clone, Copy, Default)]
struct SectionRows {
    us: Option<HalfStats>,
    opposition: Option<HalfStats>,
}

#[derive(Debug, Clone, Copy, Default)]
struct ParseState {
    section: Section,
    rows_in_section: usize,
    first_half: SectionRows,
    second_half: SectionRows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedObservation {
    pub us: TeamHalfPair,
    pub opposition: TeamHalfPair,
}

/// Parse a block of recognized text into both sides' half stats.
///
/// Succeeds only when an "us" row was recovered for both halves;
/// missing opposition rows are tolerated and left at zero. On failure
/// the error carries a truncated excerpt of the raw text and nothing is
/// saved anywhere.
pub fn parse_stats_text(raw_text: &str) -> Result<ParsedObservation, WatcherError> {
    let state = raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(ParseState::default(), step);

    let (Some(us_first), Some(us_second)) = (state.first_half.us, state.second_half.us) else {
        return Err(WatcherError::parse_incomplete(raw_text));
    };

    debug!("massive chances without a shot are not present in the table, defaulting to 0");

    Ok(ParsedObservation {
        us: TeamHalfPair {
            first_half: us_first,
            second_half: us_second,
        },
        opposition: TeamHalfPair {
            first_half: state.first_half.opposition.unwrap_or_default(),
            second_half: state.second_half.opposition.unwrap_or_default(),
        },
    })
}

/// One transition of the line fold. A header line switches section and
/// resets the row counter; it is never also a data line.
fn step(mut state: ParseState, line: &str) -> ParseState {
    if let Some(section) = detect_header(line) {
        debug!("section header: {:?} ({})", section, line);
        state.section = section;
        state.rows_in_section = 0;
        return state;
    }

    let numbers = extract_numbers(line);
    if numbers.len() < MIN_ROW_NUMBERS {
        return state;
    }

    let stats = map_row(&numbers);
    let rows = match state.section {
        Section::None => return state,
        Section::FirstHalf => &mut state.first_half,
        Section::SecondHalf => &mut state.second_half,
    };

    match state.rows_in_section {
        0 => rows.us = Some(stats),
        1 => rows.opposition = Some(stats),
        _ => {} // summary/total rows below the two team rows
    }
    state.rows_in_section += 1;

    state
}

fn detect_header(line: &str) -> Option<Section> {
    let lowered = line.to_lowercase();

    if FIRST_HALF_HEADERS.iter().any(|h| lowered.contains(h)) {
        return Some(Section::FirstHalf);
    }
    if SECOND_HALF_HEADERS.iter().any(|h| lowered.contains(h)) {
        return Some(Section::SecondHalf);
    }
    None
}

/// All maximal digit runs on the line, in order
fn extract_numbers(line: &str) -> Vec<u32> {
    let mut numbers = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        if ch.is_ascii_digit() {
            current.push(ch);
        } else {
            push_run(&mut numbers, &mut current);
        }
    }
    push_run(&mut numbers, &mut current);

    numbers
}

/// A run too long to fit a counter is recognition noise, not a value;
/// it is dropped so it can neither qualify a row nor poison later sums
fn push_run(numbers: &mut Vec<u32>, current: &mut String) {
    if current.is_empty() {
        return;
    }
    if let Ok(value) = current.parse() {
        numbers.push(value);
    }
    current.clear();
}

/// Positional mapping of an OCR row onto the counters. Rows shorter
/// than five columns are right-padded with zeros: missing trailing OCR
/// values mean zero. The no-shot massive chance count never appears in
/// the screenshot table, so it is always zero on this path.
fn map_row(numbers: &[u32]) -> HalfStats {
    let mut columns = [0u32; ROW_WIDTH];
    for (slot, value) in columns.iter_mut().zip(numbers) {
        *slot = *value;
    }

    HalfStats {
        deliveries: columns[0],
        half_chances: columns[1],
        chances: columns[2],
        massive_chances_no_shot: 0,
        massive_chances_shot: columns[3],
        goals: columns[4],
    }
}
