use std::path::Path;

use log::debug;

use crate::bid::ParsedBidder;

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

/// Identifiers for the rows that do not carry one.
pub fn make_default_id(path: &str) -> impl Fn(usize) -> String {
    let simplified_file_name = simplify_file_name(path);
    move |lineno| format!("{}-{:08}", simplified_file_name, lineno)
}

/// Extracted text separates the numbers with spaces, commas or semicolons.
pub fn split_tokens(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn parse_line_number(token: &str) -> Option<u32> {
    token.trim().parse::<u32>().ok()
}

/// Builds a bidder out of the cells of a row, following the given zero-based
/// column positions. A cell of the bid columns may hold several bids.
pub fn bidder_from_cells(
    cells: &[String],
    lineno: usize,
    seniority_idx: usize,
    id_idx_o: Option<usize>,
    first_bid_idx: usize,
) -> ParsedBidder {
    let seniority = cells.get(seniority_idx).and_then(|s| parse_line_number(s));
    let identifier = id_idx_o
        .and_then(|id_idx| cells.get(id_idx))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let mut preferences: Vec<u32> = Vec::new();
    for cell in cells.iter().skip(first_bid_idx) {
        for token in split_tokens(cell) {
            match parse_line_number(token) {
                Some(line) => preferences.push(line),
                None => {
                    debug!(
                        "bidder_from_cells: line {}: skipping bid {:?}",
                        lineno, token
                    );
                }
            }
        }
    }
    ParsedBidder {
        lineno,
        seniority,
        identifier,
        preferences,
        content: cells.join(","),
    }
}
