// Reading the plain text extracted from PDF rosters or OCR'd screenshots.

use std::fs;

use log::debug;
use snafu::prelude::*;

use crate::bid::{
    io_common::{bidder_from_cells, parse_line_number, split_tokens},
    *,
};

pub fn read_text_roster(path: &str, source: &RosterSource) -> BidResult<Vec<ParsedBidder>> {
    let contents = fs::read_to_string(path).context(OpeningTextSnafu { path })?;
    parse_roster_text(&contents, source)
}

/// Only the lines that start with a seniority number are kept: headers, page
/// numbers and other text around the roster are dropped. Without a configured
/// layout, page markers such as `2 of 3` are dropped as well.
pub fn parse_roster_text(contents: &str, source: &RosterSource) -> BidResult<Vec<ParsedBidder>> {
    let first_row = source.first_row_index()?;
    let seniority_idx = source.seniority_column_index()?;
    let layout = if source.has_explicit_columns() {
        Some((source.id_column_index()?, source.first_bid_column_index()?))
    } else {
        None
    };

    let mut res: Vec<ParsedBidder> = Vec::new();
    for (idx, line) in contents.lines().enumerate().skip(first_row) {
        let lineno = idx + 1;
        let tokens: Vec<String> = split_tokens(line).iter().map(|s| s.to_string()).collect();
        let pb = match layout {
            Some((id_idx_o, first_bid_idx)) => {
                bidder_from_cells(&tokens, lineno, seniority_idx, id_idx_o, first_bid_idx)
            }
            None if is_page_marker(&tokens) => {
                debug!("parse_roster_text: line {}: page marker {:?}", lineno, line);
                continue;
            }
            None => guess_layout(&tokens, lineno, seniority_idx),
        };
        if pb.seniority.is_none() {
            debug!("parse_roster_text: line {}: skipping {:?}", lineno, line);
            continue;
        }
        debug!("parse_roster_text: line {}: {:?}", lineno, pb);
        res.push(pb);
    }
    Ok(res)
}

// Without a layout, the token after the seniority is the identifier unless it
// is a number, in which case the bids start right away.
fn guess_layout(tokens: &[String], lineno: usize, seniority_idx: usize) -> ParsedBidder {
    let next_idx = seniority_idx + 1;
    let id_idx_o = match tokens.get(next_idx) {
        Some(tok) if parse_line_number(tok).is_none() => Some(next_idx),
        _ => None,
    };
    let first_bid_idx = id_idx_o.map(|idx| idx + 1).unwrap_or(next_idx);
    bidder_from_cells(tokens, lineno, seniority_idx, id_idx_o, first_bid_idx)
}

// `2 of 3` or `2 / 3`, left behind by the page footers.
fn is_page_marker(tokens: &[String]) -> bool {
    match tokens {
        [page, sep, count] => {
            (sep.eq_ignore_ascii_case("of") || sep == "/")
                && parse_line_number(page).is_some()
                && parse_line_number(count).is_some()
        }
        _ => false,
    }
}
