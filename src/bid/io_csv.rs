// Primitives for reading CSV files.

use log::debug;
use snafu::prelude::*;

use crate::bid::{io_common::bidder_from_cells, *};

pub fn read_csv_roster(path: &str, source: &RosterSource) -> BidResult<Vec<ParsedBidder>> {
    let first_row = source.first_row_index()?;
    let seniority_idx = source.seniority_column_index()?;
    let id_idx_o = source.id_column_index()?;
    let first_bid_idx = source.first_bid_column_index()?;

    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .context(OpeningCsvSnafu { path })?;

    let mut res: Vec<ParsedBidder> = Vec::new();
    // The index starts at 1 to respect most conventions in the excel world
    for (idx, line_r) in rdr.into_records().enumerate().skip(first_row) {
        let lineno = idx + 1;
        let line = line_r.context(CsvLineParseSnafu { path, lineno })?;
        let cells: Vec<String> = line.iter().map(|s| s.to_string()).collect();
        let pb = bidder_from_cells(&cells, lineno, seniority_idx, id_idx_o, first_bid_idx);
        debug!("read_csv_roster: lineno: {:?} bidder: {:?}", lineno, pb);
        res.push(pb);
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    #[test]
    fn reads_csv_rows() {
        let path = std::env::temp_dir().join("line_bid_io_csv_reads_csv_rows.csv");
        fs::write(
            &path,
            "Seniority,Employee,Bid 1,Bid 2\n2, B200 ,4,\n1,A100,\"3 5\",1\nX,,,\n",
        )
        .unwrap();
        let p = path.display().to_string();
        let source: RosterSource = serde_json::from_value(json!({
            "provider": "csv",
            "filePath": p,
            "firstRowIndex": 2,
            "idColumnIndex": 2
        }))
        .unwrap();

        let res = read_csv_roster(&p, &source).unwrap();
        assert_eq!(res.len(), 3);
        assert_eq!(res[0].lineno, 2);
        assert_eq!(res[0].seniority, Some(2));
        assert_eq!(res[0].identifier, Some("B200".to_string()));
        assert_eq!(res[0].preferences, vec![4]);
        assert_eq!(res[1].preferences, vec![3, 5, 1]);
        // Rejected later, during validation.
        assert_eq!(res[2].seniority, None);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file() {
        let source = RosterSource::new("csv", "does-not-exist.csv");
        let res = read_csv_roster("/nonexistent/does-not-exist.csv", &source);
        assert!(matches!(res, Err(BidError::OpeningCsv { .. })));
    }
}
