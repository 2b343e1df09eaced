use calamine::{open_workbook, DataType, Range, Reader, Xlsx};
use log::debug;
use snafu::prelude::*;

use crate::bid::{io_common::bidder_from_cells, *};

pub fn read_excel_roster(path: &str, source: &RosterSource) -> BidResult<Vec<ParsedBidder>> {
    let first_row = source.first_row_index()?;
    let seniority_idx = source.seniority_column_index()?;
    let id_idx_o = source.id_column_index()?;
    let first_bid_idx = source.first_bid_column_index()?;
    let is_used =
        |col: usize| col == seniority_idx || Some(col) == id_idx_o || col >= first_bid_idx;

    let wrange = get_range(path, source)?;
    // The range starts at the first non-empty cell, not at A1.
    let (start_row, start_col) = wrange
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));
    debug!(
        "read_excel_roster: range starts at row {:?} column {:?}",
        start_row + 1,
        start_col + 1
    );

    let mut res: Vec<ParsedBidder> = Vec::new();
    for (idx, row) in wrange.rows().enumerate() {
        let sheet_row = start_row + idx;
        if sheet_row < first_row {
            continue;
        }
        let lineno = sheet_row + 1;
        if row.iter().all(|cell| *cell == DataType::Empty) {
            debug!("read_excel_roster: lineno: {:?} empty row", lineno);
            continue;
        }
        let mut cells: Vec<String> = vec![String::new(); start_col];
        for (col, cell) in row.iter().enumerate() {
            if is_used(start_col + col) {
                cells.push(read_cell(cell, lineno)?);
            } else {
                cells.push(String::new());
            }
        }
        let pb = bidder_from_cells(&cells, lineno, seniority_idx, id_idx_o, first_bid_idx);
        debug!("read_excel_roster: lineno: {:?} bidder: {:?}", lineno, pb);
        res.push(pb);
    }
    Ok(res)
}

fn get_range(path: &str, source: &RosterSource) -> BidResult<Range<DataType>> {
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;
    let wrange = match &source.excel_worksheet_name {
        Some(worksheet) => workbook
            .worksheet_range(worksheet)
            .context(MissingWorksheetSnafu { path, worksheet })?,
        None => workbook
            .worksheet_range_at(0)
            .context(MissingWorksheetSnafu {
                path,
                worksheet: "<first>",
            })?,
    }
    .context(OpeningExcelSnafu { path })?;
    Ok(wrange)
}

// Spreadsheets store the numbers as floats.
fn read_cell(cell: &DataType, lineno: usize) -> BidResult<String> {
    match cell {
        DataType::Int(i) => Ok(i.to_string()),
        DataType::Float(f) if f.fract() == 0.0 => Ok(format!("{}", *f as i64)),
        DataType::String(s) => Ok(s.clone()),
        DataType::Empty => Ok(String::new()),
        _ => ExcelWrongCellTypeSnafu {
            lineno,
            content: format!("{:?}", cell),
        }
        .fail(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells() {
        assert_eq!(read_cell(&DataType::Int(12), 1).unwrap(), "12");
        assert_eq!(read_cell(&DataType::Float(7.0), 1).unwrap(), "7");
        assert_eq!(
            read_cell(&DataType::String("3 4".to_string()), 1).unwrap(),
            "3 4"
        );
        assert_eq!(read_cell(&DataType::Empty, 1).unwrap(), "");
        assert!(matches!(
            read_cell(&DataType::Float(7.5), 3),
            Err(BidError::ExcelWrongCellType { lineno: 3, .. })
        ));
        assert!(read_cell(&DataType::Bool(true), 3).is_err());
    }

    #[test]
    fn range_away_from_a1() {
        // The Bids worksheet starts at B2 and has an empty row 6.
        let p = format!(
            "{}/tests/data/xlsx_roster/roster.xlsx",
            env!("CARGO_MANIFEST_DIR")
        );
        let source: RosterSource = serde_json::from_value(serde_json::json!({
            "provider": "xlsx",
            "filePath": p,
            "excelWorksheetName": "Bids",
            "firstRowIndex": 3,
            "idColumnIndex": "B",
            "seniorityColumnIndex": "D",
            "firstBidColumnIndex": "E"
        }))
        .unwrap();
        let res = read_excel_roster(&p, &source).unwrap();
        let linenos: Vec<usize> = res.iter().map(|pb| pb.lineno).collect();
        assert_eq!(linenos, vec![3, 4, 5, 7, 8]);
        assert_eq!(res[0].identifier, Some("A100".to_string()));
        assert_eq!(res[0].seniority, Some(1));
        assert_eq!(res[0].preferences, vec![2, 5]);
        assert_eq!(res[1].preferences, vec![2, 3, 4]);
        assert_eq!(res[3].preferences, vec![3]);
    }

    #[test]
    fn missing_workbook() {
        let source = RosterSource::new("xlsx", "missing.xlsx");
        let res = read_excel_roster("/nonexistent/missing.xlsx", &source);
        assert!(matches!(res, Err(BidError::OpeningExcel { .. })));
    }
}
