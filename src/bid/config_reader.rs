use crate::bid::*;

use log::debug;
use serde::{Deserialize, Serialize};
use snafu::prelude::*;
use std::fs;
use serde_json::Value as JSValue;

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(rename = "bidPeriod")]
    pub bid_period: Option<String>,
    #[serde(rename = "outputPath")]
    pub output_path: Option<String>,
}

/// The settings echoed in the summary.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "bidPeriod", skip_serializing_if = "Option::is_none")]
    pub bid_period: Option<String>,
    pub seniority: u32,
    #[serde(rename = "totalLines")]
    pub total_lines: u32,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct BidSettings {
    pub seniority: Option<u32>,
    #[serde(rename = "totalLines")]
    pub total_lines: Option<u32>,
}

/// A roster file and the settings to read it.
///
/// All the column and row indexes start at 1, as in spreadsheets.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct RosterSource {
    pub provider: String,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "firstRowIndex")]
    _first_row_index: Option<JSValue>,
    #[serde(rename = "seniorityColumnIndex")]
    _seniority_column_index: Option<JSValue>,
    #[serde(rename = "idColumnIndex")]
    _id_column_index: Option<JSValue>,
    #[serde(rename = "firstBidColumnIndex")]
    _first_bid_column_index: Option<JSValue>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

impl RosterSource {
    /// A source with the default layout for the provider.
    pub fn new(provider: &str, file_path: &str) -> RosterSource {
        RosterSource {
            provider: provider.to_string(),
            file_path: file_path.to_string(),
            _first_row_index: None,
            _seniority_column_index: None,
            _id_column_index: None,
            _first_bid_column_index: None,
            excel_worksheet_name: None,
        }
    }

    /// The number of rows to skip before the roster starts.
    pub fn first_row_index(&self) -> BidResult<usize> {
        match &self._first_row_index {
            Some(x) => Ok(read_js_int(x)? - 1),
            None => Ok(0),
        }
    }

    // The methods below return zero-based column positions.

    pub fn seniority_column_index(&self) -> BidResult<usize> {
        match &self._seniority_column_index {
            Some(x) => Ok(read_js_int(x)? - 1),
            None => Ok(0),
        }
    }

    pub fn id_column_index(&self) -> BidResult<Option<usize>> {
        match &self._id_column_index {
            Some(x) => Ok(Some(read_js_int(x)? - 1)),
            None => Ok(None),
        }
    }

    /// Defaults to the column following the seniority and the identifier.
    pub fn first_bid_column_index(&self) -> BidResult<usize> {
        match &self._first_bid_column_index {
            Some(x) => Ok(read_js_int(x)? - 1),
            None => {
                let seniority_idx = self.seniority_column_index()?;
                let id_idx = self.id_column_index()?.unwrap_or(seniority_idx);
                seniority_idx
                    .max(id_idx)
                    .checked_add(1)
                    .context(ParsingJsonNumberSnafu {
                        content: format!("{}", seniority_idx.max(id_idx)),
                    })
            }
        }
    }

    /// True if the layout of the columns was given explicitly.
    pub fn has_explicit_columns(&self) -> bool {
        self._id_column_index.is_some() || self._first_bid_column_index.is_some()
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct BidConfig {
    #[serde(rename = "outputSettings", default)]
    pub output_settings: OutputSettings,
    #[serde(rename = "bidSettings", default)]
    pub bid_settings: BidSettings,
    #[serde(rename = "rosterSources", default)]
    pub roster_sources: Vec<RosterSource>,
}

pub fn read_config(path: &str) -> BidResult<BidConfig> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: BidConfig = serde_json::from_str(&contents).context(ParsingJsonSnafu { path })?;
    debug!("read_config: {:?}", config);
    Ok(config)
}

pub fn read_summary(path: &str) -> BidResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path })?;
    Ok(js)
}

// Indexes are either numbers, numeric strings or Excel-style column names.
// They must fit in a u32, like the rows and columns of calamine.
fn read_js_int(x: &JSValue) -> BidResult<usize> {
    let res: Option<u32> = match x {
        JSValue::Number(n) => n.as_u64().and_then(|x| u32::try_from(x).ok()),
        JSValue::String(s) if !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic()) => {
            s.to_ascii_lowercase().chars().try_fold(0u32, |acc, c| {
                acc.checked_mul(26)?
                    .checked_add((c as u32) - ('a' as u32) + 1)
            })
        }
        JSValue::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    res.filter(|idx| *idx >= 1)
        .map(|idx| idx as usize)
        .context(ParsingJsonNumberSnafu {
            content: x.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn column_indexes() {
        assert_eq!(read_js_int(&json!(3)).unwrap(), 3);
        assert_eq!(read_js_int(&json!("4")).unwrap(), 4);
        assert_eq!(read_js_int(&json!("A")).unwrap(), 1);
        assert_eq!(read_js_int(&json!("c")).unwrap(), 3);
        assert_eq!(read_js_int(&json!("AA")).unwrap(), 27);
        assert!(read_js_int(&json!(0)).is_err());
        assert!(read_js_int(&json!("")).is_err());
        assert!(read_js_int(&json!("B2")).is_err());
        assert!(read_js_int(&json!(true)).is_err());
        assert_eq!(read_js_int(&json!("XFD")).unwrap(), 16384);
        assert!(matches!(
            read_js_int(&json!("ZZZZZZZZZZZZZZZZ")),
            Err(BidError::ParsingJsonNumber { .. })
        ));
        assert!(matches!(
            read_js_int(&json!(u64::MAX)),
            Err(BidError::ParsingJsonNumber { .. })
        ));
        assert!(read_js_int(&json!("99999999999999999999")).is_err());
    }

    #[test]
    fn oversized_indexes_are_errors() {
        let source: RosterSource = serde_json::from_value(json!({
            "provider": "csv",
            "filePath": "roster.csv",
            "seniorityColumnIndex": u64::MAX
        }))
        .unwrap();
        assert!(matches!(
            source.first_bid_column_index(),
            Err(BidError::ParsingJsonNumber { .. })
        ));
        let source: RosterSource = serde_json::from_value(json!({
            "provider": "csv",
            "filePath": "roster.csv",
            "idColumnIndex": "ZZZZZZZZZZZZZZZZ"
        }))
        .unwrap();
        assert!(source.first_bid_column_index().is_err());
    }

    #[test]
    fn default_layout() {
        let source = RosterSource::new("csv", "roster.csv");
        assert_eq!(source.first_row_index().unwrap(), 0);
        assert_eq!(source.seniority_column_index().unwrap(), 0);
        assert_eq!(source.id_column_index().unwrap(), None);
        assert_eq!(source.first_bid_column_index().unwrap(), 1);
        assert!(!source.has_explicit_columns());
    }

    #[test]
    fn parse_config() {
        let config: BidConfig = serde_json::from_value(json!({
            "outputSettings": { "bidPeriod": "2026-11" },
            "bidSettings": { "seniority": 42, "totalLines": 30 },
            "rosterSources": [{
                "provider": "csv",
                "filePath": "roster.csv",
                "firstRowIndex": 2,
                "seniorityColumnIndex": "B",
                "idColumnIndex": 1
            }]
        }))
        .unwrap();
        assert_eq!(config.output_settings.bid_period, Some("2026-11".to_string()));
        assert_eq!(config.output_settings.output_path, None);
        assert_eq!(config.bid_settings.seniority, Some(42));
        assert_eq!(config.bid_settings.total_lines, Some(30));
        let source = &config.roster_sources[0];
        assert_eq!(source.first_row_index().unwrap(), 1);
        assert_eq!(source.seniority_column_index().unwrap(), 1);
        assert_eq!(source.id_column_index().unwrap(), Some(0));
        assert_eq!(source.first_bid_column_index().unwrap(), 2);
        assert!(source.has_explicit_columns());
    }

    #[test]
    fn empty_config() {
        let config: BidConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BidConfig::default());
    }
}
