/*!

This is the long-form manual for `line_bidding` and `linebid`.

## How the bid runs

Lines are numbered from `1` to the total number of lines. The roster is sorted by seniority
(lowest number first). Crew members sharing a seniority number keep the order in which they
appear in the roster.

Each crew member ahead of you receives the first line of their list that nobody has taken yet.
If every line of their list is gone (or if their list is empty), they receive nothing and the
audit trail shows `no award`. Bidding stops at the first crew member whose seniority is equal
to or greater than yours: this is your turn, and the lines left at that point are the lines
available to you. Your rank is your position in the bidding order, counting from 1.

If the roster ends before reaching your seniority (incomplete extraction, partial roster), your
rank is one past the last crew member of the roster.

## Input formats

The following formats are supported:
* `text` plain text extracted from a PDF or from an OCR'd screenshot (the default)
* `csv` Comma Separated Values
* `xlsx` Excel spreadsheets

### `text`

One crew member per line: the seniority number first, then an identifier (employee number or
name), then the bid lines in order of preference. Numbers may be separated by spaces, commas or
semicolons.

```text
SEN  EMP    BIDS
1    A123   14 3 22 9
2    B456   3, 14, 7
```

Lines that do not start with a number, such as headers and page footers, are ignored. So are
page markers such as `2 of 3` or `2 / 3`, unless the columns are configured.
The identifier may be omitted, in which case the line number in the file is used.

### `csv`

One crew member per record. The columns are chosen with `seniorityColumnIndex`,
`idColumnIndex` and `firstBidColumnIndex` (all starting at 1). Header rows are skipped with
`firstRowIndex`. Empty cells are ignored.

### `xlsx`

Same options as `csv`. The first worksheet is read, unless `excelWorksheetName` (or the
`--excel-worksheet-name` flag) names another one. Column indexes may also be written as
Excel column letters (`"A"`, `"B"`, ...).

## Configuration

The configuration file is a JSON document:

```json
{
  "outputSettings": { "bidPeriod": "2026-11", "outputPath": "summary.json" },
  "bidSettings": { "seniority": 150, "totalLines": 40 },
  "rosterSources": [
    { "provider": "csv", "filePath": "roster.csv", "firstRowIndex": 2,
      "seniorityColumnIndex": 1, "idColumnIndex": 2, "firstBidColumnIndex": 3 }
  ]
}
```

File paths are relative to the configuration file. Several sources are read one after the
other and put together in a single roster. The `--seniority`, `--lines`, `--input` and `--out`
flags override the corresponding settings.

*/
