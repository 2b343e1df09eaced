use clap::Parser;

/// Simulates a seniority line bid and shows the lines still open at your turn.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) The file describing the bid: roster sources, seniority, number of lines.
    /// For more information about the file format, read the manual of the line_bidding crate.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,
    /// (file path) A reference file containing the outcome of a bid in JSON format. If provided, linebid will
    /// check that the simulated output matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the bid will be written in JSON format to the given
    /// location. Setting this option overrides the path that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path or empty) The roster to read. Setting this option overrides the roster sources
    /// that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (default text) The type of the input: text, csv or xlsx.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// Your seniority number. Bidding stops at the first crew member with this seniority or a greater one.
    #[clap(short, long, value_parser)]
    pub seniority: Option<u32>,

    /// The total number of lines in the bid package. Lines are numbered from 1.
    #[clap(short, long, value_parser)]
    pub lines: Option<u32>,

    /// (default: first worksheet) When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
