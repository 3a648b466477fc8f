//! Flattening submissions into CSV.
//!
//! - [`columns`] - Column combinators (`field`, `generate`, `lift`) and row projection
//! - [`format`] - Calendar and manufacturer values of generated columns
//! - [`consoles`] - Column lists of the ten console exports
//! - [`sink`] - CSV writer state machine
//! - [`pipeline`] - JSON file in, CSV file out

pub mod columns;
pub mod consoles;
pub mod format;
pub mod pipeline;
pub mod sink;

pub use columns::{field, generate, lift, Column, ColumnSpec, Generated, Row, ToCell, NULL_CELL};
pub use format::{calendar, manufacturer, manufacturer_name, short_calendar};
pub use consoles::{chip_columns, console_column_names, console_spec, submission_columns, ConsoleMetadata};
pub use pipeline::{
    export_all, export_json, export_json_file, export_json_file_async, export_records,
    read_submissions, Destination, ExportSummary,
};
pub use sink::{write_csv, write_csv_file, CsvSink, SinkState};
