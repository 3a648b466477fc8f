//! JSON submissions in, CSV out.
//!
//! # Example
//!
//! ```rust,ignore
//! use gbhwdb::{export_json_file_async, ConsoleType, ExportConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let summary = export_json_file_async(
//!         ConsoleType::Dmg,
//!         "data/dmg.json".into(),
//!         "build/dmg.csv".into(),
//!         ExportConfig::from_env(),
//!     ).await?;
//!
//!     println!("Exported {} submissions", summary.records);
//!     Ok(())
//! }
//! ```

use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::config::{ConsoleType, ExportConfig};
use crate::error::{ExportResult, PipelineError, PipelineResult};
use crate::logs::{log_error, log_info, log_info_indent, log_success, log_success_indent, log_warning};
use crate::models::Submission;

use super::columns::ColumnSpec;
use super::consoles::{console_spec, dispatch_console, ConsoleMetadata};
use super::sink::{write_csv, CsvSink};

/// Where an export writes its CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Outcome of one console export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub console: ConsoleType,
    /// Data rows written, one per submission
    pub records: usize,
    pub columns: usize,
    pub output: Destination,
}

/// Write `records` as CSV (header first) to any writer.
pub fn export_records<T, W: Write>(
    spec: &ColumnSpec<T>,
    records: &[T],
    writer: W,
) -> ExportResult<W> {
    log_info(format!("Writing {} rows x {} columns", records.len(), spec.len()));
    write_csv(spec, records, writer)
}

/// Read a JSON array of submissions.
///
/// Wrongly typed fields inside a record are dropped (see [`Submission`]).
/// A record that still can't be read, e.g. one without a `slug`, is skipped
/// with a warning. Only input that isn't a JSON array is an error.
pub fn read_submissions<M: ConsoleMetadata>(input: &Path) -> PipelineResult<Vec<Submission<M>>> {
    log_info(format!("📖 Reading {}", input.display()));
    let file = File::open(input)?;
    let values: Vec<serde_json::Value> = serde_json::from_reader(BufReader::new(file))?;

    let mut submissions = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<Submission<M>>(value) {
            Ok(submission) => submissions.push(submission),
            Err(err) => log_warning(format!("Skipping record {}: {}", index, err)),
        }
    }

    let foreign = submissions.iter().filter(|s| s.console != M::CONSOLE).count();
    if foreign > 0 {
        log_warning(format!(
            "{} submissions are not of type {}",
            foreign,
            M::CONSOLE
        ));
    }
    log_success(format!("Read {} {} submissions", submissions.len(), M::CONSOLE.name()));
    Ok(submissions)
}

fn export_console<M: ConsoleMetadata>(
    input: &Path,
    output: &Destination,
    config: &ExportConfig,
) -> PipelineResult<ExportSummary> {
    // Input is parsed before the destination is touched
    let submissions = read_submissions::<M>(input)?;
    let spec = console_spec::<M>(config)?;
    log_info(format!("📋 {} columns", spec.len()));

    let records = match output {
        Destination::Stdout => CsvSink::new(io::stdout().lock()).write_all(&spec, &submissions)?,
        Destination::File(path) => CsvSink::create(path)?.write_all(&spec, &submissions)?,
    };
    log_success(format!("Wrote {} rows to {}", records, output));

    Ok(ExportSummary {
        console: M::CONSOLE,
        records,
        columns: spec.len(),
        output: output.clone(),
    })
}

/// Export the submissions of one console from a JSON file.
pub fn export_json(
    console: ConsoleType,
    input: &Path,
    output: &Destination,
    config: &ExportConfig,
) -> PipelineResult<ExportSummary> {
    dispatch_console!(console, export_console(input, output, config))
}

/// Export the submissions of one console from a JSON file to a CSV file.
pub fn export_json_file(
    console: ConsoleType,
    input: &Path,
    output: &Path,
    config: &ExportConfig,
) -> PipelineResult<ExportSummary> {
    export_json(console, input, &Destination::File(output.to_path_buf()), config)
}

/// [`export_json_file`] on the blocking thread pool.
pub async fn export_json_file_async(
    console: ConsoleType,
    input: PathBuf,
    output: PathBuf,
    config: ExportConfig,
) -> PipelineResult<ExportSummary> {
    tokio::task::spawn_blocking(move || export_json_file(console, &input, &output, &config))
        .await
        .map_err(|e| PipelineError::Task(e.to_string()))?
}

/// Export every console with a `<code>.json` in `input_dir` to
/// `<code>.csv` in `output_dir`.
///
/// Consoles are exported concurrently; summaries come back in console order.
/// The first failure is returned after all exports have ended.
pub async fn export_all(
    input_dir: &Path,
    output_dir: &Path,
    config: &ExportConfig,
) -> PipelineResult<Vec<ExportSummary>> {
    tokio::fs::create_dir_all(output_dir).await?;

    let mut tasks = Vec::new();
    for console in ConsoleType::ALL {
        let input = input_dir.join(format!("{}.json", console.code()));
        if !tokio::fs::try_exists(&input).await? {
            continue;
        }
        log_info_indent(format!("{} ({})", console.name(), console.code()), 1);
        let output = output_dir.join(format!("{}.csv", console.code()));
        let task = tokio::spawn(export_json_file_async(console, input, output, config.clone()));
        tasks.push((console, task));
    }

    if tasks.is_empty() {
        log_warning(format!("No console JSON files in {}", input_dir.display()));
    }

    let mut summaries = Vec::with_capacity(tasks.len());
    let mut first_error = None;
    for (console, task) in tasks {
        let result = task
            .await
            .map_err(|e| PipelineError::Task(e.to_string()))
            .and_then(|result| result);
        match result {
            Ok(summary) => {
                log_success_indent(format!("{}: {} rows", console, summary.records), 1);
                summaries.push(summary);
            }
            Err(err) => {
                log_error(format!("{}: {}", console, err));
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => {
            log_success(format!("Exported {} consoles", summaries.len()));
            Ok(summaries)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::export::columns::{field, generate, Generated};
    use crate::models::MgbMetadata;
    use tempfile::tempdir;

    const DMG_JSON: &str = r#"[
        {
            "type": "dmg",
            "title": "G10034567",
            "slug": "G10034567",
            "contributor": "someone",
            "metadata": {
                "color": "gray",
                "year": 1990,
                "month": 4,
                "mainboard": {
                    "type": "DMG-CPU-04",
                    "cpu": {"type": "DMG-CPU B", "manufacturer": "sharp", "year": 1990, "week": 2}
                },
                "lcd_board": {"type": "DMG-LCD-06", "year": 1990}
            }
        },
        {
            "type": "dmg",
            "title": "G20000000",
            "slug": "G20000000"
        }
    ]"#;

    fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = csv::Reader::from_path(path).unwrap();
        let header = reader.headers().unwrap().iter().map(String::from).collect();
        let rows = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        (header, rows)
    }

    #[test]
    fn test_export_records_to_memory() {
        struct Game {
            code: String,
        }
        let spec = ColumnSpec::new(vec![
            field("", "code", |g: &Game| &g.code),
            generate("", "known", |g: &Game| {
                if g.code.starts_with("DMG") {
                    Generated::Value("yes".to_string())
                } else {
                    Generated::Null
                }
            }),
        ])
        .unwrap();
        let games = [Game { code: "DMG-TRA-1".into() }, Game { code: "XYZ".into() }];

        let bytes = export_records(&spec, &games, Vec::new()).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "code,known\nDMG-TRA-1,yes\nXYZ,-\n");
    }

    #[test]
    fn test_export_json_file() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "dmg.json", DMG_JSON);
        let output = dir.path().join("dmg.csv");

        let summary =
            export_json_file(ConsoleType::Dmg, &input, &output, &ExportConfig::default()).unwrap();
        assert_eq!(summary.records, 2);
        assert_eq!(summary.console, ConsoleType::Dmg);
        assert_eq!(summary.output, Destination::File(output.clone()));

        let (header, rows) = read_csv(&output);
        assert_eq!(header.len(), summary.columns);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == header.len()));

        let column = |name: &str| header.iter().position(|h| h == name).unwrap();
        assert_eq!(rows[0][column("cpu_calendar")], "Week 2/1990");
        assert_eq!(rows[0][column("lcd_board_calendar")], "1990");
        assert_eq!(rows[0][column("power_board_type")], "");
        assert_eq!(rows[1][column("url")], "https://gbhwdb.gekkio.fi/consoles/dmg/G20000000.html");
        assert_eq!(rows[1][column("mainboard_type")], "");
    }

    #[test]
    fn test_invalid_json_leaves_output_untouched() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "sgb.json", "{ not json");
        let output = dir.path().join("sgb.csv");

        let err = export_json_file(ConsoleType::Sgb, &input, &output, &ExportConfig::default())
            .unwrap_err();
        assert!(matches!(err, PipelineError::Json(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_wrongly_typed_field_keeps_record() {
        let dir = tempdir().unwrap();
        let input = write_input(
            dir.path(),
            "dmg.json",
            r#"[
                {"type": "dmg", "title": "G1", "slug": "G1", "metadata": {"year": 1990}},
                {"type": "dmg", "title": "G2", "slug": "G2", "metadata": {"year": "1990?", "color": "red"}}
            ]"#,
        );
        let output = dir.path().join("dmg.csv");

        let summary =
            export_json_file(ConsoleType::Dmg, &input, &output, &ExportConfig::default()).unwrap();
        assert_eq!(summary.records, 2);

        let (header, rows) = read_csv(&output);
        let column = |name: &str| header.iter().position(|h| h == name).unwrap();
        assert_eq!(rows[0][column("year")], "1990");
        assert_eq!(rows[1][column("year")], "");
        assert_eq!(rows[1][column("calendar")], "");
        assert_eq!(rows[1][column("color")], "red");
    }

    #[test]
    fn test_unreadable_record_is_skipped() {
        let dir = tempdir().unwrap();
        let input = write_input(
            dir.path(),
            "mgb.json",
            r#"[
                {"type": "mgb", "title": "M1", "slug": "M1"},
                {"type": "mgb", "title": "M2"},
                "not a submission",
                {"type": "mgb", "title": "M3", "slug": "M3"}
            ]"#,
        );

        let submissions = read_submissions::<MgbMetadata>(&input).unwrap();
        let slugs: Vec<&str> = submissions.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["M1", "M3"]);
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let err = export_json_file(
            ConsoleType::Cgb,
            &dir.path().join("nope.json"),
            &dir.path().join("cgb.csv"),
            &ExportConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::Io(_)));
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "oxy.json", "[]");
        let output = dir.path().join("missing").join("oxy.csv");

        let err = export_json_file(ConsoleType::Oxy, &input, &output, &ExportConfig::default())
            .unwrap_err();
        assert!(matches!(err, PipelineError::Export(ExportError::Open { .. })));
    }

    #[tokio::test]
    async fn test_export_json_file_async() {
        let dir = tempdir().unwrap();
        let input = write_input(dir.path(), "dmg.json", DMG_JSON);
        let output = dir.path().join("dmg.csv");

        let summary = export_json_file_async(
            ConsoleType::Dmg,
            input,
            output.clone(),
            ExportConfig::default().with_site_root("http://localhost"),
        )
        .await
        .unwrap();
        assert_eq!(summary.records, 2);

        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(contents.lines().count(), 3);
        assert!(contents.contains("http://localhost/consoles/dmg/G10034567.html"));
    }

    #[tokio::test]
    async fn test_export_all() {
        let input_dir = tempdir().unwrap();
        let output_dir = tempdir().unwrap();
        let out = output_dir.path().join("csv");
        write_input(input_dir.path(), "dmg.json", DMG_JSON);
        write_input(input_dir.path(), "mgl.json", r#"[{"type": "mgl", "title": "L1", "slug": "L1"}]"#);

        let summaries = export_all(input_dir.path(), &out, &ExportConfig::default())
            .await
            .unwrap();
        let consoles: Vec<ConsoleType> = summaries.iter().map(|s| s.console).collect();
        assert_eq!(consoles, vec![ConsoleType::Dmg, ConsoleType::Mgl]);
        assert!(out.join("dmg.csv").exists());
        assert!(out.join("mgl.csv").exists());
        assert!(!out.join("cgb.csv").exists());
    }

    #[tokio::test]
    async fn test_export_all_reports_failure() {
        let input_dir = tempdir().unwrap();
        let output_dir = tempdir().unwrap();
        write_input(input_dir.path(), "dmg.json", DMG_JSON);
        write_input(input_dir.path(), "agb.json", "[{]");

        let result = export_all(input_dir.path(), output_dir.path(), &ExportConfig::default()).await;
        assert!(matches!(result, Err(PipelineError::Json(_))));
        // Other consoles still ran to completion
        assert!(output_dir.path().join("dmg.csv").exists());
    }

    #[test]
    fn test_destination_display() {
        assert_eq!(Destination::Stdout.to_string(), "stdout");
        assert_eq!(Destination::File("out/dmg.csv".into()).to_string(), "out/dmg.csv");
    }
}
