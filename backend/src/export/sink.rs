//! CSV destination for flattened rows.
//!
//! ```text
//! Opened ──header──▶ Writing ──rows──▶ Writing ──finish──▶ Finished
//!    │                  │
//!    └──────────────────┴────── any error ──▶ Failed
//! ```
//!
//! `Finished` and `Failed` are terminal: further writes are rejected. A
//! failed destination is left as is; nothing is rolled back.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ExportError, ExportResult};

use super::columns::ColumnSpec;

/// Lifecycle of a [`CsvSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkState {
    /// Destination open, nothing written yet
    Opened,
    /// Header written, accepting rows
    Writing,
    /// All output flushed
    Finished,
    /// A write or flush failed
    Failed,
}

/// Sequential CSV writer with an explicit state.
///
/// Values containing the delimiter, quotes or line breaks are quoted.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    state: SinkState,
    rows: usize,
}

impl CsvSink<File> {
    /// Create (or truncate) a CSV file.
    pub fn create(path: impl AsRef<Path>) -> ExportResult<Self> {
        let path = path.as_ref();
        let writer = csv::Writer::from_path(path).map_err(|source| ExportError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_csv_writer(writer))
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self::from_csv_writer(csv::Writer::from_writer(writer))
    }

    fn from_csv_writer(writer: csv::Writer<W>) -> Self {
        Self {
            writer,
            state: SinkState::Opened,
            rows: 0,
        }
    }

    pub fn state(&self) -> SinkState {
        self.state
    }

    /// Data rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn ensure_open(&self) -> ExportResult<()> {
        match self.state {
            SinkState::Opened | SinkState::Writing => Ok(()),
            SinkState::Finished => Err(ExportError::SinkFinished),
            SinkState::Failed => Err(ExportError::SinkFailed),
        }
    }

    fn fail<E: Into<ExportError>>(&mut self, err: E) -> ExportError {
        self.state = SinkState::Failed;
        err.into()
    }

    /// Write the header line. Only allowed as the first write.
    pub fn write_header<I, S>(&mut self, names: I) -> ExportResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        self.ensure_open()?;
        if self.state == SinkState::Writing {
            return Err(self.fail(ExportError::HeaderWritten));
        }
        self.writer.write_record(names).map_err(|e| self.fail(e))?;
        self.state = SinkState::Writing;
        Ok(())
    }

    /// Write one data row after the header.
    pub fn write_row<I, S>(&mut self, row: I) -> ExportResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        self.ensure_open()?;
        if self.state == SinkState::Opened {
            return Err(self.fail(ExportError::MissingHeader));
        }
        self.writer.write_record(row).map_err(|e| self.fail(e))?;
        self.rows += 1;
        Ok(())
    }

    /// Flush everything to the destination.
    ///
    /// A sink that never saw a header still writes nothing but is finished.
    pub fn finish(&mut self) -> ExportResult<usize> {
        self.ensure_open()?;
        self.writer.flush().map_err(|e| self.fail(e))?;
        self.state = SinkState::Finished;
        Ok(self.rows)
    }

    /// Header plus one row per record, then [`finish`](Self::finish).
    pub fn write_all<T>(&mut self, spec: &ColumnSpec<T>, records: &[T]) -> ExportResult<usize> {
        self.write_header(spec.names())?;
        for record in records {
            self.write_row(spec.project(record))?;
        }
        self.finish()
    }

    /// Give back the destination of a finished sink.
    pub fn into_inner(self) -> ExportResult<W> {
        match self.state {
            SinkState::Finished => self
                .writer
                .into_inner()
                .map_err(|e| ExportError::Flush(e.into_error())),
            SinkState::Failed => Err(ExportError::SinkFailed),
            SinkState::Opened | SinkState::Writing => Err(ExportError::NotFinished),
        }
    }
}

/// Write `records` as CSV to any writer, returning the writer.
pub fn write_csv<T, W: Write>(spec: &ColumnSpec<T>, records: &[T], writer: W) -> ExportResult<W> {
    let mut sink = CsvSink::new(writer);
    sink.write_all(spec, records)?;
    sink.into_inner()
}

/// Write `records` as CSV to a file, returning the number of data rows.
pub fn write_csv_file<T>(
    spec: &ColumnSpec<T>,
    records: &[T],
    path: impl AsRef<Path>,
) -> ExportResult<usize> {
    CsvSink::create(path)?.write_all(spec, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::columns::{field, generate, Generated};
    use std::io;
    use tempfile::tempdir;

    struct Item {
        title: String,
        note: Option<String>,
    }

    fn item(title: &str, note: Option<&str>) -> Item {
        Item { title: title.into(), note: note.map(String::from) }
    }

    fn spec() -> ColumnSpec<Item> {
        ColumnSpec::new(vec![
            field("", "title", |i: &Item| &i.title),
            field("", "note", |i: &Item| &i.note),
            generate("", "known", |i: &Item| match &i.note {
                Some(_) => Generated::Value(true),
                None => Generated::Null,
            }),
        ])
        .unwrap()
    }

    fn to_string(records: &[Item]) -> String {
        let bytes = write_csv(&spec(), records, Vec::new()).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    /// Writer whose writes start failing after `budget` bytes.
    struct FailingWriter {
        budget: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.len() > self.budget {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.budget -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_header_and_rows() {
        let out = to_string(&[item("Foo", Some("a")), item("Bar", None)]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["title,note,known", "Foo,a,1", "Bar,,-"]);
    }

    #[test]
    fn test_line_count_is_records_plus_one() {
        let records: Vec<Item> = (0..25).map(|i| item(&format!("T{}", i), None)).collect();
        assert_eq!(to_string(&records).lines().count(), records.len() + 1);
        assert_eq!(to_string(&[]).lines().count(), 1);
    }

    #[test]
    fn test_quoting() {
        let out = to_string(&[item("a,b", Some("say \"hi\"")), item("two\nlines", None)]);
        assert!(out.contains("\"a,b\",\"say \"\"hi\"\"\",1\n"));
        assert!(out.contains("\"two\nlines\",,-\n"));

        // Parses back to the same values
        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(&records[0][1], "say \"hi\"");
        assert_eq!(&records[1][0], "two\nlines");
    }

    #[test]
    fn test_idempotent_output() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        let records = [item("Foo", Some("x")), item("Bar", None)];

        assert_eq!(write_csv_file(&spec(), &records, &first).unwrap(), 2);
        assert_eq!(write_csv_file(&spec(), &records, &second).unwrap(), 2);
        assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
    }

    #[test]
    fn test_open_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let err = CsvSink::create(&path).err().unwrap();
        match err {
            ExportError::Open { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_state_transitions() {
        let mut sink = CsvSink::new(Vec::new());
        assert_eq!(sink.state(), SinkState::Opened);

        sink.write_header(["a", "b"]).unwrap();
        assert_eq!(sink.state(), SinkState::Writing);
        sink.write_row(["1", "2"]).unwrap();
        assert_eq!(sink.finish().unwrap(), 1);
        assert_eq!(sink.state(), SinkState::Finished);

        assert!(matches!(sink.write_row(["3", "4"]), Err(ExportError::SinkFinished)));
        assert!(matches!(sink.finish(), Err(ExportError::SinkFinished)));
        assert_eq!(sink.into_inner().unwrap(), b"a,b\n1,2\n");
    }

    #[test]
    fn test_row_before_header_fails() {
        let mut sink = CsvSink::new(Vec::new());
        assert!(matches!(sink.write_row(["1"]), Err(ExportError::MissingHeader)));
        assert_eq!(sink.state(), SinkState::Failed);
        assert!(matches!(sink.write_header(["a"]), Err(ExportError::SinkFailed)));
    }

    #[test]
    fn test_row_length_mismatch_fails() {
        let mut sink = CsvSink::new(Vec::new());
        sink.write_header(["a", "b"]).unwrap();
        assert!(matches!(sink.write_row(["1"]), Err(ExportError::Write(_))));
        assert_eq!(sink.state(), SinkState::Failed);
    }

    #[test]
    fn test_write_failure_is_terminal() {
        let records: Vec<Item> = (0..1000).map(|i| item(&format!("Title {}", i), None)).collect();
        let mut sink = CsvSink::new(FailingWriter { budget: 64 });

        assert!(sink.write_all(&spec(), &records).is_err());
        assert_eq!(sink.state(), SinkState::Failed);
        assert!(matches!(sink.finish(), Err(ExportError::SinkFailed)));
        assert!(matches!(sink.into_inner(), Err(ExportError::SinkFailed)));
    }
}
