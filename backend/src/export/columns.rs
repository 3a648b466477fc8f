//! Column specifications: flattening nested records into rows.
//!
//! A column is a name plus a projection from a record to one cell. Column
//! lists are built once from three combinators:
//!
//! - [`field`] - copy a value verbatim
//! - [`generate`] - compute a value, with [`Generated`] distinguishing
//!   "known to be absent" (`-`) from "not recorded" (empty)
//! - [`lift`] - reuse child columns on a parent through an optional accessor
//!
//! ```rust,ignore
//! let columns = vec![
//!     field("", "title", |s: &DmgSubmission| &s.title),
//! ];
//! let board = lift(
//!     |s: &DmgSubmission| s.metadata.as_ref().and_then(|m| m.lcd_board.as_ref()),
//!     vec![field("lcd_board", "type", |b: &DmgLcdBoard| &b.kind)],
//! );
//! let spec = ColumnSpec::new([columns, board].concat())?;
//! let row = spec.project(&submission);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::config::ConsoleType;
use crate::error::{SpecError, SpecResult};

/// One flattened record, cells in column order.
pub type Row = Vec<String>;

/// Cell rendering of [`Generated::Null`]
pub const NULL_CELL: &str = "-";

type Getter<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

// =============================================================================
// Cells
// =============================================================================

/// A scalar that can be written into a CSV cell.
pub trait ToCell {
    fn to_cell(&self) -> String;
}

impl ToCell for str {
    fn to_cell(&self) -> String {
        self.to_string()
    }
}

impl ToCell for String {
    fn to_cell(&self) -> String {
        self.clone()
    }
}

macro_rules! number_cell {
    ($($ty:ty),+) => {
        $(
            impl ToCell for $ty {
                fn to_cell(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

number_cell!(u8, u16, u32, u64, i32, i64, usize);

/// Spreadsheet convention: `1` for true, empty for false.
impl ToCell for bool {
    fn to_cell(&self) -> String {
        if *self { "1".to_string() } else { String::new() }
    }
}

impl ToCell for ConsoleType {
    fn to_cell(&self) -> String {
        self.code().to_string()
    }
}

/// Unrecorded values are empty cells.
impl<V: ToCell> ToCell for Option<V> {
    fn to_cell(&self) -> String {
        self.as_ref().map(ToCell::to_cell).unwrap_or_default()
    }
}

// =============================================================================
// Generated values
// =============================================================================

/// Result of a computed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated<V> {
    /// A value, rendered as is
    Value(V),
    /// Known not to exist, rendered as [`NULL_CELL`]
    Null,
    /// Not recorded, rendered as an empty cell
    Missing,
}

impl<V: ToCell> Generated<V> {
    pub fn into_cell(self) -> String {
        match self {
            Generated::Value(value) => value.to_cell(),
            Generated::Null => NULL_CELL.to_string(),
            Generated::Missing => String::new(),
        }
    }
}

impl<V> From<Option<V>> for Generated<V> {
    fn from(value: Option<V>) -> Self {
        match value {
            Some(value) => Generated::Value(value),
            None => Generated::Missing,
        }
    }
}

// =============================================================================
// Columns
// =============================================================================

/// A named projection from `T` to a cell.
///
/// Cloning is cheap; the projection is shared.
pub struct Column<T> {
    name: String,
    get: Getter<T>,
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            get: Arc::clone(&self.get),
        }
    }
}

impl<T> Column<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cell value of this column for `record`.
    pub fn get(&self, record: &T) -> String {
        (self.get)(record)
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column").field("name", &self.name).finish()
    }
}

fn column_name(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}_{}", prefix, name)
    }
}

/// Column that copies a value of the record verbatim.
///
/// Named `prefix_key`, or just `key` when `prefix` is empty.
pub fn field<T, V, F>(prefix: &str, key: &str, get: F) -> Column<T>
where
    T: 'static,
    V: ToCell + ?Sized + 'static,
    F: Fn(&T) -> &V + Send + Sync + 'static,
{
    Column {
        name: column_name(prefix, key),
        get: Arc::new(move |record: &T| get(record).to_cell()),
    }
}

/// Column computed from the record.
///
/// Named like [`field`]. [`Generated::Null`] becomes `-`,
/// [`Generated::Missing`] an empty cell.
pub fn generate<T, V, F>(prefix: &str, name: &str, compute: F) -> Column<T>
where
    T: 'static,
    V: ToCell + 'static,
    F: Fn(&T) -> Generated<V> + Send + Sync + 'static,
{
    Column {
        name: column_name(prefix, name),
        get: Arc::new(move |record: &T| compute(record).into_cell()),
    }
}

/// Turn columns of a child record into columns of its parent.
///
/// Every lifted column yields an empty cell when `accessor` returns `None`,
/// without calling the child column. Names are unchanged.
pub fn lift<P, C, F>(accessor: F, columns: Vec<Column<C>>) -> Vec<Column<P>>
where
    P: 'static,
    C: 'static,
    F: Fn(&P) -> Option<&C> + Send + Sync + 'static,
{
    let accessor = Arc::new(accessor);
    columns
        .into_iter()
        .map(|Column { name, get }| {
            let accessor = Arc::clone(&accessor);
            Column {
                name,
                get: Arc::new(move |parent: &P| match accessor(parent) {
                    Some(child) => get(child),
                    None => String::new(),
                }) as Getter<P>,
            }
        })
        .collect()
}

// =============================================================================
// Column specification
// =============================================================================

/// Validated, ordered column list for one record type.
///
/// Names are non-empty and unique. A specification is immutable once built
/// and can be shared between threads.
pub struct ColumnSpec<T> {
    columns: Vec<Column<T>>,
}

impl<T> ColumnSpec<T> {
    pub fn new(columns: Vec<Column<T>>) -> SpecResult<Self> {
        let mut seen = HashSet::new();
        for (index, column) in columns.iter().enumerate() {
            if column.name.is_empty() {
                return Err(SpecError::EmptyName { index });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(SpecError::DuplicateName(column.name.clone()));
            }
        }
        Ok(Self { columns })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    /// Column names in order, i.e. the CSV header.
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Flatten one record. The row always has [`len`](Self::len) cells.
    pub fn project(&self, record: &T) -> Row {
        self.columns.iter().map(|column| column.get(record)).collect()
    }
}

impl<T> fmt::Debug for ColumnSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct Chip {
        label: Option<String>,
    }

    #[derive(Default)]
    struct SubBoard {
        chip: Option<Chip>,
    }

    #[derive(Default)]
    struct Board {
        kind: String,
        sub_board: Option<SubBoard>,
    }

    #[derive(Default)]
    struct Record {
        title: String,
        slug: String,
        board: Option<Board>,
    }

    fn record_with_chip(label: &str) -> Record {
        Record {
            title: "Foo".into(),
            slug: "foo-1".into(),
            board: Some(Board {
                kind: "V1".into(),
                sub_board: Some(SubBoard {
                    chip: Some(Chip { label: Some(label.into()) }),
                }),
            }),
        }
    }

    fn nested_columns() -> Vec<Column<Record>> {
        lift(
            |r: &Record| r.board.as_ref(),
            [
                vec![field("board", "type", |b: &Board| &b.kind)],
                lift(
                    |b: &Board| b.sub_board.as_ref(),
                    lift(
                        |s: &SubBoard| s.chip.as_ref(),
                        vec![
                            field("chip", "label", |c: &Chip| &c.label),
                            generate("chip", "note", |c: &Chip| match &c.label {
                                Some(_) => Generated::Value("ok".to_string()),
                                None => Generated::Null,
                            }),
                        ],
                    ),
                ),
            ]
            .concat(),
        )
    }

    #[test]
    fn test_field_and_generate_scenario() {
        let spec = ColumnSpec::new(vec![
            field("", "title", |r: &Record| &r.title),
            generate("", "url", |r: &Record| {
                Generated::Value(format!(".../{}.html", r.slug))
            }),
        ])
        .unwrap();

        let row = spec.project(&record_with_chip("x"));
        assert_eq!(row, vec!["Foo", ".../foo-1.html"]);
        assert_eq!(spec.names(), vec!["title", "url"]);
    }

    #[test]
    fn test_prefixed_names() {
        assert_eq!(field("board", "type", |b: &Board| &b.kind).name(), "board_type");
        assert_eq!(field("", "type", |b: &Board| &b.kind).name(), "type");
        assert_eq!(
            generate("cpu", "calendar", |_: &Chip| Generated::<String>::Missing).name(),
            "cpu_calendar"
        );
    }

    #[test]
    fn test_lift_absent_and_present() {
        let spec = ColumnSpec::new(lift(
            |r: &Record| r.board.as_ref(),
            vec![field("board", "type", |b: &Board| &b.kind)],
        ))
        .unwrap();

        assert_eq!(spec.project(&Record::default()), vec![""]);
        assert_eq!(spec.project(&record_with_chip("x")), vec!["V1"]);
    }

    #[test]
    fn test_generate_three_way() {
        let null = generate("", "n", |_: &Record| Generated::<String>::Null);
        let missing = generate("", "m", |_: &Record| Generated::<String>::Missing);
        let value = generate("", "v", |_: &Record| Generated::Value(1994u16));
        let record = Record::default();

        assert_eq!(null.get(&record), "-");
        assert_eq!(missing.get(&record), "");
        assert_eq!(value.get(&record), "1994");
    }

    #[test]
    fn test_deep_lift_short_circuits_at_first_absent_ancestor() {
        let spec = ColumnSpec::new(nested_columns()).unwrap();
        assert_eq!(spec.names(), vec!["board_type", "chip_label", "chip_note"]);

        // Absent at every level: all cells empty, never "-"
        let no_board = Record::default();
        assert_eq!(spec.project(&no_board), vec!["", "", ""]);

        let no_sub_board = Record {
            board: Some(Board { kind: "V2".into(), sub_board: None }),
            ..Record::default()
        };
        assert_eq!(spec.project(&no_sub_board), vec!["V2", "", ""]);

        let no_chip = Record {
            board: Some(Board { kind: "V2".into(), sub_board: Some(SubBoard::default()) }),
            ..Record::default()
        };
        assert_eq!(spec.project(&no_chip), vec!["V2", "", ""]);

        // Chip present without a label reaches the generator
        let unlabeled = Record {
            board: Some(Board {
                kind: "V2".into(),
                sub_board: Some(SubBoard { chip: Some(Chip::default()) }),
            }),
            ..Record::default()
        };
        assert_eq!(spec.project(&unlabeled), vec!["V2", "", "-"]);

        assert_eq!(spec.project(&record_with_chip("LR35902")), vec!["V1", "LR35902", "ok"]);
    }

    #[test]
    fn test_lift_does_not_call_child_when_absent() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let columns = lift(
            |r: &Record| r.board.as_ref(),
            vec![generate("board", "counted", |_: &Board| {
                CALLS.fetch_add(1, Ordering::SeqCst);
                Generated::<String>::Missing
            })],
        );

        columns[0].get(&Record::default());
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);
        columns[0].get(&record_with_chip("x"));
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_row_length_matches_spec() {
        let spec = ColumnSpec::new(
            [
                vec![field("", "title", |r: &Record| &r.title)],
                nested_columns(),
            ]
            .concat(),
        )
        .unwrap();

        for record in [Record::default(), record_with_chip("a")] {
            assert_eq!(spec.project(&record).len(), spec.len());
        }
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = ColumnSpec::new(vec![
            field("", "title", |r: &Record| &r.title),
            field("", "title", |r: &Record| &r.slug),
        ]);
        assert_eq!(result.unwrap_err(), SpecError::DuplicateName("title".into()));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = ColumnSpec::new(vec![
            field("", "title", |r: &Record| &r.title),
            field("", "", |r: &Record| &r.slug),
        ]);
        assert_eq!(result.unwrap_err(), SpecError::EmptyName { index: 1 });
    }

    #[test]
    fn test_option_and_bool_cells() {
        assert_eq!(Some(12u8).to_cell(), "12");
        assert_eq!(None::<u8>.to_cell(), "");
        assert_eq!(true.to_cell(), "1");
        assert_eq!(false.to_cell(), "");
        assert_eq!(ConsoleType::Sgb2.to_cell(), "sgb2");
    }

    #[test]
    fn test_generated_from_option() {
        assert_eq!(Generated::from(Some(3u8)), Generated::Value(3));
        assert_eq!(Generated::<u8>::from(None), Generated::Missing);
    }
}
