use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring the dtypes a CSV reader infers.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// ColumnType – inferred dtype of a whole column
// ---------------------------------------------------------------------------

/// Column dtype. Nullable columns keep the type of their non-null cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Bool,
    Integer,
    Float,
    String,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Bool => "bool",
            ColumnType::Integer => "int64",
            ColumnType::Float => "float64",
            ColumnType::String => "string",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Column / Table
// ---------------------------------------------------------------------------

/// One named, typed column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub dtype: ColumnType,
    pub values: Vec<CellValue>,
}

impl Column {
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Number of null cells.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }
}

/// Rows × named columns, loaded verbatim from a CSV file.
///
/// All columns have the same length; `from_columns` enforces it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    height: usize,
}

impl Table {
    /// Build a table from columns of equal length.
    ///
    /// Returns `None` if the column lengths differ.
    pub fn from_columns(columns: Vec<Column>) -> Option<Self> {
        let height = columns.first().map(Column::len).unwrap_or(0);
        if columns.iter().any(|c| c.len() != height) {
            return None;
        }
        Some(Table { columns, height })
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.columns.len())
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// A table with no rows. It may still carry a header.
    pub fn is_empty(&self) -> bool {
        self.height == 0
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn dtypes(&self) -> Vec<(&str, ColumnType)> {
        self.columns
            .iter()
            .map(|c| (c.name.as_str(), c.dtype))
            .collect()
    }

    /// Look up a column by name. Loaded tables have unique names, since
    /// repeated headers are renamed `name.1`, `name.2`, ...
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Cells of row `index`, in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&CellValue>> {
        if index >= self.height {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[index]).collect())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.shape();
        write!(f, "{rows} rows x {cols} columns [{}]", self.column_names().join(", "))
    }
}

// ---------------------------------------------------------------------------
// Datasets – the train / test_1 / test_2 triple
// ---------------------------------------------------------------------------

/// The three tables loaded together for one base directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    pub train: Table,
    pub test_1: Table,
    pub test_2: Table,
}

impl Datasets {
    /// Shapes in `(train, test_1, test_2)` order.
    pub fn shapes(&self) -> [(usize, usize); 3] {
        [self.train.shape(), self.test_1.shape(), self.test_2.shape()]
    }
}

impl From<Datasets> for (Table, Table, Table) {
    fn from(ds: Datasets) -> Self {
        (ds.train, ds.test_1, ds.test_2)
    }
}
