use std::collections::HashSet;
use std::fmt;

/// Name of the melted year column.
pub const YEAR_COLUMN: &str = "Years";
/// Name of the melted value column.
pub const AMOUNT_COLUMN: &str = "Amount";
/// Descriptive column the query filter matches indicators against.
pub const INDICATOR_COLUMN: &str = "Indicator Name";

/// Amount cells spelled like this are missing values.
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null", "..",
];

// ---------------------------------------------------------------------------
// CellValue – a single cell of the source table
// ---------------------------------------------------------------------------

/// A loosely-typed cell value, as found in a World Bank CSV export.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Descriptive cells are kept verbatim; only emptiness is recognised.
    pub fn text(s: &str) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s.to_string())
        }
    }

    /// Year cells: finite numbers when they parse, text otherwise.
    /// Blank cells, missing-value markers and non-finite numbers are `Empty`.
    pub fn amount(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed) {
            return CellValue::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => CellValue::Number(v),
            Ok(_) => CellValue::Empty,
            Err(_) => CellValue::Text(s.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Empty => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// RawRecord – one row of the wide source table
// ---------------------------------------------------------------------------

/// One row of the wide table: descriptive cells, then one cell per year column.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub descriptive: Vec<CellValue>,
    pub years: Vec<CellValue>,
}

// ---------------------------------------------------------------------------
// NormalizedRecord / NormalizedTable – the long (tidy) form
// ---------------------------------------------------------------------------

/// One (series, year) observation.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    /// Descriptive cells, aligned with [`NormalizedTable::descriptive_columns`].
    pub fields: Vec<CellValue>,
    pub year: i32,
    pub amount: CellValue,
}

/// Which part of a record a displayed column reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Descriptive(usize),
    Year,
    Amount,
}

/// A displayable column: header text and where its values live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnKind,
}

impl NormalizedRecord {
    /// Text shown for this record in the given column.
    pub fn display(&self, kind: ColumnKind) -> String {
        match kind {
            ColumnKind::Descriptive(i) => self
                .fields
                .get(i)
                .map(|v| v.to_string())
                .unwrap_or_default(),
            ColumnKind::Year => self.year.to_string(),
            ColumnKind::Amount => self.amount.to_string(),
        }
    }
}

/// The melted dataset. Built once by the loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable {
    descriptive_columns: Vec<String>,
    has_amount: bool,
    records: Vec<NormalizedRecord>,
}

impl NormalizedTable {
    pub fn new(descriptive_columns: Vec<String>, records: Vec<NormalizedRecord>) -> Self {
        NormalizedTable {
            descriptive_columns,
            has_amount: true,
            records,
        }
    }

    pub fn descriptive_columns(&self) -> &[String] {
        &self.descriptive_columns
    }

    pub fn records(&self) -> &[NormalizedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// False once an all-empty amount column has been dropped.
    pub fn has_amount_column(&self) -> bool {
        self.has_amount
    }

    /// Position of a descriptive column inside [`NormalizedRecord::fields`].
    pub fn descriptive_index(&self, name: &str) -> Option<usize> {
        self.descriptive_columns.iter().position(|c| c == name)
    }

    /// All columns in display order: descriptive, then year, then amount.
    pub fn columns(&self) -> Vec<ColumnSpec> {
        let mut cols: Vec<ColumnSpec> = self
            .descriptive_columns
            .iter()
            .enumerate()
            .map(|(i, name)| ColumnSpec {
                name: name.clone(),
                kind: ColumnKind::Descriptive(i),
            })
            .collect();
        cols.push(ColumnSpec {
            name: YEAR_COLUMN.to_string(),
            kind: ColumnKind::Year,
        });
        if self.has_amount {
            cols.push(ColumnSpec {
                name: AMOUNT_COLUMN.to_string(),
                kind: ColumnKind::Amount,
            });
        }
        cols
    }

    /// Distinct indicator names, in first-occurrence order.
    pub fn indicator_names(&self) -> Vec<String> {
        let Some(idx) = self.descriptive_index(INDICATOR_COLUMN) else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter_map(|r| r.fields.get(idx).and_then(CellValue::as_str))
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }

    /// Drop every column that is empty in all records.
    ///
    /// The year column always has a value. An empty table keeps its columns.
    pub fn drop_empty_columns(self) -> Self {
        if self.records.is_empty() {
            return self;
        }

        let keep: Vec<bool> = (0..self.descriptive_columns.len())
            .map(|i| {
                self.records
                    .iter()
                    .any(|r| r.fields.get(i).is_some_and(|v| !v.is_empty()))
            })
            .collect();
        let has_amount = self.has_amount && self.records.iter().any(|r| !r.amount.is_empty());

        let descriptive_columns = self
            .descriptive_columns
            .into_iter()
            .zip(&keep)
            .filter(|(_, k)| **k)
            .map(|(name, _)| name)
            .collect();

        let records = self
            .records
            .into_iter()
            .map(|r| NormalizedRecord {
                fields: r
                    .fields
                    .into_iter()
                    .zip(&keep)
                    .filter(|(_, k)| **k)
                    .map(|(v, _)| v)
                    .collect(),
                year: r.year,
                amount: r.amount,
            })
            .collect();

        NormalizedTable {
            descriptive_columns,
            has_amount,
            records,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[&str], year: i32, amount: &str) -> NormalizedRecord {
        NormalizedRecord {
            fields: fields.iter().map(|f| CellValue::text(f)).collect(),
            year,
            amount: CellValue::amount(amount),
        }
    }

    fn sample() -> NormalizedTable {
        NormalizedTable::new(
            vec![
                "Country Name".into(),
                INDICATOR_COLUMN.into(),
                String::new(),
            ],
            vec![
                record(&["China", "GDP growth", ""], 1960, ""),
                record(&["China", "CPI", ""], 1960, "3.1"),
                record(&["China", "GDP growth", ""], 1961, "4.5"),
            ],
        )
    }

    #[test]
    fn cell_parsing() {
        assert_eq!(CellValue::amount(""), CellValue::Empty);
        assert_eq!(CellValue::amount("4.5"), CellValue::Number(4.5));
        assert_eq!(CellValue::amount("est."), CellValue::Text("est.".into()));
        assert_eq!(CellValue::text("1960"), CellValue::Text("1960".into()));
        assert_eq!(CellValue::Number(4.5).to_string(), "4.5");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn missing_markers_and_non_finite_amounts_are_empty() {
        for s in ["NaN", "nan", "NA", "N/A", "n/a", "null", "..", " NaN ", "inf", "-inf"] {
            assert_eq!(CellValue::amount(s), CellValue::Empty, "{s:?}");
        }
        // descriptive cells keep the marker text
        assert_eq!(CellValue::text("NA"), CellValue::Text("NA".into()));
    }

    #[test]
    fn all_nan_amount_column_is_dropped() {
        let table = NormalizedTable::new(
            vec![INDICATOR_COLUMN.into()],
            vec![record(&["CPI"], 1960, "NaN"), record(&["CPI"], 1961, "nan")],
        )
        .drop_empty_columns();
        assert!(!table.has_amount_column());
    }

    #[test]
    fn indicator_names_keep_first_occurrence_order() {
        assert_eq!(sample().indicator_names(), vec!["GDP growth", "CPI"]);
    }

    #[test]
    fn drops_only_all_empty_columns() {
        let table = sample().drop_empty_columns();
        assert_eq!(table.descriptive_columns(), ["Country Name", INDICATOR_COLUMN]);
        assert!(table.has_amount_column());
        assert_eq!(table.len(), 3);
        // sparse cells survive
        assert_eq!(table.records()[0].amount, CellValue::Empty);
        assert_eq!(table.records()[0].fields.len(), 2);

        let names: Vec<String> = table.columns().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Country Name", INDICATOR_COLUMN, YEAR_COLUMN, AMOUNT_COLUMN]);
    }

    #[test]
    fn drop_empty_columns_is_idempotent() {
        let once = sample().drop_empty_columns();
        let twice = once.clone().drop_empty_columns();
        assert_eq!(once, twice);
    }

    #[test]
    fn all_empty_amount_column_is_dropped() {
        let table = NormalizedTable::new(
            vec![INDICATOR_COLUMN.into()],
            vec![record(&["CPI"], 1960, ""), record(&["CPI"], 1961, "")],
        )
        .drop_empty_columns();
        assert!(!table.has_amount_column());
        assert!(table.columns().iter().all(|c| c.kind != ColumnKind::Amount));
    }

    #[test]
    fn empty_table_keeps_columns() {
        let table = NormalizedTable::new(vec!["Country Name".into()], Vec::new());
        let dropped = table.clone().drop_empty_columns();
        assert_eq!(table, dropped);
    }

    #[test]
    fn display_by_column_kind() {
        let r = record(&["China", "GDP growth", ""], 1961, "4.5");
        assert_eq!(r.display(ColumnKind::Descriptive(0)), "China");
        assert_eq!(r.display(ColumnKind::Year), "1961");
        assert_eq!(r.display(ColumnKind::Amount), "4.5");
        assert_eq!(r.display(ColumnKind::Descriptive(9)), "");
    }
}
