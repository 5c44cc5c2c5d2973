/// Data layer: core types, loading, reshaping and filtering.
///
/// Architecture:
/// ```text
///   wide .csv  (one column per year)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  classify header → RawRecord rows → melt → drop empty columns
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ NormalizedTable  │  one record per (row, year), immutable
///   └─────────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │ ◄─── │  ranges   │  label → year set
///   └──────────┘      └──────────┘
///        │
///        ▼
///   selected rows → chart + grid
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod ranges;
