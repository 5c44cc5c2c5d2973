use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::config::DashboardConfig;
use crate::data::filter::{filter, filtered_indices};
use crate::data::loader::LoadOptions;
use crate::data::model::{NormalizedRecord, NormalizedTable};
use crate::data::ranges::YearRanges;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded at start-up; replaced only by an explicit File → Open.
    pub table: NormalizedTable,

    /// Where `table` came from, shown in the top bar.
    pub source_path: Option<PathBuf>,

    pub load_options: LoadOptions,

    /// Distinct indicator names in first-occurrence order.
    pub indicators: Vec<String>,

    pub ranges: YearRanges,

    /// Whether the range dropdown is shown.
    pub range_selector: bool,

    pub selected_indicator: Option<String>,
    pub selected_range: String,

    /// Case-insensitive substring narrowing the indicator list.
    pub indicator_search: String,

    /// Indices of records matching the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Grid shows only the selection instead of the whole table.
    pub grid_selection_only: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(
        table: NormalizedTable,
        config: &DashboardConfig,
        source_path: Option<PathBuf>,
    ) -> Self {
        let mut state = AppState {
            table: NormalizedTable::new(Vec::new(), Vec::new()),
            source_path: None,
            load_options: config.load_options(),
            indicators: Vec::new(),
            ranges: config.year_ranges(),
            range_selector: config.range_selector,
            selected_indicator: None,
            selected_range: config.initial_range().to_string(),
            indicator_search: String::new(),
            visible_indices: Vec::new(),
            grid_selection_only: false,
            status_message: None,
        };
        state.set_table(table, source_path);
        state
    }

    /// Ingest a newly loaded table and select its first indicator.
    pub fn set_table(&mut self, table: NormalizedTable, source_path: Option<PathBuf>) {
        self.indicators = table.indicator_names();
        self.selected_indicator = self.indicators.first().cloned();
        self.table = table;
        self.source_path = source_path;
        self.status_message = None;
        self.refilter();
    }

    pub fn select_indicator(&mut self, name: &str) {
        log::debug!("Indicator selected: {name}");
        self.selected_indicator = Some(name.to_string());
        self.refilter();
    }

    /// Ignored when the range selector is off; the fixed range stays in force.
    pub fn select_range(&mut self, label: &str) {
        if !self.range_selector {
            log::warn!("Range selector disabled; keeping '{}'", self.selected_range);
            return;
        }
        log::debug!("Range selected: {label}");
        self.selected_range = label.to_string();
        self.refilter();
    }

    pub fn selected_years(&self) -> BTreeSet<i32> {
        self.ranges.resolve(&self.selected_range)
    }

    /// Recompute `visible_indices` after a selection change.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.selected_indicator {
            Some(indicator) => filtered_indices(&self.table, indicator, &self.selected_years()),
            None => Vec::new(),
        };
        log::debug!("{} records match the selection", self.visible_indices.len());
    }

    /// Records for the current indicator and range, in table order.
    pub fn selected_records(&self) -> Vec<&NormalizedRecord> {
        match &self.selected_indicator {
            Some(indicator) => filter(&self.table, indicator, &self.selected_years()),
            None => Vec::new(),
        }
    }

    /// `(year, amount)` for the selection; non-numeric amounts are skipped.
    pub fn chart_points(&self) -> Vec<(i32, f64)> {
        self.selected_records()
            .into_iter()
            .filter_map(|r| r.amount.as_f64().map(|v| (r.year, v)))
            .collect()
    }

    /// Indicators containing the search text, ignoring case.
    pub fn matching_indicators(&self) -> Vec<&str> {
        let needle = self.indicator_search.to_lowercase();
        self.indicators
            .iter()
            .map(String::as_str)
            .filter(|name| needle.is_empty() || name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Record indices the grid should show.
    pub fn grid_rows(&self) -> Vec<usize> {
        if self.grid_selection_only {
            self.visible_indices.clone()
        } else {
            (0..self.table.len()).collect()
        }
    }
}
