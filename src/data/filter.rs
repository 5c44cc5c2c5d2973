use std::collections::BTreeSet;

use super::model::{CellValue, NormalizedRecord, NormalizedTable, INDICATOR_COLUMN};

// ---------------------------------------------------------------------------
// Query filter: indicator name + year set
// ---------------------------------------------------------------------------

/// Return indices of records for `indicator` whose year is in `years`.
///
/// The indicator must match exactly (case-sensitive). Years compare as
/// integers. An unknown indicator, an empty year set, or a table without an
/// indicator column all give an empty result.
pub fn filtered_indices(
    table: &NormalizedTable,
    indicator: &str,
    years: &BTreeSet<i32>,
) -> Vec<usize> {
    if years.is_empty() {
        return Vec::new();
    }
    let Some(col) = table.descriptive_index(INDICATOR_COLUMN) else {
        return Vec::new();
    };

    table
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            matches!(rec.fields.get(col), Some(CellValue::Text(name)) if name == indicator)
                && years.contains(&rec.year)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Borrowing form of [`filtered_indices`], in table order.
pub fn filter<'a>(
    table: &'a NormalizedTable,
    indicator: &str,
    years: &BTreeSet<i32>,
) -> Vec<&'a NormalizedRecord> {
    let records = table.records();
    filtered_indices(table, indicator, years)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{load_reader, LoadOptions};

    fn example() -> NormalizedTable {
        load_reader(
            "Country Name,Indicator Name,1960,1961\nChina,GDP growth,,4.5\n".as_bytes(),
            &LoadOptions::default(),
        )
        .unwrap()
    }

    fn years(ys: &[i32]) -> BTreeSet<i32> {
        ys.iter().copied().collect()
    }

    #[test]
    fn example_queries() {
        let table = example();

        let hits = filter(&table, "GDP growth", &years(&[1961]));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].year, 1961);
        assert_eq!(hits[0].amount, CellValue::Number(4.5));

        let hits = filter(&table, "GDP growth", &years(&[1960]));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].amount, CellValue::Empty);

        assert!(filter(&table, "CPI", &years(&[1960, 1961])).is_empty());
    }

    #[test]
    fn unmatched_inputs_are_empty_not_errors() {
        let table = example();
        assert!(filter(&table, "GDP growth", &BTreeSet::new()).is_empty());
        assert!(filter(&table, "gdp growth", &years(&[1961])).is_empty());
        assert!(filter(&table, "GDP growth", &years(&[2001, 2002])).is_empty());
    }

    #[test]
    fn table_without_indicator_column_is_empty() {
        let table = load_reader(
            "Country Name,1960\nChina,1\n".as_bytes(),
            &LoadOptions::default(),
        )
        .unwrap();
        assert!(filtered_indices(&table, "China", &years(&[1960])).is_empty());
    }

    #[test]
    fn matches_brute_force_scan_in_table_order() {
        let text = "Country Name,Indicator Name,1999,2000,2001,2002\n\
                    China,GDP,1,2,3,4\n\
                    China,CPI,5,6,,8\n\
                    India,GDP,9,,11,12\n";
        let table = load_reader(text.as_bytes(), &LoadOptions::default()).unwrap();
        let wanted = years(&[2000, 2001]);

        let got = filtered_indices(&table, "GDP", &wanted);
        let expected: Vec<usize> = table
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| r.fields[1] == CellValue::text("GDP") && wanted.contains(&r.year))
            .map(|(i, _)| i)
            .collect();

        assert_eq!(got, expected);
        assert_eq!(got.len(), 4);
        assert!(got.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn repeated_queries_are_identical() {
        let table = example();
        let ys = years(&[1960, 1961]);
        assert_eq!(filter(&table, "GDP growth", &ys), filter(&table, "GDP growth", &ys));
    }
}
