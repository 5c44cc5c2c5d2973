//! Writes `sample_indicators.csv`: a synthetic World Bank style export with
//! sparse year columns and the trailing unnamed column those exports carry.

use anyhow::{Context, Result};

const FIRST_YEAR: i32 = 1960;
const LAST_YEAR: i32 = 2023;

/// (indicator name, indicator code, first year with data, base value, yearly drift, noise)
const INDICATORS: &[(&str, &str, i32, f64, f64, f64)] = &[
    ("GDP growth (annual %)", "NY.GDP.MKTP.KD.ZG", 1961, 8.0, -0.03, 3.0),
    ("Inflation, consumer prices (annual %)", "FP.CPI.TOTL.ZG", 1987, 6.0, -0.1, 2.5),
    ("Population growth (annual %)", "SP.POP.GROW", 1960, 2.2, -0.035, 0.1),
    ("Exports of goods and services (% of GDP)", "NE.EXP.GNFS.ZS", 1970, 4.0, 0.45, 1.5),
    ("Urban population (% of total population)", "SP.URB.TOTL.IN.ZS", 1960, 16.0, 0.7, 0.2),
    (
        "Research and development expenditure (% of GDP)",
        "GB.XPD.RSDV.GD.ZS",
        1996,
        0.56,
        0.07,
        0.03,
    ),
];

/// Minimal deterministic PRNG (splitmix64).
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[-1, 1)`.
    fn symmetric(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }
}

fn main() -> Result<()> {
    let mut rng = SampleRng(42);
    let output_path = "sample_indicators.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating sample CSV")?;

    let mut header: Vec<String> = [
        "Country Name",
        "Country Code",
        "Indicator Name",
        "Indicator Code",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    header.extend((FIRST_YEAR..=LAST_YEAR).map(|y| y.to_string()));
    header.push(String::new());
    writer.write_record(&header).context("writing header")?;

    for &(name, code, since, base, drift, noise) in INDICATORS {
        let mut row: Vec<String> = vec!["China".into(), "CHN".into(), name.into(), code.into()];
        for year in FIRST_YEAR..=LAST_YEAR {
            // recent years are not published yet for some series
            if year < since || (year == LAST_YEAR && code.starts_with("GB.")) {
                row.push(String::new());
                continue;
            }
            let t = (year - FIRST_YEAR) as f64;
            let value = base + drift * t + noise * rng.symmetric();
            row.push(format!("{value:.3}"));
        }
        row.push(String::new());
        writer.write_record(&row).context("writing row")?;
    }
    writer.flush().context("flushing sample CSV")?;

    println!(
        "Wrote {} indicators ({FIRST_YEAR}-{LAST_YEAR}) to {output_path}",
        INDICATORS.len()
    );
    Ok(())
}
