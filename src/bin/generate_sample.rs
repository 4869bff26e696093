//! Writes sample upload files for trying out the dashboard:
//! `samples/ecodetection.csv` (hourly sensor readings) and
//! `samples/lab_results.xlsx` (one sheet per lab parameter).

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

const SITES: [&str; 3] = ["LC01_Upstream", "LC02_Weir", "LC03_Outlet"];
const DAYS: u32 = 14;

/// `(sheet, unit, baseline per site, noise)` for the lab workbook.
const LAB_PARAMETERS: [(&str, &str, [f64; 3], f64); 3] = [
    ("Turbidity", "NTU", [4.0, 6.5, 9.0], 1.2),
    ("Nitrate", "mg/L", [0.35, 0.42, 0.58], 0.05),
    ("Phosphorus", "mg/L", [0.021, 0.030, 0.047], 0.004),
];

/// Deterministic splitmix64 stream; enough for reproducible sample noise.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Normal sample via Box-Muller.
    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let radius = (-2.0 * self.unit().max(1e-15).ln()).sqrt();
        let angle = std::f64::consts::TAU * self.unit();
        mean + std_dev * radius * angle.cos()
    }
}

fn round_to(v: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (v * f).round() / f
}

/// Hourly readings per site. A storm on day 5 lifts turbidity, and a few
/// readings drop out to exercise null handling.
fn write_sensor_csv(path: &Path, rng: &mut SampleRng) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["timestamp", "site", "turbidity_ntu", "nitrate_mg_l", "rainfall_mm", "alert"])?;

    let mut rows = 0;
    for day in 0..DAYS {
        for hour in 0..24 {
            let storm = day == 5 && (6..18).contains(&hour);
            let rainfall = if storm { rng.normal(2.5, 0.8).max(0.0) } else { rng.normal(0.05, 0.1).max(0.0) };

            for (s, site) in SITES.iter().enumerate() {
                let base = 3.0 + 2.5 * s as f64;
                let turbidity = base * if storm { 4.0 } else { 1.0 } + rng.normal(0.0, 0.6);
                let nitrate = 0.4 + 0.08 * s as f64 + rng.normal(0.0, 0.03);
                let dropout = rng.unit() < 0.01;

                writer.write_record([
                    format!("2024-08-{:02} {:02}:00", day + 1, hour),
                    site.to_string(),
                    if dropout { String::new() } else { format!("{:.2}", turbidity.max(0.0)) },
                    format!("{:.3}", nitrate.max(0.0)),
                    format!("{rainfall:.1}"),
                    (rainfall >= 2.0).to_string(),
                ])?;
                rows += 1;
            }
        }
    }
    writer.flush()?;
    Ok(rows)
}

/// Weekly grab samples, one sheet per parameter.
fn write_lab_workbook(path: &Path, rng: &mut SampleRng) -> Result<()> {
    let mut workbook = Workbook::new();

    for (sheet, unit, baselines, noise) in LAB_PARAMETERS {
        let ws = workbook.add_worksheet();
        ws.set_name(sheet)?;
        ws.write_string(0, 0, "sample_date")?;
        ws.write_string(0, 1, "site")?;
        ws.write_string(0, 2, format!("value_{}", unit.replace('/', "_per_")))?;
        ws.write_string(0, 3, "method")?;

        let mut row = 1;
        for week in 0..DAYS / 7 + 1 {
            for (s, site) in SITES.iter().enumerate() {
                let value = round_to(rng.normal(baselines[s], noise).max(0.0), 4);
                ws.write_string(row, 0, format!("2024-08-{:02}", week * 7 + 1))?;
                ws.write_string(row, 1, *site)?;
                ws.write_number(row, 2, value)?;
                ws.write_string(row, 3, "APHA 2017")?;
                row += 1;
            }
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = Path::new("samples");
    std::fs::create_dir_all(out_dir).context("creating samples directory")?;
    let mut rng = SampleRng(42);

    let csv_path = out_dir.join("ecodetection.csv");
    let rows = write_sensor_csv(&csv_path, &mut rng)?;
    println!("Wrote {rows} sensor readings to {}", csv_path.display());

    let xlsx_path = out_dir.join("lab_results.xlsx");
    write_lab_workbook(&xlsx_path, &mut rng)?;
    println!(
        "Wrote {} lab sheets to {}",
        LAB_PARAMETERS.len(),
        xlsx_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_gives_same_stream() {
        let mut a = SampleRng(42);
        let mut b = SampleRng(42);
        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_eq!(xs, ys);
        assert_ne!(xs[0], xs[1]);
    }

    #[test]
    fn unit_samples_stay_in_range() {
        let mut rng = SampleRng(7);
        assert!((0..10_000).map(|_| rng.unit()).all(|u| (0.0..1.0).contains(&u)));
    }

    #[test]
    fn sensor_csv_has_one_row_per_site_and_hour() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sensors.csv");
        let rows = write_sensor_csv(&path, &mut SampleRng(42)).unwrap();
        assert_eq!(rows, DAYS as usize * 24 * SITES.len());

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.records().count(), rows);
    }
}
