//! CSV export of a dispatched plan.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::units::GenerationUnit;

/// Column header for plan export.
const HEADER: &str = "name,kind,p,pmin,pmax,cost_per_mwh";

/// Exports a dispatched unit arena to a CSV file at the given path.
///
/// One row per unit in request order. `pmin`/`pmax` are the effective
/// ratings the planner worked with, not the raw ones.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(units: &[GenerationUnit], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(units, buf)
}

/// Writes a dispatched unit arena as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(units: &[GenerationUnit], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for unit in units {
        wtr.write_record(&[
            unit.name.clone(),
            unit.kind.to_string(),
            unit.assigned_load.normalize().to_string(),
            unit.min_output.normalize().to_string(),
            unit.max_output.normalize().to_string(),
            unit.unit_cost.round_dp(2).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rust_decimal::dec;

    use super::*;
    use crate::units::{FuelModel, UnitKind};

    fn units() -> Vec<GenerationUnit> {
        vec![
            GenerationUnit {
                name: "gasfiredbig1".into(),
                kind: UnitKind::FuelBurning(FuelModel::EfficiencyDriven),
                min_output: dec!(100),
                max_output: dec!(460),
                unit_cost: dec!(31.283018867924528301886792453),
                assigned_load: dec!(368.4),
            },
            GenerationUnit {
                name: "windpark1".into(),
                kind: UnitKind::Renewable,
                min_output: Decimal::ZERO,
                max_output: dec!(90.0),
                unit_cost: Decimal::ZERO,
                assigned_load: dec!(90.0),
            },
        ]
    }

    fn render(units: &[GenerationUnit]) -> String {
        let mut buf = Vec::new();
        write_csv(units, &mut buf).expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("csv output is utf-8")
    }

    #[test]
    fn header_then_one_row_per_unit() {
        let output = render(&units());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "gasfiredbig1,gasfired,368.4,100,460,31.28");
        assert_eq!(lines[2], "windpark1,windturbine,90,0,90,0");
    }

    #[test]
    fn empty_plan_writes_header_only() {
        assert_eq!(render(&[]).trim_end(), HEADER);
    }

    #[test]
    fn deterministic_output() {
        assert_eq!(render(&units()), render(&units()));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("plan.csv");
        export_csv(&units(), &path).expect("export succeeds");

        let mut rdr = csv::Reader::from_path(&path).expect("csv readable");
        let records: Vec<csv::StringRecord> = rdr.records().filter_map(Result::ok).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[0][0], "gasfiredbig1");
        let p: Decimal = records[0][2].parse().expect("p parses");
        assert_eq!(p, dec!(368.4));
    }
}
