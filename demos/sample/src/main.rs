//! sample — renders a synthetic wafer-sort session through every renderer.
//!
//! Builds a small record stream (two sites, three parts, a handful of
//! parametric tests across two sequences) and writes it in every encoding
//! to the directory given as the first argument (default `./output`):
//!
//! | File                | Renderer               |
//! |---------------------|------------------------|
//! | `records.txt`       | `TextWriter`           |
//! | `records.xml`       | `XmlWriter`            |
//! | `results.csv`       | `CsvWriter`            |
//! | `file_summary.csv`  | `FileSummaryCsvWriter` |
//! | `detailed.csv`      | `DetailedCsvWriter`    |
//! | `detailed_file.csv` | `DetailedCsvWriter`    |
//!
//! Set `RUST_LOG=debug` (or `trace`) to watch the renderers' state changes.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stdf_core::{FieldValue, Record, RecordType, RenderConfig};
use stdf_output::{
    render_stream, CsvWriter, DetailedCsvWriter, FileSummaryCsvWriter, SinkFanout, TextWriter,
    XmlWriter,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const START_T:  u32  = 1_700_000_000;
const FINISH_T: u32  = START_T + 3_600;
const USER_TXT: &str = "LOT7_FT_25C_WK12";
const HEAD:     u8   = 1;
static SITES:   [u8; 2] = [0, 1];

/// (test number, test text, low limit, high limit)
const TESTS: [(u32, &str, f32, f32); 3] = [
    (100, "VDD leakage", 0.0, 2.0),
    (110, "IDD quiescent", 0.5, 1.5),
    (200, "Vout \"high\"", 3.0, 3.6),
];

// ── Record stream ─────────────────────────────────────────────────────────────

fn ptr(test: (u32, &str, f32, f32), site: u8, result: f32) -> Result<Record> {
    let (num, text, lo, hi) = test;
    let failed = result < lo || result > hi;
    Ok(Record::empty(RecordType::Ptr)
        .with("TEST_NUM", num)?
        .with("HEAD_NUM", HEAD)?
        .with("SITE_NUM", site)?
        .with("TEST_FLG", if failed { 0x80u8 } else { 0 })?
        .with("PARM_FLG", 0u8)?
        .with("RESULT", result)?
        .with("TEST_TXT", text)?
        .with("LO_LIMIT", lo)?
        .with("HI_LIMIT", hi)?
        .with("UNITS", "V")?)
}

fn build_stream() -> Result<Vec<Record>> {
    let mut records = vec![
        Record::new(RecordType::Far, vec![2u8.into(), 4u8.into()]),
        Record::empty(RecordType::Mir)
            .with("SETUP_T", START_T - 60)?
            .with("START_T", START_T)?
            .with("STAT_NUM", 1u8)?
            .with("LOT_ID", "LOT7")?
            .with("PART_TYP", "DEMO")?
            .with("USER_TXT", USER_TXT)?,
        Record::empty(RecordType::Sdr)
            .with("HEAD_NUM", HEAD)?
            .with("SITE_GRP", 1u8)?
            .with("SITE_CNT", SITES.len() as u8)?
            .with("SITE_NUM", FieldValue::Array(SITES.iter().map(|&s| s.into()).collect()))?,
        Record::new(
            RecordType::Gdr,
            vec!["probe-card".into(), 42u16.into(), FieldValue::Double(0.125)],
        ),
    ];

    // Three parts across two sites: sites 0 and 1, then site 0 again.
    let touchdowns: [&[u8]; 2] = [&SITES, &SITES[..1]];
    let mut reading = 0.2f32;
    for (sequence, sites) in ["CONTINUITY", "PARAMETRIC"].iter().zip(touchdowns) {
        records.push(Record::empty(RecordType::Bps).with("SEQ_NAME", *sequence)?);
        for &site in sites {
            records.push(Record::empty(RecordType::Pir).with("HEAD_NUM", HEAD)?.with("SITE_NUM", site)?);
        }
        for test in TESTS {
            for &site in sites {
                records.push(ptr(test, site, reading)?);
                reading += 0.45;
            }
        }
        records.push(Record::empty(RecordType::Eps));
    }

    records.push(Record::empty(RecordType::Dtr).with("TEXT_DAT", "end of lot <ok>\0")?);
    records.push(
        Record::empty(RecordType::Mrr)
            .with("FINISH_T", FINISH_T)?
            .with("DISP_COD", " ")?,
    );
    Ok(records)
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn create(dir: &Path, name: &str) -> Result<BufWriter<File>> {
    let path = dir.join(name);
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "output".to_owned()));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let records = build_stream()?;
    let config = RenderConfig::default();

    let mut text = TextWriter::new(create(&out_dir, "records.txt")?, &config);
    let mut xml = XmlWriter::new(create(&out_dir, "records.xml")?, &config);
    let mut results = CsvWriter::new(create(&out_dir, "results.csv")?);
    let mut summary = FileSummaryCsvWriter::new(create(&out_dir, "file_summary.csv")?);
    let mut detailed = DetailedCsvWriter::new(
        create(&out_dir, "detailed.csv")?,
        create(&out_dir, "detailed_file.csv")?,
    );

    let t0 = Instant::now();
    let count = {
        let mut fanout = SinkFanout::new();
        fanout
            .push(&mut text)
            .push(&mut xml)
            .push(&mut results)
            .push(&mut summary)
            .push(&mut detailed);
        render_stream(&records, &mut fanout)?
    };

    info!(
        records = count,
        parts = detailed.state().parts.len(),
        temperature = detailed.state().file.temperature().unwrap_or("-"),
        elapsed_us = t0.elapsed().as_micros() as u64,
        "rendered"
    );
    println!("wrote {count} records in 5 encodings to {}", out_dir.display());
    Ok(())
}
