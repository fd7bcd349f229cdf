//! End-to-end batch conversion tests.

use std::fs;
use std::path::Path;

use cmap_cli::run_batch;
use cmap_ingest::Delimiter;

const SAMPLE: &str = "\
// ****** Record 1 ****** //
Run              : SRR5819281
BioSample        : SAMN07140696
lat_lon          : 37.8305 S 41.1248 W
collection_date  : 2011-03-12T01:56:00
depth            : 9m

// ****** Record 2 ****** //
Run              : SRR5819282
spots            : 1107
";

fn write_sample(dir: &Path) -> std::path::PathBuf {
    let input = dir.join("amt_data.txt");
    fs::write(&input, SAMPLE).expect("write input");
    input
}

#[test]
fn converts_a_file_end_to_end() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sample(dir.path());
    let outdir = dir.path().join("export");

    let result = run_batch(&[&input], &Delimiter::WhitespaceRun, &outdir);
    assert!(result.any_succeeded());
    assert_eq!(result.files.len(), 1);
    assert_eq!(result.files[0].records, 2);

    let data = fs::read_to_string(outdir.join("amt.csv")).expect("read data sheet");
    let mut lines = data.lines();
    insta::assert_snapshot!(
        lines.next().unwrap(),
        @"time,lat,lon,depth,run,bio_sample,lat_lon,collection_date,spots"
    );
    insta::assert_snapshot!(
        lines.next().unwrap(),
        @"2011-03-12T01:56:00,-37.8305,-41.1248,9,SRR5819281,SAMN07140696,37.8305 S 41.1248 W,2011-03-12T01:56:00,"
    );
    insta::assert_snapshot!(lines.next().unwrap(), @",,,,SRR5819282,,,,1107");
    assert_eq!(lines.next(), None);

    // Vars sheet covers the non-canonical columns.
    let vars = fs::read_to_string(outdir.join("amt_vars.csv")).expect("read vars sheet");
    assert_eq!(vars.lines().count(), 6);
}

#[test]
fn companion_metadata_feeds_the_meta_sheet() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sample(dir.path());
    fs::write(
        dir.path().join("amt_meta.txt"),
        "dataset_source\tNCBI SRA\nspots\treads\n",
    )
    .expect("write companion");
    let outdir = dir.path().join("export");

    let result = run_batch(&[&input], &Delimiter::WhitespaceRun, &outdir);
    assert!(result.any_succeeded());

    let meta = fs::read_to_string(outdir.join("amt_meta.csv")).expect("read meta sheet");
    assert_eq!(meta.lines().nth(1).unwrap(), ",NCBI SRA,,,,");

    let vars = fs::read_to_string(outdir.join("amt_vars.csv")).expect("read vars sheet");
    assert!(vars.lines().any(|line| line.starts_with("spots,Spots,,reads")));
}

#[test]
fn missing_file_fails_without_stopping_the_batch() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sample(dir.path());
    let missing = dir.path().join("absent.txt");
    let outdir = dir.path().join("export");

    let result = run_batch(&[&missing, &input], &Delimiter::WhitespaceRun, &outdir);
    assert!(result.any_succeeded());
    assert_eq!(result.files.len(), 2);
    assert!(!result.files[0].succeeded());
    assert!(result.files[1].succeeded());
}

#[test]
fn all_failures_mean_no_success() {
    let dir = tempfile::tempdir().expect("tempdir");
    let outdir = dir.path().join("export");
    let result = run_batch(
        &[dir.path().join("nope.txt")],
        &Delimiter::WhitespaceRun,
        &outdir,
    );
    assert!(!result.any_succeeded());
}

#[test]
fn file_without_markers_yields_header_only_sheet() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("plain.txt");
    fs::write(&input, "key    value\nother    thing\n").expect("write input");
    let outdir = dir.path().join("export");

    let result = run_batch(&[&input], &Delimiter::WhitespaceRun, &outdir);
    assert!(result.any_succeeded());
    assert_eq!(result.files[0].records, 0);

    let data = fs::read_to_string(outdir.join("plain.csv")).expect("read data sheet");
    assert_eq!(data.trim_end(), "time,lat,lon,depth");
}

#[test]
fn literal_delimiter_override() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("colon.txt");
    fs::write(
        &input,
        "// ****** Record 1 ****** //\ndepth:9m\ncollection_date:2011-03-12\n",
    )
    .expect("write input");
    let outdir = dir.path().join("export");

    let delimiter = Delimiter::Literal(":".to_string());
    let result = run_batch(&[&input], &delimiter, &outdir);
    assert!(result.any_succeeded());

    let data = fs::read_to_string(outdir.join("colon.csv")).expect("read data sheet");
    let row = data.lines().nth(1).unwrap();
    assert!(row.starts_with("2011-03-12,,,9,"));
}
