use anyhow::Result;
use coupon_etl::{CliConfig, CouponPipeline, EtlEngine, EtlError, LocalStorage, TomlConfig};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn write_gzip(dir: &Path, name: &str, lines: &[&str]) -> Result<()> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    for line in lines {
        writeln!(encoder, "{}", line)?;
    }
    std::fs::write(dir.join(name), encoder.finish()?)?;
    Ok(())
}

fn cli_config(work_dir: &Path) -> CliConfig {
    CliConfig {
        work_dir: work_dir.to_string_lossy().into_owned(),
        inputs: vec![
            "couponbase1.gz".to_string(),
            "couponbase2.gz".to_string(),
            "couponbase3.gz".to_string(),
        ],
        output: "valid_coupons.txt".to_string(),
        min_length: 8,
        max_length: 10,
        progress_interval: 2,
        verbose: false,
        monitor: false,
    }
}

fn seed_sources(dir: &Path) -> Result<()> {
    write_gzip(
        dir,
        "couponbase1.gz",
        &["ABCDEFGH", "AB", "HAPPYHRS", "  FIFTYOFF  ", "ONLYFIRST1", "ABCDEFGH"],
    )?;
    write_gzip(
        dir,
        "couponbase2.gz",
        &["ABCDEFGH", "AB", "HAPPYHRS", "BIRTHDAY", "TOOLONGCODE1"],
    )?;
    write_gzip(
        dir,
        "couponbase3.gz",
        &["AB", "HAPPYHRS", "BIRTHDAY", "FIFTYOFF\r", "ZZZZZZZZZZ"],
    )?;
    Ok(())
}

async fn run(config: CliConfig) -> coupon_etl::Result<String> {
    let storage = LocalStorage::new(config.work_dir.clone());
    let pipeline = CouponPipeline::new(storage, config);
    EtlEngine::new(pipeline).run().await
}

#[tokio::test]
async fn test_end_to_end_keeps_codes_in_two_or_more_sources() -> Result<()> {
    let temp_dir = TempDir::new()?;
    seed_sources(temp_dir.path())?;

    let output_path = run(cli_config(temp_dir.path())).await?;
    assert_eq!(output_path, "valid_coupons.txt");

    let content = std::fs::read_to_string(temp_dir.path().join("valid_coupons.txt"))?;
    assert_eq!(content, "ABCDEFGH\nBIRTHDAY\nFIFTYOFF\nHAPPYHRS\n");

    let lines: Vec<&str> = content.lines().collect();
    assert!(!lines.contains(&"AB"));
    assert!(!lines.contains(&"ZZZZZZZZZZ"));
    assert!(!lines.contains(&"ONLYFIRST1"));
    Ok(())
}

#[tokio::test]
async fn test_rerun_is_byte_identical_and_overwrites() -> Result<()> {
    let temp_dir = TempDir::new()?;
    seed_sources(temp_dir.path())?;
    let output = temp_dir.path().join("valid_coupons.txt");
    std::fs::write(&output, "STALE\nSTALE\nSTALE\nSTALE\nSTALE\nSTALE\n")?;

    run(cli_config(temp_dir.path())).await?;
    let first = std::fs::read(&output)?;

    run(cli_config(temp_dir.path())).await?;
    let second = std::fs::read(&output)?;

    assert_eq!(first, second);
    assert!(!String::from_utf8(first)?.contains("STALE"));
    Ok(())
}

#[tokio::test]
async fn test_output_is_sorted_without_duplicates() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let shared: Vec<String> = (0..200).rev().map(|i| format!("CODE{:05}", i)).collect();
    let shared: Vec<&str> = shared.iter().map(String::as_str).collect();

    write_gzip(temp_dir.path(), "couponbase1.gz", &shared)?;
    write_gzip(temp_dir.path(), "couponbase2.gz", &shared)?;
    write_gzip(temp_dir.path(), "couponbase3.gz", &shared[..50])?;

    run(cli_config(temp_dir.path())).await?;

    let content = std::fs::read_to_string(temp_dir.path().join("valid_coupons.txt"))?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 200);
    assert!(lines.windows(2).all(|w| w[0] < w[1]));
    Ok(())
}

#[tokio::test]
async fn test_empty_sources_produce_empty_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_gzip(temp_dir.path(), "couponbase1.gz", &[])?;
    write_gzip(temp_dir.path(), "couponbase2.gz", &[])?;
    std::fs::write(temp_dir.path().join("couponbase3.gz"), b"")?;

    run(cli_config(temp_dir.path())).await?;

    let content = std::fs::read(temp_dir.path().join("valid_coupons.txt"))?;
    assert!(content.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_missing_source_aborts_without_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    write_gzip(temp_dir.path(), "couponbase1.gz", &["ABCDEFGH"])?;
    write_gzip(temp_dir.path(), "couponbase3.gz", &["ABCDEFGH"])?;

    let err = run(cli_config(temp_dir.path())).await.unwrap_err();

    match err {
        EtlError::SourceError { path, .. } => assert!(path.ends_with("couponbase2.gz")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!temp_dir.path().join("valid_coupons.txt").exists());
    Ok(())
}

#[tokio::test]
async fn test_toml_config_drives_the_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path().to_string_lossy().replace('\\', "/");

    write_gzip(temp_dir.path(), "a.gz", &["SHORT6", "LONGERCODE"])?;
    write_gzip(temp_dir.path(), "b.gz", &["SHORT6"])?;
    write_gzip(temp_dir.path(), "c.gz", &["LONGERCODE"])?;

    let config = TomlConfig::from_toml_str(&format!(
        r#"
[pipeline]
name = "toml-run"

[sources]
directory = "{}"
files = ["a.gz", "b.gz", "c.gz"]

[codes]
min_length = 6

[output]
path = "matched.txt"
"#,
        dir
    ))?;

    let storage = LocalStorage::new(config.work_dir().to_string());
    let engine = EtlEngine::new(CouponPipeline::new(storage, config));
    engine.run().await?;

    let content = std::fs::read_to_string(temp_dir.path().join("matched.txt"))?;
    assert_eq!(content, "LONGERCODE\nSHORT6\n");
    Ok(())
}
