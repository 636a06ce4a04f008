//! `spdx-gen` — turn the SPDX license and exception lists into Ada enumerations.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]) and apply CLI overrides.
//! 3. For licenses, then exceptions:
//!    fetch the document ([`registry::fetch`]),
//!    drop deprecated ids and build the Ada unit ([`pipeline::generate`]).
//! 4. Once both units exist, write them atomically or compare them with disk ([`output`]).
//! 5. Render the summary ([`report`]).
//! 6. Exit `0`, or `1` when `--check` finds a stale or missing file.
//!
//! Any fetch or generation error aborts the run before a single file is written.

mod ada;
mod cli;
mod config;
mod error;
mod models;
mod output;
mod pipeline;
mod registry;
mod report;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use ada::ident::IdentValidator;
use cli::Cli;
use config::{load_config, Config};
use models::RegistryKind;
use output::FileStatus;
use pipeline::{generate, GenOptions, GeneratedUnit};
use registry::fetch::{build_client, fetch_document, Source};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let work_dir = std::env::current_dir().context("cannot determine working directory")?;
    let mut config = load_config(&work_dir, cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);

    let results = run(&config, &cli).await?;

    report::terminal::render(&results, cli.verbose, cli.quiet);

    // Exit code: 1 if --check found a difference
    let out_of_date = results
        .iter()
        .any(|(_, s)| matches!(s, FileStatus::Stale | FileStatus::Missing));

    if out_of_date {
        std::process::exit(1);
    }

    Ok(())
}

/// Fetch and generate every registry, then write (or check) all files.
///
/// Nothing touches the output directory until both units have been generated.
async fn run(config: &Config, cli: &Cli) -> Result<Vec<(GeneratedUnit, FileStatus)>> {
    let client = build_client(Duration::from_secs(config.source.timeout_secs))?;
    let validator = IdentValidator::new()?;

    let mut units = Vec::new();

    for kind in RegistryKind::ALL {
        let source = source_for(config, cli, kind);

        let doc = {
            let spinner = spinner(&source, cli.quiet)?;
            let doc = fetch_document(&client, &source).await;
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }
            doc?
        };

        let options = GenOptions {
            package_prefix: config.output.package_prefix.clone(),
            output_path: config.output_path(kind),
            with_unknown: config.source.with_unknown,
        };
        let unit = generate(kind, &doc, &options, &validator)
            .with_context(|| format!("cannot generate {} from {}", kind, source))?;

        if !cli.quiet {
            eprintln!(
                "  {} {} {} ({} ids, {} deprecated dropped) → {}",
                "→".cyan(),
                kind,
                unit.registry.version,
                unit.names.len(),
                unit.registry.dropped,
                unit.path.display()
            );
        }

        units.push(unit);
    }

    let statuses = if cli.check {
        units
            .iter()
            .map(|u| output::check(&u.path, &u.contents))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        let files: Vec<(&Path, &str)> = units
            .iter()
            .map(|u| (u.path.as_path(), u.contents.as_str()))
            .collect();
        output::write_all_atomic(&files)?
    };

    Ok(units.into_iter().zip(statuses).collect())
}

/// CLI flags take precedence over the config file.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(dir) = &cli.output_dir {
        config.output.dir = dir.clone();
    }
    if let Some(url) = &cli.licenses_url {
        config.source.licenses_url = url.clone();
    }
    if let Some(url) = &cli.exceptions_url {
        config.source.exceptions_url = url.clone();
    }
    if let Some(secs) = cli.timeout {
        config.source.timeout_secs = secs;
    }
    if cli.with_unknown {
        config.source.with_unknown = true;
    }
}

/// A local file given on the command line wins over the configured URL.
fn source_for(config: &Config, cli: &Cli, kind: RegistryKind) -> Source {
    let file = match kind {
        RegistryKind::Licenses => &cli.licenses_file,
        RegistryKind::Exceptions => &cli.exceptions_file,
    };
    match file {
        Some(path) => Source::File(path.clone()),
        None => Source::Url(config.url(kind).to_string()),
    }
}

fn spinner(source: &Source, quiet: bool) -> Result<Option<ProgressBar>> {
    if quiet {
        return Ok(None);
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.set_message(format!("fetching {}", source));
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(Some(pb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const LICENSES: &str = r#"{
        "licenseListVersion": "3.24",
        "licenses": [
            {"licenseId": "0BSD", "name": "BSD Zero Clause License", "isDeprecatedLicenseId": false},
            {"licenseId": "GPL-2.0", "name": "GNU GPL v2.0 only", "isDeprecatedLicenseId": true},
            {"licenseId": "MIT", "name": "MIT License", "isDeprecatedLicenseId": false}
        ]
    }"#;

    const EXCEPTIONS: &str = r#"{
        "licenseListVersion": "3.24",
        "exceptions": [
            {"licenseExceptionId": "LLVM-exception", "name": "LLVM Exception", "isDeprecatedLicenseId": false}
        ]
    }"#;

    /// Offline invocation reading `lic.json` / `exc.json` from `dir` and writing to `dir/out`.
    fn offline(dir: &Path, extra: &[&str]) -> (Config, Cli) {
        let out = dir.join("out");
        let lic = dir.join("lic.json");
        let exc = dir.join("exc.json");
        let mut args = vec![
            "spdx-gen".to_string(),
            "-q".to_string(),
            "--output-dir".to_string(),
            out.display().to_string(),
            "--licenses-file".to_string(),
            lic.display().to_string(),
            "--exceptions-file".to_string(),
            exc.display().to_string(),
        ];
        args.extend(extra.iter().map(|a| a.to_string()));

        let cli = Cli::try_parse_from(args).unwrap();
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        (config, cli)
    }

    fn fixture(licenses: &str, exceptions: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("lic.json"), licenses).unwrap();
        std::fs::write(dir.path().join("exc.json"), exceptions).unwrap();
        std::fs::create_dir(dir.path().join("out")).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_run_writes_both_files() {
        let dir = fixture(LICENSES, EXCEPTIONS);
        let (config, cli) = offline(dir.path(), &[]);

        let results = run(&config, &cli).await.unwrap();
        let statuses: Vec<FileStatus> = results.iter().map(|(_, s)| *s).collect();
        assert_eq!(statuses, vec![FileStatus::Written, FileStatus::Written]);
        assert_eq!(results[0].0.names, vec!["Id_0BSD", "MIT"]);

        let licenses = std::fs::read_to_string(dir.path().join("out/spdx-licenses.ads")).unwrap();
        assert!(licenses.starts_with("package SPDX.Licenses is\n"));
        assert!(!licenses.contains("GPL_2_0"));
        let exceptions = std::fs::read_to_string(dir.path().join("out/spdx-exceptions.ads")).unwrap();
        assert!(exceptions.contains("               LLVM_exception);\n"));
    }

    #[tokio::test]
    async fn test_check_mode_never_writes() {
        let dir = fixture(LICENSES, EXCEPTIONS);

        let (config, cli) = offline(dir.path(), &["--check"]);
        let results = run(&config, &cli).await.unwrap();
        assert!(results.iter().all(|(_, s)| *s == FileStatus::Missing));
        assert_eq!(std::fs::read_dir(dir.path().join("out")).unwrap().count(), 0);

        let (config, cli) = offline(dir.path(), &[]);
        run(&config, &cli).await.unwrap();

        let (config, cli) = offline(dir.path(), &["--check"]);
        let results = run(&config, &cli).await.unwrap();
        assert!(results.iter().all(|(_, s)| *s == FileStatus::UpToDate));

        let licenses = dir.path().join("out/spdx-licenses.ads");
        std::fs::write(&licenses, "-- edited by hand\n").unwrap();
        let results = run(&config, &cli).await.unwrap();
        assert_eq!(results[0].1, FileStatus::Stale);
        assert_eq!(results[1].1, FileStatus::UpToDate);
        assert_eq!(std::fs::read_to_string(&licenses).unwrap(), "-- edited by hand\n");
    }

    #[tokio::test]
    async fn test_exceptions_failure_writes_nothing() {
        let colliding = r#"{
            "licenseListVersion": "3.24",
            "exceptions": [
                {"licenseExceptionId": "A.1", "name": "A dot", "isDeprecatedLicenseId": false},
                {"licenseExceptionId": "A-1", "name": "A dash", "isDeprecatedLicenseId": false}
            ]
        }"#;
        let dir = fixture(LICENSES, colliding);
        let (config, cli) = offline(dir.path(), &[]);

        let err = run(&config, &cli).await.unwrap_err();
        assert!(err.to_string().contains("cannot generate exceptions"));
        assert!(!dir.path().join("out/spdx-licenses.ads").exists());
        assert_eq!(std::fs::read_dir(dir.path().join("out")).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_missing_exceptions_file_writes_nothing() {
        let dir = fixture(LICENSES, EXCEPTIONS);
        std::fs::remove_file(dir.path().join("exc.json")).unwrap();
        let (config, cli) = offline(dir.path(), &[]);

        assert!(run(&config, &cli).await.is_err());
        assert!(!dir.path().join("out/spdx-licenses.ads").exists());
    }

    #[test]
    fn test_overrides_and_sources() {
        let cli = Cli::try_parse_from([
            "spdx-gen",
            "--output-dir",
            "gen",
            "--exceptions-url",
            "http://localhost/exceptions.json",
            "--licenses-file",
            "licenses.json",
            "--timeout",
            "3",
        ])
        .unwrap();

        let mut config = Config::default();
        apply_overrides(&mut config, &cli);

        assert_eq!(config.source.timeout_secs, 3);
        assert_eq!(
            config.output_path(RegistryKind::Licenses),
            PathBuf::from("gen").join("spdx-licenses.ads")
        );
        assert_eq!(
            source_for(&config, &cli, RegistryKind::Licenses),
            Source::File(PathBuf::from("licenses.json"))
        );
        assert_eq!(
            source_for(&config, &cli, RegistryKind::Exceptions),
            Source::Url("http://localhost/exceptions.json".to_string())
        );
    }
}
