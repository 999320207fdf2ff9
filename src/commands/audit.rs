use crate::audit::{summarize, AuditResult, FieldSpec};
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::export::AuditExport;
use crate::report::{write_source_report, write_summary};
use crate::source::{audit_source, CsvSource};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Clone, Debug, Default)]
pub struct AuditOptions {
    pub files: Vec<PathBuf>,
    pub sku_column: Option<String>,
    pub url_column: Option<String>,
    pub list_limit: Option<usize>,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
}

impl AuditOptions {
    /// Applies command-line overrides on top of `config`.
    fn resolve(&self, config: Config) -> (FieldSpec, usize) {
        let field_spec = FieldSpec::new(
            self.sku_column.clone().unwrap_or(config.identifier_column),
            self.url_column.clone().unwrap_or(config.link_column),
        );
        let list_limit = self.list_limit.unwrap_or(config.list_limit);
        (field_spec, list_limit)
    }
}

pub fn run(options: AuditOptions) -> Result<()> {
    let config = match &options.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load(),
    };
    let (field_spec, list_limit) = options.resolve(config);
    debug!(
        identifier = %field_spec.identifier,
        link = %field_spec.link,
        list_limit,
        "resolved audit settings"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let sources = audit_files(&options.files, &field_spec, |name, result| {
        if options.format == OutputFormat::Text {
            write_source_report(&mut out, name, result, list_limit)?;
        }
        Ok(())
    })?;

    let summary = summarize(sources.iter().map(|(_, result)| result));
    match options.format {
        OutputFormat::Text => write_summary(&mut out, &summary)?,
        OutputFormat::Json => {
            let export = AuditExport::new(&field_spec, &sources, &summary);
            writeln!(out, "{}", export.to_json().context("Failed to encode JSON report")?)?;
        }
    }
    out.flush()?;

    Ok(())
}

/// Audits `files` in order, handing each result to `on_source` as soon as it
/// is ready. The first unavailable source aborts the run.
pub fn audit_files<F>(
    files: &[PathBuf],
    field_spec: &FieldSpec,
    mut on_source: F,
) -> Result<Vec<(String, AuditResult)>>
where
    F: FnMut(&str, &AuditResult) -> io::Result<()>,
{
    let mut sources = Vec::with_capacity(files.len());

    for path in files {
        let progress = ProgressBarBuilder::new(format!("Reading {}", path.display()))
            .with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .with_tick(Duration::from_millis(120))
            .build()?;
        let outcome = audit_file(path, field_spec);
        progress.finish_and_clear();

        let (name, result) = outcome?;
        info!(
            source = %name,
            total = result.total,
            with_both = result.with_both,
            missing_link = result.missing_link_count(),
            "audited source"
        );
        on_source(&name, &result).context("Failed to write report")?;
        sources.push((name, result));
    }

    Ok(sources)
}

fn audit_file(path: &Path, field_spec: &FieldSpec) -> Result<(String, AuditResult)> {
    let mut source = CsvSource::open(path)?;
    for column in source.missing_columns(field_spec) {
        warn!(
            source = %source.name(),
            column,
            "column not in header, treating it as empty on every row"
        );
    }

    let result = audit_source(&mut source, field_spec)?;
    Ok((source.name().to_string(), result))
}
