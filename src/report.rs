use crate::audit::AuditResult;
use std::io::{self, Write};

pub const DEFAULT_LIST_LIMIT: usize = 10;

fn write_counts<W: Write>(writer: &mut W, result: &AuditResult) -> io::Result<()> {
    writeln!(writer, "Total rows: {}", result.total)?;
    writeln!(writer, "Rows with SKUs: {}", result.with_identifier)?;
    writeln!(writer, "Rows with URLs: {}", result.with_link)?;
    writeln!(writer, "Rows with both SKU and URL: {}", result.with_both)?;
    writeln!(writer, "Rows with SKU but missing URL: {}", result.missing_link_count())
}

/// Per-source block: heading, the five counters, then the missing-URL listing.
///
/// The listing enumerates identifiers while there are fewer than
/// `list_limit` of them and otherwise reports only the count. A limit of 0
/// always enumerates.
pub fn write_source_report<W: Write>(
    writer: &mut W,
    source_name: &str,
    result: &AuditResult,
    list_limit: usize,
) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "Analyzing: {}", source_name)?;
    write_counts(writer, result)?;

    let missing = result.missing_link_count();
    if missing == 0 {
        return Ok(());
    }

    writeln!(writer)?;
    if list_limit == 0 || (missing as usize) < list_limit {
        writeln!(writer, "SKUs missing URLs:")?;
        for (i, sku) in result.missing_link_identifiers.iter().enumerate() {
            writeln!(writer, "{}. {}", i + 1, sku)?;
        }
    } else {
        writeln!(writer, "Found {} SKUs missing URLs (too many to list)", missing)?;
    }

    Ok(())
}

pub fn write_summary<W: Write>(writer: &mut W, summary: &AuditResult) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "=== SUMMARY ===")?;
    write_counts(writer, summary)
}
