mod types;

pub use types::{AuditResult, FieldSpec, Record, DEFAULT_IDENTIFIER_COLUMN, DEFAULT_LINK_COLUMN};

/// Single pass over `records`, counting identifier/link presence.
///
/// Values are trimmed before the emptiness check and a field missing from a
/// record counts as empty, so malformed rows only bump `total`.
pub fn audit<I>(records: I, field_spec: &FieldSpec) -> AuditResult
where
    I: IntoIterator<Item = Record>,
{
    let mut result = AuditResult::default();

    for record in records {
        result.total += 1;

        let identifier = record.trimmed(&field_spec.identifier);
        let link = record.trimmed(&field_spec.link);

        match (identifier.is_empty(), link.is_empty()) {
            (false, false) => {
                result.with_identifier += 1;
                result.with_link += 1;
                result.with_both += 1;
            }
            (false, true) => {
                result.with_identifier += 1;
                result.missing_link_identifiers.push(identifier.to_string());
            }
            (true, false) => result.with_link += 1,
            (true, true) => {}
        }
    }

    result
}

/// Grand total over several results. Identifier lists are not carried over.
pub fn summarize<'a, I>(results: I) -> AuditResult
where
    I: IntoIterator<Item = &'a AuditResult>,
{
    results
        .into_iter()
        .fold(AuditResult::default(), |mut total, result| {
            total += result;
            total
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, link: &str) -> Record {
        [("SKU", id), ("Origin URL", link)].into_iter().collect()
    }

    fn counts(total: u64, with_identifier: u64, with_link: u64, with_both: u64) -> AuditResult {
        AuditResult {
            total,
            with_identifier,
            with_link,
            with_both,
            missing_link_identifiers: Vec::new(),
        }
    }

    fn assert_invariants(result: &AuditResult) {
        assert!(result.with_both <= result.with_identifier);
        assert!(result.with_both <= result.with_link);
        assert!(result.with_identifier <= result.total);
        assert!(result.with_link <= result.total);
        assert_eq!(
            result.missing_link_identifiers.len() as u64,
            result.with_identifier - result.with_both
        );
    }

    #[test]
    fn test_mixed_rows() {
        let rows = vec![row("A", "x"), row("B", ""), row("", "y"), row("", "")];
        let result = audit(rows, &FieldSpec::default());

        assert_eq!(result.total, 4);
        assert_eq!(result.with_identifier, 2);
        assert_eq!(result.with_link, 2);
        assert_eq!(result.with_both, 1);
        assert_eq!(result.missing_link_identifiers, vec!["B".to_string()]);
        assert_invariants(&result);
    }

    #[test]
    fn test_whitespace_only_values_are_empty() {
        let rows = vec![row("  C-10 ", "   "), row("\t", " https://example.com/p ")];
        let result = audit(rows, &FieldSpec::default());

        assert_eq!(result.with_identifier, 1);
        assert_eq!(result.with_link, 1);
        assert_eq!(result.with_both, 0);
        assert_eq!(result.missing_link_identifiers, vec!["C-10".to_string()]);
    }

    #[test]
    fn test_separator_controls_are_trimmed() {
        let rows = vec![row("A", "\x1f"), row("\x1c\x1d", "x"), row(" \x1eB\x1f ", "")];
        let result = audit(rows, &FieldSpec::default());

        assert_eq!(result.with_identifier, 2);
        assert_eq!(result.with_link, 1);
        assert_eq!(result.with_both, 0);
        assert_eq!(result.missing_link_identifiers, vec!["A", "B"]);
    }

    #[test]
    fn test_missing_fields_only_count_toward_total() {
        let rows = vec![Record::new(), [("Brand", "Bilstein")].into_iter().collect()];
        let result = audit(rows, &FieldSpec::default());

        assert_eq!(result, counts(2, 0, 0, 0));
    }

    #[test]
    fn test_custom_field_spec() {
        let spec = FieldSpec::new("Part Number", "Link");
        let rows: Vec<Record> = vec![
            [("Part Number", "P1"), ("Link", "l")].into_iter().collect(),
            [("Part Number", "P2"), ("Origin URL", "ignored")].into_iter().collect(),
        ];
        let result = audit(rows, &spec);

        assert_eq!(result.with_both, 1);
        assert_eq!(result.missing_link_identifiers, vec!["P2".to_string()]);
    }

    #[test]
    fn test_missing_order_is_preserved() {
        let rows: Vec<Record> = ["Z", "A", "M"].iter().map(|id| row(id, "")).collect();
        let result = audit(rows, &FieldSpec::default());

        assert_eq!(result.missing_link_identifiers, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_audit_is_idempotent() {
        let rows = vec![row("A", "x"), row("B", ""), row("", "y")];
        let spec = FieldSpec::default();

        assert_eq!(audit(rows.clone(), &spec), audit(rows, &spec));
    }

    #[test]
    fn test_empty_input() {
        let result = audit(Vec::new(), &FieldSpec::default());
        assert_eq!(result, AuditResult::default());
    }

    #[test]
    fn test_summarize_three_sources() {
        let results = [counts(10, 4, 3, 2), counts(5, 2, 1, 1), counts(3, 0, 0, 0)];
        let summary = summarize(&results);

        assert_eq!(summary.total, 18);
        assert_eq!(summary.with_both, 3);
        assert_eq!(summary.with_identifier, 6);
        assert_eq!(summary.with_link, 4);
        assert_eq!(summary.missing_link_count(), 3);
    }

    #[test]
    fn test_summarize_drops_identifier_lists() {
        let first = audit(vec![row("A", "")], &FieldSpec::default());
        let second = audit(vec![row("B", "")], &FieldSpec::default());
        let summary = summarize([&first, &second]);

        assert!(summary.missing_link_identifiers.is_empty());
        assert_eq!(summary.missing_link_count(), 2);
    }

    #[test]
    fn test_summarize_order_and_grouping_do_not_matter() {
        let a = counts(10, 4, 3, 2);
        let b = counts(5, 2, 1, 1);
        let c = counts(3, 1, 2, 0);

        let flat = summarize([&a, &b, &c]);
        let reversed = summarize([&c, &b, &a]);
        let left = summarize([&summarize([&a, &b]), &c]);
        let right = summarize([&a, &summarize([&b, &c])]);

        assert_eq!(flat, reversed);
        assert_eq!(flat, left);
        assert_eq!(flat, right);
    }

    #[test]
    fn test_summarize_nothing_is_zero() {
        let summary = summarize(std::iter::empty::<&AuditResult>());
        assert_eq!(summary, AuditResult::default());
    }
}
