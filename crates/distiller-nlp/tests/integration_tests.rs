//! Integration tests for distiller-nlp
//!
//! These tests run the full tagging pipeline over text shaped like real
//! single audit report pages.

use distiller_domain::Label;
use distiller_nlp::{EntityTagger, NlpError, PatternTable};

const REPORT_PAGE: &str = "CITY OF EXAMPLE\n\
SCHEDULE OF FINDINGS AND QUESTIONED COSTS\n\
For the Year Ended June 30, 2019\n\n\
Finding 2019-001 Capital Assets\n\n\
Criteria or Specific Requirement: Assets must be reconciled to the ledger.\n\n\
Condition: The City did not reconcile its\ncapital assets. Cause of the condition: staff turnover.\n\n\
Recommendation: We recommend monthly reconciliations.\n\n\
Views of Responsible Officials and Planned Corrective Action: The City agrees.";

#[test]
fn test_report_page_entities() {
    let tagger = EntityTagger::with_defaults().unwrap();
    let page = tagger.tag(REPORT_PAGE);

    let labels: Vec<Label> = page.entities().iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec![
            Label::Header,
            Label::AuditNumber,
            Label::Criteria,
            Label::Condition,
            Label::Cause,
            Label::Recommendation,
            Label::CorrectiveAction,
        ]
    );

    let results = page.results();
    assert_eq!(results[0].0, "FINDINGS AND QUESTIONED COSTS");
    assert_eq!(results[2].0, "Criteria or Specific Requirement");
    assert_eq!(results[4].0, "Cause of the condition");
    assert_eq!(results[6].0, "Planned Corrective Action");
}

#[test]
fn test_every_entity_has_a_sentence() {
    let tagger = EntityTagger::with_defaults().unwrap();
    let page = tagger.tag(REPORT_PAGE);

    for (idx, entity) in page.entities().iter().enumerate() {
        let sentence = page.enclosing_sentence(idx).unwrap();
        assert!(sentence.start <= entity.start && entity.end <= sentence.end);
        assert_eq!(&REPORT_PAGE[entity.start..entity.end], entity.text);
    }
}

#[test]
fn test_sentences_partition_page() {
    let tagger = EntityTagger::with_defaults().unwrap();
    let page = tagger.tag(REPORT_PAGE);

    let joined: String = page.sentences().iter().map(|s| page.sentence_text(s)).collect();
    assert_eq!(joined, REPORT_PAGE);
}

#[test]
fn test_audit_numbers_distinct() {
    let tagger = EntityTagger::with_defaults().unwrap();
    let page = tagger.tag("2019-001 and 2019-002, see also 2019-001. Not 12019-0011.");
    assert_eq!(page.audit_numbers(), vec!["2019-001", "2019-002"]);
}

#[test]
fn test_custom_table_from_toml() {
    let toml = r#"
        audit_number_pattern = "[0-9]{4}-[0-9]{2}"

        [[phrases]]
        label = "HEADER"
        phrase = "audit findings"

        [[phrases]]
        label = "corrective_action"
        phrase = "remediation"
    "#;

    let table = PatternTable::from_toml(toml).unwrap();
    let tagger = EntityTagger::new(table).unwrap();
    let page = tagger.tag("Audit Findings 2021-07. Remediation: none.");

    let results = page.results();
    assert_eq!(
        results,
        vec![
            ("Audit Findings".to_string(), Label::Header),
            ("2021-07".to_string(), Label::AuditNumber),
            ("Remediation".to_string(), Label::CorrectiveAction),
        ]
    );
}

#[test]
fn test_bad_regex_rejected() {
    let table = PatternTable {
        audit_number_pattern: "([0-9".to_string(),
        ..PatternTable::empty()
    };
    assert!(matches!(EntityTagger::new(table), Err(NlpError::Regex(_))));
}

#[test]
fn test_pattern_table_toml_roundtrip() {
    let table = PatternTable::default();
    let restored = PatternTable::from_toml(&table.to_toml().unwrap()).unwrap();
    assert_eq!(restored, table);
}
