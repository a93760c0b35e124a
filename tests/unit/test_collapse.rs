use lineage::core::config::{DuplicatePolicy, RenderConfig};
use lineage::core::lineage_graph::{collapse, collapse_strict};
use lineage::core::{LineageError, LineageGraphRenderer, LineageRecorder, Parent, RecordingSwitch};
use lineage::{LogEntry, ProcessingLog};

fn recorded(steps: &[(&str, &[&str], &str, &str)]) -> ProcessingLog {
    let mut rec = LineageRecorder::new(RecordingSwitch::enabled());
    for (variable, parents, operation, target) in steps {
        let parents: Vec<Parent<'_>> = parents.iter().map(|p| Parent::from(*p)).collect();
        rec.add_entry(variable, &parents, operation, Some(*target), None)
            .unwrap();
    }
    rec.into_log()
}

#[test]
fn test_select_then_rename_collapses_to_one_entry() {
    // The recorder elides this rename; build the log directly.
    let log: ProcessingLog = [
        LogEntry::new("x", vec![], "select", "x#1", None),
        LogEntry::new("x", vec!["x#1".into()], "rename", "x#2", None),
    ]
    .into_iter()
    .collect();

    let collapsed = collapse(&log);
    assert_eq!(collapsed.len(), 1);
    let entry = collapsed.last().unwrap();
    assert_eq!(entry.target, "x#2");
    assert_eq!(entry.operation, "select");
}

#[test]
fn test_collapse_keeps_order_and_never_grows() {
    let log = recorded(&[
        ("gdp", &["data/garden/wb/wdi"], "load", "gdp#1"),
        ("income", &["gdp#1"], "rename", "income#1"),
        ("pop", &["data/garden/un/wpp"], "load", "pop#1"),
        ("gdp_pc", &["income#1", "pop#1"], "/", "gdp_pc#1"),
        ("gdp_pc", &["gdp_pc#1"], "round", "gdp_pc#2"),
    ]);
    assert_eq!(log.len(), 5);

    let collapsed = collapse(&log);
    let targets: Vec<_> = collapsed.iter().map(|e| e.target.as_str()).collect();
    assert_eq!(targets, vec!["income#1", "pop#1", "gdp_pc#1", "gdp_pc#2"]);

    let operations: Vec<_> = collapsed.iter().map(|e| e.operation.as_str()).collect();
    assert_eq!(operations, vec!["load", "load", "/", "round"]);
    assert_eq!(log.len(), 5);
}

#[test]
fn test_collapse_twice_equals_once() {
    let log = recorded(&[
        ("a", &[], "select", "a#1"),
        ("b", &["a#1"], "rename", "b#1"),
        ("c", &["b#1"], "rename", "c#1"),
        ("d", &["c#1", "2"], "*", "d#1"),
        ("e", &["d#1"], "rename", "e#1"),
    ]);
    let once = collapse(&log);
    assert_eq!(collapse(&once), once);
    assert_eq!(once.len(), 2);
}

#[test]
fn test_duplicates_in_persisted_log_follow_policy() {
    let raw = r#"[
        {"variable": "x", "parents": [], "operation": "load", "target": "x#1"},
        {"variable": "x", "parents": ["x#1"], "operation": "fillna", "target": "x#2"},
        {"variable": "x", "parents": ["x#1"], "operation": "fillna", "target": "x#2"}
    ]"#;
    let log: ProcessingLog = serde_json::from_str(raw).unwrap();

    assert_eq!(collapse(&log).len(), 2);
    assert!(matches!(
        collapse_strict(&log),
        Err(LineageError::DuplicateInCollapse { ref operation, .. }) if operation == "fillna"
    ));

    let lenient = LineageGraphRenderer::new(RenderConfig::default());
    assert_eq!(lenient.collapse(&log).unwrap().len(), 2);

    let strict = LineageGraphRenderer::new(RenderConfig {
        on_duplicate: DuplicatePolicy::Fail,
        ..RenderConfig::default()
    });
    assert!(strict.collapse(&log).is_err());
    assert!(strict.collapse_strict(&log).is_err());
}

#[test]
fn test_blank_comment_does_not_hide_a_duplicate() {
    let raw = r#"[
        {"variable": "x", "parents": [], "operation": "load", "target": "x#1", "comment": ""},
        {"variable": "x", "parents": [], "operation": "load", "target": "x#1"}
    ]"#;
    let log: ProcessingLog = serde_json::from_str(raw).unwrap();

    assert_eq!(collapse(&log).len(), 1);
    assert!(collapse_strict(&log).is_err());
}

#[test]
fn test_empty_log_collapses_to_empty() {
    assert!(collapse(&ProcessingLog::new()).is_empty());
}
