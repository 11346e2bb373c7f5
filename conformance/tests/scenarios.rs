//! End-to-end runs over whole address map documents.

#![allow(clippy::unwrap_used)]

use addrmap_conformance::tests::fixtures::{
    CONTROLLER_MAP, EMPTY_MAP, POSE_COLLISION, QUEUE_MAP, RESERVED_CONFLICTS,
};
use addrmap_conformance::{
    run_all, AddressMap, AddressSpace, Error, Options, Severity, ValidationReport,
};
use serde_json::json;

fn run(document: &str, options: &Options) -> Result<ValidationReport, Error> {
    let map: AddressMap = document.parse()?;
    run_all(&map, options)
}

fn with_queue(max_queue: u32) -> Options {
    Options {
        max_queue,
        ..Options::default()
    }
}

#[test]
fn empty_map_passes_with_zero_counts() {
    let report = run(EMPTY_MAP, &Options::default()).unwrap();
    assert!(report.findings.is_empty());
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.summaries.len(), 4);
    for summary in &report.summaries {
        assert_eq!(summary.used, 0);
        assert_eq!(summary.reserved, 0);
        assert_eq!(summary.min, None);
        assert_eq!(summary.max, None);
    }

    // A bare object is the same as declaring every space empty.
    let report = run("{}", &Options::default()).unwrap();
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn controller_map_is_clean_at_any_queue_depth() {
    for depth in [1, 4, 32] {
        let report = run(CONTROLLER_MAP, &with_queue(depth)).unwrap();
        assert!(report.all_passed(), "depth {}: {:#?}", depth, report.findings);
    }
}

#[test]
fn pose_boundary_collision() {
    let report = run(POSE_COLLISION, &Options::default()).unwrap();
    assert_eq!(report.conflict_count(), 1);
    let conflict = &report.findings[0];
    assert_eq!(conflict.check, "used/used");
    assert_eq!(conflict.space, Some(AddressSpace::Holding));
    assert_eq!(
        conflict.details,
        ["holding: (0, 11, 'TARGET_POSE_BASE (12 words)')  <-->  (11, 11, 'SEQ_ID')"]
    );
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn queue_conflict_needs_expansion() {
    // Unexpanded: only address 100 is checked, 105 is free.
    let report = run(QUEUE_MAP, &Options::default()).unwrap();
    assert!(report.all_passed());
    assert_eq!(report.warning_count(), 1);

    let report = run(QUEUE_MAP, &with_queue(3)).unwrap();
    assert_eq!(report.conflict_count(), 1);
    assert_eq!(
        report.findings[0].details,
        ["holding: (100, 111, 'TARGET_QUEUE_BASE[0..2] (stride 4)')  <-->  (105, 105, 'SPEED_PCT')"]
    );
    assert_eq!(report.warning_count(), 0);
    assert_eq!(report.exit_code(), 2);

    // One slot ends at 103.
    assert!(run(QUEUE_MAP, &with_queue(1)).unwrap().all_passed());
}

#[test]
fn queue_base_itself_collides_when_unexpanded() {
    let document = json!({
        "holding": { "TARGET_QUEUE_BASE": 50, "SEQ_ID": 50 }
    });
    let map = AddressMap::from_value(document).unwrap();
    let report = run_all(&map, &Options::default()).unwrap();
    assert_eq!(report.conflict_count(), 1);
    assert_eq!(report.warning_count(), 1);
}

#[test]
fn reserved_conflicts_are_grouped() {
    let report = run(RESERVED_CONFLICTS, &Options::default()).unwrap();
    let conflicts: Vec<_> = report.with_severity(Severity::Conflict).collect();
    let checks: Vec<_> = conflicts
        .iter()
        .map(|f| (f.check.as_str(), f.space))
        .collect();
    assert_eq!(
        checks,
        [
            ("reserved/reserved", Some(AddressSpace::Holding)),
            ("used/reserved", Some(AddressSpace::Coils)),
            ("used/reserved", Some(AddressSpace::Holding)),
        ]
    );
    // Used inside reserved, and reserved inside used.
    assert_eq!(
        conflicts[1].message,
        "coils used range (5, 5, 'PUBLISH_REQ') overlaps reserved 0-9 (vendor)"
    );
    assert_eq!(
        conflicts[2].message,
        "holding used range (40, 51, 'TARGET_POSE_BASE (12 words)') overlaps reserved 44-45 (legacy)"
    );
}

#[test]
fn spaces_are_independent() {
    let document = json!({
        "coils": { "A": 7 },
        "discrete_inputs": { "A": 7 },
        "holding": { "A": 7 },
        "input_registers": { "A": 7 }
    });
    let map = AddressMap::from_value(document).unwrap();
    assert!(run_all(&map, &Options::default()).unwrap().all_passed());
}

#[test]
fn type_errors_abort_without_a_report() {
    let err = run(
        r#"{"holding": {"TARGET_POSE_BASE": 0, "SEQ_ID": 11, "SPEED_PCT": "fast"}}"#,
        &Options::default(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "holding.SPEED_PCT must be an integer address (got string)"
    );

    let err = run(
        r#"{"reserved": {"holding": [{"start": 5, "end": 4}]}}"#,
        &Options::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::ReservedInverted { .. }));
}

#[test]
fn malformed_documents() {
    assert!(matches!(
        run("[1, 2, 3]", &Options::default()),
        Err(Error::WrongShape { .. })
    ));
    assert!(matches!(
        run(r#"{"coils": 5}"#, &Options::default()),
        Err(Error::WrongShape { .. })
    ));
    assert!(matches!(
        run("{", &Options::default()),
        Err(Error::Json(_))
    ));
}

#[test]
fn missing_file() {
    let err = addrmap_conformance::validate_file(
        std::path::Path::new("/nonexistent/AddressMap.json"),
        &Options::default(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().starts_with("Failed to load JSON"));
}

#[test]
fn gaps_across_the_whole_address_type() {
    let document = json!({
        "coils": { "A": i64::MIN, "B": i64::MAX }
    });
    let map = AddressMap::from_value(document).unwrap();
    let options = Options {
        report_gaps: true,
        ..Options::default()
    };
    let report = run_all(&map, &options).unwrap();
    assert!(report.all_passed());
    let gaps: Vec<_> = report.with_severity(Severity::Info).collect();
    assert_eq!(gaps.len(), 1);
    assert!(gaps[0].message.contains("18446744073709551614 unused address(es)"));
    let coils = &report.summaries[AddressSpace::Coils.index()];
    assert_eq!((coils.min, coils.max), (Some(i64::MIN), Some(i64::MAX)));
}

#[test]
fn report_serializes_to_json() {
    let report = run(POSE_COLLISION, &Options::default()).unwrap();
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["findings"][0]["severity"], "conflict");
    assert_eq!(value["findings"][0]["space"], "holding");
    assert_eq!(value["summaries"][2]["used"], 3);
    assert_eq!(value["summaries"][2]["max"], 12);
}
