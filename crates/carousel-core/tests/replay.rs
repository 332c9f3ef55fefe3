use std::path::PathBuf;

use carousel_core::{AppConfig, GesturePhase, GestureTrace, TraceEvent};

use tempfile::TempDir;

/// Write `content` into a fresh temp dir; the dir lives as long as the guard
fn write_trace(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn replay_pull_past_start_springs_back() {
    let (_dir, path) = write_trace(
        "pull.toml",
        r#"
        [slider]
        visible_width = 630.0
        cell_width = 200.0
        cell_margin = 10.0
        visible_cell_count = 3
        overflow_cells_limit = 2
        transition_duration_ms = 200
        transition_easing = "linear"

        [items]
        images = ["1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg", "6.jpg"]

        [[event]]
        kind = "down"
        at_ms = 0
        x = 100.0

        [[event]]
        kind = "move"
        at_ms = 0
        x = 100.0

        [[event]]
        kind = "move"
        at_ms = 16
        x = 250.0

        [[event]]
        kind = "move"
        at_ms = 32
        x = 2000.0

        [[event]]
        kind = "up"
        at_ms = 48

        [[event]]
        kind = "move"
        at_ms = 148
        x = 100.0
        "#,
    );

    let trace = GestureTrace::load(&path).unwrap();
    let report = carousel_core::trace::replay(&trace, &AppConfig::default()).unwrap();

    // 6 cells of 210 in 630 visible
    assert_eq!(report.metrics.end_position, -620.0);

    for step in &report.steps {
        assert!(step.offset <= 100.0, "pulled to {}", step.offset);
    }
    let pulled = report.steps[3].offset;
    assert!(pulled > 0.0 && pulled <= 100.0);

    let release = report.steps[4].settlement.unwrap();
    assert_eq!(release.offset, 0.0);
    assert_eq!(report.steps[4].phase, GesturePhase::Idle);

    // Halfway through the linear spring-back a new gesture picks up the
    // visible offset
    let regrab = &report.steps[5];
    assert_eq!(regrab.event, TraceEvent::Move { at_ms: 148, x: 100.0 });
    assert!((regrab.offset - pulled / 2.0).abs() < 1e-9);
}

#[test]
fn replay_json_trace_with_delegated_release() {
    let (_dir, path) = write_trace(
        "delegated.json",
        r#"{
            "start_offset": -210.0,
            "items": { "cell_count": 8 },
            "event": [
                { "kind": "move", "at_ms": 0, "x": 400.0 },
                { "kind": "move", "at_ms": 20, "x": 350.0 },
                { "kind": "up", "at_ms": 30, "delegated": true }
            ]
        }"#,
    );

    let trace = GestureTrace::load(&path).unwrap();
    let report = carousel_core::trace::replay(&trace, &AppConfig::default()).unwrap();

    let last = report.steps.last().unwrap();
    assert!(last.settlement.is_none());
    assert_eq!(last.phase, GesturePhase::Idle);
    assert_eq!(last.offset, -260.0);
    assert_eq!(report.final_offset, -260.0);
}

#[test]
fn load_rejects_malformed_trace() {
    let (_dir, path) = write_trace("broken.toml", "[[event]]\nkind = \"hover\"\nat_ms = 0\n");
    assert!(GestureTrace::load(&path).is_err());
}

#[test]
fn demo_flick_trace_settles_inside_track() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demos/flick.toml");
    let trace = GestureTrace::load(&path).unwrap();
    let report = carousel_core::trace::replay(&trace, &AppConfig::default()).unwrap();

    let settlements: Vec<_> = report.steps.iter().filter_map(|s| s.settlement).collect();
    assert_eq!(settlements.len(), 2);

    // The flick carries inertia; the long drag right is pulled back to 0
    assert!(settlements[0].inertia.unwrap() > 0.0);
    assert!(settlements[0].offset < settlements[0].release_offset);
    assert_eq!(settlements[1].offset, 0.0);
    assert!(settlements[1].corrected);
    assert_eq!(report.final_offset, 0.0);
}

#[test]
fn trace_dir_is_removed_with_its_guard() {
    let (dir, path) = write_trace("short.toml", "[[event]]\nkind = \"move\"\nat_ms = 0\nx = 1.0\n");
    let root = dir.path().to_path_buf();
    assert!(GestureTrace::load(&path).is_ok());

    drop(dir);
    assert!(!path.exists());
    assert!(!root.exists());
}
