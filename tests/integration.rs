//! End-to-end tests for the timeclock engine.
//!
//! Each scenario drives the full pipeline the way the reporting layer does:
//! raw device cell → punch extraction → normalization → event mapping →
//! deduction computation.

use chrono::NaiveDate;
use timeclock_engine::calculation::{compute_day, compute_worked_time, map_events};
use timeclock_engine::config::{RoundingMode, RulesLoader, WorkRules};
use timeclock_engine::models::{
    DeductionResult, NoLaborInterval, PunchRecord, TimeOfDay, extract_punches,
};

fn t(s: &str) -> TimeOfDay {
    TimeOfDay::parse(s).unwrap()
}

fn record(raw: &str) -> PunchRecord {
    let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
    PunchRecord::from_raw("00123", date, raw)
}

// ==========================================================================
// DAY-001: standard day, short meal break, half hour of overtime
// ==========================================================================
#[test]
fn test_day_001_standard_day_with_capped_meal() {
    let day = compute_day(&record("09:00, 13:00, 13:30, 18:00"), &WorkRules::default(), &[]);

    assert_eq!(day.events.entry, Some(t("09:00")));
    assert_eq!(day.events.meal_out, Some(t("13:00")));
    assert_eq!(day.events.meal_in, Some(t("13:30")));
    assert_eq!(day.events.exit, Some(t("18:00")));
    assert!(!day.reordered);

    assert_eq!(day.result.worked_min, 510); // 08:30
    assert_eq!(day.result.overtime_min, 30); // 00:30
    assert_eq!(day.result.meal_deduction_min, 30);
}

// ==========================================================================
// DAY-002: 70-minute meal exceeds the ceiling and is charged in full
// ==========================================================================
#[test]
fn test_day_002_long_meal_fully_charged() {
    let day = compute_day(&record("09:00, 12:00, 13:10, 17:00"), &WorkRules::default(), &[]);

    assert_eq!(day.result.meal_deduction_min, 70);
    assert_eq!(day.result.worked_min, 470);
    assert_eq!(day.result.overtime_min, 0);
}

// ==========================================================================
// DAY-003: overnight shift, entry and exit only
// ==========================================================================
#[test]
fn test_day_003_overnight_entry_exit() {
    let day = compute_day(&record("22:00, 02:00"), &WorkRules::default(), &[]);

    assert_eq!(day.events.entry, Some(t("22:00")));
    assert_eq!(day.events.exit, Some(t("02:00")));
    assert_eq!(day.result.worked_min, 240);
    assert_eq!(day.result.overtime_min, 0);
}

// ==========================================================================
// DAY-004: overnight shift with a no-labor exception inside the meal window
// ==========================================================================
#[test]
fn test_day_004_overnight_exception_inside_meal_window() {
    let exceptions = vec![NoLaborInterval::new(t("23:50"), t("00:10"), "incidente")];
    let day = compute_day(
        &record("22:00, 23:45, 00:25, 06:00"),
        &WorkRules::default(),
        &exceptions,
    );

    // 40-minute meal is capped at 30 (window 23:45-00:15); the exception
    // falls entirely inside that window, so nothing extra is charged.
    assert_eq!(day.result.meal_deduction_min, 30);
    assert_eq!(day.result.no_labor_deduction_min, 0);
    assert_eq!(day.result.meal_dinner_overlap_min, 20);
    assert_eq!(day.result.worked_min, 450);
    assert!(day.result.has_diagnostics());
}

// ==========================================================================
// DAY-005: single punch leaves the record uncomputed
// ==========================================================================
#[test]
fn test_day_005_single_punch_is_zero() {
    let day = compute_day(&record("09:00"), &WorkRules::default(), &[]);

    assert_eq!(day.events.entry, Some(t("09:00")));
    assert!(day.events.exit.is_none());
    assert_eq!(day.result, DeductionResult::zero());
}

// ==========================================================================
// DAY-006: pasted-out-of-order night shift is reordered before mapping
// ==========================================================================
#[test]
fn test_day_006_out_of_order_night_shift() {
    let day = compute_day(&record("22:00 06:00 02:00 02:20"), &WorkRules::default(), &[]);

    assert!(day.reordered);
    assert_eq!(day.events.entry, Some(t("22:00")));
    assert_eq!(day.events.meal_out, Some(t("02:00")));
    assert_eq!(day.events.meal_in, Some(t("02:20")));
    assert_eq!(day.events.exit, Some(t("06:00")));
    assert_eq!(day.result.worked_min, 460);
}

// ==========================================================================
// DAY-007: dirty cell with duplicates, seconds and surrounding text
// ==========================================================================
#[test]
fn test_day_007_dirty_cell_survives_extraction() {
    let day = compute_day(
        &record("E 09:00:12 / 13:00, 13:00, 13:30hrs salida 18:00"),
        &WorkRules::default(),
        &[],
    );

    assert_eq!(day.events.entry, Some(t("09:00")));
    assert_eq!(day.events.meal_out, Some(t("13:00")));
    assert_eq!(day.result.worked_min, 510);
}

// ==========================================================================
// DAY-008: six punches, dinner charged in full, meal capped
// ==========================================================================
#[test]
fn test_day_008_meal_and_dinner_day() {
    let day = compute_day(
        &record("09:00 13:00 13:45 20:00 20:40 23:30"),
        &WorkRules::default(),
        &[],
    );

    assert_eq!(day.result.meal_deduction_min, 30); // 45 min capped
    assert_eq!(day.result.dinner_deduction_min, 40); // full
    assert_eq!(day.result.worked_min, 14 * 60 + 30 - 70);
}

// ==========================================================================
// DAY-009: overlapping exceptions are merged; out-of-shift input flagged
// ==========================================================================
#[test]
fn test_day_009_messy_exception_set() {
    let exceptions = vec![
        NoLaborInterval::new(t("15:00"), t("15:40"), "trámite"),
        NoLaborInterval::new(t("15:30"), t("16:00"), "continuación"),
        NoLaborInterval::new(t("19:00"), t("19:30"), "capturado fuera de turno"),
        NoLaborInterval {
            start: None,
            end: Some(t("11:00")),
            note: "sin inicio".into(),
        },
    ];
    let day = compute_day(&record("09:00 18:00"), &WorkRules::default(), &exceptions);

    assert_eq!(day.result.no_labor_deduction_min, 60); // merged 15:00-16:00
    assert_eq!(day.result.merged_overlap_min, 10);
    assert_eq!(day.result.ignored_outside_shift_min, 30);
    assert_eq!(day.result.worked_min, 540 - 60);
}

// ==========================================================================
// DAY-010: open-ended exception runs to the exit
// ==========================================================================
#[test]
fn test_day_010_open_ended_exception() {
    let exceptions = vec![NoLaborInterval::until_exit(t("16:00"), "se retiró")];
    let day = compute_day(&record("09:00 18:00"), &WorkRules::default(), &exceptions);

    assert_eq!(day.result.no_labor_deduction_min, 120);
    assert_eq!(day.result.worked_min, 420);
}

// ==========================================================================
// Rules file integration: thresholds loaded from disk drive the computation
// ==========================================================================
#[test]
fn test_rules_loaded_from_file_change_the_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    std::fs::write(
        &path,
        r#"{
            "overtime_threshold_min": 540,
            "rounding_step_min": 15,
            "rounding_mode": "up"
        }"#,
    )
    .unwrap();
    let loader = RulesLoader::load(&path).unwrap();

    let day = compute_day(&record("09:00 13:00 13:30 19:05"), loader.rules(), &[]);
    // 575 worked against a 9-hour threshold: 35 raw overtime, ceiled to 45.
    assert_eq!(day.result.worked_min, 575);
    assert_eq!(day.result.overtime_min, 45);
}

#[test]
fn test_default_rules_leave_overtime_unrounded() {
    let rules = WorkRules::default();
    assert_eq!(rules.rounding_step_min, 1);
    assert_eq!(rules.rounding_mode, RoundingMode::None);

    let day = compute_day(&record("09:00 13:00 13:30 18:07"), &rules, &[]);
    assert_eq!(day.result.overtime_min, 37);
}

// ==========================================================================
// Batch independence: records compute the same alone or together
// ==========================================================================
#[test]
fn test_batch_of_records_is_order_independent() {
    let rules = WorkRules::default();
    let cells = ["09:00 13:00 13:30 18:00", "22:00 02:00", "09:00", "", "09:00 12:00 13:10 17:00"];

    let forward: Vec<DeductionResult> = cells
        .iter()
        .map(|raw| compute_day(&record(raw), &rules, &[]).result)
        .collect();
    let backward: Vec<DeductionResult> = cells
        .iter()
        .rev()
        .map(|raw| compute_day(&record(raw), &rules, &[]).result)
        .collect();

    let backward_reversed: Vec<DeductionResult> = backward.into_iter().rev().collect();
    assert_eq!(forward, backward_reversed);
}

// ==========================================================================
// Output is serializable for the row-builder and rollup consumers
// ==========================================================================
#[test]
fn test_day_output_serializes_for_consumers() {
    let events = map_events(&extract_punches("09:00 13:00 13:30 18:00"));
    let result = compute_worked_time(&events, &WorkRules::default(), &[]);

    let row = serde_json::json!({
        "events": events,
        "result": result,
    });
    assert_eq!(row["events"]["entry"], "09:00");
    assert_eq!(row["result"]["worked_min"], 510);
    assert_eq!(row["result"]["overtime_min"], 30);
}
