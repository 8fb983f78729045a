use carpe_engine::Engine;
use chrono::NaiveDate;

#[test]
fn milestone_json_shape() {
    let today = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
    let reference = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
    let result = Engine::new(today).compute(reference).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["reference"], "1980-01-01");
    assert_eq!(json["today"], "2023-06-15");
    assert_eq!(json["elapsedDays"], 15871);
    assert_eq!(json["skipped"].as_array().unwrap().len(), 0);

    let square = &json["milestones"][4];
    assert_eq!(square["type"], "Square");
    assert_eq!(square["category"], "Mathematical");
    assert_eq!(square["ordinal"], 126);
    assert_eq!(square["daysToGo"], 5);
    assert_eq!(square["date"], "2023-06-20");
}

#[test]
fn skipped_json_shape() {
    let today = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
    let reference = NaiveDate::from_ymd_opt(-90_000, 1, 1).unwrap();
    let result = Engine::new(today).compute(reference).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    let skipped = json["skipped"].as_array().unwrap();
    assert!(
        skipped
            .iter()
            .any(|s| s["type"] == "Perfect" && s["reason"] == "Exhausted")
    );
}
