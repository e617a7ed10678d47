use super::*;

#[test]
fn affix_probability_request_serializes_camel_case() {
    let req = AffixProbabilityRequest { slot_count: 3, target_affix_ids: vec![1, 4, 6], show_combinations: Some(true) };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json, serde_json::json!({ "slotCount": 3, "targetAffixIds": [1, 4, 6], "showCombinations": true }));
}

#[test]
fn affix_probability_request_omits_unset_flag() {
    let req = AffixProbabilityRequest { slot_count: 1, target_affix_ids: vec![2], show_combinations: None };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("showCombinations").is_none());
}

#[test]
fn affix_probability_response_defaults_missing_combinations() {
    let raw = r#"{
        "probability": 0.5,
        "probabilityPercent": 50.0,
        "totalCombinations": 210,
        "validCombinations": 105,
        "slotCount": 4,
        "targetRange": [1, 2, 3, 4, 5]
    }"#;
    let resp: AffixProbabilityResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.total_combinations, 210);
    assert_eq!(resp.target_range, vec![1, 2, 3, 4, 5]);
    assert!(resp.combinations.is_empty());
}

#[test]
fn strengthen_response_parses_paths() {
    let raw = r#"{
        "probability": 0.25,
        "probabilityPercent": 25.0,
        "successfulOutcomes": 1,
        "totalOutcomes": 4,
        "paths": [{
            "success": true,
            "finalLevels": [2, 1, 1, 1],
            "steps": [{ "step": 1, "slot": 0, "newLevel": 2 }]
        }]
    }"#;
    let resp: StrengthenProbabilityResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.paths.len(), 1);
    assert_eq!(resp.paths[0].steps[0], StrengthenStep { step: 1, slot: 0, new_level: 2 });
}

#[test]
fn strengthen_request_serializes_levels() {
    let req = StrengthenProbabilityRequest {
        initial_levels: vec![1, 1, 2, 1],
        target_levels: vec![3, 1, 2, 1],
        order_independent: Some(false),
        show_paths: None,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["initialLevels"], serde_json::json!([1, 1, 2, 1]));
    assert_eq!(json["orderIndependent"], serde_json::json!(false));
    assert!(json.get("showPaths").is_none());
}

#[test]
fn tools_list_parses_optional_fields() {
    let raw = r#"{
        "tools": [{ "id": "affix-probability", "name": "A", "category": "mod" }],
        "categories": ["mod", "weapon"]
    }"#;
    let resp: ToolsListResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.tools[0].description, None);
    assert_eq!(resp.tools[0].href(), "/tools/affix-probability");
    assert_eq!(resp.categories, vec!["mod", "weapon"]);
}

#[test]
fn health_response_status_check_is_case_insensitive() {
    let resp: HealthResponse = serde_json::from_str(r#"{"status":"OK","timestamp":"2024-01-01T00:00:00Z"}"#).unwrap();
    assert!(resp.is_ok());
    assert_eq!(resp.version, None);
}

#[test]
fn error_response_tolerates_empty_object() {
    let resp: ErrorResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp, ErrorResponse::default());
}
