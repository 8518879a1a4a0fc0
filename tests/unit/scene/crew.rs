use super::*;
use serde_json::json;

fn eight_json() -> serde_json::Value {
    json!({
        "id": 42,
        "name": "M1",
        "clubName": "Auckland RC",
        "raceName": "Head of the Harbour",
        "coachName": "Jo",
        "boatType": {"id": 1, "value": "8+", "seats": 8, "name": "Eight"},
        "crewNames": ["Cox", "A", "B", "C", "D", "E", "F", "G", "H"]
    })
}

#[test]
fn parses_camel_case_crew() {
    let crew = Crew::from_value(eight_json()).unwrap();
    assert_eq!(crew.id, "42");
    assert_eq!(crew.boat_type.class(), Some(BoatClass::Eight));
    assert_eq!(crew.crew_names.len(), 9);
    assert_eq!(crew.name_at(0), Some("Cox"));
    assert_eq!(crew.coach(), Some("Jo"));
    assert_eq!(crew.subtitle(), "M1 | 8+");
}

#[test]
fn accepts_legacy_snake_case_fields() {
    let crew = Crew::from_value(json!({
        "id": "abc",
        "name": "W2x",
        "club_name": "Club",
        "race_name": "Regatta",
        "boat_type": {"code": "2x", "seats": 2, "name": "Double"},
        "crew_names": ["Ann", null]
    }))
    .unwrap();
    assert_eq!(crew.id, "abc");
    assert_eq!(crew.club_name, "Club");
    assert_eq!(crew.boat_type.value, "2x");
    assert_eq!(crew.name_at(0), Some("Ann"));
    assert_eq!(crew.name_at(1), None);
    assert_eq!(crew.coach(), None);
}

#[test]
fn blank_and_out_of_range_names_are_missing() {
    let crew = Crew::new(
        "Four",
        "Club",
        "Race",
        BoatType::from_class(BoatClass::CoxlessFour),
        ["A", "   ", ""],
    )
    .with_coach("  ");
    assert_eq!(crew.name_at(0), Some("A"));
    assert_eq!(crew.name_at(1), None);
    assert_eq!(crew.name_at(2), None);
    assert_eq!(crew.name_at(7), None);
    assert_eq!(crew.coach(), None);
}

#[test]
fn missing_crew_names_is_a_validation_error() {
    let mut v = eight_json();
    v.as_object_mut().unwrap().remove("crewNames");
    let err = Crew::from_value(v).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("crewNames"));
}

#[test]
fn non_array_crew_names_is_a_validation_error() {
    let mut v = eight_json();
    v["crewNames"] = json!("Alice, Bob");
    let err = Crew::from_value(v).unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("must be an array"));
}

#[test]
fn wrong_typed_entry_is_rejected() {
    let mut v = eight_json();
    v["crewNames"] = json!(["A", 7]);
    let err = Crew::from_value(v).unwrap_err();
    assert!(err.to_string().contains("crewNames[1]"));
}

#[test]
fn missing_required_field_is_rejected() {
    let mut v = eight_json();
    v.as_object_mut().unwrap().remove("raceName");
    assert!(Crew::from_value(v).unwrap_err().is_validation());
    assert!(Crew::from_json_str("{not json").unwrap_err().is_validation());
}

#[test]
fn unknown_boat_code_is_kept_verbatim() {
    let mut v = eight_json();
    v["boatType"] = json!({"value": "3x"});
    let crew = Crew::from_value(v).unwrap();
    assert_eq!(crew.boat_type.value, "3x");
    assert_eq!(crew.boat_type.class(), None);
}

#[test]
fn boat_class_table() {
    for class in BoatClass::ALL {
        assert_eq!(BoatClass::from_code(class.code()), Some(class));
    }
    assert_eq!(BoatClass::Eight.roster_len(), 9);
    assert_eq!(BoatClass::CoxedFour.roster_len(), 5);
    assert_eq!(BoatClass::Quad.roster_len(), 4);
    assert_eq!(BoatClass::Pair.roster_len(), 2);
    assert_eq!(BoatClass::Single.roster_len(), 1);
    assert!(!BoatClass::CoxlessFour.has_cox());
}

#[test]
fn serializes_with_camel_case_names() {
    let crew = Crew::from_value(eight_json()).unwrap();
    let v = serde_json::to_value(&crew).unwrap();
    assert_eq!(v["clubName"], "Auckland RC");
    assert_eq!(v["crewNames"][0], "Cox");
    let back = Crew::from_value(v).unwrap();
    assert_eq!(back, crew);
}
