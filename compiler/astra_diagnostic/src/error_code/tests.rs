use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E0001.as_str(), "E0001");
}

#[test]
fn test_codes_are_listed_in_numeric_order() {
    let names: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn test_every_code_has_description() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty(), "{code} has no description");
    }
}
