use crate::Section;

use std::str::FromStr;

#[test]
fn test_section_round_trips_through_contract_key() {
    for section in Section::ALL {
        assert_eq!(Section::from_str(section.as_str()).unwrap(), section);
    }
}

#[test]
fn test_section_display_matches_contract_key() {
    assert_eq!(Section::CodeBlocks.to_string(), "codeBlocks");
    assert_eq!(Section::TechnicalDetails.to_string(), "technicalDetails");
}

#[test]
fn test_unknown_section_is_error() {
    let err = Section::from_str("gallery").unwrap_err();
    assert!(err.to_string().contains("gallery"));
}
