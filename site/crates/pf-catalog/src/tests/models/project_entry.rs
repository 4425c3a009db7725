use crate::{Metric, Overview, ProjectEntry, Section};

fn minimal_entry() -> ProjectEntry {
    ProjectEntry::new(
        "Homelab".to_string(),
        "Self-hosted services on a single box".to_string(),
        vec!["Docker".to_string(), "Traefik".to_string()],
        "https://github.com/someone/homelab".to_string(),
    )
}

#[test]
fn test_project_entry_new_has_no_optional_sections() {
    let entry = minimal_entry();

    assert_eq!(entry.title, "Homelab");
    assert_eq!(entry.badges, vec!["Docker", "Traefik"]);
    assert!(!entry.has_demo());
    assert!(entry.sections().is_empty());
}

#[test]
fn test_sections_follow_render_order() {
    let mut entry = minimal_entry();
    entry.lessons = vec!["Back up before upgrading".to_string()];
    entry.metrics = vec![Metric {
        label: "Uptime".to_string(),
        value: "99%".to_string(),
    }];
    entry.overview = Some(Overview {
        problem: "p".to_string(),
        solution: "s".to_string(),
        results: Vec::new(),
    });

    assert_eq!(
        entry.sections(),
        vec![Section::Overview, Section::Metrics, Section::Lessons]
    );
}

#[test]
fn test_serialize_omits_absent_sections() {
    let entry = minimal_entry();

    let json = serde_json::to_value(&entry).unwrap();
    let object = json.as_object().unwrap();

    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["badges", "links", "tagline", "title"]);
    assert!(json["links"].get("demo").is_none());
}

#[test]
fn test_serialize_uses_camel_case_section_keys() {
    let mut entry = minimal_entry();
    entry.technical_details = vec![crate::TechnicalDetail {
        service: "Traefik".to_string(),
        details: "Reverse proxy with automatic TLS".to_string(),
    }];

    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(json["technicalDetails"][0]["service"], "Traefik");
    assert!(json.get("technical_details").is_none());
}

#[test]
fn test_deserialize_requires_github_link() {
    let result = serde_json::from_str::<ProjectEntry>(
        r#"{"title": "t", "tagline": "g", "badges": [], "links": {}}"#,
    );

    assert!(result.is_err());
}

#[test]
fn test_deserialize_requires_badges() {
    let result = serde_json::from_str::<ProjectEntry>(
        r#"{"title": "t", "tagline": "g", "links": {"github": "https://github.com/a/b"}}"#,
    );

    assert!(result.is_err());
}
