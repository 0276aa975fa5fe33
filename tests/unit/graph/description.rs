use super::*;
use crate::EntityType;

const USA_HISTORY: &str = r#"
{
  "name": "USAHistory",
  "variant": "USAHistory",
  "entities": [
    { "id": "event1", "type": "Event", "name": "American Revolution", "attributes": { "year": 1776 } },
    { "id": "event2", "type": "Event", "name": "Civil War", "attributes": { "year": 1861 } },
    { "id": "x", "type": "Organism", "name": "Unknown" }
  ],
  "relationships": [
    { "id": "rel1", "source": "event1", "target": "event2", "type": "PRECEDES" }
  ]
}
"#;

#[test]
fn parses_and_builds_graph() {
    let desc = GraphDescription::from_json_str(USA_HISTORY).unwrap();
    let graph = desc.into_graph().unwrap();
    assert_eq!(graph.name(), Some("USAHistory"));
    assert_eq!(graph.variant(), Variant::History);
    assert_eq!(graph.entities().len(), 3);
    assert_eq!(graph.lookup("x").unwrap().entity_type, EntityType::Other);
    assert!(graph.lookup("x").unwrap().attributes.is_empty());
}

#[test]
fn missing_sections_default_to_empty_generic() {
    let graph = Graph::try_from(GraphDescription::from_json_str("{}").unwrap()).unwrap();
    assert!(graph.is_empty());
    assert_eq!(graph.variant(), Variant::Generic);
}

#[test]
fn duplicate_ids_fail_conversion() {
    let json = r#"{ "entities": [
        { "id": "a", "type": "System", "name": "A" },
        { "id": "a", "type": "System", "name": "B" }
    ] }"#;
    let err = GraphDescription::from_json_str(json)
        .unwrap()
        .into_graph()
        .unwrap_err();
    assert!(matches!(err, ReelError::MalformedGraph(_)));
}

#[test]
fn invalid_json_is_a_serde_error() {
    let err = GraphDescription::from_json_str("{ \"entities\": 3 }").unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}

#[test]
fn missing_file_is_wrapped_with_path() {
    let err = GraphDescription::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, ReelError::Other(_)));
    assert!(format!("{err:#}").contains("does/not/exist.json"));
}
