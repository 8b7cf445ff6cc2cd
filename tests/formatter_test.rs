use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use foodmap_extract::{
    MimeFields, RequestType, ScraperConfig, format_entry, message_fields,
};
use serde_json::json;

fn fields(title: &str, body: &str) -> MimeFields {
    MimeFields {
        timestamp: "2017-07-14 02:40:00".to_string(),
        title: title.to_string(),
        body: body.to_string(),
        image: None,
        thread_id: "thread-1".to_string(),
    }
}

#[test]
fn test_entry_composition() {
    let config = ScraperConfig::bundled().unwrap();
    let entry = format_entry(&config, fields("Free pizza", "\nCome to Frist, fresh and hot"));

    assert_eq!(entry.food, ["Pizza"]);
    assert_eq!(entry.location, "Frist Campus Center");
    assert_eq!(entry.request_type, RequestType::Insert);
    assert_eq!(entry.timestamp, "2017-07-14 02:40:00");
    assert_eq!(entry.title, "Free pizza");
    assert_eq!(entry.body, "\nCome to Frist, fresh and hot");
    assert_eq!(entry.thread_id, "thread-1");
    assert!(entry.image.is_none());
}

#[test]
fn test_title_contributes_foods_and_location() {
    let config = ScraperConfig::bundled().unwrap();
    let entry = format_entry(&config, fields("Sushi in Clapp", ""));

    assert_eq!(entry.food, ["Sushi"]);
    assert_eq!(entry.location, "1927 - Clapp Hall");
}

#[test]
fn test_request_type_ignores_title() {
    let config = ScraperConfig::bundled().unwrap();

    // "all gone" in the title does not retract
    let entry = format_entry(&config, fields("all gone", "pizza at frist"));
    assert_eq!(entry.request_type, RequestType::Insert);

    // "all gone" in the body does
    let entry = format_entry(&config, fields("Pizza", "\nsorry, they're all gone"));
    assert_eq!(entry.request_type, RequestType::Delete);
    assert_eq!(entry.food, ["Pizza"]);
}

#[test]
fn test_no_matches_yield_empty_fields() {
    let config = ScraperConfig::bundled().unwrap();
    let entry = format_entry(&config, fields("", ""));

    assert!(entry.food.is_empty());
    assert_eq!(entry.location, "");
    assert_eq!(entry.request_type, RequestType::Insert);
}

#[test]
fn test_entry_serializes_for_persistence() {
    let config = ScraperConfig::bundled().unwrap();
    let entry = format_entry(&config, fields("Free pizza", "\nIn Frist"));

    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(value["food"], json!(["Pizza"]));
    assert_eq!(value["location"], "Frist Campus Center");
    assert_eq!(value["request_type"], "Insert");
    assert_eq!(value["thread_id"], "thread-1");
}

#[test]
fn test_full_pipeline_from_message() {
    let config = ScraperConfig::bundled().unwrap();
    // No Subject header: the title defaults to empty
    let msg = serde_json::from_value(json!({
        "id": "m1",
        "threadId": "thread-9",
        "internalDate": "1500000000000",
        "payload": {
            "mimeType": "multipart/alternative",
            "parts": [{
                "mimeType": "text/plain",
                "body": { "data": URL_SAFE.encode("muffins and 123 and bagels in Friend 112") }
            }]
        }
    }))
    .unwrap();

    let entry = format_entry(&config, message_fields(&msg).unwrap());

    assert_eq!(entry.title, "");
    let mut food = entry.food.clone();
    food.sort();
    assert_eq!(food, ["123", "Bagels", "Muffins"]);
    assert_eq!(entry.location, "Friend Center");
    assert_eq!(entry.request_type, RequestType::Insert);
    assert_eq!(entry.thread_id, "thread-9");
    assert_eq!(entry.timestamp, "2017-07-14 02:40:00");
}
