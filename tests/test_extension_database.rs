//! Integration tests for the extension database and its category index.

use console_records::extensions::MAX_SUGGESTIONS;
use console_records::{CategorySummary, ExtensionDatabase, ExtensionError, ExtensionInfo};

fn extensions(infos: &[&ExtensionInfo]) -> Vec<String> {
    infos.iter().map(|i| i.extension.clone()).collect()
}

#[test]
fn test_lookup_is_case_insensitive_and_dot_optional() {
    let db = ExtensionDatabase::builtin();
    let upper = db.lookup("MP4").unwrap();
    let dotted = db.lookup(".mp4").unwrap();
    let bare = db.lookup("mp4").unwrap();

    assert_eq!(upper, dotted);
    assert_eq!(dotted, bare);
    assert_eq!(bare.extension, ".mp4");
    assert_eq!(bare.category, "Video");
    assert_eq!(bare.applications, vec!["VLC", "Windows Media Player"]);
}

#[test]
fn test_unknown_extension_without_similar_entries() {
    let db = ExtensionDatabase::builtin();
    match db.lookup(".xyz") {
        Err(ExtensionError::UnknownExtension {
            extension,
            suggestions,
        }) => {
            assert_eq!(extension, ".xyz");
            assert!(suggestions.is_empty());
        }
        other => panic!("Expected UnknownExtension, got: {:?}", other),
    }
}

#[test]
fn test_unknown_extension_suggests_shared_prefix() {
    let db = ExtensionDatabase::builtin();
    match db.lookup(".mkx") {
        Err(ExtensionError::UnknownExtension { suggestions, .. }) => {
            assert_eq!(suggestions, vec![".mkv"]);
        }
        other => panic!("Expected UnknownExtension, got: {:?}", other),
    }
}

#[test]
fn test_suggestions_follow_catalog_order_and_cap() {
    let db = ExtensionDatabase::builtin();
    // .mp4 and .mp3 share ".mp"; .mp4 comes first in the catalog
    assert_eq!(extensions(&db.suggest("MPX")), vec![".mp4", ".mp3"]);
    assert!(db.suggest("mpx").len() <= MAX_SUGGESTIONS);
}

#[test]
fn test_list_by_category_sorted_by_extension() {
    let db = ExtensionDatabase::builtin();
    let video = db.list_by_category("Video").unwrap();
    assert_eq!(
        extensions(&video),
        vec![".avi", ".mkv", ".mov", ".mp4", ".webm"]
    );
    assert!(video.iter().all(|info| info.category == "Video"));
}

#[test]
fn test_list_by_category_is_case_sensitive() {
    let db = ExtensionDatabase::builtin();
    match db.list_by_category("video") {
        Err(ExtensionError::UnknownCategory { category, known }) => {
            assert_eq!(category, "video");
            assert_eq!(
                known,
                vec!["Audio", "Compressed", "Document", "Image", "Programming", "Video"]
            );
        }
        other => panic!("Expected UnknownCategory, got: {:?}", other),
    }
}

#[test]
fn test_list_by_unknown_category_is_an_error_not_empty() {
    let db = ExtensionDatabase::builtin();
    assert!(matches!(
        db.list_by_category("Spreadsheets"),
        Err(ExtensionError::UnknownCategory { .. })
    ));
}

#[test]
fn test_list_all_orders_categories_and_extensions() {
    let db = ExtensionDatabase::builtin();
    let listing = db.list_all();

    let names: Vec<&str> = listing.iter().map(|l| l.category).collect();
    assert_eq!(
        names,
        vec!["Audio", "Compressed", "Document", "Image", "Programming", "Video"]
    );
    assert_eq!(
        extensions(&listing[0].extensions),
        vec![".aac", ".flac", ".mp3", ".wav"]
    );
    assert_eq!(
        extensions(&listing[4].extensions),
        vec![".css", ".html", ".java", ".json", ".py"]
    );

    // Restartable and deterministic
    assert_eq!(listing, db.list_all());
}

#[test]
fn test_categories_with_counts() {
    let db = ExtensionDatabase::builtin();
    let expected: Vec<CategorySummary> = [
        ("Audio", 4),
        ("Compressed", 2),
        ("Document", 5),
        ("Image", 4),
        ("Programming", 5),
        ("Video", 5),
    ]
    .into_iter()
    .map(|(name, count)| CategorySummary {
        name: name.to_string(),
        count,
    })
    .collect();

    assert_eq!(db.categories(), expected);
}

#[test]
fn test_statistics_are_idempotent() {
    let db = ExtensionDatabase::builtin();
    let first = db.statistics();
    let second = db.statistics();

    assert_eq!(first, second);
    assert_eq!(first.total_extensions, 25);
    assert_eq!(first.total_categories, 6);
    assert_eq!(first.categories, db.categories());
    assert_eq!(
        first.categories.iter().map(|c| c.count).sum::<usize>(),
        first.total_extensions
    );
}

#[test]
fn test_statistics_serialize_to_json() {
    let db = ExtensionDatabase::builtin();
    let json = serde_json::to_value(db.statistics()).unwrap();
    assert_eq!(json["total_extensions"], 25);
    assert_eq!(json["categories"][0]["name"], "Audio");
}

#[test]
fn test_from_json_catalog() {
    let json = r#"[
        {"extension": "ogg", "category": "Audio", "description": "Ogg Vorbis",
         "common_use": "Streaming audio", "applications": ["VLC"]},
        {"extension": ".OPUS", "category": "Audio", "description": "Opus",
         "common_use": "Voice and music"}
    ]"#;
    let db = ExtensionDatabase::from_json(json).unwrap();

    assert_eq!(db.len(), 2);
    assert_eq!(db.lookup("OGG").unwrap().extension, ".ogg");
    assert_eq!(db.lookup("opus").unwrap().extension, ".OPUS");
    assert_eq!(
        extensions(&db.list_by_category("Audio").unwrap()),
        vec![".ogg", ".OPUS"]
    );
}

#[test]
fn test_from_json_rejects_duplicate_extensions() {
    let json = r#"[
        {"extension": ".ogg", "category": "Audio", "description": "a", "common_use": "b"},
        {"extension": "OGG", "category": "Video", "description": "c", "common_use": "d"}
    ]"#;
    assert!(matches!(
        ExtensionDatabase::from_json(json),
        Err(ExtensionError::DuplicateExtension(_))
    ));
}
