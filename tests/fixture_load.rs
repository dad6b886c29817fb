use serial_test::serial;

use jubilee::fixtures::{FixtureError, FixtureSet};
use jubilee::models::Chapter;

fn write_fixture_dir(
    chapters: serde_json::Value,
    messages: serde_json::Value,
    videos: serde_json::Value,
    audio: serde_json::Value,
) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, doc) in [
        ("chapters.json", chapters),
        ("messages.json", messages),
        ("videos.json", videos),
        ("audio.json", audio),
    ] {
        std::fs::write(dir.path().join(name), serde_json::to_vec(&doc).unwrap()).unwrap();
    }
    dir
}

fn quiz_chapter(id: &str, quiz: Option<serde_json::Value>) -> serde_json::Value {
    let mut chapter = serde_json::json!({
        "id": id,
        "title": "Do You Remember?",
        "date": "2012-08-19",
        "text": "quiz chapter",
        "photos": [],
        "interactionType": "quiz",
        "layoutHint": "centered"
    });
    if let Some(quiz) = quiz {
        chapter["quiz"] = quiz;
    }
    chapter
}

#[test]
#[serial]
fn loads_a_well_formed_directory() {
    let dir = write_fixture_dir(
        serde_json::json!([quiz_chapter(
            "c1",
            Some(serde_json::json!({"question": "Q", "options": ["A", "B"], "answerIndex": 1}))
        )]),
        serde_json::json!([{
            "id": "m1", "author": "A", "relation": "Friend",
            "text": "hi", "date": "2026-10-01", "curated": false
        }]),
        serde_json::json!([]),
        serde_json::json!([]),
    );

    let set = FixtureSet::load_from_dir(dir.path()).unwrap();
    assert_eq!(set.chapters.len(), 1);
    assert_eq!(set.chapters[0].quiz.as_ref().unwrap().answer_index, 1);
    assert_eq!(set.messages.len(), 1);

    // FIXTURE_DIR routes the top-level loader to the same directory
    std::env::set_var("FIXTURE_DIR", dir.path());
    let set = FixtureSet::load().unwrap();
    std::env::remove_var("FIXTURE_DIR");
    assert_eq!(set.chapters[0].id, "c1");
}

#[cfg(feature = "embed-fixtures")]
#[test]
#[serial]
fn embedded_fixtures_load_and_validate() {
    std::env::remove_var("FIXTURE_DIR");
    let set = FixtureSet::load().unwrap();
    assert!(!set.chapters.is_empty());
    assert!(!set.messages.is_empty());
}

#[test]
fn quiz_chapter_without_quiz_data_fails_fast() {
    let chapters: Vec<Chapter> =
        serde_json::from_value(serde_json::json!([quiz_chapter("c2", None)])).unwrap();
    let err = FixtureSet::from_parts(chapters, vec![], vec![], vec![]).unwrap_err();
    assert!(matches!(err, FixtureError::QuizMissing(id) if id == "c2"));
}

#[test]
fn quiz_answer_index_out_of_range_fails_fast() {
    let chapters: Vec<Chapter> = serde_json::from_value(serde_json::json!([quiz_chapter(
        "c3",
        Some(serde_json::json!({"question": "Q", "options": ["A", "B"], "answerIndex": 2}))
    )]))
    .unwrap();
    let err = FixtureSet::from_parts(chapters, vec![], vec![], vec![]).unwrap_err();
    assert!(matches!(
        err,
        FixtureError::QuizAnswerOutOfRange { chapter, index: 2, options: 2 } if chapter == "c3"
    ));
}

#[test]
#[serial]
fn duplicate_ids_fail_fast() {
    let dir = write_fixture_dir(
        serde_json::json!([]),
        serde_json::json!([
            {"id": "m1", "author": "A", "relation": "Friend", "text": "x", "date": "2026-10-01", "curated": false},
            {"id": "m1", "author": "B", "relation": "Sister", "text": "y", "date": "2026-10-02", "curated": true}
        ]),
        serde_json::json!([]),
        serde_json::json!([]),
    );
    let err = FixtureSet::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        FixtureError::DuplicateId { kind: "message", id } if id == "m1"
    ));
}

#[test]
#[serial]
fn unparseable_documents_fail_fast() {
    let dir = write_fixture_dir(
        serde_json::json!([{"id": "c1", "title": "broken"}]),
        serde_json::json!([]),
        serde_json::json!([]),
        serde_json::json!([]),
    );
    let err = FixtureSet::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, FixtureError::Parse { name: "chapters.json", .. }));

    let missing = tempfile::tempdir().unwrap();
    let err = FixtureSet::load_from_dir(missing.path()).unwrap_err();
    assert!(matches!(err, FixtureError::Read { name: "chapters.json", .. }));
}

#[test]
#[serial]
fn invalid_dates_are_parse_errors() {
    let dir = write_fixture_dir(
        serde_json::json!([]),
        serde_json::json!([{
            "id": "m1", "author": "A", "relation": "Friend",
            "text": "x", "date": "next tuesday", "curated": false
        }]),
        serde_json::json!([]),
        serde_json::json!([]),
    );
    let err = FixtureSet::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, FixtureError::Parse { name: "messages.json", .. }));
}
