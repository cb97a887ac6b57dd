use chrono::NaiveDate;
use emodiary::calendar::month_view;
use emodiary::errors::{AppError, LockError};
use emodiary::stats::aggregate;
use emodiary::storage::{BlobStore, FileStore, MemoryStore, SqliteStore, StorageKey};
use emodiary::{DateKey, DiaryCollection, DiaryStore, EmotionCategory, UserId};
use fs2::FileExt;
use std::fs::File;
use tempfile::tempdir;

fn alice() -> UserId {
    UserId::new("alice").unwrap()
}

fn date(s: &str) -> DateKey {
    s.parse().unwrap()
}

#[test]
fn test_write_aggregate_end_to_end() {
    let store = DiaryStore::new(MemoryStore::new());

    let entry = store
        .write(&alice(), date("2025-06-01"), "오늘 정말 행복했다")
        .unwrap();
    assert_eq!(entry.emotion, EmotionCategory::Joy);
    assert_eq!(entry.glyph(), "😊");
    assert_eq!(entry.image_key(), "happy");

    let stats = aggregate(&store.load(&alice()), 2025, 5);
    assert_eq!(stats.total, 1);
    assert_eq!(stats.modal_emotion, Some(EmotionCategory::Joy));
    assert_eq!(stats.percentage(EmotionCategory::Joy), 100.0);
}

#[test]
fn test_sadness_takes_priority_over_other_stems() {
    let store = DiaryStore::new(MemoryStore::new());

    let entry = store
        .write(&alice(), date("2025-06-01"), "행복했지만 조금 슬프기도 했다")
        .unwrap();
    assert_eq!(entry.emotion, EmotionCategory::Sadness);
}

fn assert_round_trip<B: BlobStore>(backend: B, reopen: impl Fn() -> B) {
    let store = DiaryStore::new(backend);
    let user = alice();

    store.write(&user, date("2025-06-01"), "행복한 하루").unwrap();
    store.write(&user, date("2025-06-02"), "우울한 날").unwrap();
    store.write(&user, date("2025-07-04"), "깜짝 파티").unwrap();
    store.write(&user, date("2025-06-02"), "다시 생각하니 괜찮은 날").unwrap();
    let written = store.load(&user);

    let reopened = DiaryStore::new(reopen());
    let reloaded = reopened.load(&user);

    assert_eq!(reloaded, written);
    assert_eq!(reloaded.len(), 3);
    let rewritten = reloaded.get(&date("2025-06-02")).unwrap();
    assert_eq!(rewritten.content, "다시 생각하니 괜찮은 날");
    assert_eq!(rewritten.emotion, EmotionCategory::Neutral);
}

#[test]
fn test_sqlite_round_trip() {
    let temp_dir = tempdir().unwrap();
    let db_path = temp_dir.path().join("emodiary.db");

    assert_round_trip(SqliteStore::open(&db_path).unwrap(), || {
        SqliteStore::open(&db_path).unwrap()
    });
}

#[test]
fn test_file_round_trip() {
    let temp_dir = tempdir().unwrap();
    let root = temp_dir.path().join("store");

    assert_round_trip(FileStore::new(&root), || FileStore::new(&root));
}

#[test]
fn test_persisted_layout() {
    let backend = MemoryStore::new();
    let store = DiaryStore::new(&backend);
    store.write(&alice(), date("2025-06-01"), "짜증나").unwrap();

    let payload = backend
        .load(&StorageKey::entries(&alice()))
        .unwrap()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

    let entry = &value["2025-06-01"];
    assert_eq!(entry["dateKey"], "2025-06-01");
    assert_eq!(entry["content"], "짜증나");
    assert_eq!(entry["emotion"], "anger");
    // Presentation is derived, never stored
    assert!(entry.get("emoji").is_none());
    assert!(entry.get("emotionImage").is_none());
}

#[test]
fn test_loads_records_with_presentation_fields() {
    let backend = MemoryStore::new();
    backend
        .save(
            &StorageKey::entries(&alice()),
            r#"{"2025-06-01":{"date":"2025-06-01","content":"좋아","emotion":"joy","emoji":"😊","emotionImage":"happy"}}"#,
        )
        .unwrap();

    let store = DiaryStore::new(backend);
    let entry = store.read(&alice(), &date("2025-06-01")).unwrap();
    assert_eq!(entry.emotion, EmotionCategory::Joy);
    assert_eq!(entry.content, "좋아");
}

#[test]
fn test_month_view_over_stored_diary() {
    let store = DiaryStore::new(MemoryStore::new());
    store.write(&alice(), date("2025-02-01"), "무섭다").unwrap();
    store.write(&alice(), date("2025-02-28"), "역겹다").unwrap();

    let today = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
    let view = month_view(&store.load(&alice()), 2025, 1, today).unwrap();

    assert_eq!(view.days_in_month, 28);
    assert_eq!(view.first_weekday, 6);
    assert_eq!(view.entry_count(), 2);
    assert_eq!(
        view.cell(28).unwrap().entry.as_ref().unwrap().emotion,
        EmotionCategory::Disgust
    );
    assert!(view.cell(10).unwrap().is_today);
}

#[test]
fn test_file_store_reports_busy_record() {
    let temp_dir = tempdir().unwrap();
    let backend = FileStore::new(temp_dir.path());
    let store = DiaryStore::new(&backend);
    store.write(&alice(), date("2025-06-01"), "평온").unwrap();

    let record = backend.record_path(&StorageKey::entries(&alice()));
    let lock_path = record.with_extension("json.lock");
    let holder = File::open(&lock_path).unwrap();
    FileExt::lock_exclusive(&holder).unwrap();

    let result = store.write(&alice(), date("2025-06-02"), "행복");
    assert!(matches!(
        result,
        Err(AppError::Lock(LockError::FileBusy { .. }))
    ));

    FileExt::unlock(&holder).unwrap();
    assert_eq!(store.load(&alice()).len(), 1);
}

#[test]
fn test_empty_diary_aggregates_to_zero() {
    let stats = aggregate(&DiaryCollection::new(), 2025, 5);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.modal_emotion, None);
    assert!(EmotionCategory::ALL
        .iter()
        .all(|&emotion| stats.percentage(emotion) == 0.0));
}
