use super::*;
use crate::session::store::MemorySessionStore;

fn context() -> SessionContext {
    SessionContext {
        photos: vec![
            EncodedPhoto::new(vec![0xff, 0xd8, 0xff, 0xe0]),
            EncodedPhoto::new(vec![0xff, 0xd8, 0x00, 0x01]),
        ],
        count: 2,
        timestamp: "2026-08-25 14:02".to_string(),
        format: StripFormat::Landscape,
    }
}

#[test]
fn save_then_load_roundtrips() {
    let mut store = MemorySessionStore::default();
    context().save(&mut store).unwrap();
    let loaded = SessionContext::load(&store).unwrap().unwrap();
    assert_eq!(loaded, context());
}

#[test]
fn missing_or_empty_photo_list_means_no_session() {
    let mut store = MemorySessionStore::default();
    assert_eq!(SessionContext::load(&store).unwrap(), None);

    store.set(KEY_PHOTOS, "[]".to_string());
    assert_eq!(SessionContext::load(&store).unwrap(), None);
}

#[test]
fn malformed_payloads_are_session_errors() {
    let mut store = MemorySessionStore::default();
    store.set(KEY_PHOTOS, "not json".to_string());
    assert!(matches!(
        SessionContext::load(&store).unwrap_err(),
        BoothError::Session(_)
    ));

    store.set(KEY_PHOTOS, r#"["zz-not-hex"]"#.to_string());
    assert!(matches!(
        SessionContext::load(&store).unwrap_err(),
        BoothError::Session(_)
    ));
}

#[test]
fn missing_count_and_format_fall_back() {
    let mut store = MemorySessionStore::default();
    context().save(&mut store).unwrap();
    store.remove(KEY_PHOTO_COUNT);
    store.remove(KEY_FORMAT);

    let loaded = SessionContext::load(&store).unwrap().unwrap();
    assert_eq!(loaded.count, 2);
    assert_eq!(loaded.format, StripFormat::Portrait);
}

#[test]
fn unknown_format_tag_falls_back_to_portrait() {
    let mut store = MemorySessionStore::default();
    context().save(&mut store).unwrap();
    store.set(KEY_FORMAT, "square".to_string());
    let loaded = SessionContext::load(&store).unwrap().unwrap();
    assert_eq!(loaded.format, StripFormat::Portrait);
}

#[test]
fn clear_removes_every_key() {
    let mut store = MemorySessionStore::default();
    context().save(&mut store).unwrap();
    SessionContext::clear(&mut store);
    for key in [KEY_PHOTOS, KEY_TIMESTAMP, KEY_PHOTO_COUNT, KEY_FORMAT] {
        assert_eq!(store.get(key), None);
    }
}
