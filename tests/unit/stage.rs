use super::*;
use crate::catalog::colors::find_color;
use crate::foundation::core::EncodedPhoto;
use crate::session::store::{KEY_PHOTOS, MemorySessionStore, SessionStore};

fn photo() -> EncodedPhoto {
    let img = image::RgbImage::from_pixel(320, 240, image::Rgb([80, 140, 220]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
    EncodedPhoto::new(bytes)
}

fn stage() -> ReviewStage {
    let session = SessionContext {
        photos: vec![photo(), photo()],
        count: 2,
        timestamp: "2026-08-25 14:02".to_string(),
        format: StripFormat::Portrait,
    };
    ReviewStage::from_session(session, BrandStyle::default())
}

#[test]
fn fresh_stage_starts_dirty_with_the_default_color() {
    let stage = stage();
    assert!(stage.is_dirty());
    assert!(stage.preview().is_none());
    assert_eq!(stage.color(), FRAME_COLORS[0]);
    assert_eq!(stage.format(), StripFormat::Portrait);
}

#[test]
fn regenerate_runs_once_per_change() {
    let mut stage = stage();
    assert!(stage.regenerate().unwrap());
    assert!(!stage.is_dirty());
    assert!(stage.preview().is_some());

    // Nothing changed, so the second call is a no-op.
    assert!(!stage.regenerate().unwrap());

    stage.set_color(find_color("Mint").unwrap());
    assert!(stage.is_dirty());
    assert!(stage.regenerate().unwrap());
}

#[test]
fn reselecting_the_current_color_or_format_stays_clean() {
    let mut stage = stage();
    stage.regenerate().unwrap();
    stage.set_color(FRAME_COLORS[0]);
    stage.set_format(StripFormat::Portrait);
    assert!(!stage.is_dirty());
}

#[test]
fn format_switch_regenerates_at_the_new_dimensions() {
    let mut stage = stage();
    stage.set_format(StripFormat::Landscape);
    stage.regenerate().unwrap();
    let preview = stage.preview().unwrap();
    assert_eq!((preview.width, preview.height), (1920, 1080));
}

#[test]
fn sticker_placements_get_unique_ids_and_mark_dirty() {
    let mut stage = stage();
    stage.regenerate().unwrap();

    let a = stage.add_sticker("heart");
    let b = stage.add_sticker("star");
    assert_ne!(a, b);
    assert!(stage.is_dirty());
    assert_eq!(stage.stickers().len(), 2);
    assert_eq!(stage.stickers()[0].kind, "heart");
}

#[test]
fn gestures_route_to_the_addressed_placement() {
    let mut stage = stage();
    let id = stage.add_sticker("heart");
    stage.regenerate().unwrap();

    stage.apply_gesture(&id, GestureEvent::PointerDown);
    stage.apply_gesture(&id, GestureEvent::PointerMove { x: 0.25, y: 0.75 });
    assert!(stage.is_dirty());
    let sticker = &stage.stickers()[0];
    assert_eq!((sticker.x, sticker.y), (0.25, 0.75));

    // Unknown placement ids are ignored.
    stage.regenerate().unwrap();
    stage.apply_gesture("sticker-99", GestureEvent::RotateStep);
    assert!(!stage.is_dirty());
}

#[test]
fn double_tap_deletes_the_placement() {
    let mut stage = stage();
    let id = stage.add_sticker("star");
    stage.apply_gesture(&id, GestureEvent::DoubleTap);
    assert!(stage.stickers().is_empty());
}

#[test]
fn remove_and_clear_only_dirty_when_something_went_away() {
    let mut stage = stage();
    let id = stage.add_sticker("heart");
    stage.regenerate().unwrap();

    stage.remove_sticker("sticker-99");
    assert!(!stage.is_dirty());
    stage.remove_sticker(&id);
    assert!(stage.is_dirty());

    stage.regenerate().unwrap();
    stage.clear_stickers();
    assert!(!stage.is_dirty());
}

#[test]
fn download_name_follows_the_selected_format() {
    let mut stage = stage();
    assert_eq!(
        stage.download_file_name(),
        "stripbooth_portrait_2026-08-25-14-02.jpg"
    );
    stage.set_format(StripFormat::Landscape);
    assert_eq!(
        stage.download_file_name(),
        "stripbooth_landscape_2026-08-25-14-02.jpg"
    );
}

#[test]
fn restart_clears_the_stored_session() {
    let mut store = MemorySessionStore::default();
    let session = SessionContext {
        photos: vec![photo()],
        count: 1,
        timestamp: "t".to_string(),
        format: StripFormat::Portrait,
    };
    session.save(&mut store).unwrap();
    assert!(store.get(KEY_PHOTOS).is_some());

    let stage = ReviewStage::from_session(session, BrandStyle::default());
    stage.restart(&mut store);
    assert_eq!(store.get(KEY_PHOTOS), None);
}
