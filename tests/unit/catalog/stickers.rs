use super::*;

#[test]
fn catalog_has_twenty_unique_kinds() {
    assert_eq!(AVAILABLE_STICKERS.len(), 20);
    for (i, a) in AVAILABLE_STICKERS.iter().enumerate() {
        for b in &AVAILABLE_STICKERS[i + 1..] {
            assert_ne!(a.kind, b.kind);
        }
    }
}

#[test]
fn only_heart_and_star_carry_export_glyphs() {
    for def in AVAILABLE_STICKERS {
        let has_glyph = def.glyph.is_some();
        assert_eq!(has_glyph, def.kind == "heart" || def.kind == "star");
    }
}

#[test]
fn unknown_kind_is_absent() {
    assert!(find_sticker("unicorn").is_none());
    assert!(find_sticker("heart").is_some());
}

#[test]
fn glyph_paths_are_nonempty_and_scale() {
    use kurbo::Shape;

    for kind in ["heart", "star"] {
        let glyph = find_sticker(kind).unwrap().glyph.unwrap();
        let small = glyph(10.0).bounding_box();
        let large = glyph(20.0).bounding_box();
        assert!(small.area() > 0.0);
        assert!(large.width() > small.width());
        assert!(large.height() > small.height());
    }
}
