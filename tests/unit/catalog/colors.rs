use super::*;

#[test]
fn catalog_has_ten_unique_names() {
    assert_eq!(FRAME_COLORS.len(), 10);
    for (i, a) in FRAME_COLORS.iter().enumerate() {
        for b in &FRAME_COLORS[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn find_color_by_name() {
    let pink = find_color("Pink").unwrap();
    assert_eq!(pink.primary, Rgba8::rgb(0xff, 0xe4, 0xe9));
    assert_eq!(pink.secondary, Rgba8::rgb(0xff, 0xd1, 0xd9));
    assert!(find_color("Chartreuse").is_none());
}
