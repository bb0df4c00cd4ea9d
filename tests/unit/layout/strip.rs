use super::*;

const EPS: f64 = 1e-9;

fn portrait_params(count: usize) -> LayoutParams {
    LayoutParams {
        count,
        canvas: Canvas {
            width: 1080,
            height: 1920,
        },
        padding: 60.0,
        spacing: 40.0,
        reserved: 100.0,
        photo_aspect: 9.0 / 16.0,
        primary: Axis::Vertical,
    }
}

fn landscape_params(count: usize) -> LayoutParams {
    LayoutParams {
        count,
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
        padding: 60.0,
        spacing: 40.0,
        reserved: 0.0,
        photo_aspect: 16.0 / 9.0,
        primary: Axis::Horizontal,
    }
}

fn overlaps(a: &kurbo::Rect, b: &kurbo::Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

#[test]
fn rects_are_pairwise_disjoint_and_inside_canvas() {
    for params in (1..=4)
        .map(portrait_params)
        .chain((1..=4).map(landscape_params))
    {
        let layout = compute_strip_layout(params).unwrap();
        let rects = layout.photo_rects();
        assert_eq!(rects.len(), params.count);
        for (i, a) in rects.iter().enumerate() {
            assert!(a.x0 >= -EPS && a.y0 >= -EPS);
            assert!(a.x1 <= f64::from(params.canvas.width) + EPS);
            assert!(a.y1 <= f64::from(params.canvas.height) + EPS);
            for b in &rects[i + 1..] {
                assert!(!overlaps(a, b), "slots overlap: {a:?} vs {b:?}");
            }
        }
    }
}

#[test]
fn slots_honor_the_target_aspect_ratio() {
    for params in (1..=4)
        .map(portrait_params)
        .chain((1..=4).map(landscape_params))
    {
        let layout = compute_strip_layout(params).unwrap();
        let aspect = layout.photo_width / layout.photo_height;
        assert!(
            (aspect - params.photo_aspect).abs() < EPS,
            "aspect {aspect} != {}",
            params.photo_aspect
        );
    }
}

#[test]
fn primary_positions_step_by_size_plus_spacing() {
    let layout = compute_strip_layout(landscape_params(4)).unwrap();
    for pair in layout.primary_positions.windows(2) {
        let step = pair[1] - pair[0];
        assert!((step - (layout.photo_width + 40.0)).abs() < EPS);
    }
    assert!((layout.primary_positions[0] - 60.0).abs() < EPS);
}

#[test]
fn portrait_multi_divides_the_reserved_extent_evenly() {
    let layout = compute_strip_layout(portrait_params(3)).unwrap();
    // (1920 - 120 padding - 100 reserve - 80 spacing) / 3
    assert!((layout.photo_height - 1620.0 / 3.0).abs() < EPS);
    assert!((layout.photo_width - layout.photo_height * 9.0 / 16.0).abs() < EPS);
}

#[test]
fn single_landscape_photo_triggers_dimension_flip_fallback() {
    let layout = compute_strip_layout(landscape_params(1)).unwrap();
    // Width-derived height (1800 * 9/16 = 1012.5) overflows the 960 px cross
    // extent, so the height is pinned and the width re-derived.
    assert!((layout.photo_height - 960.0).abs() < EPS);
    assert!((layout.photo_width - 960.0 * 16.0 / 9.0).abs() < EPS);
    assert!(layout.photo_width <= 1920.0 - 2.0 * 60.0 + EPS);
}

#[test]
fn cross_axis_is_centered() {
    let layout = compute_strip_layout(portrait_params(2)).unwrap();
    let expected = (1080.0 - layout.photo_width) / 2.0;
    assert!((layout.cross_offset - expected).abs() < EPS);
}

#[test]
fn layout_is_deterministic() {
    let a = compute_strip_layout(portrait_params(4)).unwrap();
    let b = compute_strip_layout(portrait_params(4)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn zero_count_and_degenerate_canvas_are_rejected() {
    assert!(compute_strip_layout(portrait_params(0)).is_err());

    let mut tiny = portrait_params(2);
    tiny.canvas = Canvas {
        width: 50,
        height: 50,
    };
    assert!(compute_strip_layout(tiny).is_err());
}
