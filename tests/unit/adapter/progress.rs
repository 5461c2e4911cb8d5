use super::*;

fn geometry() -> ScrollGeometry {
    ScrollGeometry {
        region_top: 200.0,
        region_height: 3000.0,
        viewport_height: 1000.0,
    }
}

#[test]
fn maps_region_travel_to_unit_range() {
    let g = geometry();
    assert_eq!(g.scrollable_extent(), 2000.0);
    assert_eq!(g.progress_at(0.0), 0.0);
    assert_eq!(g.progress_at(200.0), 0.0);
    assert_eq!(g.progress_at(1200.0), 0.5);
    assert_eq!(g.progress_at(2200.0), 1.0);
    assert_eq!(g.progress_at(9000.0), 1.0);
    assert_eq!(g.progress_at(f64::NAN), 0.0);
}

#[test]
fn short_region_steps_at_top() {
    let g = ScrollGeometry {
        region_top: 100.0,
        region_height: 500.0,
        viewport_height: 800.0,
    };
    assert_eq!(g.progress_at(99.0), 0.0);
    assert_eq!(g.progress_at(100.0), 1.0);
}

#[test]
fn scroll_progress_follows_offsets_in_both_directions() {
    let offsets = vec![200.0, 1200.0, 2200.0, 700.0];
    let mut src = ScrollProgress::new(geometry(), offsets.into_iter());
    let got: Vec<f64> = std::iter::from_fn(|| src.next_progress()).collect();
    assert_eq!(got, [0.0, 0.5, 1.0, 0.25]);
}

#[test]
fn plain_iterators_are_sources() {
    let mut src = [0.3, 0.1].into_iter();
    assert_eq!(src.next_progress(), Some(0.3));
    assert_eq!(src.next_progress(), Some(0.1));
    assert_eq!(src.next_progress(), None);
}
