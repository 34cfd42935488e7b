use super::*;
use pretty_assertions::assert_eq;

#[test]
fn from_range_round_trips_to_range() {
    let span = Span::from_range(3..9);
    assert_eq!(span, Span::new(3, 9));
    assert_eq!(span.to_range(), 3..9);
}

#[test]
fn point_is_zero_width() {
    let span = Span::point(12);
    assert_eq!(span.to_range(), 12..12);
}

#[test]
fn debug_shows_range() {
    assert_eq!(format!("{:?}", Span::new(1, 4)), "1..4");
}
