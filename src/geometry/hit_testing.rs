use egui::{Pos2, Rect, pos2};

/// Half-open containment: the left and top edges are inside, the right and
/// bottom edges are not. A `w`x`h` rect therefore covers exactly `w`x`h` pixels.
pub fn contains(rect: Rect, pos: Pos2) -> bool {
    pos.x >= rect.min.x && pos.x < rect.max.x && pos.y >= rect.min.y && pos.y < rect.max.y
}

/// Maps a pointer position in host coordinates to widget-local coordinates.
///
/// The widget's surface starts `title_bar_height` below the top of the
/// host window frame.
pub fn to_local(pos: Pos2, parent_rect: Rect, title_bar_height: f32) -> Pos2 {
    pos2(
        pos.x - parent_rect.min.x,
        pos.y - (parent_rect.min.y + title_bar_height),
    )
}

/// Returns the first entry whose rect contains `pos`.
pub fn first_hit<T: Copy>(entries: &[(Rect, T)], pos: Pos2) -> Option<T> {
    entries
        .iter()
        .find(|(rect, _)| contains(*rect, pos))
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn test_right_and_bottom_edges_are_outside() {
        let rect = Rect::from_min_size(pos2(10.0, 10.0), vec2(80.0, 30.0));
        assert!(contains(rect, pos2(10.0, 10.0)));
        assert!(contains(rect, pos2(89.0, 39.0)));
        assert!(!contains(rect, pos2(90.0, 20.0)));
        assert!(!contains(rect, pos2(20.0, 40.0)));
    }

    #[test]
    fn test_to_local_removes_title_bar() {
        let parent = Rect::from_min_size(pos2(100.0, 200.0), vec2(640.0, 480.0));
        assert_eq!(to_local(pos2(150.0, 260.0), parent, 30.0), pos2(50.0, 30.0));
        assert_eq!(to_local(pos2(150.0, 260.0), parent, 0.0), pos2(50.0, 60.0));
    }

    #[test]
    fn test_first_hit_prefers_earlier_entries() {
        let a = Rect::from_min_size(pos2(0.0, 0.0), vec2(10.0, 10.0));
        let b = Rect::from_min_size(pos2(5.0, 5.0), vec2(10.0, 10.0));
        let entries = [(a, 'a'), (b, 'b')];
        assert_eq!(first_hit(&entries, pos2(6.0, 6.0)), Some('a'));
        assert_eq!(first_hit(&entries, pos2(12.0, 12.0)), Some('b'));
        assert_eq!(first_hit(&entries, pos2(20.0, 20.0)), None);
    }
}
