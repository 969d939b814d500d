use super::*;

#[test]
fn test_rect_edges() {
    let r = Rect::new(1, 2, 10, 5);
    assert_eq!(r.right(), 11);
    assert_eq!(r.bottom(), 7);
}

#[test]
fn test_canvas_set_get() {
    let mut c = Canvas::new(5, 5, CharSet::Unicode);
    c.set(2, 3, 'X');
    assert_eq!(c.get(2, 3), 'X');
    assert_eq!(c.get(0, 0), ' ');
}

#[test]
fn test_canvas_clips_out_of_bounds_and_negative() {
    let mut c = Canvas::new(3, 3, CharSet::Unicode);
    c.set(10, 10, 'X');
    c.set(-1, 0, 'X');
    assert_eq!(c.get(10, 10), ' ');
    assert_eq!(c.get(-1, 0), ' ');
    assert_eq!(c.render_to_string(), "\n");
}

#[test]
fn test_lines_exclude_endpoints() {
    let mut c = Canvas::new(10, 10, CharSet::Ascii);
    c.hline_between(2, 5, 1);
    c.vline_between(8, 1, 4);
    assert_eq!(c.get(1, 2), ' ');
    assert_eq!(c.get(2, 2), '-');
    assert_eq!(c.get(4, 2), '-');
    assert_eq!(c.get(5, 2), ' ');
    assert_eq!(c.get(8, 1), ' ');
    assert_eq!(c.get(8, 2), '|');
    assert_eq!(c.get(8, 3), '|');
    assert_eq!(c.get(8, 4), ' ');
}

#[test]
fn test_crossing_lines_merge() {
    let mut c = Canvas::new(10, 10, CharSet::Unicode);
    c.hline_between(5, 0, 9);
    c.vline_between(4, 0, 9);
    assert_eq!(c.get(4, 5), '┼');
}

#[test]
fn test_merge_arms_replaces_text() {
    let mut c = Canvas::new(3, 1, CharSet::Unicode);
    c.set(1, 0, 'A');
    c.merge_arms(1, 0, Arms::DOWN);
    assert_eq!(c.get(1, 0), '│');
}

#[test]
fn test_draw_box_and_label() {
    let mut c = Canvas::new(10, 5, CharSet::Unicode);
    c.draw_box(Rect::new(0, 0, 5, 3), &BoxChars::unicode());
    c.write_str(2, 1, "A");
    assert_eq!(c.render_to_string(), "┌───┐\n│ A │\n└───┘\n");
}

#[test]
fn test_canvas_to_string_trims() {
    let mut c = Canvas::new(10, 3, CharSet::Ascii);
    c.set(0, 0, 'A');
    let s = c.to_string();
    assert_eq!(s, "A\n");
}
