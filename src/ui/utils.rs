//! Layout helpers shared by the overlays.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Centers a rectangle of the given percentage size inside `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// A `width` x `height` rectangle in the top-right corner of `area`, shifted
/// down by `offset` rows. Clipped to `area`.
pub fn top_right_rect(width: u16, height: u16, offset: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let y = area.y.saturating_add(offset);
    let bottom = area.y.saturating_add(area.height);
    let height = height.min(bottom.saturating_sub(y));
    Rect::new(area.x + area.width - width, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(50, 50, area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 25);
        assert_eq!(rect.x, 25);
    }

    #[test]
    fn test_top_right_rect_clips() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = top_right_rect(48, 3, 8, area);
        assert_eq!(rect, Rect::new(0, 8, 30, 2));
    }
}
