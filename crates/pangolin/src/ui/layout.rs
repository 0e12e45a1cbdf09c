//! Popup placement shared by the dialog overlays.

use ratatui::layout::Rect;

/// Resolves a popup dimension: `percent` of `total`, raised to `min`, never
/// exceeding `total`.
pub fn percent_clamped(total: u16, percent: u16, min: u16) -> u16 {
    (total * percent / 100).max(min).min(total)
}

/// Centers a `width` x `height` popup within `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}
