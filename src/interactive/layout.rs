use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// The four horizontal bands of every screen: header, content, an optional
/// notification strip and the key-hint footer.
pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub notifications: Rect,
    pub footer: Rect,
}

/// Splits the terminal into the app bands. The notification strip only
/// takes space while there is something to show, up to three lines plus
/// its border.
pub fn app_layout(area: Rect, notification_count: usize) -> AppLayout {
    let strip = match notification_count {
        0 => 0,
        n => (n as u16).min(3) + 2,
    };

    let bands = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(strip),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: bands[0],
        main: bands[1],
        notifications: bands[2],
        footer: bands[3],
    }
}

/// A centered rectangle for popups and small forms, clipped to the area.
pub fn centered_popup(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
