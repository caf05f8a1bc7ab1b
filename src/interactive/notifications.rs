use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::interactive::app::{InteractiveApp, Notification, NotificationKind};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

fn notification_line(n: &Notification) -> Line<'_> {
    let (icon, color) = match n.kind {
        NotificationKind::Success => ('✓', Color::Green),
        NotificationKind::Error => ('✗', Color::Red),
        NotificationKind::Info => ('ⓘ', Color::Blue),
        NotificationKind::Loading => {
            let frame = (n.created_at.elapsed().as_millis() / 250) as usize % SPINNER.len();
            (SPINNER[frame], Color::Yellow)
        }
    };

    let mut spans = vec![
        Span::styled(
            format!(" {} ", icon),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(n.message.as_str(), Style::default().fg(color)),
    ];

    // Only messages that expire get a countdown; errors linger and
    // loading spinners stay until the operation finishes.
    if matches!(n.kind, NotificationKind::Success | NotificationKind::Info) {
        let remaining = 5u64.saturating_sub(n.created_at.elapsed().as_secs());
        spans.push(Span::styled(
            format!("  [{}s]", remaining),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

/// Newest first, at most three visible.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    if app.notifications.is_empty() || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = app
        .notifications
        .iter()
        .rev()
        .take(3)
        .map(notification_line)
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
