//! Toast notification widget
//!
//! Short-lived messages shown in the top-right corner of the board.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => " Info ",
            Self::Success => " Done ",
            Self::Warning => " Warning ",
            Self::Error => " Error ",
        }
    }

    /// Errors stay on screen longer than confirmations
    fn lifetime(&self) -> Duration {
        match self {
            Self::Error => Duration::from_secs(6),
            Self::Warning => Duration::from_secs(4),
            Self::Info | Self::Success => Duration::from_secs(3),
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    created_at: Instant,
    lifetime: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            lifetime: notification_type.lifetime(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.lifetime
    }
}

impl Widget for &Notification {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification_type.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.notification_type.title())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Notifications waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: VecDeque<Notification>,
}

impl NotificationQueue {
    const MAX_PENDING: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification, dropping the oldest when the queue is full
    pub fn push(&mut self, notification: Notification) {
        if self.notifications.len() == Self::MAX_PENDING {
            self.notifications.pop_front();
        }
        self.notifications.push_back(notification);
    }

    /// Drop the front notification once it has been shown long enough
    pub fn remove_expired(&mut self) {
        while self.notifications.front().is_some_and(|n| n.is_expired()) {
            self.notifications.pop_front();
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    /// Most recently pushed notification
    pub fn latest(&self) -> Option<&Notification> {
        self.notifications.back()
    }

    pub fn dismiss(&mut self) {
        self.notifications.pop_front();
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

/// Area for a toast in the top-right corner of `area`
pub fn notification_area(area: Rect, message: &str) -> Rect {
    let width = 44.min(area.width);
    let inner_width = width.saturating_sub(2).max(1) as usize;
    let lines = message.chars().count().div_ceil(inner_width).max(1) as u16;
    let height = (lines + 2).min(area.height);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_types() {
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Error.color(), Color::Red);
        assert!(NotificationType::Error.lifetime() > NotificationType::Success.lifetime());
    }

    #[test]
    fn test_queue_order_and_limit() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        for i in 0..7 {
            queue.push(Notification::info(format!("n{}", i)));
        }

        assert_eq!(queue.len(), NotificationQueue::MAX_PENDING);
        assert_eq!(queue.current().unwrap().message, "n2");
        assert_eq!(queue.latest().unwrap().message, "n6");

        queue.dismiss();
        assert_eq!(queue.current().unwrap().message, "n3");
    }

    #[test]
    fn test_expired_notifications_are_removed() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::error("gone").with_lifetime(Duration::ZERO));
        queue.push(Notification::success("kept"));

        queue.remove_expired();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().message, "kept");
    }

    #[test]
    fn test_notification_area_fits() {
        let area = Rect::new(0, 0, 100, 30);
        let toast = notification_area(area, "short");
        assert_eq!(toast.width, 44);
        assert_eq!(toast.height, 3);
        assert_eq!(toast.x, 56);

        let small = notification_area(Rect::new(0, 0, 20, 4), &"x".repeat(200));
        assert!(small.width <= 20 && small.height <= 4);
    }
}
