//! Color constants for the task table.

use crossterm::style::Color;

use crate::fields::{Priority, Urgency};

pub const CRITICAL: Color = Color::Red;
pub const HIGH: Color = Color::DarkYellow;
pub const NORMAL: Color = Color::DarkGreen;
pub const LOW: Color = Color::DarkBlue;

pub const OVERDUE: Color = Color::Red;
pub const DUE_TODAY: Color = Color::Yellow;
pub const IN_TIME: Color = Color::Green;

pub fn priority_color(p: Priority) -> Color {
    match p {
        Priority::Critical => CRITICAL,
        Priority::High => HIGH,
        Priority::Normal => NORMAL,
        Priority::Low => LOW,
    }
}

pub fn urgency_color(u: Urgency) -> Color {
    match u {
        Urgency::Overdue => OVERDUE,
        Urgency::DueToday => DUE_TODAY,
        Urgency::InTime => IN_TIME,
    }
}
