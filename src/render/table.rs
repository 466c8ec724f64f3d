//! Bordered, fixed-width task table.
//!
//! Each task takes one row per display line of its content. The first row
//! carries the number, date, time and the two color cells; continuation rows
//! leave those cells blank. A border row closes every task block.

use std::fmt::Write;

use chrono::NaiveDate;
use crossterm::style::Stylize;

use crate::render::colors::{priority_color, urgency_color};
use crate::task::{format_time, Task};

/// Width of the content column, in characters.
pub const CONTENT_WIDTH: usize = 44;

const DATE_WIDTH: usize = 12;
const TIME_WIDTH: usize = 7;

/// Width of the number column for a list of `count` tasks.
pub fn index_width(count: usize) -> usize {
    if count <= 10 {
        3
    } else {
        4
    }
}

/// Split content into display lines: first on embedded newlines, then into
/// chunks of at most `width` characters.
pub fn wrap_content(content: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in content.split('\n') {
        let chars: Vec<char> = segment.chars().collect();
        if chars.is_empty() {
            lines.push(String::new());
            continue;
        }
        lines.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    lines
}

fn border(idx_w: usize) -> String {
    format!(
        "+{}+{}+{}+-+-+{}+\n",
        "-".repeat(idx_w),
        "-".repeat(DATE_WIDTH),
        "-".repeat(TIME_WIDTH),
        "-".repeat(CONTENT_WIDTH)
    )
}

/// Render `tasks` as a table, classifying urgency against `today`.
pub fn render_table(tasks: &[Task], today: NaiveDate) -> String {
    let idx_w = index_width(tasks.len());
    let border = border(idx_w);
    let mut out = String::new();

    out.push_str(&border);
    let _ = writeln!(
        out,
        "|{:^idx_w$}|{:^DATE_WIDTH$}|{:^TIME_WIDTH$}|P|U|{:^CONTENT_WIDTH$}|",
        "No", "Date", "Time", "Task"
    );
    out.push_str(&border);

    for (i, task) in tasks.iter().enumerate() {
        let lines = wrap_content(&task.content, CONTENT_WIDTH);
        let priority = " ".on(priority_color(task.priority));
        let urgency = " ".on(urgency_color(task.urgency(today)));
        for (n, line) in lines.iter().enumerate() {
            if n == 0 {
                let _ = writeln!(
                    out,
                    "|{:^idx_w$}|{:^DATE_WIDTH$}|{:^TIME_WIDTH$}|{}|{}|{:<CONTENT_WIDTH$}|",
                    i + 1,
                    task.date.format("%Y-%m-%d").to_string(),
                    format_time(task.time),
                    priority,
                    urgency,
                    line
                );
            } else {
                let _ = writeln!(
                    out,
                    "|{:idx_w$}|{:DATE_WIDTH$}|{:TIME_WIDTH$}| | |{:<CONTENT_WIDTH$}|",
                    "", "", "", line
                );
            }
        }
        out.push_str(&border);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Priority;
    use crate::render::colors::{DUE_TODAY, IN_TIME, LOW, NORMAL, OVERDUE};
    use chrono::NaiveTime;
    use crossterm::style::Color;

    fn task(content: &str) -> Task {
        Task::new(
            content.to_string(),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            Priority::Normal,
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_wrap_exact_width_is_one_line() {
        let content = "a".repeat(44);
        assert_eq!(wrap_content(&content, CONTENT_WIDTH), vec![content.clone()]);
    }

    #[test]
    fn test_wrap_splits_at_width() {
        let content = format!("{}b", "a".repeat(44));
        assert_eq!(wrap_content(&content, CONTENT_WIDTH), vec!["a".repeat(44), "b".to_string()]);
    }

    #[test]
    fn test_wrap_breaks_on_newline_first() {
        let content = format!("short\n{}", "c".repeat(50));
        assert_eq!(
            wrap_content(&content, CONTENT_WIDTH),
            vec!["short".to_string(), "c".repeat(44), "c".repeat(6)]
        );
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        let content = "é".repeat(45);
        let lines = wrap_content(&content, CONTENT_WIDTH);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), 44);
    }

    #[test]
    fn test_index_width() {
        assert_eq!(index_width(1), 3);
        assert_eq!(index_width(10), 3);
        assert_eq!(index_width(11), 4);
        assert_eq!(index_width(99), 4);
        assert_eq!(index_width(100), 4);
    }

    #[test]
    fn test_table_layout() {
        let tasks = vec![task("first"), task(&format!("second\n{}", "x".repeat(45)))];
        let table = render_table(&tasks, today());
        let lines: Vec<&str> = table.lines().collect();
        let border = "+---+------------+-------+-+-+--------------------------------------------+";

        // border, header, border, task 1 row, border, task 2 rows (3), border
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], border);
        assert!(lines[1].contains("No") && lines[1].contains("Date") && lines[1].contains("Task"));
        assert_eq!(lines[2], border);
        assert!(lines[3].starts_with("| 1 | 2024-04-01 | 08:00 |"));
        assert!(lines[3].ends_with(&format!("|{:<44}|", "first")));
        assert_eq!(lines[4], border);
        assert!(lines[5].starts_with("| 2 |"));
        assert!(lines[5].ends_with(&format!("|{:<44}|", "second")));
        assert_eq!(lines[6], format!("|   |            |       | | |{}|", "x".repeat(44)));
        assert_eq!(lines[7], format!("|   |            |       | | |{:<44}|", "x"));
        assert_eq!(lines[8], border);
    }

    #[test]
    fn test_table_widens_index_past_ten_tasks() {
        let tasks: Vec<Task> = (0..11).map(|_| task("t")).collect();
        let table = render_table(&tasks, today());
        assert!(table.starts_with("+----+"));
        assert!(table.contains("| 11 |"));
    }

    #[test]
    fn test_color_cells_follow_priority_and_urgency() {
        let due = |day: u32, priority: Priority| {
            Task::new(
                format!("day {day}"),
                NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
                NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                priority,
            )
        };
        let tasks = vec![due(1, Priority::Normal), due(2, Priority::Low), due(3, Priority::Normal)];
        let table = render_table(&tasks, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        let rows: Vec<&str> = table.lines().filter(|l| l.contains("|day ")).collect();
        let cells = |p: Color, u: Color| format!("|{}|{}|", " ".on(p), " ".on(u));

        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains(&cells(NORMAL, OVERDUE)), "{}", rows[0]);
        assert!(rows[1].contains(&cells(LOW, DUE_TODAY)), "{}", rows[1]);
        assert!(rows[2].contains(&cells(NORMAL, IN_TIME)), "{}", rows[2]);
    }
}
