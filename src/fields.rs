//! Enumerations and field types for task management.
//!
//! This module defines the closed sets the interactive session works with:
//! task priorities, the derived urgency tag, the top-level actions and the
//! editable task fields.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Priority classification for task importance.
///
/// Persisted and typed in as single-letter codes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
pub enum Priority {
    #[serde(rename = "C")]
    #[value(name = "c")]
    Critical,
    #[serde(rename = "H")]
    #[value(name = "h")]
    High,
    #[serde(rename = "N")]
    #[value(name = "n")]
    Normal,
    #[serde(rename = "L")]
    #[value(name = "l")]
    Low,
}

/// How close a task is to its due date, relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Overdue,
    DueToday,
    InTime,
}

impl Urgency {
    /// Classify a due date by its whole-day distance from `today`.
    pub fn classify(due: NaiveDate, today: NaiveDate) -> Self {
        let delta = (due - today).num_days();
        if delta < 0 {
            Urgency::Overdue
        } else if delta == 0 {
            Urgency::DueToday
        } else {
            Urgency::InTime
        }
    }
}

/// Top-level commands accepted by the session loop.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Action {
    Add,
    Print,
    Edit,
    Delete,
    End,
}

/// Task fields that can be changed through `edit`.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Field {
    Priority,
    Date,
    Time,
    Task,
}

/// Case-insensitive lookup of a closed value set, ignoring surrounding whitespace.
pub fn parse_choice<T: ValueEnum>(input: &str) -> Option<T> {
    T::from_str(input.trim(), true).ok()
}
