//! Command implementations for the interactive session.
//!
//! Each handler works on the in-memory [`TaskList`] and talks to the user
//! through a [`Console`]. Nothing is written to disk here; the caller saves
//! the list once the session ends.

use std::io::{BufRead, Write};

use chrono::{NaiveDate, Utc};

use crate::db::TaskList;
use crate::error::Result;
use crate::fields::{parse_choice, Action, Field};
use crate::prompt::Console;
use crate::render::table::render_table;
use crate::task::Task;

const NO_TASKS: &str = "No tasks have been input";
const BLANK_TASK: &str = "The task is blank";

/// Today's date at UTC+0, the reference for urgency tags.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Run the command loop until `end`.
pub fn run_session<R: BufRead, W: Write>(list: &mut TaskList, console: &mut Console<R, W>) -> Result<()> {
    loop {
        let answer = console.ask("Action (add/print/edit/delete/end): ")?;
        match parse_choice::<Action>(&answer) {
            Some(Action::Add) => cmd_add(list, console)?,
            Some(Action::Print) => cmd_print(list, console, today_utc())?,
            Some(Action::Edit) => cmd_edit(list, console, today_utc())?,
            Some(Action::Delete) => cmd_delete(list, console, today_utc())?,
            Some(Action::End) => {
                console.say("Goodbye!")?;
                return Ok(());
            }
            None => console.say("The input action is invalid")?,
        }
    }
}

/// Add a new task: priority, date, time, then content.
pub fn cmd_add<R: BufRead, W: Write>(list: &mut TaskList, console: &mut Console<R, W>) -> Result<()> {
    let priority = console.ask_priority()?;
    let date = console.ask_date()?;
    let time = console.ask_time()?;
    let content = console.ask_content()?;
    if content.is_empty() {
        console.say(BLANK_TASK)?;
        return Ok(());
    }
    list.push(Task::new(content, date, time, priority));
    log::debug!("Added task {}", list.len());
    Ok(())
}

/// Print the task table, or a notice when there is nothing to show.
pub fn cmd_print<R: BufRead, W: Write>(
    list: &TaskList,
    console: &mut Console<R, W>,
    today: NaiveDate,
) -> Result<()> {
    if list.is_empty() {
        console.say(NO_TASKS)?;
        return Ok(());
    }
    console.write_raw(&render_table(&list.tasks, today))
}

/// Shared precondition of edit and delete: the list must have something to
/// act on. Shows the table when it does.
fn show_for_selection<R: BufRead, W: Write>(
    list: &TaskList,
    console: &mut Console<R, W>,
    today: NaiveDate,
) -> Result<bool> {
    if list.is_empty() {
        console.say(NO_TASKS)?;
        return Ok(false);
    }
    console.write_raw(&render_table(&list.tasks, today))?;
    Ok(true)
}

fn ask_task_number<R: BufRead, W: Write>(list: &TaskList, console: &mut Console<R, W>) -> Result<usize> {
    console.ask_until("Task number: ", "Invalid task number", |s| list.parse_number(s))
}

/// Delete one task chosen by its 1-based number.
pub fn cmd_delete<R: BufRead, W: Write>(
    list: &mut TaskList,
    console: &mut Console<R, W>,
    today: NaiveDate,
) -> Result<()> {
    if !show_for_selection(list, console, today)? {
        return Ok(());
    }
    let number = ask_task_number(list, console)?;
    list.remove(number);
    log::debug!("Deleted task {number}");
    console.say("The task is deleted.")
}

/// Change a single field of one task.
pub fn cmd_edit<R: BufRead, W: Write>(
    list: &mut TaskList,
    console: &mut Console<R, W>,
    today: NaiveDate,
) -> Result<()> {
    if !show_for_selection(list, console, today)? {
        return Ok(());
    }
    let number = ask_task_number(list, console)?;
    let field = console.ask_until("Field (priority/date/time/task): ", "Invalid field", parse_choice::<Field>)?;

    // The number was range-checked above.
    let Some(task) = list.get_mut(number) else {
        return Ok(());
    };
    match field {
        Field::Priority => task.priority = console.ask_priority()?,
        Field::Date => task.date = console.ask_date()?,
        Field::Time => task.time = console.ask_time()?,
        Field::Task => {
            let content = console.ask_content()?;
            if content.is_empty() {
                return console.say(BLANK_TASK);
            }
            task.content = content;
        }
    }
    log::debug!("Edited {field:?} of task {number}");
    console.say("The task is changed.")
}
