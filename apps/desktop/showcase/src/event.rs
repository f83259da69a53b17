//! Page events and the host's line-oriented command grammar.

use crate::error::ShowcaseError;

use common::ErrorLocation;
use widget_core::calculator::Key;
use widget_core::feedback::FeedbackField;
use widget_core::profile::FetchOutcome;
use widget_core::tasks::TaskId;

use std::panic::Location;

use tokio::sync::oneshot;

/// Everything that can happen on the page.
///
/// The page actor handles these strictly one at a time.
#[derive(Debug)]
pub enum PageEvent {
    /// Hamburger click
    NavToggle,
    /// Click on any nav link
    NavLink,
    CalculatorKey(Key),
    /// Typing into the task input
    TaskInput(String),
    /// Add button click
    TaskAdd,
    /// Keypress in the task input
    TaskKey(String),
    TaskDelete(TaskId),
    /// Delete by position, for hosts that have no ids
    TaskDeleteAt(usize),
    ProfileGenerate,
    /// The in-flight profile request settled
    ProfileSettled(FetchOutcome),
    FaqToggle(usize),
    FeedbackInput(FeedbackField, String),
    /// Star click
    FeedbackRate(u8),
    FeedbackSubmit,
    /// The success timer fired
    FeedbackHideSuccess,
    /// Acknowledged once every earlier event has been handled
    Flush(oneshot::Sender<()>),
    /// Tear the page down, abandoning any in-flight request
    Unmount,
}

/// Parse one host command line into page events.
///
/// Positions are 1-based, the way they read on screen:
///
/// ```text
/// nav                     toggle the menu
/// nav link                follow a nav link
/// calc 12 + 3 =           press keys (whitespace optional)
/// task input <text>       type into the task input
/// task add [text]         add, optionally typing first
/// task enter              press Enter in the task input
/// task delete <n>         delete the n-th task
/// profile                 generate a profile
/// faq <n>                 toggle the n-th panel
/// name|email|message <t>  fill a feedback field
/// rate <n>                click the n-th star
/// submit                  submit the feedback form
/// ```
///
/// A blank line yields no events.
#[track_caller]
pub fn parse_command(line: &str) -> Result<Vec<PageEvent>, ShowcaseError> {
    let line = line.trim();
    let (command, rest) = split_word(line);

    let events = match command {
        "" => Vec::new(),
        "nav" => match rest {
            "" => vec![PageEvent::NavToggle],
            "link" => vec![PageEvent::NavLink],
            other => return Err(command_error(format!("unknown nav action '{other}'"))),
        },
        "calc" => parse_keys(rest)?,
        "task" => parse_task(rest)?,
        "profile" => vec![PageEvent::ProfileGenerate],
        "faq" => vec![PageEvent::FaqToggle(parse_position(rest)?)],
        "name" => vec![PageEvent::FeedbackInput(FeedbackField::Name, rest.to_string())],
        "email" => vec![PageEvent::FeedbackInput(FeedbackField::Email, rest.to_string())],
        "message" => vec![PageEvent::FeedbackInput(
            FeedbackField::Message,
            rest.to_string(),
        )],
        "rate" => {
            let value = rest
                .parse::<u8>()
                .map_err(|e| command_error(format!("invalid rating '{rest}': {e}")))?;
            vec![PageEvent::FeedbackRate(value)]
        }
        "submit" => vec![PageEvent::FeedbackSubmit],
        other => return Err(command_error(format!("unknown command '{other}'"))),
    };

    Ok(events)
}

#[track_caller]
fn parse_task(rest: &str) -> Result<Vec<PageEvent>, ShowcaseError> {
    let (action, text) = split_word(rest);
    match action {
        "input" => Ok(vec![PageEvent::TaskInput(text.to_string())]),
        "add" if text.is_empty() => Ok(vec![PageEvent::TaskAdd]),
        "add" => Ok(vec![
            PageEvent::TaskInput(text.to_string()),
            PageEvent::TaskAdd,
        ]),
        "enter" => Ok(vec![PageEvent::TaskKey(String::from("Enter"))]),
        "delete" => Ok(vec![PageEvent::TaskDeleteAt(parse_position(text)?)]),
        other => Err(command_error(format!("unknown task action '{other}'"))),
    }
}

#[track_caller]
fn parse_keys(rest: &str) -> Result<Vec<PageEvent>, ShowcaseError> {
    rest.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            c.to_string()
                .parse::<Key>()
                .map(PageEvent::CalculatorKey)
                .map_err(|e| command_error(e.to_string()))
        })
        .collect()
}

/// 1-based position to index.
#[track_caller]
fn parse_position(text: &str) -> Result<usize, ShowcaseError> {
    match text.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position - 1),
        Ok(_) => Err(command_error(String::from("positions start at 1"))),
        Err(e) => Err(command_error(format!("invalid position '{text}': {e}"))),
    }
}

fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

#[track_caller]
fn command_error(message: String) -> ShowcaseError {
    ShowcaseError::Command {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
