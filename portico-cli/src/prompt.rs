//! Line-oriented terminal front end for the login form.

use std::io::Write;

use log::debug;
use portico_lib::FormHandle;
use portico_lib::form::view::ids;
use portico_lib::form::{EMAIL_FIELD, FormView, PASSWORD_FIELD};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::watch;

use crate::secret;

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The controller finished after a successful login.
    Finished,
    /// Input ran out before the user logged in.
    EndOfInput,
}

/// One status line per field, e.g. `email     🔴 Required field`.
pub fn render_status(view: &FormView, field: &str) -> Option<String> {
    let node = view.node(&format!("{}-status", field))?;
    Some(format!(
        "{:<9} {} {}",
        field,
        node.text,
        node.title.unwrap_or_default()
    ))
}

/// The top-level error, if one is shown.
pub fn render_main_error(view: &FormView) -> Option<String> {
    view.node(ids::MAIN_ERROR).map(|node| format!("error: {}", node.text))
}

/// Prompt for both fields, submit when valid, and repeat until the login
/// finishes or input ends.
///
/// With `hide_password` the password is read from the terminal with echo
/// off. Otherwise it is read from `lines` like any other field and echoed if
/// `lines` is an interactive terminal.
pub async fn run<R>(
    lines: &mut Lines<R>,
    handle: &FormHandle,
    view: &mut watch::Receiver<FormView>,
    hide_password: bool,
) -> std::io::Result<Outcome>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        for field in [EMAIL_FIELD, PASSWORD_FIELD] {
            let hidden = hide_password && field == PASSWORD_FIELD;
            let Some(value) = ask(lines, field, hidden).await? else {
                return Ok(Outcome::EndOfInput);
            };

            view.mark_unchanged();
            handle.input(field, value);
            if view.changed().await.is_err() {
                return Ok(Outcome::Finished);
            }
            if let Some(line) = render_status(&view.borrow_and_update(), field) {
                println!("{}", line);
            }
        }

        if !view.borrow().can_submit {
            println!("Fix the fields above and try again.");
            continue;
        }

        view.mark_unchanged();
        handle.submit();
        println!("Signing in...");

        loop {
            if view.changed().await.is_err() {
                return Ok(Outcome::Finished);
            }
            let current = view.borrow_and_update().clone();
            if current.is_submitting {
                debug!("Still waiting for authentication");
                continue;
            }
            if let Some(line) = render_main_error(&current) {
                println!("{}", line);
            }
            break;
        }
    }
}

async fn ask<R>(lines: &mut Lines<R>, field: &str, hidden: bool) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    print!("{}: ", field);
    std::io::stdout().flush()?;

    if !hidden {
        return lines.next_line().await;
    }
    let value = tokio::task::spawn_blocking(secret::read_hidden_line)
        .await
        .map_err(std::io::Error::other)??;
    println!();
    Ok(value)
}
