// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::io::stdout;

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    ExecutableCommand,
};
use requestty::{OnEsc, Question};

use crate::command::{self, Command};

fn is_number(value: &str) -> bool {
    value.trim().parse::<u64>().is_ok()
}

/// Request free text, prefilled with what the user typed last time
pub(crate) fn request_text(message: &str, last: &str) -> Result<String> {
    let q = Question::input("text")
        .message(message.to_string())
        .on_esc(OnEsc::Terminate)
        .default(last.to_string())
        .build();

    let a = requestty::prompt_one(q)?;
    Ok(a.as_string().unwrap_or_default().to_string())
}

/// Request text that can't be left empty
pub(crate) fn request_required(message: &str, last: &str) -> Result<String> {
    let q = Question::input("text")
        .message(message.to_string())
        .on_esc(OnEsc::Terminate)
        .default(last.to_string())
        .validate_on_key(|s, _| !s.trim().is_empty())
        .validate(|s, _| {
            if s.trim().is_empty() {
                Err("This field is required".to_string())
            } else {
                Ok(())
            }
        })
        .build();

    let a = requestty::prompt_one(q)?;
    Ok(a.as_string().unwrap_or_default().trim().to_string())
}

/// Request a whole number, such as an amount of uPOKT or a block height
pub(crate) fn request_number(message: &str, last: &str) -> Result<u64> {
    let q = Question::input("number")
        .message(message.to_string())
        .on_esc(OnEsc::Terminate)
        .default(last.to_string())
        .validate_on_key(|s, _| is_number(s))
        .validate(|s, _| {
            if is_number(s) {
                Ok(())
            } else {
                Err("Please introduce a whole number".to_string())
            }
        })
        .build();

    let a = requestty::prompt_one(q)?;
    Ok(a.as_string().unwrap_or_default().trim().parse()?)
}

/// Asks the user for confirmation
pub(crate) fn ask_confirm() -> bool {
    let question = requestty::Question::confirm("confirm")
        .message("Transaction ready. Proceed?")
        .on_esc(OnEsc::Terminate)
        .build();

    requestty::prompt_one(question)
        .map(|answer| answer.as_bool())
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Request user confirmation for commands that broadcast a transaction
pub(crate) fn confirm(cmd: &Command, address: &str) -> bool {
    match command::summary(cmd, address) {
        Some(summary) => {
            println!("{}", summary);
            ask_confirm()
        }
        None => true,
    }
}

/// Request block explorer open
pub(crate) fn launch_explorer(url: String) -> Result<()> {
    let q = requestty::Question::confirm("launch")
        .message("Launch block explorer?")
        .on_esc(OnEsc::Terminate)
        .default(false)
        .build();

    let a = requestty::prompt_one(q)?;
    let open = a.as_bool().unwrap_or_default();
    if open {
        open::that(url)?;
    }
    Ok(())
}

/// Shows the terminal cursor
pub(crate) fn show_cursor() -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(Show)?;
    Ok(())
}

/// Hides the terminal cursor
pub(crate) fn hide_cursor() -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(Hide)?;
    Ok(())
}
