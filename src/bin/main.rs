// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

mod args;
mod command;
mod config;
mod interactive;
mod menu;
mod notifier;
mod prompt;
mod settings;

use std::sync::Arc;

use anyhow::{anyhow, bail};
use clap::Parser;
use tracing::info;

use pokt_tester::{Connection, Gate, HttpProvider};

use crate::args::WalletArgs;
use crate::command::Command;
use crate::config::Config;
use crate::notifier::TerminalNotifier;
use crate::settings::Settings;

/// The gate as wired by this binary
pub(crate) type Tester = Gate<HttpProvider, TerminalNotifier>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(err) = exec().await {
        // display the error message (if any)
        println!("{}", err);
        // give cursor back to the user
        prompt::show_cursor()?;
    }
    Ok(())
}

async fn exec() -> anyhow::Result<()> {
    // parse user args
    let args = WalletArgs::parse();
    let cmd = args.command.clone();

    // load configuration (or use default)
    let builder = Settings::args(args)?;
    let cfg = Config::load(builder.profile())?;

    // merge static config with parsed args
    let settings = builder.config(cfg);

    settings.logging.init()?;

    if let Some(Command::Settings) = cmd {
        println!("{}", settings);
        return Ok(());
    }

    let provider = settings.provider.clone().map(|url| {
        let provider = HttpProvider::new(url);
        info!(url = %provider.url(), "using wallet provider bridge");
        Arc::new(provider)
    });
    let notifier = Arc::new(TerminalNotifier::new(cmd.is_none()));
    let mut gate = Tester::new(provider, notifier)
        .with_probe_delay(settings.probe_delay);

    // get command or default to interactive mode
    match cmd {
        None => interactive::run_loop(&mut gate, &settings).await,
        Some(cmd) => run_headless(&mut gate, cmd).await,
    }
}

/// Connects to the wallet and runs a single command
async fn run_headless(gate: &mut Tester, cmd: Command) -> anyhow::Result<()> {
    gate.probe().await;
    if gate.connection() == Connection::Unavailable {
        bail!("Wallet is not available.");
    }

    gate.connect().await;
    let panel = gate
        .panel_mut()
        .ok_or_else(|| anyhow!("Couldn't connect to the wallet"))?;

    if let Some(res) = cmd.run(panel).await {
        println!("{}", res);
    }
    Ok(())
}
