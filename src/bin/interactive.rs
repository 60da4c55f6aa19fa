// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use pokt_tester::{AccountPanel, Connection, Notifier, Provider, View};

use crate::command::{Command, RunResult};
use crate::menu::Menu;
use crate::prompt;
use crate::settings::Settings;
use crate::Tester;

/// Run the interactive UX loop until the user exits
pub(crate) async fn run_loop(
    gate: &mut Tester,
    settings: &Settings,
) -> anyhow::Result<()> {
    println!("POKT Wallet Tester");

    loop {
        render(gate);

        match gate.connection() {
            Connection::Unknown => {
                prompt::hide_cursor()?;
                gate.probe().await;
                prompt::show_cursor()?;
            }
            Connection::Unavailable => return Ok(()),
            Connection::Disconnected => match menu_connect()? {
                ConnectOp::Connect => {
                    prompt::hide_cursor()?;
                    gate.connect().await;
                    prompt::show_cursor()?;
                }
                ConnectOp::Exit => return Ok(()),
            },
            Connection::Connected(_) => {
                let panel = match gate.panel_mut() {
                    Some(panel) => panel,
                    None => continue,
                };

                match menu_op(panel)? {
                    PanelOp::Run(cmd) => {
                        // request confirmation before running
                        if !prompt::confirm(&cmd, panel.address()) {
                            continue;
                        }

                        prompt::hide_cursor()?;
                        let result = cmd.run(panel).await;
                        prompt::show_cursor()?;

                        match result {
                            // the alert already carries the hash
                            Some(RunResult::Tx(hash)) => {
                                if let Some(explorer) = &settings.explorer {
                                    let url = explorer.join(&hash)?;
                                    println!("> URL: {}", url);
                                    prompt::launch_explorer(url.to_string())?;
                                }
                            }
                            Some(res) if !res.in_panel() => {
                                println!("\r{}\n", res)
                            }
                            Some(_) | None => (),
                        }
                    }
                    PanelOp::Refresh => {
                        prompt::hide_cursor()?;
                        panel.refresh().await;
                        prompt::show_cursor()?;
                    }
                    PanelOp::Exit => return Ok(()),
                }
            }
        }
    }
}

/// Prints what the gate currently shows
fn render(gate: &Tester) {
    match gate.view() {
        View::Blank => (),
        View::Unavailable => println!("Wallet is not available."),
        View::Connect => {
            println!("Wallet is available! Connect to it to get started.")
        }
        View::Panel(panel) => println!("\r{}\n", panel),
    }
}

#[derive(PartialEq, Eq, Hash, Debug, Clone)]
enum ConnectOp {
    Connect,
    Exit,
}

fn menu_connect() -> anyhow::Result<ConnectOp> {
    Menu::new()
        .add(ConnectOp::Connect, "Connect to wallet!")
        .separator()
        .add(ConnectOp::Exit, "Exit")
        .select("What would you like to do?")
}

#[derive(PartialEq, Eq, Hash, Debug, Clone)]
enum PanelOp {
    Run(Box<Command>),
    Refresh,
    Exit,
}

#[derive(PartialEq, Eq, Hash, Clone, Debug)]
enum CommandMenuItem {
    Send,
    Sign,
    Tx,
    Block,
    Stake,
    Refresh,
    Exit,
}

/// Allows the user to chose the operation to perform with the connected
/// account. Prompts start from the values last submitted, so a failed
/// request can be retried without typing everything again.
fn menu_op<P, N>(panel: &AccountPanel<P, N>) -> anyhow::Result<PanelOp>
where
    P: Provider,
    N: Notifier,
{
    use CommandMenuItem as CMI;

    let item = Menu::new()
        .add(CMI::Send, "Send Transaction")
        .add(CMI::Sign, "Sign Message")
        .add(CMI::Tx, "Get Transaction")
        .add(CMI::Block, "Get Block")
        .add(CMI::Stake, "Stake Node")
        .separator()
        .add(CMI::Refresh, "Refresh")
        .add(CMI::Exit, "Exit")
        .select("What would you like to do?")?;

    let cmd = match item {
        CMI::Send => Command::Send {
            to: prompt::request_required(
                "Recipient Address:",
                &panel.send.recipient,
            )?,
            amount: prompt::request_number(
                "Amount in uPOKT:",
                &panel.send.amount,
            )?,
            memo: prompt::request_text("Memo (optional):", &panel.send.memo)?,
        },
        CMI::Sign => Command::Sign {
            message: prompt::request_text("Message:", &panel.sign.message)?,
        },
        CMI::Tx => Command::Tx {
            hash: prompt::request_required(
                "Transaction Hash:",
                &panel.tx.hash,
            )?,
        },
        CMI::Block => Command::Block {
            height: prompt::request_number(
                "Block Height:",
                &panel.block.height,
            )?,
        },
        CMI::Stake => Command::Stake {
            amount: prompt::request_number(
                "Amount in uPOKT:",
                &panel.stake.amount,
            )?,
            chains: prompt::request_required(
                "Chains (comma separated):",
                &panel.stake.chains,
            )?,
            service_url: prompt::request_required(
                "Service URL:",
                &panel.stake.service_url,
            )?,
            operator_public_key: prompt::request_required(
                "Operator Public Key:",
                &panel.stake.operator_public_key,
            )?,
        },
        CMI::Refresh => return Ok(PanelOp::Refresh),
        CMI::Exit => return Ok(PanelOp::Exit),
    };

    Ok(PanelOp::Run(Box::new(cmd)))
}
