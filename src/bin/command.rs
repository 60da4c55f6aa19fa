// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;

use clap::Subcommand;
use serde_json::Value;

use pokt_tester::{
    AccountPanel, BlockForm, Notifier, Provider, SendForm, SignForm,
    StakeForm, TxForm, DENOM,
};

/// Requests that can be run against the connected account
#[derive(PartialEq, Eq, Hash, Clone, Subcommand, Debug)]
pub(crate) enum Command {
    /// Show chain, height and balance of the connected account
    Status,

    /// Send uPOKT to another address
    Send {
        /// Recipient address
        #[clap(short, long)]
        to: String,

        /// Amount of uPOKT to send
        #[clap(short, long)]
        amount: u64,

        /// Optional memo
        #[clap(short, long, default_value = "")]
        memo: String,
    },

    /// Sign a message with the connected account
    Sign {
        /// Message to sign
        #[clap(short, long)]
        message: String,
    },

    /// Look up a transaction by hash
    Tx {
        /// Transaction hash
        #[clap(long)]
        hash: String,
    },

    /// Look up a block by height
    Block {
        /// Block height
        #[clap(long)]
        height: u64,
    },

    /// Stake a servicer node
    Stake {
        /// Amount of uPOKT to stake
        #[clap(short, long)]
        amount: u64,

        /// Comma separated relay chain identifiers (e.g. 0001,0021)
        #[clap(short, long)]
        chains: String,

        /// Public URL the node serves relays on
        #[clap(short, long)]
        service_url: String,

        /// Public key of the node operator
        #[clap(short, long)]
        operator_public_key: String,
    },

    /// Show current settings
    Settings,
}

impl Command {
    /// Runs the command against the panel's account
    ///
    /// Returns `None` when the request failed, the panel's notifier has
    /// already told the user why.
    pub(crate) async fn run<P, N>(
        self,
        panel: &mut AccountPanel<P, N>,
    ) -> Option<RunResult>
    where
        P: Provider,
        N: Notifier,
    {
        match self {
            // mounting the panel already loaded the account
            Command::Status => Some(RunResult::Status(panel.to_string())),
            Command::Send { to, amount, memo } => {
                panel.send = SendForm {
                    recipient: to,
                    amount: amount.to_string(),
                    memo,
                };
                if !panel.submit_send().await {
                    return None;
                }
                panel.details().last_hash.clone().map(RunResult::Tx)
            }
            Command::Sign { message } => {
                panel.sign = SignForm { message };
                if !panel.submit_sign().await {
                    return None;
                }
                Some(RunResult::Signature(panel.details().signature.clone()))
            }
            Command::Tx { hash } => {
                panel.tx = TxForm { hash };
                if !panel.submit_tx().await {
                    return None;
                }
                let tx = panel.details().transaction.clone();
                Some(RunResult::Transaction(tx))
            }
            Command::Block { height } => {
                panel.block = BlockForm {
                    height: height.to_string(),
                };
                if !panel.submit_block().await {
                    return None;
                }
                Some(RunResult::Block(panel.details().block.clone()))
            }
            Command::Stake {
                amount,
                chains,
                service_url,
                operator_public_key,
            } => {
                panel.stake = StakeForm {
                    amount: amount.to_string(),
                    chains,
                    service_url,
                    operator_public_key,
                };
                if !panel.submit_stake().await {
                    return None;
                }
                panel.details().last_hash.clone().map(RunResult::Tx)
            }
            // settings never reach a wallet
            Command::Settings => None,
        }
    }
}

/// Possible results of running a command
pub(crate) enum RunResult {
    Status(String),
    Tx(String),
    Signature(String),
    Transaction(Option<Value>),
    Block(Option<Value>),
}

impl RunResult {
    /// Whether rendering the panel already shows this result
    pub(crate) fn in_panel(&self) -> bool {
        use RunResult::*;
        matches!(
            self,
            Status(_) | Signature(_) | Transaction(Some(_)) | Block(Some(_))
        )
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RunResult::*;
        match self {
            Status(panel) => write!(f, "{}", panel),
            Tx(hash) => write!(f, "> Transaction hash: {}", hash),
            Signature(signature) => write!(f, "> Signature: {}", signature),
            Transaction(Some(tx)) => write!(f, "{}", pretty(tx)?),
            Transaction(None) => write!(f, "> Transaction not found"),
            Block(Some(block)) => write!(f, "{}", pretty(block)?),
            Block(None) => write!(f, "> Block not found"),
        }
    }
}

fn pretty(value: &Value) -> Result<String, fmt::Error> {
    serde_json::to_string_pretty(value).map_err(|_| fmt::Error)
}

/// One line summary of a command, used when asking for confirmation
pub(crate) fn summary(cmd: &Command, address: &str) -> Option<String> {
    match cmd {
        Command::Send { to, amount, memo } => {
            let mut s = format!(
                "   > Send from = {}\n   > Recipient = {}\n   > Amount to transfer = {} {}",
                address, to, amount, DENOM
            );
            if !memo.is_empty() {
                s.push_str(&format!("\n   > Memo = {}", memo));
            }
            Some(s)
        }
        Command::Stake {
            amount,
            chains,
            service_url,
            operator_public_key,
        } => Some(format!(
            "   > Stake from {}\n   > Amount to stake = {} {}\n   > Chains = {}\n   > Service URL = {}\n   > Operator = {}",
            address, amount, DENOM, chains, service_url, operator_public_key
        )),
        _ => None,
    }
}
