// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::path::PathBuf;

use clap::Parser;
use url::Url;

use crate::command::Command;
use crate::settings::{LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[clap(version)]
#[clap(name = "POKT Wallet Tester")]
#[clap(about = "Exercise a POKT wallet provider from your terminal", long_about = None)]
pub(crate) struct WalletArgs {
    /// Directory holding config.toml [default: `$HOME/.pokt_tester`]
    #[clap(long, value_name = "DIR")]
    pub profile: Option<PathBuf>,

    /// URL of the wallet provider bridge
    #[clap(short, long, env = "POKT_PROVIDER_URL", value_name = "URL")]
    pub provider: Option<Url>,

    /// Milliseconds to wait before looking for the provider
    #[clap(long, value_name = "MS")]
    pub probe_delay: Option<u64>,

    /// Output log level
    #[clap(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Logging output type
    #[clap(long, value_enum, default_value_t = LogFormat::Coloured)]
    pub log_type: LogFormat,

    /// Command to run, the interactive session starts when omitted
    #[clap(subcommand)]
    pub command: Option<Command>,
}
