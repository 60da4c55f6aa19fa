// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::args::WalletArgs;
use crate::config::Config;

#[derive(clap::ValueEnum, Debug, Clone)]
pub(crate) enum LogFormat {
    Json,
    Plain,
    Coloured,
}

#[derive(clap::ValueEnum, Debug, Clone)]
pub(crate) enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,
    /// Designates lower priority information.
    Debug,
    /// Designates useful information.
    Info,
    /// Designates hazardous situations.
    Warn,
    /// Designates very serious errors.
    Error,
}

#[derive(Debug)]
pub(crate) struct Logging {
    /// Max log level
    pub level: LogLevel,
    /// Log format
    pub format: LogFormat,
}

impl Logging {
    /// Installs the global subscriber. `RUST_LOG` takes precedence over
    /// the configured level.
    pub fn init(&self) -> anyhow::Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.to_string()));

        // logs go to stderr so they never garble the prompts
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        match self.format {
            LogFormat::Json => builder.json().try_init(),
            LogFormat::Plain => builder.with_ansi(false).try_init(),
            LogFormat::Coloured => builder.try_init(),
        }
        .map_err(|e| anyhow!("Logging error: {}", e))
    }
}

#[derive(Debug)]
pub(crate) struct Settings {
    pub logging: Logging,
    pub profile: PathBuf,
    pub provider: Option<Url>,
    pub probe_delay: Duration,
    pub explorer: Option<Url>,
}

pub(crate) struct SettingsBuilder {
    profile: PathBuf,
    args: WalletArgs,
}

impl SettingsBuilder {
    pub fn profile(&self) -> &Path {
        &self.profile
    }

    /// Merges the parsed args over the configuration file
    pub fn config(self, cfg: Config) -> Settings {
        let args = self.args;

        let logging = Logging {
            level: args.log_level,
            format: args.log_type,
        };

        let provider = args.provider.or(cfg.provider.url);
        let probe_delay = args
            .probe_delay
            .or(cfg.provider.probe_delay_ms)
            .map(Duration::from_millis)
            .unwrap_or(pokt_tester::PROBE_DELAY);

        Settings {
            logging,
            profile: self.profile,
            provider,
            probe_delay,
            explorer: cfg.explorer,
        }
    }
}

impl Settings {
    pub fn args(args: WalletArgs) -> anyhow::Result<SettingsBuilder> {
        let profile = match &args.profile {
            Some(dir) => dir.clone(),
            None => {
                let mut home = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Cannot get home dir"))?;
                home.push(".pokt_tester");
                home
            }
        };

        Ok(SettingsBuilder { profile, args })
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Json => "json",
                Self::Plain => "plain",
                Self::Coloured => "coloured",
            }
        )
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Trace => "trace",
                Self::Debug => "debug",
                Self::Info => "info",
                Self::Warn => "warn",
                Self::Error => "error",
            }
        )
    }
}

impl fmt::Display for Logging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logging: [{}] ({})", self.level, self.format)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "─".repeat(14);
        writeln!(f, "{separator}")?;
        writeln!(f, "Settings")?;
        writeln!(f, "{separator}")?;
        writeln!(f, "Profile: {}", self.profile.display())?;
        match &self.provider {
            Some(url) => writeln!(f, "Provider: {}", url)?,
            None => writeln!(f, "Provider: [Not set]")?,
        }
        writeln!(f, "Probe delay: {}ms", self.probe_delay.as_millis())?;
        match &self.explorer {
            Some(url) => writeln!(f, "Explorer: {}", url)?,
            None => writeln!(f, "Explorer: [Not set]")?,
        }
        writeln!(f, "{separator}")?;
        writeln!(f, "{}", self.logging)
    }
}
