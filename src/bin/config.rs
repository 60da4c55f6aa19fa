// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use serde::Deserialize;
use std::path::Path;
use std::{fs, io};
use url::Url;

#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct ProviderConfig {
    pub(crate) url: Option<Url>,
    pub(crate) probe_delay_ms: Option<u64>,
}

/// Config holds the settings for the tester
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct Config {
    /// Wallet provider configuration
    #[serde(default)]
    pub(crate) provider: ProviderConfig,
    /// Block explorer base URL, transaction hashes are appended to it
    pub(crate) explorer: Option<Url>,
}

fn read_to_string<P: AsRef<Path>>(path: P) -> io::Result<Option<String>> {
    fs::read_to_string(&path)
        .map(Some)
        .or_else(|e| match e.kind() {
            io::ErrorKind::NotFound => Ok(None),
            _ => Err(e),
        })
}

impl Config {
    /// Attempt to load configuration from file
    pub fn load(profile: &Path) -> anyhow::Result<Config> {
        let profile = profile.join("config.toml");

        let global_config = dirs::home_dir().map(|mut home| {
            home.push(".config");
            home.push(env!("CARGO_BIN_NAME"));
            home.push("config.toml");
            home
        });

        let mut contents = read_to_string(&profile)?;
        if let (None, Some(global)) = (&contents, global_config) {
            contents = read_to_string(global)?;
        }
        let contents = contents.unwrap_or_else(|| {
            include_str!("../../default.config.toml").to_string()
        });

        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> anyhow::Result<Config> {
        Ok(toml::from_str(contents)?)
    }
}
