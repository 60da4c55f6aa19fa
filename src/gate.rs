// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::notify::{self, Notifier};
use crate::panel::AccountPanel;
use crate::provider::Provider;
use crate::request::{self, Method};
use crate::PROBE_DELAY;

/// Where the gate stands with the wallet provider
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Connection {
    /// Provider presence hasn't been checked yet
    Unknown,
    /// No provider was found
    Unavailable,
    /// A provider is present but no account is connected
    Disconnected,
    /// Connected to the given account address
    Connected(String),
}

/// What a front end should render for the current connection
pub enum View<'a, P, N> {
    /// Nothing, availability is still unknown
    Blank,
    /// The "wallet is not available" message
    Unavailable,
    /// A prompt to connect the wallet
    Connect,
    /// The account panel
    Panel(&'a AccountPanel<P, N>),
}

enum Stage<P, N> {
    Unknown,
    Unavailable,
    Disconnected,
    Connected(Box<AccountPanel<P, N>>),
}

/// Guards access to the account panel behind provider detection and an
/// explicit connect action
pub struct Gate<P, N> {
    provider: Option<Arc<P>>,
    notifier: Arc<N>,
    probe_delay: Duration,
    stage: Stage<P, N>,
}

impl<P, N> Gate<P, N>
where
    P: Provider,
    N: Notifier,
{
    /// Creates a gate in the unknown state. `provider` is `None` when no
    /// wallet is installed.
    pub fn new(provider: Option<Arc<P>>, notifier: Arc<N>) -> Self {
        Self {
            provider,
            notifier,
            probe_delay: PROBE_DELAY,
            stage: Stage::Unknown,
        }
    }

    /// Overrides how long to wait before probing for the provider
    pub fn with_probe_delay(mut self, delay: Duration) -> Self {
        self.probe_delay = delay;
        self
    }

    /// Waits the probe delay, then records whether a provider is present
    pub async fn probe(&mut self) {
        if !matches!(self.stage, Stage::Unknown) {
            return;
        }

        sleep(self.probe_delay).await;

        self.stage = match self.provider {
            Some(_) => Stage::Disconnected,
            None => Stage::Unavailable,
        };
        debug!(connection = ?self.connection(), "provider probed");
    }

    /// Requests the provider's accounts and connects the first one
    ///
    /// Does nothing unless the gate is disconnected. Failures are reported
    /// to the user and leave the gate disconnected.
    pub async fn connect(&mut self) {
        let provider = match (&self.stage, &self.provider) {
            (Stage::Disconnected, Some(provider)) => provider.clone(),
            _ => return,
        };

        let accounts = provider
            .send(Method::RequestAccounts, vec![])
            .await
            .and_then(|v| {
                request::decode::<Vec<String>>(Method::RequestAccounts, v)
            });

        let address = match accounts {
            Ok(accounts) => accounts.into_iter().next(),
            Err(err) => {
                notify::report(
                    self.notifier.as_ref(),
                    Method::RequestAccounts,
                    &err,
                );
                return;
            }
        };

        match address {
            Some(address) => {
                info!(%address, "wallet connected");
                let panel =
                    AccountPanel::mount(address, provider, self.notifier.clone())
                        .await;
                self.stage = Stage::Connected(Box::new(panel));
            }
            None => warn!("provider returned no accounts"),
        }
    }

    /// Current connection state
    pub fn connection(&self) -> Connection {
        match &self.stage {
            Stage::Unknown => Connection::Unknown,
            Stage::Unavailable => Connection::Unavailable,
            Stage::Disconnected => Connection::Disconnected,
            Stage::Connected(panel) => {
                Connection::Connected(panel.address().to_owned())
            }
        }
    }

    /// What to render for the current state
    pub fn view(&self) -> View<'_, P, N> {
        match &self.stage {
            Stage::Unknown => View::Blank,
            Stage::Unavailable => View::Unavailable,
            Stage::Disconnected => View::Connect,
            Stage::Connected(panel) => View::Panel(&**panel),
        }
    }

    /// The account panel, present only while connected
    pub fn panel(&self) -> Option<&AccountPanel<P, N>> {
        match &self.stage {
            Stage::Connected(panel) => Some(&**panel),
            _ => None,
        }
    }

    /// Mutable access to the account panel, present only while connected
    pub fn panel_mut(&mut self) -> Option<&mut AccountPanel<P, N>> {
        match &mut self.stage {
            Stage::Connected(panel) => Some(&mut **panel),
            _ => None,
        }
    }
}
