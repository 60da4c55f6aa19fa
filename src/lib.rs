// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # POKT Tester Lib
//!
//! The `pokt_tester` library drives a POKT wallet provider through its
//! request/response contract and keeps the state a front end needs to
//! render the results.
//!
//! Clients build a [`Gate`] around an injected [`Provider`] and
//! [`Notifier`], probe it for availability, connect, and then operate the
//! [`AccountPanel`] it mounts: read chain, height, balance and public key,
//! send transactions, sign messages, look up transactions and blocks, and
//! stake nodes.

#![deny(missing_docs)]

mod error;
mod gate;
mod notify;
mod panel;
mod provider;

/// Request names and payload shapes understood by POKT wallet providers
pub mod request;

pub use error::Error;
pub use gate::{Connection, Gate, View};
pub use notify::Notifier;
pub use panel::{
    AccountPanel, BlockForm, Details, SendForm, SignForm, StakeForm, TxForm,
};
pub use provider::{HttpProvider, Provider};
pub use request::Method;

use std::time::Duration;

/// Delay before the gate checks whether a provider is present
pub const PROBE_DELAY: Duration = Duration::from_millis(100);
/// Denomination balances and amounts are expressed in
pub const DENOM: &str = "uPOKT";
