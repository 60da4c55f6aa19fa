// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::notify::{self, Notifier};
use crate::provider::Provider;
use crate::request::{
    self, AddressQuery, BalanceResponse, BlockQuery, ChainResponse,
    HashResponse, HeightResponse, Method, PublicKeyResponse,
    SendTransaction, SignMessage, SignatureResponse, StakeNode, TxQuery,
};
use crate::{Error, DENOM};

/// Fields of the send transaction form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendForm {
    /// Recipient address
    pub recipient: String,
    /// Amount in uPOKT
    pub amount: String,
    /// Optional memo
    pub memo: String,
}

/// Fields of the sign message form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignForm {
    /// Message to sign
    pub message: String,
}

/// Fields of the transaction lookup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxForm {
    /// Transaction hash
    pub hash: String,
}

/// Fields of the block lookup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockForm {
    /// Block height
    pub height: String,
}

/// Fields of the stake node form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StakeForm {
    /// Amount to stake in uPOKT
    pub amount: String,
    /// Comma separated relay chain identifiers
    pub chains: String,
    /// Public URL of the node
    pub service_url: String,
    /// Public key of the node operator
    pub operator_public_key: String,
}

impl StakeForm {
    /// Relay chains as sent to the provider
    pub fn chain_list(&self) -> Vec<String> {
        self.chains.split(',').map(str::to_owned).collect()
    }
}

/// Results shown by the panel. Every fetch overwrites its own field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Details {
    /// Chain identifier
    pub chain: String,
    /// Current block height
    pub height: u64,
    /// Account balance in uPOKT
    pub balance: u64,
    /// Account public key
    pub public_key: String,
    /// Last signature produced
    pub signature: String,
    /// Last transaction fetched
    pub transaction: Option<Value>,
    /// Last block fetched
    pub block: Option<Value>,
    /// Hash of the last transaction broadcast from this panel
    pub last_hash: Option<String>,
}

impl Details {
    /// Balance with its denomination
    pub fn balance_text(&self) -> String {
        format!("{} {}", self.balance, DENOM)
    }

    /// Height, or nothing until a non-zero height is known
    pub fn height_text(&self) -> String {
        match self.height {
            0 => String::new(),
            h => h.to_string(),
        }
    }
}

/// Everything that can be done with a connected account
pub struct AccountPanel<P, N> {
    address: String,
    provider: Arc<P>,
    notifier: Arc<N>,
    details: Details,
    /// Send transaction form
    pub send: SendForm,
    /// Sign message form
    pub sign: SignForm,
    /// Transaction lookup form
    pub tx: TxForm,
    /// Block lookup form
    pub block: BlockForm,
    /// Stake node form
    pub stake: StakeForm,
}

impl<P, N> AccountPanel<P, N>
where
    P: Provider,
    N: Notifier,
{
    /// Creates the panel for `address` and loads its account details
    pub async fn mount(
        address: String,
        provider: Arc<P>,
        notifier: Arc<N>,
    ) -> Self {
        let mut panel = Self {
            address,
            provider,
            notifier,
            details: Details::default(),
            send: SendForm::default(),
            sign: SignForm::default(),
            tx: TxForm::default(),
            block: BlockForm::default(),
            stake: StakeForm::default(),
        };
        panel.refresh().await;
        panel
    }

    /// Active account address
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Latest results
    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Switches to another account, reloading details if it changed
    pub async fn set_address(&mut self, address: String) {
        if address != self.address {
            self.address = address;
            self.refresh().await;
        }
    }

    /// Fetches chain, height, balance and public key concurrently
    pub async fn refresh(&mut self) {
        debug!(address = %self.address, "refreshing account details");

        let query = AddressQuery {
            address: self.address.clone(),
        };
        let (chain, height, balance, public_key) = futures::join!(
            self.request(Method::Chain),
            self.request(Method::Height),
            self.request_with(Method::Balance, &query),
            self.request_with(Method::PublicKey, &query),
        );

        let chain = chain.and_then(|v| {
            request::decode_or_default::<ChainResponse>(Method::Chain, v)
        });
        if let Some(res) = quietly(Method::Chain, chain) {
            self.details.chain = res.chain.unwrap_or_default();
        }

        let height = height.and_then(|v| {
            request::decode_or_default::<HeightResponse>(Method::Height, v)
        });
        if let Some(res) = self.checked(Method::Height, height) {
            self.details.height = res.height.unwrap_or_default();
        }

        let balance = balance.and_then(|v| {
            request::decode_or_default::<BalanceResponse>(Method::Balance, v)
        });
        if let Some(res) = self.checked(Method::Balance, balance) {
            self.details.balance = res.balance.unwrap_or_default();
        }

        let public_key = public_key.and_then(|v| {
            request::decode_or_default::<PublicKeyResponse>(
                Method::PublicKey,
                v,
            )
        });
        if let Some(res) = quietly(Method::PublicKey, public_key) {
            self.details.public_key = res.public_key.unwrap_or_default();
        }
    }

    /// Submits the send transaction form
    ///
    /// The form is cleared once the provider accepts the transaction and
    /// kept as is otherwise.
    pub async fn submit_send(&mut self) -> bool {
        let payload = SendTransaction {
            amount: self.send.amount.clone(),
            from: self.address.clone(),
            to: self.send.recipient.clone(),
            memo: self.send.memo.clone(),
        };

        let res = self
            .request_with(Method::SendTransaction, &payload)
            .await
            .and_then(|v| request::decode(Method::SendTransaction, v));

        match self.checked::<HashResponse>(Method::SendTransaction, res) {
            Some(HashResponse { hash }) => {
                self.notifier.alert(&format!(
                    "Transaction sent with hash:\n\n{}",
                    hash
                ));
                self.send = SendForm::default();
                self.details.last_hash = Some(hash);
                true
            }
            None => false,
        }
    }

    /// Submits the sign message form
    pub async fn submit_sign(&mut self) -> bool {
        let payload = SignMessage {
            message: self.sign.message.clone(),
            address: self.address.clone(),
        };

        let res = self
            .request_with(Method::SignMessage, &payload)
            .await
            .and_then(|v| request::decode(Method::SignMessage, v));

        match self.checked::<SignatureResponse>(Method::SignMessage, res) {
            Some(SignatureResponse { signature }) => {
                self.details.signature = signature;
                true
            }
            None => false,
        }
    }

    /// Submits the transaction lookup form
    pub async fn submit_tx(&mut self) -> bool {
        let payload = TxQuery {
            hash: self.tx.hash.clone(),
        };

        let res = self.request_with(Method::Tx, &payload).await;
        match self.checked(Method::Tx, res) {
            Some(tx) => {
                self.details.transaction = Some(tx).filter(|v| !v.is_null());
                true
            }
            None => false,
        }
    }

    /// Submits the block lookup form
    pub async fn submit_block(&mut self) -> bool {
        let height = match self.block.height.trim().parse::<u64>() {
            Ok(height) => height,
            Err(_) => {
                let err = Error::InvalidHeight(self.block.height.clone());
                notify::report(self.notifier.as_ref(), Method::Block, &err);
                return false;
            }
        };

        let res = self
            .request_with(Method::Block, &BlockQuery { height })
            .await;
        match self.checked(Method::Block, res) {
            Some(block) => {
                self.details.block = Some(block).filter(|v| !v.is_null());
                true
            }
            None => false,
        }
    }

    /// Submits the stake node form
    ///
    /// The form is cleared once the provider accepts the stake and kept as
    /// is otherwise.
    pub async fn submit_stake(&mut self) -> bool {
        let payload = StakeNode {
            amount: self.stake.amount.clone(),
            chains: self.stake.chain_list(),
            address: self.address.clone(),
            operator_public_key: self.stake.operator_public_key.clone(),
            service_url: self.stake.service_url.clone(),
        };

        let res = self
            .request_with(Method::StakeNode, &payload)
            .await
            .and_then(|v| request::decode(Method::StakeNode, v));

        match self.checked::<HashResponse>(Method::StakeNode, res) {
            Some(HashResponse { hash }) => {
                self.notifier.alert(&format!(
                    "Stake transaction sent with hash:\n\n{}",
                    hash
                ));
                self.stake = StakeForm::default();
                self.details.last_hash = Some(hash);
                true
            }
            None => false,
        }
    }

    async fn request(&self, method: Method) -> Result<Value, Error> {
        self.provider.send(method, vec![]).await
    }

    async fn request_with<T>(
        &self,
        method: Method,
        payload: &T,
    ) -> Result<Value, Error>
    where
        T: Serialize,
    {
        let params = request::params(payload)?;
        self.provider.send(method, params).await
    }

    /// Alerts the user when `res` failed
    fn checked<T>(&self, method: Method, res: Result<T, Error>) -> Option<T> {
        match res {
            Ok(value) => Some(value),
            Err(err) => {
                notify::report(self.notifier.as_ref(), method, &err);
                None
            }
        }
    }
}

/// Logs a failure without bothering the user
fn quietly<T>(method: Method, res: Result<T, Error>) -> Option<T> {
    match res {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(%method, "{}", err);
            None
        }
    }
}

impl<P, N> fmt::Display for AccountPanel<P, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = &self.details;
        writeln!(f, "Pocket Network Chain: {}", details.chain)?;
        writeln!(f, "Pocket Network Height: {}", details.height_text())?;
        writeln!(f, "POKT Account: {}", self.address)?;
        if !details.public_key.is_empty() {
            writeln!(f, "POKT Public Key: {}", details.public_key)?;
        }
        write!(f, "Account Balance: {}", details.balance_text())?;

        if !details.signature.is_empty() {
            write!(f, "\n\nSignature:\n{}", details.signature)?;
        }
        if let Some(tx) = &details.transaction {
            let pretty =
                serde_json::to_string_pretty(tx).map_err(|_| fmt::Error)?;
            write!(f, "\n\nTransaction:\n{}", pretty)?;
        }
        if let Some(block) = &details.block {
            let pretty =
                serde_json::to_string_pretty(block).map_err(|_| fmt::Error)?;
            write!(f, "\n\nBlock:\n{}", pretty)?;
        }
        Ok(())
    }
}
