// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Error;

/// Requests a POKT wallet provider understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Ask the user to expose their accounts
    RequestAccounts,
    /// Balance of an address
    Balance,
    /// Send uPOKT to another address
    SendTransaction,
    /// Sign an arbitrary message
    SignMessage,
    /// Look up a transaction by hash
    Tx,
    /// Current block height
    Height,
    /// Look up a block by height
    Block,
    /// Chain identifier
    Chain,
    /// Public key of an address
    PublicKey,
    /// Stake a servicer node
    StakeNode,
}

impl Method {
    /// Name of the request on the wire
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RequestAccounts => "pokt_requestAccounts",
            Self::Balance => "pokt_balance",
            Self::SendTransaction => "pokt_sendTransaction",
            Self::SignMessage => "pokt_signMessage",
            Self::Tx => "pokt_tx",
            Self::Height => "pokt_height",
            Self::Block => "pokt_block",
            Self::Chain => "pokt_chain",
            Self::PublicKey => "pokt_publicKey",
            Self::StakeNode => "pokt_stakeNode",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of requests scoped to a single address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressQuery {
    /// Account address
    pub address: String,
}

/// Parameters of `pokt_sendTransaction`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendTransaction {
    /// Amount in uPOKT, as typed by the user
    pub amount: String,
    /// Sender address
    pub from: String,
    /// Recipient address
    pub to: String,
    /// Free text memo
    pub memo: String,
}

/// Parameters of `pokt_signMessage`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignMessage {
    /// Message to sign
    pub message: String,
    /// Address whose key signs it
    pub address: String,
}

/// Parameters of `pokt_tx`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxQuery {
    /// Transaction hash
    pub hash: String,
}

/// Parameters of `pokt_block`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockQuery {
    /// Block height
    pub height: u64,
}

/// Parameters of `pokt_stakeNode`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StakeNode {
    /// Amount to stake in uPOKT, as typed by the user
    pub amount: String,
    /// Relay chain identifiers served by the node
    pub chains: Vec<String>,
    /// Address of the staking account
    pub address: String,
    /// Public key of the node operator
    #[serde(rename = "operatorPublicKey")]
    pub operator_public_key: String,
    /// Public URL the node serves relays on
    #[serde(rename = "serviceURL")]
    pub service_url: String,
}

/// Response to `pokt_chain`
#[derive(Debug, Default, Deserialize)]
pub struct ChainResponse {
    /// Chain identifier
    #[serde(default)]
    pub chain: Option<String>,
}

/// Response to `pokt_height`
#[derive(Debug, Default, Deserialize)]
pub struct HeightResponse {
    /// Current block height
    #[serde(default, deserialize_with = "lenient_u64")]
    pub height: Option<u64>,
}

/// Response to `pokt_balance`
#[derive(Debug, Default, Deserialize)]
pub struct BalanceResponse {
    /// Balance in uPOKT
    #[serde(default, deserialize_with = "lenient_u64")]
    pub balance: Option<u64>,
}

/// Response to `pokt_publicKey`
#[derive(Debug, Default, Deserialize)]
pub struct PublicKeyResponse {
    /// Hex encoded public key
    #[serde(default, rename = "publicKey")]
    pub public_key: Option<String>,
}

/// Response to requests that broadcast a transaction
#[derive(Debug, Deserialize)]
pub struct HashResponse {
    /// Hash of the broadcast transaction
    pub hash: String,
}

/// Response to `pokt_signMessage`
#[derive(Debug, Deserialize)]
pub struct SignatureResponse {
    /// Signature over the message
    pub signature: String,
}

/// Accepts whole amounts sent as integers, floats or numeric strings.
/// Fractions are truncated.
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Null => return Ok(None),
        Value::Number(n) => n.as_u64().or_else(|| whole(n.as_f64()?)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| whole(s.parse::<f64>().ok()?))
        }
        _ => None,
    };

    parsed
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("not an amount: {}", value)))
}

fn whole(n: f64) -> Option<u64> {
    (n.is_finite() && n >= 0.0 && n <= u64::MAX as f64).then(|| n as u64)
}

/// Wraps a payload into the single element parameter list providers expect
pub fn params<T: Serialize>(payload: &T) -> Result<Vec<Value>, Error> {
    Ok(vec![serde_json::to_value(payload)?])
}

/// Decodes a response that must be present and well formed
pub(crate) fn decode<T>(method: Method, value: Value) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|e| Error::malformed(method, e))
}

/// Decodes a response where `null` stands for "nothing to show"
pub(crate) fn decode_or_default<T>(
    method: Method,
    value: Value,
) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value::<Option<T>>(value)
        .map(Option::unwrap_or_default)
        .map_err(|e| Error::malformed(method, e))
}
