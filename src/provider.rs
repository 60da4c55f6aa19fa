// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::request::Method;
use crate::Error;

/// A POKT wallet provider
///
/// Providers expose a single operation: issue a named request with an
/// optional list of parameter objects and get back a value, or a failure.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Issues `method` with the given parameters
    async fn send(
        &self,
        method: Method,
        params: Vec<Value>,
    ) -> Result<Value, Error>;
}

/// Provider reached through a JSON-RPC bridge over HTTP
#[derive(Debug)]
pub struct HttpProvider {
    client: reqwest::Client,
    url: Url,
    id: AtomicU64,
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    #[serde(skip_serializing_if = "no_params")]
    params: &'a [Value],
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    #[serde(default)]
    code: i64,
    message: String,
}

fn no_params(params: &&[Value]) -> bool {
    params.is_empty()
}

impl From<RpcError> for Error {
    fn from(RpcError { code, message }: RpcError) -> Self {
        Error::Rpc { code, message }
    }
}

impl RpcResponse {
    fn into_result(self) -> Result<Value, Error> {
        match self.error {
            Some(error) => Err(error.into()),
            None => Ok(self.result),
        }
    }
}

impl HttpProvider {
    /// Creates a provider that posts requests to `url`
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            id: AtomicU64::new(1),
        }
    }

    /// Bridge endpoint
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Provider for HttpProvider {
    async fn send(
        &self,
        method: Method,
        params: Vec<Value>,
    ) -> Result<Value, Error> {
        let id = self.id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest {
            jsonrpc: "2.0",
            id,
            method: method.as_str(),
            params: &params,
        };

        debug!(%method, id, "sending request to {}", self.url);

        let response = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let failed = response.error_for_status_ref().err();
        let body = response.bytes().await?;

        debug!(%method, id, %status, "response");

        let decoded = serde_json::from_slice::<RpcResponse>(&body);

        // bridges may answer errors with a non-2xx status, the error
        // object still carries the provider's message
        if let Some(err) = failed {
            return match decoded {
                Ok(RpcResponse {
                    error: Some(error), ..
                }) => Err(error.into()),
                _ => Err(err.into()),
            };
        }

        decoded?.into_result()
    }
}
