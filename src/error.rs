// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::request::Method;

/// Errors returned by this library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The provider refused or failed the request
    #[error("{0}")]
    Rejected(String),
    /// The provider bridge answered with a JSON-RPC error object
    #[error("{message}")]
    Rpc {
        /// Error code reported by the bridge
        code: i64,
        /// Error message reported by the bridge
        message: String,
    },
    /// Network errors talking to the provider bridge
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// JSON serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The provider answered with something we can't make sense of
    #[error("Unexpected response to {method}: {reason}")]
    Malformed {
        /// Request the response belongs to
        method: Method,
        /// What was wrong with it
        reason: String,
    },
    /// Block height is not a number
    #[error("Invalid block height: {0:?}")]
    InvalidHeight(String),
}

impl Error {
    pub(crate) fn malformed(method: Method, err: serde_json::Error) -> Self {
        Self::Malformed {
            method,
            reason: err.to_string(),
        }
    }
}
