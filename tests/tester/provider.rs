// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use pokt_tester::{Error, Method, Provider};

/// Provider answering from a fixed table and recording every request.
/// Requests without an entry resolve to `null`.
#[derive(Default)]
pub struct MockProvider {
    responses: HashMap<Method, Result<Value, String>>,
    calls: Mutex<Vec<(Method, Vec<Value>)>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, method: Method, value: Value) -> Self {
        self.responses.insert(method, Ok(value));
        self
    }

    pub fn reject(mut self, method: Method, message: &str) -> Self {
        self.responses.insert(method, Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<(Method, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }

    /// Parameters of every request made for `method`
    pub fn calls_to(&self, method: Method) -> Vec<Vec<Value>> {
        self.calls()
            .into_iter()
            .filter(|(m, _)| *m == method)
            .map(|(_, params)| params)
            .collect()
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn send(
        &self,
        method: Method,
        params: Vec<Value>,
    ) -> Result<Value, Error> {
        self.calls.lock().unwrap().push((method, params));
        match self.responses.get(&method) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(Error::Rejected(message.clone())),
            None => Ok(Value::Null),
        }
    }
}
