// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use tracing::error;

use crate::request::Method;
use crate::Error;

/// Shows messages the user has to acknowledge
pub trait Notifier: Send + Sync {
    /// Reports `message` to the user
    fn alert(&self, message: &str);
}

/// Logs a failed request and alerts the user about it
pub(crate) fn report<N>(notifier: &N, method: Method, err: &Error)
where
    N: Notifier + ?Sized,
{
    error!(%method, "{}", err);
    notifier.alert(&format!("Error:\n\n{}", err));
}
