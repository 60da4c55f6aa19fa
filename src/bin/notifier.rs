// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use pokt_tester::Notifier;

/// Prints alerts to the terminal
///
/// Interactive sessions get them inline with the menus. Headless runs send
/// them to stderr so stdout only carries command output.
pub(crate) struct TerminalNotifier {
    interactive: bool,
}

impl TerminalNotifier {
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }
}

impl Notifier for TerminalNotifier {
    fn alert(&self, message: &str) {
        if self.interactive {
            println!("\r{}\n", message);
        } else {
            eprintln!("{}", message);
        }
    }
}
