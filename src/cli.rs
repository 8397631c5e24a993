// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, Command, crate_version};

pub fn build_cli() -> Command {
    Command::new("tripclip")
        .version(crate_version!())
        .about("Multi-currency trip expense tracking in the terminal")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .help("Keep state snapshots in DIR instead of the platform data dir"),
        )
}
