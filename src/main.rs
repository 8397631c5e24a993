// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tripclip::ui::prompt::StdinPrompt;
use tripclip::{cache, cli, storage, store::Store, ui};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let matches = cli::build_cli().get_matches();
    let snapshots = match matches.get_one::<String>("data-dir") {
        Some(dir) => storage::Snapshots::open_at(dir)?,
        None => storage::Snapshots::open_default()?,
    };

    cache::register_asset_cache(snapshots.dir());

    let mut store = Store::load(snapshots);
    ui::run(&mut store, &mut StdinPrompt)
}
