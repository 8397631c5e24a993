// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Offline asset registration. Runs fire-and-forget on a detached thread at
//! startup; the application never waits on it and never changes behavior
//! based on its outcome. Both success and failure are logged only.

use crate::models::Category;
use anyhow::Result;
use log::{debug, warn};
use std::fs;
use std::path::Path;
use std::thread;

pub fn register_asset_cache(data_dir: &Path) {
    let dir = data_dir.join("cache");
    let spawned = thread::Builder::new()
        .name("asset-cache".to_string())
        .spawn(move || match materialize(&dir) {
            Ok(()) => debug!("asset cache registered at {}", dir.display()),
            Err(e) => warn!("asset cache registration failed: {}", e),
        });
    if let Err(e) = spawned {
        warn!("asset cache registration failed: {}", e);
    }
}

fn materialize(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    let manifest = serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "categories": Category::SELECTABLE.iter().map(|c| c.label()).collect::<Vec<_>>(),
        "currencies": ["ILS", "USD", "EUR", "GTQ", "DKK"],
    });
    fs::write(
        dir.join("manifest.json"),
        serde_json::to_string_pretty(&manifest)?,
    )?;
    Ok(())
}
