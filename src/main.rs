// acm-inventory - Certificate inventory reporting for AWS Certificate Manager
// Licensed under GPL-3.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

use acm_inventory::services::aws::AwsServices;
use acm_inventory::services::{ArtifactStore, LocalArtifactStore, SystemClock};
use acm_inventory::{Args, InventoryRunner};
use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging - respect RUST_LOG environment variable.
    // stdout carries the invocation result, so logs go to stderr.
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    // Parse command line arguments
    let args = Args::parse();
    let config = args.to_config()?;

    info!(
        "acm-inventory v{} (region {}, bucket {})",
        env!("CARGO_PKG_VERSION"),
        config.region,
        config.bucket
    );

    let aws = AwsServices::connect(&config.region).await;

    let store: Arc<dyn ArtifactStore> = match &args.output.output_dir {
        Some(dir) => {
            info!("Writing artifacts locally under {}", dir.display());
            Arc::new(LocalArtifactStore::new(dir))
        }
        None => aws.store.clone(),
    };

    let mut runner = InventoryRunner::new(
        config,
        aws.certificates.clone(),
        aws.identity.clone(),
        store,
        Arc::new(SystemClock),
    );
    if runner.config().notifications_enabled() {
        runner = runner.with_notifier(aws.notifier.clone());
    }

    let result = runner.execute().await?;

    let output = if args.output.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}
