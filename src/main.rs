// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process::ExitCode;

use circle_provider::{bootstrap, logging, CircleConfig};
use serde_json::{Map, Value};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the environment may already be set.
    let _ = dotenvy::dotenv();
    logging::init_tracing();

    let config = match CircleConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let provider = match bootstrap::initialize(&config).await {
        Ok(provider) => provider,
        Err(e) => {
            error!(error = %e, "Bootstrap failed");
            return ExitCode::FAILURE;
        }
    };

    let addresses: Map<String, Value> = provider
        .addresses()
        .iter()
        .map(|(network, address)| (network.to_string(), Value::String(address.to_string())))
        .collect();

    match serde_json::to_string_pretty(&addresses) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!(error = %e, "Failed to serialize address map");
            return ExitCode::FAILURE;
        }
    }

    info!(
        wallet_set_id = provider.wallet_set_id().unwrap_or_default(),
        "Done"
    );
    ExitCode::SUCCESS
}
