/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::io;
use std::process::ExitCode;

use clap::Parser;
use obs_storage_inspector::error::Error;
use obs_storage_inspector::report::{self, Reporter};
use obs_storage_inspector::types::ConcurrencySetting;
use obs_storage_inspector::Client;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "obs-inspect")]
#[command(
    about = "Lists OBS buckets and reports the storage usage and quota of each one.",
    long_about = "Lists OBS buckets and reports the storage usage and quota of each one.\n\n\
        Credentials are read from the AccessKeyID and SecretAccessKey environment variables."
)]
struct Args {
    /// Regional endpoint [default: https://obs.cn-north-4.myhuaweicloud.com]
    #[arg(long)]
    endpoint: Option<String>,

    /// Signing region. Derived from the endpoint when omitted.
    #[arg(long)]
    region: Option<String>,

    /// Bucket probed when no buckets can be listed [default: examplebucket]
    #[arg(long)]
    fallback_bucket: Option<String>,

    /// Number of buckets inspected at once
    #[arg(long)]
    concurrency: Option<usize>,

    /// Skip looking up bucket locations when listing
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    no_location: bool,

    /// Address buckets with path style URLs
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    path_style: bool,
}

async fn connect(args: Args) -> Result<Client, Error> {
    let mut loader = obs_storage_inspector::from_env().query_location(!args.no_location);
    if let Some(endpoint) = args.endpoint {
        loader = loader.endpoint(endpoint);
    }
    if let Some(region) = args.region {
        loader = loader.region(region);
    }
    if let Some(bucket) = args.fallback_bucket {
        loader = loader.fallback_bucket(bucket);
    }
    if let Some(concurrency) = args.concurrency {
        loader = loader.concurrency(ConcurrencySetting::Explicit(concurrency));
    }
    if args.path_style {
        loader = loader.force_path_style(true);
    }

    let config = loader.load().await?;
    Client::new(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut reporter = Reporter::new(io::stdout());
    let client = match connect(args).await {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(error = %err, "client initialization failed");
            let _ = reporter.write_section(&report::client_init_failed(&err));
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = reporter.write_section(&report::client_initialized()) {
        tracing::error!(error = %err, "failed to write report");
        client.close();
        return ExitCode::FAILURE;
    }

    match obs_storage_inspector::inspector::run(client, &mut reporter).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "failed to write report");
            ExitCode::FAILURE
        }
    }
}
