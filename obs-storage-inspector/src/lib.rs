/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */

//! OBS Storage Inspector
//!
//! Lists the buckets visible to a set of credentials on an OBS regional endpoint and reports
//! the storage usage and quota of each one. When no buckets can be listed a single fallback
//! bucket is probed instead.
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = obs_storage_inspector::from_env().load().await?;
//! let client = obs_storage_inspector::Client::new(config)?;
//! let mut reporter = obs_storage_inspector::report::Reporter::new(std::io::stdout());
//! let summary = obs_storage_inspector::inspector::run(client, &mut reporter).await?;
//! println!("{} of {} calls failed", summary.calls_failed, summary.calls_attempted);
//! # Ok(())
//! # }
//! ```

#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

/// Error types emitted by `obs-storage-inspector`
pub mod error;

/// Common types used by `obs-storage-inspector`
pub mod types;

/// Inspector client
pub mod client;

/// Inspector client configuration
pub mod config;

/// Inspector operations
pub mod operation;

/// Orchestration of a full inspection run
pub mod inspector;

/// Human readable rendering of operation results
pub mod report;

pub(crate) mod http;

pub use self::client::Client;
pub use self::config::Config;

use self::config::loader::ConfigLoader;

/// Create a config loader that reads credentials and settings from the environment
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
