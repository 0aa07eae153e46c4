/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::{BehaviorVersion, Region};

use crate::config::{region_from_endpoint, DEFAULT_REGION};
use crate::error::Error;
use crate::http::{parse_endpoint, SubresourceClient};
use crate::operation::get_bucket_quota::builders::GetBucketQuotaFluentBuilder;
use crate::operation::get_bucket_storage_info::builders::GetBucketStorageInfoFluentBuilder;
use crate::operation::list_buckets::builders::ListBucketsFluentBuilder;
use crate::types::ConcurrencySetting;
use crate::Config;

/// Client for inspecting the buckets of an object storage service.
///
/// The client owns its connection resources; they are released by [`close`](Client::close) or
/// when the client is dropped.
#[derive(Debug)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, SDK client, HTTP client
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: Config,
    s3: aws_sdk_s3::Client,
    subresources: SubresourceClient,
}

impl Handle {
    /// The S3 client used for SDK operations
    pub(crate) fn s3(&self) -> &aws_sdk_s3::Client {
        &self.s3
    }

    /// The client used for bucket sub-resource requests
    pub(crate) fn subresources(&self) -> &SubresourceClient {
        &self.subresources
    }

    /// Get the concrete number of buckets inspected at once.
    pub(crate) fn num_workers(&self) -> usize {
        match self.config.concurrency() {
            ConcurrencySetting::Explicit(concurrency) => (*concurrency).max(1),
            ConcurrencySetting::Sequential => 1,
        }
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        tracing::debug!(endpoint = self.config.endpoint(), "client resources released");
    }
}

impl Client {
    /// Creates a new client from a config.
    ///
    /// Fails with [`ErrorKind::ClientInit`](crate::error::ErrorKind::ClientInit) when the
    /// endpoint is malformed. No requests are sent.
    pub fn new(config: Config) -> Result<Client, Error> {
        let endpoint = parse_endpoint(config.endpoint())?;
        let region = config
            .region()
            .map(str::to_owned)
            .or_else(|| region_from_endpoint(config.endpoint()))
            .unwrap_or_else(|| DEFAULT_REGION.to_owned());

        let s3 = match config.client() {
            Some(client) => client.clone(),
            None => {
                let builder = match config.sdk_config() {
                    Some(sdk_config) => aws_sdk_s3::config::Builder::from(sdk_config),
                    None => aws_sdk_s3::config::Builder::new()
                        .behavior_version(BehaviorVersion::latest()),
                };
                let s3_config = builder
                    .region(Region::new(region.clone()))
                    .credentials_provider(config.credentials().clone())
                    .endpoint_url(endpoint.as_str())
                    .force_path_style(config.force_path_style())
                    .retry_config(RetryConfig::disabled())
                    .build();
                aws_sdk_s3::Client::from_conf(s3_config)
            }
        };

        let subresources = SubresourceClient::new(
            endpoint,
            region.as_str(),
            config.credentials().clone(),
            config.force_path_style(),
        )?;

        tracing::debug!(endpoint = config.endpoint(), region = %region, "client initialized");
        let handle = Arc::new(Handle {
            config,
            s3,
            subresources,
        });
        Ok(Client { handle })
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// List the caller's buckets
    ///
    /// # Examples
    /// ```no_run
    /// # async fn example(client: &obs_storage_inspector::Client) -> Result<(), obs_storage_inspector::error::Error> {
    /// let output = client.list_buckets().query_location(true).send().await?;
    /// for bucket in output.buckets() {
    ///     println!("{} ({:?})", bucket.name(), bucket.location());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_buckets(&self) -> ListBucketsFluentBuilder {
        ListBucketsFluentBuilder::new(self.handle.clone())
    }

    /// Fetch the storage usage (size and object count) of a bucket
    pub fn get_bucket_storage_info(&self) -> GetBucketStorageInfoFluentBuilder {
        GetBucketStorageInfoFluentBuilder::new(self.handle.clone())
    }

    /// Fetch the quota of a bucket
    pub fn get_bucket_quota(&self) -> GetBucketQuotaFluentBuilder {
        GetBucketQuotaFluentBuilder::new(self.handle.clone())
    }

    /// Release the client and its connection resources.
    pub fn close(self) {
        tracing::debug!("closing client");
        drop(self.handle);
    }
}
