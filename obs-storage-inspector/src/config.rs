/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_credential_types::Credentials;
use aws_types::SdkConfig;

use crate::error::{self, Error};
use crate::types::ConcurrencySetting;

pub mod loader;

/// Regional endpoint used when none is configured (North China - Beijing 4)
pub const DEFAULT_ENDPOINT: &str = "https://obs.cn-north-4.myhuaweicloud.com";

/// Signing region used when it can't be derived from the endpoint
pub const DEFAULT_REGION: &str = "cn-north-4";

/// Bucket probed when listing fails or returns no buckets
pub const DEFAULT_FALLBACK_BUCKET: &str = "examplebucket";

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    credentials: Credentials,
    endpoint: String,
    region: Option<String>,
    force_path_style: bool,
    query_location: bool,
    fallback_bucket: String,
    concurrency: ConcurrencySetting,
    sdk_config: Option<SdkConfig>,
    client: Option<aws_sdk_s3::Client>,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Credentials used to sign every request
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Base URL of the regional endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Explicit signing region, if one was configured.
    ///
    /// When unset the region is derived from the endpoint host.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Whether buckets are addressed as `<endpoint>/<bucket>` instead of `<bucket>.<endpoint>`
    pub fn force_path_style(&self) -> bool {
        self.force_path_style
    }

    /// Whether bucket locations are requested when listing buckets
    pub fn query_location(&self) -> bool {
        self.query_location
    }

    /// Bucket probed when no buckets could be listed
    pub fn fallback_bucket(&self) -> &str {
        &self.fallback_bucket
    }

    /// Returns the concurrency setting used to inspect buckets.
    pub fn concurrency(&self) -> &ConcurrencySetting {
        &self.concurrency
    }

    /// Shared SDK configuration the S3 client is derived from, if one was loaded.
    pub fn sdk_config(&self) -> Option<&SdkConfig> {
        self.sdk_config.as_ref()
    }

    /// Explicit S3 client instance, if one was set.
    pub fn client(&self) -> Option<&aws_sdk_s3::Client> {
        self.client.as_ref()
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone)]
pub struct Builder {
    credentials: Option<Credentials>,
    endpoint: Option<String>,
    region: Option<String>,
    force_path_style: bool,
    query_location: bool,
    fallback_bucket: Option<String>,
    concurrency: ConcurrencySetting,
    sdk_config: Option<SdkConfig>,
    client: Option<aws_sdk_s3::Client>,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            credentials: None,
            endpoint: None,
            region: None,
            force_path_style: false,
            query_location: true,
            fallback_bucket: None,
            concurrency: ConcurrencySetting::default(),
            sdk_config: None,
            client: None,
        }
    }
}

impl Builder {
    /// Set the credentials used to sign requests.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the credentials used to sign requests.
    pub fn set_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set the regional endpoint.
    ///
    /// Default is [`DEFAULT_ENDPOINT`].
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the signing region. Derived from the endpoint when unset.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Address buckets with path style URLs. Default is `false`.
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = force_path_style;
        self
    }

    /// Request bucket locations when listing. Default is `true`.
    pub fn query_location(mut self, query_location: bool) -> Self {
        self.query_location = query_location;
        self
    }

    /// Bucket probed when no buckets could be listed.
    ///
    /// Default is [`DEFAULT_FALLBACK_BUCKET`].
    pub fn fallback_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.fallback_bucket = Some(bucket.into());
        self
    }

    /// Set the number of buckets inspected at once.
    ///
    /// Default is [ConcurrencySetting::Sequential] which inspects buckets one at a time.
    pub fn concurrency(mut self, concurrency: ConcurrencySetting) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Set the shared SDK configuration the S3 client is derived from.
    pub fn sdk_config(mut self, sdk_config: SdkConfig) -> Self {
        self.sdk_config = Some(sdk_config);
        self
    }

    /// Set an explicit S3 client to use for `ListBuckets` and `GetBucketLocation`.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub(crate) fn has_endpoint(&self) -> bool {
        self.endpoint.is_some()
    }

    pub(crate) fn has_region(&self) -> bool {
        self.region.is_some()
    }

    pub(crate) fn has_fallback_bucket(&self) -> bool {
        self.fallback_bucket.is_some()
    }

    /// Endpoint and region the builder will resolve to.
    pub(crate) fn resolved_location(&self) -> (String, String) {
        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        let region = self
            .region
            .clone()
            .or_else(|| region_from_endpoint(&endpoint))
            .unwrap_or_else(|| DEFAULT_REGION.to_owned());
        (endpoint, region)
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    ///
    /// Fails with [`ErrorKind::ConfigurationInvalid`](crate::error::ErrorKind::ConfigurationInvalid)
    /// when no credentials were provided.
    pub fn build(self) -> Result<Config, Error> {
        let credentials = self
            .credentials
            .ok_or_else(|| error::invalid_configuration("access key and secret key are required"))?;

        Ok(Config {
            credentials,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned()),
            region: self.region,
            force_path_style: self.force_path_style,
            query_location: self.query_location,
            fallback_bucket: self
                .fallback_bucket
                .unwrap_or_else(|| DEFAULT_FALLBACK_BUCKET.to_owned()),
            concurrency: self.concurrency,
            sdk_config: self.sdk_config,
            client: self.client,
        })
    }
}

/// Derive the signing region from an `obs.<region>.<domain>` endpoint host.
pub(crate) fn region_from_endpoint(endpoint: &str) -> Option<String> {
    let url = reqwest::Url::parse(endpoint).ok()?;
    let mut labels = url.host_str()?.split('.');
    match (labels.next(), labels.next()) {
        (Some("obs"), Some(region)) if !region.is_empty() && labels.next().is_some() => {
            Some(region.to_owned())
        }
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_build_requires_credentials() {
        let err = Config::builder().build().unwrap_err();
        assert_eq!(&ErrorKind::ConfigurationInvalid, err.kind());
    }

    #[test]
    fn test_build_defaults() {
        let config = Config::builder()
            .credentials(Credentials::new("ak", "sk", None, None, "test"))
            .build()
            .unwrap();

        assert_eq!(DEFAULT_ENDPOINT, config.endpoint());
        assert_eq!(None, config.region());
        assert_eq!(DEFAULT_FALLBACK_BUCKET, config.fallback_bucket());
        assert!(config.query_location());
        assert!(!config.force_path_style());
        assert!(config.client().is_none());
    }

    #[test]
    fn test_region_from_endpoint() {
        assert_eq!(
            Some("cn-north-4".to_owned()),
            region_from_endpoint("https://obs.cn-north-4.myhuaweicloud.com")
        );
        assert_eq!(
            Some("ap-southeast-1".to_owned()),
            region_from_endpoint("https://obs.ap-southeast-1.myhuaweicloud.com/")
        );
        assert_eq!(None, region_from_endpoint("http://127.0.0.1:9000"));
        assert_eq!(None, region_from_endpoint("https://storage.example.com"));
        assert_eq!(None, region_from_endpoint("not a url"));
    }

    #[test]
    fn test_resolved_location() {
        let (endpoint, region) = Builder::default().resolved_location();
        assert_eq!(DEFAULT_ENDPOINT, endpoint);
        assert_eq!("cn-north-4", region);

        let (endpoint, region) = Builder::default()
            .endpoint("http://127.0.0.1:9000")
            .resolved_location();
        assert_eq!("http://127.0.0.1:9000", endpoint);
        assert_eq!(DEFAULT_REGION, region);

        let (_, region) = Builder::default()
            .endpoint("https://obs.la-south-2.myhuaweicloud.com")
            .region("eu-west-101")
            .resolved_location();
        assert_eq!("eu-west-101", region);
    }
}
