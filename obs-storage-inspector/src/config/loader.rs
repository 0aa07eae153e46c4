/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_types::os_shim_internal::Env;
use aws_types::region::Region;

use crate::config::Builder;
use crate::error::{self, Error};
use crate::{types::ConcurrencySetting, Config};

/// Environment variable holding the access key id
pub const ACCESS_KEY_ID_VAR: &str = "AccessKeyID";

/// Environment variable holding the secret access key
pub const SECRET_ACCESS_KEY_VAR: &str = "SecretAccessKey";

/// Environment variable holding the (optional) security token of temporary credentials
pub const SECURITY_TOKEN_VAR: &str = "SecurityToken";

const ENDPOINT_VAR: &str = "OBS_ENDPOINT";
const REGION_VAR: &str = "OBS_REGION";
const FALLBACK_BUCKET_VAR: &str = "OBS_FALLBACK_BUCKET";
const FORCE_PATH_STYLE_VAR: &str = "OBS_FORCE_PATH_STYLE";

const CREDENTIALS_PROVIDER_NAME: &str = "ObsEnvironment";

/// Load inspector [`Config`] from the environment.
///
/// Values set explicitly on the loader take precedence over the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    force_path_style: Option<bool>,
    env: Option<Env>,
}

impl ConfigLoader {
    /// Override the regional endpoint.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.builder = self.builder.endpoint(endpoint);
        self
    }

    /// Override the signing region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.builder = self.builder.region(region);
        self
    }

    /// Address buckets with path style URLs.
    pub fn force_path_style(mut self, force_path_style: bool) -> Self {
        self.force_path_style = Some(force_path_style);
        self
    }

    /// Request bucket locations when listing. Default is `true`.
    pub fn query_location(mut self, query_location: bool) -> Self {
        self.builder = self.builder.query_location(query_location);
        self
    }

    /// Bucket probed when no buckets could be listed.
    pub fn fallback_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.builder = self.builder.fallback_bucket(bucket);
        self
    }

    /// Set the number of buckets inspected at once.
    pub fn concurrency(mut self, concurrency: ConcurrencySetting) -> Self {
        self.builder = self.builder.concurrency(concurrency);
        self
    }

    /// Read configuration from the given environment instead of the process environment.
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    /// Load the configuration
    ///
    /// If fields have been overridden during loader construction, the override values will be
    /// used. Otherwise, values are read from the environment, falling back to defaults.
    ///
    /// Fails with [`ErrorKind::ConfigurationInvalid`](crate::error::ErrorKind::ConfigurationInvalid)
    /// when the access key or secret key is missing.
    pub async fn load(self) -> Result<Config, Error> {
        let env = self.env.unwrap_or_else(Env::real);
        let mut builder = self.builder;

        let credentials = credentials_from_env(&env).ok_or_else(|| {
            error::invalid_configuration(format!(
                "{ACCESS_KEY_ID_VAR} and {SECRET_ACCESS_KEY_VAR} must be set"
            ))
        })?;
        builder = builder.credentials(credentials.clone());

        if !builder.has_endpoint() {
            if let Some(endpoint) = non_empty(&env, ENDPOINT_VAR) {
                builder = builder.endpoint(endpoint);
            }
        }
        if !builder.has_region() {
            if let Some(region) = non_empty(&env, REGION_VAR) {
                builder = builder.region(region);
            }
        }
        if !builder.has_fallback_bucket() {
            if let Some(bucket) = non_empty(&env, FALLBACK_BUCKET_VAR) {
                builder = builder.fallback_bucket(bucket);
            }
        }
        let force_path_style = self.force_path_style.unwrap_or_else(|| {
            non_empty(&env, FORCE_PATH_STYLE_VAR)
                .map(|value| matches!(value.as_str(), "1" | "true"))
                .unwrap_or_default()
        });
        builder = builder.force_path_style(force_path_style);

        let (endpoint, region) = builder.resolved_location();

        tracing::debug!(endpoint = %endpoint, region = %region, "loading shared SDK config");
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(region))
            .endpoint_url(endpoint)
            .retry_config(RetryConfig::disabled())
            .load()
            .await;

        builder.sdk_config(sdk_config).build()
    }
}

/// Read credentials from the environment.
///
/// Returns `None` when the access key or secret key is unset or empty.
pub fn credentials_from_env(env: &Env) -> Option<Credentials> {
    let access_key = non_empty(env, ACCESS_KEY_ID_VAR)?;
    let secret_key = non_empty(env, SECRET_ACCESS_KEY_VAR)?;
    let session_token = non_empty(env, SECURITY_TOKEN_VAR);

    Some(Credentials::new(
        access_key,
        secret_key,
        session_token,
        None,
        CREDENTIALS_PROVIDER_NAME,
    ))
}

fn non_empty(env: &Env, key: &str) -> Option<String> {
    env.get(key).ok().filter(|value| !value.trim().is_empty())
}
