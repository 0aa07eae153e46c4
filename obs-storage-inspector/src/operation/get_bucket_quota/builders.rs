/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{GetBucketQuotaInputBuilder, GetBucketQuotaOutput};

/// Fluent builder for constructing a request for the quota of a bucket
#[derive(Debug)]
pub struct GetBucketQuotaFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: GetBucketQuotaInputBuilder,
}

impl GetBucketQuotaFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Fetch the quota of the bucket
    pub async fn send(self) -> Result<GetBucketQuotaOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::get_bucket_quota::GetBucketQuota::orchestrate(self.handle, input).await
    }

    /// Set the bucket to inspect.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket to inspect.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket to inspect.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }
}
