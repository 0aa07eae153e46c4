/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for fetching the quota of a bucket
#[non_exhaustive]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GetBucketQuotaOutput {
    /// Request id assigned by the service
    pub request_id: Option<String>,

    /// Maximum capacity of the bucket in bytes. `0` means the bucket has no quota.
    pub quota: u64,
}

impl GetBucketQuotaOutput {
    /// Creates a new builder-style object to manufacture [`GetBucketQuotaOutput`](crate::operation::get_bucket_quota::GetBucketQuotaOutput).
    pub fn builder() -> GetBucketQuotaOutputBuilder {
        GetBucketQuotaOutputBuilder::default()
    }

    /// Request id assigned by the service
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Maximum capacity of the bucket in bytes
    pub fn quota(&self) -> u64 {
        self.quota
    }
}

/// A builder for [`GetBucketQuotaOutput`](crate::operation::get_bucket_quota::GetBucketQuotaOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct GetBucketQuotaOutputBuilder {
    pub(crate) request_id: Option<String>,
    pub(crate) quota: u64,
}

impl GetBucketQuotaOutputBuilder {
    /// Request id assigned by the service
    pub fn request_id(mut self, input: impl Into<String>) -> Self {
        self.request_id = Some(input.into());
        self
    }

    /// Request id assigned by the service
    pub fn set_request_id(mut self, input: Option<String>) -> Self {
        self.request_id = input;
        self
    }

    /// Maximum capacity of the bucket in bytes
    pub fn quota(mut self, input: u64) -> Self {
        self.quota = input;
        self
    }

    /// Consume the builder and return the output
    pub fn build(self) -> GetBucketQuotaOutput {
        GetBucketQuotaOutput {
            request_id: self.request_id,
            quota: self.quota,
        }
    }
}
