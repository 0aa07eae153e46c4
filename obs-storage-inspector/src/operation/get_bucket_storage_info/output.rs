/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for fetching the storage usage of a bucket
#[non_exhaustive]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GetBucketStorageInfoOutput {
    /// Request id assigned by the service
    pub request_id: Option<String>,

    /// Total size of the objects in the bucket, in bytes
    pub size: u64,

    /// Number of objects in the bucket
    pub object_number: u64,
}

impl GetBucketStorageInfoOutput {
    /// Creates a new builder-style object to manufacture [`GetBucketStorageInfoOutput`](crate::operation::get_bucket_storage_info::GetBucketStorageInfoOutput).
    pub fn builder() -> GetBucketStorageInfoOutputBuilder {
        GetBucketStorageInfoOutputBuilder::default()
    }

    /// Request id assigned by the service
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Total size of the objects in the bucket, in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Number of objects in the bucket
    pub fn object_number(&self) -> u64 {
        self.object_number
    }
}

/// A builder for [`GetBucketStorageInfoOutput`](crate::operation::get_bucket_storage_info::GetBucketStorageInfoOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct GetBucketStorageInfoOutputBuilder {
    pub(crate) request_id: Option<String>,
    pub(crate) size: u64,
    pub(crate) object_number: u64,
}

impl GetBucketStorageInfoOutputBuilder {
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

    /// Total size of the objects in the bucket, in bytes
    pub fn size(mut self, input: u64) -> Self {
        self.size = input;
        self
    }

    /// Number of objects in the bucket
    pub fn object_number(mut self, input: u64) -> Self {
        self.object_number = input;
        self
    }

    /// Consume the builder and return the output
    pub fn build(self) -> GetBucketStorageInfoOutput {
        GetBucketStorageInfoOutput {
            request_id: self.request_id,
            size: self.size,
            object_number: self.object_number,
        }
    }
}
