/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for fetching the storage usage of a bucket
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct GetBucketStorageInfoInput {
    /// The bucket to inspect
    pub bucket: Option<String>,
}

impl GetBucketStorageInfoInput {
    /// Creates a new builder-style object to manufacture [`GetBucketStorageInfoInput`](crate::operation::get_bucket_storage_info::GetBucketStorageInfoInput).
    pub fn builder() -> GetBucketStorageInfoInputBuilder {
        GetBucketStorageInfoInputBuilder::default()
    }

    /// The bucket to inspect
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
}

/// A builder for [`GetBucketStorageInfoInput`](crate::operation::get_bucket_storage_info::GetBucketStorageInfoInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct GetBucketStorageInfoInputBuilder {
    pub(crate) bucket: Option<String>,
}

impl GetBucketStorageInfoInputBuilder {
    /// The bucket to inspect
    ///
    /// This member is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket to inspect
    ///
    /// This member is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket to inspect
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Consumes the builder and constructs a [`GetBucketStorageInfoInput`](crate::operation::get_bucket_storage_info::GetBucketStorageInfoInput).
    pub fn build(self) -> Result<GetBucketStorageInfoInput, BuildError> {
        match self.bucket {
            Some(bucket) if !bucket.is_empty() => Ok(GetBucketStorageInfoInput {
                bucket: Some(bucket),
            }),
            _ => Err(BuildError::missing_field("bucket", "A bucket is required")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::GetBucketStorageInfoInput;

    #[test]
    fn test_bucket_is_required() {
        assert!(GetBucketStorageInfoInput::builder().build().is_err());
        assert!(GetBucketStorageInfoInput::builder().bucket("").build().is_err());
        assert_eq!(
            Some("b1"),
            GetBucketStorageInfoInput::builder().bucket("b1").build().unwrap().bucket()
        );
    }
}
