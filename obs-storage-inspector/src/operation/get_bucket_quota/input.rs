/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for fetching the quota of a bucket
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct GetBucketQuotaInput {
    /// The bucket to inspect
    pub bucket: Option<String>,
}

impl GetBucketQuotaInput {
    /// Creates a new builder-style object to manufacture [`GetBucketQuotaInput`](crate::operation::get_bucket_quota::GetBucketQuotaInput).
    pub fn builder() -> GetBucketQuotaInputBuilder {
        GetBucketQuotaInputBuilder::default()
    }

    /// The bucket to inspect
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }
}

/// A builder for [`GetBucketQuotaInput`](crate::operation::get_bucket_quota::GetBucketQuotaInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct GetBucketQuotaInputBuilder {
    pub(crate) bucket: Option<String>,
}

impl GetBucketQuotaInputBuilder {
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

    /// Consumes the builder and constructs a [`GetBucketQuotaInput`](crate::operation::get_bucket_quota::GetBucketQuotaInput).
    pub fn build(self) -> Result<GetBucketQuotaInput, BuildError> {
        match self.bucket {
            Some(bucket) if !bucket.is_empty() => Ok(GetBucketQuotaInput {
                bucket: Some(bucket),
            }),
            _ => Err(BuildError::missing_field("bucket", "A bucket is required")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::GetBucketQuotaInput;

    #[test]
    fn test_bucket_is_required() {
        assert!(GetBucketQuotaInput::builder().build().is_err());
        assert!(GetBucketQuotaInput::builder().bucket("").build().is_err());
        assert_eq!(
            Some("b1"),
            GetBucketQuotaInput::builder().bucket("b1").build().unwrap().bucket()
        );
    }
}
