/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::{Bucket, Owner};

/// Output type for listing buckets
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ListBucketsOutput {
    /// Request id assigned by the service
    pub request_id: Option<String>,

    /// Owner of the listed buckets
    pub owner: Option<Owner>,

    /// Buckets in the order the service returned them
    pub buckets: Vec<Bucket>,
}

impl ListBucketsOutput {
    /// Creates a new builder-style object to manufacture [`ListBucketsOutput`](crate::operation::list_buckets::ListBucketsOutput).
    pub fn builder() -> ListBucketsOutputBuilder {
        ListBucketsOutputBuilder::default()
    }

    /// Request id assigned by the service
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Owner of the listed buckets
    pub fn owner(&self) -> Option<&Owner> {
        self.owner.as_ref()
    }

    /// Buckets in the order the service returned them
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }
}

/// A builder for [`ListBucketsOutput`](crate::operation::list_buckets::ListBucketsOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct ListBucketsOutputBuilder {
    pub(crate) request_id: Option<String>,
    pub(crate) owner: Option<Owner>,
    pub(crate) buckets: Vec<Bucket>,
}

impl ListBucketsOutputBuilder {
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

    /// Owner of the listed buckets
    pub fn owner(mut self, input: Owner) -> Self {
        self.owner = Some(input);
        self
    }

    /// Owner of the listed buckets
    pub fn set_owner(mut self, input: Option<Owner>) -> Self {
        self.owner = input;
        self
    }

    /// Append a bucket.
    ///
    /// To override the contents of this collection use [`set_buckets`](Self::set_buckets)
    pub fn buckets(mut self, input: Bucket) -> Self {
        self.buckets.push(input);
        self
    }

    /// Buckets in the order the service returned them
    pub fn set_buckets(mut self, input: Vec<Bucket>) -> Self {
        self.buckets = input;
        self
    }

    /// Consume the builder and return the output
    pub fn build(self) -> ListBucketsOutput {
        ListBucketsOutput {
            request_id: self.request_id,
            owner: self.owner,
            buckets: self.buckets,
        }
    }
}
