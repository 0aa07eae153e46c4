/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for listing buckets
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ListBucketsInput {
    /// Also look up the location of every listed bucket
    pub query_location: bool,
}

impl ListBucketsInput {
    /// Creates a new builder-style object to manufacture [`ListBucketsInput`](crate::operation::list_buckets::ListBucketsInput).
    pub fn builder() -> ListBucketsInputBuilder {
        ListBucketsInputBuilder::default()
    }

    /// Whether the location of every listed bucket is looked up
    pub fn query_location(&self) -> bool {
        self.query_location
    }
}

/// A builder for [`ListBucketsInput`](crate::operation::list_buckets::ListBucketsInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ListBucketsInputBuilder {
    pub(crate) query_location: Option<bool>,
}

impl ListBucketsInputBuilder {
    /// Also look up the location of every listed bucket
    pub fn query_location(mut self, input: bool) -> Self {
        self.query_location = Some(input);
        self
    }

    /// Also look up the location of every listed bucket
    pub fn set_query_location(mut self, input: Option<bool>) -> Self {
        self.query_location = input;
        self
    }

    /// Also look up the location of every listed bucket
    pub fn get_query_location(&self) -> &Option<bool> {
        &self.query_location
    }

    /// Consumes the builder and constructs a [`ListBucketsInput`](crate::operation::list_buckets::ListBucketsInput).
    pub fn build(self) -> Result<ListBucketsInput, BuildError> {
        Ok(ListBucketsInput {
            query_location: self.query_location.unwrap_or_default(),
        })
    }
}
