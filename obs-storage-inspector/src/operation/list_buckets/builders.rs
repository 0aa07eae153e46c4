/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;

use super::{ListBucketsInputBuilder, ListBucketsOutput};

/// Fluent builder for constructing a list buckets request
#[derive(Debug)]
pub struct ListBucketsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListBucketsInputBuilder,
}

impl ListBucketsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// List the caller's buckets
    pub async fn send(self) -> Result<ListBucketsOutput, Error> {
        let input = self.inner.build()?;
        crate::operation::list_buckets::ListBuckets::orchestrate(self.handle, input).await
    }

    /// Also look up the location of every listed bucket
    pub fn query_location(mut self, input: bool) -> Self {
        self.inner = self.inner.query_location(input);
        self
    }

    /// Also look up the location of every listed bucket
    pub fn set_query_location(mut self, input: Option<bool>) -> Self {
        self.inner = self.inner.set_query_location(input);
        self
    }

    /// Whether the location of every listed bucket is looked up
    pub fn get_query_location(&self) -> &Option<bool> {
        self.inner.get_query_location()
    }
}
