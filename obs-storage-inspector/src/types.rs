/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::DateTime;

/// Coarse classification of a response status, derived once from the HTTP status code.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StatusClass {
    /// Status below 300
    Success,

    /// Status in `300..500`. Redirects are not followed and count as failures.
    ClientError,

    /// Status of 500 or above
    ServerError,

    /// No response was received
    TransportError,
}

impl StatusClass {
    /// Classify an HTTP status code
    pub fn from_status(status: u16) -> Self {
        match status {
            0..=299 => StatusClass::Success,
            300..=499 => StatusClass::ClientError,
            _ => StatusClass::ServerError,
        }
    }

    /// Whether this class represents a successful response
    pub fn is_success(&self) -> bool {
        matches!(self, StatusClass::Success)
    }
}

/// The concurrency settings used when inspecting buckets.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum ConcurrencySetting {
    /// Inspect one bucket at a time. This is a fixed default, not derived from the host.
    #[default]
    Sequential,

    /// Explicitly configured number of buckets inspected at once.
    Explicit(usize),
}

/// Owner of the listed buckets
#[non_exhaustive]
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Owner {
    /// Owner (account) id
    pub id: Option<String>,

    /// Owner display name
    pub display_name: Option<String>,
}

impl Owner {
    /// Create an owner from its id and display name
    pub fn new(id: Option<String>, display_name: Option<String>) -> Self {
        Self { id, display_name }
    }

    /// Owner (account) id
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Owner display name
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }
}

/// A bucket as reported by `ListBuckets`
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    /// Bucket name
    pub name: String,

    /// When the bucket was created
    pub creation_date: Option<DateTime>,

    /// Region the bucket lives in, when it was requested and reported
    pub location: Option<String>,
}

impl Bucket {
    /// Create a bucket with the given name and no other metadata
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            creation_date: None,
            location: None,
        }
    }

    /// Set the creation date
    pub fn with_creation_date(mut self, creation_date: Option<DateTime>) -> Self {
        self.creation_date = creation_date;
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    /// Bucket name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// When the bucket was created
    pub fn creation_date(&self) -> Option<&DateTime> {
        self.creation_date.as_ref()
    }

    /// Region the bucket lives in
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

#[cfg(test)]
mod test {
    use super::{ConcurrencySetting, StatusClass};

    #[test]
    fn test_concurrency_defaults_to_sequential() {
        assert_eq!(ConcurrencySetting::Sequential, ConcurrencySetting::default());
    }

    #[test]
    fn test_status_class_boundaries() {
        assert_eq!(StatusClass::Success, StatusClass::from_status(200));
        assert_eq!(StatusClass::Success, StatusClass::from_status(204));
        assert_eq!(StatusClass::Success, StatusClass::from_status(299));
        assert_eq!(StatusClass::ClientError, StatusClass::from_status(300));
        assert_eq!(StatusClass::ClientError, StatusClass::from_status(404));
        assert_eq!(StatusClass::ClientError, StatusClass::from_status(499));
        assert_eq!(StatusClass::ServerError, StatusClass::from_status(500));
        assert_eq!(StatusClass::ServerError, StatusClass::from_status(503));
        assert!(StatusClass::from_status(200).is_success());
        assert!(!StatusClass::TransportError.is_success());
    }
}
