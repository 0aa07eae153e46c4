/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt::Write as _;
use std::io;

use aws_smithy_types::date_time::Format;
use aws_smithy_types::error::display::DisplayErrorContext;

use crate::error::Error;
use crate::operation::get_bucket_quota::GetBucketQuotaOutput;
use crate::operation::get_bucket_storage_info::GetBucketStorageInfoOutput;
use crate::operation::list_buckets::ListBucketsOutput;

/// Where an inspected bucket came from
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BucketOrigin {
    /// The bucket was returned by `ListBuckets`
    Listed,

    /// The bucket is the configured fallback probed when nothing could be listed
    Fallback,
}

impl BucketOrigin {
    fn label(&self) -> &'static str {
        match self {
            BucketOrigin::Listed => "Bucket",
            BucketOrigin::Fallback => "Example Bucket",
        }
    }
}

/// Writes rendered report sections to an output sink.
///
/// Each section is written with a single call so sections never interleave.
#[derive(Debug)]
pub struct Reporter<W> {
    out: W,
}

impl<W: io::Write> Reporter<W> {
    /// Create a reporter writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a rendered section and flush it
    pub fn write_section(&mut self, section: &str) -> io::Result<()> {
        self.out.write_all(section.as_bytes())?;
        self.out.flush()
    }

    /// Consume the reporter, returning the underlying sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Line announcing the client is ready
pub fn client_initialized() -> String {
    "OBS client initialized successfully\n".to_owned()
}

/// Lines reporting that configuration or client construction failed
pub fn client_init_failed(err: &Error) -> String {
    format!(
        "Failed to initialize OBS client: {}\nFailed to initialize OBS client. Exiting.\n",
        DisplayErrorContext(err)
    )
}

/// Line reporting that the client has been released
pub fn client_closed() -> String {
    "\nOBS client connection closed\n".to_owned()
}

/// Heading printed before listing buckets
pub fn listing_heading() -> String {
    "=== Listing Buckets ===\n".to_owned()
}

/// Render the outcome of `ListBuckets`
pub fn list_buckets(result: &Result<ListBucketsOutput, Error>) -> String {
    let mut out = String::new();
    match result {
        Ok(output) => {
            line(&mut out, "List Buckets Succeeded");
            field(&mut out, "", "requestId", output.request_id());
            let owner = output.owner();
            field(&mut out, "", "owner_id", owner.and_then(|o| o.id()));
            field(&mut out, "", "owner_name", owner.and_then(|o| o.display_name()));

            if output.buckets().is_empty() {
                line(&mut out, "No buckets found");
            } else {
                line(
                    &mut out,
                    &format!("Total buckets found: {}", output.buckets().len()),
                );
                for (index, bucket) in (1..).zip(output.buckets()) {
                    let created = bucket
                        .creation_date()
                        .and_then(|date| date.fmt(Format::DateTime).ok());
                    line(&mut out, &format!("bucket [{index}]"));
                    field(&mut out, "", "name", Some(bucket.name()));
                    field(&mut out, "", "create_date", created.as_deref());
                    field(&mut out, "", "location", bucket.location());
                }
            }
        }
        Err(err) => {
            line(&mut out, "List Buckets Failed");
            failure(&mut out, "", err);
        }
    }
    out
}

/// Render the storage info lookup of one bucket, heading included
pub fn storage_info(
    bucket: &str,
    origin: BucketOrigin,
    result: &Result<GetBucketStorageInfoOutput, Error>,
) -> String {
    let mut out = format!(
        "\n=== Getting Storage Info for {}: {bucket} ===\n",
        origin.label()
    );
    match result {
        Ok(output) => {
            line(
                &mut out,
                &format!("Get StorageInfo for Bucket \"{bucket}\" Succeeded"),
            );
            field(&mut out, "  ", "requestId", output.request_id());
            line(&mut out, &format!("  size: {} bytes", output.size()));
            line(&mut out, &format!("  objectNumber: {}", output.object_number()));
        }
        Err(err) => {
            line(&mut out, &format!("Get StorageInfo for Bucket \"{bucket}\" Failed"));
            failure(&mut out, "  ", err);
        }
    }
    out
}

/// Render the quota lookup of one bucket, heading included
pub fn quota(
    bucket: &str,
    origin: BucketOrigin,
    result: &Result<GetBucketQuotaOutput, Error>,
) -> String {
    let mut out = format!(
        "\n=== Getting Quota for {}: {bucket} ===\n",
        origin.label()
    );
    match result {
        Ok(output) => {
            line(&mut out, &format!("Get Quota for Bucket \"{bucket}\" Succeeded"));
            field(&mut out, "  ", "requestId", output.request_id());
            line(&mut out, &format!("  quota: {} bytes", output.quota()));
        }
        Err(err) => {
            line(&mut out, &format!("Get Quota for Bucket \"{bucket}\" Failed"));
            failure(&mut out, "  ", err);
        }
    }
    out
}

// Service failures report the fields the service sent; anything else reports the error chain.
fn failure(out: &mut String, indent: &str, err: &Error) {
    match err.service_error() {
        Some(service_err) => {
            field(out, indent, "requestId", service_err.request_id());
            field(out, indent, "errorCode", service_err.code());
            field(out, indent, "errorMessage", service_err.message());
        }
        None => {
            let _ = writeln!(out, "{indent}error: {}", DisplayErrorContext(err));
        }
    }
}

fn field(out: &mut String, indent: &str, name: &str, value: Option<&str>) {
    let _ = writeln!(out, "{indent}{name}: {}", value.unwrap_or_default());
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}
