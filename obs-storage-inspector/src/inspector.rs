/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::io;

use futures_util::stream::{self, StreamExt};
use tracing::Instrument;

use crate::report::{self, BucketOrigin, Reporter};
use crate::Client;

/// Counters describing a completed inspection run
#[non_exhaustive]
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RunSummary {
    /// Number of buckets returned by `ListBuckets`
    pub buckets_listed: usize,

    /// Whether the fallback bucket was probed
    pub used_fallback: bool,

    /// Whether `ListBuckets` itself failed
    pub listing_failed: bool,

    /// Number of reported calls made: `ListBuckets` plus the storage info and quota call per
    /// inspected bucket. Location lookups made while listing are not counted.
    pub calls_attempted: usize,

    /// Number of reported calls that failed
    pub calls_failed: usize,
}

#[derive(Debug)]
struct BucketReport {
    rendered: String,
    failed_calls: usize,
}

/// Run a full inspection: list buckets, then report storage info and quota for each one.
///
/// When listing fails or finds no buckets the configured fallback bucket is inspected instead.
/// Individual call failures are reported and never abort the run. The client is closed exactly
/// once before returning, whatever the outcome.
///
/// Only failures to write the report are returned as errors.
pub async fn run<W: io::Write>(
    client: Client,
    reporter: &mut Reporter<W>,
) -> io::Result<RunSummary> {
    let result = inspect(&client, reporter).await;
    client.close();
    let summary = result?;
    reporter.write_section(&report::client_closed())?;
    tracing::info!(
        buckets_listed = summary.buckets_listed,
        used_fallback = summary.used_fallback,
        calls_attempted = summary.calls_attempted,
        calls_failed = summary.calls_failed,
        "inspection complete"
    );
    Ok(summary)
}

async fn inspect<W: io::Write>(
    client: &Client,
    reporter: &mut Reporter<W>,
) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    reporter.write_section(&report::listing_heading())?;
    let listing = client
        .list_buckets()
        .query_location(client.config().query_location())
        .send()
        .await;
    reporter.write_section(&report::list_buckets(&listing))?;
    summary.calls_attempted += 1;

    let (buckets, origin) = match &listing {
        Ok(output) if !output.buckets().is_empty() => {
            summary.buckets_listed = output.buckets().len();
            let names = output
                .buckets()
                .iter()
                .map(|bucket| bucket.name().to_owned())
                .collect::<Vec<_>>();
            (names, BucketOrigin::Listed)
        }
        Ok(_) => {
            tracing::info!("no buckets listed, probing fallback bucket");
            (fallback(client), BucketOrigin::Fallback)
        }
        Err(err) => {
            tracing::warn!(error = %err, "listing buckets failed, probing fallback bucket");
            summary.calls_failed += 1;
            summary.listing_failed = true;
            (fallback(client), BucketOrigin::Fallback)
        }
    };
    summary.used_fallback = origin == BucketOrigin::Fallback;

    // `buffered` yields in input order so reports come out in listing order
    let mut reports = stream::iter(buckets)
        .map(|bucket| inspect_bucket(client, bucket, origin))
        .buffered(client.handle.num_workers());

    while let Some(bucket_report) = reports.next().await {
        reporter.write_section(&bucket_report.rendered)?;
        summary.calls_attempted += 2;
        summary.calls_failed += bucket_report.failed_calls;
    }

    Ok(summary)
}

fn fallback(client: &Client) -> Vec<String> {
    vec![client.config().fallback_bucket().to_owned()]
}

// Storage info and quota for one bucket are fetched in order, the second regardless of the first.
async fn inspect_bucket(client: &Client, bucket: String, origin: BucketOrigin) -> BucketReport {
    let span = tracing::debug_span!("inspect-bucket", bucket = %bucket);
    async move {
        let storage_info = client
            .get_bucket_storage_info()
            .bucket(&bucket)
            .send()
            .await;
        let quota = client.get_bucket_quota().bucket(&bucket).send().await;

        let failed_calls = usize::from(storage_info.is_err()) + usize::from(quota.is_err());
        if failed_calls > 0 {
            tracing::debug!(failed_calls, "bucket inspection finished with failures");
        }

        let mut rendered = report::storage_info(&bucket, origin, &storage_info);
        rendered.push_str(&report::quota(&bucket, origin, &quota));
        BucketReport {
            rendered,
            failed_calls,
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use aws_credential_types::Credentials;
    use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};

    use super::*;
    use crate::Config;

    #[tokio::test]
    async fn test_run_closes_client_when_nothing_is_reachable() {
        let list_buckets = mock!(aws_sdk_s3::Client::list_buckets)
            .then_output(|| ListBucketsOutput::builder().build());
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list_buckets]);
        let config = Config::builder()
            .credentials(Credentials::new("ak", "sk", None, None, "test"))
            .endpoint("http://127.0.0.1:1")
            .force_path_style(true)
            .client(s3)
            .build()
            .unwrap();
        let client = Client::new(config).unwrap();
        let handle = Arc::downgrade(&client.handle);

        let mut reporter = Reporter::new(Vec::new());
        let summary = run(client, &mut reporter).await.unwrap();

        assert!(handle.upgrade().is_none());
        assert!(summary.used_fallback);
        assert!(!summary.listing_failed);
        assert_eq!(3, summary.calls_attempted);
        assert_eq!(2, summary.calls_failed);

        let written = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(written.contains("No buckets found\n"));
        assert!(written.contains("=== Getting Storage Info for Example Bucket: examplebucket ==="));
        assert!(written.ends_with("\nOBS client connection closed\n"));
        assert_eq!(1, written.matches("OBS client connection closed").count());
    }
}
