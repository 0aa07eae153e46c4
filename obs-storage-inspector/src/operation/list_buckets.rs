/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
pub use input::{ListBucketsInput, ListBucketsInputBuilder};

mod output;
pub use output::{ListBucketsOutput, ListBucketsOutputBuilder};

use std::sync::Arc;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_types::request_id::RequestId;

use crate::error::Error;
use crate::types::{Bucket, Owner};

/// Operation struct for listing the caller's buckets
#[derive(Clone, Default, Debug)]
pub(crate) struct ListBuckets;

impl ListBuckets {
    /// Execute a single `ListBuckets` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ListBucketsInput,
    ) -> Result<ListBucketsOutput, Error> {
        let resp = handle.s3().list_buckets().send().await?;

        let owner = resp.owner().map(|owner| {
            Owner::new(
                owner.id().map(str::to_owned),
                owner.display_name().map(str::to_owned),
            )
        });

        let mut buckets = Vec::with_capacity(resp.buckets().len());
        for bucket in resp.buckets() {
            let Some(name) = bucket.name() else {
                tracing::debug!("skipping bucket entry without a name");
                continue;
            };

            let mut location = bucket.bucket_region().map(str::to_owned);
            if input.query_location() && location.is_none() {
                location = bucket_location(&handle, name).await;
            }

            buckets.push(
                Bucket::new(name)
                    .with_creation_date(bucket.creation_date().cloned())
                    .with_location(location),
            );
        }

        tracing::debug!(count = buckets.len(), "listed buckets");
        Ok(ListBucketsOutput::builder()
            .set_request_id(resp.request_id().map(str::to_owned))
            .set_owner(owner)
            .set_buckets(buckets)
            .build())
    }
}

/// Look up the region of a single bucket. A failed lookup leaves the location unknown.
async fn bucket_location(handle: &crate::client::Handle, bucket: &str) -> Option<String> {
    match handle.s3().get_bucket_location().bucket(bucket).send().await {
        Ok(resp) => resp
            .location_constraint()
            .map(|constraint| constraint.as_str().to_owned())
            .filter(|location| !location.is_empty()),
        Err(err) => {
            tracing::warn!(
                bucket,
                "failed to query bucket location: {}",
                DisplayErrorContext(&err)
            );
            None
        }
    }
}

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use crate::types::StatusClass;
    use aws_sdk_s3::operation::get_bucket_location::GetBucketLocationOutput;
    use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
    use aws_sdk_s3::types::{Bucket, BucketLocationConstraint, Owner};
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use aws_smithy_runtime_api::{client::orchestrator::HttpResponse, http::StatusCode};
    use aws_smithy_types::body::SdkBody;
    use aws_smithy_types::DateTime;

    /// An S3 style XML error response
    fn error_http_resp(status: u16, code: &str, message: &str, request_id: &str) -> HttpResponse {
        let body = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <Error><Code>{code}</Code><Message>{message}</Message>\
             <RequestId>{request_id}</RequestId></Error>"
        );
        let mut resp =
            HttpResponse::new(StatusCode::try_from(status).unwrap(), SdkBody::from(body));
        resp.headers_mut()
            .insert("x-amz-request-id", request_id.to_owned());
        resp.headers_mut().insert("content-type", "application/xml");
        resp
    }

    fn test_client(s3: aws_sdk_s3::Client) -> crate::Client {
        let config = crate::Config::builder()
            .credentials(aws_credential_types::Credentials::new(
                "ak", "sk", None, None, "test",
            ))
            .endpoint("http://127.0.0.1:1")
            .client(s3)
            .build()
            .unwrap();
        crate::Client::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_list_buckets_in_service_order() {
        let list_buckets = mock!(aws_sdk_s3::Client::list_buckets).then_output(|| {
            ListBucketsOutput::builder()
                .owner(
                    Owner::builder()
                        .id("owner-id")
                        .display_name("owner-name")
                        .build(),
                )
                .buckets(
                    Bucket::builder()
                        .name("zeta")
                        .creation_date(DateTime::from_secs(1_700_000_000))
                        .build(),
                )
                .buckets(Bucket::builder().name("alpha").build())
                .build()
        });
        let location = mock!(aws_sdk_s3::Client::get_bucket_location)
            .match_requests(|r| r.bucket() == Some("zeta"))
            .then_output(|| {
                GetBucketLocationOutput::builder()
                    .location_constraint(BucketLocationConstraint::from("cn-north-4"))
                    .build()
            });
        let location_err = mock!(aws_sdk_s3::Client::get_bucket_location)
            .match_requests(|r| r.bucket() == Some("alpha"))
            .then_http_response(|| {
                error_http_resp(403, "AccessDenied", "Access Denied", "00000190A1B2C3D5")
            });

        let s3 = mock_client!(
            aws_sdk_s3,
            RuleMode::MatchAny,
            &[&list_buckets, &location, &location_err]
        );
        let client = test_client(s3);

        let output = client
            .list_buckets()
            .query_location(true)
            .send()
            .await
            .unwrap();

        let owner = output.owner().unwrap();
        assert_eq!(Some("owner-id"), owner.id());
        assert_eq!(Some("owner-name"), owner.display_name());

        let names: Vec<&str> = output.buckets().iter().map(|b| b.name()).collect();
        assert_eq!(vec!["zeta", "alpha"], names);
        assert_eq!(Some("cn-north-4"), output.buckets()[0].location());
        assert_eq!(
            Some(&DateTime::from_secs(1_700_000_000)),
            output.buckets()[0].creation_date()
        );
        assert_eq!(None, output.buckets()[1].location());
        assert_eq!(1, location.num_calls());
        assert_eq!(1, location_err.num_calls());
    }

    #[tokio::test]
    async fn test_list_buckets_without_location() {
        let list_buckets = mock!(aws_sdk_s3::Client::list_buckets).then_output(|| {
            ListBucketsOutput::builder()
                .buckets(Bucket::builder().name("b1").build())
                .build()
        });
        let location = mock!(aws_sdk_s3::Client::get_bucket_location).then_output(|| {
            GetBucketLocationOutput::builder()
                .location_constraint(BucketLocationConstraint::from("cn-north-4"))
                .build()
        });

        let s3 = mock_client!(aws_sdk_s3, RuleMode::MatchAny, &[&list_buckets, &location]);
        let client = test_client(s3);

        let output = client.list_buckets().send().await.unwrap();
        assert_eq!(1, output.buckets().len());
        assert_eq!(None, output.buckets()[0].location());
        assert_eq!(0, location.num_calls());
    }

    #[tokio::test]
    async fn test_list_buckets_empty_is_success() {
        let list_buckets = mock!(aws_sdk_s3::Client::list_buckets)
            .then_output(|| ListBucketsOutput::builder().build());
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list_buckets]);
        let client = test_client(s3);

        let output = client
            .list_buckets()
            .query_location(true)
            .send()
            .await
            .unwrap();
        assert!(output.buckets().is_empty());
        assert!(output.owner().is_none());
    }

    #[tokio::test]
    async fn test_list_buckets_service_error() {
        let list_buckets = mock!(aws_sdk_s3::Client::list_buckets).then_http_response(|| {
            error_http_resp(
                403,
                "InvalidAccessKeyId",
                "The access key Id you provided does not exist in our records.",
                "00000190A1B2C3D4",
            )
        });
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list_buckets]);
        let client = test_client(s3);

        let err = client.list_buckets().send().await.unwrap_err();
        let service_err = match err.kind() {
            ErrorKind::Service(service_err) => service_err,
            other => panic!("expected service error, got {other:?}"),
        };
        assert_eq!(Some("InvalidAccessKeyId"), service_err.code());
        assert_eq!(
            Some("The access key Id you provided does not exist in our records."),
            service_err.message()
        );
        assert_eq!(Some("00000190A1B2C3D4"), service_err.request_id());
        assert_eq!(403, service_err.status());
        assert_eq!(StatusClass::ClientError, err.status_class());
    }

    #[tokio::test]
    async fn test_list_buckets_server_error_status() {
        let list_buckets = mock!(aws_sdk_s3::Client::list_buckets).then_http_response(|| {
            error_http_resp(
                503,
                "ServiceUnavailable",
                "Please reduce your request rate.",
                "req-503",
            )
        });
        let s3 = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&list_buckets]);
        let client = test_client(s3);

        let err = client.list_buckets().send().await.unwrap_err();
        assert_eq!(StatusClass::ServerError, err.status_class());
        let service_err = err.service_error().unwrap();
        assert_eq!(503, service_err.status());
        assert_eq!(Some("ServiceUnavailable"), service_err.code());
    }
}
