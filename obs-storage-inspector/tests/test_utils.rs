/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_credential_types::Credentials;
use aws_sdk_s3::operation::list_buckets::ListBucketsOutput;
use aws_sdk_s3::types::{Bucket, Owner};
use aws_smithy_runtime_api::{client::orchestrator::HttpResponse, http::StatusCode};
use aws_smithy_types::body::SdkBody;
use httptest::matchers::{all_of, contains, eq, matches, request, url_decoded};
use httptest::responders::{status_code, Responder};
use httptest::{Expectation, Server};
use obs_storage_inspector::inspector::RunSummary;
use obs_storage_inspector::report::Reporter;
use obs_storage_inspector::types::ConcurrencySetting;
use obs_storage_inspector::{Client, Config};

pub const STORAGE_INFO: &str = "storageinfo";
pub const QUOTA: &str = "quota";

/// Listing of the given bucket names, each already carrying its region
pub fn listing(names: &[&str]) -> ListBucketsOutput {
    let mut builder = ListBucketsOutput::builder().owner(
        Owner::builder()
            .id("0a1b2c3d4e5f")
            .display_name("inspector-tests")
            .build(),
    );
    for name in names {
        builder = builder.buckets(
            Bucket::builder()
                .name(*name)
                .bucket_region("cn-north-4")
                .build(),
        );
    }
    builder.build()
}

/// Build a client whose sub-resource requests go to `server` and SDK calls go to `s3`.
pub fn client(server: &Server, s3: aws_sdk_s3::Client, concurrency: usize) -> Client {
    let config = Config::builder()
        .credentials(Credentials::new("ak", "sk", None, None, "test"))
        .endpoint(server.url_str("/"))
        .region("cn-north-4")
        .force_path_style(true)
        .concurrency(ConcurrencySetting::Explicit(concurrency))
        .client(s3)
        .build()
        .expect("valid config");
    Client::new(config).expect("valid client")
}

pub fn storage_info_body(size: u64, object_number: u64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<GetBucketStorageInfoResult xmlns="http://obs.myhwclouds.com/doc/2015-06-30/"><Size>{size}</Size><ObjectNumber>{object_number}</ObjectNumber></GetBucketStorageInfoResult>"#
    )
}

pub fn quota_body(quota: u64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Quota xmlns="http://obs.myhwclouds.com/doc/2015-06-30/"><StorageQuota>{quota}</StorageQuota></Quota>"#
    )
}

pub fn error_body(code: &str, message: &str, request_id: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Error><Code>{code}</Code><Message>{message}</Message><RequestId>{request_id}</RequestId><HostId>obs-host</HostId></Error>"#
    )
}

/// An S3 style error response for SDK mocks, request id carried in `x-amz-request-id`
pub fn s3_error_http_resp(
    status: u16,
    code: &str,
    message: &str,
    request_id: &str,
) -> HttpResponse {
    let mut resp = HttpResponse::new(
        StatusCode::try_from(status).unwrap(),
        SdkBody::from(error_body(code, message, request_id)),
    );
    resp.headers_mut()
        .insert("x-amz-request-id", request_id.to_owned());
    resp.headers_mut().insert("content-type", "application/xml");
    resp
}

/// Respond with `body`, the given status and an OBS request id header
pub fn respond(status: u16, request_id: &str, body: String) -> impl Responder {
    status_code(status)
        .insert_header("x-obs-request-id", request_id.to_owned())
        .insert_header("Content-Type", "application/xml")
        .body(body)
}

/// Expect exactly one signed path style `GET` of `subresource` on `bucket`
pub fn expect_subresource(
    server: &Server,
    bucket: &str,
    subresource: &'static str,
    responder: impl Responder + 'static,
) {
    server.expect(
        Expectation::matching(all_of![
            request::method("GET"),
            request::path(eq(format!("/{bucket}"))),
            request::query(url_decoded(contains((subresource, "")))),
            request::headers(contains(("authorization", matches("^AWS4-HMAC-SHA256 ")))),
        ])
        .times(1)
        .respond_with(responder),
    );
}

/// Run the inspector to completion, returning its summary and the written report
pub async fn run(client: Client) -> (RunSummary, String) {
    let mut reporter = Reporter::new(Vec::new());
    let summary = obs_storage_inspector::inspector::run(client, &mut reporter)
        .await
        .expect("writing to a Vec never fails");
    let report = String::from_utf8(reporter.into_inner()).expect("report is utf-8");
    (summary, report)
}
