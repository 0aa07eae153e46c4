/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
pub use input::{GetBucketQuotaInput, GetBucketQuotaInputBuilder};

mod output;
pub use output::{GetBucketQuotaOutput, GetBucketQuotaOutputBuilder};

use std::sync::Arc;

use serde::Deserialize;

use crate::error::{Error, ErrorKind};

const SUBRESOURCE: &str = "quota";

/// Body of a successful `GET /?quota`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct QuotaBody {
    storage_quota: u64,
}

/// Operation struct for fetching the quota of a single bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct GetBucketQuota;

impl GetBucketQuota {
    /// Execute a single `GetBucketQuota` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: GetBucketQuotaInput,
    ) -> Result<GetBucketQuotaOutput, Error> {
        let bucket = input
            .bucket()
            .ok_or_else(|| Error::new(ErrorKind::InputInvalid, "bucket is required"))?;

        let raw = handle.subresources().get(bucket, SUBRESOURCE).await?;
        let request_id = raw.request_id.clone();
        let body: QuotaBody = raw.decode()?;

        Ok(GetBucketQuotaOutput::builder()
            .set_request_id(request_id)
            .quota(body.storage_quota)
            .build())
    }
}

#[cfg(test)]
mod test {
    use super::QuotaBody;

    #[test]
    fn test_decode_quota_body() {
        let body = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Quota xmlns="http://obs.myhwclouds.com/doc/2015-06-30/">
  <StorageQuota>1073741824</StorageQuota>
</Quota>"#;

        let parsed: QuotaBody = quick_xml::de::from_str(body).unwrap();
        assert_eq!(1073741824, parsed.storage_quota);
    }
}
