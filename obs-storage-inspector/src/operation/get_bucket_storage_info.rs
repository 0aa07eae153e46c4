/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
pub use input::{GetBucketStorageInfoInput, GetBucketStorageInfoInputBuilder};

mod output;
pub use output::{GetBucketStorageInfoOutput, GetBucketStorageInfoOutputBuilder};

use std::sync::Arc;

use serde::Deserialize;

use crate::error::{Error, ErrorKind};

const SUBRESOURCE: &str = "storageinfo";

/// Body of a successful `GET /?storageinfo`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct StorageInfoBody {
    size: u64,
    object_number: u64,
}

/// Operation struct for fetching the storage usage of a single bucket
#[derive(Clone, Default, Debug)]
pub(crate) struct GetBucketStorageInfo;

impl GetBucketStorageInfo {
    /// Execute a single `GetBucketStorageInfo` operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: GetBucketStorageInfoInput,
    ) -> Result<GetBucketStorageInfoOutput, Error> {
        let bucket = input
            .bucket()
            .ok_or_else(|| Error::new(ErrorKind::InputInvalid, "bucket is required"))?;

        let raw = handle.subresources().get(bucket, SUBRESOURCE).await?;
        let request_id = raw.request_id.clone();
        let body: StorageInfoBody = raw.decode()?;

        Ok(GetBucketStorageInfoOutput::builder()
            .set_request_id(request_id)
            .size(body.size)
            .object_number(body.object_number)
            .build())
    }
}
