/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Types for the list buckets operation
pub mod list_buckets;

/// Types for the bucket storage info operation
pub mod get_bucket_storage_info;

/// Types for the bucket quota operation
pub mod get_bucket_quota;
