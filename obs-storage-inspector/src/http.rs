/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Signed requests for OBS bucket sub-resources (`?storageinfo`, `?quota`) that the S3 SDK
//! doesn't model.

use std::time::SystemTime;

use aws_credential_types::Credentials;
use aws_sigv4::http_request::{
    sign, PayloadChecksumKind, PercentEncodingMode, SignableBody, SignableRequest,
    SigningParams, SigningSettings, UriPathNormalizationMode,
};
use aws_sigv4::sign::v4;
use aws_smithy_runtime_api::client::identity::Identity;
use reqwest::header::HeaderMap;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{self, Error, ErrorKind, ServiceError};
use crate::types::StatusClass;

const SIGNING_NAME: &str = "s3";

/// Response headers carrying the request id, in order of preference
const REQUEST_ID_HEADERS: [&str; 2] = ["x-obs-request-id", "x-amz-request-id"];

/// Validate and normalize a regional endpoint.
///
/// The endpoint must be an absolute `http` or `https` URL with a host and no path or query.
pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url, Error> {
    let url = Url::parse(endpoint)
        .map_err(|err| error::client_init(format!("malformed endpoint `{endpoint}`: {err}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(error::client_init(format!(
            "endpoint `{endpoint}` must use http or https"
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(error::client_init(format!(
            "endpoint `{endpoint}` has no host"
        )));
    }
    if url.path() != "/" || url.query().is_some() {
        return Err(error::client_init(format!(
            "endpoint `{endpoint}` must not contain a path or query"
        )));
    }
    Ok(url)
}

/// A response to a sub-resource request, before its body is decoded.
#[derive(Debug)]
pub(crate) struct RawResponse {
    pub(crate) status: u16,
    pub(crate) request_id: Option<String>,
    pub(crate) body: String,
}

impl RawResponse {
    /// Decode a success body, or turn a failure into a service error.
    pub(crate) fn decode<T: DeserializeOwned>(self) -> Result<T, Error> {
        if !StatusClass::from_status(self.status).is_success() {
            return Err(self.into_error());
        }
        quick_xml::de::from_str(&self.body).map_err(|err| {
            error::invalid_response(format!(
                "failed to decode response body (request id: {}): {err}",
                self.request_id.as_deref().unwrap_or("<none>")
            ))
        })
    }

    fn into_error(self) -> Error {
        let body = parse_error_body(&self.body);
        let request_id = self.request_id.or(body.request_id);
        let service_err = ServiceError::new(self.status)
            .with_request_id(request_id)
            .with_code(body.code)
            .with_message(body.message);
        Error::new(ErrorKind::Service(service_err.clone()), service_err)
    }
}

/// The XML error document returned with failed requests
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

fn parse_error_body(body: &str) -> ErrorBody {
    if body.trim().is_empty() {
        return ErrorBody::default();
    }
    quick_xml::de::from_str(body).unwrap_or_else(|err| {
        tracing::debug!("unable to decode error body: {err}");
        ErrorBody::default()
    })
}

fn request_id(headers: &HeaderMap) -> Option<String> {
    REQUEST_ID_HEADERS
        .iter()
        .filter_map(|name| headers.get(*name))
        .find_map(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Client for bucket sub-resource requests
#[derive(Debug)]
pub(crate) struct SubresourceClient {
    http: reqwest::Client,
    endpoint: Url,
    region: String,
    credentials: Credentials,
    force_path_style: bool,
}

impl SubresourceClient {
    pub(crate) fn new(
        endpoint: Url,
        region: impl Into<String>,
        credentials: Credentials,
        force_path_style: bool,
    ) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(error::client_init)?;
        Ok(Self {
            http,
            endpoint,
            region: region.into(),
            credentials,
            force_path_style,
        })
    }

    /// The URL addressing `subresource` of `bucket`
    pub(crate) fn bucket_url(&self, bucket: &str, subresource: &str) -> Result<Url, Error> {
        let mut url = self.endpoint.clone();
        if self.force_path_style {
            url.path_segments_mut()
                .map_err(|_| error::client_init("endpoint can't be a base URL"))?
                .pop_if_empty()
                .push(bucket);
        } else {
            let host = format!("{bucket}.{}", url.host_str().unwrap_or_default());
            url.set_host(Some(&host))
                .map_err(error::from_kind(ErrorKind::InputInvalid))?;
        }
        url.set_query(Some(subresource));
        Ok(url)
    }

    /// Send a signed `GET` for `subresource` of `bucket`.
    pub(crate) async fn get(&self, bucket: &str, subresource: &str) -> Result<RawResponse, Error> {
        let url = self.bucket_url(bucket, subresource)?;
        tracing::debug!(%url, "sending sub-resource request");

        let mut request = self.http.get(url.clone());
        for (name, value) in self.sign_get(&url)? {
            request = request.header(name, value);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let request_id = request_id(response.headers());
        let body = response.text().await?;

        tracing::debug!(status, request_id = ?request_id, "received sub-resource response");
        Ok(RawResponse {
            status,
            request_id,
            body,
        })
    }

    /// SigV4 headers for an empty-bodied `GET` of `url`
    fn sign_get(&self, url: &Url) -> Result<Vec<(String, String)>, Error> {
        let identity: Identity = self.credentials.clone().into();

        let mut settings = SigningSettings::default();
        settings.payload_checksum_kind = PayloadChecksumKind::XAmzSha256;
        settings.percent_encoding_mode = PercentEncodingMode::Single;
        settings.uri_path_normalization_mode = UriPathNormalizationMode::Disabled;

        let params: SigningParams<'_> = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name(SIGNING_NAME)
            .time(SystemTime::now())
            .settings(settings)
            .build()
            .map_err(error::from_kind(ErrorKind::InputInvalid))?
            .into();

        let signable = SignableRequest::new(
            "GET",
            url.as_str(),
            std::iter::empty(),
            SignableBody::Bytes(&[]),
        )
        .map_err(error::from_kind(ErrorKind::InputInvalid))?;

        let (instructions, _signature) = sign(signable, &params)
            .map_err(error::from_kind(ErrorKind::InputInvalid))?
            .into_parts();
        let (headers, _params) = instructions.into_parts();

        Ok(headers
            .into_iter()
            .map(|header| (header.name().to_owned(), header.value().to_owned()))
            .collect())
    }
}
