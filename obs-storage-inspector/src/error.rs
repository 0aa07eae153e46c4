/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_types::request_id::RequestId;

use crate::types::StatusClass;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of inspector errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Required configuration (e.g. credentials) is missing or invalid
    ConfigurationInvalid,

    /// The client could not be constructed (e.g. malformed endpoint)
    ClientInit,

    /// Operation input validation issues
    InputInvalid,

    /// The service answered with a non-success status
    Service(ServiceError),

    /// The request never produced a response (connect failure, timeout, etc)
    Transport,

    /// A success response whose body could not be decoded
    ResponseInvalid,
}

/// Failure details reported by the service for a single request.
///
/// Every field is kept exactly as the service sent it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ServiceError {
    status: u16,
    request_id: Option<String>,
    code: Option<String>,
    message: Option<String>,
}

impl ServiceError {
    /// Create a new `ServiceError` for the given HTTP status
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Default::default()
        }
    }

    /// Set the request id returned with the failed response
    pub fn with_request_id(mut self, request_id: Option<impl Into<String>>) -> Self {
        self.request_id = request_id.map(Into::into);
        self
    }

    /// Set the service error code (e.g. `NoSuchBucket`)
    pub fn with_code(mut self, code: Option<impl Into<String>>) -> Self {
        self.code = code.map(Into::into);
        self
    }

    /// Set the human readable error message
    pub fn with_message(mut self, message: Option<impl Into<String>>) -> Self {
        self.message = message.map(Into::into);
        self
    }

    /// HTTP status code of the failed response
    pub fn status(&self) -> u16 {
        self.status
    }

    /// The status class derived from [`status`](Self::status)
    pub fn status_class(&self) -> StatusClass {
        StatusClass::from_status(self.status)
    }

    /// Request id assigned by the service, if any
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Service error code, if any
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Service error message, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status {} ({}): {}",
            self.status,
            self.code.as_deref().unwrap_or("<no code>"),
            self.message.as_deref().unwrap_or("<no message>")
        )?;
        if let Some(request_id) = &self.request_id {
            write!(f, " [request id: {request_id}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the service failure details when the service rejected the request.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(err) => Some(err),
            _ => None,
        }
    }

    /// The status class of the response that produced this error.
    ///
    /// Errors that happened without any response are classed as [`StatusClass::TransportError`].
    pub fn status_class(&self) -> StatusClass {
        match &self.kind {
            ErrorKind::Service(err) => err.status_class(),
            _ => StatusClass::TransportError,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::ConfigurationInvalid => write!(f, "invalid configuration"),
            ErrorKind::ClientInit => write!(f, "failed to initialize client"),
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::Service(err) => write!(f, "service error: {err}"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::ResponseInvalid => write!(f, "invalid response"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::new(ErrorKind::Transport, value)
    }
}

impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + RequestId + Send + Sync + 'static,
    R: HttpStatus + Send + Sync + fmt::Debug + 'static,
{
    fn from(value: SdkError<E, R>) -> Self {
        let kind = match &value {
            SdkError::ServiceError(context) => {
                let err = context.err();
                let service_err = ServiceError::new(context.raw().status_code())
                    .with_request_id(err.request_id())
                    .with_code(err.code())
                    .with_message(err.message());
                ErrorKind::Service(service_err)
            }
            SdkError::ConstructionFailure(_) => ErrorKind::InputInvalid,
            SdkError::ResponseError(_) => ErrorKind::ResponseInvalid,
            _ => ErrorKind::Transport,
        };

        Error::new(kind, value)
    }
}

/// Access to the HTTP status code of a raw SDK response.
pub trait HttpStatus {
    /// The numeric HTTP status code
    fn status_code(&self) -> u16;
}

impl HttpStatus for aws_smithy_runtime_api::http::Response {
    fn status_code(&self) -> u16 {
        self.status().as_u16()
    }
}

pub(crate) fn invalid_configuration<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::ConfigurationInvalid, err)
}

pub(crate) fn client_init<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::ClientInit, err)
}

pub(crate) fn invalid_response<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::ResponseInvalid, err)
}

pub(crate) fn from_kind<E>(kind: ErrorKind) -> impl FnOnce(E) -> Error
where
    E: Into<BoxError>,
{
    |err| Error::new(kind, err)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_service_error_preserves_fields() {
        let err = ServiceError::new(403)
            .with_request_id(Some("0000018A2B3C"))
            .with_code(Some("AccessDenied"))
            .with_message(Some("Access Denied"));

        assert_eq!(403, err.status());
        assert_eq!(Some("0000018A2B3C"), err.request_id());
        assert_eq!(Some("AccessDenied"), err.code());
        assert_eq!(Some("Access Denied"), err.message());
        assert_eq!(StatusClass::ClientError, err.status_class());
        assert_eq!(
            "status 403 (AccessDenied): Access Denied [request id: 0000018A2B3C]",
            err.to_string()
        );
    }

    #[test]
    fn test_error_status_class() {
        let service = Error::new(
            ErrorKind::Service(ServiceError::new(503)),
            "slow down",
        );
        assert_eq!(StatusClass::ServerError, service.status_class());
        assert!(service.service_error().is_some());

        let transport = Error::new(ErrorKind::Transport, "connection refused");
        assert_eq!(StatusClass::TransportError, transport.status_class());
        assert!(transport.service_error().is_none());
    }
}
