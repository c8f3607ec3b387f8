// Copyright 2025 Icinga Web Response Project Authors. Licensed under Apache-2.0.

//! Json flavor of the response

use http::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::{json, Value};

use super::Response;
use crate::errors::{Error, Result};
use crate::request::RequestContext;

/// The payload states a json response can be in, last one set wins.
#[derive(Debug)]
enum Envelope {
    Success(Value),
    Fail(Value),
    Error(String),
}

/// Entry point for HTTP responses in json format.
///
/// Created via [`Response::json`], carrying over the non-body metadata
/// of the originating response. The body follows the jsend envelope: a
/// `success` or `fail` payload, or an `error` message, mutually
/// exclusive.
#[derive(Debug)]
pub struct JsonResponse {
    response: Response,
    envelope: Option<Envelope>,
}

impl JsonResponse {
    pub(super) fn from_response(mut response: Response) -> Self {
        // The json flavor always speaks json, whatever was set before.
        let _ = response.headers.remove(CONTENT_TYPE);
        response.content_type = Some("application/json".to_string());
        response.body.clear();

        Self {
            response,
            envelope: None,
        }
    }

    /// Set the payload of a successful request.
    pub fn success(mut self, data: impl Serialize) -> Result<Self> {
        self.envelope = Some(Envelope::Success(serde_json::to_value(data)?));
        Ok(self)
    }

    /// Set the payload explaining why a request could not be fulfilled.
    pub fn fail(mut self, data: impl Serialize) -> Result<Self> {
        self.envelope = Some(Envelope::Fail(serde_json::to_value(data)?));
        Ok(self)
    }

    /// Set the message describing an error while processing the request.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.envelope = Some(Envelope::Error(message.into()));
        self
    }

    /// Seal this response into an [`http::Response`].
    ///
    /// Fails if no payload was set.
    pub fn finish(mut self, ctx: &RequestContext) -> Result<http::Response<Vec<u8>>> {
        let body = match self.envelope.take() {
            Some(Envelope::Success(data)) => json!({ "status": "success", "data": data }),
            Some(Envelope::Fail(data)) => json!({ "status": "fail", "data": data }),
            Some(Envelope::Error(message)) => json!({ "status": "error", "message": message }),
            None => return Err(Error::MissingPayload),
        };

        self.response.body = serde_json::to_vec(&body)?;
        self.response.finish(ctx)
    }
}
