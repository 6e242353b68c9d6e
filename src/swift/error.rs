// OpenSwift Rust Library for OpenStack Swift Compatible Object Storage
// Copyright 2025 OpenSwift Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error definitions for Swift operations

use thiserror::Error;

/// Failure to decode a listing page body into container names or entries.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("listing body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("listing body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported listing content type: {0}")]
    UnsupportedContentType(String),
    #[error("invalid timestamp in listing entry: {0}")]
    Time(#[from] chrono::ParseError),
}

/// Error definitions for all Swift API operations.
///
/// Every operation is a single request/response exchange: callers either get
/// a fully populated response or exactly one of these errors. Nothing is
/// retried or swallowed inside the SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// The response status was not in the operation's acceptable set.
    #[error("{operation} failed with unexpected HTTP status {status}")]
    UnexpectedStatus {
        operation: &'static str,
        status: u16,
    },

    /// The request could not be completed, surfaced unchanged from reqwest.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A listing page body could not be decoded.
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid container name: {0}")]
    InvalidContainerName(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error(transparent)]
    InvalidHeaderName(#[from] http::header::InvalidHeaderName),

    #[error(transparent)]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    #[error(transparent)]
    HeaderToStr(#[from] http::header::ToStrError),

    #[error(transparent)]
    IntParse(#[from] std::num::ParseIntError),
}

impl Error {
    /// The HTTP status carried by an [`Error::UnexpectedStatus`], if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
