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

use crate::swift::error::{Error, ParseError};
use crate::swift::header_constants::CONTENT_TYPE;
use crate::swift::response_traits::impl_has_swift_fields;
use crate::swift::types::{ContainerInfo, FromSwiftResponse, SwiftRequest};
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;

/// One page of the account listing.
///
/// The body is decoded eagerly when the page is constructed, so a page in
/// hand always has its names parsed. For the plain-text listing only
/// [`names()`](ListContainersResponse::names) is populated; the detailed JSON
/// listing additionally fills [`entries()`](ListContainersResponse::entries).
#[derive(Debug)]
pub struct ListContainersResponse {
    request: SwiftRequest,
    headers: HeaderMap,
    names: Vec<String>,
    entries: Vec<ContainerInfo>,
}

impl_has_swift_fields!(ListContainersResponse);

impl ListContainersResponse {
    /// Container names of this page, in the server's sort order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Detailed listing entries; empty unless the listing was requested with
    /// `full(true)`.
    pub fn entries(&self) -> &[ContainerInfo] {
        &self.entries
    }
}

#[async_trait]
impl FromSwiftResponse for ListContainersResponse {
    async fn from_swift_response(
        request: SwiftRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let response = response?;
        let headers = response.headers().clone();

        let content_type = match headers.get(CONTENT_TYPE) {
            Some(v) => v.to_str()?.to_string(),
            None => String::new(),
        };
        let body: Bytes = response.bytes().await?;
        let (names, entries) = parse_listing(&content_type, &body)?;

        Ok(Self {
            request,
            headers,
            names,
            entries,
        })
    }
}

/// Decodes a listing page body according to its content type. An empty body
/// is an empty page in either format.
fn parse_listing(
    content_type: &str,
    body: &[u8],
) -> Result<(Vec<String>, Vec<ContainerInfo>), ParseError> {
    if body.is_empty() {
        return Ok((Vec::new(), Vec::new()));
    }

    let mime = content_type.split(';').next().unwrap_or_default().trim();
    match mime {
        "application/json" => {
            let entries: Vec<ContainerInfo> = serde_json::from_slice(body)?;
            let names = entries.iter().map(|e| e.name.clone()).collect();
            Ok((names, entries))
        }
        "" | "text/plain" => {
            let text = String::from_utf8(body.to_vec())?;
            let names = text
                .lines()
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect();
            Ok((names, Vec::new()))
        }
        other => Err(ParseError::UnsupportedContentType(other.to_string())),
    }
}
