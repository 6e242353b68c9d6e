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

use crate::swift::client::SwiftClient;
use crate::swift::error::{Error, ParseError};
use crate::swift::multimap_ext::Multimap;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use futures_util::Stream;
use http::Method;
use serde::Deserialize;
use std::collections::HashMap;
use std::mem;
use typed_builder::TypedBuilder;

/// Timestamp format used by the detailed JSON listing, e.g.
/// `2016-04-29T16:23:50.460230`.
const LISTING_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Clone, Debug, TypedBuilder)]
/// Generic Swift request
pub struct SwiftRequest {
    pub(crate) client: SwiftClient,

    method: Method,

    /// Operation name used in logs and error values.
    operation: &'static str,

    /// Response statuses treated as success for this operation.
    success_codes: &'static [u16],

    #[builder(default, setter(into))]
    pub(crate) container: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    headers: Multimap,
}

impl SwiftRequest {
    /// Execute the request, returning the raw response. Only used in
    /// [`SwiftApi::send()`].
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.client
            .execute(
                self.method.clone(),
                mem::take(&mut self.headers),
                &self.query_params,
                self.container.as_deref(),
                self.operation,
                self.success_codes,
            )
            .await
    }
}

/// Trait for converting a request builder into a concrete [`SwiftRequest`].
///
/// Implemented by all request builders; the conversion validates arguments,
/// assembles headers and query parameters, and picks the HTTP method and the
/// acceptable status set for the operation.
pub trait ToSwiftRequest: Sized {
    /// Consumes this request builder and returns a [`SwiftRequest`].
    fn to_swift_request(self) -> Result<SwiftRequest, Error>;
}

/// Trait for converting HTTP responses into strongly typed response objects.
#[async_trait]
pub trait FromSwiftResponse: Sized {
    /// Converts the executed request and its transport-level outcome into a
    /// typed response, decoding the body where the operation requires it.
    async fn from_swift_response(
        request: SwiftRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Common interface of all Swift API request builders.
///
/// Each builder names its response type and gains an async
/// [`send()`](SwiftApi::send) that performs exactly one HTTP exchange.
#[async_trait]
pub trait SwiftApi: ToSwiftRequest + Send {
    type SwiftResponse: FromSwiftResponse;

    async fn send(self) -> Result<Self::SwiftResponse, Error> {
        let mut req: SwiftRequest = self.to_swift_request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::SwiftResponse::from_swift_response(req, resp).await
    }
}

/// Explicit page iterator over a multi-request listing.
///
/// A paginated value is single-pass: pages are fetched at most once and are
/// never cached. Restarting means constructing a new iterator from the
/// original builder.
#[async_trait]
pub trait Paginated {
    type Item;

    /// Fetches the next page, or `None` once the listing is exhausted.
    async fn next_page(&mut self) -> Option<Result<Self::Item, Error>>;
}

#[async_trait]
pub trait ToStream: Sized {
    type Item;
    async fn to_stream(self) -> Box<dyn Stream<Item = Result<Self::Item, Error>> + Unpin + Send>;
}

#[derive(Clone, Debug, Default, PartialEq)]
/// A storage container as a string key/value mapping; a successful create
/// populates at least the `name` key.
pub struct Container(HashMap<String, String>);

impl Container {
    /// Returns a container holding only the `name` key.
    pub fn with_name(name: impl Into<String>) -> Container {
        let mut map = HashMap::new();
        map.insert(String::from("name"), name.into());
        Container(map)
    }

    /// The container name, if present.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.0.get(key)
    }

    pub fn get_map(&self) -> &HashMap<String, String> {
        &self.0
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
/// One entry of the detailed (JSON) account listing
pub struct ContainerInfo {
    pub name: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub bytes: u64,
    #[serde(default)]
    pub last_modified: Option<String>,
}

impl ContainerInfo {
    /// Parses the `last_modified` field into a timestamp.
    pub fn last_modified_at(&self) -> Result<Option<NaiveDateTime>, Error> {
        match &self.last_modified {
            Some(v) => Ok(Some(
                NaiveDateTime::parse_from_str(v, LISTING_TIME_FORMAT).map_err(ParseError::Time)?,
            )),
            None => Ok(None),
        }
    }
}
