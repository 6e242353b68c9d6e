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
use crate::swift::error::Error;
use crate::swift::header_constants::CONTENT_TYPE;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::response::ListContainersResponse;
use crate::swift::types::{Paginated, SwiftApi, SwiftRequest, ToStream, ToSwiftRequest};
use async_trait::async_trait;
use futures_util::Stream;
use futures_util::stream as futures_stream;
use http::Method;

/// Argument builder for the account listing.
///
/// A single [`send()`](SwiftApi::send) retrieves one page: up to the server's
/// listing limit of container names after the given marker. Use
/// [`to_paginated()`](ListContainers::to_paginated) or
/// [`to_stream()`](ToStream::to_stream) to walk the whole account.
#[derive(Clone, Debug)]
pub struct ListContainers {
    client: SwiftClient,
    full: bool,
    marker: Option<String>,
    limit: Option<u32>,
    extra_headers: Option<Multimap>,
    extra_query_params: Option<Multimap>,
}

impl ListContainers {
    pub fn new(client: SwiftClient) -> Self {
        Self {
            client,
            full: false,
            marker: None,
            limit: None,
            extra_headers: None,
            extra_query_params: None,
        }
    }

    /// When set, requests the detailed JSON listing instead of the
    /// plain-text name list; pages then also carry
    /// [`entries()`](ListContainersResponse::entries).
    pub fn full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }

    /// Starts the listing strictly after the container with this name.
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Caps the number of names returned per page.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    /// Free-form query parameters appended to every page request, e.g.
    /// `prefix` or `end_marker`.
    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }

    /// Converts this builder into a page iterator that advances the marker
    /// after every non-empty page.
    pub fn to_paginated(self) -> ListContainersPaginated {
        ListContainersPaginated {
            marker: self.marker.clone(),
            inner: self,
            is_done: false,
        }
    }
}

impl ToSwiftRequest for ListContainers {
    fn to_swift_request(self) -> Result<SwiftRequest, Error> {
        let mut headers = self.extra_headers.unwrap_or_default();
        let mut query_params = self.extra_query_params.unwrap_or_default();

        if self.full {
            query_params.add("format", "json");
        } else {
            headers.add(CONTENT_TYPE, "text/plain");
        }
        if let Some(marker) = self.marker {
            query_params.add("marker", marker);
        }
        if let Some(limit) = self.limit {
            query_params.add("limit", limit.to_string());
        }

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::GET)
            .operation("ListContainers")
            .success_codes(&[200, 204])
            .query_params(query_params)
            .headers(headers)
            .build())
    }
}

impl SwiftApi for ListContainers {
    type SwiftResponse = ListContainersResponse;
}

/// Page iterator over the account listing.
///
/// Each call to [`next_page()`](Paginated::next_page) issues one GET with the
/// current marker. A page is yielded only when it contains names; the first
/// empty page ends the iteration without being yielded, so exhausting an
/// account of `n` full pages costs `n + 1` requests. Pages are fetched once
/// and never cached; to restart, build a new iterator.
#[derive(Debug)]
pub struct ListContainersPaginated {
    inner: ListContainers,
    marker: Option<String>,
    is_done: bool,
}

#[async_trait]
impl Paginated for ListContainersPaginated {
    type Item = ListContainersResponse;

    async fn next_page(&mut self) -> Option<Result<Self::Item, Error>> {
        if self.is_done {
            return None;
        }

        let mut builder = self.inner.clone();
        builder.marker = self.marker.clone();

        let page = match builder.send().await {
            Ok(page) => page,
            Err(e) => {
                self.is_done = true;
                return Some(Err(e));
            }
        };

        match page.names().last().cloned() {
            Some(last) => {
                self.marker = Some(last);
                Some(Ok(page))
            }
            None => {
                self.is_done = true;
                None
            }
        }
    }
}

#[async_trait]
impl ToStream for ListContainers {
    type Item = ListContainersResponse;

    async fn to_stream(
        self,
    ) -> Box<dyn Stream<Item = Result<Self::Item, Error>> + Unpin + Send> {
        Box::new(Box::pin(futures_stream::unfold(
            self.to_paginated(),
            move |mut pager| async move {
                pager.next_page().await.map(|page| (page, pager))
            },
        )))
    }
}
