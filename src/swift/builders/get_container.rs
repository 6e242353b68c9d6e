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
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::response::GetContainerResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_container_name, meta_header_name};
use http::Method;
use std::collections::HashMap;

/// Argument builder for retrieving container metadata via HEAD.
#[derive(Clone, Debug)]
pub struct GetContainer {
    client: SwiftClient,
    container: String,
    metadata: Option<HashMap<String, String>>,
    extra_headers: Option<Multimap>,
}

impl GetContainer {
    pub fn new(client: SwiftClient, container: String) -> Self {
        Self {
            client,
            container,
            metadata: None,
            extra_headers: None,
        }
    }

    /// Metadata key-value pairs sent along with the request, canonicalized
    /// and prefixed the same way as on create and update.
    pub fn metadata(mut self, metadata: Option<HashMap<String, String>>) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }
}

impl ToSwiftRequest for GetContainer {
    fn to_swift_request(self) -> Result<SwiftRequest, Error> {
        check_container_name(&self.container)?;

        let mut headers = self.extra_headers.unwrap_or_default();
        if let Some(metadata) = self.metadata {
            for (key, value) in metadata {
                headers.add(meta_header_name(&key), value);
            }
        }

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::HEAD)
            .operation("GetContainer")
            .success_codes(&[204])
            .container(self.container)
            .headers(headers)
            .build())
    }
}

impl SwiftApi for GetContainer {
    type SwiftResponse = GetContainerResponse;
}
