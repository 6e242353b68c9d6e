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
use crate::swift::response::UpdateContainerResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::{check_container_name, meta_header_name};
use http::Method;
use std::collections::HashMap;

/// Argument builder for updating container metadata.
///
/// Sending a metadata key that already exists overwrites its value; sending
/// one with an empty value deletes it.
#[derive(Clone, Debug)]
pub struct UpdateContainer {
    client: SwiftClient,
    container: String,
    metadata: Option<HashMap<String, String>>,
    extra_headers: Option<Multimap>,
}

impl UpdateContainer {
    pub fn new(client: SwiftClient, container: String) -> Self {
        Self {
            client,
            container,
            metadata: None,
            extra_headers: None,
        }
    }

    /// User metadata to set on the container. Each key is canonicalized and
    /// prefixed, so `color` is sent as `X-Container-Meta-Color`.
    pub fn metadata(mut self, metadata: Option<HashMap<String, String>>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Literal headers sent with the request; these win over the
    /// authenticated base set.
    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }
}

impl ToSwiftRequest for UpdateContainer {
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
            .method(Method::POST)
            .operation("UpdateContainer")
            .success_codes(&[204])
            .container(self.container)
            .headers(headers)
            .build())
    }
}

impl SwiftApi for UpdateContainer {
    type SwiftResponse = UpdateContainerResponse;
}
