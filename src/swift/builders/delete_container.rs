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
use crate::swift::multimap_ext::Multimap;
use crate::swift::response::DeleteContainerResponse;
use crate::swift::types::{SwiftApi, SwiftRequest, ToSwiftRequest};
use crate::swift::utils::check_container_name;
use http::Method;

/// Argument builder for deleting an empty container.
#[derive(Clone, Debug)]
pub struct DeleteContainer {
    client: SwiftClient,
    container: String,
    extra_query_params: Option<Multimap>,
}

impl DeleteContainer {
    pub fn new(client: SwiftClient, container: String) -> Self {
        Self {
            client,
            container,
            extra_query_params: None,
        }
    }

    /// Free-form query parameters appended to the request URL.
    pub fn extra_query_params(mut self, extra_query_params: Option<Multimap>) -> Self {
        self.extra_query_params = extra_query_params;
        self
    }
}

impl ToSwiftRequest for DeleteContainer {
    fn to_swift_request(self) -> Result<SwiftRequest, Error> {
        check_container_name(&self.container)?;

        Ok(SwiftRequest::builder()
            .client(self.client)
            .method(Method::DELETE)
            .operation("DeleteContainer")
            .success_codes(&[204])
            .container(self.container)
            .query_params(self.extra_query_params.unwrap_or_default())
            .build())
    }
}

impl SwiftApi for DeleteContainer {
    type SwiftResponse = DeleteContainerResponse;
}
