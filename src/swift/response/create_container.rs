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

use crate::swift::response_traits::{HasContainer, impl_from_swift_response, impl_has_swift_fields};
use crate::swift::types::{Container, SwiftRequest};
use http::HeaderMap;

/// Response of a create-container request.
#[derive(Debug)]
pub struct CreateContainerResponse {
    request: SwiftRequest,
    headers: HeaderMap,
}

impl_has_swift_fields!(CreateContainerResponse);
impl_from_swift_response!(CreateContainerResponse);

impl HasContainer for CreateContainerResponse {}

impl CreateContainerResponse {
    /// The created container; populated with the name the request used.
    pub fn container(&self) -> Container {
        Container::with_name(self.container_name())
    }
}
