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

use crate::swift::error::Error;
use crate::swift::header_constants::{
    X_CONTAINER_BYTES_USED, X_CONTAINER_META_PREFIX, X_CONTAINER_OBJECT_COUNT, X_TIMESTAMP,
};
use crate::swift::response_traits::{HasContainer, impl_from_swift_response, impl_has_swift_fields};
use crate::swift::types::SwiftRequest;
use crate::swift::utils::canonical_mime_key;
use http::HeaderMap;
use std::collections::HashMap;

/// Response of a get-container (HEAD) request.
///
/// The response owns a decoded copy of the server's headers; nothing of the
/// transport response is kept alive.
#[derive(Debug)]
pub struct GetContainerResponse {
    request: SwiftRequest,
    headers: HeaderMap,
}

impl_has_swift_fields!(GetContainerResponse);
impl_from_swift_response!(GetContainerResponse);

impl HasContainer for GetContainerResponse {}

impl GetContainerResponse {
    /// User metadata of the container: every `X-Container-Meta-*` response
    /// header with the prefix stripped and the remaining key in canonical
    /// MIME case, e.g. `X-Container-Meta-Color: red` becomes `Color: red`.
    pub fn metadata(&self) -> Result<HashMap<String, String>, Error> {
        let prefix = X_CONTAINER_META_PREFIX.to_ascii_lowercase();
        let mut metadata = HashMap::new();
        for (name, value) in self.headers.iter() {
            if let Some(key) = name.as_str().strip_prefix(&prefix) {
                metadata.insert(canonical_mime_key(key), value.to_str()?.to_string());
            }
        }
        Ok(metadata)
    }

    /// Number of objects in the container, if the server reported it.
    pub fn object_count(&self) -> Result<Option<u64>, Error> {
        self.u64_header(X_CONTAINER_OBJECT_COUNT)
    }

    /// Total size of the container's objects in bytes, if reported.
    pub fn bytes_used(&self) -> Result<Option<u64>, Error> {
        self.u64_header(X_CONTAINER_BYTES_USED)
    }

    /// Raw value of the `X-Timestamp` header, if present.
    pub fn timestamp(&self) -> Result<Option<String>, Error> {
        match self.headers.get(X_TIMESTAMP) {
            Some(value) => Ok(Some(value.to_str()?.to_string())),
            None => Ok(None),
        }
    }

    fn u64_header(&self, name: &str) -> Result<Option<u64>, Error> {
        match self.headers.get(name) {
            Some(value) => Ok(Some(value.to_str()?.parse::<u64>()?)),
            None => Ok(None),
        }
    }
}
