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

use crate::swift::types::SwiftRequest;
use http::HeaderMap;

/// Access to the fields every Swift response carries: the originating request
/// and the decoded response headers. The headers are owned copies; no response
/// type keeps the transport response alive.
pub trait HasSwiftFields {
    fn request(&self) -> &SwiftRequest;

    /// Response headers as returned by the server.
    fn headers(&self) -> &HeaderMap;
}

macro_rules! impl_has_swift_fields {
    ($ty:ty) => {
        impl crate::swift::response_traits::HasSwiftFields for $ty {
            fn request(&self) -> &crate::swift::types::SwiftRequest {
                &self.request
            }

            fn headers(&self) -> &http::HeaderMap {
                &self.headers
            }
        }
    };
}
pub(crate) use impl_has_swift_fields;

/// Implements [`FromSwiftResponse`](crate::swift::types::FromSwiftResponse)
/// for responses that carry no body of interest; the status check has already
/// happened during execution, so only the headers are retained.
macro_rules! impl_from_swift_response {
    ($ty:ty) => {
        #[async_trait::async_trait]
        impl crate::swift::types::FromSwiftResponse for $ty {
            async fn from_swift_response(
                request: crate::swift::types::SwiftRequest,
                response: Result<reqwest::Response, crate::swift::error::Error>,
            ) -> Result<Self, crate::swift::error::Error> {
                let response = response?;
                Ok(Self {
                    request,
                    headers: response.headers().clone(),
                })
            }
        }
    };
}
pub(crate) use impl_from_swift_response;

/// Responses to operations addressing a single container.
pub trait HasContainer: HasSwiftFields {
    /// Name of the container the request addressed.
    fn container_name(&self) -> &str {
        self.request()
            .container
            .as_deref()
            .unwrap_or_default()
    }
}
