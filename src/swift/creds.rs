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

//! Authentication providers

use crate::swift::header_constants::X_AUTH_TOKEN;
use crate::swift::multimap_ext::{Multimap, MultimapExt};

/// Provider trait computing the authenticated base headers for a request.
///
/// Implementations must not cache per-request state; the provider is shared
/// by every request the client makes and is queried once per exchange.
pub trait AuthProvider: std::fmt::Debug {
    fn auth_headers(&self) -> Multimap;
}

#[derive(Clone, Debug)]
/// Static token provider carrying a pre-issued auth token
pub struct StaticProvider {
    token: String,
}

impl StaticProvider {
    /// Returns a static provider with the given token
    ///
    /// # Examples
    ///
    /// ```
    /// use openswift::swift::creds::StaticProvider;
    /// let provider = StaticProvider::new("AUTH_tk0123456789abcdef");
    /// ```
    pub fn new(token: &str) -> StaticProvider {
        StaticProvider {
            token: token.to_string(),
        }
    }
}

impl AuthProvider for StaticProvider {
    fn auth_headers(&self) -> Multimap {
        let mut headers = Multimap::new();
        headers.add(X_AUTH_TOKEN, self.token.as_str());
        headers
    }
}
