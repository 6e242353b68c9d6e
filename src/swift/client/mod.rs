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

mod create_container;
mod delete_container;
mod get_container;
mod list_containers;
mod update_container;

use crate::swift::creds::AuthProvider;
use crate::swift::error::Error;
use crate::swift::http::BaseUrl;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use http::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use http::Method;
use std::env;
use std::fmt;
use std::sync::Arc;

/// Builder for [`SwiftClient`].
pub struct SwiftClientBuilder {
    base_url: BaseUrl,
    provider: Option<Arc<dyn AuthProvider + Send + Sync>>,
    app_info: Option<(String, String)>,
}

impl SwiftClientBuilder {
    /// Creates a builder given the account endpoint, e.g.
    /// `https://storage.example.com/v1/AUTH_tenant`.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            app_info: None,
        }
    }

    /// Sets the auth provider. Requests go out anonymously when no provider
    /// is set.
    pub fn provider(mut self, provider: Option<Arc<dyn AuthProvider + Send + Sync>>) -> Self {
        self.provider = provider;
        self
    }

    /// Sets the application name and version appended to the user agent.
    pub fn app_info(mut self, app_name: String, app_version: String) -> Self {
        self.app_info = Some((app_name, app_version));
        self
    }

    /// Builds the [`SwiftClient`] with the settings configured so far.
    pub fn build(self) -> Result<SwiftClient, Error> {
        let mut user_agent = format!(
            "OpenSwift ({}; {}) openswift/{}",
            env::consts::OS,
            env::consts::ARCH,
            env!("CARGO_PKG_VERSION")
        );
        if let Some((name, version)) = &self.app_info {
            user_agent.push_str(&format!(" {name}/{version}"));
        }

        let http_client = reqwest::Client::builder().build()?;

        Ok(SwiftClient {
            http_client,
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                provider: self.provider,
                user_agent,
            }),
        })
    }
}

struct SharedClientItems {
    base_url: BaseUrl,
    provider: Option<Arc<dyn AuthProvider + Send + Sync>>,
    user_agent: String,
}

/// Client for the Swift container API of one storage account.
///
/// The client holds immutable configuration behind an `Arc`; cloning is cheap
/// and clones share the same connection pool. All methods are safe to call
/// concurrently. The client performs no retries and keeps no cache; every
/// operation is exactly one HTTP exchange.
#[derive(Clone)]
pub struct SwiftClient {
    http_client: reqwest::Client,
    shared: Arc<SharedClientItems>,
}

impl fmt::Debug for SwiftClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwiftClient")
            .field("base_url", &self.shared.base_url)
            .finish_non_exhaustive()
    }
}

impl SwiftClient {
    /// Shorthand for [`SwiftClientBuilder::new`].
    pub fn builder(base_url: BaseUrl) -> SwiftClientBuilder {
        SwiftClientBuilder::new(base_url)
    }

    /// The account endpoint this client talks to.
    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// Performs one HTTP exchange. The caller's headers are laid over the
    /// provider's authenticated base set, so explicit values win. A status
    /// outside `success_codes` is an error; the response body is not read
    /// here.
    pub(crate) async fn execute(
        &self,
        method: Method,
        headers: Multimap,
        query_params: &Multimap,
        container: Option<&str>,
        operation: &'static str,
        success_codes: &'static [u16],
    ) -> Result<reqwest::Response, Error> {
        let url = self.shared.base_url.build_url(container, query_params);

        let mut merged = Multimap::new();
        if let Some(provider) = &self.shared.provider {
            merged.add_multimap(provider.auth_headers());
        }
        merged.add_multimap(headers);

        let mut header_map = HeaderMap::new();
        header_map.insert(USER_AGENT, HeaderValue::from_str(&self.shared.user_agent)?);
        for (key, values) in merged.iter_all() {
            let name = HeaderName::from_bytes(key.as_bytes())?;
            for value in values {
                log::trace!("{operation}: header {key}: {value}");
                header_map.insert(name.clone(), HeaderValue::from_str(value)?);
            }
        }

        log::debug!("{operation}: {method} {url}");
        let response = self
            .http_client
            .request(method, url.to_string())
            .headers(header_map)
            .send()
            .await?;

        let status = response.status().as_u16();
        log::debug!("{operation}: HTTP {status}");
        if !success_codes.contains(&status) {
            return Err(Error::UnexpectedStatus { operation, status });
        }
        Ok(response)
    }
}
