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

use crate::swift::builders::GetContainer;
use crate::swift::client::SwiftClient;

impl SwiftClient {
    /// Creates a [`GetContainer`] request builder to retrieve the metadata
    /// of a container via a HEAD request.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openswift::swift::client::SwiftClient;
    /// use openswift::swift::types::SwiftApi;
    ///
    /// async fn example(client: SwiftClient) -> Result<(), Box<dyn std::error::Error>> {
    ///     let resp = client.get_container("albums").send().await?;
    ///     for (key, value) in resp.metadata()? {
    ///         println!("{key}: {value}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn get_container(&self, container: impl Into<String>) -> GetContainer {
        GetContainer::new(self.clone(), container.into())
    }
}
