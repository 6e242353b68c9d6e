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

use crate::swift::builders::CreateContainer;
use crate::swift::client::SwiftClient;

impl SwiftClient {
    /// Creates a [`CreateContainer`] request builder to create a container
    /// with the given name.
    ///
    /// To execute the request, call [`CreateContainer::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a
    /// [`CreateContainerResponse`](crate::swift::response::CreateContainerResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openswift::swift::client::SwiftClient;
    /// use openswift::swift::types::SwiftApi;
    ///
    /// async fn example(client: SwiftClient) -> Result<(), Box<dyn std::error::Error>> {
    ///     let resp = client.create_container("albums").send().await?;
    ///     println!("created {:?}", resp.container().name());
    ///     Ok(())
    /// }
    /// ```
    pub fn create_container(&self, container: impl Into<String>) -> CreateContainer {
        CreateContainer::new(self.clone(), container.into())
    }
}
