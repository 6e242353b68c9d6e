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

use crate::swift::builders::ListContainers;
use crate::swift::client::SwiftClient;

impl SwiftClient {
    /// Creates a [`ListContainers`] request builder to list the containers
    /// of the account.
    ///
    /// To execute the request, call [`ListContainers::send()`](crate::swift::types::SwiftApi::send),
    /// which returns a [`Result`] containing a
    /// [`ListContainersResponse`](crate::swift::response::ListContainersResponse)
    /// with the first page, or convert the builder with
    /// [`to_paginated()`](ListContainers::to_paginated) to walk all pages.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use openswift::swift::client::SwiftClient;
    /// use openswift::swift::types::Paginated;
    ///
    /// async fn example(client: SwiftClient) -> Result<(), Box<dyn std::error::Error>> {
    ///     let mut pager = client.list_containers().to_paginated();
    ///     while let Some(page) = pager.next_page().await {
    ///         for name in page?.names() {
    ///             println!("{name}");
    ///         }
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_containers(&self) -> ListContainers {
        ListContainers::new(self.clone())
    }
}
