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

use crate::swift::builders::DeleteContainer;
use crate::swift::client::SwiftClient;

impl SwiftClient {
    /// Creates a [`DeleteContainer`] request builder to delete an empty
    /// container.
    ///
    /// Deleting a container that is already gone fails with the server's 404
    /// surfaced as an unexpected-status error; the operation is not
    /// idempotent from the caller's point of view.
    pub fn delete_container(&self, container: impl Into<String>) -> DeleteContainer {
        DeleteContainer::new(self.clone(), container.into())
    }
}
