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

pub use create_container::CreateContainerResponse;
pub use delete_container::DeleteContainerResponse;
pub use get_container::GetContainerResponse;
pub use list_containers::ListContainersResponse;
pub use update_container::UpdateContainerResponse;
