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

pub const CONTENT_TYPE: &str = "Content-Type";

pub const X_AUTH_TOKEN: &str = "X-Auth-Token";

/// Prefix marking a header as user-supplied container metadata.
pub const X_CONTAINER_META_PREFIX: &str = "X-Container-Meta-";

pub const X_CONTAINER_OBJECT_COUNT: &str = "X-Container-Object-Count";

pub const X_CONTAINER_BYTES_USED: &str = "X-Container-Bytes-Used";

pub const X_TIMESTAMP: &str = "X-Timestamp";
