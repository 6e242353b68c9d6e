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

//! # OpenSwift Rust SDK (`openswift`)
//!
//! This crate provides a strongly-typed, async-first interface to the
//! container APIs of OpenStack Swift compatible object storage services.
//!
//! Each supported operation has a corresponding request builder (e.g.
//! [`swift::builders::CreateContainer`], [`swift::builders::ListContainers`]),
//! which allows users to configure request parameters using a fluent builder
//! pattern.
//!
//! All request builders implement the [`swift::types::SwiftApi`] trait, which
//! provides the async [`send`](crate::swift::types::SwiftApi::send) method to
//! execute the request and return a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use openswift::swift::SwiftClientBuilder;
//! use openswift::swift::creds::StaticProvider;
//! use openswift::swift::http::BaseUrl;
//! use openswift::swift::types::SwiftApi;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let base_url: BaseUrl = "https://storage.example.com/v1/AUTH_tenant"
//!         .parse()
//!         .unwrap();
//!     let client = SwiftClientBuilder::new(base_url)
//!         .provider(Some(Arc::new(StaticProvider::new("token"))))
//!         .build()
//!         .unwrap();
//!
//!     let resp = client
//!         .create_container("photos")
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     println!("created container {:?}", resp.container().name());
//! }
//! ```
//!
//! ## Design
//! - Each API method on [`swift::client::SwiftClient`] returns a builder struct
//! - Builders implement [`swift::types::ToSwiftRequest`] for request conversion
//!   and [`swift::types::SwiftApi`] for execution
//! - Responses implement [`swift::types::FromSwiftResponse`] for consistent
//!   deserialization
//! - Listing is paginated with a marker cursor; see
//!   [`swift::builders::ListContainersPaginated`]

pub mod swift;
