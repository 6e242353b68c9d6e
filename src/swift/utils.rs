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

//! Various utility and helper functions

use crate::swift::error::Error;
use crate::swift::header_constants::X_CONTAINER_META_PREFIX;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const URL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encodes a string for use in a URL path segment or query component.
pub fn urlencode(s: &str) -> String {
    utf8_percent_encode(s, URL_ENCODE_SET).collect()
}

/// Swift rejects container names above this length.
const MAX_CONTAINER_NAME_LENGTH: usize = 256;

/// Validates a container name before it is placed in a request path.
pub fn check_container_name(name: &str) -> Result<(), Error> {
    if name.is_empty() {
        return Err(Error::InvalidContainerName(
            "container name cannot be empty".into(),
        ));
    }
    if name.len() > MAX_CONTAINER_NAME_LENGTH {
        return Err(Error::InvalidContainerName(format!(
            "container name cannot be longer than {MAX_CONTAINER_NAME_LENGTH} bytes"
        )));
    }
    if name.contains('/') {
        return Err(Error::InvalidContainerName(
            "container name cannot contain '/'".into(),
        ));
    }
    Ok(())
}

/// Converts a header key to canonical MIME case: the first letter and every
/// letter following a hyphen is upper-cased, the rest lower-cased.
pub fn canonical_mime_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = true;
    for c in key.chars() {
        if c == '-' {
            out.push('-');
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Full header name for a user metadata key, e.g. `color` becomes
/// `X-Container-Meta-Color`.
pub fn meta_header_name(key: &str) -> String {
    format!("{X_CONTAINER_META_PREFIX}{}", canonical_mime_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urlencode_keeps_unreserved() {
        assert_eq!(urlencode("a-b_c.d~e"), "a-b_c.d~e");
        assert_eq!(urlencode("a b/c"), "a%20b%2Fc");
    }

    #[test]
    fn test_check_container_name_accepts_normal_names() {
        assert!(check_container_name("photos").is_ok());
        assert!(check_container_name("photos 2024").is_ok());
    }

    #[test]
    fn test_check_container_name_rejects_empty() {
        assert!(matches!(
            check_container_name(""),
            Err(Error::InvalidContainerName(_))
        ));
    }

    #[test]
    fn test_check_container_name_rejects_slash() {
        assert!(matches!(
            check_container_name("a/b"),
            Err(Error::InvalidContainerName(_))
        ));
    }

    #[test]
    fn test_check_container_name_rejects_long_names() {
        let name = "x".repeat(257);
        assert!(matches!(
            check_container_name(&name),
            Err(Error::InvalidContainerName(_))
        ));
    }

    #[test]
    fn test_canonical_mime_key() {
        assert_eq!(canonical_mime_key("color"), "Color");
        assert_eq!(canonical_mime_key("COLOR"), "Color");
        assert_eq!(canonical_mime_key("book-count"), "Book-Count");
    }

    #[test]
    fn test_meta_header_name() {
        assert_eq!(meta_header_name("color"), "X-Container-Meta-Color");
        assert_eq!(
            meta_header_name("archive-date"),
            "X-Container-Meta-Archive-Date"
        );
    }
}
