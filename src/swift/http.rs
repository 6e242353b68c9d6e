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

//! URL definitions for the Swift service endpoint

use crate::swift::error::Error;
use crate::swift::multimap_ext::{Multimap, MultimapExt};
use crate::swift::utils::urlencode;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref HOSTNAME_REGEX: Regex =
        Regex::new(r"^([a-zA-Z\d-]{1,63}\.)*[a-zA-Z\d-]{1,63}$").unwrap();
}

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: true,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        if self.port > 0 {
            f.write_str(&format!("{}:{}", self.host, self.port))?;
        } else {
            f.write_str(&self.host)?;
        }

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// Service endpoint of a Swift account, including the account path
/// (e.g. `https://storage.example.com/v1/AUTH_tenant`).
///
/// Immutable once parsed; shared by all requests made through a client.
#[derive(Clone, Debug)]
pub struct BaseUrl {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub account_path: String,
}

impl BaseUrl {
    /// Builds the request URL for the account (listing) or a container
    /// resource within it.
    pub fn build_url(&self, container: Option<&str>, query_params: &Multimap) -> Url {
        let mut path = self.account_path.clone();
        if let Some(name) = container {
            path.push('/');
            path.push_str(&urlencode(name));
        }

        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path,
            query: query_params.clone(),
        }
    }
}

impl FromStr for BaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (https, rest) = if let Some(v) = s.strip_prefix("https://") {
            (true, v)
        } else if let Some(v) = s.strip_prefix("http://") {
            (false, v)
        } else {
            (true, s)
        };

        let (authority, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, ""),
        };

        if authority.is_empty() {
            return Err(Error::InvalidBaseUrl("host cannot be empty".into()));
        }

        let (host, port) = match authority.rsplit_once(':') {
            Some((h, p)) => (
                h,
                p.parse::<u16>()
                    .map_err(|_| Error::InvalidBaseUrl(format!("invalid port '{p}'")))?,
            ),
            None => (authority, 0),
        };

        if !HOSTNAME_REGEX.is_match(host) {
            return Err(Error::InvalidBaseUrl(format!("invalid hostname '{host}'")));
        }

        let account_path = path.trim_end_matches('/').to_string();
        if account_path.is_empty() {
            return Err(Error::InvalidBaseUrl(
                "base URL must include the account path, e.g. /v1/AUTH_tenant".into(),
            ));
        }

        Ok(BaseUrl {
            https,
            host: host.to_string(),
            port,
            account_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_parse_https() {
        let url: BaseUrl = "https://storage.example.com/v1/AUTH_tenant"
            .parse()
            .unwrap();
        assert!(url.https);
        assert_eq!(url.host, "storage.example.com");
        assert_eq!(url.port, 0);
        assert_eq!(url.account_path, "/v1/AUTH_tenant");
    }

    #[test]
    fn test_base_url_parse_http_with_port() {
        let url: BaseUrl = "http://127.0.0.1:8080/v1/AUTH_test".parse().unwrap();
        assert!(!url.https);
        assert_eq!(url.host, "127.0.0.1");
        assert_eq!(url.port, 8080);
        assert_eq!(url.account_path, "/v1/AUTH_test");
    }

    #[test]
    fn test_base_url_defaults_to_https() {
        let url: BaseUrl = "storage.example.com/v1/AUTH_tenant".parse().unwrap();
        assert!(url.https);
    }

    #[test]
    fn test_base_url_requires_account_path() {
        assert!(matches!(
            "https://storage.example.com".parse::<BaseUrl>(),
            Err(Error::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            "https://storage.example.com/".parse::<BaseUrl>(),
            Err(Error::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_base_url_rejects_bad_port() {
        assert!(matches!(
            "http://host:notaport/v1/AUTH_x".parse::<BaseUrl>(),
            Err(Error::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_build_url_for_account() {
        let base: BaseUrl = "http://127.0.0.1:8080/v1/AUTH_test".parse().unwrap();
        let url = base.build_url(None, &Multimap::new());
        assert_eq!(url.to_string(), "http://127.0.0.1:8080/v1/AUTH_test");
    }

    #[test]
    fn test_build_url_for_container() {
        let base: BaseUrl = "https://storage.example.com/v1/AUTH_tenant"
            .parse()
            .unwrap();
        let mut query = Multimap::new();
        query.add("bulk-delete", "true");
        let url = base.build_url(Some("old photos"), &query);
        assert_eq!(
            url.to_string(),
            "https://storage.example.com/v1/AUTH_tenant/old%20photos?bulk-delete=true"
        );
    }

    #[test]
    fn test_url_host_header_value() {
        let base: BaseUrl = "http://localhost:9000/v1/AUTH_x".parse().unwrap();
        let url = base.build_url(None, &Multimap::new());
        assert_eq!(url.host_header_value(), "localhost:9000");
    }
}
