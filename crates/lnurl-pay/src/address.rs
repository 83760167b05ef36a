//! Lightning address parsing and LNURL-pay URL resolution.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::LnurlError;

/// A `user@domain` lightning address.
///
/// Both parts are non-empty and separated by exactly one `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightningAddress {
    user: String,
    domain: String,
}

impl LightningAddress {
    /// The local part (before `@`).
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The domain part (after `@`).
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Resolve to the well-known LNURL-pay metadata URL:
    /// `https://{domain}/.well-known/lnurlp/{user}`.
    pub fn lnurlp_url(&self) -> Result<Url, LnurlError> {
        let invalid = |reason| LnurlError::InvalidAddress {
            address: self.to_string(),
            reason,
        };

        let mut url = Url::parse(&format!("https://{}/", self.domain))
            .map_err(|_| invalid("domain is not a valid host"))?;
        let plain_host = url.username().is_empty()
            && url.password().is_none()
            && url.port().is_none()
            && url.path() == "/"
            && url.query().is_none()
            && url.fragment().is_none();
        if !plain_host {
            return Err(invalid("domain is not a plain host name"));
        }

        url.path_segments_mut()
            .map_err(|_| invalid("domain is not a valid host"))?
            .clear()
            .extend([".well-known", "lnurlp", self.user.as_str()]);
        Ok(url)
    }
}

/// Characters that would change the meaning of the resolved URL.
fn has_reserved_chars(part: &str) -> bool {
    part.chars()
        .any(|c| matches!(c, '/' | '?' | '#' | '\\' | '%') || c.is_whitespace() || c.is_control())
}

impl FromStr for LightningAddress {
    type Err = LnurlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| LnurlError::InvalidAddress {
            address: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.split('@').collect();
        if parts.len() != 2 {
            return Err(invalid("must contain exactly one '@'"));
        }

        let (user, domain) = (parts[0], parts[1]);
        if user.is_empty() || domain.is_empty() {
            return Err(invalid("user and domain must not be empty"));
        }
        if has_reserved_chars(user) || has_reserved_chars(domain) {
            return Err(invalid("contains URL path, query or fragment characters"));
        }
        if user == "." || user == ".." {
            return Err(invalid("user must not be a relative path segment"));
        }

        Ok(Self {
            user: user.to_string(),
            domain: domain.to_string(),
        })
    }
}

impl fmt::Display for LightningAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.domain)
    }
}
