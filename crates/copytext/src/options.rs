//! Configuration options for Markdown serialization

use url::Url;

use crate::{Error, Result};

/// Options for Markdown serialization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Base URL used to resolve relative link targets.
    ///
    /// Without a base, relative `href` values are emitted as written.
    pub base_url: Option<Url>,
}

impl Options {
    /// Options resolving links against `base`
    pub fn with_base_url(base: &str) -> Result<Self> {
        let base_url = Url::parse(base).map_err(|e| Error::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            base_url: Some(base_url),
        })
    }

    /// Resolve a link target to an absolute URL where possible.
    pub fn resolve_href(&self, href: &str) -> String {
        let href = href.trim();
        if Url::parse(href).is_ok() {
            return href.to_string();
        }

        match &self.base_url {
            Some(base) => base
                .join(href)
                .map(String::from)
                .unwrap_or_else(|_| href.to_string()),
            None => href.to_string(),
        }
    }
}
