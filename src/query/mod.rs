//! Request descriptors and their canonical URL form.
//!
//! The built URL doubles as the key the descriptor log stores, so
//! [`search_term_of`] must recover exactly the term that went in. Terms are
//! form-urlencoded, which keeps that true for terms containing `?`, `&` or `=`.

use std::fmt;

use url::Url;

pub const DEFAULT_API_BASE: &str = "https://hn.algolia.com/api/v1";
pub const DEFAULT_SEARCH_PATH: &str = "/search";

const PARAM_SEARCH: &str = "query";
const PARAM_PAGE: &str = "page";

/// One fetch request: what to search for and which page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestDescriptor {
    pub search_term: String,
    pub page: u32,
}

impl RequestDescriptor {
    pub fn new(search_term: impl Into<String>, page: u32) -> Self {
        Self {
            search_term: search_term.into(),
            page,
        }
    }

    /// First page of a fresh search.
    pub fn first_page(search_term: impl Into<String>) -> Self {
        Self::new(search_term, 0)
    }

    /// Same term, following page.
    pub fn next_page(&self) -> Self {
        Self::new(self.search_term.clone(), self.page + 1)
    }
}

impl fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' page {}", self.search_term, self.page)
    }
}

/// Builds request URLs against a fixed search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuilder {
    endpoint: Url,
}

impl QueryBuilder {
    /// `base_url` and `search_path` are concatenated as given
    /// (`https://hn.algolia.com/api/v1` + `/search`).
    pub fn new(base_url: &str, search_path: &str) -> Result<Self, url::ParseError> {
        let joined = format!("{}{}", base_url.trim_end_matches('/'), search_path);
        let mut endpoint = Url::parse(&joined)?;
        endpoint.set_query(None);
        endpoint.set_fragment(None);
        Ok(Self { endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn build(&self, descriptor: &RequestDescriptor) -> String {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair(PARAM_SEARCH, &descriptor.search_term)
            .append_pair(PARAM_PAGE, &descriptor.page.to_string());
        url.into()
    }
}

/// Recovers the search term from a URL produced by [`QueryBuilder::build`].
///
/// Returns `None` for strings that are not URLs or carry no `query` parameter.
pub fn search_term_of(key: &str) -> Option<String> {
    query_param(key, PARAM_SEARCH)
}

/// Recovers the full descriptor from a built URL.
pub fn descriptor_of(key: &str) -> Option<RequestDescriptor> {
    let search_term = query_param(key, PARAM_SEARCH)?;
    let page = query_param(key, PARAM_PAGE)?.parse().ok()?;
    Some(RequestDescriptor { search_term, page })
}

fn query_param(key: &str, name: &str) -> Option<String> {
    let url = Url::parse(key).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}
