//! Pagination helpers for list operations
//!
//! Collections carry `first`/`next` links. The `next` link holds a `start`
//! token (or an `href` with a `start` query parameter) that is fed back into
//! the next request. [`Pager`] drives that loop.

use futures::stream::{self, Stream, TryStreamExt};
use log::debug;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::Transport;
use super::operation::{OperationRequest, invoke};
use crate::error::{Error, Result};

/// Default page size when none is given
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Link to the first page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationFirst {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Link to the next page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationNext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

impl PaginationNext {
    /// Token for the next request: `start` if present, otherwise the `start`
    /// query parameter of `href`.
    pub fn start_token(&self) -> Option<String> {
        if let Some(start) = self.start.as_ref().filter(|s| !s.is_empty()) {
            return Some(start.clone());
        }
        let href = self.href.as_deref()?;
        // Relative hrefs are resolved against a dummy base just to read the query.
        let url = Url::parse(href)
            .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(href)))
            .ok()?;
        url.query_pairs()
            .find(|(k, _)| k == "start")
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
    }
}

/// A page of results
pub trait PagedCollection {
    type Item;

    fn next_link(&self) -> Option<&PaginationNext>;

    fn into_items(self) -> Vec<Self::Item>;

    /// Token for the following page, `None` on the last page.
    fn next_start(&self) -> Option<String> {
        self.next_link().and_then(PaginationNext::start_token)
    }
}

/// Options of a list operation that accepts a `start` token
pub trait PagedRequest: OperationRequest + Clone {
    fn set_start(&mut self, start: Option<String>);
}

/// Iterates over all pages of a list operation.
///
/// # Example
/// ```ignore
/// let options = ListProfilesOptions::new().limit(100);
/// let mut pager = Pager::new(&client, options);
/// while pager.has_next() {
///     for profile in pager.get_next().await? {
///         println!("{}", profile.profile_name.unwrap_or_default());
///     }
/// }
/// ```
pub struct Pager<'c, C: ?Sized, O> {
    client: &'c C,
    options: O,
    next_start: Option<String>,
    started: bool,
    has_next: bool,
}

impl<'c, C, O> Pager<'c, C, O>
where
    C: Transport + ?Sized,
    O: PagedRequest + 'c,
    O::Output: PagedCollection + DeserializeOwned + Send,
{
    /// The first request uses `options` unchanged, including any `start` set.
    pub fn new(client: &'c C, options: O) -> Self {
        Self {
            client,
            options,
            next_start: None,
            started: false,
            has_next: true,
        }
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Fetch the next page.
    pub async fn get_next(&mut self) -> Result<Vec<<O::Output as PagedCollection>::Item>> {
        if !self.has_next {
            return Err(Error::Other("No more results available".to_string()));
        }

        let mut options = self.options.clone();
        let sent = if self.started {
            options.set_start(self.next_start.clone());
            self.next_start.clone()
        } else {
            None
        };

        let response = invoke(self.client, &options).await?;
        self.started = true;

        let Some(page) = response.result else {
            self.has_next = false;
            return Ok(Vec::new());
        };

        self.next_start = page.next_start();
        if self.next_start.is_some() && self.next_start == sent {
            // A repeated token would page forever.
            debug!("Next page token {:?} repeats the one just sent; stopping", sent);
            self.next_start = None;
        }
        self.has_next = self.next_start.is_some();
        Ok(page.into_items())
    }

    /// Fetch every remaining page.
    pub async fn get_all(&mut self) -> Result<Vec<<O::Output as PagedCollection>::Item>> {
        let mut all = Vec::new();
        while self.has_next {
            all.extend(self.get_next().await?);
        }
        Ok(all)
    }

    /// Stream of items across all remaining pages, fetched lazily.
    pub fn into_stream(
        self,
    ) -> impl Stream<Item = Result<<O::Output as PagedCollection>::Item>> + 'c {
        stream::try_unfold(self, |mut pager| async move {
            if !pager.has_next() {
                return Ok(None);
            }
            let items = pager.get_next().await?;
            Ok::<_, Error>(Some((items, pager)))
        })
        .map_ok(|items| stream::iter(items.into_iter().map(Ok::<_, Error>)))
        .try_flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_token_prefers_start_field() {
        let next = PaginationNext {
            href: Some("https://example.com/profiles?start=from-href".to_string()),
            start: Some("from-field".to_string()),
        };
        assert_eq!(next.start_token(), Some("from-field".to_string()));
    }

    #[test]
    fn test_start_token_from_absolute_href() {
        let next = PaginationNext {
            href: Some("https://example.com/profiles?limit=10&start=abc%3D%3D".to_string()),
            start: None,
        };
        assert_eq!(next.start_token(), Some("abc==".to_string()));
    }

    #[test]
    fn test_start_token_from_relative_href() {
        let next = PaginationNext {
            href: Some("/control_libraries?start=xyz".to_string()),
            start: None,
        };
        assert_eq!(next.start_token(), Some("xyz".to_string()));
    }

    #[test]
    fn test_start_token_absent() {
        assert_eq!(PaginationNext::default().start_token(), None);

        let next = PaginationNext {
            href: Some("https://example.com/profiles?limit=10".to_string()),
            start: Some(String::new()),
        };
        assert_eq!(next.start_token(), None);
    }

    #[test]
    fn test_pagination_links_deserialize() {
        let next: PaginationNext =
            serde_json::from_str(r#"{"href":"https://example.com/x?start=1","start":"1"}"#)
                .unwrap();
        assert_eq!(next.start.as_deref(), Some("1"));

        let first: PaginationFirst = serde_json::from_str("{}").unwrap();
        assert!(first.href.is_none());
    }
}
