//! Query-string pagination: `?page=0&size=5&sort=postId,desc`.

use serde::Deserialize;

use crate::domain::models::page::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::models::{PageRequest, SortDirection, SortKey};

/// Raw pagination parameters as they arrive on the query string
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Option<String>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PageQueryError {
    #[error("unknown sort property: {0}")]
    UnknownSortProperty(String),
    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),
}

impl PageQuery {
    /// Resolve the query into a page request.
    ///
    /// Missing values fall back to page 0, size 5, newest first. A size of 0
    /// means "use the default" and sizes above the maximum are capped.
    pub fn into_page_request(self) -> Result<PageRequest, PageQueryError> {
        let page_size = match self.size {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };
        let request = PageRequest::new(self.page.unwrap_or(0), page_size);

        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(request),
            Some(sort) => {
                let (key, direction) = parse_sort(sort)?;
                Ok(request.sorted_by(key, direction))
            }
        }
    }
}

/// Parse `property[,direction]`; direction defaults to ascending
fn parse_sort(sort: &str) -> Result<(SortKey, SortDirection), PageQueryError> {
    let mut parts = sort.splitn(2, ',').map(str::trim);
    let property = parts.next().unwrap_or_default();

    let key = SortKey::from_property(property)
        .ok_or_else(|| PageQueryError::UnknownSortProperty(property.to_string()))?;

    let direction = match parts.next() {
        None | Some("") => SortDirection::Asc,
        Some(name) => SortDirection::from_name(name)
            .ok_or_else(|| PageQueryError::UnknownSortDirection(name.to_string()))?,
    };

    Ok((key, direction))
}
