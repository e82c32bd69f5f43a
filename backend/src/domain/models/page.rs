//! Paging models shared by the repository and the service.

pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Column a page can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PostId,
    Title,
    Content,
}

impl SortKey {
    /// Resolve a public property name (`postId`, `id`, `title`, `content`)
    pub fn from_property(property: &str) -> Option<Self> {
        match property {
            "postId" | "id" => Some(SortKey::PostId),
            "title" => Some(SortKey::Title),
            "content" => Some(SortKey::Content),
            _ => None,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            SortKey::PostId => "post_id",
            SortKey::Title => "title",
            SortKey::Content => "content",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Case-insensitive `asc` / `desc`
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("asc") {
            Some(SortDirection::Asc)
        } else if name.eq_ignore_ascii_case("desc") {
            Some(SortDirection::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Which slice of the post collection to fetch, and in what order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: u32,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort_key: SortKey::PostId,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl PageRequest {
    pub fn new(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
            ..Self::default()
        }
    }

    pub fn sorted_by(mut self, sort_key: SortKey, sort_direction: SortDirection) -> Self {
        self.sort_key = sort_key;
        self.sort_direction = sort_direction;
        self
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page_number) * u64::from(self.page_size)
    }
}

/// One page of results plus the metadata needed to navigate the rest
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = if request.page_size == 0 {
            0
        } else {
            total_elements.div_ceil(u64::from(request.page_size))
        };
        Self {
            items,
            page_number: request.page_number,
            page_size: request.page_size,
            total_elements,
            total_pages,
        }
    }

    /// Convert every item, keeping the page metadata
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }

    /// Fallible variant of [`Page::map`]; stops at the first error
    pub fn try_map<U, E, F>(self, f: F) -> Result<Page<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<Vec<_>, E>>()?,
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        })
    }

    pub fn is_first(&self) -> bool {
        self.page_number == 0
    }

    pub fn is_last(&self) -> bool {
        u64::from(self.page_number) + 1 >= self.total_pages
    }
}
