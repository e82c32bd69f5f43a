pub mod page;
pub mod post;

pub use page::{Page, PageRequest, SortDirection, SortKey};
pub use post::Post;
