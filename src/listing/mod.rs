//! Listing screens: fetch once, then filter and paginate locally.

pub mod pagination;
pub mod view;

pub use pagination::{PageInfo, PageRequest};
pub use view::ListView;

/// The single text field a listing's search box matches against.
pub trait Filterable {
    fn filter_key(&self) -> &str;
}
