pub mod logging;
pub mod page_convert;
pub mod pageable;
pub mod pager;
