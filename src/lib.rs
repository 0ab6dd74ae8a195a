pub mod config;
pub mod utils;

pub use config::PagingConfig;
pub use utils::page_convert::{to_page, to_page_with, to_pager, to_pager_result};
pub use utils::pageable::{Direction, Order, Page, Pageable, Sort};
pub use utils::pager::{OrderItem, Pager, PagerResult};
