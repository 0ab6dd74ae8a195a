use crate::config::PagingConfig;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PAGE_SIZE: u64 = 10;

pub const MAXIMUM_PAGE_SIZE: u64 = 50;

pub const MAXIMUM_PAGE_NUMBER: u64 = 65535;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct OrderItem {
    pub column: String,
    pub asc: bool,
}

impl OrderItem {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            asc: true,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            asc: false,
        }
    }
}

/// One-based page request as handed to the query builder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, Validate)]
pub struct Pager {
    #[validate(range(min = 1, max = MAXIMUM_PAGE_NUMBER))]
    pub current: u64,
    #[validate(range(min = 1, max = MAXIMUM_PAGE_SIZE))]
    pub size: u64,
    #[serde(default)]
    pub orders: Vec<OrderItem>,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(current: u64, size: u64) -> Self {
        Self {
            current,
            size,
            orders: Vec::new(),
        }
    }

    pub fn add_orders<I: IntoIterator<Item = OrderItem>>(&mut self, orders: I) -> &mut Self {
        self.orders.extend(orders);
        self
    }

    pub fn offset(&self) -> u64 {
        self.current.saturating_sub(1).saturating_mul(self.size)
    }

    /// Clamps client supplied values into the configured bounds.
    pub fn sanitize(mut self, config: &PagingConfig) -> Self {
        self.current = self.current.clamp(1, MAXIMUM_PAGE_NUMBER);
        if self.size == 0 {
            self.size = config.default_page_size;
        }
        self.size = self.size.min(config.max_page_size).min(MAXIMUM_PAGE_SIZE);
        self
    }
}

/// Records fetched for a [`Pager`], with the total row count of the query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PagerResult<T> {
    pub records: Vec<T>,
    pub current: u64,
    pub size: u64,
    pub total: u64,
    #[serde(default)]
    pub orders: Vec<OrderItem>,
}

impl<T> Default for PagerResult<T> {
    fn default() -> Self {
        Self::new(Pager::default(), Vec::new(), 0)
    }
}

impl<T> PagerResult<T> {
    pub fn new(pager: Pager, records: Vec<T>, total: u64) -> Self {
        Self {
            records,
            current: pager.current,
            size: pager.size,
            total,
            orders: pager.orders,
        }
    }

    pub fn pager(&self) -> Pager {
        Pager {
            current: self.current,
            size: self.size,
            orders: self.orders.clone(),
        }
    }

    pub fn pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total.div_ceil(self.size)
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.pages()
    }
}
