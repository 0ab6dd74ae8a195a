use crate::utils::pager::DEFAULT_PAGE_SIZE;
use anyhow::anyhow;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

const SORT_PARAM_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(anyhow!(
                "invalid value '{}' for sort direction, expected 'asc' or 'desc'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Order {
    pub property: String,
    pub direction: Direction,
}

impl Order {
    pub fn new(property: impl Into<String>, direction: Direction) -> Self {
        Self {
            property: property.into(),
            direction,
        }
    }

    pub fn asc(property: impl Into<String>) -> Self {
        Self::new(property, Direction::Asc)
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self::new(property, Direction::Desc)
    }

    pub fn is_ascending(&self) -> bool {
        self.direction.is_ascending()
    }
}

/// Ordered list of sort criteria. An empty list is unsorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    /// Parses query string sort parameters such as `name`, `name,desc` or
    /// `age,name,asc`. A trailing direction token applies to every property
    /// of its parameter; without one the properties sort ascending.
    pub fn parse<S: AsRef<str>>(params: &[S]) -> Self {
        let mut orders = Vec::new();
        for param in params {
            let mut tokens: Vec<&str> = param
                .as_ref()
                .split(SORT_PARAM_SEPARATOR)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect();
            let direction = match tokens.last().map(|token| token.parse::<Direction>()) {
                Some(Ok(direction)) => {
                    tokens.pop();
                    direction
                }
                _ => Direction::Asc,
            };
            orders.extend(tokens.into_iter().map(|p| Order::new(p, direction)));
        }
        Self { orders }
    }

    pub fn is_sorted(&self) -> bool {
        !self.orders.is_empty()
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

impl From<Vec<Order>> for Sort {
    fn from(orders: Vec<Order>) -> Self {
        Self::by(orders)
    }
}

impl FromIterator<Order> for Sort {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        Self::by(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sort {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

/// Zero-based page request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize, Validate, Builder)]
#[builder(default, setter(into))]
#[serde(rename_all = "camelCase")]
pub struct Pageable {
    pub page_number: u64,
    #[validate(range(min = 1))]
    pub page_size: u64,
    #[serde(default)]
    pub sort: Sort,
}

impl Default for Pageable {
    fn default() -> Self {
        Self::of(0, DEFAULT_PAGE_SIZE)
    }
}

impl Pageable {
    pub fn builder() -> PageableBuilder {
        PageableBuilder::default()
    }

    pub fn of(page_number: u64, page_size: u64) -> Self {
        Self::with_sort(page_number, page_size, Sort::unsorted())
    }

    pub fn with_sort(page_number: u64, page_size: u64, sort: Sort) -> Self {
        Self {
            page_number,
            page_size,
            sort,
        }
    }

    pub fn offset(&self) -> u64 {
        self.page_number.saturating_mul(self.page_size)
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 0
    }

    pub fn next(&self) -> Self {
        Self::with_sort(
            self.page_number.saturating_add(1),
            self.page_size,
            self.sort.clone(),
        )
    }

    pub fn previous_or_first(&self) -> Self {
        Self::with_sort(
            self.page_number.saturating_sub(1),
            self.page_size,
            self.sort.clone(),
        )
    }

    pub fn first(&self) -> Self {
        Self::with_sort(0, self.page_size, self.sort.clone())
    }
}

/// One page of content together with the request that produced it.
/// A page without a `pageable` is unpaged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub pageable: Option<Pageable>,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::unpaged(Vec::new())
    }
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, pageable: Pageable, total: u64) -> Self {
        Self {
            content,
            pageable: Some(pageable),
            total,
        }
    }

    pub fn unpaged(content: Vec<T>) -> Self {
        let total = content.len() as u64;
        Self {
            content,
            pageable: None,
            total,
        }
    }

    pub fn is_paged(&self) -> bool {
        self.pageable.is_some()
    }

    pub fn number(&self) -> u64 {
        self.pageable.as_ref().map_or(0, |p| p.page_number)
    }

    /// Requested page size, or the content length when unpaged.
    pub fn size(&self) -> u64 {
        self.pageable
            .as_ref()
            .map_or(self.content.len() as u64, |p| p.page_size)
    }

    pub fn sort(&self) -> Sort {
        self.pageable
            .as_ref()
            .map_or_else(Sort::unsorted, |p| p.sort.clone())
    }

    pub fn total_pages(&self) -> u64 {
        match &self.pageable {
            Some(p) if p.page_size > 0 => self.total.div_ceil(p.page_size),
            _ => 1,
        }
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.number().saturating_add(1) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number() > 0
    }

    pub fn is_first(&self) -> bool {
        !self.has_previous()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    /// Converts the content while keeping the paging metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            pageable: self.pageable,
            total: self.total,
        }
    }
}
