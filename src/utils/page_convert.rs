//! Conversions between zero-based [`Pageable`]/[`Page`] and the one-based
//! [`Pager`]/[`PagerResult`] used by the query builder.
//!
//! Page numbers shift by one in each direction and sort criteria keep their
//! sequence and direction. An absent input yields an empty value instead of
//! an error.

use crate::utils::pageable::{Direction, Order, Page, Pageable, Sort};
use crate::utils::pager::{OrderItem, Pager, PagerResult};
use tracing::{debug, trace};

/// Builds the query-builder request for `pageable`, or the default pager
/// when there is none.
pub fn to_pager(pageable: Option<&Pageable>) -> Pager {
    let Some(pageable) = pageable else {
        debug!("no pageable given, using default pager");
        return Pager::default();
    };
    let mut pager = Pager::new(pageable.page_number.saturating_add(1), pageable.page_size);
    if pageable.sort.is_sorted() {
        pager.add_orders(pageable.sort.iter().map(OrderItem::from));
    }
    trace!(
        page_number = pageable.page_number,
        current = pager.current,
        size = pager.size,
        orders = pager.orders.len(),
        "pageable converted to pager"
    );
    pager
}

/// Wraps the fetched records into a [`Page`] that carries the caller's
/// original `pageable` verbatim.
pub fn to_page_with<T>(result: Option<PagerResult<T>>, pageable: Pageable) -> Page<T> {
    match result {
        Some(result) => Page::new(result.records, pageable, result.total),
        None => {
            debug!(page_number = pageable.page_number, "no pager result given");
            Page::new(Vec::new(), pageable, 0)
        }
    }
}

/// Wraps the fetched records into a [`Page`], rebuilding the pageable from
/// the result itself. No result gives an empty, unpaged page.
pub fn to_page<T>(result: Option<PagerResult<T>>) -> Page<T> {
    let Some(result) = result else {
        debug!("no pager result given, returning empty page");
        return Page {
            content: Vec::new(),
            pageable: None,
            total: 0,
        };
    };
    let sort = if result.orders.is_empty() {
        Sort::unsorted()
    } else {
        result.orders.iter().map(Order::from).collect()
    };
    let pageable = Pageable::with_sort(result.current.saturating_sub(1), result.size, sort);
    trace!(
        current = result.current,
        page_number = pageable.page_number,
        total = result.total,
        records = result.records.len(),
        "pager result converted to page"
    );
    Page::new(result.records, pageable, result.total)
}

/// Turns a [`Page`] back into the query-builder shape. Unpaged pages get the
/// default pager.
pub fn to_pager_result<T>(page: Page<T>) -> PagerResult<T> {
    let pager = to_pager(page.pageable.as_ref());
    PagerResult::new(pager, page.content, page.total)
}

impl From<&Order> for OrderItem {
    fn from(order: &Order) -> Self {
        Self {
            column: order.property.clone(),
            asc: order.is_ascending(),
        }
    }
}

impl From<&OrderItem> for Order {
    fn from(item: &OrderItem) -> Self {
        Order::new(item.column.clone(), Direction::from_ascending(item.asc))
    }
}

impl From<&Pageable> for Pager {
    fn from(pageable: &Pageable) -> Self {
        to_pager(Some(pageable))
    }
}

impl From<Pageable> for Pager {
    fn from(pageable: Pageable) -> Self {
        to_pager(Some(&pageable))
    }
}

impl<T> From<PagerResult<T>> for Page<T> {
    fn from(result: PagerResult<T>) -> Self {
        to_page(Some(result))
    }
}

impl<T> Page<T> {
    pub fn into_pager_result(self) -> PagerResult<T> {
        to_pager_result(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_sort() -> Sort {
        Sort::by(vec![
            Order::desc("created_at"),
            Order::asc("name"),
            Order::desc("id"),
            Order::asc("created_at"),
        ])
    }

    #[test_log::test]
    fn test_pageable_to_pager() {
        let pageable = Pageable::with_sort(0, 20, Sort::by(vec![Order::asc("name")]));
        let pager = to_pager(Some(&pageable));
        assert_eq!(pager.current, 1);
        assert_eq!(pager.size, 20);
        assert_eq!(pager.orders, vec![OrderItem::asc("name")]);
    }

    #[test_log::test]
    fn test_absent_pageable_gives_default_pager() {
        assert_eq!(to_pager(None), Pager::default());
    }

    #[test]
    fn test_unsorted_pageable_has_no_orders() {
        let pager = Pager::from(Pageable::of(4, 25));
        assert_eq!(pager.current, 5);
        assert!(pager.orders.is_empty());
    }

    #[test]
    fn test_orders_keep_sequence_and_direction() {
        let pager = to_pager(Some(&Pageable::with_sort(1, 10, mixed_sort())));
        assert_eq!(
            pager.orders,
            vec![
                OrderItem::desc("created_at"),
                OrderItem::asc("name"),
                OrderItem::desc("id"),
                OrderItem::asc("created_at"),
            ]
        );
    }

    #[test_log::test]
    fn test_result_to_page_derived() {
        let mut pager = Pager::new(3, 10);
        pager.add_orders(vec![OrderItem::desc("age")]);
        let result = PagerResult::new(pager, vec!["a", "b"], 25);

        let page = to_page(Some(result));
        assert_eq!(page.content, vec!["a", "b"]);
        assert_eq!(page.total, 25);
        let pageable = page.pageable.as_ref().unwrap();
        assert_eq!(pageable.page_number, 2);
        assert_eq!(pageable.page_size, 10);
        assert_eq!(pageable.sort.orders(), &[Order::desc("age")]);
        assert_eq!(pageable.sort.orders()[0].direction.to_string(), "DESC");
    }

    #[test]
    fn test_result_without_orders_is_unsorted() {
        let page = Page::from(PagerResult::new(Pager::new(1, 5), vec![1, 2, 3], 3));
        assert!(page.sort().is_unsorted());
        assert_eq!(page.number(), 0);
    }

    #[test_log::test]
    fn test_absent_result_derived_is_empty_unpaged() {
        let page = to_page::<String>(None);
        assert!(page.content.is_empty());
        assert_eq!(page.total, 0);
        assert!(page.pageable.is_none());
    }

    #[test]
    fn test_result_with_original_pageable() {
        let original = Pageable::with_sort(7, 3, mixed_sort());
        // current deliberately disagrees; the original pageable is kept as given
        let result = PagerResult::new(Pager::new(1, 3), vec![10, 11], 40);
        let page = to_page_with(Some(result), original.clone());
        assert_eq!(page.content, vec![10, 11]);
        assert_eq!(page.total, 40);
        assert_eq!(page.pageable, Some(original));
    }

    #[test]
    fn test_absent_result_keeps_original_pageable() {
        let original = Pageable::of(2, 15);
        let page = to_page_with::<u32>(None, original.clone());
        assert!(page.content.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.pageable, Some(original));
    }

    #[test]
    fn test_current_zero_saturates() {
        let page = to_page(Some(PagerResult::new(Pager::new(0, 10), vec![()], 1)));
        assert_eq!(page.number(), 0);
        assert_eq!(to_pager(Some(&Pageable::of(u64::MAX, 1))).current, u64::MAX);
    }

    #[test]
    fn test_page_index_round_trip() {
        for n in [0, 1, 2, 9, 100, 65_534, u64::MAX - 1] {
            let pageable = Pageable::of(n, 10);
            let pager = to_pager(Some(&pageable));
            let page = to_page(Some(PagerResult::new(pager, Vec::<u8>::new(), 0)));
            assert_eq!(page.number(), n);
        }
    }

    #[test]
    fn test_sort_round_trip() {
        let sorts = [
            Sort::unsorted(),
            Sort::by(vec![Order::asc("name")]),
            Sort::by(vec![Order::desc("name")]),
            mixed_sort(),
            Sort::parse(&["b,a,desc", "c"]),
        ];
        for sort in sorts {
            let pageable = Pageable::with_sort(3, 12, sort);
            let pager = to_pager(Some(&pageable));
            let page = to_page(Some(PagerResult::new(pager, vec!["x"], 50)));
            assert_eq!(page.pageable, Some(pageable));
        }
    }

    #[test]
    fn test_pager_result_round_trip() {
        let mut pager = Pager::new(4, 8);
        pager.add_orders(vec![OrderItem::asc("title"), OrderItem::desc("year")]);
        let result = PagerResult::new(pager, vec!["song"], 31);

        let back = to_page(Some(result.clone())).into_pager_result();
        assert_eq!(back, result);
    }

    #[test]
    fn test_unpaged_page_to_pager_result() {
        let result = to_pager_result(Page::unpaged(vec![1, 2]));
        assert_eq!(result.pager(), Pager::default());
        assert_eq!(result.records, vec![1, 2]);
        assert_eq!(result.total, 2);
    }
}
