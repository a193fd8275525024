//! Sorting, filtering and paging for the admin order listing.

use super::error::OrderError;
use crate::domain::{Order, OrderAdminView};
use std::cmp::Reverse;
use std::str::FromStr;

/// Sort orders accepted by [`OrderQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderSort {
    /// Id ascending.
    #[default]
    Default,
    Newest,
    Oldest,
    TotalAsc,
    TotalDesc,
    /// Buyer, then id.
    Buyer,
}

impl FromStr for OrderSort {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" | "id" => Ok(Self::Default),
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "total" => Ok(Self::TotalAsc),
            "total_desc" => Ok(Self::TotalDesc),
            "buyer" => Ok(Self::Buyer),
            other => Err(OrderError::InvalidQuery(format!("unknown sort '{other}'"))),
        }
    }
}

/// One page of the admin order listing.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderQuery {
    pub sort: OrderSort,
    pub filter: String,
    pub page_size: usize,
    /// 1-based; 0 reads as the first page.
    pub page_number: usize,
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self {
            sort: OrderSort::Default,
            filter: String::new(),
            page_size: 25,
            page_number: 1,
        }
    }
}

impl OrderQuery {
    pub fn new(
        sort: &str,
        filter: impl Into<String>,
        page_size: usize,
        page_number: usize,
    ) -> Result<Self, OrderError> {
        Ok(Self {
            sort: sort.parse()?,
            filter: filter.into(),
            page_size,
            page_number,
        })
    }

    /// Case-insensitive substring match on buyer or description.
    pub fn matches(&self, order: &Order) -> bool {
        let needle = self.filter.trim().to_lowercase();
        needle.is_empty()
            || order.buyer.as_str().to_lowercase().contains(&needle)
            || order.description.to_lowercase().contains(&needle)
    }

    /// Sorts and pages orders that already passed [`OrderQuery::matches`].
    pub fn page(&self, mut orders: Vec<Order>) -> Vec<OrderAdminView> {
        match self.sort {
            OrderSort::Default => orders.sort_by_key(|order| order.id),
            OrderSort::Newest => orders.sort_by_key(|order| (Reverse(order.created_at), order.id)),
            OrderSort::Oldest => orders.sort_by_key(|order| (order.created_at, order.id)),
            OrderSort::TotalAsc => orders.sort_by_key(|order| (order.total_price, order.id)),
            OrderSort::TotalDesc => orders.sort_by_key(|order| (Reverse(order.total_price), order.id)),
            OrderSort::Buyer => orders.sort_by(|a, b| a.buyer.cmp(&b.buyer).then(a.id.cmp(&b.id))),
        }

        let skip = self.page_number.max(1).saturating_sub(1).saturating_mul(self.page_size);
        orders
            .iter()
            .skip(skip)
            .take(self.page_size)
            .map(OrderAdminView::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BuyerId, CartLine, Good, OrderCreate, OrderId};
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn order(id: u64, buyer: &str, title: &str, price: Decimal, minutes: i64) -> Order {
        let good = Good::new(id, title, price, 1, "");
        let created_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes);
        Order::submitted(
            OrderId(id),
            OrderCreate {
                buyer: BuyerId::from(buyer),
                goods: vec![CartLine::from_good(&good, 1)],
                created_at,
            },
        )
        .unwrap()
    }

    fn sample() -> Vec<Order> {
        vec![
            order(2, "den", "Book", dec!(5.5), 10),
            order(1, "asya", "Juice", dec!(2), 20),
            order(3, "admin", "Phone", dec!(100), 0),
        ]
    }

    fn ids(views: &[OrderAdminView]) -> Vec<u64> {
        views.iter().map(|view| view.id.0).collect()
    }

    #[test]
    fn parses_sort_names() {
        assert_eq!("default".parse::<OrderSort>(), Ok(OrderSort::Default));
        assert_eq!("Total_Desc".parse::<OrderSort>(), Ok(OrderSort::TotalDesc));
        assert!(matches!("price".parse::<OrderSort>(), Err(OrderError::InvalidQuery(_))));
    }

    #[test]
    fn sorts_by_each_key() {
        let query = |sort| OrderQuery { sort, ..OrderQuery::default() };

        assert_eq!(ids(&query(OrderSort::Default).page(sample())), vec![1, 2, 3]);
        assert_eq!(ids(&query(OrderSort::Newest).page(sample())), vec![1, 2, 3]);
        assert_eq!(ids(&query(OrderSort::Oldest).page(sample())), vec![3, 2, 1]);
        assert_eq!(ids(&query(OrderSort::TotalAsc).page(sample())), vec![1, 2, 3]);
        assert_eq!(ids(&query(OrderSort::TotalDesc).page(sample())), vec![3, 2, 1]);
        assert_eq!(ids(&query(OrderSort::Buyer).page(sample())), vec![3, 1, 2]);
    }

    #[test]
    fn filter_matches_buyer_or_description() {
        let query = OrderQuery::new("default", "BOOK", 25, 1).unwrap();
        let matching: Vec<_> = sample().into_iter().filter(|order| query.matches(order)).collect();
        assert_eq!(ids(&query.page(matching)), vec![2]);

        let query = OrderQuery::new("default", "asy", 25, 1).unwrap();
        assert_eq!(sample().iter().filter(|order| query.matches(order)).count(), 1);
    }

    #[test]
    fn pages_are_one_based() {
        let page = |size, number| OrderQuery::new("default", "", size, number).unwrap().page(sample());

        assert_eq!(ids(&page(2, 1)), vec![1, 2]);
        assert_eq!(ids(&page(2, 2)), vec![3]);
        assert_eq!(ids(&page(2, 0)), vec![1, 2]);
        assert!(page(2, 3).is_empty());
        assert!(page(0, 1).is_empty());
    }
}
