// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The weighted item data model.
//!
//! Items are plain data: the owning chart is responsible for all change
//! notification and re-applies its sort order on every collection mutation.

extern crate alloc;

use alloc::string::String;

use peniko::Color;

/// One weighted chart item.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartItem {
    /// Item name, used for identity in collection mutations.
    pub name: String,
    /// Non-negative weight; its share of the value sum becomes the segment's
    /// sweep angle.
    pub value: f64,
    /// Segment fill color.
    pub fill: Color,
}

impl ChartItem {
    /// Creates a new item.
    pub fn new(name: impl Into<String>, value: f64, fill: Color) -> Self {
        Self {
            name: name.into(),
            value,
            fill,
        }
    }
}

/// Collection ordering applied before angular layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    #[default]
    Descending,
}

/// Sorts `items` by value according to `order`.
pub(crate) fn sort_items(items: &mut [ChartItem], order: SortOrder) {
    match order {
        SortOrder::Ascending => items.sort_by(|a, b| a.value.total_cmp(&b.value)),
        SortOrder::Descending => items.sort_by(|a, b| b.value.total_cmp(&a.value)),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use peniko::color::palette::css;

    use super::*;

    fn values(items: &[ChartItem]) -> Vec<f64> {
        items.iter().map(|i| i.value).collect()
    }

    #[test]
    fn ascending_then_descending_reverses() {
        let mut items = vec![
            ChartItem::new("b", 3.0, css::TOMATO),
            ChartItem::new("a", 1.0, css::GOLD),
            ChartItem::new("c", 2.0, css::TEAL),
        ];

        sort_items(&mut items, SortOrder::Ascending);
        let ascending = values(&items);
        assert_eq!(ascending, vec![1.0, 2.0, 3.0]);

        sort_items(&mut items, SortOrder::Descending);
        let descending = values(&items);
        let mut reversed = ascending.clone();
        reversed.reverse();
        assert_eq!(descending, reversed);

        // Round-trip: sorting ascending again restores the ascending order.
        sort_items(&mut items, SortOrder::Ascending);
        assert_eq!(values(&items), ascending);
    }

    #[test]
    fn sort_is_stable_for_equal_values() {
        let mut items = vec![
            ChartItem::new("first", 2.0, css::TOMATO),
            ChartItem::new("second", 2.0, css::GOLD),
        ];
        sort_items(&mut items, SortOrder::Ascending);
        assert_eq!(items[0].name, "first");
        assert_eq!(items[1].name, "second");
    }
}
