// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection event dispatch.
//!
//! A plain callback list replaces the host toolkit's observable wiring: the
//! chart owns the listener table, fires it synchronously from the
//! hit-tester, and drops every listener on `dispose()`.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::data::ChartItem;

/// Handle returned by a selection subscription, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Fired when a pointer press lands on a chart segment.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionEvent {
    /// Index of the hit item in current display order.
    pub index: usize,
    /// A snapshot of the hit item.
    pub item: ChartItem,
}

type SelectionListener = Box<dyn FnMut(&SelectionEvent)>;

/// An ordered listener table with stable subscription handles.
#[derive(Default)]
pub(crate) struct SelectionListeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, SelectionListener)>,
}

impl SelectionListeners {
    pub(crate) fn subscribe(&mut self, listener: SelectionListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Removes one subscription; returns whether it existed.
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn emit(&mut self, event: &SelectionEvent) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }
}

impl fmt::Debug for SelectionListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionListeners")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use core::cell::Cell;

    use peniko::color::palette::css;

    use super::*;

    fn event() -> SelectionEvent {
        SelectionEvent {
            index: 0,
            item: ChartItem::new("a", 1.0, css::TOMATO),
        }
    }

    #[test]
    fn emit_reaches_every_listener_in_order() {
        let calls = Rc::new(Cell::new(0u32));
        let mut listeners = SelectionListeners::default();
        for _ in 0..3 {
            let calls = Rc::clone(&calls);
            listeners.subscribe(Box::new(move |_| calls.set(calls.get() + 1)));
        }
        listeners.emit(&event());
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let calls = Rc::new(Cell::new(0u32));
        let mut listeners = SelectionListeners::default();
        let keep = Rc::clone(&calls);
        listeners.subscribe(Box::new(move |_| keep.set(keep.get() + 1)));
        let gone = Rc::clone(&calls);
        let id = listeners.subscribe(Box::new(move |_| gone.set(gone.get() + 100)));

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.emit(&event());
        assert_eq!(calls.get(), 1);
        assert_eq!(listeners.entries.len(), 1);
    }

    #[test]
    fn clear_drops_everything() {
        let mut listeners = SelectionListeners::default();
        listeners.subscribe(Box::new(|_| {}));
        listeners.subscribe(Box::new(|_| {}));
        listeners.clear();
        assert!(listeners.entries.is_empty());
    }
}
