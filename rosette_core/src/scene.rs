// Copyright 2025 the Rosette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A retained mark set with enter/update/exit diffing.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkKind, MarkPayload};

/// One change between two consecutive mark lists.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark id seen for the first time.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Payload kind.
        kind: MarkKind,
        /// Rendering order hint.
        z_index: i32,
        /// The new payload.
        new: Box<MarkPayload>,
        /// Geometric bounds of the new payload, where cheaply known.
        bounds: Option<Rect>,
    },
    /// A retained mark id whose payload or z-index changed.
    Update {
        /// Mark id.
        id: MarkId,
        /// The new rendering order hint.
        new_z_index: i32,
        /// The new payload.
        new: Box<MarkPayload>,
    },
    /// A mark id absent from the new list.
    Exit {
        /// Mark id.
        id: MarkId,
    },
}

/// Retains the last mark list and diffs each new one against it.
///
/// Charts regenerate their full mark list on every trigger (resize, data
/// mutation); the scene is what makes that cheap to consume for retained-mode
/// renderers. Exits are emitted first, ordered by id; enters and updates
/// follow in the order of the incoming list.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` when no marks are retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the retained mark for `id`, if any.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Replaces the retained mark set and returns the changes.
    ///
    /// If the incoming list contains duplicate ids, the last occurrence wins.
    pub fn tick(&mut self, marks: Vec<Mark>) -> Vec<MarkDiff> {
        let mut next: HashMap<MarkId, Mark> = HashMap::with_capacity(marks.len());
        for mark in &marks {
            next.insert(mark.id, mark.clone());
        }

        let mut diffs = Vec::new();

        let mut exited: Vec<MarkId> = self
            .marks
            .keys()
            .filter(|id| !next.contains_key(*id))
            .copied()
            .collect();
        exited.sort_unstable();
        diffs.extend(exited.into_iter().map(|id| MarkDiff::Exit { id }));

        let mut emitted: HashSet<MarkId> = HashSet::with_capacity(marks.len());
        for mark in &marks {
            // Only the winning duplicate produces a diff.
            let winner = &next[&mark.id];
            if winner != mark || emitted.contains(&mark.id) {
                continue;
            }
            emitted.insert(mark.id);
            match self.marks.get(&mark.id) {
                None => diffs.push(MarkDiff::Enter {
                    id: mark.id,
                    kind: mark.payload.kind(),
                    z_index: mark.z_index,
                    new: mark.boxed_payload(),
                    bounds: mark.payload.bounds(),
                }),
                Some(old) if old != mark => diffs.push(MarkDiff::Update {
                    id: mark.id,
                    new_z_index: mark.z_index,
                    new: mark.boxed_payload(),
                }),
                Some(_) => {}
            }
        }

        self.marks = next;
        diffs
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::{Point, Rect, Shape};
    use peniko::color::palette::css;

    use super::*;

    fn rect_mark(id: u64, rect: Rect) -> Mark {
        Mark::path(MarkId::from_raw(id), rect.to_path(0.1)).with_fill(css::TOMATO)
    }

    #[test]
    fn first_tick_enters_all_marks() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![rect_mark(1, Rect::new(0.0, 0.0, 10.0, 10.0))]);
        let [MarkDiff::Enter { id, kind, bounds, .. }] = &diffs[..] else {
            panic!("expected a single enter diff");
        };
        assert_eq!(*id, MarkId::from_raw(1));
        assert_eq!(*kind, MarkKind::Path);
        assert_eq!(*bounds, Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn unchanged_marks_produce_no_diffs() {
        let mut scene = Scene::new();
        scene.tick(vec![rect_mark(1, Rect::new(0.0, 0.0, 10.0, 10.0))]);
        let diffs = scene.tick(vec![rect_mark(1, Rect::new(0.0, 0.0, 10.0, 10.0))]);
        assert!(diffs.is_empty(), "identical mark should not diff");
    }

    #[test]
    fn changed_payload_updates_and_missing_id_exits() {
        let mut scene = Scene::new();
        scene.tick(vec![
            rect_mark(1, Rect::new(0.0, 0.0, 10.0, 10.0)),
            rect_mark(2, Rect::new(0.0, 0.0, 5.0, 5.0)),
        ]);

        let diffs = scene.tick(vec![rect_mark(1, Rect::new(0.0, 0.0, 20.0, 20.0))]);
        let [MarkDiff::Exit { id: exited }, MarkDiff::Update { id, .. }] = &diffs[..] else {
            panic!("expected an exit followed by an update");
        };
        assert_eq!(*exited, MarkId::from_raw(2));
        assert_eq!(*id, MarkId::from_raw(1));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn text_marks_round_trip_through_diffs() {
        let mut scene = Scene::new();
        let mark = Mark::text(MarkId::from_raw(7), Point::new(50.0, 50.0), "25%")
            .with_fill(css::WHITE)
            .with_font_size(7.5);
        let diffs = scene.tick(vec![mark]);
        let [MarkDiff::Enter { new, .. }] = &diffs[..] else {
            panic!("expected a single enter diff");
        };
        let MarkPayload::Text(t) = &**new else {
            panic!("expected text payload");
        };
        assert_eq!(t.text, "25%");
        assert_eq!(t.font_size, 7.5);
    }
}
