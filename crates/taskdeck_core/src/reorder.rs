//! Drag-reorder reconciliation helpers.
//!
//! # Responsibility
//! - Turn a reorder gesture expressed in *visible* (filtered) positions
//!   into a full-list permutation the store can commit.
//!
//! # Invariants
//! - Hidden tasks keep their absolute positions in the full list; only
//!   the slots occupied by visible tasks are rewritten.
//! - A gesture that is not a permutation of the visible ids is rejected
//!   instead of repaired.

use crate::model::task::{Task, TaskId};
use std::collections::{HashMap, HashSet};

/// Moves the item at `from` to position `to`, shifting the rest.
///
/// Out-of-range indices leave the order unchanged; a stale gesture is a
/// no-op rather than a panic.
pub fn move_item(items: &[Task], from: usize, to: usize) -> Vec<Task> {
    let mut moved = items.to_vec();
    if from >= moved.len() || to >= moved.len() {
        return moved;
    }
    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// Maps a reordered visible subsequence back onto the full list.
///
/// `visible_order` is the id sequence of the currently displayed
/// (filtered) tasks after the gesture. The returned list keeps every
/// hidden task at its absolute index and refills the visible slots with
/// the new visible order, yielding the full permutation
/// `TaskStore::reorder_tasks` expects.
///
/// Returns `None` when `visible_order` is not a permutation of the
/// visible ids embedded in `all`: a duplicate, an unknown id, or a length
/// mismatch against the visible slots. Callers drop the gesture in that
/// case.
pub fn reconcile_visible_order(all: &[Task], visible_order: &[TaskId]) -> Option<Vec<Task>> {
    let mut visible_ids: HashSet<TaskId> = HashSet::with_capacity(visible_order.len());
    for id in visible_order {
        if !visible_ids.insert(*id) {
            return None;
        }
    }

    let by_id: HashMap<TaskId, &Task> = all.iter().map(|task| (task.id, task)).collect();
    if visible_order.iter().any(|id| !by_id.contains_key(id)) {
        return None;
    }

    let visible_slots = all
        .iter()
        .filter(|task| visible_ids.contains(&task.id))
        .count();
    if visible_slots != visible_order.len() {
        return None;
    }

    let mut next_visible = visible_order.iter();
    let mut reordered = Vec::with_capacity(all.len());
    for task in all {
        if visible_ids.contains(&task.id) {
            let id = next_visible.next()?;
            reordered.push((*by_id.get(id)?).clone());
        } else {
            reordered.push(task.clone());
        }
    }

    Some(reordered)
}
