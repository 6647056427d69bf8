//! Editable List State
//!
//! Ordered collection plus the gesture sub-state layered on top of it.
//! Every mutation goes through a named transition; a transition returning
//! `Err` leaves the list untouched, so the render layer can log and move on.

use std::collections::{HashMap, HashSet};

use serde::de::DeserializeOwned;

use crate::config::ListConfig;
use crate::entity::{Entity, ListError, ListResult};
use crate::mode::Mode;
use crate::row::RowPhase;

/// An in-flight drag: the dragged id and the uncommitted order
#[derive(Debug, Clone)]
struct DragState<I> {
    id: I,
    order: Vec<I>,
}

#[derive(Debug, Clone)]
pub struct EditableList<T: Entity> {
    items: Vec<T>,
    mode: Mode,
    drag: Option<DragState<T::Id>>,
    /// Rows away from `Resting`; absent means resting
    rows: HashMap<T::Id, RowPhase>,
    config: ListConfig,
}

impl<T: Entity> Default for EditableList<T> {
    fn default() -> Self {
        Self::new(Vec::new(), ListConfig::default())
    }
}

fn reject(op: &'static str, err: ListError) -> ListError {
    tracing::debug!(op, error = %err, "transition ignored");
    err
}

impl<T: Entity> EditableList<T> {
    /// Seed the list. Later duplicates of an id are dropped.
    pub fn new(seed: Vec<T>, config: ListConfig) -> Self {
        let mut seen = HashSet::new();
        let mut items = Vec::with_capacity(seed.len());
        for item in seed {
            if seen.insert(item.id()) {
                items.push(item);
            } else {
                tracing::warn!(id = ?item.id(), "dropping duplicate id from seed");
            }
        }
        Self {
            items,
            mode: Mode::Browse,
            drag: None,
            rows: HashMap::new(),
            config,
        }
    }

    /// Seed from a JSON array of items.
    pub fn from_json(json: &str, config: ListConfig) -> ListResult<Self>
    where
        T: DeserializeOwned,
    {
        let seed: Vec<T> = serde_json::from_str(json)?;
        Ok(Self::new(seed, config))
    }

    // ========================
    // Accessors
    // ========================

    /// Committed sequence
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn position(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn ids(&self) -> Vec<T::Id> {
        self.items.iter().map(Entity::id).collect()
    }

    /// Order to render: the pending order during a drag, otherwise committed.
    pub fn display_order(&self) -> Vec<&T> {
        match &self.drag {
            Some(drag) => drag.order.iter().filter_map(|id| self.get(*id)).collect(),
            None => self.items.iter().collect(),
        }
    }

    pub fn dragging(&self) -> Option<T::Id> {
        self.drag.as_ref().map(|d| d.id)
    }

    pub fn row_phase(&self, id: T::Id) -> RowPhase {
        self.rows.get(&id).copied().unwrap_or_default()
    }

    pub fn row_offset(&self, id: T::Id) -> f64 {
        self.row_phase(id).offset(&self.config)
    }

    /// True when no drag or row gesture is outstanding.
    pub fn is_settled(&self) -> bool {
        self.drag.is_none() && self.rows.is_empty()
    }

    fn require(&self, op: &'static str, id: T::Id) -> ListResult<usize> {
        self.position(id).ok_or_else(|| reject(op, ListError::unknown(id)))
    }

    fn require_mode(&self, op: &'static str, mode: Mode) -> ListResult<()> {
        if self.mode == mode {
            Ok(())
        } else {
            Err(reject(op, ListError::WrongMode(self.mode)))
        }
    }

    fn set_phase(&mut self, id: T::Id, phase: RowPhase) {
        if phase == RowPhase::Resting {
            self.rows.remove(&id);
        } else {
            self.rows.insert(id, phase);
        }
    }

    // ========================
    // Mode
    // ========================

    /// Flip between browse and edit.
    ///
    /// Leaves no sub-state behind: a pending drag is discarded, armed or
    /// tracking rows go back to resting, and rows already collapsing are
    /// removed now instead of when their animation ends.
    pub fn toggle_mode(&mut self) -> Mode {
        if self.drag.take().is_some() {
            tracing::debug!("drag discarded by mode toggle");
        }
        let collapsing: Vec<T::Id> = self
            .rows
            .iter()
            .filter(|(_, phase)| **phase == RowPhase::Removing)
            .map(|(id, _)| *id)
            .collect();
        self.rows.clear();
        for id in collapsing {
            self.remove_now(id);
        }
        self.mode = self.mode.toggled();
        tracing::debug!(mode = ?self.mode, "mode toggled");
        self.mode
    }

    // ========================
    // Drag reorder (edit mode)
    // ========================

    /// Start dragging `id`. Only one drag at a time.
    pub fn begin_drag(&mut self, id: T::Id) -> ListResult<()> {
        const OP: &str = "begin_drag";
        self.require_mode(OP, Mode::Edit)?;
        self.require(OP, id)?;
        if let Some(drag) = &self.drag {
            if drag.id == id {
                return Ok(());
            }
            return Err(reject(OP, ListError::DragInProgress));
        }
        if self.row_phase(id) != RowPhase::Resting {
            return Err(reject(OP, ListError::busy(id)));
        }
        self.drag = Some(DragState { id, order: self.ids() });
        Ok(())
    }

    /// Move the dragged item to `new_index` in the pending order.
    ///
    /// Out-of-range targets clamp to the last slot. Returns the index used.
    pub fn reorder(&mut self, id: T::Id, new_index: usize) -> ListResult<usize> {
        const OP: &str = "reorder";
        let drag = match self.drag.as_mut() {
            Some(drag) if drag.id == id => drag,
            _ => return Err(reject(OP, ListError::NotDragging)),
        };
        let from = match drag.order.iter().position(|i| *i == id) {
            Some(from) => from,
            None => return Err(reject(OP, ListError::unknown(id))),
        };
        let to = new_index.min(drag.order.len() - 1);
        let moved = drag.order.remove(from);
        drag.order.insert(to, moved);
        Ok(to)
    }

    /// Commit the pending order and clear the drag.
    pub fn end_drag(&mut self) -> ListResult<()> {
        let Some(drag) = self.drag.take() else {
            return Err(reject("end_drag", ListError::NotDragging));
        };
        let rank: HashMap<T::Id, usize> =
            drag.order.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        let before = self.ids();
        self.items
            .sort_by_key(|item| rank.get(&item.id()).copied().unwrap_or(usize::MAX));
        if before != drag.order {
            tracing::info!(id = ?drag.id, "reorder committed");
        }
        Ok(())
    }

    /// Drop the pending order without committing it.
    pub fn cancel_drag(&mut self) -> ListResult<()> {
        match self.drag.take() {
            Some(_) => Ok(()),
            None => Err(reject("cancel_drag", ListError::NotDragging)),
        }
    }

    // ========================
    // Swipe (browse mode)
    // ========================

    /// Feed a pan update for `id`. `dx`/`dy` are cumulative since pointer-down.
    pub fn swipe_move(&mut self, id: T::Id, dx: f64, dy: f64) -> ListResult<RowPhase> {
        const OP: &str = "swipe_move";
        self.require_mode(OP, Mode::Browse)?;
        self.require(OP, id)?;
        let phase = self.row_phase(id);
        if phase == RowPhase::Removing {
            return Err(reject(OP, ListError::removing(id)));
        }
        let next = phase.on_pan(dx, dy, &self.config);
        self.set_phase(id, next);
        Ok(next)
    }

    /// Finish a pan. Past the threshold the row is armed for deletion,
    /// otherwise it snaps back to resting. An abandoned pan returns the row
    /// to where it started.
    pub fn swipe_end(&mut self, id: T::Id, dx: f64) -> ListResult<RowPhase> {
        const OP: &str = "swipe_end";
        self.require_mode(OP, Mode::Browse)?;
        self.require(OP, id)?;
        let phase = self.row_phase(id);
        match phase {
            RowPhase::Removing => Err(reject(OP, ListError::removing(id))),
            RowPhase::Scrolling { .. } => {
                let settled = phase.on_release(dx, &self.config);
                self.set_phase(id, settled);
                Ok(settled)
            }
            RowPhase::Tracking { .. } => match phase.on_release(dx, &self.config) {
                RowPhase::Revealed => {
                    self.request_delete(id)?;
                    Ok(RowPhase::Revealed)
                }
                _ => {
                    self.cancel_delete(id)?;
                    Ok(RowPhase::Resting)
                }
            },
            RowPhase::Resting | RowPhase::Revealed => Ok(phase),
        }
    }

    // ========================
    // Deletion
    // ========================

    /// Arm `id` for removal (pending-removal).
    ///
    /// Browse mode reaches this through a swipe past the threshold; edit
    /// mode through the row's delete affordance.
    pub fn request_delete(&mut self, id: T::Id) -> ListResult<()> {
        const OP: &str = "request_delete";
        self.require(OP, id)?;
        if self.dragging() == Some(id) {
            return Err(reject(OP, ListError::busy(id)));
        }
        if self.row_phase(id) == RowPhase::Removing {
            return Err(reject(OP, ListError::removing(id)));
        }
        self.set_phase(id, RowPhase::Revealed);
        Ok(())
    }

    /// Disarm `id`, restoring it to resting. Collapsing rows cannot be recalled.
    pub fn cancel_delete(&mut self, id: T::Id) -> ListResult<()> {
        const OP: &str = "cancel_delete";
        self.require(OP, id)?;
        if self.row_phase(id) == RowPhase::Removing {
            return Err(reject(OP, ListError::removing(id)));
        }
        self.set_phase(id, RowPhase::Resting);
        Ok(())
    }

    /// The delete button was pressed: start the collapse.
    pub fn begin_removal(&mut self, id: T::Id) -> ListResult<()> {
        const OP: &str = "begin_removal";
        self.require(OP, id)?;
        match self.row_phase(id) {
            RowPhase::Revealed => {
                self.set_phase(id, RowPhase::Removing);
                Ok(())
            }
            RowPhase::Removing => Err(reject(OP, ListError::removing(id))),
            _ => Err(reject(OP, ListError::not_armed(id))),
        }
    }

    /// Collapse animation finished.
    pub fn finish_removal(&mut self, id: T::Id) -> ListResult<T> {
        const OP: &str = "finish_removal";
        self.require(OP, id)?;
        if self.row_phase(id) != RowPhase::Removing {
            return Err(reject(OP, ListError::not_armed(id)));
        }
        self.confirm_delete(id)
    }

    /// Remove an armed or collapsing row from the sequence.
    pub fn confirm_delete(&mut self, id: T::Id) -> ListResult<T> {
        const OP: &str = "confirm_delete";
        self.require(OP, id)?;
        if self.dragging() == Some(id) {
            return Err(reject(OP, ListError::busy(id)));
        }
        if !self.row_phase(id).is_pending_removal() {
            return Err(reject(OP, ListError::not_armed(id)));
        }
        self.remove_now(id)
            .ok_or_else(|| reject(OP, ListError::unknown(id)))
    }

    /// Drop `id` from the sequence, its row state and any pending order.
    fn remove_now(&mut self, id: T::Id) -> Option<T> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        self.rows.remove(&id);
        if let Some(drag) = self.drag.as_mut() {
            drag.order.retain(|i| *i != id);
        }
        tracing::info!(id = ?id, index, "item removed");
        Some(removed)
    }

    // ========================
    // Copy-on-write edits
    // ========================

    /// Replace the item sharing `item`'s id, keeping its position.
    /// Returns the previous value.
    pub fn replace_item(&mut self, item: T) -> ListResult<T> {
        let index = self.require("replace_item", item.id())?;
        Ok(std::mem::replace(&mut self.items[index], item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: char,
        label: &'static str,
    }

    impl Entity for Row {
        type Id = char;

        fn id(&self) -> char {
            self.id
        }
    }

    fn make_list(ids: &str) -> EditableList<Row> {
        let rows = ids.chars().map(|id| Row { id, label: "row" }).collect();
        EditableList::new(rows, ListConfig::default())
    }

    fn order(list: &EditableList<Row>) -> String {
        list.items().iter().map(|r| r.id).collect()
    }

    fn display(list: &EditableList<Row>) -> String {
        list.display_order().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_starts_in_browse_mode() {
        let list = make_list("ABC");
        assert_eq!(list.mode(), Mode::Browse);
        assert!(list.is_settled());
    }

    #[test]
    fn test_seed_drops_duplicate_ids() {
        let list = make_list("ABAC");
        assert_eq!(order(&list), "ABC");
    }

    #[test]
    fn test_reorder_commit_then_delete() {
        let mut list = make_list("ABC");
        list.toggle_mode();
        list.begin_drag('C').unwrap();
        assert_eq!(list.reorder('C', 0).unwrap(), 0);
        assert_eq!(display(&list), "CAB");
        // Not committed until the drag ends
        assert_eq!(order(&list), "ABC");

        list.end_drag().unwrap();
        assert_eq!(order(&list), "CAB");
        assert_eq!(list.dragging(), None);

        list.request_delete('A').unwrap();
        let removed = list.confirm_delete('A').unwrap();
        assert_eq!(removed.id, 'A');
        assert_eq!(order(&list), "CB");
    }

    #[test]
    fn test_reorder_clamps_out_of_range() {
        let mut list = make_list("ABC");
        list.toggle_mode();
        list.begin_drag('A').unwrap();
        assert_eq!(list.reorder('A', 99).unwrap(), 2);
        list.end_drag().unwrap();
        assert_eq!(order(&list), "BCA");
    }

    #[test]
    fn test_drag_requires_edit_mode() {
        let mut list = make_list("ABC");
        assert!(matches!(list.begin_drag('A'), Err(ListError::WrongMode(Mode::Browse))));
        assert_eq!(list.dragging(), None);
    }

    #[test]
    fn test_second_drag_is_ignored() {
        let mut list = make_list("ABC");
        list.toggle_mode();
        list.begin_drag('A').unwrap();
        assert!(matches!(list.begin_drag('B'), Err(ListError::DragInProgress)));
        assert_eq!(list.dragging(), Some('A'));
        // Reordering a row that is not being dragged does nothing
        assert!(list.reorder('B', 0).is_err());
        assert_eq!(display(&list), "ABC");
    }

    #[test]
    fn test_cancel_drag_discards_order() {
        let mut list = make_list("ABC");
        list.toggle_mode();
        list.begin_drag('B').unwrap();
        list.reorder('B', 2).unwrap();
        list.cancel_drag().unwrap();
        assert_eq!(order(&list), "ABC");
        assert!(list.end_drag().is_err());
    }

    #[test]
    fn test_dragged_row_cannot_be_deleted() {
        let mut list = make_list("ABC");
        list.toggle_mode();
        list.begin_drag('B').unwrap();
        assert!(matches!(list.request_delete('B'), Err(ListError::RowBusy(_))));
        assert!(list.confirm_delete('B').is_err());
        assert_eq!(order(&list), "ABC");
    }

    #[test]
    fn test_deleting_other_row_during_drag_updates_pending_order() {
        let mut list = make_list("ABC");
        list.toggle_mode();
        list.begin_drag('C').unwrap();
        list.reorder('C', 0).unwrap();
        list.request_delete('A').unwrap();
        list.confirm_delete('A').unwrap();
        assert_eq!(display(&list), "CB");
        list.end_drag().unwrap();
        assert_eq!(order(&list), "CB");
    }

    #[test]
    fn test_armed_row_cannot_start_drag() {
        let mut list = make_list("ABC");
        list.toggle_mode();
        list.request_delete('A').unwrap();
        assert!(matches!(list.begin_drag('A'), Err(ListError::RowBusy(_))));
    }

    #[test]
    fn test_confirm_requires_armed_row() {
        let mut list = make_list("ABC");
        assert!(matches!(list.confirm_delete('B'), Err(ListError::NotArmed(_))));
        list.swipe_move('B', -20.0, 0.0).unwrap();
        // Tracking below threshold never deletes
        assert!(matches!(list.confirm_delete('B'), Err(ListError::NotArmed(_))));
        assert_eq!(order(&list), "ABC");
    }

    #[test]
    fn test_request_then_cancel_is_noop() {
        let mut list = make_list("ABC");
        let before = list.items().to_vec();
        list.request_delete('B').unwrap();
        list.cancel_delete('B').unwrap();
        assert_eq!(list.items(), before.as_slice());
        assert_eq!(list.row_phase('B'), RowPhase::Resting);
        assert!(list.is_settled());
    }

    #[test]
    fn test_swipe_past_threshold_then_collapse_removes() {
        let mut list = make_list("ABC");
        list.swipe_move('B', -30.0, 0.0).unwrap();
        list.swipe_move('B', -55.0, 2.0).unwrap();
        assert_eq!(list.row_offset('B'), -55.0);
        assert_eq!(list.swipe_end('B', -55.0).unwrap(), RowPhase::Revealed);
        assert_eq!(list.row_offset('B'), -80.0);

        list.begin_removal('B').unwrap();
        assert_eq!(list.row_phase('B'), RowPhase::Removing);
        assert!(matches!(list.cancel_delete('B'), Err(ListError::AlreadyRemoving(_))));

        let removed = list.finish_removal('B').unwrap();
        assert_eq!(removed.id, 'B');
        assert_eq!(order(&list), "AC");
        assert!(list.is_settled());
    }

    #[test]
    fn test_swipe_below_threshold_snaps_back() {
        let mut list = make_list("ABC");
        list.swipe_move('A', -25.0, 0.0).unwrap();
        assert_eq!(list.swipe_end('A', -25.0).unwrap(), RowPhase::Resting);
        assert!(list.is_settled());
        assert_eq!(order(&list), "ABC");
    }

    #[test]
    fn test_scroll_then_swipe_left_does_not_arm() {
        let mut list = make_list("ABC");
        list.swipe_move('B', 0.0, 30.0).unwrap();
        assert_eq!(list.swipe_move('B', -60.0, 2.0).unwrap(), RowPhase::Scrolling { revealed: false });
        assert_eq!(list.row_offset('B'), 0.0);
        assert_eq!(list.swipe_end('B', -60.0).unwrap(), RowPhase::Resting);
        assert!(list.is_settled());
        assert!(matches!(list.begin_removal('B'), Err(ListError::NotArmed(_))));
        assert_eq!(order(&list), "ABC");
    }

    #[test]
    fn test_tap_on_resting_row_is_noop() {
        let mut list = make_list("ABC");
        assert_eq!(list.swipe_end('A', 0.0).unwrap(), RowPhase::Resting);
        assert!(list.is_settled());
    }

    #[test]
    fn test_swipe_requires_browse_mode() {
        let mut list = make_list("ABC");
        list.toggle_mode();
        assert!(list.swipe_move('A', -60.0, 0.0).is_err());
        assert!(list.is_settled());
    }

    #[test]
    fn test_finish_removal_requires_collapse() {
        let mut list = make_list("ABC");
        list.request_delete('A').unwrap();
        assert!(matches!(list.finish_removal('A'), Err(ListError::NotArmed(_))));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_double_toggle_leaves_no_substate() {
        let mut list = make_list("ABCD");
        list.swipe_move('A', -20.0, 0.0).unwrap();
        list.request_delete('B').unwrap();
        list.request_delete('C').unwrap();
        list.begin_removal('C').unwrap();

        assert_eq!(list.toggle_mode(), Mode::Edit);
        list.begin_drag('D').unwrap();
        list.reorder('D', 0).unwrap();
        assert_eq!(list.toggle_mode(), Mode::Browse);

        assert!(list.is_settled());
        // The collapsing row was already committed by the user
        assert_eq!(order(&list), "ABD");
        // Its late animation callback is ignored
        assert!(list.finish_removal('C').is_err());
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut list = make_list("AB");
        assert!(matches!(list.request_delete('Z'), Err(ListError::UnknownItem(_))));
        assert!(list.cancel_delete('Z').is_err());
        assert!(list.swipe_move('Z', -50.0, 0.0).is_err());
        assert!(list.is_settled());
    }

    #[test]
    fn test_replace_item_keeps_position() {
        let mut list = make_list("ABC");
        let old = list.replace_item(Row { id: 'B', label: "renamed" }).unwrap();
        assert_eq!(old.label, "row");
        assert_eq!(list.get('B').unwrap().label, "renamed");
        assert_eq!(list.position('B'), Some(1));
        assert!(list.replace_item(Row { id: 'Z', label: "ghost" }).is_err());
    }
}
