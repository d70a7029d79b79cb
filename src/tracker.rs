//! Pointer-drag tracking.
//!
//! A [`DragTracker`] turns a press, move, release gesture into incremental
//! position updates. The anchor is overwritten with the current pointer after
//! every move, so shifts compound across moves instead of being measured from
//! the press point.
//!
//! ```text
//! Idle --begin--> Engaged --end/cancel--> Idle
//!                   |  ^
//!                   +--+ move_free / move_x / move_y
//! ```
//!
//! Moves while idle are skipped, which keeps a move delivered before its press
//! from changing anything.

use eframe::egui;

/// Tracks one draggable position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTracker {
    engaged: bool,
    anchor: egui::Pos2,
    position: egui::Pos2,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(egui::Pos2::ZERO)
    }
}

impl DragTracker {
    /// Creates an idle tracker holding `position`.
    pub fn new(position: egui::Pos2) -> Self {
        Self {
            engaged: false,
            anchor: egui::Pos2::ZERO,
            position,
        }
    }

    /// Whether a press has been seen without a matching release or leave.
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// The logical position the tracker has accumulated.
    pub fn position(&self) -> egui::Pos2 {
        self.position
    }

    /// Last observed pointer position.
    pub fn anchor(&self) -> egui::Pos2 {
        self.anchor
    }

    /// Overwrites the logical position, e.g. when the owner re-derives geometry.
    pub fn set_position(&mut self, position: egui::Pos2) {
        self.position = position;
    }

    /// Starts a drag at `pointer` and returns the pre-drag position.
    pub fn begin(&mut self, pointer: egui::Pos2) -> egui::Pos2 {
        self.engaged = true;
        self.anchor = pointer;
        self.position
    }

    /// Ends a drag on release.
    ///
    /// Returns the final position only if a drag was in progress; a release
    /// without a press is a no-op.
    pub fn end(&mut self) -> Option<egui::Pos2> {
        if !self.engaged {
            return None;
        }
        self.engaged = false;
        self.anchor = egui::Pos2::ZERO;
        Some(self.position)
    }

    /// Disarms the tracker when the pointer leaves the tracking surface.
    ///
    /// Always succeeds and always reports the position, engaged or not.
    pub fn cancel(&mut self) -> egui::Pos2 {
        self.engaged = false;
        self.position
    }

    /// Moves on both axes.
    pub fn move_free(&mut self, pointer: egui::Pos2) -> Option<egui::Pos2> {
        self.step(pointer, true, true)
    }

    /// Moves on the x axis only; the pointer's y is ignored.
    pub fn move_x(&mut self, pointer: egui::Pos2) -> Option<egui::Pos2> {
        self.step(pointer, true, false)
    }

    /// Moves on the y axis only; the pointer's x is ignored.
    pub fn move_y(&mut self, pointer: egui::Pos2) -> Option<egui::Pos2> {
        self.step(pointer, false, true)
    }

    fn step(&mut self, pointer: egui::Pos2, along_x: bool, along_y: bool) -> Option<egui::Pos2> {
        if !self.engaged {
            return None;
        }

        let shift = pointer - self.anchor;
        let mut next = self.position;
        if along_x {
            next.x += shift.x;
        }
        if along_y {
            next.y += shift.y;
        }

        self.anchor = pointer;
        self.position = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn move_before_press_is_ignored() {
        let mut tracker = DragTracker::new(pos2(5.0, 7.0));
        assert_eq!(tracker.move_free(pos2(100.0, 100.0)), None);
        assert_eq!(tracker.move_x(pos2(100.0, 100.0)), None);
        assert_eq!(tracker.move_y(pos2(100.0, 100.0)), None);
        assert_eq!(tracker, DragTracker::new(pos2(5.0, 7.0)));
    }

    #[test]
    fn shifts_compound_across_moves() {
        let mut tracker = DragTracker::new(pos2(0.0, 0.0));
        tracker.begin(pos2(100.0, 100.0));
        assert_eq!(tracker.move_x(pos2(110.0, 100.0)), Some(pos2(10.0, 0.0)));
        assert_eq!(tracker.move_x(pos2(125.0, 100.0)), Some(pos2(25.0, 0.0)));
        assert_eq!(tracker.position().x, 25.0);
    }

    #[test]
    fn axis_moves_ignore_the_other_axis() {
        let mut tracker = DragTracker::new(pos2(10.0, 20.0));
        tracker.begin(pos2(0.0, 0.0));
        assert_eq!(tracker.move_y(pos2(50.0, 5.0)), Some(pos2(10.0, 25.0)));
        assert_eq!(tracker.move_x(pos2(53.0, 90.0)), Some(pos2(13.0, 25.0)));
        assert_eq!(tracker.move_free(pos2(54.0, 91.0)), Some(pos2(14.0, 26.0)));
    }

    #[test]
    fn begin_reports_pre_drag_position() {
        let mut tracker = DragTracker::new(pos2(3.0, 4.0));
        assert_eq!(tracker.begin(pos2(9.0, 9.0)), pos2(3.0, 4.0));
        assert!(tracker.is_engaged());
        assert_eq!(tracker.anchor(), pos2(9.0, 9.0));
    }

    #[test]
    fn release_without_press_is_a_no_op() {
        let mut tracker = DragTracker::new(pos2(1.0, 1.0));
        assert_eq!(tracker.end(), None);

        tracker.begin(pos2(0.0, 0.0));
        tracker.move_free(pos2(2.0, 2.0));
        assert_eq!(tracker.end(), Some(pos2(3.0, 3.0)));
        assert!(!tracker.is_engaged());
        assert_eq!(tracker.move_free(pos2(50.0, 50.0)), None);
    }

    #[test]
    fn leave_is_idempotent_and_always_disarms() {
        let mut tracker = DragTracker::new(pos2(8.0, 8.0));
        let before = tracker;
        assert_eq!(tracker.cancel(), pos2(8.0, 8.0));
        assert_eq!(tracker.cancel(), pos2(8.0, 8.0));
        assert_eq!(tracker, before);

        tracker.begin(pos2(0.0, 0.0));
        tracker.move_free(pos2(1.0, 0.0));
        assert_eq!(tracker.cancel(), pos2(9.0, 8.0));
        assert!(!tracker.is_engaged());
    }
}
