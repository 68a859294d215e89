// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The intro sequencer: deadlines, polling, and disposal.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};

use crate::stage::{IntroStage, LabelInk};

/// Stage transitions, as offsets from the mount timestamp.
const STAGE_SCHEDULE: [(u64, IntroStage); 3] = [
    (400, IntroStage::Expand),
    (2400, IntroStage::Break),
    (3400, IntroStage::Done),
];

/// Offset at which main content becomes visible.
///
/// Deliberately independent of the stage schedule: content fades in under
/// the curtain roughly 2.3 s before the curtain finishes.
const CONTENT_VISIBLE_AT_MS: u64 = 1100;

/// Offset of the loading label from the pointer position.
const LABEL_OFFSET: Vec2 = Vec2::new(40.0, -20.0);

/// Something the sequencer did during a poll.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntroEvent {
    /// The stage advanced to the given value.
    StageChanged(IntroStage),
    /// Main content became visible. Fires once, never reverts.
    ContentVisible,
}

/// The per-page curtain-reveal state machine.
///
/// Created at mount via [`start`](Self::start), which captures the mount
/// timestamp all deadlines are measured from. The host then feeds its clock
/// into [`poll`](Self::poll) and applies the returned events. One
/// [`dispose`](Self::dispose) call cancels everything that has not fired.
///
/// See the crate docs for the full schedule and an example.
#[derive(Clone, Debug)]
pub struct IntroSequencer {
    started_at: u64,
    stage: IntroStage,
    /// Index of the next unfired entry in [`STAGE_SCHEDULE`].
    next_stage: usize,
    content_visible: bool,
    content_pending: bool,
    disposed: bool,
}

impl IntroSequencer {
    /// Starts the sequence at the given mount timestamp (host milliseconds).
    #[must_use]
    pub fn start(now_ms: u64) -> Self {
        Self {
            started_at: now_ms,
            stage: IntroStage::Strip,
            next_stage: 0,
            content_visible: false,
            content_pending: true,
            disposed: false,
        }
    }

    /// Fires every deadline that has come due, in deadline order.
    ///
    /// Stage transitions are strictly ordered and never skip: a late poll
    /// (say, after a long frame hitch) emits all missed transitions in one
    /// batch, interleaved correctly with the content-visible deadline.
    /// Returns nothing once disposed or finished.
    pub fn poll(&mut self, now_ms: u64) -> Vec<IntroEvent> {
        let mut events = Vec::new();
        if self.disposed {
            return events;
        }
        loop {
            let stage_due = self
                .next_stage_deadline()
                .filter(|&at| at <= now_ms);
            let content_due = self
                .content_deadline()
                .filter(|&at| at <= now_ms);

            match (stage_due, content_due) {
                (Some(stage_at), Some(content_at)) if content_at < stage_at => {
                    events.push(self.fire_content());
                }
                (Some(_), _) => {
                    events.push(self.fire_stage());
                }
                (None, Some(_)) => {
                    events.push(self.fire_content());
                }
                (None, None) => break,
            }
        }
        events
    }

    /// Current stage.
    #[must_use]
    pub fn stage(&self) -> IntroStage {
        self.stage
    }

    /// Returns `true` once the stage has reached [`IntroStage::Done`].
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.stage.is_done()
    }

    /// Whether main content is visible yet.
    #[must_use]
    pub fn content_visible(&self) -> bool {
        self.content_visible
    }

    /// The mount timestamp this sequence is measured from.
    #[must_use]
    pub fn started_at(&self) -> u64 {
        self.started_at
    }

    /// Whether the host should keep forwarding pointer-move events.
    ///
    /// True from mount until the transition into `Done` or until disposal,
    /// exactly the window in which the loading label is on screen.
    #[must_use]
    pub fn wants_pointer_events(&self) -> bool {
        !self.disposed && !self.stage.is_done()
    }

    /// Whether the loading label should currently be drawn.
    #[must_use]
    pub fn label_visible(&self) -> bool {
        self.wants_pointer_events()
    }

    /// Where to anchor the loading label for the given pointer position.
    #[must_use]
    pub fn label_anchor(&self, pointer: Point) -> Point {
        pointer + LABEL_OFFSET
    }

    /// Ink for the loading label at the current stage.
    #[must_use]
    pub fn label_ink(&self) -> LabelInk {
        self.stage.label_ink()
    }

    /// Cancels every pending deadline.
    ///
    /// After disposal [`poll`](Self::poll) returns nothing, forever; the
    /// stage and content flag freeze at their current values. Idempotent.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.next_stage = STAGE_SCHEDULE.len();
        self.content_pending = false;
    }

    /// Returns `true` once [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn next_stage_deadline(&self) -> Option<u64> {
        STAGE_SCHEDULE
            .get(self.next_stage)
            .map(|(offset, _)| self.started_at + offset)
    }

    fn content_deadline(&self) -> Option<u64> {
        self.content_pending
            .then(|| self.started_at + CONTENT_VISIBLE_AT_MS)
    }

    fn fire_stage(&mut self) -> IntroEvent {
        let (_, stage) = STAGE_SCHEDULE[self.next_stage];
        self.next_stage += 1;
        self.stage = stage;
        IntroEvent::StageChanged(stage)
    }

    fn fire_content(&mut self) -> IntroEvent {
        self.content_pending = false;
        self.content_visible = true;
        IntroEvent::ContentVisible
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn stages_fired(events: &[IntroEvent]) -> Vec<IntroStage> {
        events
            .iter()
            .filter_map(|event| match event {
                IntroEvent::StageChanged(stage) => Some(*stage),
                IntroEvent::ContentVisible => None,
            })
            .collect()
    }

    #[test]
    fn starts_in_strip_with_content_hidden() {
        let intro = IntroSequencer::start(1_000);
        assert_eq!(intro.stage(), IntroStage::Strip);
        assert!(!intro.content_visible());
        assert!(!intro.is_done());
        assert_eq!(intro.started_at(), 1_000);
    }

    #[test]
    fn schedule_fires_at_400_2400_3400() {
        let mut intro = IntroSequencer::start(0);

        assert!(intro.poll(399).is_empty());
        assert_eq!(
            intro.poll(400),
            [IntroEvent::StageChanged(IntroStage::Expand)]
        );
        assert!(intro.poll(2399).is_empty());
        assert_eq!(
            intro.poll(2400),
            [IntroEvent::StageChanged(IntroStage::Break)]
        );
        assert_eq!(
            intro.poll(3400),
            [IntroEvent::StageChanged(IntroStage::Done)]
        );
        assert!(intro.is_done());
    }

    #[test]
    fn stages_visit_every_value_in_order_without_repeats() {
        let mut intro = IntroSequencer::start(0);
        let mut seen = Vec::new();
        for now in (0..4_000).step_by(16) {
            seen.extend(stages_fired(&intro.poll(now)));
        }
        assert_eq!(
            seen,
            [IntroStage::Expand, IntroStage::Break, IntroStage::Done]
        );
    }

    #[test]
    fn late_poll_emits_missed_transitions_in_deadline_order() {
        let mut intro = IntroSequencer::start(100);
        let events = intro.poll(100 + 5_000);
        assert_eq!(
            events,
            [
                IntroEvent::StageChanged(IntroStage::Expand),
                IntroEvent::ContentVisible,
                IntroEvent::StageChanged(IntroStage::Break),
                IntroEvent::StageChanged(IntroStage::Done),
            ]
        );
    }

    #[test]
    fn content_visible_fires_at_1100_and_never_reverts() {
        let mut intro = IntroSequencer::start(0);
        intro.poll(1_099);
        assert!(!intro.content_visible());
        assert_eq!(intro.poll(1_100), [IntroEvent::ContentVisible]);
        assert!(intro.content_visible());

        // Still visible at every later stage, including Done.
        intro.poll(10_000);
        assert!(intro.content_visible());
        assert!(intro.is_done());
    }

    #[test]
    fn content_overlaps_the_running_curtain() {
        let mut intro = IntroSequencer::start(0);
        intro.poll(1_200);
        // Content is visible while the curtain is still mid-sequence.
        assert!(intro.content_visible());
        assert_eq!(intro.stage(), IntroStage::Expand);
    }

    #[test]
    fn polling_the_same_instant_twice_fires_nothing_new() {
        let mut intro = IntroSequencer::start(0);
        assert_eq!(intro.poll(400).len(), 1);
        assert!(intro.poll(400).is_empty());
    }

    #[test]
    fn pointer_interest_ends_exactly_at_done() {
        let mut intro = IntroSequencer::start(0);
        assert!(intro.wants_pointer_events());
        intro.poll(2_500);
        assert!(intro.wants_pointer_events());
        intro.poll(3_400);
        assert!(!intro.wants_pointer_events());
        assert!(!intro.label_visible());
    }

    #[test]
    fn label_anchor_offsets_the_pointer() {
        let intro = IntroSequencer::start(0);
        let anchor = intro.label_anchor(Point::new(100.0, 200.0));
        assert_eq!(anchor, Point::new(140.0, 180.0));
    }

    #[test]
    fn label_ink_follows_the_stage() {
        let mut intro = IntroSequencer::start(0);
        assert_eq!(intro.label_ink(), LabelInk::Ink);
        intro.poll(400);
        assert_eq!(intro.label_ink(), LabelInk::Paper);
    }

    #[test]
    fn dispose_cancels_all_pending_deadlines() {
        let mut intro = IntroSequencer::start(0);
        intro.poll(400);
        intro.dispose();

        // A full timer window later, nothing fires.
        assert!(intro.poll(100_000).is_empty());
        assert_eq!(intro.stage(), IntroStage::Expand);
        assert!(!intro.content_visible());
        assert!(!intro.wants_pointer_events());
    }

    #[test]
    fn dispose_is_idempotent() {
        let mut intro = IntroSequencer::start(0);
        intro.dispose();
        intro.dispose();
        assert!(intro.is_disposed());
        assert!(intro.poll(100_000).is_empty());
    }

    #[test]
    fn staying_mounted_after_done_is_inert() {
        let mut intro = IntroSequencer::start(0);
        intro.poll(3_400);
        assert!(intro.is_done());
        assert!(intro.poll(1_000_000).is_empty());
        assert_eq!(intro.stage(), IntroStage::Done);
    }
}
