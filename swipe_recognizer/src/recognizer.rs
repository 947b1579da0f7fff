// Copyright 2026 the Swipe Recognizer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe recognizer: the per-attachment state machine.
//!
//! ## Usage
//!
//! 1) On pointer/touch down, call [`SwipeRecognizer::begin`] with the initiating
//!    sample and the origin the notification payloads should carry.
//! 2) On each move event, call [`SwipeRecognizer::sample`]; deliver the returned
//!    notifications and honor [`SampleOutcome::suppress_default`].
//! 3) On release, call [`SwipeRecognizer::end`] with the final sample and deliver
//!    the returned notifications.
//!
//! The recognizer owns no clock and schedules nothing: elapsed time is read off
//! sample timestamps, so the duration threshold is only checked when a sample
//! arrives. An attempt that idles past the threshold without moving is not
//! cancelled until release.
//!
//! ## Minimal example
//!
//! ```
//! use swipe_recognizer::notification::{Sample, SwipeKind};
//! use swipe_recognizer::recognizer::{SwipeConfig, SwipeRecognizer};
//!
//! let mut swipe: SwipeRecognizer<&str> = SwipeRecognizer::new(SwipeConfig::default());
//!
//! swipe.begin("panel", Sample::new(100.0, 50.0, 0));
//! assert!(swipe.is_active());
//!
//! // Leftward movement past the horizontal threshold starts the swipe.
//! let out = swipe.sample(Sample::new(60.0, 55.0, 80));
//! assert_eq!(out.notifications[0].kind, SwipeKind::Start);
//!
//! // Release further left: completed leftward swipe.
//! let done = swipe.end(Sample::new(40.0, 55.0, 160));
//! assert_eq!(done[0].kind, SwipeKind::Swipe);
//! assert_eq!(done[1].kind, SwipeKind::Left);
//! assert!(!swipe.is_active());
//! ```

use smallvec::SmallVec;

use crate::notification::{Sample, SwipeKind, SwipeNotification};

/// Notifications produced by one transition, in emission order.
///
/// A single input event produces at most two (`Start` then `Cancel` on a late
/// qualifying sample, or `Swipe` then a direction at completion), so the buffer
/// stays inline.
pub type Notifications<T> = SmallVec<[SwipeNotification<T>; 2]>;

/// Thresholds governing swipe qualification.
///
/// Immutable once constructed; share one instance read-only across attachments
/// or give each attachment its own. Distances are in raw input units (the same
/// units as sample positions), not density-independent pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// More horizontal displacement than this, and the host should suppress its
    /// default handling (e.g. page scrolling) for the sample.
    pub scroll_suppression_threshold: f64,
    /// More time than this between gesture-begin and a sample, and the attempt
    /// is cancelled.
    pub duration_threshold_ms: u64,
    /// Horizontal displacement must exceed this to qualify as swipe motion.
    pub horizontal_distance_threshold: f64,
    /// Vertical displacement must stay under this to qualify as swipe motion.
    pub vertical_distance_threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            scroll_suppression_threshold: 25.0,
            duration_threshold_ms: 1500,
            horizontal_distance_threshold: 25.0,
            vertical_distance_threshold: 75.0,
        }
    }
}

impl SwipeConfig {
    /// `true` when the displacement between `start` and `stop` qualifies as
    /// swipe motion. Both comparisons are strict: boundary-exact displacement
    /// does not qualify.
    fn qualifies(&self, start: Sample, stop: Sample) -> bool {
        let d = stop.pos - start.pos;
        d.x.abs() > self.horizontal_distance_threshold
            && d.y.abs() < self.vertical_distance_threshold
    }
}

/// The live state of one in-progress gesture attempt.
#[derive(Clone, Debug)]
struct GestureState<T> {
    origin: T,
    start: Sample,
    /// Most recent sample seen; `None` before the first move.
    latest: Option<Sample>,
    /// Whether `Start` has fired for this attempt. Transitions false→true at
    /// most once per attempt, never back.
    started: bool,
}

/// What one gesture-sample event produced.
#[derive(Clone, Debug)]
pub struct SampleOutcome<T> {
    /// `true` when the host should suppress its default handling for this
    /// sample. Driven by horizontal displacement alone, independent of whether
    /// the attempt qualifies as a swipe.
    pub suppress_default: bool,
    /// Zero or more lifecycle notifications, in emission order.
    pub notifications: Notifications<T>,
}

impl<T> Default for SampleOutcome<T> {
    fn default() -> Self {
        Self {
            suppress_default: false,
            notifications: Notifications::new(),
        }
    }
}

/// Recognizes single-finger horizontal swipes on one attachment.
///
/// At most one attempt is live at a time; a new [`begin`](Self::begin) discards
/// any stale prior attempt. Disqualification is never a fault: it surfaces as a
/// [`SwipeKind::Cancel`] notification or as silence.
#[derive(Clone, Debug)]
pub struct SwipeRecognizer<T> {
    config: SwipeConfig,
    attempt: Option<GestureState<T>>,
}

impl<T: Clone> SwipeRecognizer<T> {
    /// Create a recognizer with the given thresholds.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            attempt: None,
        }
    }

    /// The thresholds this recognizer applies.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// `true` while an attempt is live on this attachment.
    pub fn is_active(&self) -> bool {
        self.attempt.is_some()
    }

    /// `true` once the live attempt has crossed the start threshold.
    pub fn is_started(&self) -> bool {
        self.attempt.as_ref().is_some_and(|a| a.started)
    }

    /// Begin a new attempt from the initiating sample.
    ///
    /// Any stale prior attempt is discarded without notifications. A sample
    /// with no resolvable position stalls instead: it opens no attempt, and a
    /// live attempt is left untouched.
    pub fn begin(&mut self, origin: T, sample: Sample) {
        if !sample.is_resolvable() {
            return;
        }
        self.attempt = Some(GestureState {
            origin,
            start: sample,
            latest: None,
            started: false,
        });
    }

    /// Process one gesture-sample event.
    ///
    /// Emits `Start` the first time the displacement qualifies, `Move` on every
    /// subsequent sample while started, and `Cancel` (ending the attempt) when
    /// the sample arrives later than the duration threshold. Unresolvable
    /// samples, and
    /// samples timestamped before the attempt began, stall the attempt: nothing
    /// advances and nothing is emitted.
    pub fn sample(&mut self, sample: Sample) -> SampleOutcome<T> {
        let mut out = SampleOutcome::default();
        let Some(mut attempt) = self.attempt.take() else {
            return out;
        };
        if !sample.is_resolvable() || sample.time_ms < attempt.start.time_ms {
            self.attempt = Some(attempt);
            return out;
        }
        attempt.latest = Some(sample);

        // `Move` is only emitted for samples processed while already started;
        // the sample that crosses the start threshold emits `Start` alone.
        let was_started = attempt.started;
        if !attempt.started && self.config.qualifies(attempt.start, sample) {
            attempt.started = true;
            out.notifications.push(SwipeNotification::new(
                SwipeKind::Start,
                attempt.origin.clone(),
                attempt.start,
                sample,
            ));
        }

        // Too slow to be a swipe: cancel now and stop tracking this attempt.
        // A sample can cross the start threshold and time out at once, in which
        // case `Start` is immediately followed by `Cancel`.
        if sample.time_ms - attempt.start.time_ms > self.config.duration_threshold_ms {
            out.notifications.push(SwipeNotification::new(
                SwipeKind::Cancel,
                attempt.origin.clone(),
                attempt.start,
                sample,
            ));
            return out;
        }

        if was_started {
            out.notifications.push(SwipeNotification::new(
                SwipeKind::Move,
                attempt.origin.clone(),
                attempt.start,
                sample,
            ));
        }

        // Scroll suppression considers horizontal displacement alone, whether or
        // not the attempt ever qualifies as a swipe.
        out.suppress_default = (sample.pos.x - attempt.start.pos.x).abs()
            > self.config.scroll_suppression_threshold;
        self.attempt = Some(attempt);
        out
    }

    /// Process the gesture-end event and reach a terminal outcome.
    ///
    /// A started attempt whose final displacement qualifies completes with
    /// `Swipe` followed by `Left` or `Right`; one that does not qualify is
    /// cancelled. An attempt that never crossed the start threshold ends in
    /// silence. Calling this with no live attempt is a no-op, so replaying an
    /// end event cannot duplicate notifications.
    pub fn end(&mut self, sample: Sample) -> Notifications<T> {
        let mut out = Notifications::new();
        let Some(attempt) = self.attempt.take() else {
            return out;
        };
        if !attempt.started {
            return out;
        }
        // Fall back to the last move sample if the release position is
        // unresolvable; `started` guarantees at least one move was seen.
        let stop = if sample.is_resolvable() {
            sample
        } else {
            match attempt.latest {
                Some(latest) => latest,
                None => return out,
            }
        };

        if self.config.qualifies(attempt.start, stop) {
            let direction = if stop.pos.x < attempt.start.pos.x {
                SwipeKind::Left
            } else {
                SwipeKind::Right
            };
            out.push(SwipeNotification::new(
                SwipeKind::Swipe,
                attempt.origin.clone(),
                attempt.start,
                stop,
            ));
            out.push(SwipeNotification::new(
                direction,
                attempt.origin,
                attempt.start,
                stop,
            ));
        } else {
            out.push(SwipeNotification::new(
                SwipeKind::Cancel,
                attempt.origin,
                attempt.start,
                stop,
            ));
        }
        out
    }
}
