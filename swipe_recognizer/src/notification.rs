// Copyright 2026 the Swipe Recognizer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notification types: input samples, lifecycle kinds, and the uniform payload.
//!
//! The recognizer consumes [`Sample`]s and produces [`SwipeNotification`]s. Every
//! notification carries the same payload shape — the origin that received the
//! initiating sample, the sample captured at gesture-begin, the sample that
//! triggered this notification, and the offset between the two — so listeners can
//! treat any kind uniformly when updating on-screen positions.
//!
//! [`SwipeKind`] doubles as the aliasing surface for a generic dispatch layer:
//! all sub-kinds map onto the base [`SwipeKind::Swipe`] channel via
//! [`SwipeKind::base`], and [`SwipeKind::name`] gives each kind a stable
//! event-name string.

use kurbo::{Point, Vec2};

/// An immutable snapshot of a single input point at one instant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    /// Pointer position in the host's coordinate space.
    pub pos: Point,
    /// Millisecond timestamp from the host's clock (monotonic or wall).
    pub time_ms: u64,
}

impl Sample {
    /// Create a sample from raw coordinates and a millisecond timestamp.
    pub fn new(x: f64, y: f64, time_ms: u64) -> Self {
        Self {
            pos: Point::new(x, y),
            time_ms,
        }
    }

    /// `true` when the sample carries a usable position.
    ///
    /// Input layers occasionally deliver samples with no resolvable position
    /// (NaN/infinite coordinates). The recognizer treats such samples as a stall
    /// rather than a fault: state simply does not advance until a resolvable
    /// sample arrives.
    pub fn is_resolvable(&self) -> bool {
        self.pos.is_finite()
    }
}

/// The kind of a swipe lifecycle notification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeKind {
    /// The attempt completed as a qualifying swipe. Base channel for aliasing.
    Swipe,
    /// Completion direction: the pointer ended left of where it began.
    Left,
    /// Completion direction: the pointer ended at or right of where it began.
    Right,
    /// The start threshold was crossed; a swipe is now in progress.
    Start,
    /// Movement while a swipe is in progress.
    Move,
    /// The attempt was disqualified: it left the allowed zone or took too long.
    Cancel,
}

impl SwipeKind {
    /// Static mapping table for dispatch layers, in registration order.
    ///
    /// Pairs each kind with its [`base`](Self::base) channel so a dispatch layer
    /// can route subscriptions for any sub-kind onto the base `Swipe` channel.
    pub const ALIASES: [(Self, Self); 6] = [
        (Self::Swipe, Self::Swipe),
        (Self::Left, Self::Swipe),
        (Self::Right, Self::Swipe),
        (Self::Start, Self::Swipe),
        (Self::Move, Self::Swipe),
        (Self::Cancel, Self::Swipe),
    ];

    /// The base channel this kind aliases to.
    ///
    /// Every kind maps to [`SwipeKind::Swipe`]: a listener subscribed generically
    /// to the base channel receives all sub-kinds without wiring each one.
    pub const fn base(self) -> Self {
        Self::Swipe
    }

    /// Stable event-name string for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Swipe => "swipe",
            Self::Left => "swipeleft",
            Self::Right => "swiperight",
            Self::Start => "swipestart",
            Self::Move => "swipemove",
            Self::Cancel => "swipecancel",
        }
    }
}

/// One swipe lifecycle notification.
///
/// `offset` is always `stop.pos - start.pos`, computed fresh when the
/// notification is built, never cached across notifications.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeNotification<T> {
    /// Which lifecycle event this is.
    pub kind: SwipeKind,
    /// The attachment that received the initiating sample.
    pub origin: T,
    /// The sample captured at gesture-begin.
    pub start: Sample,
    /// The sample that triggered this notification.
    pub stop: Sample,
    /// Component-wise displacement from `start` to `stop`.
    pub offset: Vec2,
}

impl<T> SwipeNotification<T> {
    pub(crate) fn new(kind: SwipeKind, origin: T, start: Sample, stop: Sample) -> Self {
        Self {
            kind,
            origin,
            start,
            stop,
            offset: stop.pos - start.pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_stop_minus_start() {
        let n = SwipeNotification::new(
            SwipeKind::Move,
            1_u32,
            Sample::new(10.0, 20.0, 0),
            Sample::new(40.0, 15.0, 100),
        );
        assert_eq!(n.offset, Vec2::new(30.0, -5.0));
        assert_eq!(n.start.pos, Point::new(10.0, 20.0));
        assert_eq!(n.stop.pos, Point::new(40.0, 15.0));
    }

    #[test]
    fn every_kind_aliases_to_the_base_channel() {
        for (kind, base) in SwipeKind::ALIASES {
            assert_eq!(kind.base(), SwipeKind::Swipe);
            assert_eq!(base, SwipeKind::Swipe);
        }
    }

    #[test]
    fn event_names_are_stable() {
        assert_eq!(SwipeKind::Swipe.name(), "swipe");
        assert_eq!(SwipeKind::Left.name(), "swipeleft");
        assert_eq!(SwipeKind::Right.name(), "swiperight");
        assert_eq!(SwipeKind::Start.name(), "swipestart");
        assert_eq!(SwipeKind::Move.name(), "swipemove");
        assert_eq!(SwipeKind::Cancel.name(), "swipecancel");
    }

    #[test]
    fn nan_position_is_not_resolvable() {
        assert!(Sample::new(1.0, 2.0, 0).is_resolvable());
        assert!(!Sample::new(f64::NAN, 2.0, 0).is_resolvable());
        assert!(!Sample::new(1.0, f64::INFINITY, 0).is_resolvable());
    }
}
