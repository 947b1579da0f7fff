// Copyright 2026 the Swipe Recognizer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=swipe_recognizer --heading-base-level=0

//! Swipe Recognizer: a state machine for single-finger horizontal swipe gestures.
//!
//! This crate decides, from a live stream of pointer position samples, whether a
//! gesture is a qualifying horizontal swipe, and produces the lifecycle
//! notifications an application needs for live visual feedback — start, move,
//! cancel, and completion with direction — each carrying the positional offset
//! from where the gesture began (useful for dragging a panel under the finger).
//!
//! ## Overview
//!
//! The recognizer is driven entirely by three kinds of input events: a
//! gesture-begin, zero or more gesture-samples, and a gesture-end. It performs no
//! hit testing, owns no clock, and delivers nothing itself. Instead, feed it
//! [`Sample`](notification::Sample) values from your input layer and route the
//! returned [`SwipeNotification`](notification::SwipeNotification)s through
//! whatever event dispatch you already own.
//!
//! Per attempt, the state machine is:
//!
//! - **idle → candidate** on gesture-begin (no notification).
//! - **candidate → started** once horizontal displacement exceeds the horizontal
//!   threshold while vertical displacement is still under the vertical bound;
//!   emits [`SwipeKind::Start`](notification::SwipeKind::Start) exactly once.
//! - **started** emits [`SwipeKind::Move`](notification::SwipeKind::Move) on every
//!   further sample.
//! - A sample arriving later than the duration threshold cancels the attempt
//!   ([`SwipeKind::Cancel`](notification::SwipeKind::Cancel)).
//! - On gesture-end, a started attempt whose final displacement still qualifies
//!   completes with [`SwipeKind::Swipe`](notification::SwipeKind::Swipe) followed
//!   by exactly one of [`SwipeKind::Left`](notification::SwipeKind::Left) /
//!   [`SwipeKind::Right`](notification::SwipeKind::Right); otherwise it cancels.
//!   An attempt that never started ends in silence.
//!
//! Each sample also reports whether the host should suppress its default handling
//! (page scrolling, typically), based solely on horizontal displacement.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use swipe_recognizer::notification::{Sample, SwipeKind};
//! use swipe_recognizer::recognizer::{SwipeConfig, SwipeRecognizer};
//!
//! let mut swipe: SwipeRecognizer<u32> = SwipeRecognizer::new(SwipeConfig::default());
//!
//! // Finger down on element 7 at the origin.
//! swipe.begin(7, Sample::new(0.0, 0.0, 0));
//!
//! // Move far enough right: the swipe starts, and scrolling should be suppressed.
//! let out = swipe.sample(Sample::new(30.0, 0.0, 100));
//! assert!(out.suppress_default);
//! assert_eq!(out.notifications[0].kind, SwipeKind::Start);
//! assert_eq!(out.notifications[0].offset, Vec2::new(30.0, 0.0));
//!
//! // Finger up: the attempt completes as a rightward swipe.
//! let done = swipe.end(Sample::new(60.0, 0.0, 200));
//! assert_eq!(done[0].kind, SwipeKind::Swipe);
//! assert_eq!(done[1].kind, SwipeKind::Right);
//! ```
//!
//! ## Design Philosophy
//!
//! - **Values, not callbacks**: every transition is a method returning the
//!   notifications it produced, so the machine is unit-testable without
//!   simulating a real input source.
//! - **No error channel**: disqualification is an ordinary outcome — silence or a
//!   `Cancel` notification — never a fault. Unresolvable or out-of-order samples
//!   stall the attempt instead of advancing it.
//! - **Single-threaded**: one recognizer is owned by one attachment and mutated
//!   only from its (serialized) input callbacks. No locks, no interior
//!   mutability.
//! - **Generic origin**: notifications carry an application-specific origin type,
//!   so the crate assumes nothing about your node or widget identifiers.
//!
//! ## Multi-attachment hosts
//!
//! Hosts listening on many targets can use
//! [`SwipeRegistry`](registry::SwipeRegistry) (feature `registry`, on by
//! default), which keys independent recognizers by attachment and releases each
//! entry on every terminal path.
//!
//! ## Dispatch integration
//!
//! [`SwipeKind`](notification::SwipeKind) carries the static aliasing surface a
//! generic publish/subscribe layer needs: every sub-kind maps to the base
//! [`SwipeKind::Swipe`](notification::SwipeKind::Swipe) channel via
//! [`base`](notification::SwipeKind::base), and
//! [`name`](notification::SwipeKind::name) provides stable event-name strings.
//! A listener subscribed to the base channel can therefore receive all sub-kinds
//! without wiring each one separately.
//!
//! ## Features
//!
//! - `std` (default): compile with the standard library.
//! - `libm`: `no_std` numeric support for kurbo.
//! - `registry` (default): enable the per-attachment recognizer map (requires
//!   `hashbrown`).
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod notification;
pub mod recognizer;

#[cfg(feature = "registry")]
pub mod registry;
