// Copyright 2026 the Swipe Recognizer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-attachment recognizer map for hosts that listen on many targets.
//!
//! Each attachment owns at most one live attempt; attempts on different
//! attachments are fully independent. The registry creates a recognizer entry
//! when a gesture begins on an attachment and releases it on every terminal
//! path — completion, cancellation (including duration cancellation mid-sample),
//! and silent abandonment — so no entry outlives its attempt.
//!
//! ## Minimal example
//!
//! ```
//! use swipe_recognizer::notification::{Sample, SwipeKind};
//! use swipe_recognizer::recognizer::SwipeConfig;
//! use swipe_recognizer::registry::SwipeRegistry;
//!
//! let mut swipes: SwipeRegistry<u32> = SwipeRegistry::new(SwipeConfig::default());
//!
//! // Independent attempts on two attachments.
//! swipes.begin(1, Sample::new(0.0, 0.0, 0));
//! swipes.begin(2, Sample::new(0.0, 0.0, 10));
//! assert_eq!(swipes.active_count(), 2);
//!
//! let out = swipes.sample(1, Sample::new(30.0, 0.0, 100));
//! assert_eq!(out.notifications[0].kind, SwipeKind::Start);
//! assert_eq!(out.notifications[0].origin, 1);
//!
//! // Ending attachment 1 releases its entry; attachment 2 is untouched.
//! let done = swipes.end(1, Sample::new(60.0, 0.0, 200));
//! assert_eq!(done[1].kind, SwipeKind::Right);
//! assert_eq!(swipes.active_count(), 1);
//! ```

use core::hash::Hash;

use hashbrown::HashMap;

use crate::notification::Sample;
use crate::recognizer::{Notifications, SampleOutcome, SwipeConfig, SwipeRecognizer};

/// Routes gesture events to one [`SwipeRecognizer`] per attachment.
///
/// The attachment key doubles as the `origin` carried by notification payloads.
/// One configuration is shared read-only across all attachments.
#[derive(Clone, Debug)]
pub struct SwipeRegistry<K> {
    config: SwipeConfig,
    attempts: HashMap<K, SwipeRecognizer<K>>,
}

impl<K: Copy + Eq + Hash> SwipeRegistry<K> {
    /// Create a registry whose attachments all share the given thresholds.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            attempts: HashMap::new(),
        }
    }

    /// The thresholds shared by every attachment.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Number of attachments with a live attempt.
    pub fn active_count(&self) -> usize {
        self.attempts.len()
    }

    /// `true` while the given attachment has a live attempt.
    pub fn is_active(&self, attachment: K) -> bool {
        self.attempts.contains_key(&attachment)
    }

    /// Begin an attempt on `attachment`, discarding any stale prior attempt.
    pub fn begin(&mut self, attachment: K, sample: Sample) {
        let config = self.config;
        let recognizer = self
            .attempts
            .entry(attachment)
            .or_insert_with(|| SwipeRecognizer::new(config));
        recognizer.begin(attachment, sample);
        if !recognizer.is_active() {
            self.attempts.remove(&attachment);
        }
    }

    /// Process a gesture-sample event on `attachment`.
    ///
    /// If the sample cancels the attempt (duration threshold), the attachment's
    /// entry is released before returning. Samples for attachments with no live
    /// attempt are inert.
    pub fn sample(&mut self, attachment: K, sample: Sample) -> SampleOutcome<K> {
        let Some(recognizer) = self.attempts.get_mut(&attachment) else {
            return SampleOutcome::default();
        };
        let out = recognizer.sample(sample);
        if !recognizer.is_active() {
            self.attempts.remove(&attachment);
        }
        out
    }

    /// Process the gesture-end event on `attachment` and release its entry.
    pub fn end(&mut self, attachment: K, sample: Sample) -> Notifications<K> {
        match self.attempts.remove(&attachment) {
            Some(mut recognizer) => recognizer.end(sample),
            None => Notifications::new(),
        }
    }
}
