//! Single-shot, cancellable idle timer.
//!
//! Arming spawns a sleep that, unless cancelled, posts
//! `SessionEvent::IdleElapsed { generation }` to the session queue. Every
//! arm or cancel bumps the generation, so a fire that was already queued
//! when the timer was reset is recognised as stale and dropped.

use std::time::Duration;

use rsvp_core::idle::TimerDirective;
use tokio::sync::mpsc::WeakSender;
use tokio_util::sync::CancellationToken;

use super::SessionEvent;

pub struct IdleTimer {
    events: WeakSender<SessionEvent>,
    generation: u64,
    pending: Option<CancellationToken>,
}

impl IdleTimer {
    /// The timer only holds a weak sender, so it never keeps a finished
    /// session's queue open.
    pub fn new(events: WeakSender<SessionEvent>) -> Self {
        Self {
            events,
            generation: 0,
            pending: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a fire from `generation` is still the one being waited for.
    pub fn is_current(&self, generation: u64) -> bool {
        self.pending.is_some() && generation == self.generation
    }

    /// Marks the current fire as delivered.
    pub fn mark_fired(&mut self) {
        self.pending = None;
    }

    pub fn apply(&mut self, directive: TimerDirective) {
        match directive {
            TimerDirective::Arm(after) => self.arm(after),
            TimerDirective::Cancel => self.cancel(),
            TimerDirective::Keep => {}
        }
    }

    pub fn arm(&mut self, after: Duration) {
        self.cancel();

        let token = CancellationToken::new();
        let generation = self.generation;
        let events = self.events.clone();
        let child = token.clone();

        tokio::spawn(async move {
            tokio::select! {
                _ = child.cancelled() => {}
                _ = tokio::time::sleep(after) => {
                    if let Some(events) = events.upgrade() {
                        let _ = events.send(SessionEvent::IdleElapsed { generation }).await;
                    }
                }
            }
        });

        tracing::trace!(generation, after_secs = after.as_secs(), "idle timer armed");
        self.pending = Some(token);
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
        self.generation += 1;
    }
}

impl Drop for IdleTimer {
    fn drop(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_interval() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = IdleTimer::new(tx.downgrade());

        let start = tokio::time::Instant::now();
        timer.arm(Duration::from_secs(120));
        let generation = timer.generation();

        match rx.recv().await {
            Some(SessionEvent::IdleElapsed { generation: fired }) => {
                assert_eq!(fired, generation);
                assert!(timer.is_current(fired));
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(start.elapsed() >= Duration::from_secs(120));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearm_makes_old_generation_stale() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = IdleTimer::new(tx.downgrade());

        timer.arm(Duration::from_secs(10));
        let first = timer.generation();
        timer.arm(Duration::from_secs(20));
        assert!(!timer.is_current(first));

        let start = tokio::time::Instant::now();
        match rx.recv().await {
            Some(SessionEvent::IdleElapsed { generation }) => {
                assert_eq!(generation, timer.generation());
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(start.elapsed() >= Duration::from_secs(20));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_fire() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = IdleTimer::new(tx.downgrade());

        timer.arm(Duration::from_secs(5));
        timer.apply(TimerDirective::Cancel);
        assert!(!timer.is_armed());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_keep_leaves_timer_alone() {
        let (tx, _rx) = mpsc::channel(4);
        let mut timer = IdleTimer::new(tx.downgrade());

        timer.arm(Duration::from_secs(5));
        let generation = timer.generation();
        timer.apply(TimerDirective::Keep);
        assert!(timer.is_current(generation));
    }
}
