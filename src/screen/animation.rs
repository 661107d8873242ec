//! Open/close transition for a row's detail area.
//!
//! The value lives in `[0, 1]` and is advanced by an external tick over a
//! fixed duration. It is independent from the committed expanded flag; the
//! owner decides what to commit once [`ExpansionAnimation::advance`] reports
//! that a transition finished.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Expanding,
    Collapsing,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    kind: TransitionKind,
    elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct ExpansionAnimation {
    duration: Duration,
    value: f32,
    in_flight: Option<InFlight>,
}

impl ExpansionAnimation {
    pub fn new(duration: Duration) -> Self {
        ExpansionAnimation {
            duration,
            value: 0.0,
            in_flight: None,
        }
    }

    /// Begin a transition. Returns false (and changes nothing) while another is running.
    pub fn start(&mut self, kind: TransitionKind) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        self.value = match kind {
            TransitionKind::Expanding => 0.0,
            TransitionKind::Collapsing => 1.0,
        };
        self.in_flight = Some(InFlight {
            kind,
            elapsed: Duration::ZERO,
        });
        true
    }

    /// Advance by `dt`. Returns the finished transition on the tick that completes it.
    pub fn advance(&mut self, dt: Duration) -> Option<TransitionKind> {
        let flight = self.in_flight.as_mut()?;
        flight.elapsed += dt;
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (flight.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let eased = ease_in_out(t);
        let kind = flight.kind;
        self.value = match kind {
            TransitionKind::Expanding => eased,
            TransitionKind::Collapsing => 1.0 - eased,
        };
        if t >= 1.0 {
            self.in_flight = None;
            Some(kind)
        } else {
            None
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn kind(&self) -> Option<TransitionKind> {
        self.in_flight.map(|f| f.kind)
    }
}

fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn expands_from_zero_to_one_over_duration() {
        let mut a = ExpansionAnimation::new(MS * 300);
        assert!(a.start(TransitionKind::Expanding));
        assert_eq!(a.value(), 0.0);

        assert_eq!(a.advance(MS * 150), None);
        assert!((a.value() - 0.5).abs() < 1e-6);
        assert!(a.is_animating());

        assert_eq!(a.advance(MS * 150), Some(TransitionKind::Expanding));
        assert_eq!(a.value(), 1.0);
        assert!(!a.is_animating());
        assert_eq!(a.advance(MS * 16), None);
    }

    #[test]
    fn collapses_from_one_to_zero() {
        let mut a = ExpansionAnimation::new(MS * 300);
        assert!(a.start(TransitionKind::Collapsing));
        assert_eq!(a.value(), 1.0);
        a.advance(MS * 100);
        assert!(a.value() < 1.0 && a.value() > 0.0);
        assert_eq!(a.advance(MS * 500), Some(TransitionKind::Collapsing));
        assert_eq!(a.value(), 0.0);
    }

    #[test]
    fn second_start_is_ignored_while_running() {
        let mut a = ExpansionAnimation::new(MS * 300);
        assert!(a.start(TransitionKind::Expanding));
        a.advance(MS * 100);
        let before = a.value();
        assert!(!a.start(TransitionKind::Collapsing));
        assert_eq!(a.kind(), Some(TransitionKind::Expanding));
        assert_eq!(a.value(), before);
    }

    #[test]
    fn value_is_monotonic_while_expanding() {
        let mut a = ExpansionAnimation::new(MS * 300);
        a.start(TransitionKind::Expanding);
        let mut last = a.value();
        while a.advance(MS * 16).is_none() {
            assert!(a.value() >= last);
            assert!((0.0..=1.0).contains(&a.value()));
            last = a.value();
        }
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let mut a = ExpansionAnimation::new(Duration::ZERO);
        a.start(TransitionKind::Expanding);
        assert_eq!(a.advance(Duration::ZERO), Some(TransitionKind::Expanding));
    }
}
