//! Minimal time-based tweening for chart attributes.
//!
//! A [`Tween`] interpolates one attribute from its last value towards a
//! target over a fixed duration. Starting a new transition while one is in
//! flight restarts from the currently displayed value, so the most recent
//! target always wins. Nothing awaits completion: callers sample the tween
//! with the current time whenever they paint.

use egui::Color32;

/// Easing curve applied to normalized transition time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    CubicInOut,
}

impl Easing {
    /// Map `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                let t2 = t * 2.0;
                if t2 <= 1.0 {
                    t2 * t2 * t2 / 2.0
                } else {
                    let u = t2 - 2.0;
                    (u * u * u + 2.0) / 2.0
                }
            }
        }
    }
}

/// Values that can be interpolated.
pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: f64, b: f64, t: f64) -> f64 {
        a + (b - a) * t
    }
}

impl Lerp for f32 {
    fn lerp(a: f32, b: f32, t: f64) -> f32 {
        a + (b - a) * t as f32
    }
}

impl Lerp for Color32 {
    // Per-channel interpolation in sRGB space.
    fn lerp(a: Color32, b: Color32, t: f64) -> Color32 {
        let a = a.to_srgba_unmultiplied();
        let b = b.to_srgba_unmultiplied();
        let ch = |i: usize| -> u8 {
            (a[i] as f64 + (b[i] as f64 - a[i] as f64) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Color32::from_rgba_unmultiplied(ch(0), ch(1), ch(2), ch(3))
    }
}

/// One animated attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T: Lerp> {
    from: T,
    to: T,
    start: f64,
    duration: f64,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    /// A tween resting at `value`.
    pub fn settled(value: T) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Value displayed at time `now` (seconds).
    pub fn value_at(&self, now: f64) -> T {
        if self.duration <= 0.0 || now >= self.start + self.duration {
            return self.to;
        }
        if now <= self.start {
            return self.from;
        }
        let t = (now - self.start) / self.duration;
        T::lerp(self.from, self.to, self.easing.apply(t))
    }

    /// Start animating towards `to` from whatever is displayed at `now`.
    pub fn retarget(&mut self, to: T, now: f64, duration: f64, easing: Easing) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
        self.easing = easing;
    }

    /// Jump to `value` immediately, cancelling any running transition.
    pub fn snap(&mut self, value: T) {
        *self = Self::settled(value);
    }

    /// Restart from an explicit value towards `to`.
    pub fn animate_from(&mut self, from: T, to: T, now: f64, duration: f64, easing: Easing) {
        self.from = from;
        self.to = to;
        self.start = now;
        self.duration = duration;
        self.easing = easing;
    }

    pub fn is_running(&self, now: f64) -> bool {
        self.duration > 0.0 && now < self.start + self.duration
    }
}
