/// A time-based interpolation between two scroll offsets.
///
/// Offsets are interpolated in `f64` and the final sample is always exactly `to`, so a finished
/// tween lands on the pixel the sequence committed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: u64,
    pub to: u64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    /// A zero duration is allowed: the tween is done as soon as it starts.
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Linear progress in `[0, 1]`, before easing.
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0)
    }

    pub fn sample(&self, now_ms: u64) -> u64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let eased = self.easing.sample(self.progress(now_ms));
        if self.to >= self.from {
            let span = (self.to - self.from) as f64;
            self.from + ((span * eased) as u64).min(self.to - self.from)
        } else {
            let span = (self.from - self.to) as f64;
            self.from - ((span * eased) as u64).min(self.from - self.to)
        }
    }

    /// Restarts towards a new target from wherever the tween currently is.
    pub fn retarget(&mut self, now_ms: u64, new_to: u64, duration_ms: u64) {
        let current = self.sample(now_ms);
        *self = Self::new(current, new_to, now_ms, duration_ms, self.easing);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Easing {
    Linear,
    /// Close to the sinusoidal ease-in-out that browser move effects use by default.
    #[default]
    SmoothStep,
    EaseInOutCubic,
    EaseOutQuad,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn sample(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseOutQuad => t * (2.0 - t),
        }
    }
}
