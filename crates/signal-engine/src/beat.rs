//! Beat timing.

/// Accumulates frame time and reports beats at `60 / bpm` second intervals.
///
/// A beat subtracts one period from the accumulator instead of zeroing
/// it, so overshoot carries into the next beat.
#[derive(Clone, Debug, PartialEq)]
pub struct BeatClock {
    timer: f32,
    bpm: f32,
}

impl BeatClock {
    /// A clock at `bpm` with an empty accumulator.
    pub fn new(bpm: f32) -> Self {
        Self { timer: 0.0, bpm }
    }

    /// Accumulated seconds since the last beat.
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Beats per minute.
    pub fn bpm(&self) -> f32 {
        self.bpm
    }

    /// Seconds between beats.
    pub fn period(&self) -> f32 {
        60.0 / self.bpm
    }

    /// Set the tempo. The accumulator is kept.
    pub fn set_bpm(&mut self, bpm: f32) {
        self.bpm = bpm;
    }

    /// Overwrite both scalars, e.g. from a loaded save.
    pub fn restore(&mut self, timer: f32, bpm: f32) {
        self.timer = timer;
        self.bpm = bpm;
    }

    /// Add `dt` seconds to the accumulator.
    pub fn accumulate(&mut self, dt: f32) {
        self.timer += dt;
    }

    /// Consume one beat if a full period has accumulated.
    ///
    /// At most one beat is reported per call.
    pub fn take_beat(&mut self) -> bool {
        let period = self.period();
        if self.timer >= period {
            self.timer -= period;
            true
        } else {
            false
        }
    }
}
