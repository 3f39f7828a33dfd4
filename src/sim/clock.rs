//! Frame clock
//!
//! A frame source yields raw timestamps (ms); the `Ticker` turns them into
//! `Tick`s by carrying the previous timestamp forward. Physics integrates the
//! measured `delta_time`, never the nominal interval, so frame jitter does not
//! change simulation speed.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// One simulation step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Frame timestamp in milliseconds
    pub time: f64,
    /// Seconds since the previous tick (`None` on the first tick)
    pub delta_time: Option<f32>,
}

impl Tick {
    /// Elapsed seconds, with the first tick counting as zero
    #[inline]
    pub fn dt(&self) -> f32 {
        self.delta_time.unwrap_or(0.0)
    }
}

/// Something that paces frames and reports when each one fires
pub trait FrameSource {
    /// Block or advance until the next frame; return its timestamp (ms)
    fn next_frame(&mut self) -> f64;
}

/// Converts timestamps into ticks
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    previous: Option<f64>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, now: f64) -> Tick {
        let delta_time = self
            .previous
            .map(|prev| ((now - prev).max(0.0) / 1000.0) as f32);
        self.previous = Some(now);
        Tick {
            time: now,
            delta_time,
        }
    }
}

/// Infinite tick stream over a frame source
///
/// Not restartable: a new session builds a new `Clock`.
pub struct Clock<S> {
    source: S,
    ticker: Ticker,
}

impl<S: FrameSource> Clock<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            ticker: Ticker::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: FrameSource> Iterator for Clock<S> {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        let now = self.source.next_frame();
        Some(self.ticker.tick(now))
    }
}

/// Manually driven frame source for tests and headless runs
///
/// Emits `start` first, then advances by scripted deltas while any remain and
/// by the fixed interval afterwards.
#[derive(Debug, Clone)]
pub struct VirtualClock {
    now: f64,
    interval: f64,
    scripted: VecDeque<f64>,
    started: bool,
}

impl VirtualClock {
    pub fn new(start: f64, interval: f64) -> Self {
        Self {
            now: start,
            interval,
            scripted: VecDeque::new(),
            started: false,
        }
    }

    /// Use the given frame gaps (ms) before falling back to the interval
    pub fn with_deltas(start: f64, interval: f64, deltas: impl IntoIterator<Item = f64>) -> Self {
        Self {
            scripted: deltas.into_iter().collect(),
            ..Self::new(start, interval)
        }
    }

    /// Timestamp of the most recent frame
    pub fn now(&self) -> f64 {
        self.now
    }
}

impl FrameSource for VirtualClock {
    fn next_frame(&mut self) -> f64 {
        if self.started {
            let step = self.scripted.pop_front().unwrap_or(self.interval);
            self.now += step;
        }
        self.started = true;
        self.now
    }
}

/// Wall-clock frame source that sleeps out the rest of each interval
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct SleepClock {
    origin: std::time::Instant,
    interval: std::time::Duration,
    next_deadline: Option<std::time::Instant>,
}

#[cfg(not(target_arch = "wasm32"))]
impl SleepClock {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            origin: std::time::Instant::now(),
            interval: std::time::Duration::from_secs_f64(interval_ms / 1000.0),
            next_deadline: None,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl FrameSource for SleepClock {
    fn next_frame(&mut self) -> f64 {
        let now = std::time::Instant::now();
        if let Some(deadline) = self.next_deadline {
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
        }
        let fired = std::time::Instant::now();
        self.next_deadline = Some(fired + self.interval);
        fired.duration_since(self.origin).as_secs_f64() * 1000.0
    }
}
