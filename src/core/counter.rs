//! Counter animation stepping

/// Default interval between animation frames
pub const TICK_MS: u64 = 16;

/// Steps a value from `start` to `end` in equal increments, one per tick.
///
/// Each yielded value is floored. The final value is exactly `end`, after
/// which the animation yields nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    end: i64,
    current: f64,
    increment: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(start: i64, end: i64, duration_ms: u64) -> Self {
        Self::with_tick(start, end, duration_ms, TICK_MS)
    }

    /// Animation advancing once every `tick_ms`, so the whole run still
    /// takes `duration_ms`
    pub fn with_tick(start: i64, end: i64, duration_ms: u64, tick_ms: u64) -> Self {
        let ticks = duration_ms as f64 / tick_ms.max(1) as f64;
        let range = end as f64 - start as f64;
        let increment = if ticks > 0.0 { range / ticks } else { range };
        Self {
            end,
            current: start as f64,
            increment,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn tick(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        let reached = if self.increment >= 0.0 {
            self.current >= self.end as f64
        } else {
            self.current <= self.end as f64
        };
        if reached {
            self.current = self.end as f64;
            self.done = true;
            return Some(self.end);
        }
        Some(self.current.floor() as i64)
    }
}

impl Iterator for CounterAnimation {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.tick()
    }
}

/// Integer with thousands separators, e.g. 12345 -> "12,345"
pub fn format_count(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
