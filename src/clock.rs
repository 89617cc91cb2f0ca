use std::{thread::sleep, time::{Duration, Instant}};

use crate::frontend::TickLimiter;

#[derive(Default)]
pub struct FrameClock {
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock { last_tick: None }
    }
}

impl TickLimiter for FrameClock {
    fn tick(&mut self, rate: u32) {
        let frame = Duration::from_secs(1) / rate.max(1);

        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < frame {
                sleep(frame - elapsed);
            }
        }

        self.last_tick = Some(Instant::now());
    }
}
