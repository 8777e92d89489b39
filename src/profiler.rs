use std::time::{Duration, Instant};

/// Times named steps of a run. Every step is measured; the `START`/`STOP`
/// lines and the closing `TOTAL` line are only printed when `verbose` is set.
pub struct Profiler {
    start_time: Instant,
    curr: Option<Step>,
    verbose: bool,
}

struct Step {
    start_time: Instant,
    name: String,
}

impl Profiler {
    pub fn new(verbose: bool) -> Self {
        Self {
            start_time: Instant::now(),
            curr: None,
            verbose,
        }
    }

    pub fn step(&mut self, step_name: &str) {
        self.finish();
        if self.verbose {
            println!("{} - START", step_name);
        }
        self.curr = Some(Step {
            start_time: Instant::now(),
            name: step_name.to_string(),
        });
    }

    /// Ends the current step and returns how long it ran.
    pub fn finish(&mut self) -> Option<Duration> {
        let step = self.curr.take()?;
        let elapsed = step.start_time.elapsed();
        if self.verbose {
            println!("{} - STOP {:.3} s", step.name, elapsed.as_secs_f64());
        }
        Some(elapsed)
    }

    pub fn total(&mut self) -> Duration {
        self.finish();
        let elapsed = self.start_time.elapsed();
        if self.verbose {
            println!("TOTAL - {:.3} s", elapsed.as_secs_f64());
        }
        elapsed
    }
}

impl Drop for Profiler {
    fn drop(&mut self) {
        self.total();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn finish_without_step_is_none() {
        let mut profiler = Profiler::new(false);
        assert!(profiler.finish().is_none());
    }

    #[test]
    fn measures_each_step_once() {
        let mut profiler = Profiler::new(false);
        profiler.step("sleep");
        thread::sleep(Duration::from_millis(5));
        let elapsed = profiler.finish().unwrap();
        assert!(elapsed >= Duration::from_millis(5));
        assert!(profiler.finish().is_none());
        assert!(profiler.total() >= elapsed);
    }
}
