//! Debounce
//!
//! Last-write-wins scheduling: each call cancels the pending task and
//! schedules a new one after the idle window.

use gloo_timers::callback::Timeout;

/// Source of delayed callbacks. Dropping the handle cancels the callback.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout` via gloo-timers
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// At most one pending task at a time
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    /// Replace any pending task with `task`
    pub fn call(&mut self, task: impl FnOnce() + 'static) {
        // Cancel before scheduling so two timers never coexist
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Job {
        due_at: u32,
        task: Option<Box<dyn FnOnce()>>,
        cancelled: Rc<Cell<bool>>,
    }

    /// Virtual clock; tasks run only when `advance` passes their due time
    #[derive(Clone, Default)]
    struct ManualScheduler {
        now: Rc<Cell<u32>>,
        jobs: Rc<RefCell<Vec<Job>>>,
    }

    struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualScheduler {
        fn advance(&self, ms: u32) {
            let now = self.now.get() + ms;
            self.now.set(now);
            let due: Vec<Box<dyn FnOnce()>> = self
                .jobs
                .borrow_mut()
                .iter_mut()
                .filter(|job| job.due_at <= now && !job.cancelled.get())
                .filter_map(|job| job.task.take())
                .collect();
            for task in due {
                task();
            }
        }

        fn live_jobs(&self) -> usize {
            self.jobs
                .borrow()
                .iter()
                .filter(|job| job.task.is_some() && !job.cancelled.get())
                .count()
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.jobs.borrow_mut().push(Job {
                due_at: self.now.get() + delay_ms,
                task: Some(task),
                cancelled: cancelled.clone(),
            });
            ManualHandle { cancelled }
        }
    }

    fn recording() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Box<dyn FnOnce()>) {
        let runs = Rc::new(RefCell::new(Vec::new()));
        let sink = runs.clone();
        let make = move |value: &str| {
            let sink = sink.clone();
            let value = value.to_string();
            Box::new(move || sink.borrow_mut().push(value)) as Box<dyn FnOnce()>
        };
        (runs, make)
    }

    #[test]
    fn test_rapid_calls_run_once_with_last_value() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 150);
        let (runs, make) = recording();

        for text in ["c", "cu", "cub", "cube"] {
            debouncer.call(make(text));
            scheduler.advance(50);
        }
        assert!(runs.borrow().is_empty());
        assert_eq!(scheduler.live_jobs(), 1);

        scheduler.advance(100);
        assert_eq!(*runs.borrow(), vec!["cube".to_string()]);
        assert_eq!(scheduler.live_jobs(), 0);
    }

    #[test]
    fn test_settled_calls_each_run() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 150);
        let (runs, make) = recording();

        debouncer.call(make("a"));
        scheduler.advance(150);
        debouncer.call(make("b"));
        scheduler.advance(150);

        assert_eq!(*runs.borrow(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_not_run_before_window() {
        let scheduler = ManualScheduler::default();
        let mut debouncer = Debouncer::new(scheduler.clone(), 150);
        let (runs, make) = recording();

        debouncer.call(make("a"));
        scheduler.advance(149);
        assert!(runs.borrow().is_empty());
        scheduler.advance(1);
        assert_eq!(runs.borrow().len(), 1);
    }

    #[test]
    fn test_drop_discards_pending() {
        let scheduler = ManualScheduler::default();
        let (runs, make) = recording();

        let mut dropped = Debouncer::new(scheduler.clone(), 150);
        dropped.call(make("dropped"));
        drop(dropped);

        scheduler.advance(500);
        assert!(runs.borrow().is_empty());
        assert_eq!(scheduler.live_jobs(), 0);
    }
}
