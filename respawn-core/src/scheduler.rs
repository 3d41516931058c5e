//! Repeating tasks driven by the host's tick loop.
//!
//! The host calls [`TickScheduler::tick`] once per game tick on its main
//! thread. Due tasks run inline, in the order they were scheduled.

use rustc_hash::FxHashMap;
use thiserror::Error;

/// Game ticks per second at the normal tick rate.
pub const TICKS_PER_SECOND: u64 = 20;

/// A task run by the scheduler.
pub type Task = Box<dyn FnMut() + Send>;

/// Handle used to cancel a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// An error that can occur when scheduling a task.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// Repeating tasks need a period of at least one tick.
    #[error("Repeating task period must be at least one tick")]
    ZeroPeriod,
}

struct RepeatingTask {
    next_run: u64,
    period: u64,
    task: Task,
}

/// Runs repeating tasks on tick boundaries.
#[derive(Default)]
pub struct TickScheduler {
    current_tick: u64,
    next_id: u64,
    tasks: FxHashMap<TaskId, RepeatingTask>,
}

impl TickScheduler {
    /// Creates a scheduler at tick 0 with no tasks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks elapsed since the scheduler was created.
    #[must_use]
    pub const fn current_tick(&self) -> u64 {
        self.current_tick
    }

    /// Number of scheduled tasks.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Schedules `task` to first run `delay` ticks from now, then every
    /// `period` ticks. A delay of 0 runs it on the next tick.
    pub fn schedule_repeating(
        &mut self,
        delay: u64,
        period: u64,
        task: impl FnMut() + Send + 'static,
    ) -> Result<TaskId, SchedulerError> {
        if period == 0 {
            return Err(SchedulerError::ZeroPeriod);
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.insert(
            id,
            RepeatingTask {
                next_run: self.current_tick + delay.max(1),
                period,
                task: Box::new(task),
            },
        );
        Ok(id)
    }

    /// Cancels a task. Returns false if it was not scheduled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        self.tasks.remove(&id).is_some()
    }

    /// Advances one tick and runs every task that is due.
    pub fn tick(&mut self) {
        self.current_tick += 1;
        let now = self.current_tick;

        let mut due: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.next_run <= now)
            .map(|(id, _)| *id)
            .collect();
        due.sort_unstable();

        for id in due {
            if let Some(task) = self.tasks.get_mut(&id) {
                (task.task)();
                task.next_run = now + task.period;
            }
        }
    }
}
