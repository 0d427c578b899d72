/// Events emitted while a plan is being built. Phases nest tasks; a task counts
/// discrete steps such as emitted permutations.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Reports a task of `total_steps` units, one increment per yielded item.
    /// `TaskFinish` is left to the caller, which knows when consumption stops.
    pub fn track<I: IntoIterator>(
        &self,
        total_steps: u64,
        items: I,
    ) -> impl Iterator<Item = I::Item> {
        self.report(Progress::TaskStart { total_steps });
        items
            .into_iter()
            .inspect(move |_| self.report(Progress::TaskIncrement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_reporter(events: Arc<Mutex<Vec<String>>>) -> ProgressReporter<'static> {
        ProgressReporter::with_callback(Box::new(move |event| {
            events.lock().unwrap().push(format!("{:?}", event));
        }))
    }

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::PhaseFinish);
    }

    #[test]
    fn report_forwards_events_to_callback() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let reporter = recording_reporter(events.clone());

        reporter.report(Progress::PhaseStart { name: "Counting" });
        reporter.report(Progress::PhaseFinish);

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].contains("Counting"));
    }

    #[test]
    fn track_reports_start_and_one_increment_per_item() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let reporter = recording_reporter(events.clone());

        let items: Vec<u32> = reporter.track(3, vec![1, 2, 3]).collect();
        assert_eq!(items, vec![1, 2, 3]);

        let events = events.lock().unwrap();
        assert_eq!(events[0], "TaskStart { total_steps: 3 }");
        assert_eq!(
            events.iter().filter(|e| e.as_str() == "TaskIncrement").count(),
            3
        );
    }
}
