use std::fmt;

/// The stages of a prediction run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    ContactCounting,
    SingleBoundaryScoring,
    DoubleBoundaryScoring,
    ContiguousSearch,
    DiscontinuousSearch,
    Ranking,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::ContactCounting => "Counting contacts",
            Phase::SingleBoundaryScoring => "Scoring single boundaries",
            Phase::DoubleBoundaryScoring => "Scoring double boundaries",
            Phase::ContiguousSearch => "Searching contiguous splits",
            Phase::DiscontinuousSearch => "Searching discontinuous splits",
            Phase::Ranking => "Ranking candidates",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    PhaseStart { phase: Phase },
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

    /// Runs `f` between a `PhaseStart` and a `PhaseFinish` event.
    pub fn phase<T>(&self, phase: Phase, f: impl FnOnce() -> T) -> T {
        self.report(Progress::PhaseStart { phase });
        let result = f();
        self.report(Progress::PhaseFinish);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_reporter() -> (ProgressReporter<'static>, Arc<Mutex<Vec<Progress>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));
        (reporter, events)
    }

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::Message("ignored".into()));
        assert_eq!(reporter.phase(Phase::Ranking, || 7), 7);
    }

    #[test]
    fn phase_wraps_work_in_start_and_finish_events() {
        let (reporter, events) = recording_reporter();
        let value = reporter.phase(Phase::ContiguousSearch, || {
            reporter.report(Progress::Message("inside".into()));
            3
        });
        assert_eq!(value, 3);
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                Progress::PhaseStart {
                    phase: Phase::ContiguousSearch
                },
                Progress::Message("inside".into()),
                Progress::PhaseFinish,
            ]
        );
    }
}
