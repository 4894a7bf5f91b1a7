use crate::core::ballistics::TrajectorySample;

/// The trace of the current flight, in the order samples were taken.
#[derive(Clone, Debug, Default)]
pub struct TrajectoryRecorder {
    samples: Vec<TrajectorySample>,
}

impl TrajectoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops any previous flight and seeds the trace with the launch point.
    pub fn start(&mut self, initial: TrajectorySample) {
        self.samples.clear();
        self.samples.push(initial);
    }

    pub fn record(&mut self, sample: TrajectorySample) {
        self.samples.push(sample);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn snapshot(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn last(&self) -> Option<TrajectorySample> {
        self.samples.last().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_replaces_the_previous_trace() {
        let mut recorder = TrajectoryRecorder::new();
        recorder.start(TrajectorySample::new(0.0, 3.0));
        recorder.record(TrajectorySample::new(1.0, 4.0));
        recorder.record(TrajectorySample::new(2.0, 4.5));

        recorder.start(TrajectorySample::new(0.0, 7.0));

        assert_eq!(recorder.snapshot(), &[TrajectorySample::new(0.0, 7.0)]);
    }

    #[test]
    fn record_keeps_duplicates_in_order() {
        let mut recorder = TrajectoryRecorder::new();
        let p = TrajectorySample::new(1.0, 1.0);
        recorder.start(TrajectorySample::default());
        recorder.record(p);
        recorder.record(p);

        assert_eq!(recorder.len(), 3);
        assert_eq!(recorder.last(), Some(p));
    }

    #[test]
    fn clear_empties() {
        let mut recorder = TrajectoryRecorder::new();
        recorder.start(TrajectorySample::default());
        recorder.clear();
        assert!(recorder.is_empty());
        assert_eq!(recorder.last(), None);
    }
}
