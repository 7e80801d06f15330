use crate::{Observer, Snapshot, Step, StepSequence, VisualState};

/// Event emitted each time a [`Recorder`] appends a step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Position of the step in the sequence being built.
    pub index: usize,

    /// The step that was just recorded.
    pub step: &'a Step,
}

/// Accumulates steps for a generator and reports each one to an observer.
///
/// Generators keep their own working copy of the values and hand a slice of
/// it to the recorder whenever they want a frame. Every call copies the
/// values, so later mutations never leak into earlier steps.
pub struct Recorder<Obs> {
    steps: Vec<Step>,
    observer: Obs,
}

impl Recorder<()> {
    /// Creates a recorder without an observer.
    #[must_use]
    pub fn unobserved() -> Self {
        Self::new(())
    }
}

impl<Obs> Recorder<Obs>
where
    Obs: for<'a> Observer<Event<'a>>,
{
    /// Creates a recorder that reports to `observer`.
    pub fn new(observer: Obs) -> Self {
        Self {
            steps: Vec::new(),
            observer,
        }
    }

    /// Records a snapshot of `values` with highlights chosen by `state`.
    pub fn record<F>(&mut self, values: &[u32], state: F)
    where
        F: FnMut(usize) -> VisualState,
    {
        self.push(Step::new(Snapshot::from_fn(values, state)));
    }

    /// Records a snapshot tagged with the pseudo-code line that produced it.
    pub fn record_at<F>(&mut self, line: usize, values: &[u32], state: F)
    where
        F: FnMut(usize) -> VisualState,
    {
        self.push(Step::at_line(Snapshot::from_fn(values, state), line));
    }

    /// Appends the final all-sorted step and returns the finished sequence.
    ///
    /// `values` must already be in ascending order.
    pub fn finish(mut self, values: &[u32]) -> StepSequence {
        let last = Snapshot::uniform(values, VisualState::Sorted);
        debug_assert!(last.is_sorted(), "finished with unsorted values");
        self.push(Step::new(last));
        StepSequence::from_steps(self.steps)
    }

    fn push(&mut self, step: Step) {
        let index = self.steps.len();
        self.steps.push(step);
        let event = Event {
            index,
            step: &self.steps[index],
        };
        self.observer.observe(&event);
    }
}
