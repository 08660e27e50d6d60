//! Animation frames emitted by the history generators.

/// One `(index, value)` side-channel annotation attached to a step, tracking a
/// value outside its current array position: a pivot candidate, an insertion
/// key, or a merge-buffer element tagged with a synthetic id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuxTag {
    pub index: usize,
    pub value: u32,
}

/// An in-flight move: the value at `from` is visually traveling toward `to`
/// before the array mutation that realizes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    pub from: usize,
    pub to: usize,
}

/// A single animation frame: the full array state at one instant plus the
/// indices highlighted by the operation in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub array: Vec<u32>,
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    pub sorted: Vec<usize>,
    pub description: String,
    pub auxiliary: Vec<AuxTag>,
    pub shifting: Option<Shift>,
}

/// The full ordered sequence of steps produced by one algorithm run. Never
/// mutated after return; replayable in any order by index.
pub type History = Vec<Step>;

impl Step {
    /// Snapshot the current array with no highlights. The copy is defensive:
    /// later mutation of `values` never alters an emitted step.
    pub fn snapshot(values: &[u32], description: impl Into<String>) -> Self {
        Step {
            array: values.to_vec(),
            comparing: Vec::new(),
            swapping: Vec::new(),
            sorted: Vec::new(),
            description: description.into(),
            auxiliary: Vec::new(),
            shifting: None,
        }
    }

    pub fn comparing(mut self, indices: Vec<usize>) -> Self {
        self.comparing = indices;
        self
    }

    pub fn swapping(mut self, indices: Vec<usize>) -> Self {
        self.swapping = indices;
        self
    }

    pub fn sorted(mut self, indices: Vec<usize>) -> Self {
        self.sorted = indices;
        self
    }

    pub fn auxiliary(mut self, tags: Vec<AuxTag>) -> Self {
        self.auxiliary = tags;
        self
    }

    /// Tag a single side-channel value.
    pub fn tag(mut self, index: usize, value: u32) -> Self {
        self.auxiliary.push(AuxTag { index, value });
        self
    }

    pub fn shifting(mut self, from: usize, to: usize) -> Self {
        self.shifting = Some(Shift { from, to });
        self
    }
}
