use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Opaque label
///
/// Labels only have identity: two labels are equal only if they came from the same call to
/// [`Label::new`]. Labels have no order of their own; their position inside an instruction list
/// is resolved through a [`crate::labels::LabelIndexLookup`].
#[derive(Copy, Clone, Hash, Eq, PartialEq)]
pub struct Label(usize);

static NEXT_LABEL: AtomicUsize = AtomicUsize::new(0);

impl Label {
    /// Get a fresh label, distinct from every other label in the process
    #[allow(clippy::new_without_default)]
    pub fn new() -> Label {
        Label(NEXT_LABEL.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw identity, only useful for diagnostics
    pub fn id(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_fmt(format_args!("L#{}", self.0))
    }
}
