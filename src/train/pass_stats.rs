use serde::{Deserialize, Serialize};

/// Per-pass training statistics reported by `train_set_with`.
///
/// The observer receives one value after every completed pass over the
/// training set. Observers exist for progress reporting only; nothing in
/// the learning algorithm depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassStats {
    /// 0-based index of the completed pass.
    pub pass: usize,
    /// Examples misclassified (and therefore updated on) during this pass.
    pub failures: usize,
    /// Total examples in the training set.
    pub set_size: usize,
}
