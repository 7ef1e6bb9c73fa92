use crate::error::PerceptronResult;

/// Common surface of the perceptron variants: one-example training plus
/// prediction. The set-level drivers in `crate::train` are generic over
/// this trait, so the binary and multi-class learners share them.
pub trait OnlineLearner {
    /// Label type the learner predicts: `bool` for the binary forms, a
    /// class index for the multi-class form.
    type Label: Copy + PartialEq;

    /// Trains on one example. `Ok(true)` means the example was already
    /// classified correctly and nothing changed.
    fn train_step(&mut self, input: &[f64], expected: Self::Label) -> PerceptronResult<bool>;

    /// Predicts the label for one input without touching any state.
    fn predict(&self, input: &[f64]) -> PerceptronResult<Self::Label>;
}
