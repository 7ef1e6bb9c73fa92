use crate::error::{PerceptronError, PerceptronResult};
use crate::perceptron::OnlineLearner;

/// Trains `learner` on a whole set by accumulating a boolean AND over each
/// pass: a pass comes back `true` only when every example was already
/// classified correctly.
///
/// Same convergence contract as `train_set` (full passes in presentation
/// order, stop on the first clean pass, `Ok(false)` once `max_passes` is
/// spent), but without failure counting or per-pass reporting.
pub fn fit<L>(
    learner: &mut L,
    inputs: &[Vec<f64>],
    labels: &[L::Label],
    max_passes: usize,
) -> PerceptronResult<bool>
where
    L: OnlineLearner,
{
    if inputs.len() != labels.len() {
        return Err(PerceptronError::SetSizeMismatch {
            inputs: inputs.len(),
            labels: labels.len(),
        });
    }

    for _ in 0..max_passes {
        let mut all_correct = true;
        for (input, &expected) in inputs.iter().zip(labels.iter()) {
            all_correct &= learner.train_step(input, expected)?;
        }
        if all_correct {
            return Ok(true);
        }
    }

    Ok(false)
}
