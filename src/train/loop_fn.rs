use crate::error::{PerceptronError, PerceptronResult};
use crate::perceptron::OnlineLearner;
use crate::train::pass_stats::PassStats;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Trains `learner` on a whole set until it converges or the pass budget
/// runs out. Equivalent to `train_set_with` with a no-op observer.
pub fn train_set<L>(
    learner: &mut L,
    inputs: &[Vec<f64>],
    labels: &[L::Label],
    max_passes: usize,
) -> PerceptronResult<bool>
where
    L: OnlineLearner,
{
    train_set_with(learner, inputs, labels, max_passes, |_| {})
}

/// Trains `learner` on a whole set, reporting progress after every pass.
///
/// # Arguments
/// - `learner`    - mutable reference to the learner; modified in place
/// - `inputs`     - training samples, each a `Vec<f64>` of the learner's
///   input dimension
/// - `labels`     - corresponding labels, same length as `inputs`
/// - `max_passes` - upper bound on full passes over the set
/// - `on_pass`    - observer invoked with `PassStats` after each pass
///
/// Each pass visits every example in presentation order; later examples in
/// a pass see the weight updates made by earlier ones. A pass with zero
/// failures means the learner classifies the whole set correctly, and
/// training stops there with `Ok(true)`. If `max_passes` passes complete
/// without such a pass, returns `Ok(false)`.
///
/// Fails with `SetSizeMismatch` before any training when `inputs` and
/// `labels` disagree in length, and propagates any per-example error from
/// the learner as-is.
pub fn train_set_with<L, F>(
    learner: &mut L,
    inputs: &[Vec<f64>],
    labels: &[L::Label],
    max_passes: usize,
    mut on_pass: F,
) -> PerceptronResult<bool>
where
    L: OnlineLearner,
    F: FnMut(&PassStats),
{
    check_set_sizes(inputs, labels)?;

    for pass in 0..max_passes {
        let failures = run_one_pass(learner, inputs, labels)?;

        on_pass(&PassStats {
            pass,
            failures,
            set_size: inputs.len(),
        });

        if failures == 0 {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Fraction of examples `learner` currently predicts correctly, in [0, 1].
/// An empty set yields 0.0.
pub fn accuracy<L>(
    learner: &L,
    inputs: &[Vec<f64>],
    labels: &[L::Label],
) -> PerceptronResult<f64>
where
    L: OnlineLearner,
{
    check_set_sizes(inputs, labels)?;
    if inputs.is_empty() {
        return Ok(0.0);
    }

    let mut correct = 0usize;
    for (input, &expected) in inputs.iter().zip(labels.iter()) {
        if learner.predict(input)? == expected {
            correct += 1;
        }
    }
    Ok(correct as f64 / inputs.len() as f64)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Runs one full pass over the set in presentation order and counts the
/// examples that needed a weight update.
fn run_one_pass<L>(
    learner: &mut L,
    inputs: &[Vec<f64>],
    labels: &[L::Label],
) -> PerceptronResult<usize>
where
    L: OnlineLearner,
{
    let mut failures = 0;
    for (input, &expected) in inputs.iter().zip(labels.iter()) {
        if !learner.train_step(input, expected)? {
            failures += 1;
        }
    }
    Ok(failures)
}

fn check_set_sizes<T>(inputs: &[Vec<f64>], labels: &[T]) -> PerceptronResult<()> {
    if inputs.len() != labels.len() {
        return Err(PerceptronError::SetSizeMismatch {
            inputs: inputs.len(),
            labels: labels.len(),
        });
    }
    Ok(())
}
