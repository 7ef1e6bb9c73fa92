use serde::{Deserialize, Serialize};

use crate::error::{PerceptronError, PerceptronResult};
use crate::math::vector::dot;
use crate::perceptron::OnlineLearner;

/// Binary perceptron: a single weight vector deciding `score > threshold`.
///
/// Covers both textbook forms. `new` builds the thresholded form with an
/// explicit decision cutoff; `canonical` builds the reduced-parameter form
/// where the cutoff is 0.0 and the learned bias weight carries the offset.
///
/// Index 0 of the weight vector is the bias weight, paired with a constant
/// input of 1.0; indices 1..=N hold per-feature weights. All weights start
/// at 0.0, so a fresh perceptron scores every input as 0.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryPerceptron {
    weights: Vec<f64>,
    learning_rate: f64,
    threshold: f64,
}

impl BinaryPerceptron {
    /// Creates a thresholded binary perceptron for `input_dim` features.
    pub fn new(input_dim: usize, learning_rate: f64, threshold: f64) -> BinaryPerceptron {
        BinaryPerceptron {
            weights: vec![0.0; input_dim + 1],
            learning_rate,
            threshold,
        }
    }

    /// Creates the canonical reduced form: decision rule `score > 0.0`.
    pub fn canonical(input_dim: usize, learning_rate: f64) -> BinaryPerceptron {
        BinaryPerceptron::new(input_dim, learning_rate, 0.0)
    }

    /// Number of input features this perceptron was built for.
    pub fn input_dim(&self) -> usize {
        self.weights.len() - 1
    }

    /// Step size applied on every misclassified training example.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Decision cutoff; 0.0 for the canonical form.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Raw decision value: bias weight plus feature weights dotted with
    /// `input`. Fails with `DimensionMismatch` if `input` has the wrong
    /// length.
    pub fn score(&self, input: &[f64]) -> PerceptronResult<f64> {
        self.check_input(input)?;
        Ok(self.raw_score(input))
    }

    /// Classifies `input` as `score > threshold`. No state is touched.
    pub fn classify(&self, input: &[f64]) -> PerceptronResult<bool> {
        self.check_input(input)?;
        Ok(self.raw_score(input) > self.threshold)
    }

    /// Trains on a single example.
    ///
    /// Returns `Ok(true)` if `input` was already classified as `expected`
    /// (weights untouched). Otherwise applies one perceptron step,
    /// `w[i] += learning_rate * error * x[i]` with `x[0] = 1.0` for the
    /// bias slot and `error = expected - predicted` in {1.0, 0.0} space,
    /// and returns `Ok(false)`.
    pub fn train(&mut self, input: &[f64], expected: bool) -> PerceptronResult<bool> {
        self.check_input(input)?;
        let predicted = self.raw_score(input) > self.threshold;
        if predicted == expected {
            return Ok(true);
        }

        // Mismatched labels, so error is exactly +1.0 or -1.0.
        let error = label_value(expected) - label_value(predicted);
        let step = self.learning_rate * error;
        self.weights[0] += step;
        for (w, &x) in self.weights[1..].iter_mut().zip(input.iter()) {
            *w += step * x;
        }
        Ok(false)
    }

    /// Current weight vector (bias first), as an immutable view.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Replaces the weight vector wholesale.
    ///
    /// The replacement must have length `input_dim + 1`; otherwise fails
    /// with `DimensionMismatch` and the existing weights stay in place.
    pub fn set_weights(&mut self, weights: Vec<f64>) -> PerceptronResult<()> {
        if weights.len() != self.weights.len() {
            return Err(PerceptronError::dimension_mismatch(
                self.weights.len(),
                weights.len(),
                "weight vector",
            ));
        }
        self.weights = weights;
        Ok(())
    }

    /// Serializes the perceptron to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a perceptron from a JSON file previously written by
    /// `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<BinaryPerceptron> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    fn check_input(&self, input: &[f64]) -> PerceptronResult<()> {
        if input.len() != self.input_dim() {
            return Err(PerceptronError::dimension_mismatch(
                self.input_dim(),
                input.len(),
                "input features",
            ));
        }
        Ok(())
    }

    fn raw_score(&self, input: &[f64]) -> f64 {
        self.weights[0] + dot(&self.weights[1..], input)
    }
}

impl OnlineLearner for BinaryPerceptron {
    type Label = bool;

    fn train_step(&mut self, input: &[f64], expected: bool) -> PerceptronResult<bool> {
        self.train(input, expected)
    }

    fn predict(&self, input: &[f64]) -> PerceptronResult<bool> {
        self.classify(input)
    }
}

/// Maps a boolean label into the {1.0, 0.0} space the update rule uses.
fn label_value(label: bool) -> f64 {
    if label {
        1.0
    } else {
        0.0
    }
}
