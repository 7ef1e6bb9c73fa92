use serde::{Deserialize, Serialize};

use crate::error::{PerceptronError, PerceptronResult};
use crate::math::vector::{argmax, dot};
use crate::perceptron::OnlineLearner;

/// One-vs-all multi-class perceptron.
///
/// Keeps one weight vector per class, each laid out like the binary
/// perceptron's (bias weight at index 0, feature weights after). Every
/// class scores the input independently and the highest score wins, with
/// ties resolved in favor of the lowest class index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiClassPerceptron {
    weights: Vec<Vec<f64>>,
    input_dim: usize,
    learning_rate: f64,
}

impl MultiClassPerceptron {
    /// Creates a perceptron over `class_count` classes (at least 1) for
    /// `input_dim` features. All weight vectors start at zero, so a fresh
    /// perceptron classifies everything as class 0.
    pub fn new(input_dim: usize, class_count: usize, learning_rate: f64) -> MultiClassPerceptron {
        MultiClassPerceptron {
            weights: vec![vec![0.0; input_dim + 1]; class_count],
            input_dim,
            learning_rate,
        }
    }

    /// Number of input features this perceptron was built for.
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Number of classes competing for each input.
    pub fn class_count(&self) -> usize {
        self.weights.len()
    }

    /// Step size applied to the two touched rows on a failed training step.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Decision value of a single class for `input`.
    pub fn score(&self, class: usize, input: &[f64]) -> PerceptronResult<f64> {
        self.check_input(input)?;
        self.check_class(class)?;
        Ok(row_score(&self.weights[class], input))
    }

    /// Decision values of every class for `input`, in class order.
    pub fn scores(&self, input: &[f64]) -> PerceptronResult<Vec<f64>> {
        self.check_input(input)?;
        Ok(self.raw_scores(input))
    }

    /// Classifies `input` as the lowest class index with the highest score.
    pub fn classify(&self, input: &[f64]) -> PerceptronResult<usize> {
        self.check_input(input)?;
        Ok(argmax(&self.raw_scores(input)))
    }

    /// Trains on a single example.
    ///
    /// Both checks run before anything mutates: `input` must match the
    /// configured dimension and `expected` must be a valid class index.
    /// Returns `Ok(true)` when the prediction already matches. Otherwise
    /// nudges the expected class's weights towards the input and the
    /// wrongly winning class's weights away from it, leaving every other
    /// class untouched, and returns `Ok(false)`.
    pub fn train(&mut self, input: &[f64], expected: usize) -> PerceptronResult<bool> {
        self.check_input(input)?;
        self.check_class(expected)?;

        let predicted = argmax(&self.raw_scores(input));
        if predicted == expected {
            return Ok(true);
        }

        let step = self.learning_rate;
        self.nudge_row(expected, step, input);
        self.nudge_row(predicted, -step, input);
        Ok(false)
    }

    /// Current weight matrix (one row per class, bias first), as an
    /// immutable view.
    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    /// Replaces the weight matrix wholesale.
    ///
    /// The replacement must have exactly `class_count` rows of length
    /// `input_dim + 1` each; otherwise fails with `DimensionMismatch` and
    /// the existing weights stay in place.
    pub fn set_weights(&mut self, weights: Vec<Vec<f64>>) -> PerceptronResult<()> {
        if weights.len() != self.class_count() {
            return Err(PerceptronError::dimension_mismatch(
                self.class_count(),
                weights.len(),
                "weight matrix rows",
            ));
        }
        for row in &weights {
            if row.len() != self.input_dim + 1 {
                return Err(PerceptronError::dimension_mismatch(
                    self.input_dim + 1,
                    row.len(),
                    "weight matrix row",
                ));
            }
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
    pub fn load_json(path: &str) -> std::io::Result<MultiClassPerceptron> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    fn check_input(&self, input: &[f64]) -> PerceptronResult<()> {
        if input.len() != self.input_dim {
            return Err(PerceptronError::dimension_mismatch(
                self.input_dim,
                input.len(),
                "input features",
            ));
        }
        Ok(())
    }

    fn check_class(&self, class: usize) -> PerceptronResult<()> {
        if class >= self.class_count() {
            return Err(PerceptronError::ClassOutOfRange {
                class,
                class_count: self.class_count(),
            });
        }
        Ok(())
    }

    fn raw_scores(&self, input: &[f64]) -> Vec<f64> {
        self.weights.iter().map(|row| row_score(row, input)).collect()
    }

    fn nudge_row(&mut self, class: usize, step: f64, input: &[f64]) {
        let row = &mut self.weights[class];
        row[0] += step;
        for (w, &x) in row[1..].iter_mut().zip(input.iter()) {
            *w += step * x;
        }
    }
}

impl OnlineLearner for MultiClassPerceptron {
    type Label = usize;

    fn train_step(&mut self, input: &[f64], expected: usize) -> PerceptronResult<bool> {
        self.train(input, expected)
    }

    fn predict(&self, input: &[f64]) -> PerceptronResult<usize> {
        self.classify(input)
    }
}

/// Decision value of one weight row (bias first) against a feature vector.
fn row_score(row: &[f64], input: &[f64]) -> f64 {
    row[0] + dot(&row[1..], input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_perceptron_classifies_everything_as_class_zero() {
        let p = MultiClassPerceptron::new(2, 3, 0.1);
        assert_eq!(p.class_count(), 3);
        assert_eq!(p.input_dim(), 2);
        assert_eq!(p.classify(&[0.0, 0.0]).unwrap(), 0);
        assert_eq!(p.classify(&[3.0, -1.0]).unwrap(), 0);
    }

    #[test]
    fn classify_picks_highest_scoring_class() {
        let mut p = MultiClassPerceptron::new(2, 3, 0.1);
        p.set_weights(vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![-1.0, 0.0, 0.0],
        ])
        .unwrap();

        assert_eq!(p.classify(&[2.0, 1.0]).unwrap(), 0);
        assert_eq!(p.classify(&[1.0, 2.0]).unwrap(), 1);
        assert_eq!(p.scores(&[1.0, 2.0]).unwrap(), vec![1.0, 2.0, -1.0]);
    }

    #[test]
    fn tied_maximum_goes_to_lowest_class_index() {
        let mut p = MultiClassPerceptron::new(1, 3, 0.1);
        p.set_weights(vec![vec![0.0, 0.0], vec![2.0, 0.0], vec![2.0, 0.0]])
            .unwrap();

        // Classes 1 and 2 tie at 2.0; the scan keeps the earlier winner.
        assert_eq!(p.classify(&[5.0]).unwrap(), 1);
    }

    #[test]
    fn score_validates_class_index() {
        let p = MultiClassPerceptron::new(2, 3, 0.1);
        assert_eq!(p.score(2, &[0.0, 0.0]).unwrap(), 0.0);

        let err = p.score(3, &[0.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            PerceptronError::ClassOutOfRange {
                class: 3,
                class_count: 3,
            }
        );
    }

    #[test]
    fn train_on_correct_example_leaves_weights_alone() {
        let mut p = MultiClassPerceptron::new(2, 3, 0.1);
        let before = p.weights().to_vec();

        // All scores tie at zero, so class 0 is already the prediction.
        assert_eq!(p.train(&[1.0, 1.0], 0).unwrap(), true);
        assert_eq!(p.weights(), before.as_slice());
    }

    #[test]
    fn failed_train_touches_exactly_two_rows() {
        let mut p = MultiClassPerceptron::new(2, 3, 0.1);

        // Prediction is class 0 (all-zero tie), expected is class 1.
        assert_eq!(p.train(&[2.0, 0.0], 1).unwrap(), false);
        assert_eq!(p.weights()[0], vec![-0.1, -0.2, 0.0]);
        assert_eq!(p.weights()[1], vec![0.1, 0.2, 0.0]);
        assert_eq!(p.weights()[2], vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn train_rejects_out_of_range_class_before_updating() {
        let mut p = MultiClassPerceptron::new(2, 3, 0.1);
        let before = p.weights().to_vec();

        let err = p.train(&[1.0, 1.0], 3).unwrap_err();
        assert_eq!(
            err,
            PerceptronError::ClassOutOfRange {
                class: 3,
                class_count: 3,
            }
        );
        assert_eq!(p.weights(), before.as_slice());
    }

    #[test]
    fn dimension_check_runs_before_class_check() {
        let mut p = MultiClassPerceptron::new(2, 3, 0.1);

        let err = p.train(&[1.0], 7).unwrap_err();
        assert_eq!(
            err,
            PerceptronError::DimensionMismatch {
                expected: 2,
                got: 1,
                context: "input features",
            }
        );
    }

    #[test]
    fn set_weights_validates_shape() {
        let mut p = MultiClassPerceptron::new(2, 3, 0.1);

        let err = p.set_weights(vec![vec![0.0; 3]; 2]).unwrap_err();
        assert_eq!(
            err,
            PerceptronError::DimensionMismatch {
                expected: 3,
                got: 2,
                context: "weight matrix rows",
            }
        );

        let err = p
            .set_weights(vec![vec![0.0; 3], vec![0.0; 4], vec![0.0; 3]])
            .unwrap_err();
        assert_eq!(
            err,
            PerceptronError::DimensionMismatch {
                expected: 3,
                got: 4,
                context: "weight matrix row",
            }
        );
        assert_eq!(p.weights(), vec![vec![0.0; 3]; 3].as_slice());

        p.set_weights(vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![0.5, 0.0, 0.0],
        ])
        .unwrap();
        assert_eq!(p.classify(&[0.0, 0.0]).unwrap(), 2);
    }

    #[test]
    fn json_round_trip_preserves_state() {
        let mut p = MultiClassPerceptron::new(2, 3, 0.1);
        p.train(&[2.0, 0.0], 1).unwrap();

        let json = serde_json::to_string(&p).unwrap();
        let restored: MultiClassPerceptron = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.weights(), p.weights());
        assert_eq!(restored.class_count(), p.class_count());
        assert_eq!(restored.input_dim(), p.input_dim());
        assert_eq!(
            restored.classify(&[2.0, 0.0]).unwrap(),
            p.classify(&[2.0, 0.0]).unwrap()
        );
    }
}
