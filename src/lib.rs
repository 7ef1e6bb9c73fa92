pub mod error;
pub mod math;
pub mod perceptron;
pub mod train;

// Convenience re-exports
pub use error::{PerceptronError, PerceptronResult};
pub use perceptron::binary::BinaryPerceptron;
pub use perceptron::learner::OnlineLearner;
pub use perceptron::multiclass::MultiClassPerceptron;
pub use train::loop_fn::{accuracy, train_set, train_set_with};
pub use train::pass_stats::PassStats;
pub use train::trainer::fit;
