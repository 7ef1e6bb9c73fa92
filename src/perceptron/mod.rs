pub mod binary;
pub mod learner;
pub mod multiclass;

pub use binary::BinaryPerceptron;
pub use learner::OnlineLearner;
pub use multiclass::MultiClassPerceptron;
