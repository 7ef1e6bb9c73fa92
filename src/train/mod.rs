pub mod loop_fn;
pub mod pass_stats;
pub mod trainer;

pub use loop_fn::{accuracy, train_set, train_set_with};
pub use pass_stats::PassStats;
pub use trainer::fit;
