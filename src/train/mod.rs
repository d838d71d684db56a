pub mod trainer;
pub mod epoch_stats;
pub mod train_config;
pub mod report;
pub mod loop_fn;

pub use trainer::train_sample;
pub use epoch_stats::EpochStats;
pub use train_config::{TrainConfig, EARLY_STOP_FLOOR};
pub use report::TrainReport;
pub use loop_fn::train_loop;
