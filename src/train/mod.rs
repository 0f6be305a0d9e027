pub mod trainer;
pub mod epoch_stats;
pub mod evaluate;
pub mod loop_fn;

pub use trainer::train_instance;
pub use epoch_stats::EpochStats;
pub use evaluate::accuracy;
pub use loop_fn::train_loop;
