mod batch;

pub use batch::{BatchError, IncomeRecord, SplitBatch, SplitRecord};
