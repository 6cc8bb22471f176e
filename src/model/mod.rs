pub mod criteria;
pub mod features;
pub mod lexicon;
pub mod result;
pub mod thresholds;
