pub mod stage1_features;
pub mod stage2_scores;
pub mod stage3_evaluate;
