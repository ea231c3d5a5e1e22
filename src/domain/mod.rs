// Domain layer - Graph categories, folds and the fold algorithm
pub mod category;
pub mod category_fold;
pub mod graph;
