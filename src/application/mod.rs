// Application layer - Use cases over the category repository
pub mod category_repository;
pub mod category_service;
pub mod fold_service;
