// Dashboard graph category folds: domain model, codecs, configuration and HTTP service
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
