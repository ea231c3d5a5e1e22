// Application state for HTTP handlers
use crate::application::category_service::CategoryService;
use crate::application::fold_service::FoldService;

#[derive(Clone)]
pub struct AppState {
    pub category_service: CategoryService,
    pub fold_service: FoldService,
}
