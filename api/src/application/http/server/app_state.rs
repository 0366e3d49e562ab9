use std::sync::Arc;

use foodsense_core::application::FoodsenseService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodsenseService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FoodsenseService) -> Self {
        Self { args, service }
    }
}
