use crate::modules::movie::repository::MovieRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieRepository>,
}

impl AppState {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }
}
