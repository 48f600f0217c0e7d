use std::sync::Arc;

use crate::domain::cart::CartRepository;

pub struct CartCommandService {
    pub(super) cart_repo: Arc<dyn CartRepository>,
}

impl CartCommandService {
    pub fn new(cart_repo: Arc<dyn CartRepository>) -> Self {
        Self { cart_repo }
    }
}
