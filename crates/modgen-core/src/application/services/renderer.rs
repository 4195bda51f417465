//! Stub rendering.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::error::AppResult;
use crate::application::ports::output::StubSource;
use crate::domain::entities::context::StubContext;
use crate::domain::stubs::StubId;

/// Fetches stub bodies from the injected source and substitutes the
/// placeholder tokens.
pub struct StubRenderer {
    source: Arc<dyn StubSource>,
}

impl StubRenderer {
    pub fn new(source: Arc<dyn StubSource>) -> Self {
        Self { source }
    }

    #[instrument(skip(self, context))]
    pub fn render(&self, id: StubId, context: &StubContext) -> AppResult<String> {
        let body = self.source.fetch(id)?;
        debug!(stub = %id, bytes = body.len(), "stub fetched");
        Ok(context.render(&body))
    }
}
