use std::sync::Arc;

use services::{Clock, QuizService};

pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizService>;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    /// Clock used to time card reveals.
    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
