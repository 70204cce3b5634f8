//! Memoized agent construction.
//!
//! [`AgentBuilder`] owns a factory closure and builds the agent at most once
//! per builder. `main` creates one builder and passes it (as
//! `Arc<AgentBuilder>`) to every consumer, so the HTTP clients behind the
//! agent are shared for the lifetime of the process.

use crate::ports::agent::{Agent, AgentBuildError};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

type AgentFactory = dyn Fn() -> Result<Arc<dyn Agent>, AgentBuildError> + Send + Sync;

/// Lazily constructs and caches one [`Agent`].
pub struct AgentBuilder {
    factory: Box<AgentFactory>,
    agent: OnceCell<Arc<dyn Agent>>,
}

impl AgentBuilder {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn Agent>, AgentBuildError> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
            agent: OnceCell::new(),
        }
    }

    /// Builder around an already constructed agent.
    pub fn from_agent(agent: Arc<dyn Agent>) -> Self {
        Self {
            factory: Box::new(|| {
                Err(AgentBuildError::Configuration(
                    "agent was provided pre-built".to_string(),
                ))
            }),
            agent: OnceCell::new_with(Some(agent)),
        }
    }

    /// Return the agent, constructing it on first call.
    ///
    /// Every successful call returns the same `Arc`. A failed construction
    /// is not cached; the next call runs the factory again.
    pub async fn build(&self) -> Result<Arc<dyn Agent>, AgentBuildError> {
        let agent = self
            .agent
            .get_or_try_init(|| async {
                info!("Constructing agent");
                (self.factory)()
            })
            .await?;
        debug!("Using memoized agent");
        Ok(Arc::clone(agent))
    }

    pub fn is_built(&self) -> bool {
        self.agent.initialized()
    }
}

impl std::fmt::Debug for AgentBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentBuilder")
            .field("built", &self.is_built())
            .finish()
    }
}
