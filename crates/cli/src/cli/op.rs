use std::error::Error;
use std::path::PathBuf;

use common::wiki::Wiki;
use wiki_cli::{AppState, Seed, SeedError, StateError};

#[derive(Debug, Clone)]
pub struct OpContext {
    /// Optional custom config path (defaults to ~/.wiki)
    pub config_path: Option<PathBuf>,
    /// Optional seed file overriding the configured one
    pub seed: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Seed(#[from] SeedError),
}

impl OpContext {
    pub fn new(config_path: Option<PathBuf>, seed: Option<PathBuf>) -> Self {
        Self { config_path, seed }
    }

    pub fn state(&self) -> Result<AppState, StateError> {
        AppState::load(self.config_path.clone())
    }

    /// The configured log level, or INFO when there is no usable config
    pub fn log_level(&self) -> tracing::Level {
        self.state()
            .and_then(|state| state.config.log_level())
            .unwrap_or(tracing::Level::INFO)
    }

    /// Resolve the seed file: explicit `--seed` flag > config `seed_file` > `seed.toml`
    pub fn seed_path(&self) -> Result<PathBuf, StateError> {
        if let Some(path) = &self.seed {
            return Ok(path.clone());
        }
        Ok(self.state()?.seed_path())
    }

    /// Build the in-memory wiki described by the seed file
    pub fn load_wiki(&self) -> Result<Wiki, ContextError> {
        let path = self.seed_path()?;
        Ok(Seed::load(&path)?.build()?)
    }
}

#[async_trait::async_trait]
pub trait Op: Send + Sync {
    type Error: Error + Send + Sync + 'static;
    type Output;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error>;
}

#[macro_export]
macro_rules! command_enum {
    ($(($variant:ident, $type:ty)),* $(,)?) => {
        #[derive(Subcommand, Debug, Clone)]
        pub enum Command {
            $($variant($type),)*
        }

        #[derive(Debug)]
        pub enum OpOutput {
            $($variant(<$type as $crate::cli::op::Op>::Output),)*
        }

        #[derive(Debug, thiserror::Error)]
        pub enum OpError {
            $(
                #[error(transparent)]
                $variant(<$type as $crate::cli::op::Op>::Error),
            )*
        }

        #[async_trait::async_trait]
        impl $crate::cli::op::Op for Command {
            type Output = OpOutput;
            type Error = OpError;

            async fn execute(&self, ctx: &$crate::cli::op::OpContext) -> Result<Self::Output, Self::Error> {
                match self {
                    $(
                        Command::$variant(op) => {
                            op.execute(ctx).await
                                .map(OpOutput::$variant)
                                .map_err(OpError::$variant)
                        },
                    )*
                }
            }
        }

        impl std::fmt::Display for OpOutput {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        OpOutput::$variant(output) => write!(f, "{}", output),
                    )*
                }
            }
        }
    };
}
