pub mod app_config;
pub mod collections;
pub mod combination;
pub mod config;
pub mod dimensions;
pub mod editor;
pub mod error;
pub mod generator;
pub mod script;
pub mod submission;

pub use app_config::{AppConfig, Environment};
pub use collections::{CollectionRow, CollectionStore};
pub use combination::{Combination, CombinationKey, OptionPair, DEFAULT_PRICE};
pub use config::{load_app_config, load_app_config_from_env};
pub use dimensions::{Dimension, DimensionId, DimensionStore, OptionId, VariantOption};
pub use editor::VariantEditor;
pub use error::{ConfigError, EditError, ScriptError, SubmissionError};
pub use generator::generate;
pub use script::{
    load_session_script, parse_session_script, replay, EditStep, Notice, ReplayOutcome,
    SessionScript, SessionStart,
};
pub use submission::{build_submission, VariantSubmission, MIN_PRICE};
