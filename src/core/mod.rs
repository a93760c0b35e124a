pub mod config;
pub mod error;
pub mod lineage_graph;
pub mod recorder;
pub mod suffix;

pub use config::{
    ConfigLoader, ConfigValidator, Direction, DuplicatePolicy, LineageConfig, RecordingConfig,
    RenderConfig,
};
pub use error::{DefaultErrorReporter, ErrorCategory, ErrorReporter, LineageError};
pub use lineage_graph::{LineageGraphRenderer, RenderMode};
pub use recorder::{EntryOutcome, LineageRecorder, LineageSource, Parent, RecordingSwitch};
pub use suffix::SuffixGenerator;
