pub mod types;

pub use types::{
    AnalysisSnapshot, Badge, CustomPredicate, ProgressReport, Requirement, RequirementCheck,
    RequirementKind, RequirementStatus, SessionProgress, Suggestion,
};
