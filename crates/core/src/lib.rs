//! # McDonald Core
//!
//! Core decision logic for the 2024 McDonald criteria for multiple sclerosis.
//!
//! This crate contains pure data operations only:
//! - The findings record and its value types
//! - The classifier mapping findings to a verdict, plus the multi-scenario comparison
//! - A caller-owned collector for step-by-step findings entry
//! - Plain-text presentation and YAML findings documents
//!
//! **No API concerns**: HTTP/gRPC servers and authentication belong in `api-grpc`, `api-rest`
//! or `api-shared`.

pub mod classifier;
pub mod collector;
pub mod constants;
pub mod error;
pub mod evidence;
pub mod findings;
pub mod location;
pub mod presenter;
pub mod scenario;
pub mod verdict;
pub mod wire;

pub use classifier::{classify, classify_as, compare_scenarios, ScenarioComparison};
pub use collector::{Collector, Outcome, Role, Step};
pub use error::{CriteriaError, CriteriaResult};
pub use findings::Findings;
pub use location::AnatomicalLocation;
pub use presenter::Presenter;
pub use scenario::ClinicalScenario;
pub use verdict::{DiagnosisStatus, EvidenceSummary, Verdict};
pub use wire::FindingsDocument;
