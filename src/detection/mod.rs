//! Detection module for VoiceCheckr

mod result;

pub use result::{DetectionResult, ErrorBody, HybridScores, HybridWeights, MethodDetails, MlScores, Verdict};
