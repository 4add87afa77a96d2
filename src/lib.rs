//! VoiceCheckr - Deepfake voice detection client
//!
//! Uploads a recording to a detection service and renders the structured
//! verdict it returns: fake, real or uncertain, with the detection score,
//! confidence and a per-method breakdown.
//!
//! ## Module Structure
//!
//! - `config` - Detection methods and client settings
//! - `detection` - Result types decoded from the service
//! - `client` - Upload form, transport seam and reqwest transport
//! - `ui` - Upload-and-render controller and the page contract it drives
//! - `export` - Batch prediction export
//! - `cli` - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use voicecheckr::{ClientConfig, DetectionMethod, HttpTransport, PageState, SelectedFile, UploadController};
//!
//! let config = ClientConfig::default();
//! let transport = HttpTransport::new(&config)?;
//! let mut controller = UploadController::new(PageState::default(), transport, config);
//!
//! controller.on_file_selected(Some(SelectedFile::from_path("sample.wav")?));
//! controller.select_method(DetectionMethod::Hybrid);
//! let result = controller.submit()?;
//!
//! println!("{} ({:.0}%)", result.verdict.label(), result.score * 100.0);
//! ```
//!
//! ## Methods
//!
//! | Method | Breakdown rows                     |
//! |--------|------------------------------------|
//! | rule   | none                               |
//! | ml     | Logistic Regression, SVM Score     |
//! | hybrid | Rule-Based Score, ML-Based Score   |

// Client settings
pub mod config;

// Detection result types
pub mod detection;

// Failure taxonomy
pub mod error;

// Network side
pub mod client;

// Controller and rendering
pub mod ui;

// Batch export
pub mod export;

// Command-line interface
pub mod cli;

pub use client::{HttpReply, HttpTransport, SelectedFile, Transport, UploadForm};
pub use config::{ClientConfig, DetectionMethod};
pub use detection::{DetectionResult, MethodDetails, Verdict};
pub use error::{SubmitError, TransportError};
pub use ui::{PageState, ResultDetails, UploadController, View};
