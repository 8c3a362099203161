//! Jobscout engine: file encoding, the Gemini client, the background engine
//! and the local key-value store.
mod encode;
mod engine;
mod gemini;
mod prompts;
mod store;
mod types;
mod wire;

pub use encode::{encode_bytes, encode_file, EncodeError, EncodedAttachment, MAX_ATTACHMENT_BYTES};
pub use engine::EngineHandle;
pub use gemini::{
    GeminiClient, GeminiSettings, JobSearcher, ResumeAnalyzer, DEFAULT_BASE_URL, DEFAULT_MODEL,
    NO_RESULTS_TEXT,
};
pub use prompts::{analysis_schema, search_prompt, ANALYSIS_INSTRUCTIONS, PRIORITY_PLATFORMS};
pub use store::{load_json, save_json, FileStore, KeyValueStore, MemoryStore, StoreError};
pub use types::{EngineEvent, EngineStopped, FailureKind, ServiceError};
