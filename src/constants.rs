// src/constants.rs
//
// Application-wide constants. Inference parameters and the export file name are
// fixed on purpose and not exposed through configuration.

/// Key under which the whole note collection is stored.
///
/// Used in: `infrastructure/note_store.rs`
pub const STORAGE_KEY: &str = "smart-notes";

/// File name of every PDF export, written into the export directory.
///
/// Used in: `infrastructure/renderer.rs`
pub const EXPORT_FILE_NAME: &str = "smart-notes.pdf";

/// Default Hugging Face inference endpoint (without the `/models/...` suffix).
pub const DEFAULT_INFERENCE_ENDPOINT: &str = "https://api-inference.huggingface.co";

/// Environment variable holding the inference API token.
pub const API_KEY_ENV: &str = "HF_API_KEY";

/// Model used for both the summary and the flashcard request.
pub const MODEL_ID: &str = "mistralai/Mistral-7B-Instruct-v0.2";

// Sampling parameters sent with every generation request.
pub const MAX_NEW_TOKENS: u32 = 1000;
pub const TEMPERATURE: f32 = 0.7;
pub const TOP_P: f32 = 0.95;
pub const REPETITION_PENALTY: f32 = 1.15;

/// Number of source characters quoted in the fallback flashcard answer.
///
/// Used in: `infrastructure/card_parser.rs`
pub const FALLBACK_EXCERPT_CHARS: usize = 100;

// PDF layout, in millimetres unless noted otherwise.
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_LEFT_MM: f32 = 20.0;
pub const MARGIN_TOP_MM: f32 = 20.0;
/// A line whose baseline would land below this starts a new page.
pub const BOTTOM_LIMIT_MM: f32 = 270.0;
pub const CONTENT_WIDTH_MM: f32 = 170.0;
pub const LINE_HEIGHT_MM: f32 = 7.0;
pub const HEADING_SIZE_PT: f32 = 20.0;
pub const TITLE_SIZE_PT: f32 = 14.0;
pub const BODY_SIZE_PT: f32 = 12.0;
pub const GAP_AFTER_HEADING_MM: f32 = 20.0;
pub const GAP_AFTER_LABEL_MM: f32 = 10.0;
pub const GAP_AFTER_SUMMARY_MM: f32 = 20.0;
pub const GAP_AFTER_CARD_MM: f32 = 10.0;
/// Courier advance width as a fraction of the font size.
pub const MONO_GLYPH_EM: f32 = 0.6;
pub const MM_PER_PT: f32 = 25.4 / 72.0;
