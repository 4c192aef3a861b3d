// NLP modules for Psicolobo
pub mod emotion;
pub mod engine;
pub mod lexicon;

pub use emotion::{detect_emotion, Detection};
pub use engine::{EngineResult, IntentEngine, UntrainedEngine};
pub use lexicon::Lexicon;
