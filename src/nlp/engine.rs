// Intent engine seam. The chat loop only depends on this trait; the
// emotion classifier is the fallback when the engine has nothing to say.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    pub response: String,
}

/// Outcome of one engine evaluation. `NotReady` replaces the original
/// exception-on-untrained behavior with a plain variant the caller branches
/// on; `Matched` with an empty vec means no intent fired.
#[derive(Debug, Clone)]
pub enum EngineResult {
    NotReady,
    Matched(Vec<Intent>),
}

pub trait IntentEngine {
    fn evaluate(&self, text: &str) -> EngineResult;
}

/// Engine with no workspace loaded. Always reports `NotReady`, which sends
/// every input to the emotion classifier.
#[derive(Debug, Default)]
pub struct UntrainedEngine;

impl IntentEngine for UntrainedEngine {
    fn evaluate(&self, _text: &str) -> EngineResult {
        EngineResult::NotReady
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untrained_engine_is_not_ready() {
        let engine = UntrainedEngine;
        assert!(matches!(engine.evaluate("hola"), EngineResult::NotReady));
    }

    #[test]
    fn test_intent_serialization() {
        let intent = Intent {
            response: "¡Hola! ¿Cómo te sientes hoy?".to_string(),
        };
        let json = serde_json::to_string(&intent).unwrap();
        let back: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(intent.response, back.response);
    }
}
