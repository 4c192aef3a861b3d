// Console conversation loop. Kept behind BufRead/WriteColor so the loop is
// testable with in-memory buffers; all bot state travels in BotContext.
use anyhow::Result;
use std::io::{BufRead, Write};
use termcolor::{Color, ColorSpec, WriteColor};

use crate::nlp::{detect_emotion, Detection, EngineResult, IntentEngine, Lexicon};

pub struct BotContext {
    pub lexicon: Lexicon,
    pub engine: Box<dyn IntentEngine>,
}

/// Read-eval-print loop: intents first, emotion detection as fallback.
/// Terminates on EOF or on a case-insensitive "salir"/"exit" line.
pub fn run_chat<R, W>(mut input: R, mut out: W, ctx: &BotContext) -> Result<()>
where
    R: BufRead,
    W: WriteColor,
{
    writeln!(out, "¡Hola! Soy Psicolobo. Escribe 'salir' para terminar.")?;

    let mut line = String::new();
    loop {
        write!(out, "Tú: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if is_exit(text) {
            break;
        }

        let reply = match ctx.engine.evaluate(text) {
            EngineResult::Matched(intents) if !intents.is_empty() => intents[0].response.clone(),
            // No intent fired, or the engine was never trained: use the
            // emotion classifier instead.
            EngineResult::Matched(_) | EngineResult::NotReady => {
                emotion_reply(text, ctx, &mut out)?
            }
        };
        bot_say(&mut out, &reply)?;
    }
    Ok(())
}

fn is_exit(text: &str) -> bool {
    let lowered = text.to_lowercase();
    lowered == "salir" || lowered == "exit"
}

fn emotion_reply<W: WriteColor>(text: &str, ctx: &BotContext, out: &mut W) -> Result<String> {
    let detection = detect_emotion(text, &ctx.lexicon);
    log_detection(out, &detection)?;
    let reply = match &detection.dominant {
        Some(dom) => format!(
            "Percibo que podrías estar sintiendo algo como '{}'. ¿Quieres hablar de eso?",
            dom.emotion
        ),
        None => {
            "No estoy seguro de entender completamente. ¿Puedes decírmelo de otra forma?"
                .to_string()
        }
    };
    Ok(reply)
}

fn log_detection<W: Write>(out: &mut W, detection: &Detection) -> Result<()> {
    writeln!(out, "\n--- Iniciando Detección de Emoción ---")?;
    for m in &detection.matches {
        writeln!(
            out,
            "  -> Coincidencia encontrada: '{}' se parece a '{}' (Emoción: {}, Similitud: {}%)",
            m.token, m.term, m.emotion, m.score
        )?;
    }
    match &detection.dominant {
        Some(dom) => writeln!(
            out,
            "--- Detección finalizada. Emoción dominante: {} (Conteo: {}) ---\n",
            dom.emotion, dom.count
        )?,
        None => writeln!(out, "--- No se detectaron emociones claras. ---")?,
    }
    Ok(())
}

fn bot_say<W: WriteColor>(out: &mut W, msg: &str) -> Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "Bot: ")?;
    out.reset()?;
    writeln!(out, "{}", msg)?;
    Ok(())
}
