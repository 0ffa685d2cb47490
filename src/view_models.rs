// src/view_models.rs

use crate::judge::RoundScore;
use crate::model::{ScoreAggregate, Tense};

/// Tarjeta de la pantalla de inicio: un modo de práctica por tarjeta.
#[derive(Clone, Debug)]
pub struct TenseCard {
    pub tense: Tense,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Las seis tarjetas, en el orden en que se muestran.
pub fn tense_cards() -> [TenseCard; 6] {
    [
        TenseCard {
            tense: Tense::Presente,
            title: "Presente",
            subtitle: "Regulares e irregulares",
        },
        TenseCard {
            tense: Tense::Indefinido,
            title: "Pretérito indefinido",
            subtitle: "El pasado simple",
        },
        TenseCard {
            tense: Tense::Imperfecto,
            title: "Pretérito imperfecto",
            subtitle: "Hábitos y descripciones",
        },
        TenseCard {
            tense: Tense::Compuesto,
            title: "Pretérito compuesto",
            subtitle: "«haber» + participio",
        },
        TenseCard {
            tense: Tense::FuturoSimple,
            title: "Futuro simple",
            subtitle: "Infinitivo + desinencia",
        },
        TenseCard {
            tense: Tense::FuturoIrA,
            title: "Ir a + infinitivo",
            subtitle: "Futuro perifrástico",
        },
    ]
}

/// Texto de corrección junto a un hueco ya comprobado.
pub fn verdict_label(ok: bool, solution: &str) -> String {
    if ok {
        "✅".to_string()
    } else {
        format!("❌ {solution}")
    }
}

pub fn ronda_label(score: &RoundScore) -> String {
    format!("Ronda: {}", score.fraccion())
}

pub fn marcador_label(score: &ScoreAggregate) -> String {
    format!("Marcador: {}", score.texto())
}
