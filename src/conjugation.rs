// src/conjugation.rs
use crate::model::{Forms, Tense, VerbClass, VerbEntry};

// Desinencias en orden de persona: yo, tú, él, nosotros, vosotros, ellos.
const PRESENTE_AR: [&str; 6] = ["o", "as", "a", "amos", "áis", "an"];
const PRESENTE_ER: [&str; 6] = ["o", "es", "e", "emos", "éis", "en"];
const PRESENTE_IR: [&str; 6] = ["o", "es", "e", "imos", "ís", "en"];

const INDEFINIDO_AR: [&str; 6] = ["é", "aste", "ó", "amos", "asteis", "aron"];
const INDEFINIDO_ER_IR: [&str; 6] = ["í", "iste", "ió", "imos", "isteis", "ieron"];

const IMPERFECTO_AR: [&str; 6] = ["aba", "abas", "aba", "ábamos", "abais", "aban"];
const IMPERFECTO_ER_IR: [&str; 6] = ["ía", "ías", "ía", "íamos", "íais", "ían"];

// El futuro simple comparte desinencias para las tres clases.
const FUTURO: [&str; 6] = ["é", "ás", "á", "emos", "éis", "án"];

/// Presente de «haber», auxiliar del pretérito compuesto.
const HABER_PRESENTE: [&str; 6] = ["he", "has", "ha", "hemos", "habéis", "han"];

/// Presente de «ir», base del futuro perifrástico.
const IR_PRESENTE: [&str; 6] = ["voy", "vas", "va", "vamos", "vais", "van"];

/// Participios que no siguen el patrón -ado/-ido.
const PARTICIPIOS_IRREGULARES: [(&str, &str); 10] = [
    ("hacer", "hecho"),
    ("decir", "dicho"),
    ("ver", "visto"),
    ("poner", "puesto"),
    ("escribir", "escrito"),
    ("abrir", "abierto"),
    ("romper", "roto"),
    ("volver", "vuelto"),
    ("morir", "muerto"),
    ("freír", "frito"),
];

/// Conjuga una entrada del banco en el tiempo pedido.
///
/// La precedencia la fija la propia variante: una entrada con las seis
/// formas escritas a mano las devuelve tal cual, una raíz irregular
/// sustituye a la raíz regular, y el resto compone raíz + desinencia.
/// Es una función total: todo verbo del banco produce seis formas.
pub fn conjugate(entry: &VerbEntry, tense: Tense) -> Forms {
    let (infinitive, class, stem) = match entry {
        VerbEntry::FullIrregular { forms, .. } => return forms.clone(),
        VerbEntry::Regular { infinitive, class } => (infinitive.as_str(), *class, None),
        VerbEntry::StemIrregular {
            infinitive,
            class,
            stem,
        } => (infinitive.as_str(), *class, Some(stem.as_str())),
    };

    match tense {
        Tense::Presente | Tense::Indefinido | Tense::Imperfecto => {
            let tabla = match tense {
                Tense::Presente => desinencias_presente(class),
                Tense::Indefinido => desinencias_indefinido(class),
                _ => desinencias_imperfecto(class),
            };
            let base = stem.unwrap_or_else(|| stem_of(infinitive));
            Forms::build(|p| format!("{}{}", base, tabla[p.index()]))
        }
        // El futuro se monta sobre el infinitivo entero, no sobre la raíz.
        Tense::FuturoSimple => {
            let base = stem.unwrap_or(infinitive);
            Forms::build(|p| format!("{}{}", base, FUTURO[p.index()]))
        }
        Tense::Compuesto => {
            let participio = participio(infinitive, class, stem);
            Forms::build(|p| format!("{} {}", HABER_PRESENTE[p.index()], participio))
        }
        Tense::FuturoIrA => {
            Forms::build(|p| format!("{} a {}", IR_PRESENTE[p.index()], infinitive))
        }
    }
}

/// Raíz regular: el infinitivo sin sus dos últimos caracteres.
/// Se corta por caracteres, no por bytes («freír» → «fre»).
fn stem_of(infinitive: &str) -> &str {
    match infinitive.char_indices().rev().nth(1) {
        Some((i, _)) => &infinitive[..i],
        None => "",
    }
}

fn desinencias_presente(class: VerbClass) -> &'static [&'static str; 6] {
    match class {
        VerbClass::Ar => &PRESENTE_AR,
        VerbClass::Er => &PRESENTE_ER,
        VerbClass::Ir => &PRESENTE_IR,
    }
}

fn desinencias_indefinido(class: VerbClass) -> &'static [&'static str; 6] {
    match class {
        VerbClass::Ar => &INDEFINIDO_AR,
        VerbClass::Er | VerbClass::Ir => &INDEFINIDO_ER_IR,
    }
}

fn desinencias_imperfecto(class: VerbClass) -> &'static [&'static str; 6] {
    match class {
        VerbClass::Ar => &IMPERFECTO_AR,
        VerbClass::Er | VerbClass::Ir => &IMPERFECTO_ER_IR,
    }
}

/// Participio pasado: primero la tabla de irregulares, después -ado/-ido.
fn participio(infinitive: &str, class: VerbClass, stem: Option<&str>) -> String {
    if let Some((_, irregular)) = PARTICIPIOS_IRREGULARES
        .iter()
        .find(|(inf, _)| *inf == infinitive)
    {
        return (*irregular).to_string();
    }
    let sufijo = match class {
        VerbClass::Ar => "ado",
        VerbClass::Er | VerbClass::Ir => "ido",
    };
    format!("{}{}", stem.unwrap_or_else(|| stem_of(infinitive)), sufijo)
}
