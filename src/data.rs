// src/data.rs

use serde::Deserialize;

use crate::model::{Forms, Tense, VerbClass, VerbEntry};

/// Registro del YAML tal como se escribe a mano: el infinitivo a secas
/// para los regulares, o un mapa con `stem:` / `forms:` para el resto.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawVerb {
    Simple(String),
    Detailed {
        infinitive: String,
        #[serde(default)]
        class: Option<VerbClass>,
        #[serde(default)]
        stem: Option<String>,
        #[serde(default)]
        forms: Option<Forms>,
    },
}

#[derive(Debug, Deserialize)]
struct RawBank {
    presente: Vec<RawVerb>,
    indefinido: Vec<RawVerb>,
    imperfecto: Vec<RawVerb>,
    compuesto: Vec<RawVerb>,
    futuro_simple: Vec<RawVerb>,
    futuro_ir_a: Vec<RawVerb>,
}

/// Catálogos ya convertidos a entradas etiquetadas, uno por tiempo.
pub struct VerbBank {
    presente: Vec<VerbEntry>,
    indefinido: Vec<VerbEntry>,
    imperfecto: Vec<VerbEntry>,
    compuesto: Vec<VerbEntry>,
    futuro_simple: Vec<VerbEntry>,
    futuro_ir_a: Vec<VerbEntry>,
}

impl VerbBank {
    pub fn catalog(&self, tense: Tense) -> &[VerbEntry] {
        match tense {
            Tense::Presente => &self.presente,
            Tense::Indefinido => &self.indefinido,
            Tense::Imperfecto => &self.imperfecto,
            Tense::Compuesto => &self.compuesto,
            Tense::FuturoSimple => &self.futuro_simple,
            Tense::FuturoIrA => &self.futuro_ir_a,
        }
    }

    pub fn total_entries(&self) -> usize {
        Tense::ALL.iter().map(|t| self.catalog(*t).len()).sum()
    }
}

/// Carga el banco de verbos desde el YAML embebido
pub fn read_verbs_embedded() -> VerbBank {
    let file_content = include_str!("data/verbs.yaml");
    let raw: RawBank =
        serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de verbos YAML");
    VerbBank {
        presente: convert(raw.presente),
        indefinido: convert(raw.indefinido),
        imperfecto: convert(raw.imperfecto),
        compuesto: convert(raw.compuesto),
        futuro_simple: convert(raw.futuro_simple),
        futuro_ir_a: convert(raw.futuro_ir_a),
    }
}

fn convert(raw: Vec<RawVerb>) -> Vec<VerbEntry> {
    raw.into_iter().map(entry_from_raw).collect()
}

// Un registro con `forms:` es irregular total aunque traiga más claves.
fn entry_from_raw(raw: RawVerb) -> VerbEntry {
    match raw {
        RawVerb::Simple(infinitive) => VerbEntry::Regular {
            class: class_of(&infinitive),
            infinitive,
        },
        RawVerb::Detailed {
            infinitive,
            class,
            stem,
            forms,
        } => {
            if let Some(forms) = forms {
                return VerbEntry::FullIrregular { infinitive, forms };
            }
            let class = class.unwrap_or_else(|| class_of(&infinitive));
            match stem {
                Some(stem) => VerbEntry::StemIrregular {
                    infinitive,
                    class,
                    stem,
                },
                None => VerbEntry::Regular { infinitive, class },
            }
        }
    }
}

fn class_of(infinitive: &str) -> VerbClass {
    VerbClass::from_infinitive(infinitive)
        .unwrap_or_else(|| panic!("Verbo del banco sin clase reconocible: {infinitive}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conjugation::conjugate;
    use crate::model::Person;

    #[test]
    fn bank_parses_and_every_entry_conjugates() {
        let bank = read_verbs_embedded();
        for tense in Tense::ALL {
            let catalog = bank.catalog(tense);
            assert!(!catalog.is_empty(), "catálogo vacío: {tense:?}");
            for entry in catalog {
                let forms = conjugate(entry, tense);
                for p in Person::TODAS {
                    assert!(
                        !forms.get(p).is_empty(),
                        "forma vacía: {} / {tense:?} / {p:?}",
                        entry.infinitive()
                    );
                }
            }
        }
        assert!(bank.total_entries() > 50);
    }

    #[test]
    fn detailed_records_may_state_the_class() {
        // La clave `class:` es opcional; si viene, manda sobre la
        // derivación por sufijo.
        let yaml = "\
- infinitive: aprender
  class: er
- infinitive: saber
  class: er
  stem: sabr
";
        let raw: Vec<RawVerb> = serde_yaml::from_str(yaml).expect("registros válidos");
        assert_eq!(
            convert(raw),
            vec![
                VerbEntry::Regular {
                    infinitive: "aprender".to_string(),
                    class: VerbClass::Er,
                },
                VerbEntry::StemIrregular {
                    infinitive: "saber".to_string(),
                    class: VerbClass::Er,
                    stem: "sabr".to_string(),
                },
            ]
        );
    }

    #[test]
    fn presente_mixes_regular_and_full_irregular() {
        let bank = read_verbs_embedded();
        let presente = bank.catalog(Tense::Presente);
        assert_eq!(presente.len(), 6);
        assert_eq!(presente.iter().filter(|e| e.is_irregular()).count(), 3);

        let ir = presente.iter().find(|e| e.infinitive() == "ir").unwrap();
        assert_eq!(conjugate(ir, Tense::Presente).yo, "voy");
        let tener = presente.iter().find(|e| e.infinitive() == "tener").unwrap();
        assert_eq!(conjugate(tener, Tense::Presente).vos, "tenéis");
    }

    #[test]
    fn indefinido_decir_uses_full_forms() {
        let bank = read_verbs_embedded();
        let decir = bank
            .catalog(Tense::Indefinido)
            .iter()
            .find(|e| e.infinitive() == "decir")
            .unwrap();
        let forms = conjugate(decir, Tense::Indefinido);
        assert_eq!(forms.yo, "dije");
        assert_eq!(forms.el, "dijo");
        assert_eq!(forms.ellos, "dijeron");
    }

    #[test]
    fn ir_and_ser_share_indefinido_forms() {
        let bank = read_verbs_embedded();
        let catalog = bank.catalog(Tense::Indefinido);
        let ir = catalog.iter().find(|e| e.infinitive() == "ir").unwrap();
        let ser = catalog.iter().find(|e| e.infinitive() == "ser").unwrap();
        assert_eq!(
            conjugate(ir, Tense::Indefinido),
            conjugate(ser, Tense::Indefinido)
        );
    }

    #[test]
    fn imperfecto_keeps_its_three_irregulars() {
        let bank = read_verbs_embedded();
        let catalog = bank.catalog(Tense::Imperfecto);
        let irregulares: Vec<&str> = catalog
            .iter()
            .filter(|e| e.is_irregular())
            .map(|e| e.infinitive())
            .collect();
        assert_eq!(irregulares, ["ir", "ser", "ver"]);

        let ir = catalog.iter().find(|e| e.infinitive() == "ir").unwrap();
        assert_eq!(conjugate(ir, Tense::Imperfecto).nos, "íbamos");
        let ver = catalog.iter().find(|e| e.infinitive() == "ver").unwrap();
        assert_eq!(conjugate(ver, Tense::Imperfecto).yo, "veía");
    }

    #[test]
    fn futuro_catalog_carries_stem_overrides() {
        let bank = read_verbs_embedded();
        let tener = bank
            .catalog(Tense::FuturoSimple)
            .iter()
            .find(|e| e.infinitive() == "tener")
            .unwrap();
        assert!(matches!(tener, VerbEntry::StemIrregular { stem, .. } if stem == "tendr"));
        assert_eq!(conjugate(tener, Tense::FuturoSimple).yo, "tendré");
    }

    #[test]
    fn compuesto_entries_are_regular_with_table_participles() {
        let bank = read_verbs_embedded();
        let catalog = bank.catalog(Tense::Compuesto);
        assert!(catalog.iter().all(|e| !e.is_irregular()));

        let hacer = catalog.iter().find(|e| e.infinitive() == "hacer").unwrap();
        assert_eq!(conjugate(hacer, Tense::Compuesto).yo, "he hecho");
        let freir = catalog.iter().find(|e| e.infinitive() == "freír").unwrap();
        assert_eq!(conjugate(freir, Tense::Compuesto).ellos, "han frito");
    }

    #[test]
    fn ir_a_catalog_builds_periphrasis() {
        let bank = read_verbs_embedded();
        let viajar = bank
            .catalog(Tense::FuturoIrA)
            .iter()
            .find(|e| e.infinitive() == "viajar")
            .unwrap();
        assert_eq!(conjugate(viajar, Tense::FuturoIrA).nos, "vamos a viajar");
    }
}
