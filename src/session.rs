// src/session.rs
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::conjugation::conjugate;
use crate::judge::{RoundScore, score_round};
use crate::model::{DrillItem, FilterMode, Forms, Person, Tense, VerbEntry};

/// Fase de la ronda en curso.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Answering,
    Checked,
}

/// Aplica el filtro al catálogo conservando el orden de publicación.
pub fn filter_pool(catalog: &[VerbEntry], filter: FilterMode) -> Vec<VerbEntry> {
    catalog
        .iter()
        .filter(|e| match filter {
            FilterMode::All => true,
            FilterMode::Regular => !e.is_irregular(),
            FilterMode::Irregular => e.is_irregular(),
        })
        .cloned()
        .collect()
}

/// Sesión de práctica sobre un tiempo y un filtro concretos.
///
/// La sesión alterna entre responder y ver la corrección; comprobar dos
/// veces seguidas no puntúa dos veces, y con el filtro sin resultados la
/// sesión queda inerte en vez de indexar un pool vacío.
pub struct DrillSession {
    tense: Tense,
    filter: FilterMode,
    pool: Vec<VerbEntry>,
    idx: usize,
    answers: Forms,
    phase: Phase,
    last: Option<RoundScore>,
    rng: StdRng,
}

impl DrillSession {
    pub fn new(catalog: &[VerbEntry], tense: Tense, filter: FilterMode) -> DrillSession {
        Self::with_rng(catalog, tense, filter, StdRng::from_os_rng())
    }

    /// Variante con generador inyectado; con semilla fija la secuencia
    /// de verbos es reproducible.
    pub fn with_rng(
        catalog: &[VerbEntry],
        tense: Tense,
        filter: FilterMode,
        rng: StdRng,
    ) -> DrillSession {
        let pool = filter_pool(catalog, filter);
        if pool.is_empty() {
            log::warn!("El filtro {filter:?} deja el catálogo de {tense:?} sin verbos");
        }
        DrillSession {
            tense,
            filter,
            pool,
            idx: 0,
            answers: Forms::default(),
            phase: Phase::Answering,
            last: None,
            rng,
        }
    }

    pub fn tense(&self) -> Tense {
        self.tense
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_checked(&self) -> bool {
        self.phase == Phase::Checked
    }

    pub fn last_score(&self) -> Option<RoundScore> {
        self.last
    }

    /// Verbo en pantalla con sus soluciones, o `None` con el pool vacío.
    pub fn current(&self) -> Option<DrillItem> {
        let entry = self.pool.get(self.idx)?;
        Some(DrillItem {
            verb: entry.infinitive().to_string(),
            forms: conjugate(entry, self.tense),
        })
    }

    pub fn answers(&self) -> &Forms {
        &self.answers
    }

    /// Escribe la respuesta de una persona; tras comprobar se ignora.
    pub fn set_answer(&mut self, person: Person, text: impl Into<String>) {
        if self.phase == Phase::Answering {
            *self.answers.get_mut(person) = text.into();
        }
    }

    /// Acceso directo al hueco de una persona, para ligarlo a un
    /// `TextEdit`; la vista deshabilita el campo cuando la ronda ya
    /// está comprobada.
    pub fn answer_mut(&mut self, person: Person) -> &mut String {
        self.answers.get_mut(person)
    }

    /// Corrige la ronda actual y devuelve su puntuación, una sola vez.
    ///
    /// Devuelve `None` si ya estaba comprobada o si no hay verbo en
    /// pantalla, así el marcador global nunca suma una ronda dos veces.
    pub fn comprobar(&mut self) -> Option<RoundScore> {
        if self.phase != Phase::Answering {
            return None;
        }
        let item = self.current()?;
        let score = score_round(&self.answers, &item.forms);
        self.last = Some(score);
        self.phase = Phase::Checked;
        Some(score)
    }

    /// Pasa al siguiente verbo; solo tiene efecto con la ronda comprobada.
    pub fn avanzar(&mut self) {
        if self.phase != Phase::Checked {
            return;
        }
        self.answers = Forms::default();
        self.last = None;
        self.idx = next_index(self.pool.len(), self.idx, &mut self.rng);
        self.phase = Phase::Answering;
    }
}

/// Índice siguiente al azar, distinto del actual siempre que haya más
/// de un verbo donde elegir.
fn next_index(len: usize, current: usize, rng: &mut impl Rng) -> usize {
    if len <= 1 {
        return 0;
    }
    (current + 1 + rng.random_range(0..len - 1)) % len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VerbClass;
    use std::collections::HashSet;

    fn catalogo() -> Vec<VerbEntry> {
        let regular = |inf: &str| VerbEntry::Regular {
            infinitive: inf.to_string(),
            class: VerbClass::from_infinitive(inf).unwrap(),
        };
        vec![
            regular("hablar"),
            regular("comer"),
            VerbEntry::StemIrregular {
                infinitive: "tener".to_string(),
                class: VerbClass::Er,
                stem: "tendr".to_string(),
            },
            regular("vivir"),
            VerbEntry::FullIrregular {
                infinitive: "ir".to_string(),
                forms: Forms {
                    yo: "iré".into(),
                    tu: "irás".into(),
                    el: "irá".into(),
                    nos: "iremos".into(),
                    vos: "iréis".into(),
                    ellos: "irán".into(),
                },
            },
        ]
    }

    fn sesion(filter: FilterMode) -> DrillSession {
        DrillSession::with_rng(
            &catalogo(),
            Tense::FuturoSimple,
            filter,
            StdRng::seed_from_u64(7),
        )
    }

    fn responder_bien(s: &mut DrillSession) {
        let forms = s.current().unwrap().forms;
        for p in Person::TODAS {
            s.set_answer(p, forms.get(p).to_string());
        }
    }

    #[test]
    fn filter_partitions_and_preserves_order() {
        let catalogo = catalogo();
        let nombres = |pool: &[VerbEntry]| -> Vec<String> {
            pool.iter().map(|e| e.infinitive().to_string()).collect()
        };

        let todos = filter_pool(&catalogo, FilterMode::All);
        assert_eq!(nombres(&todos), nombres(&catalogo));

        let regulares = filter_pool(&catalogo, FilterMode::Regular);
        assert_eq!(nombres(&regulares), ["hablar", "comer", "vivir"]);

        let irregulares = filter_pool(&catalogo, FilterMode::Irregular);
        assert_eq!(nombres(&irregulares), ["tener", "ir"]);

        assert_eq!(regulares.len() + irregulares.len(), todos.len());
    }

    #[test]
    fn next_index_never_repeats_with_two_or_more() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut idx = 0;
        for _ in 0..200 {
            let siguiente = next_index(5, idx, &mut rng);
            assert_ne!(siguiente, idx);
            assert!(siguiente < 5);
            idx = siguiente;
        }
    }

    #[test]
    fn next_index_reaches_every_other_slot() {
        let mut rng = StdRng::seed_from_u64(2);
        let vistos: HashSet<usize> = (0..500).map(|_| next_index(5, 2, &mut rng)).collect();
        assert_eq!(vistos, HashSet::from([0, 1, 3, 4]));
    }

    #[test]
    fn next_index_degenerates_to_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(next_index(0, 0, &mut rng), 0);
        assert_eq!(next_index(1, 0, &mut rng), 0);
    }

    #[test]
    fn comprobar_reports_exactly_once() {
        let mut s = sesion(FilterMode::All);
        responder_bien(&mut s);

        let primera = s.comprobar().unwrap();
        assert_eq!(primera.correct, 6);
        assert!(s.is_checked());

        // La segunda llamada no vuelve a puntuar.
        assert!(s.comprobar().is_none());
        assert_eq!(s.last_score().unwrap().correct, 6);
    }

    #[test]
    fn avanzar_only_after_check() {
        let mut s = sesion(FilterMode::All);
        let antes = s.current().unwrap().verb;
        s.avanzar();
        assert_eq!(s.current().unwrap().verb, antes);

        s.comprobar().unwrap();
        s.avanzar();
        assert_ne!(s.current().unwrap().verb, antes);
        assert!(!s.is_checked());
        assert_eq!(s.answers(), &Forms::default());
        assert!(s.last_score().is_none());
    }

    #[test]
    fn answers_freeze_after_check() {
        let mut s = sesion(FilterMode::All);
        s.set_answer(Person::Yo, "hablaré");
        s.comprobar().unwrap();
        s.set_answer(Person::Yo, "otra cosa");
        assert_eq!(s.answers().yo, "hablaré");
    }

    #[test]
    fn empty_pool_is_inert() {
        let regulares: Vec<VerbEntry> = filter_pool(&catalogo(), FilterMode::Regular);
        let mut s = DrillSession::with_rng(
            &regulares,
            Tense::FuturoSimple,
            FilterMode::Irregular,
            StdRng::seed_from_u64(4),
        );
        assert_eq!(s.pool_len(), 0);
        assert!(s.current().is_none());
        assert!(s.comprobar().is_none());
        s.avanzar();
        assert!(!s.is_checked());
    }

    #[test]
    fn single_verb_pool_repeats_itself() {
        let uno = vec![catalogo().remove(0)];
        let mut s = DrillSession::with_rng(
            &uno,
            Tense::FuturoSimple,
            FilterMode::All,
            StdRng::seed_from_u64(5),
        );
        s.comprobar().unwrap();
        s.avanzar();
        assert_eq!(s.current().unwrap().verb, "hablar");
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let recorrido = |semilla: u64| -> Vec<String> {
            let mut s = DrillSession::with_rng(
                &catalogo(),
                Tense::FuturoSimple,
                FilterMode::All,
                StdRng::seed_from_u64(semilla),
            );
            (0..10)
                .map(|_| {
                    let verbo = s.current().unwrap().verb;
                    s.comprobar();
                    s.avanzar();
                    verbo
                })
                .collect()
        };
        assert_eq!(recorrido(9), recorrido(9));
    }
}
