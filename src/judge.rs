// src/judge.rs
use crate::model::{Forms, Person};

/// Resultado de comprobar una ronda: un veredicto por persona.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundScore {
    pub per_person: [bool; 6],
    pub correct: usize,
}

impl RoundScore {
    /// Huecos que puntúa cada ronda, uno por persona.
    pub const HUECOS: usize = 6;

    pub fn is_ok(&self, person: Person) -> bool {
        self.per_person[person.index()]
    }

    pub fn fraccion(&self) -> String {
        format!("{}/{}", self.correct, Self::HUECOS)
    }
}

/// Compara lo tecleado con la solución, hueco a hueco.
///
/// Mayúsculas y minúsculas dan igual; las tildes no: «comio» no vale por
/// «comió». Un hueco sin rellenar cuenta como fallo.
pub fn score_round(answers: &Forms, target: &Forms) -> RoundScore {
    let mut per_person = [false; 6];
    let mut correct = 0;
    for person in Person::TODAS {
        let ok = answers.get(person).to_lowercase() == target.get(person).to_lowercase();
        per_person[person.index()] = ok;
        if ok {
            correct += 1;
        }
    }
    RoundScore { per_person, correct }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_presente_hablar() -> Forms {
        Forms {
            yo: "hablo".into(),
            tu: "hablas".into(),
            el: "habla".into(),
            nos: "hablamos".into(),
            vos: "habláis".into(),
            ellos: "hablan".into(),
        }
    }

    #[test]
    fn case_is_ignored() {
        let mut answers = target_presente_hablar();
        answers.yo = "HABLO".into();
        answers.vos = "HabláIs".into();
        let score = score_round(&answers, &target_presente_hablar());
        assert_eq!(score.correct, 6);
        assert_eq!(score.fraccion(), "6/6");
    }

    #[test]
    fn accents_are_significant() {
        let mut answers = target_presente_hablar();
        answers.vos = "hablais".into();
        let score = score_round(&answers, &target_presente_hablar());
        assert!(!score.is_ok(Person::Vos));
        assert_eq!(score.correct, 5);
        assert_eq!(score.fraccion(), "5/6");
    }

    #[test]
    fn empty_answers_count_as_wrong() {
        let score = score_round(&Forms::default(), &target_presente_hablar());
        assert_eq!(score.correct, 0);
        assert_eq!(score.per_person, [false; 6]);
        assert_eq!(score.fraccion(), "0/6");
    }

    #[test]
    fn whitespace_is_not_stripped() {
        let mut answers = target_presente_hablar();
        answers.yo = " hablo".into();
        let score = score_round(&answers, &target_presente_hablar());
        assert!(!score.is_ok(Person::Yo));
    }

    #[test]
    fn verdicts_follow_person_order() {
        let mut answers = Forms::default();
        answers.tu = "hablas".into();
        let score = score_round(&answers, &target_presente_hablar());
        assert!(score.is_ok(Person::Tu));
        assert!(!score.is_ok(Person::Yo));
        assert_eq!(score.correct, 1);
    }
}
