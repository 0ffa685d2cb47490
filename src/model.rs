use serde::{Deserialize, Serialize};

/// Las seis personas gramaticales, en el orden en que se muestran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Person {
    Yo,
    Tu,
    El,
    Nos,
    Vos,
    Ellos,
}

impl Person {
    pub const TODAS: [Person; 6] = [
        Person::Yo,
        Person::Tu,
        Person::El,
        Person::Nos,
        Person::Vos,
        Person::Ellos,
    ];

    /// Etiqueta que ve el usuario junto al campo de respuesta.
    pub fn label(self) -> &'static str {
        match self {
            Person::Yo => "yo",
            Person::Tu => "tú",
            Person::El => "él/ella/usted",
            Person::Nos => "nosotros",
            Person::Vos => "vosotros",
            Person::Ellos => "ellos/ellas/ustedes",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Grupo de conjugación regular (-ar / -er / -ir).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbClass {
    Ar,
    Er,
    Ir,
}

impl VerbClass {
    /// Deriva la clase de la terminación del infinitivo.
    /// Cuenta caracteres, no bytes: «freír» acaba en -ír y es clase Ir.
    pub fn from_infinitive(infinitive: &str) -> Option<VerbClass> {
        let mut rev = infinitive.chars().rev();
        let last = rev.next()?;
        let prev = rev.next()?;
        match (prev, last) {
            ('a', 'r') => Some(VerbClass::Ar),
            ('e', 'r') => Some(VerbClass::Er),
            ('i', 'r') | ('í', 'r') => Some(VerbClass::Ir),
            _ => None,
        }
    }
}

/// Un juego completo de formas, una por persona.
///
/// Sirve tanto para las soluciones calculadas como para lo que va tecleando
/// el usuario (ahí los huecos se quedan como cadena vacía).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forms {
    pub yo: String,
    #[serde(rename = "tú")]
    pub tu: String,
    #[serde(rename = "él")]
    pub el: String,
    pub nos: String,
    pub vos: String,
    pub ellos: String,
}

impl Forms {
    pub fn build(mut forma: impl FnMut(Person) -> String) -> Forms {
        Forms {
            yo: forma(Person::Yo),
            tu: forma(Person::Tu),
            el: forma(Person::El),
            nos: forma(Person::Nos),
            vos: forma(Person::Vos),
            ellos: forma(Person::Ellos),
        }
    }

    pub fn get(&self, person: Person) -> &str {
        match person {
            Person::Yo => &self.yo,
            Person::Tu => &self.tu,
            Person::El => &self.el,
            Person::Nos => &self.nos,
            Person::Vos => &self.vos,
            Person::Ellos => &self.ellos,
        }
    }

    pub fn get_mut(&mut self, person: Person) -> &mut String {
        match person {
            Person::Yo => &mut self.yo,
            Person::Tu => &mut self.tu,
            Person::El => &mut self.el,
            Person::Nos => &mut self.nos,
            Person::Vos => &mut self.vos,
            Person::Ellos => &mut self.ellos,
        }
    }
}

/// Entrada del banco de verbos para un tiempo concreto.
///
/// Cada variante fija su propio camino de conjugación: la forma completa
/// manda sobre la raíz irregular, y la raíz sobre la composición regular.
#[derive(Clone, Debug, PartialEq)]
pub enum VerbEntry {
    /// Raíz del infinitivo + desinencias regulares del tiempo.
    Regular { infinitive: String, class: VerbClass },
    /// Raíz irregular + desinencias regulares (p. ej. futuro «tendr-»).
    StemIrregular {
        infinitive: String,
        class: VerbClass,
        stem: String,
    },
    /// Las seis formas dadas a mano; no se compone nada.
    FullIrregular { infinitive: String, forms: Forms },
}

impl VerbEntry {
    pub fn infinitive(&self) -> &str {
        match self {
            VerbEntry::Regular { infinitive, .. }
            | VerbEntry::StemIrregular { infinitive, .. }
            | VerbEntry::FullIrregular { infinitive, .. } => infinitive,
        }
    }

    pub fn is_irregular(&self) -> bool {
        !matches!(self, VerbEntry::Regular { .. })
    }
}

/// Tiempo o modo de práctica. Cada uno tiene su catálogo y sus reglas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tense {
    Presente,
    Indefinido,
    Imperfecto,
    Compuesto,
    FuturoSimple,
    FuturoIrA,
}

impl Tense {
    pub const ALL: [Tense; 6] = [
        Tense::Presente,
        Tense::Indefinido,
        Tense::Imperfecto,
        Tense::Compuesto,
        Tense::FuturoSimple,
        Tense::FuturoIrA,
    ];

    /// Titular de la pantalla de práctica.
    pub fn label(self) -> &'static str {
        match self {
            Tense::Presente => "Presente",
            Tense::Indefinido => "Pretérito — Indefinido",
            Tense::Imperfecto => "Pretérito — Imperfecto",
            Tense::Compuesto => "Pretérito — Compuesto",
            Tense::FuturoSimple => "Futuro — Simple",
            Tense::FuturoIrA => "Ir a + infinitivo",
        }
    }

    /// Etiqueta corta para la fila de pestañas.
    pub fn tab_label(self) -> &'static str {
        match self {
            Tense::Presente => "Presente",
            Tense::Indefinido => "Indefinido",
            Tense::Imperfecto => "Imperfecto",
            Tense::Compuesto => "Compuesto",
            Tense::FuturoSimple => "Simple",
            Tense::FuturoIrA => "Ir a + infinitivo",
        }
    }

    /// Tiempos hermanos que comparten fila de pestañas en la práctica.
    pub fn tabs(self) -> &'static [Tense] {
        match self {
            Tense::Presente => &[Tense::Presente],
            Tense::Indefinido | Tense::Imperfecto | Tense::Compuesto => {
                &[Tense::Indefinido, Tense::Imperfecto, Tense::Compuesto]
            }
            Tense::FuturoSimple | Tense::FuturoIrA => &[Tense::FuturoSimple, Tense::FuturoIrA],
        }
    }

    /// Solo algunos tiempos ofrecen el selector regular/irregular.
    pub fn permite_filtro(self) -> bool {
        matches!(
            self,
            Tense::Indefinido | Tense::Imperfecto | Tense::FuturoSimple
        )
    }

    /// Recordatorio de la regla, visible tras pulsar «ver reglas».
    pub fn rule_hint(self) -> &'static str {
        match self {
            Tense::Presente => {
                "-ar → o, as, a, amos, áis, an · -er → o, es, e, emos, éis, en · \
                 -ir → o, es, e, imos, ís, en. Los irregulares usan formas propias."
            }
            Tense::Indefinido => {
                "-ar → é, aste, ó, amos, asteis, aron · -er/-ir → í, iste, ió, imos, \
                 isteis, ieron. Los irregulares usan formas propias."
            }
            Tense::Imperfecto => {
                "-ar → aba, abas, aba, ábamos, abais, aban · -er/-ir → ía, ías, ía, \
                 íamos, íais, ían. Irregulares: ir, ser, ver."
            }
            Tense::Compuesto => {
                "Patrón: «haber» (presente) + participio. Ej.: he hablado, has comido, \
                 ha vivido. Participios irregulares: hecho, dicho, visto, puesto, \
                 escrito, abierto, roto, vuelto, muerto, frito…"
            }
            Tense::FuturoSimple => {
                "Regla: infinitivo + é, ás, á, emos, éis, án. Los irregulares usan \
                 raíces propias (tendr-, dir-, sabr-, …)."
            }
            Tense::FuturoIrA => {
                "Patrón: voy/vas/va/vamos/vais/van + a + infinitivo (ej.: voy a estudiar)."
            }
        }
    }
}

/// Qué parte del catálogo entra en la ronda.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    #[default]
    All,
    Regular,
    Irregular,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Regular, FilterMode::Irregular];

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "Todos los verbos",
            FilterMode::Regular => "Solo regulares",
            FilterMode::Irregular => "Solo irregulares",
        }
    }
}

/// Verbo en pantalla con sus soluciones; se calcula al vuelo, no se guarda.
#[derive(Clone, Debug, PartialEq)]
pub struct DrillItem {
    pub verb: String,
    pub forms: Forms,
}

/// Marcador acumulado entre sesiones: aciertos sobre huecos comprobados.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreAggregate {
    pub correct: u32,
    pub total: u32,
}

impl ScoreAggregate {
    pub fn registrar_ronda(&mut self, aciertos: usize, huecos: usize) {
        self.correct += aciertos as u32;
        self.total += huecos as u32;
    }

    pub fn reiniciar(&mut self) {
        *self = ScoreAggregate::default();
    }

    pub fn texto(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }
}

/// Pantalla activa de la aplicación.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppState {
    #[default]
    Home,
    Drill,
}
