//! Synthetic placeholder values
//!
//! Values are picked by matching the placeholder name against an ordered
//! rule list; the first rule whose pattern occurs in the lower-cased name
//! wins. Several rules can match the same name (`data_nascimento` contains
//! both `data` and `nascimento`), so the order of [`default_rules`] is part
//! of the behaviour.

mod pools;

use crate::dates;
use crate::template::ValueMapping;
use chrono::{Days, NaiveDate, NaiveTime, Utc};
use rand::distr::Alphanumeric;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

/// Produces a value for one category of placeholder
pub type Generate = fn(&mut dyn RngCore) -> String;

/// One `(predicate, generator)` pair
#[derive(Clone, Copy)]
pub struct Rule {
    /// Stable identifier, used in logs and tests
    pub label: &'static str,
    /// The rule matches when any pattern is a substring of the lower-cased name
    pub patterns: &'static [&'static str],
    pub generate: Generate,
}

impl Rule {
    pub fn matches(&self, lower_name: &str) -> bool {
        self.patterns.iter().any(|p| lower_name.contains(p))
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("label", &self.label)
            .field("patterns", &self.patterns)
            .finish()
    }
}

/// Length of the fallback token
const FALLBACK_LEN: usize = 5;

/// Birth dates are drawn from the 30 years before this day
const BIRTH_REFERENCE: (i32, u32, u32) = (2004, 1, 1);
const PAST_YEARS: u64 = 30;

/// The standard pt-BR civil-registry rule list, most specific first
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            label: "full_name",
            patterns: &["nome_completo", "nome_registrado"],
            generate: |rng| full_name(rng, None),
        },
        Rule {
            label: "male_name",
            patterns: &["nome_pai", "nome_contraente_1"],
            generate: |rng| full_name(rng, Some(Sex::Male)),
        },
        Rule {
            label: "female_name",
            patterns: &["nome_mae", "nome_contraente_2"],
            generate: |rng| full_name(rng, Some(Sex::Female)),
        },
        Rule {
            label: "grandparents",
            patterns: &["avos"],
            generate: |rng| {
                format!(
                    "{} e {}",
                    full_name(rng, Some(Sex::Male)),
                    full_name(rng, Some(Sex::Female))
                )
            },
        },
        Rule {
            label: "officer_name",
            patterns: &["nome_oficial"],
            generate: |rng| full_name(rng, None),
        },
        Rule {
            label: "married_surname",
            patterns: &["nome_apos_casamento"],
            generate: |rng| pick(pools::LAST_NAMES, rng).to_string(),
        },
        Rule {
            label: "cpf",
            patterns: &["cpf"],
            generate: |rng| {
                let d = digits(rng, 11);
                format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
            },
        },
        Rule {
            label: "registration_number",
            patterns: &["matricula", "termo"],
            generate: |rng| digits(rng, 16),
        },
        Rule {
            label: "long_date",
            patterns: &["data_extenso"],
            generate: |rng| dates::format_long(past_date(rng, Utc::now().date_naive())),
        },
        Rule {
            label: "birth_date",
            patterns: &["nascimento"],
            generate: |rng| dates::format_short(past_date(rng, birth_reference())),
        },
        Rule {
            label: "date",
            patterns: &["data"],
            generate: |rng| dates::format_short(past_date(rng, Utc::now().date_naive())),
        },
        Rule {
            label: "time",
            patterns: &["hora"],
            generate: |rng| {
                let time = NaiveTime::from_hms_opt(
                    rng.random_range(8..19),
                    rng.random_range(0..60),
                    0,
                )
                .unwrap_or_default();
                dates::format_time(time)
            },
        },
        Rule {
            label: "city",
            patterns: &["cidade", "naturalidade"],
            generate: |rng| pick(pools::CITIES, rng).to_string(),
        },
        Rule {
            label: "address",
            patterns: &["residencia", "endereco"],
            generate: street_address,
        },
        Rule {
            label: "state",
            patterns: &["uf", "estado"],
            generate: |rng| pick(pools::STATES, rng).to_string(),
        },
        Rule {
            label: "occupation",
            patterns: &["profissao"],
            generate: |rng| pick(pools::JOB_TITLES, rng).to_string(),
        },
        Rule {
            label: "nationality",
            patterns: &["nacionalidade"],
            generate: |_| "Brasileiro(a)".to_string(),
        },
        Rule {
            label: "book",
            patterns: &["livro"],
            generate: |rng| format!("B-{}", digits(rng, 3)),
        },
        Rule {
            label: "page",
            patterns: &["folha"],
            generate: |rng| digits(rng, 3),
        },
        Rule {
            label: "property_regime",
            patterns: &["regime_bens"],
            generate: |rng| pick(pools::PROPERTY_REGIMES, rng).to_string(),
        },
        Rule {
            label: "officer_role",
            patterns: &["cargo"],
            generate: |rng| pick(pools::OFFICER_ROLES, rng).to_string(),
        },
    ]
}

/// Synthetic value generator over an ordered rule list
#[derive(Debug, Clone)]
pub struct SyntheticGenerator {
    rules: Vec<Rule>,
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl SyntheticGenerator {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule matching `name`, or `None` when the fallback applies
    pub fn rule_for(&self, name: &str) -> Option<&Rule> {
        let lower = name.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lower))
    }

    /// A plausible value for the placeholder `name`
    pub fn generate(&self, name: &str, rng: &mut dyn RngCore) -> String {
        match self.rule_for(name) {
            Some(rule) => (rule.generate)(rng),
            None => (0..FALLBACK_LEN)
                .map(|_| char::from(rng.sample(Alphanumeric)))
                .collect(),
        }
    }

    /// One generated value per variable, in variable order
    pub fn autofill(&self, variables: &[String], rng: &mut dyn RngCore) -> ValueMapping {
        variables
            .iter()
            .map(|name| (name.clone(), self.generate(name, rng)))
            .collect()
    }
}

#[derive(Clone, Copy)]
enum Sex {
    Male,
    Female,
}

fn pick(pool: &'static [&'static str], rng: &mut dyn RngCore) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

fn digits(rng: &mut dyn RngCore, count: usize) -> String {
    (0..count)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

fn full_name(rng: &mut dyn RngCore, sex: Option<Sex>) -> String {
    let sex = sex.unwrap_or(if rng.random_bool(0.5) {
        Sex::Male
    } else {
        Sex::Female
    });
    let first = match sex {
        Sex::Male => pick(pools::MALE_FIRST_NAMES, rng),
        Sex::Female => pick(pools::FEMALE_FIRST_NAMES, rng),
    };
    let middle = pick(pools::LAST_NAMES, rng);
    let last = pick(pools::LAST_NAMES, rng);
    if rng.random_bool(0.4) {
        let particle = pick(pools::NAME_PARTICLES, rng);
        format!("{} {} {} {}", first, middle, particle, last)
    } else {
        format!("{} {} {}", first, middle, last)
    }
}

fn street_address(rng: &mut dyn RngCore) -> String {
    format!(
        "{} {}, {}, {} {}",
        pick(pools::STREET_TYPES, rng),
        pick(pools::STREET_NAMES, rng),
        rng.random_range(1..2000u32),
        pick(pools::ADDRESS_COMPLEMENTS, rng),
        rng.random_range(1..500u32),
    )
}

fn birth_reference() -> NaiveDate {
    let (y, m, d) = BIRTH_REFERENCE;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn past_date(rng: &mut dyn RngCore, reference: NaiveDate) -> NaiveDate {
    let back = rng.random_range(1..=PAST_YEARS * 365);
    reference.checked_sub_days(Days::new(back)).unwrap_or(reference)
}
