//! Rule-table deinflector
//!
//! Undoes common verb and i-adjective inflections by suffix replacement.
//! The deinflector knows nothing about real words: every rule only claims what
//! class the base form must belong to, and the matcher checks that claim
//! against the dictionary entry.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::LazyLock;

use super::reason::Reason;
use super::word_type::WordType;
use super::{CandidateWord, Deinflector};

/// Suffix replacement rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
  /// Inflected ending
  pub from: String,
  /// Replacement ending of the base form
  pub to: String,
  /// Classes the inflected word must have for the rule to apply
  pub from_type: WordType,
  /// Classes the base form must belong to
  pub to_type: WordType,
  /// Inflection undone by this rule
  pub reason: Reason,
}

/// One godan conjugation row: dictionary ending and its stems
struct GodanRow {
  u: &'static str,
  i: &'static str,
  a: &'static str,
  e: &'static str,
  o: &'static str,
  te: &'static str,
  ta: &'static str,
}

#[rustfmt::skip]
const GODAN_ROWS: [GodanRow; 9] = [
  GodanRow { u: "う", i: "い", a: "わ", e: "え", o: "お", te: "って", ta: "った" },
  GodanRow { u: "く", i: "き", a: "か", e: "け", o: "こ", te: "いて", ta: "いた" },
  GodanRow { u: "ぐ", i: "ぎ", a: "が", e: "げ", o: "ご", te: "いで", ta: "いだ" },
  GodanRow { u: "す", i: "し", a: "さ", e: "せ", o: "そ", te: "して", ta: "した" },
  GodanRow { u: "つ", i: "ち", a: "た", e: "て", o: "と", te: "って", ta: "った" },
  GodanRow { u: "ぬ", i: "に", a: "な", e: "ね", o: "の", te: "んで", ta: "んだ" },
  GodanRow { u: "ぶ", i: "び", a: "ば", e: "べ", o: "ぼ", te: "んで", ta: "んだ" },
  GodanRow { u: "む", i: "み", a: "ま", e: "め", o: "も", te: "んで", ta: "んだ" },
  GodanRow { u: "る", i: "り", a: "ら", e: "れ", o: "ろ", te: "って", ta: "った" },
];

/// Endings attached to the continuative (masu) stem
const MASU_STEM_SUFFIXES: [(&str, WordType, Reason); 8] = [
  ("ます", WordType::INITIAL, Reason::Polite),
  ("ました", WordType::INITIAL, Reason::PolitePast),
  ("ません", WordType::INITIAL, Reason::PoliteNegative),
  ("ませんでした", WordType::INITIAL, Reason::PolitePastNegative),
  ("ましょう", WordType::INITIAL, Reason::PoliteVolitional),
  ("たい", WordType::I_ADJ, Reason::Tai),
  ("そう", WordType::INITIAL, Reason::Sou),
  ("すぎる", WordType::ICHIDAN_VERB, Reason::Sugiru),
];

/// Rule table, longest `from` first
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(build_rules);

#[derive(Default)]
struct RuleSet(Vec<Rule>);

impl RuleSet {
  fn add(
    &mut self,
    from: impl Into<String>,
    to: impl Into<String>,
    from_type: WordType,
    to_type: WordType,
    reason: Reason,
  ) {
    self.0.push(Rule {
      from: from.into(),
      to: to.into(),
      from_type,
      to_type,
      reason,
    });
  }

  /// Adds `stem + suffix → dictionary form` for ichidan, godan, kuru and suru verbs
  #[allow(clippy::too_many_arguments)]
  fn add_verb_forms(
    &mut self,
    ichidan_stem: &str,
    godan_stem: impl Fn(&GodanRow) -> &'static str,
    kuru_stem: &str,
    suru_stem: &str,
    suffix: &str,
    from_type: WordType,
    reason: Reason,
  ) {
    self.add(format!("{ichidan_stem}{suffix}"), "る", from_type, WordType::ICHIDAN_VERB, reason);
    for row in &GODAN_ROWS {
      self.add(format!("{}{suffix}", godan_stem(row)), row.u, from_type, WordType::GODAN_VERB, reason);
    }
    self.add(format!("{kuru_stem}{suffix}"), "くる", from_type, WordType::KURU_VERB, reason);
    self.add(format!("来{suffix}"), "来る", from_type, WordType::KURU_VERB, reason);
    self.add(format!("{suru_stem}{suffix}"), "する", from_type, WordType::SURU_VERB, reason);
  }
}

/// Past (た) forms of every verb class plus i-adjectives: `(ending, base ending, class)`
fn past_forms() -> Vec<(String, &'static str, WordType)> {
  let mut forms = vec![("た".to_string(), "る", WordType::ICHIDAN_VERB)];
  forms.extend(GODAN_ROWS.iter().map(|row| (row.ta.to_string(), row.u, WordType::GODAN_VERB)));
  forms.extend([
    ("きた".to_string(), "くる", WordType::KURU_VERB),
    ("来た".to_string(), "来る", WordType::KURU_VERB),
    ("した".to_string(), "する", WordType::SURU_VERB),
    ("いった".to_string(), "いく", WordType::GODAN_VERB),
    ("行った".to_string(), "行く", WordType::GODAN_VERB),
    ("かった".to_string(), "い", WordType::I_ADJ),
  ]);
  forms
}

/// Te forms of every verb class (adjectives excluded)
fn te_forms() -> Vec<(String, &'static str, WordType)> {
  let mut forms = vec![("て".to_string(), "る", WordType::ICHIDAN_VERB)];
  forms.extend(GODAN_ROWS.iter().map(|row| (row.te.to_string(), row.u, WordType::GODAN_VERB)));
  forms.extend([
    ("きて".to_string(), "くる", WordType::KURU_VERB),
    ("来て".to_string(), "来る", WordType::KURU_VERB),
    ("して".to_string(), "する", WordType::SURU_VERB),
    ("いって".to_string(), "いく", WordType::GODAN_VERB),
    ("行って".to_string(), "行く", WordType::GODAN_VERB),
  ]);
  forms
}

fn build_rules() -> Vec<Rule> {
  let mut rules = RuleSet::default();

  for (suffix, from_type, reason) in MASU_STEM_SUFFIXES {
    rules.add_verb_forms("", |row| row.i, "き", "し", suffix, from_type, reason);
  }
  rules.add("そう", "い", WordType::INITIAL, WordType::I_ADJ, Reason::Sou);

  // ない and ず attach to the irrealis stem
  rules.add_verb_forms("", |row| row.a, "こ", "し", "ない", WordType::I_ADJ, Reason::Negative);
  rules.add("くない", "い", WordType::I_ADJ, WordType::I_ADJ, Reason::Negative);
  rules.add_verb_forms("", |row| row.a, "こ", "せ", "ず", WordType::INITIAL, Reason::Zu);

  for (ending, base, class) in past_forms() {
    rules.add(ending.clone(), base, WordType::INITIAL, class, Reason::Past);
    rules.add(format!("{ending}ら"), base, WordType::INITIAL, class, Reason::Tara);
    rules.add(format!("{ending}り"), base, WordType::INITIAL, class, Reason::Tari);
  }

  for (ending, base, class) in te_forms() {
    rules.add(ending.clone(), base, WordType::INITIAL, class, Reason::Te);
    rules.add(format!("{ending}いる"), base, WordType::ICHIDAN_VERB, class, Reason::Continuous);
    rules.add(format!("{ending}る"), base, WordType::ICHIDAN_VERB, class, Reason::Continuous);

    // 〜てしまう → 〜ちゃう, 〜でしまう → 〜じゃう
    let chau = match ending.strip_suffix('て') {
      Some(stem) => format!("{stem}ちゃう"),
      None => format!("{}じゃう", ending.trim_end_matches('で')),
    };
    rules.add(chau, base, WordType::GODAN_VERB, class, Reason::Chau);
  }
  rules.add("くて", "い", WordType::INITIAL, WordType::I_ADJ, Reason::Te);

  // potential, passive and causative forms conjugate as ichidan verbs
  for row in &GODAN_ROWS {
    rules.add(format!("{}る", row.e), row.u, WordType::ICHIDAN_VERB, WordType::GODAN_VERB, Reason::Potential);
    rules.add(format!("{}れる", row.a), row.u, WordType::ICHIDAN_VERB, WordType::GODAN_VERB, Reason::Passive);
    rules.add(format!("{}せる", row.a), row.u, WordType::ICHIDAN_VERB, WordType::GODAN_VERB, Reason::Causative);
  }
  rules.add("られる", "る", WordType::ICHIDAN_VERB, WordType::ICHIDAN_VERB, Reason::PotentialOrPassive);
  rules.add("こられる", "くる", WordType::ICHIDAN_VERB, WordType::KURU_VERB, Reason::PotentialOrPassive);
  rules.add("これる", "くる", WordType::ICHIDAN_VERB, WordType::KURU_VERB, Reason::Potential);
  rules.add("される", "する", WordType::ICHIDAN_VERB, WordType::SURU_VERB, Reason::Passive);
  rules.add("させる", "る", WordType::ICHIDAN_VERB, WordType::ICHIDAN_VERB, Reason::Causative);
  rules.add("させる", "する", WordType::ICHIDAN_VERB, WordType::SURU_VERB, Reason::Causative);
  rules.add("こさせる", "くる", WordType::ICHIDAN_VERB, WordType::KURU_VERB, Reason::Causative);

  rules.add("よう", "る", WordType::INITIAL, WordType::ICHIDAN_VERB, Reason::Volitional);
  rules.add("しよう", "する", WordType::INITIAL, WordType::SURU_VERB, Reason::Volitional);
  rules.add("こよう", "くる", WordType::INITIAL, WordType::KURU_VERB, Reason::Volitional);

  rules.add("ろ", "る", WordType::INITIAL, WordType::ICHIDAN_VERB, Reason::Imperative);
  rules.add("よ", "る", WordType::INITIAL, WordType::ICHIDAN_VERB, Reason::Imperative);
  rules.add("しろ", "する", WordType::INITIAL, WordType::SURU_VERB, Reason::Imperative);
  rules.add("せよ", "する", WordType::INITIAL, WordType::SURU_VERB, Reason::Imperative);
  rules.add("こい", "くる", WordType::INITIAL, WordType::KURU_VERB, Reason::Imperative);
  rules.add("来い", "来る", WordType::INITIAL, WordType::KURU_VERB, Reason::Imperative);
  rules.add("な", "", WordType::INITIAL, WordType::VERB, Reason::ImperativeNegative);

  rules.add("れば", "る", WordType::INITIAL, WordType::ICHIDAN_VERB, Reason::Ba);
  rules.add("すれば", "する", WordType::INITIAL, WordType::SURU_VERB, Reason::Ba);
  rules.add("くれば", "くる", WordType::INITIAL, WordType::KURU_VERB, Reason::Ba);
  rules.add("ければ", "い", WordType::INITIAL, WordType::I_ADJ, Reason::Ba);

  for row in &GODAN_ROWS {
    rules.add(format!("{}う", row.o), row.u, WordType::INITIAL, WordType::GODAN_VERB, Reason::Volitional);
    rules.add(row.e, row.u, WordType::INITIAL, WordType::GODAN_VERB, Reason::Imperative);
    rules.add(format!("{}ば", row.e), row.u, WordType::INITIAL, WordType::GODAN_VERB, Reason::Ba);
  }

  rules.add("く", "い", WordType::INITIAL, WordType::I_ADJ, Reason::Adv);
  rules.add("さ", "い", WordType::INITIAL, WordType::I_ADJ, Reason::Noun);

  let mut rules = rules.0;
  // stable: rules of equal length keep their declaration order
  rules.sort_by_key(|rule| Reverse(rule.from.chars().count()));
  rules
}

/// Deinflector backed by the built-in rule table
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleDeinflector;

impl Deinflector for RuleDeinflector {
  /// Breadth-first expansion: every derived word is itself deinflected again.
  ///
  /// A word reached through several paths is kept once; its classes are merged
  /// and each path's reason chain is kept as an alternative.
  fn deinflect(&self, word: &str) -> Vec<CandidateWord> {
    let mut candidates = vec![CandidateWord::unmodified(word)];
    let mut seen: HashMap<String, usize> = HashMap::from([(word.to_string(), 0)]);

    let mut i = 0;
    while i < candidates.len() {
      let current = candidates[i].clone();

      for rule in RULES.iter() {
        if !current.word_type.intersects(rule.from_type) {
          continue;
        }
        let Some(stem) = current.word.strip_suffix(rule.from.as_str()) else {
          continue;
        };

        let new_word = format!("{stem}{}", rule.to);
        if new_word.chars().count() <= 1 {
          continue;
        }

        let chains: Vec<Vec<Reason>> = if current.reasons.is_empty() {
          vec![vec![rule.reason]]
        } else {
          current
            .reasons
            .iter()
            .map(|chain| std::iter::once(rule.reason).chain(chain.iter().copied()).collect())
            .collect()
        };

        if let Some(&existing) = seen.get(&new_word) {
          // index 0 is the unmodified input and never carries reasons
          if existing != 0 {
            let candidate = &mut candidates[existing];
            candidate.word_type |= rule.to_type;
            for chain in chains {
              if !candidate.reasons.contains(&chain) {
                candidate.reasons.push(chain);
              }
            }
          }
          continue;
        }

        seen.insert(new_word.clone(), candidates.len());
        candidates.push(CandidateWord {
          word: new_word,
          word_type: rule.to_type,
          reasons: chains,
        });
      }

      i += 1;
    }

    candidates
  }
}
