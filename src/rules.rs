use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Catalogue des matières connues, dans l'ordre de saisie.
pub const SUBJECTS: [&str; 13] = [
    "English",
    "Maths",
    "Social Studies",
    "Biology",
    "PhysicsChemistry",
    "Telugu",
    "Hindi",
    "Computers",
    "ArtCraft",
    "Music",
    "Sports",
    "Dance",
    "Yoga",
];

/// Règles d'allocation d'une journée.
///
/// `Rules::default()` correspond aux règles de l'établissement ; un fichier
/// JSON peut les surcharger (champs absents = valeurs par défaut).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub periods_per_day: u8,
    /// Nombre de périodes d'enseignement visées pour une matière sans quota propre.
    pub default_quota: usize,
    pub quotas: BTreeMap<String, usize>,
    /// Matières qui ne donnent pas droit à la période de professeur principal.
    pub class_teacher_excluded: BTreeSet<String>,
    /// Périodes interdites par matière. Un tirage qui y tombe est abandonné,
    /// sans nouveau tirage.
    pub blocked_periods: BTreeMap<String, Vec<u8>>,
}

impl Default for Rules {
    fn default() -> Self {
        let quotas = [
            ("Music", 1),
            ("Dance", 1),
            ("ArtCraft", 1),
            ("Yoga", 1),
            ("Sports", 2),
        ]
        .into_iter()
        .map(|(s, q)| (s.to_owned(), q))
        .collect();

        let class_teacher_excluded = [
            "Telugu", "Hindi", "ArtCraft", "Computers", "Music", "Sports", "Dance", "Yoga",
        ]
        .into_iter()
        .map(str::to_owned)
        .collect();

        let mut blocked_periods = BTreeMap::new();
        blocked_periods.insert("Sports".to_owned(), vec![1, 2, 3, 9]);

        Self {
            periods_per_day: 9,
            default_quota: 6,
            quotas,
            class_teacher_excluded,
            blocked_periods,
        }
    }
}

impl Rules {
    pub fn validate(&self) -> Result<()> {
        if self.periods_per_day == 0 {
            bail!("periods_per_day must be > 0");
        }
        for subject in self.quotas.keys().chain(self.class_teacher_excluded.iter()) {
            if subject.trim().is_empty() {
                bail!("subject names in rules cannot be empty");
            }
        }
        for (subject, periods) in &self.blocked_periods {
            if subject.trim().is_empty() {
                bail!("subject names in rules cannot be empty");
            }
            if let Some(p) = periods
                .iter()
                .find(|p| **p == 0 || **p > self.periods_per_day)
            {
                bail!(
                    "blocked period {p} for {subject} is outside 1..={}",
                    self.periods_per_day
                );
            }
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).with_context(|| format!("reading rules {}", path.display()))?;
        let rules: Rules = serde_json::from_slice(&data)
            .with_context(|| format!("parsing rules {}", path.display()))?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn periods(&self) -> impl Iterator<Item = u8> {
        1..=self.periods_per_day
    }

    pub fn is_class_teacher_eligible(&self, subject: &str) -> bool {
        !self.class_teacher_excluded.contains(subject)
    }

    pub fn teaching_quota(&self, subject: &str) -> usize {
        self.quotas
            .get(subject)
            .copied()
            .unwrap_or(self.default_quota)
    }

    pub fn is_blocked(&self, subject: &str, period: u8) -> bool {
        self.blocked_periods
            .get(subject)
            .is_some_and(|periods| periods.contains(&period))
    }
}
