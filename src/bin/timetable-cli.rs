#![forbid(unsafe_code)]
use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use timetable::{
    export::{self, FILE_NAME},
    input, Allocator, Rules, Timetable, SUBJECTS,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Générateur d'emplois du temps d'enseignants
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de règles (sinon règles par défaut)
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer l'emploi du temps et l'exporter en xlsx
    Generate {
        /// Affectations : CSV `subject,teacher,rooms` ou JSON de formulaires
        #[arg(long)]
        input: PathBuf,
        /// Fichier ou répertoire de sortie xlsx
        #[arg(long, default_value = FILE_NAME)]
        out: PathBuf,
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: Option<PathBuf>,
        /// Graine du générateur (résultat reproductible)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Vérifier un emploi du temps exporté en JSON
    Check {
        #[arg(long)]
        timetable: PathBuf,
    },

    /// Lister les matières connues et leurs règles
    Subjects,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let rules = match &cli.rules {
        Some(path) => Rules::load_from_file(path)?,
        None => Rules::default(),
    };
    let allocator = Allocator::new(rules);

    let code = match cli.cmd {
        Commands::Generate {
            input: input_path,
            out,
            csv,
            json,
            seed,
        } => {
            let assignments = input::import_assignments(&input_path)?;
            if assignments.is_empty() {
                eprintln!("Warning: no teacher found in {}", input_path.display());
            }
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let timetable = allocator.generate(&assignments, &mut rng);

            let artifact = export::render_xlsx(&timetable)?;
            let path = artifact.save(&out)?;
            if let Some(path) = csv {
                export::export_timetable_csv(path, &timetable)?;
            }
            if let Some(path) = json {
                export::export_timetable_json(path, &timetable, Utc::now())?;
            }
            println!(
                "{} records for {} teacher(s) written to {} ({})",
                timetable.len(),
                timetable.teachers().len(),
                path.display(),
                artifact.mime_type
            );
            0
        }
        Commands::Check { timetable: path } => {
            let saved = export::import_timetable_json(&path)
                .with_context(|| format!("reading timetable {}", path.display()))?;
            let tt = Timetable {
                records: saved.records,
            };
            if tt.is_empty() {
                bail!("timetable {} has no records", path.display());
            }
            let issues = allocator.verify(&tt);
            if issues.is_empty() {
                println!("OK: every day covers periods 1..={}", allocator.rules().periods_per_day);
                0
            } else {
                eprintln!("Found {} issue(s)", issues.len());
                for i in &issues {
                    eprintln!("{} | {} | {} | {}", i.teacher, i.day, i.period, i.kind.as_str());
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Subjects => {
            let rules = allocator.rules();
            for subject in SUBJECTS {
                println!(
                    "{} | quota {} | class teacher: {}",
                    subject,
                    rules.teaching_quota(subject),
                    if rules.is_class_teacher_eligible(subject) { "yes" } else { "no" }
                );
            }
            0
        }
    };

    std::process::exit(code);
}
