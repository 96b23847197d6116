//! medcorpus: browse, validate and search the medical education corpus.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medcorpus_content::index::{built_in_content, legacy_content};
use medcorpus_content::obgyn::clinical_priority;
use medcorpus_content::{
    build_registry, get_obgyn_by_category, get_obgyn_by_risk_factor, get_obgyn_condition_by_id,
    get_obgyn_condition_count, search_obgyn_conditions, OBGYNCategory, OBGYNConditionEntry, LEGACY_CONTENT_REGISTRY,
};
use medcorpus_core::config::{resolve_with_base, Config, CorpusSettings};
use medcorpus_core::loader::ContentLoader;
use medcorpus_core::render::render_markdown;
use medcorpus_core::types::{ComplexityLevel, EducationalContent};
use medcorpus_core::validation::{find_duplicate_ids, validate_legacy, validate_registry, ValidationReport};
use medcorpus_core::Registry;
use medcorpus_text::{CorpusIndexer, CorpusSearchEngine};

#[derive(Parser)]
#[command(name = "medcorpus")]
#[command(version)]
#[command(about = "Browse, validate and search the medical education corpus")]
struct Cli {
    /// Directory of extra JSON content packs (overrides `content_dir` in config)
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one record
    Show {
        id: String,

        /// Only this level (1-5)
        #[arg(short, long)]
        level: Option<u8>,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Substring search over names, keywords and level summaries
    Search { query: String },

    /// Count records in each registry
    Count,

    /// OB/GYN conditions database
    Obgyn {
        #[command(subcommand)]
        command: ObgynCommand,
    },

    /// Render a record as markdown with level markers
    Render { id: String },

    /// Validate built-in content and any content packs
    Validate,

    /// Build the full-text index
    Index {
        #[arg(long)]
        index_dir: Option<PathBuf>,
    },

    /// Ranked full-text query against a built index
    Query {
        query: String,

        #[arg(short, long)]
        level: Option<u8>,

        #[arg(long)]
        limit: Option<usize>,

        /// Also print hit counts per facet
        #[arg(long)]
        facets: bool,

        #[arg(long)]
        index_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ObgynCommand {
    Get {
        id: String,
        #[arg(long)]
        json: bool,
    },
    Search { query: String },
    /// One of: obstetric, gynecologic, reproductive-endocrine, oncologic, urogynecologic
    Category { category: String },
    RiskFactor { term: String },
    Count,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;

    let log_filter = if cli.verbose { "debug".to_string() } else { settings.log_filter.clone() };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| log_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    debug!(env = config.env_name(), "configuration loaded");

    let content_dir = cli.content_dir.or_else(|| settings.content_dir.as_deref().map(|d| resolve_with_base(&cwd(), d)));

    match cli.command {
        Commands::Show { id, level, json } => {
            let registry = load_registry(content_dir.as_deref())?;
            let content = registry.get(&id).with_context(|| format!("no record with id '{}'", id))?;
            show(content, level.map(ComplexityLevel::try_from).transpose()?, json)?;
        }
        Commands::Search { query } => {
            let registry = load_registry(content_dir.as_deref())?;
            let level = ComplexityLevel::try_from(settings.default_level)?;
            let hits = registry.search(&query);
            println!("{} result(s) for '{}'", hits.len(), query);
            for content in hits {
                println!("  {:<28} {}", content.id, content.name);
                if let Some(body) = content.level(level) {
                    println!("      {}", body.summary);
                }
            }
        }
        Commands::Count => {
            let registry = load_registry(content_dir.as_deref())?;
            println!("content records: {}", registry.count());
            println!("legacy lessons:  {}", LEGACY_CONTENT_REGISTRY.count());
            println!("OB/GYN entries:  {}", get_obgyn_condition_count());
        }
        Commands::Obgyn { command } => run_obgyn(command)?,
        Commands::Render { id } => {
            let registry = load_registry(content_dir.as_deref())?;
            let content = registry.get(&id).with_context(|| format!("no record with id '{}'", id))?;
            print!("{}", render_markdown(content));
        }
        Commands::Validate => run_validate(content_dir.as_deref(), &settings)?,
        Commands::Index { index_dir } => {
            let registry = load_registry(content_dir.as_deref())?;
            let index_dir = index_dir.unwrap_or_else(|| resolve_with_base(&cwd(), &settings.index_dir));
            run_index(&registry, index_dir)?;
        }
        Commands::Query { query, level, limit, facets, index_dir } => {
            let index_dir = index_dir.unwrap_or_else(|| resolve_with_base(&cwd(), &settings.index_dir));
            let limit = limit.unwrap_or(settings.default_limit).min(settings.max_limit);
            let level = level.map(ComplexityLevel::try_from).transpose()?;
            run_query(&query, level, limit, facets, index_dir)?;
        }
    }
    Ok(())
}

fn cwd() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn load_packs(content_dir: Option<&Path>) -> Result<Vec<EducationalContent>> {
    match content_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "loading content packs");
            Ok(ContentLoader::new().load_directory(dir)?)
        }
        None => Ok(Vec::new()),
    }
}

fn load_registry(content_dir: Option<&Path>) -> Result<Registry<EducationalContent>> {
    Ok(build_registry(load_packs(content_dir)?)?)
}

fn show(content: &EducationalContent, level: Option<ComplexityLevel>, json: bool) -> Result<()> {
    if json {
        let out = match level {
            Some(level) => serde_json::to_string_pretty(content.level(level).with_context(|| format!("{} has no level {}", content.id, level))?)?,
            None => serde_json::to_string_pretty(content)?,
        };
        println!("{}", out);
        return Ok(());
    }

    println!("{} [{}]", content.name, content.content_type.as_str());
    if let Some(name_es) = &content.name_es { println!("{}", name_es); }
    if !content.alternate_names.is_empty() { println!("Also: {}", content.alternate_names.join(", ")); }
    for (key, body) in &content.levels {
        if level.is_some_and(|l| l != *key) { continue; }
        println!("\n== Level {} ({}) ==\n{}\n\n{}", key, key.label(), body.summary, body.explanation);
        for term in &body.key_terms {
            println!("  - {}: {}", term.term, term.definition);
        }
    }
    if !content.cross_references.is_empty() {
        println!("\nSee also:");
        for xref in &content.cross_references { println!("  {} ({})", xref.label, xref.target_id); }
    }
    Ok(())
}

fn print_obgyn_list(entries: &[&OBGYNConditionEntry]) {
    println!("{} condition(s)", entries.len());
    for entry in entries {
        println!("  {:<22} {:<24} {:<8} {}", entry.id, entry.category.as_str(), entry.icd11, entry.name);
    }
}

fn run_obgyn(command: ObgynCommand) -> Result<()> {
    match command {
        ObgynCommand::Get { id, json } => {
            let entry = get_obgyn_condition_by_id(&id).with_context(|| format!("no OB/GYN condition '{}'", id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(entry)?);
                return Ok(());
            }
            println!("{} / {} [{}] ICD-11 {}", entry.name, entry.name_es, entry.category.label(), entry.icd11);
            if let Some(priority) = clinical_priority(&entry.id) { println!("Clinical priority: {:?}", priority); }
            println!("\n{}\n", entry.description);
            println!("Risk factors: {}", entry.risk_factors.join("; "));
            println!("Symptoms: {}", entry.symptoms.join("; "));
            println!("First line: {}", entry.treatment.first_line);
            println!("Emergency signs: {}", entry.emergency_signs.join("; "));
            println!("\n{}", entry.patient_explanation);
        }
        ObgynCommand::Search { query } => print_obgyn_list(&search_obgyn_conditions(&query)),
        ObgynCommand::Category { category } => {
            let category: OBGYNCategory = category.parse()?;
            print_obgyn_list(&get_obgyn_by_category(category));
        }
        ObgynCommand::RiskFactor { term } => print_obgyn_list(&get_obgyn_by_risk_factor(&term)),
        ObgynCommand::Count => println!("{}", get_obgyn_condition_count()),
    }
    Ok(())
}

fn run_validate(content_dir: Option<&Path>, settings: &CorpusSettings) -> Result<()> {
    let mut all = built_in_content();
    all.extend(load_packs(content_dir)?);

    let mut report = find_duplicate_ids(&all);
    report.merge(validate_registry(&Registry::from_entries(all)));
    for lesson in legacy_content() {
        report.merge(validate_legacy(&lesson));
    }
    print_report(&report);

    let errors = report.errors().count();
    let warnings = report.warnings().count();
    if errors > 0 {
        bail!("validation failed with {} error(s)", errors);
    }
    if settings.strict_validation && warnings > 0 {
        bail!("strict validation failed with {} warning(s)", warnings);
    }
    println!("✅ Content valid ({} warning(s))", warnings);
    Ok(())
}

fn print_report(report: &ValidationReport) {
    for issue in &report.issues {
        println!("{}", issue);
    }
}

fn run_index(registry: &Registry<EducationalContent>, index_dir: PathBuf) -> Result<()> {
    println!("Tantivy Indexer\n===============");
    println!("Index directory: {}", index_dir.display());
    let indexer = CorpusIndexer::new(index_dir)?;
    let records: Vec<EducationalContent> = registry.iter().cloned().collect();

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(ProgressStyle::default_bar().template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records {msg}")?.progress_chars("#>-"));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    let documents = indexer.index_content(&records)?;
    pb.set_position(records.len() as u64);
    pb.finish_with_message(format!("{} level documents", documents));
    println!("📊 Indexed {} level documents from {} records", documents, records.len());
    Ok(())
}

fn run_query(query: &str, level: Option<ComplexityLevel>, limit: usize, facets: bool, index_dir: PathBuf) -> Result<()> {
    let engine = CorpusSearchEngine::new(index_dir.clone()).with_context(|| format!("opening index at {} (run `medcorpus index` first)", index_dir.display()))?;
    let hits = match level {
        Some(level) => engine.search_level(query, level, limit)?,
        None => engine.search(query, limit)?,
    };
    for (i, h) in hits.iter().enumerate() {
        println!("{:>2}. score={:.3} {} level {} category={}\n    {}\n    snippet: {}", i + 1, h.score, h.content_id, h.level, h.category, h.name, h.snippet);
    }
    if hits.is_empty() { println!("No results for '{}'", query); }

    if facets {
        println!("\nFacets:");
        for (facet, count) in engine.get_facet_counts(query)? {
            println!("  {} -> {}", facet, count);
        }
    }
    Ok(())
}
