use crate::analyzers::{analyze_articles_with_progress, into_analysis_results};
use crate::config::{load_config, load_config_from_path, TextmapConfig};
use crate::core::AnalysisResults;
use crate::io::{self, ArticleEntry, ArticleWalker, OutputFormat};
use crate::lexicon::load_lexicons;
use crate::metrics::TextAnalyzer;
use crate::observability::{set_phase, AnalysisPhase};
use crate::progress::{ProgressConfig, ProgressManager, TEMPLATE_ARTICLE_SCORING};
use crate::text::SyllableStrategy;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Options for one `analyze` run; `None` means "use the configured value".
#[derive(Debug, Clone, Default)]
pub struct AnalyzeConfig {
    pub articles_dir: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub stopwords: Option<PathBuf>,
    pub positive: Option<PathBuf>,
    pub negative: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub syllables: Option<SyllableStrategy>,
    pub parallel: bool,
    pub jobs: usize,
    pub timing: bool,
    pub quiet: bool,
}

pub fn handle_analyze(options: AnalyzeConfig) -> Result<()> {
    let base = match &options.config_path {
        Some(path) => load_config_from_path(path)?,
        None => load_config(),
    };
    let config = apply_overrides(base, &options);
    let format = resolve_format(options.format, &config)?;

    configure_thread_pool(effective_jobs(options.jobs, &config));

    let progress = ProgressManager::new(ProgressConfig::from_env(options.quiet));
    let results = run_analysis(&config, &progress)?;
    if let Err(e) = progress.clear() {
        log::debug!("Failed to clear progress output: {}", e);
    }

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    let output_path = config.output.path.as_deref();
    let mut writer = io::create_writer(format, output_path)?;
    writer.write_results(&results)?;

    if let Some(path) = output_path {
        log::info!(
            "Wrote {} rows to {}",
            results.article_count(),
            path.display()
        );
    }
    Ok(())
}

/// Load lexicons, discover articles and score them.
pub fn run_analysis(config: &TextmapConfig, progress: &ProgressManager) -> Result<AnalysisResults> {
    let lexicons = {
        let _phase = set_phase(AnalysisPhase::LexiconLoading);
        load_lexicons(&config.lexicon)?
    };

    let entries = {
        let _phase = set_phase(AnalysisPhase::ArticleDiscovery);
        discover_articles(config)?
    };
    log::info!("Scoring {} articles", entries.len());

    let _phase = set_phase(AnalysisPhase::Scoring);
    let analyzer = TextAnalyzer::new(&lexicons, config.analysis);
    let bar = progress.create_bar(entries.len() as u64, TEMPLATE_ARTICLE_SCORING);
    bar.set_message("Scoring articles");
    let results = analyze_articles_with_progress(&entries, &analyzer, &config.batch, &bar);
    bar.finish_and_clear();

    Ok(into_analysis_results(results))
}

/// Articles to score: the URL list's identifiers when one is configured,
/// otherwise every article file in the store.
fn discover_articles(config: &TextmapConfig) -> Result<Vec<ArticleEntry>> {
    let walker = ArticleWalker::new(config.articles.dir.clone())
        .with_extension(config.articles.extension.clone());

    match &config.articles.url_list {
        Some(list) => {
            let urls = io::read_url_list(list)?;
            Ok(walker.entries_for_ids(urls.into_iter().map(|u| u.url_id)))
        }
        None => walker.walk().with_context(|| {
            format!(
                "Failed to discover articles in {}",
                config.articles.dir.display()
            )
        }),
    }
}

/// Layer command-line options over the loaded configuration.
pub fn apply_overrides(mut config: TextmapConfig, options: &AnalyzeConfig) -> TextmapConfig {
    if let Some(dir) = &options.articles_dir {
        config.articles.dir = dir.clone();
    }
    if let Some(input) = &options.input {
        config.articles.url_list = Some(input.clone());
    }
    if let Some(dir) = &options.stopwords {
        config.lexicon.stopwords_dir = dir.clone();
    }
    if let Some(path) = &options.positive {
        config.lexicon.positive_words = path.clone();
    }
    if let Some(path) = &options.negative {
        config.lexicon.negative_words = path.clone();
    }
    if let Some(path) = &options.output {
        config.output.path = Some(path.clone());
    }
    if let Some(strategy) = options.syllables {
        config.analysis.syllables = strategy;
    }
    if !options.parallel {
        config.batch.parallelism.enabled = false;
    }
    if options.timing {
        config.batch.collect_timing = true;
    }
    config
}

/// Explicit format, then configured default, then CSV for file output and
/// a table for the terminal.
fn resolve_format(explicit: Option<OutputFormat>, config: &TextmapConfig) -> Result<OutputFormat> {
    if let Some(format) = explicit {
        return Ok(format);
    }
    if let Some(name) = &config.output.default_format {
        return name.parse::<OutputFormat>().map_err(anyhow::Error::msg);
    }
    Ok(if config.output.path.is_some() {
        OutputFormat::Csv
    } else {
        OutputFormat::Terminal
    })
}

/// `-j N` wins over the configured thread limit.
fn effective_jobs(jobs: usize, config: &TextmapConfig) -> usize {
    if jobs > 0 {
        jobs
    } else {
        config.batch.parallelism.effective_concurrency()
    }
}

/// Configure rayon global thread pool once at startup
fn configure_thread_pool(jobs: usize) {
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
    {
        log::debug!("Thread pool already configured: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ParallelConfig;
    use std::fs;
    use tempfile::TempDir;

    fn write_project() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("StopWords")).unwrap();
        fs::create_dir_all(root.join("MasterDictionary")).unwrap();
        fs::create_dir_all(root.join("articles")).unwrap();
        fs::write(root.join("StopWords/generic.txt"), "THE\nA\n").unwrap();
        fs::write(root.join("MasterDictionary/positive-words.txt"), "good\n").unwrap();
        fs::write(root.join("MasterDictionary/negative-words.txt"), "bad\n").unwrap();
        fs::write(root.join("articles/2.txt"), "A bad day.").unwrap();
        fs::write(root.join("articles/1.txt"), "The good news. We won!").unwrap();
        temp_dir
    }

    fn project_config(root: &std::path::Path) -> TextmapConfig {
        let mut config = TextmapConfig::default();
        config.lexicon.stopwords_dir = root.join("StopWords");
        config.lexicon.positive_words = root.join("MasterDictionary/positive-words.txt");
        config.lexicon.negative_words = root.join("MasterDictionary/negative-words.txt");
        config.articles.dir = root.join("articles");
        config
    }

    fn quiet_progress() -> ProgressManager {
        ProgressManager::new(ProgressConfig { quiet_mode: true })
    }

    #[test]
    fn test_run_analysis_scores_discovered_articles_in_order() {
        let project = write_project();
        let config = project_config(project.path());

        let results = run_analysis(&config, &quiet_progress()).unwrap();

        let ids: Vec<_> = results.records.iter().map(|r| r.url_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(results.records[0].positive_score, 1);
        assert_eq!(results.records[1].negative_score, 1);
        assert!(results.failures.is_empty());
    }

    #[test]
    fn test_run_analysis_url_list_keeps_missing_articles() {
        let project = write_project();
        let list = project.path().join("Input.csv");
        fs::write(&list, "URL_ID,URL\n2,https://b\n7,https://g\n").unwrap();
        let mut config = project_config(project.path());
        config.articles.url_list = Some(list);

        let results = run_analysis(&config, &quiet_progress()).unwrap();

        let ids: Vec<_> = results.records.iter().map(|r| r.url_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "7"]);
        assert_eq!(results.records[1].word_count, 0);
        assert_eq!(results.failures.len(), 1);
        assert_eq!(results.failures[0].url_id, "7");
    }

    #[test]
    fn test_run_analysis_missing_lexicon_is_error() {
        let project = write_project();
        let mut config = project_config(project.path());
        config.lexicon.positive_words = project.path().join("nope.txt");

        assert!(run_analysis(&config, &quiet_progress()).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let options = AnalyzeConfig {
            articles_dir: Some(PathBuf::from("stored")),
            syllables: Some(SyllableStrategy::FirstChar),
            parallel: false,
            timing: true,
            ..Default::default()
        };

        let config = apply_overrides(TextmapConfig::default(), &options);

        assert_eq!(config.articles.dir, PathBuf::from("stored"));
        assert_eq!(config.analysis.syllables, SyllableStrategy::FirstChar);
        assert_eq!(config.batch.parallelism, ParallelConfig::sequential());
        assert!(config.batch.collect_timing);
    }

    #[test]
    fn test_resolve_format_precedence() {
        let mut config = TextmapConfig::default();
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Terminal);

        config.output.path = Some(PathBuf::from("out.csv"));
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Csv);

        config.output.default_format = Some("json".into());
        assert_eq!(resolve_format(None, &config).unwrap(), OutputFormat::Json);
        assert_eq!(
            resolve_format(Some(OutputFormat::Terminal), &config).unwrap(),
            OutputFormat::Terminal
        );

        config.output.default_format = Some("xml".into());
        assert!(resolve_format(None, &config).is_err());
    }

    #[test]
    fn test_effective_jobs_prefers_flag() {
        let mut config = TextmapConfig::default();
        config.batch.parallelism.max_concurrency = Some(3);
        assert_eq!(effective_jobs(0, &config), 3);
        assert_eq!(effective_jobs(8, &config), 8);
    }

    #[test]
    fn test_effective_jobs_defaults_to_core_count() {
        let config = TextmapConfig::default();
        assert_eq!(
            effective_jobs(0, &config),
            config.batch.parallelism.effective_concurrency()
        );
        assert!(effective_jobs(0, &config) >= 1);
    }
}
