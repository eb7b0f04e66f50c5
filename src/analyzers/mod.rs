pub mod batch;

pub use batch::{
    analyze_articles, analyze_articles_with_progress, into_analysis_results, load_article,
    ArticleAnalysisResult,
};
