//! Static HTML rendering of stored validation results.
//!
//! The site is a plain directory: an `index.html` listing every run, plus
//! one page per run under `runs/` with the full per-expectation breakdown.
//! No assets, no scripts; the pages are self-contained and diff-friendly.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use expectations_core::ExpectationResult;
use expectations_validator::CheckpointResult;

use crate::error::Result;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; color: #222; }\n\
table { border-collapse: collapse; margin-top: 1em; }\n\
th, td { border: 1px solid #ccc; padding: 0.4em 0.8em; text-align: left; }\n\
th { background: #f0f0f0; }\n\
.pass { color: #0a7a2f; font-weight: bold; }\n\
.fail { color: #b00020; font-weight: bold; }\n";

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn verdict(success: bool) -> &'static str {
    if success {
        "<span class=\"pass\">PASS</span>"
    } else {
        "<span class=\"fail\">FAIL</span>"
    }
}

/// Renders stored results into a static HTML site.
#[derive(Debug, Clone)]
pub struct SiteBuilder {
    site_dir: PathBuf,
}

impl SiteBuilder {
    /// Creates a builder writing into the given directory.
    pub fn new(site_dir: impl Into<PathBuf>) -> Self {
        Self {
            site_dir: site_dir.into(),
        }
    }

    /// Renders the index and one page per run, returning the index path.
    ///
    /// Results are rendered in the order given; pass the output of
    /// [`crate::ValidationStore::list`] for most-recent-first.
    pub fn build(&self, results: &[CheckpointResult]) -> Result<PathBuf> {
        let runs_dir = self.site_dir.join("runs");
        fs::create_dir_all(&runs_dir)?;

        for result in results {
            let page = self.render_run(result);
            fs::write(runs_dir.join(format!("{}.html", result.run_id())), page)?;
        }

        let index_path = self.site_dir.join("index.html");
        fs::write(&index_path, self.render_index(results))?;

        info!(
            path = %index_path.display(),
            runs = results.len(),
            "built validation docs site"
        );
        Ok(index_path)
    }

    fn render_index(&self, results: &[CheckpointResult]) -> String {
        let mut rows = String::new();
        for result in results {
            let run_id = result.run_id();
            rows.push_str(&format!(
                "<tr><td><a href=\"runs/{id}.html\">{id}</a></td><td>{suite}</td>\
                 <td>{time}</td><td>{verdict}</td><td>{percent:.1}%</td></tr>\n",
                id = escape(&run_id),
                suite = escape(&result.suite_name),
                time = result.run_time.format("%Y-%m-%d %H:%M:%S UTC"),
                verdict = verdict(result.success),
                percent = result.report.statistics.success_percent,
            ));
        }

        format!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">\
             <title>Validation Results</title><style>{STYLE}</style></head>\n\
             <body>\n<h1>Validation Results</h1>\n\
             <table>\n<tr><th>Run</th><th>Suite</th><th>Time</th>\
             <th>Status</th><th>Success</th></tr>\n{rows}</table>\n</body></html>\n"
        )
    }

    fn render_run(&self, result: &CheckpointResult) -> String {
        let stats = &result.report.statistics;
        let mut rows = String::new();
        for expectation in &result.report.results {
            rows.push_str(&self.render_expectation_row(expectation));
        }

        format!(
            "<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">\
             <title>{id}</title><style>{STYLE}</style></head>\n\
             <body>\n<p><a href=\"../index.html\">&larr; all runs</a></p>\n\
             <h1>{id}</h1>\n\
             <p>Suite <strong>{suite}</strong>, run at {time}: {verdict} \
             ({ok} of {total} expectations, {percent:.1}%)</p>\n\
             <table>\n<tr><th>Expectation</th><th>Column</th><th>Status</th>\
             <th>Observed</th></tr>\n{rows}</table>\n</body></html>\n",
            id = escape(&result.run_id()),
            suite = escape(&result.suite_name),
            time = result.run_time.format("%Y-%m-%d %H:%M:%S UTC"),
            verdict = verdict(result.success),
            ok = stats.successful_expectations,
            total = stats.evaluated_expectations,
            percent = stats.success_percent,
        )
    }

    fn render_expectation_row(&self, result: &ExpectationResult) -> String {
        let detail = &result.result;
        let observed = if let Some(error) = &detail.error {
            format!("error: {}", escape(error))
        } else if let Some(value) = detail.observed_value {
            format!("observed {value}")
        } else if let (Some(unexpected), Some(percent)) =
            (detail.unexpected_count, detail.unexpected_percent)
        {
            format!("{unexpected} unexpected ({percent:.1}%)")
        } else {
            String::new()
        };

        format!(
            "<tr><td>{kind}</td><td>{column}</td><td>{verdict}</td><td>{observed}</td></tr>\n",
            kind = escape(result.expectation_config.kind.name()),
            column = escape(result.expectation_config.kind.column().unwrap_or("-")),
            verdict = verdict(result.success),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expectations_core::{SuiteBuilder, ValidationContext};
    use expectations_validator::{Checkpoint, Column, Table, Validator, Value};

    fn failing_result() -> CheckpointResult {
        let suite = SuiteBuilder::new("users")
            .not_null("email")
            .row_count_between(1, 10)
            .build();
        let table = Table::from_columns(vec![Column::new(
            "email",
            vec![Value::from("a@example.com"), Value::Null],
        )])
        .unwrap();
        Checkpoint::new("nightly", suite).run(
            &mut Validator::new(),
            &table,
            &ValidationContext::new(),
        )
    }

    #[test]
    fn test_build_writes_index_and_run_pages() {
        let dir = tempfile::tempdir().unwrap();
        let builder = SiteBuilder::new(dir.path());

        let result = failing_result();
        let index = builder.build(std::slice::from_ref(&result)).unwrap();

        let index_html = std::fs::read_to_string(&index).unwrap();
        assert!(index_html.contains("Validation Results"));
        assert!(index_html.contains(&result.run_id()));
        assert!(index_html.contains("FAIL"));

        let run_page = dir
            .path()
            .join("runs")
            .join(format!("{}.html", result.run_id()));
        let run_html = std::fs::read_to_string(run_page).unwrap();
        assert!(run_html.contains("not-null"));
        assert!(run_html.contains("1 unexpected (50.0%)"));
        assert!(run_html.contains("observed 2"));
    }

    #[test]
    fn test_build_empty_site() {
        let dir = tempfile::tempdir().unwrap();
        let builder = SiteBuilder::new(dir.path());

        let index = builder.build(&[]).unwrap();
        assert!(index.exists());
    }

    #[test]
    fn test_escape_untrusted_names() {
        assert_eq!(escape("<b>&\"x\""), "&lt;b&gt;&amp;&quot;x&quot;");
    }
}
