//! Narrative insight generation via a local Ollama-compatible service.
//!
//! This is a thin blocking HTTP wrapper: the analysis report is serialized
//! into text prompts and sent to `{base_url}/api/generate`. Calls block for
//! up to a minute, so invoke them outside any latency-sensitive path. Each
//! call returns an explicit `Result`; [`InsightsGenerator::generate_all`]
//! degrades failures to inline message strings so a dead service never
//! aborts the statistical or chart output.

use serde_json::{json, Value};
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::report::AnalysisReport;

/// Request timeout for the generation endpoint.
const GENERATE_TIMEOUT: Duration = Duration::from_secs(60);

/// All three narratives from one report; failed calls carry an inline
/// error message instead of generated text.
#[derive(Debug, Clone)]
pub struct InsightSet {
    pub data_story: String,
    pub visualization_suggestions: String,
    pub next_steps: String,
}

/// Client for the insight-generation service.
pub struct InsightsGenerator {
    base_url: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl InsightsGenerator {
    /// Build a generator from configuration. Fails only if the HTTP
    /// client itself cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(GENERATE_TIMEOUT)
            .build()
            .map_err(|e| Error::Insight(format!("failed to build HTTP client: {}", e)))?;
        Ok(InsightsGenerator {
            base_url: config.ollama_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            client,
        })
    }

    /// Generate a natural-language story about the dataset.
    pub fn generate_data_story(&self, report: &AnalysisReport) -> Result<String> {
        let prompt = format!(
            "You are a helpful data analyst. Create a compelling narrative story about \
             this dataset, focusing on the most interesting findings.\n\n\
             Dataset Overview:\n\
             - Shape: ({}, {})\n\
             - Columns: {}\n\
             - Missing values: {}\n\n\
             Statistical Summary:\n{}\n\n\
             Patterns Found:\n{}\n\n\
             Please provide:\n\
             1. A brief overview of what this data might represent\n\
             2. Key insights and interesting findings (prioritize the top 5)\n\
             3. Notable patterns or anomalies\n\
             4. Potential business implications and recommended next steps\n\n\
             Write in a clear, engaging narrative style and keep the answer concise \
             (about 5-8 paragraphs).",
            report.basic_info.rows,
            report.basic_info.columns,
            report.basic_info.column_names.join(", "),
            serde_json::to_string(&report.basic_info.missing_values)?,
            serde_json::to_string_pretty(&report.statistical_summary)?,
            serde_json::to_string_pretty(&report.patterns)?,
        );
        self.call_generate(&prompt)
    }

    /// Suggest effective visualizations for the dataset.
    pub fn suggest_visualizations(&self, report: &AnalysisReport) -> Result<String> {
        let prompt = format!(
            "Based on this dataset analysis, suggest the most effective visualizations:\n\n\
             Columns and Types:\n{}\n\n\
             Statistical Summary:\n{}\n\n\
             Correlations:\n{}\n\n\
             Recommend specific chart types for:\n\
             - distributions of key numeric variables\n\
             - relationships between correlated variables\n\
             - top categorical breakdowns\n\n\
             For each recommended chart, provide:\n\
             - chart type\n\
             - columns to use\n\
             - brief explanation of why it's valuable\n\
             Limit to 6 suggested visualizations.",
            serde_json::to_string_pretty(&report.basic_info.dtypes)?,
            serde_json::to_string_pretty(&report.statistical_summary)?,
            serde_json::to_string_pretty(&report.patterns.correlations)?,
        );
        self.call_generate(&prompt)
    }

    /// Suggest actionable next analysis steps.
    pub fn suggest_next_steps(&self, report: &AnalysisReport) -> Result<String> {
        let prompt = format!(
            "Based on this data analysis, suggest actionable next steps:\n\n\
             Dataset Info:\n{}\n\n\
             Key Patterns:\n{}\n\n\
             Provide specific recommendations for:\n\
             1. Further analysis opportunities (statistical tests, segmentation, time-series)\n\
             2. Data quality improvements (which columns need cleaning or enrichment)\n\
             3. Potential machine learning applications (target, features)\n\
             4. Business questions to explore\n\n\
             Keep suggestions concise and actionable.",
            serde_json::to_string_pretty(&report.basic_info)?,
            serde_json::to_string_pretty(&report.patterns)?,
        );
        self.call_generate(&prompt)
    }

    /// Run all three generators, converting each failure into an inline
    /// message so downstream output never depends on service health.
    pub fn generate_all(&self, report: &AnalysisReport) -> InsightSet {
        let or_message = |result: Result<String>| match result {
            Ok(text) => text,
            Err(e) => {
                log::warn!("insight generation failed: {}", e);
                e.to_string()
            }
        };
        InsightSet {
            data_story: or_message(self.generate_data_story(report)),
            visualization_suggestions: or_message(self.suggest_visualizations(report)),
            next_steps: or_message(self.suggest_next_steps(report)),
        }
    }

    /// One blocking call to the `/api/generate` endpoint.
    fn call_generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let payload = json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
        });

        log::debug!("requesting insights from {} (model {})", url, self.model);
        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .map_err(|e| Error::Insight(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            return Err(Error::Insight(format!("API error ({}): {}", status, text)));
        }

        let body: Value = response
            .json()
            .map_err(|e| Error::Insight(format!("failed to parse response JSON: {}", e)))?;
        Ok(extract_text(body))
    }
}

/// Pull generated text out of a response body. Ollama returns
/// `{"response": "..."}`; be defensive about close-but-different shapes.
fn extract_text(body: Value) -> String {
    for field in ["response", "output", "text"] {
        if let Some(text) = body.get(field).and_then(Value::as_str) {
            return text.to_string();
        }
    }
    serde_json::to_string_pretty(&body).unwrap_or_else(|_| body.to_string())
}
