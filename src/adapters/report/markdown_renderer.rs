//! Markdown report renderer.
//!
//! Produces human-readable tables for weights, the reciprocal comparison
//! matrix and the scenario ranking, rounding numbers to a fixed precision.

use crate::domain::analysis::{DecisionReport, Ranking};
use crate::ports::{RenderError, ReportRenderer};

/// Markdown implementation of ReportRenderer.
#[derive(Debug, Clone)]
pub struct MarkdownReportRenderer {
    precision: usize,
    show_matrix: bool,
}

impl MarkdownReportRenderer {
    /// Creates a renderer printing `precision` decimal places.
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            show_matrix: true,
        }
    }

    /// Sets whether the pairwise matrix is included.
    pub fn with_matrix(mut self, show_matrix: bool) -> Self {
        self.show_matrix = show_matrix;
        self
    }

    fn number(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }

    fn render_weights(&self, report: &DecisionReport) -> String {
        let mut section = String::from("## Criteria Weights\n\n");
        section.push_str("| Criterion | Weight |\n");
        section.push_str("|-----------|--------|\n");
        for weight in &report.weights {
            section.push_str(&format!(
                "| {} | {} |\n",
                escape(&weight.name),
                self.number(weight.weight)
            ));
        }
        section.push('\n');

        let with_variants: Vec<_> = report
            .criteria
            .iter()
            .filter(|c| !c.variants.is_empty())
            .collect();
        if !with_variants.is_empty() {
            section.push_str("### Variants\n");
            for criterion in with_variants {
                section.push_str(&format!(
                    "- **{}:** {}\n",
                    criterion.name,
                    criterion.variants.join(", ")
                ));
            }
            section.push('\n');
        }

        section
    }

    fn render_matrix(&self, report: &DecisionReport) -> String {
        let names: Vec<String> = report.weights.iter().map(|w| escape(&w.name)).collect();

        let mut section = String::from("## Pairwise Comparison Matrix\n\n");
        section.push_str(&format!("| | {} |\n", names.join(" | ")));
        section.push_str(&format!("|---|{}\n", "---|".repeat(names.len())));

        for (name, row) in names.iter().zip(report.matrix.rows()) {
            let cells: Vec<String> = row.iter().map(|v| self.number(*v)).collect();
            section.push_str(&format!("| **{}** | {} |\n", name, cells.join(" | ")));
        }
        section.push('\n');
        section
    }

    fn render_ranking(&self, ranking: &Ranking) -> String {
        let mut section = String::from("## Scenario Ranking (TOPSIS)\n\n");
        section.push_str("| Rank | Scenario | Score | Distance to Ideal | Distance to Negative Ideal |\n");
        section.push_str("|------|----------|-------|-------------------|----------------------------|\n");
        for (index, result) in ranking.results.iter().enumerate() {
            section.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                index + 1,
                escape(&result.name),
                self.number(result.performance_score),
                self.number(result.positive_distance),
                self.number(result.negative_distance)
            ));
        }
        section.push('\n');

        section.push_str(&format!(
            "**Ideal solution:** {}\n\n",
            self.join_numbers(&ranking.ideal_solution)
        ));
        section.push_str(&format!(
            "**Negative-ideal solution:** {}\n",
            self.join_numbers(&ranking.negative_ideal_solution)
        ));
        section
    }

    fn join_numbers(&self, values: &[f64]) -> String {
        values
            .iter()
            .map(|v| self.number(*v))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for MarkdownReportRenderer {
    fn default() -> Self {
        Self::new(2)
    }
}

impl ReportRenderer for MarkdownReportRenderer {
    fn render(&self, report: &DecisionReport) -> Result<String, RenderError> {
        let title = report.title.as_deref().unwrap_or("Decision Report");
        let mut document = format!("# {}\n\n", title);

        document.push_str(&self.render_weights(report));
        if self.show_matrix {
            document.push_str(&self.render_matrix(report));
        }
        if let Some(ranking) = &report.ranking {
            document.push_str(&self.render_ranking(ranking));
        }

        Ok(document)
    }
}

/// Keeps names from breaking table columns.
fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}
