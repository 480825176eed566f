//! Markdown report rendering for finished analyses.
//!
//! The report mirrors the analysis JSON for humans: overall score, the
//! recommendation, red flags gathered from every category, per-category
//! breakdowns, and the processing metadata footer.

use crate::analysis::AnalysisResult;
use serde_json::Value;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

/// Render one analysis as a standalone Markdown document.
pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# 🏠 Analyse Rapport: {}\n", result.house_id);
    let _ = writeln!(out, "**Geanalyseerd op:** {}", result.analyzed_at.to_rfc3339());
    let _ = writeln!(out, "**Rules Versie:** {}\n", result.rules_version);

    let _ = writeln!(out, "## 📊 Overall Score\n");
    let _ = writeln!(out, "### {:.2} / 10\n", result.overall_score);

    let emoji = recommendation_emoji(&result.investment_recommendation);
    let _ = writeln!(
        out,
        "**{} Aanbeveling:** {}\n",
        emoji, result.investment_recommendation
    );

    let all_red_flags: Vec<&str> = result
        .category_scores
        .values()
        .flat_map(|category| category.red_flags.iter().map(String::as_str))
        .collect();
    if !all_red_flags.is_empty() {
        let _ = writeln!(out, "## 🚨 Red Flags\n");
        for flag in &all_red_flags {
            let _ = writeln!(out, "- ⚠️ {flag}");
        }
        out.push('\n');
    }

    render_financial_breakdown(&mut out, result);

    let _ = writeln!(out, "## 📋 Categorie Scores\n");
    for (key, category) in &result.category_scores {
        let display_name = category
            .extra
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(key);
        let _ = writeln!(out, "### {display_name}");
        let _ = writeln!(
            out,
            "**Score:** {:.1}/10 `{}`\n",
            category.score,
            score_bar(category.score)
        );

        if !category.reasoning.is_empty() {
            let _ = writeln!(out, "**Redenering:**");
            let _ = writeln!(out, "{}\n", category.reasoning);
        }
        if !category.red_flags.is_empty() {
            let _ = writeln!(out, "**Rode vlaggen:**");
            for flag in &category.red_flags {
                let _ = writeln!(out, "- ⚠️ {flag}");
            }
            out.push('\n');
        }
        if !category.recommendations.is_empty() {
            let _ = writeln!(out, "**Aanbevelingen:**");
            for recommendation in &category.recommendations {
                let _ = writeln!(out, "- 💡 {recommendation}");
            }
            out.push('\n');
        }
    }

    let _ = writeln!(out, "## 📝 Overall Assessment\n");
    let _ = writeln!(out, "{}\n", result.overall_assessment);

    if !result.top_strengths.is_empty() {
        let _ = writeln!(out, "## 💪 Sterke Punten\n");
        for strength in &result.top_strengths {
            let _ = writeln!(out, "- ✅ {strength}");
        }
        out.push('\n');
    }
    if !result.top_concerns.is_empty() {
        let _ = writeln!(out, "## ⚠️ Zorgen\n");
        for concern in &result.top_concerns {
            let _ = writeln!(out, "- ⚠️ {concern}");
        }
        out.push('\n');
    }

    if let Some(actions) = result.extra.get("action_plan").and_then(Value::as_array) {
        if !actions.is_empty() {
            let _ = writeln!(out, "## 🎯 Actieplan\n");
            for (index, action) in actions.iter().enumerate() {
                if let Some(action) = action.as_str() {
                    let _ = writeln!(out, "{}. {}", index + 1, action);
                }
            }
            out.push('\n');
        }
    }
    if let Some(potential) = result
        .extra
        .get("scale_up_potential")
        .and_then(Value::as_str)
    {
        let _ = writeln!(out, "## 📈 Scale-up Potentieel\n");
        let _ = writeln!(out, "{potential}\n");
    }

    let _ = writeln!(out, "---\n");
    let _ = writeln!(out, "## 🔧 Metadata\n");
    let _ = writeln!(
        out,
        "- **Apify Dataset ID:** {}",
        result.metadata.apify_dataset_id.as_deref().unwrap_or("N/A")
    );
    let _ = writeln!(out, "- **LLM Model:** {}", result.metadata.llm_model);
    let _ = writeln!(
        out,
        "- **Processing Time:** {}s",
        result.metadata.processing_time_seconds
    );

    out
}

/// Render and write the report, creating parent directories as needed.
pub fn save(result: &AnalysisResult, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, render(result))
}

/// The financial category may carry a `calculations` object with deal
/// numbers; render the ones that are present as a table.
fn render_financial_breakdown(out: &mut String, result: &AnalysisResult) {
    let calculations = match result
        .category_scores
        .get("financial")
        .and_then(|category| category.extra.get("calculations"))
        .and_then(Value::as_object)
    {
        Some(calculations) => calculations,
        None => return,
    };

    let amount = |key: &str| calculations.get(key).and_then(Value::as_f64);

    let mut rows = String::new();
    if let Some(price) = amount("purchase_price") {
        let _ = writeln!(rows, "| Aankoopprijs | €{} |", format_amount(price));
    }
    if let Some(investment) = amount("total_investment") {
        let _ = writeln!(rows, "| Totale investering | €{} |", format_amount(investment));
    }
    if let Some(revenue) = amount("estimated_annual_revenue") {
        let _ = writeln!(rows, "| Geschatte jaaromzet | €{} |", format_amount(revenue));
    }
    if let Some(costs) = amount("estimated_annual_costs") {
        let _ = writeln!(rows, "| Geschatte jaarkosten | €{} |", format_amount(costs));
    }
    if let Some(income) = amount("net_annual_income") {
        let _ = writeln!(rows, "| **Netto jaarinkomen** | **€{}** |", format_amount(income));
    }
    if let Some(coc) = amount("cash_on_cash_return") {
        let emoji = if coc >= 15.0 {
            "🟢"
        } else if coc >= 10.0 {
            "🔵"
        } else {
            "🟠"
        };
        let _ = writeln!(rows, "| **Cash-on-Cash Return** | **{emoji} {coc:.1}%** |");
    }
    if let Some(years) = amount("breakeven_years") {
        let _ = writeln!(rows, "| Break-even periode | {years:.1} jaar |");
    }

    if rows.is_empty() {
        return;
    }

    let _ = writeln!(out, "## 💰 Financiële Berekening\n");
    let _ = writeln!(out, "| Item | Bedrag |");
    let _ = writeln!(out, "|------|--------|");
    out.push_str(&rows);
    out.push('\n');
}

/// Filled/empty bar over a 0-10 scale, truncated like integer division.
fn score_bar(score: f64) -> String {
    let filled = (score.max(0.0).min(10.0)) as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(10 - filled));
    bar
}

fn recommendation_emoji(recommendation: &str) -> &'static str {
    let upper = recommendation.to_uppercase();
    if upper.contains("KOPEN") || upper.contains("BUY") {
        "✅"
    } else if upper.contains("AFWIJZEN") || upper.contains("PASS") {
        "❌"
    } else if upper.contains("OVERWEGEN") || upper.contains("CONSIDER") {
        "⚠️"
    } else {
        "ℹ️"
    }
}

/// Round to whole euros and group thousands with commas.
fn format_amount(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if whole < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisMetadata, CategoryScore};
    use chrono::{TimeZone, Utc};
    use serde_json::Map;
    use std::collections::BTreeMap;

    fn sample() -> AnalysisResult {
        let mut category_scores = BTreeMap::new();
        category_scores.insert(
            "location".to_string(),
            CategoryScore {
                score: 8.5,
                reasoning: "Dicht bij de Veluwe".to_string(),
                red_flags: vec!["Drukke weg naast het park".to_string()],
                recommendations: vec!["Controleer geluidsisolatie".to_string()],
                extra: Map::new(),
            },
        );

        AnalysisResult {
            house_id: "43084820".to_string(),
            analyzed_at: Utc.with_ymd_and_hms(2025, 10, 2, 9, 30, 0).unwrap(),
            rules_version: "v2.0.0".to_string(),
            overall_score: 7.43,
            category_scores,
            overall_assessment: "Veelbelovend chalet".to_string(),
            top_strengths: vec!["Ligging".to_string()],
            top_concerns: vec!["Concurrentie".to_string()],
            investment_recommendation: "KOPEN".to_string(),
            metadata: AnalysisMetadata {
                processing_time_seconds: 1.25,
                llm_model: "mock".to_string(),
                apify_dataset_id: None,
            },
            extra: Map::new(),
        }
    }

    #[test]
    fn report_carries_header_score_and_recommendation() {
        let report = render(&sample());
        assert!(report.contains("# 🏠 Analyse Rapport: 43084820"));
        assert!(report.contains("### 7.43 / 10"));
        assert!(report.contains("**✅ Aanbeveling:** KOPEN"));
    }

    #[test]
    fn category_red_flags_are_aggregated_up_front() {
        let report = render(&sample());
        assert!(report.contains("## 🚨 Red Flags"));
        assert!(report.contains("- ⚠️ Drukke weg naast het park"));
    }

    #[test]
    fn score_bar_truncates_to_whole_blocks() {
        assert_eq!(score_bar(8.5), "████████░░");
        assert_eq!(score_bar(0.0), "░░░░░░░░░░");
        assert_eq!(score_bar(10.0), "██████████");
    }

    #[test]
    fn recommendation_emoji_matches_verdicts() {
        assert_eq!(recommendation_emoji("STERK KOPEN"), "✅");
        assert_eq!(recommendation_emoji("AFWIJZEN"), "❌");
        assert_eq!(recommendation_emoji("CONSIDER - verify legal"), "⚠️");
        assert_eq!(recommendation_emoji("onbekend"), "ℹ️");
    }

    #[test]
    fn amounts_group_thousands() {
        assert_eq!(format_amount(125000.0), "125,000");
        assert_eq!(format_amount(1250000.4), "1,250,000");
        assert_eq!(format_amount(950.0), "950");
    }

    #[test]
    fn financial_calculations_render_as_a_table() {
        let mut result = sample();
        let mut extra = Map::new();
        extra.insert(
            "calculations".to_string(),
            serde_json::json!({
                "purchase_price": 125000,
                "net_annual_income": 14250,
                "cash_on_cash_return": 16.2
            }),
        );
        result.category_scores.insert(
            "financial".to_string(),
            CategoryScore {
                score: 7.0,
                reasoning: String::new(),
                red_flags: vec![],
                recommendations: vec![],
                extra,
            },
        );

        let report = render(&result);
        assert!(report.contains("## 💰 Financiële Berekening"));
        assert!(report.contains("| Aankoopprijs | €125,000 |"));
        assert!(report.contains("| **Netto jaarinkomen** | **€14,250** |"));
        assert!(report.contains("**🟢 16.2%**"));
    }

    #[test]
    fn action_plan_renders_numbered_steps() {
        let mut result = sample();
        result.extra.insert(
            "action_plan".to_string(),
            serde_json::json!(["Bezichtiging plannen", "Bod uitbrengen"]),
        );

        let report = render(&result);
        assert!(report.contains("## 🎯 Actieplan"));
        assert!(report.contains("1. Bezichtiging plannen"));
        assert!(report.contains("2. Bod uitbrengen"));
    }

    #[test]
    fn absent_dataset_id_renders_as_not_available() {
        let report = render(&sample());
        assert!(report.contains("- **Apify Dataset ID:** N/A"));
    }
}
