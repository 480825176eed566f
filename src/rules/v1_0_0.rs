//! Initial analysis schema for short-stay rental properties (English).

use super::{listing_json, CategoryCriteria, RuleSet};
use crate::listing::HouseListing;
use crate::screening::ScanResult;
use serde_json::Value;
use std::fmt::Write as _;

pub struct RulesV1_0_0;

static CATEGORIES: [CategoryCriteria; 4] = [
    CategoryCriteria {
        key: "location",
        name: "Location & Accessibility",
        weight: 0.25,
        criteria: &[
            "Proximity to tourist attractions, public transport, and amenities",
            "Neighborhood safety and desirability",
            "Noise levels and environmental factors",
            "Accessibility for guests (parking, airport distance)",
            "Local competition density",
        ],
        prompt_template: "Analyze the location based on:\n\
            - Address and neighborhood characteristics\n\
            - Distance to key attractions and transport\n\
            - Local market dynamics\n\
            - Guest accessibility\n\n\
            Score: [0-10]\n\
            Reasoning: [Detailed explanation]\n\
            Red flags: [Any concerns]",
    },
    CategoryCriteria {
        key: "property",
        name: "Property Quality",
        weight: 0.30,
        criteria: &[
            "Property size, layout, and condition",
            "Amenities and facilities (WiFi, kitchen, parking, etc.)",
            "Furnishing quality and completeness",
            "Unique features or selling points",
            "Photo quality and presentation",
        ],
        prompt_template: "Analyze the property quality based on:\n\
            - Size (bedrooms, bathrooms, square meters)\n\
            - Condition and maintenance level\n\
            - Amenities and features\n\
            - Furnishing and decor\n\
            - Visual presentation\n\n\
            Score: [0-10]\n\
            Reasoning: [Detailed explanation]\n\
            Recommendations: [Improvements]",
    },
    CategoryCriteria {
        key: "financial",
        name: "Financial Potential",
        weight: 0.30,
        criteria: &[
            "Pricing compared to market rates",
            "Estimated occupancy potential",
            "Revenue projections",
            "Operating costs (cleaning, utilities, platform fees)",
            "ROI potential and payback period",
        ],
        prompt_template: "Analyze financial potential based on:\n\
            - Listed price and purchase costs\n\
            - Comparable properties in area\n\
            - Estimated annual revenue\n\
            - Operating cost estimates\n\
            - Investment return potential\n\n\
            Score: [0-10]\n\
            Reasoning: [Detailed calculation-based explanation]\n\
            Assumptions: [State any assumptions made]",
    },
    CategoryCriteria {
        key: "legal",
        name: "Legal & Compliance",
        weight: 0.15,
        criteria: &[
            "Short-stay rental regulations in the area",
            "Required permits and licenses",
            "Building/HOA restrictions",
            "Tax implications",
            "Insurance requirements",
        ],
        prompt_template: "Analyze legal and compliance factors:\n\
            - Local short-stay rental regulations\n\
            - Permit/license requirements\n\
            - Any mentioned restrictions\n\
            - Compliance red flags\n\n\
            Score: [0-10]\n\
            Reasoning: [Detailed explanation]\n\
            Red flags: [Critical compliance issues]",
    },
];

const SYSTEM_PROMPT: &str = "\
You are an expert real estate analyst specializing in short-stay rental properties.
Your task is to analyze properties and provide detailed, objective assessments based on specific criteria.

For each category, provide:
1. A numerical score from 0-10
2. Clear reasoning for the score
3. Specific observations from the data
4. Actionable recommendations

Be critical and realistic. A score of 10 should be exceptional and rare.
Identify red flags that could impact investment potential or legal compliance.";

const OUTPUT_FORMAT: &str = r#"
## OUTPUT FORMAT

Respond with a valid JSON object in this exact structure:
{
  "category_scores": {
    "location": {
      "score": 8.5,
      "reasoning": "Detailed explanation...",
      "red_flags": ["red flag 1", "red flag 2"],
      "recommendations": ["recommendation 1", "recommendation 2"]
    },
    "property": { ... },
    "financial": { ... },
    "legal": { ... }
  },
  "overall_assessment": "Summary of the investment opportunity",
  "top_strengths": ["strength 1", "strength 2", "strength 3"],
  "top_concerns": ["concern 1", "concern 2", "concern 3"],
  "investment_recommendation": "BUY|CONSIDER|REJECT with explanation"
}

Ensure all scores are numbers between 0 and 10.
Be specific and reference actual data points from the property data.
"#;

impl RuleSet for RulesV1_0_0 {
    fn version(&self) -> &'static str {
        "v1.0.0"
    }

    fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    fn categories(&self) -> &'static [CategoryCriteria] {
        &CATEGORIES
    }

    fn analysis_prompt(
        &self,
        listing: &HouseListing,
        _prescreen: Option<&ScanResult>,
        _enrichment: Option<&Value>,
        _market: Option<&Value>,
    ) -> String {
        let mut prompt = String::new();
        prompt.push_str(SYSTEM_PROMPT);
        prompt.push_str("\n\n## PROPERTY DATA\n");
        let _ = writeln!(prompt, "```json\n{}\n```\n", listing_json(listing));

        prompt.push_str("## ANALYSIS REQUIRED\n\n");
        for criteria in self.categories() {
            let _ = writeln!(prompt, "### {} (Weight: {})", criteria.name, criteria.weight);
            let _ = writeln!(prompt, "{}\n", criteria.prompt_template);
        }

        prompt.push_str(OUTPUT_FORMAT);
        prompt
    }
}
