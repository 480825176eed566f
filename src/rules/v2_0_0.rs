//! BNB-expert analysis schema with red-flag pre-screening (Dutch).
//!
//! The pre-screen result is embedded ahead of the category instructions; a
//! rejecting pre-screen instructs the model to keep every category score low
//! and to return a rejecting final recommendation.

use super::{listing_json, value_json, CategoryCriteria, RuleSet};
use crate::listing::HouseListing;
use crate::screening::ScanResult;
use serde_json::Value;
use std::fmt::Write as _;

pub struct RulesV2_0_0;

static CATEGORIES: [CategoryCriteria; 4] = [
    CategoryCriteria {
        key: "location",
        name: "Locatie & Toeristische Aantrekkelijkheid",
        weight: 0.25,
        criteria: &[
            "Nabijheid van toeristische attracties, strand, meer, natuur",
            "Bereikbaarheid via OV en auto (afstand snelweg, station)",
            "Lokale voorzieningen (winkels, restaurants, activiteiten)",
            "A-locatie vs B/C-locatie (impact op bezetting en prijs)",
            "Seizoenspatronen (zomer/winter potentieel)",
            "Concurrentiedichtheid op verhuurplatforms",
        ],
        prompt_template: "Analyseer de locatie met BNB focus:\n\n\
            **TOERISTISCHE AANTREKKELIJKHEID:**\n\
            - Welke attracties zijn binnen 5/10/20 km? (strand, pretparken, steden, natuur)\n\
            - Is dit een A-locatie (hoog potentieel) of B/C-locatie?\n\
            - Wat is het toeristische seizoenspatroon? (alleen zomer of jaar-rond?)\n\n\
            **BEREIKBAARHEID:**\n\
            - Afstand tot snelweg/hoofdweg en OV?\n\
            - Aantrekkelijk voor Duitse toeristen? (belangrijke doelgroep)\n\n\
            **LOKALE MARKT:**\n\
            - Hoeveel concurrenten in de buurt, en tegen welke nachtprijzen?\n\
            - Hoeveel reviews hebben concurrenten? (indicator bezettingsgraad)\n\n\
            **BNB POTENTIEEL:**\n\
            - Kan dit object jaar-rond of alleen seizoensgebonden verhuurd worden?\n\n\
            Score: [0-10]\n\
            Redenering: [Specifiek met marktdata, afstanden, concurrentie-analyse]\n\
            Rode vlaggen: [Eventuele locatie problemen]\n\
            Marktdata: [Platform data waar beschikbaar]",
    },
    CategoryCriteria {
        key: "property",
        name: "Pand Kwaliteit & USP's",
        weight: 0.30,
        criteria: &[
            "Grootte, indeling en staat (slaapkamers, badkamers, m\u{b2})",
            "Unieke verkoopargumenten (hottub, sauna, design, privacy)",
            "Doelgroep geschiktheid (gezinnen, stellen, groepen)",
            "Huisdieren toegestaan? (+30% doelgroep)",
            "Meubilering en inrichting kwaliteit",
            "Buitenruimte (tuin, terras, parking)",
            "Voorzieningen (WiFi, keuken, bbq, wasmachine)",
            "Fotokwaliteit en presentatie",
            "Onderhoudsstaat en renovatie nodig?",
        ],
        prompt_template: "Analyseer pand kwaliteit met verhuur focus:\n\n\
            **BASISSPECIFICATIES:**\n\
            - Slaapkamers/bedden, badkamers, oppervlakte, bouwjaar (impact op onderhoud?)\n\n\
            **UNIEKE VERKOOPARGUMENTEN (USP's):**\n\
            - Wat maakt dit pand SPECIAAL voor gasten? (hottub, sauna, design, uitzicht, privacy)\n\n\
            **DOELGROEP MATCH:**\n\
            - Gezinnen, stellen of groepen? Huisdieren toegestaan? (+30% doelgroep)\n\n\
            **VOORZIENINGEN & PRESENTATIE:**\n\
            - WiFi, keuken, buitenruimte, fotokwaliteit\n\n\
            Score: [0-10]\n\
            Redenering: [USP's en doelgroep match centraal]\n\
            Aanbevelingen: [Concrete verbeteringen met kosten/baten]\n\
            USP highlights: [Lijst van unieke kenmerken]",
    },
    CategoryCriteria {
        key: "financial",
        name: "Financieel Rendement & Scale-up Potentieel",
        weight: 0.30,
        criteria: &[
            "Vraagprijs vs marktwaarde",
            "Geschatte jaaromzet (bezetting \u{d7} nachtprijs \u{d7} 365)",
            "All-in kostenstructuur (parkkosten, energie, onderhoud, platform fees)",
            "Netto cashflow en Cash-on-Cash return",
            "Break-even periode",
            "Financieringsmogelijkheden",
            "Scale-up potentieel: verkoopwaarde over 2-3 jaar",
            "Exit strategie voor opschalen naar duurder object",
        ],
        prompt_template: "Analyseer financieel met BNB rendement focus:\n\n\
            **AANKOOPKOSTEN:** vraagprijs + overdrachtsbelasting (2%) + notaris + renovatie = totale investering\n\n\
            **JAAROMZET BEREKENING:** gebruik marktdata van vergelijkbare objecten;\n\
            reken hoogseizoen/middenseizoen/laagseizoen apart door met bezetting en nachtprijs\n\n\
            **JAARLIJKSE KOSTEN:** parkkosten/erfpacht, energie, gemeentelijke lasten,\n\
            platform fees (10% gemiddeld), schoonmaak, onderhoudsreserve (5-10%),\n\
            administratie, verzekeringen\n\n\
            **RENDEMENT ANALYSE:** bruto en netto jaaromzet, Cash-on-Cash return,\n\
            break-even periode. Oordeel: 15%+ = UITSTEKEND, 10-15% = GOED,\n\
            7-10% = REDELIJK, <7% = ONDERMAATS\n\n\
            **SCALE-UP POTENTIEEL:** verwachte waardestijging en exit strategie over 2-3 jaar\n\n\
            Score: [0-10]\n\
            Redenering: [Gedetailleerd met alle berekeningen]\n\
            Aannames: [Alle gemaakte aannames expliciet vermelden]\n\
            Gevoeligheid: [Wat als bezetting 10% lager? Wat als kosten 20% hoger?]\n\
            Berekeningen: [purchase_price, total_investment, estimated_annual_revenue,\n\
            estimated_annual_costs, net_annual_income, cash_on_cash_return, breakeven_years]",
    },
    CategoryCriteria {
        key: "legal",
        name: "Juridisch, Regelgeving & Verhuurvrijheid",
        weight: 0.15,
        criteria: &[
            "Verhuurrestricties (red flags gedetecteerd?)",
            "Verplichte parkorganisatie of vrije verhuur?",
            "Seizoensbeperkingen of jaar-rond verhuur?",
            "Erfpacht/eigendom grond voorwaarden",
            "VvE/park goedkeuring vereist?",
            "Recron voorwaarden van toepassing?",
            "Privilege clausules of extra kosten?",
            "Lokale regelgeving vakantieverhuur",
            "Belasting implicaties (box 1 vs box 3)",
        ],
        prompt_template: "Analyseer juridisch met ZELFVERHUUR focus:\n\n\
            **RED FLAGS CHECK:** neem de pre-screening resultaten over in deze categorie\n\n\
            **VERHUURVRIJHEID (KRITISCH):** mag je ZELF verhuren via eigen kanalen?\n\
            Is verhuur via parkorganisatie verplicht? Commissies >15% zijn problematisch.\n\
            Vrije prijsstelling mogelijk?\n\n\
            **SEIZOEN & PERIODE:** jaar-rond verhuur toegestaan, of beperkt aantal\n\
            weken/maanden?\n\n\
            **EIGENDOM & GROND:** eigendom of erfpacht/huurgrond; looptijd, canon en\n\
            voorwaarden\n\n\
            **GOEDKEURINGEN:** goedkeuring park/VvE vereist? Recron voorwaarden?\n\
            Privilege clausule bij overdracht?\n\n\
            **DEALBREAKER CHECK:** verhuur niet toegestaan, alleen via parkorganisatie,\n\
            >30% commissie, privilege clausule >\u{20ac}5000, of minder dan 8 maanden verhuur\n\
            per jaar betekent AUTOMATISCH AFWIJZEN\n\n\
            Score: [0-10]\n\
            Redenering: [Focus op vrijheid voor zelfverhuur]\n\
            Rode vlaggen: [Alle juridische risico's]\n\
            Aanbevelingen: [Juridisch advies indien onduidelijk]",
    },
];

const SYSTEM_PROMPT: &str = "\
Je bent een expert BNB/Vakantieverhuur analyst gespecialiseerd in recreatief vastgoed.

## CORE STRATEGIE

**Doel:** Maximaal rendement door ZELF te verhuren
**Aanpak:** Kopen -> Zelfverhuur -> Verkopen -> Opschalen naar duurdere objecten

## ANALYSE OPDRACHT

Voor elk pand:
1. **PRE-SCREENING:** Check alle red flags (als dealbreaker gevonden -> AFWIJZEN)
2. **DEEP ANALYSIS:** Als geschikt, analyseer alle categorieen
3. **RENDEMENT FOCUS:** Bereken realistische opbrengsten op basis van marktdata
4. **SCALE-UP WAARDE:** Kan dit object over 2-3 jaar verkocht worden met winst?
5. **CONCREET ADVIES:** Niet abstract blijven - geef cijfers, berekeningen, actieplan

Wees kritisch, realistisch en data-gedreven. Een score van 10 is uitzonderlijk zeldzaam.
Alle analyses in het Nederlands met concrete berekeningen en marktonderbouwing.";

const REJECT_INSTRUCTION: &str = "\
**BELANGRIJK:** Er zijn dealbreakers gevonden.
Dit pand moet worden AFGEWEZEN zonder verdere analyse.

Geef een beknopte analyse die uitlegt WAAROM dit pand afgekeurd wordt,
met focus op de gevonden dealbreakers. Gebruik lage scores (0-3) voor alle categorieen.

Investment recommendation moet AFWIJZEN zijn met duidelijke onderbouwing.
";

const OUTPUT_FORMAT: &str = r#"
## UITVOERFORMAAT

Reageer met een geldig JSON-object in deze EXACTE structuur:

```json
{
  "category_scores": {
    "location": {
      "score": 7.5,
      "reasoning": "Gedetailleerde analyse met concrete data...",
      "red_flags": ["rode vlag 1"],
      "recommendations": ["aanbeveling 1"],
      "market_data": "Platform data indien beschikbaar"
    },
    "property": {
      "score": 8.0,
      "reasoning": "USP's, doelgroep match, voorzieningen...",
      "red_flags": [],
      "recommendations": ["verbeter fotografie"],
      "usp_highlights": ["hottub", "privacy"]
    },
    "financial": {
      "score": 6.5,
      "reasoning": "Volledige rendement berekening met alle cijfers...",
      "red_flags": ["hoge parkkosten"],
      "recommendations": ["onderhandel prijs"],
      "calculations": {
        "purchase_price": 125000,
        "total_investment": 130000,
        "estimated_annual_revenue": 28000,
        "estimated_annual_costs": 12000,
        "net_annual_income": 16000,
        "cash_on_cash_return": 12.3,
        "breakeven_years": 2.8
      }
    },
    "legal": {
      "score": 9.0,
      "reasoning": "Analyse verhuurvrijheid, seizoen, juridische aspecten...",
      "red_flags": [],
      "recommendations": ["check parkreglement bij notaris"],
      "rental_freedom": "Volledig vrije verhuur mogelijk"
    }
  },
  "overall_assessment": "Samenvatting met focus op zelfverhuur potentieel en scale-up mogelijkheid.",
  "top_strengths": ["sterkte 1 met concrete data", "sterkte 2", "sterkte 3"],
  "top_concerns": ["zorg 1 met impact analyse", "zorg 2", "zorg 3"],
  "investment_recommendation": "KOPEN|OVERWEGEN|AFWIJZEN - met heldere onderbouwing",
  "action_plan": ["concrete actie 1", "concrete actie 2", "concrete actie 3"],
  "scale_up_potential": "Kan dit object over 2-3 jaar met winst verkocht worden?"
}
```

## KWALITEITSEISEN

1. Scores altijd tussen 0-10; een 10 is uitzonderlijk zeldzaam.
2. Gebruik concrete bedragen, percentages en afstanden.
3. Neem ALLE gevonden red flags uit pre-screening over in relevante categorieen.
4. Bij AFWIJZEN: scores 0-3 met heldere uitleg waarom.
5. Actieplan met concrete, uitvoerbare stappen.
6. Alle tekst in correct Nederlands; valide JSON zonder syntax errors.
7. Reasoning per categorie maximaal 400 woorden; wees efficient met woorden.

**LET OP:** Als red flag pre-screening "REJECT" aanbeveelt, moet je investment_recommendation
ook AFWIJZEN zijn met duidelijke focus op de dealbreakers.
"#;

impl RuleSet for RulesV2_0_0 {
    fn version(&self) -> &'static str {
        "v2.0.0"
    }

    fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    fn categories(&self) -> &'static [CategoryCriteria] {
        &CATEGORIES
    }

    fn uses_prescreening(&self) -> bool {
        true
    }

    fn analysis_prompt(
        &self,
        listing: &HouseListing,
        prescreen: Option<&ScanResult>,
        enrichment: Option<&Value>,
        market: Option<&Value>,
    ) -> String {
        let mut prompt = String::new();
        prompt.push_str(SYSTEM_PROMPT);
        prompt.push_str("\n\n");

        if let Some(scan) = prescreen {
            render_prescreen(&mut prompt, scan);
        }

        prompt.push_str("## PAND DATA\n\n");
        let _ = writeln!(prompt, "```json\n{}\n```\n", listing_json(listing));

        if let Some(data) = enrichment {
            prompt.push_str("## MARKTDATA VERRIJKING (AIRBNB/SHORT-TERM RENTAL)\n\n");
            prompt.push_str(
                "Deze data komt van echte listings in de buurt; gebruik haar actief in de financial analysis.\n\n",
            );
            let _ = writeln!(prompt, "```json\n{}\n```\n", value_json(data));
        }

        if let Some(metrics) = market {
            prompt.push_str("## MARKT METRICS (STAD-NIVEAU)\n\n");
            if let Some(city) = listing.city() {
                let _ = writeln!(prompt, "**Markt:** {city}\n");
            }
            let _ = writeln!(prompt, "```json\n{}\n```\n", value_json(metrics));
            prompt.push_str(
                "Gebruik deze data voor context: vergelijk het potentieel met het marktgemiddelde.\n\n",
            );
        }

        prompt.push_str("## VEREISTE ANALYSE PER CATEGORIE\n\n");
        for criteria in self.categories() {
            let _ = writeln!(
                prompt,
                "### {} (Weging: {}%)\n",
                criteria.name,
                (criteria.weight * 100.0).round() as u32
            );
            let _ = writeln!(prompt, "{}\n", criteria.prompt_template);
        }

        prompt.push_str(OUTPUT_FORMAT);
        prompt
    }
}

fn render_prescreen(prompt: &mut String, scan: &ScanResult) {
    prompt.push_str("## RED FLAG PRE-SCREENING RESULTATEN\n\n");
    let _ = writeln!(prompt, "**Aanbeveling:** {}", scan.recommendation);
    let _ = writeln!(prompt, "**Betrouwbaarheid:** {}", scan.confidence);
    let _ = writeln!(prompt, "**Totaal gewicht:** {}\n", scan.total_weight);

    if !scan.dealbreakers.is_empty() {
        let _ = writeln!(
            prompt,
            "**DEALBREAKERS GEVONDEN ({}):**",
            scan.dealbreakers.len()
        );
        for flag in &scan.dealbreakers {
            let _ = writeln!(prompt, "- [{}] {}", flag.weight, flag.reason);
            let _ = writeln!(prompt, "  Pattern: '{}'", flag.pattern);
        }
        prompt.push('\n');
    }

    if !scan.warnings.is_empty() {
        let _ = writeln!(prompt, "**WARNINGS GEVONDEN ({}):**", scan.warnings.len());
        for flag in &scan.warnings {
            let _ = writeln!(prompt, "- [{}] {}", flag.weight, flag.reason);
            let _ = writeln!(prompt, "  Pattern: '{}'", flag.pattern);
        }
        prompt.push('\n');
    }

    if scan.is_reject() {
        prompt.push_str(REJECT_INSTRUCTION);
        prompt.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::HouseListing;
    use crate::screening::RedFlagDetector;

    #[test]
    fn prompt_embeds_prescreen_ahead_of_category_instructions() {
        let listing = HouseListing::from_description("verhuur niet toegestaan op dit park");
        let scan = RedFlagDetector::new().scan(&listing);
        let rules = RulesV2_0_0;

        let prompt = rules.analysis_prompt(&listing, Some(&scan), None, None);

        let prescreen_at = prompt
            .find("RED FLAG PRE-SCREENING")
            .expect("prescreen section present");
        let categories_at = prompt
            .find("VEREISTE ANALYSE PER CATEGORIE")
            .expect("category section present");
        assert!(prescreen_at < categories_at);
        assert!(prompt.contains("AFGEWEZEN zonder verdere analyse"));
    }

    #[test]
    fn prompt_without_findings_omits_the_reject_instruction() {
        let listing = HouseListing::from_description("vrijstaand chalet met eigen grond");
        let scan = RedFlagDetector::new().scan(&listing);
        let rules = RulesV2_0_0;

        let prompt = rules.analysis_prompt(&listing, Some(&scan), None, None);
        assert!(!prompt.contains("AFGEWEZEN zonder verdere analyse"));
        assert!(prompt.contains("**Totaal gewicht:** 0"));
    }

    #[test]
    fn enrichment_and_market_blocks_are_embedded_verbatim() {
        let listing = HouseListing::from_description("chalet");
        let enrichment = serde_json::json!({ "comparables": [{ "bedrooms": 3 }] });
        let market = serde_json::json!({ "occupancy": 0.61 });
        let rules = RulesV2_0_0;

        let prompt = rules.analysis_prompt(&listing, None, Some(&enrichment), Some(&market));
        assert!(prompt.contains("\"bedrooms\": 3"));
        assert!(prompt.contains("\"occupancy\": 0.61"));
    }
}
