//! Dutch rendition of the v1 analysis schema for kort-verblijf verhuurpanden.

use super::{listing_json, CategoryCriteria, RuleSet};
use crate::listing::HouseListing;
use crate::screening::ScanResult;
use serde_json::Value;
use std::fmt::Write as _;

pub struct RulesV1_1_0;

static CATEGORIES: [CategoryCriteria; 4] = [
    CategoryCriteria {
        key: "location",
        name: "Locatie & Bereikbaarheid",
        weight: 0.25,
        criteria: &[
            "Nabijheid van toeristische attracties, openbaar vervoer en voorzieningen",
            "Veiligheid en gewildheid van de buurt",
            "Geluidsniveaus en omgevingsfactoren",
            "Toegankelijkheid voor gasten (parkeren, afstand tot luchthaven)",
            "Lokale concurrentiedichtheid",
        ],
        prompt_template: "Analyseer de locatie op basis van:\n\
            - Adres en buurtkenmerken\n\
            - Afstand tot belangrijke attracties en vervoer\n\
            - Lokale marktdynamiek\n\
            - Bereikbaarheid voor gasten\n\n\
            Score: [0-10]\n\
            Redenering: [Gedetailleerde uitleg]\n\
            Rode vlaggen: [Eventuele zorgen]",
    },
    CategoryCriteria {
        key: "property",
        name: "Pand Kwaliteit",
        weight: 0.30,
        criteria: &[
            "Grootte, indeling en staat van het pand",
            "Voorzieningen en faciliteiten (WiFi, keuken, parkeren, etc.)",
            "Meubileringskwaliteit en volledigheid",
            "Unieke kenmerken of verkoopargumenten",
            "Fotokwaliteit en presentatie",
        ],
        prompt_template: "Analyseer de pandkwaliteit op basis van:\n\
            - Grootte (slaapkamers, badkamers, vierkante meters)\n\
            - Staat en onderhoudsniveau\n\
            - Voorzieningen en kenmerken\n\
            - Meubilering en inrichting\n\
            - Visuele presentatie\n\n\
            Score: [0-10]\n\
            Redenering: [Gedetailleerde uitleg]\n\
            Aanbevelingen: [Verbeteringen]",
    },
    CategoryCriteria {
        key: "financial",
        name: "Financieel Potentieel",
        weight: 0.30,
        criteria: &[
            "Prijs vergeleken met markttarieven",
            "Geschatte bezettingsgraad",
            "Omzetprojecties",
            "Operationele kosten (schoonmaak, nutsvoorzieningen, platformkosten)",
            "ROI-potentieel en terugverdientijd",
        ],
        prompt_template: "Analyseer het financieel potentieel op basis van:\n\
            - Vraagprijs en aankoopkosten\n\
            - Vergelijkbare panden in de omgeving\n\
            - Geschatte jaaromzet bij verhuur\n\
            - Schatting van operationele kosten\n\
            - Investeringsrendement potentieel\n\n\
            Score: [0-10]\n\
            Redenering: [Gedetailleerde op berekeningen gebaseerde uitleg]\n\
            Aannames: [Vermeld gemaakte aannames]",
    },
    CategoryCriteria {
        key: "legal",
        name: "Juridisch & Naleving",
        weight: 0.15,
        criteria: &[
            "Regelgeving voor kort-verblijf verhuur in het gebied",
            "Vereiste vergunningen en licenties",
            "Gebouw/VvE-beperkingen",
            "Belastingimplicaties",
            "Verzekeringsvereisten",
        ],
        prompt_template: "Analyseer juridische en nalevingsfactoren:\n\
            - Lokale regelgeving voor vakantieverhuur\n\
            - Vergunnings-/licentievereisten\n\
            - Eventueel genoemde beperkingen (zoals 'permanente bewoning niet toegestaan')\n\
            - Nalevingsrisico's\n\n\
            Score: [0-10]\n\
            Redenering: [Gedetailleerde uitleg]\n\
            Rode vlaggen: [Kritieke nalevingsproblemen]",
    },
];

const SYSTEM_PROMPT: &str = "\
Je bent een expert vastgoedanalist gespecialiseerd in kort-verblijf verhuurpanden (vakantieverhuur).
Je taak is om panden te analyseren en gedetailleerde, objectieve beoordelingen te geven op basis van specifieke criteria.

Voor elke categorie, geef:
1. Een numerieke score van 0-10
2. Heldere redenering voor de score
3. Specifieke observaties uit de data
4. Actiegerichte aanbevelingen

Wees kritisch en realistisch. Een score van 10 moet uitzonderlijk zijn en zeldzaam.
Identificeer rode vlaggen die impact kunnen hebben op het investeringspotentieel of wettelijke naleving.

Alle analyses moeten in het Nederlands zijn.";

const OUTPUT_FORMAT: &str = r#"
## UITVOERFORMAAT

Reageer met een geldig JSON-object in deze exacte structuur:
{
  "category_scores": {
    "location": {
      "score": 8.5,
      "reasoning": "Gedetailleerde uitleg...",
      "red_flags": ["rode vlag 1", "rode vlag 2"],
      "recommendations": ["aanbeveling 1", "aanbeveling 2"]
    },
    "property": { ... },
    "financial": { ... },
    "legal": { ... }
  },
  "overall_assessment": "Samenvatting van de investeringsmogelijkheid",
  "top_strengths": ["sterkte 1", "sterkte 2", "sterkte 3"],
  "top_concerns": ["zorg 1", "zorg 2", "zorg 3"],
  "investment_recommendation": "KOPEN|OVERWEGEN|AFWIJZEN met uitleg"
}

Zorg ervoor dat alle scores getallen zijn tussen 0 en 10.
Wees specifiek en verwijs naar daadwerkelijke datapunten uit de pand data.
Alle teksten in het Nederlands.
"#;

impl RuleSet for RulesV1_1_0 {
    fn version(&self) -> &'static str {
        "v1.1.0"
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
        prompt.push_str("\n\n## PAND DATA\n");
        let _ = writeln!(prompt, "```json\n{}\n```\n", listing_json(listing));

        prompt.push_str("## VEREISTE ANALYSE\n\n");
        for criteria in self.categories() {
            let _ = writeln!(prompt, "### {} (Weging: {})", criteria.name, criteria.weight);
            let _ = writeln!(prompt, "{}\n", criteria.prompt_template);
        }

        prompt.push_str(OUTPUT_FORMAT);
        prompt
    }
}
