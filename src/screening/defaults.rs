//! Built-in red-flag corpus for Dutch recreational listings.
//!
//! The set is tuned for self-managed short-stay rental: anything that blocks
//! renting the property out yourself (mandatory park operators, rental bans,
//! fee structures above 40%) is a dealbreaker; anything that erodes the
//! yield or needs contract review is a warning.

use super::pattern::RedFlagPattern;

pub(super) fn default_dealbreakers() -> Vec<RedFlagPattern> {
    vec![
        // Rental restrictions
        RedFlagPattern::dealbreaker(
            "verhuur niet toegestaan",
            "Verhuur niet toegestaan - kan niet zelfverhuren",
            100,
        ),
        RedFlagPattern::dealbreaker(
            "permanente bewoning en verhuur zijn niet toegestaan",
            "Zowel bewoning als verhuur verboden",
            100,
        ),
        RedFlagPattern::dealbreaker(
            "verhuur aan derden is niet toegestaan",
            "Verhuur aan derden (gasten) verboden",
            100,
        ),
        RedFlagPattern::dealbreaker(
            "verhuur niet mogelijk",
            "Verhuur expliciet niet mogelijk",
            100,
        ),
        // Mandatory park organisation
        RedFlagPattern::dealbreaker(
            "verplichte verhuur via",
            "Verplichte verhuur via parkorganisatie - geen zelfverhuur mogelijk",
            100,
        ),
        RedFlagPattern::dealbreaker(
            "verhuurmogelijkheden via de organisatie op het park",
            "Verhuur alleen via parkorganisatie toegestaan",
            90,
        ),
        RedFlagPattern::dealbreaker(
            "verhuur alleen via derden toegestaan",
            "Geen zelfverhuur toegestaan",
            100,
        ),
        RedFlagPattern::dealbreaker(
            "uitsluitend verhuur via",
            "Uitsluitend verhuur via parkorganisatie",
            100,
        ),
        // Park operators with mandatory rental structures
        RedFlagPattern::dealbreaker(
            "landal",
            "Landal - verplichte verhuurstructuur met hoge fees (40%+)",
            100,
        ),
        RedFlagPattern::dealbreaker(
            "europarcs",
            "Europarcs - verplichte verhuurstructuur met hoge fees",
            100,
        ),
        RedFlagPattern::dealbreaker(
            "roompot",
            "Roompot - verplichte verhuurstructuur met hoge fees",
            100,
        ),
        RedFlagPattern::dealbreaker(
            "summio",
            "Summio - verplichte verhuurstructuur met hoge fees",
            100,
        ),
        // Commission levels that kill the yield
        RedFlagPattern::dealbreaker(
            "40% fee",
            "40% fee op verhuur - veel te hoog voor rendement",
            95,
        ),
        RedFlagPattern::dealbreaker(
            "40% commissie",
            "40% commissie op verhuur - rendement niet haalbaar",
            95,
        ),
        RedFlagPattern::dealbreaker(
            "50% commissie",
            "50% commissie - extreem hoog, onrendabel",
            95,
        ),
        RedFlagPattern::dealbreaker(
            "over de verhuuropbrengst wordt een fee van 40%",
            "40% fee op opbrengst - te hoge kosten",
            95,
        ),
        // Age restrictions shrink the guest pool
        RedFlagPattern::dealbreaker(
            "minimum leeftijd voor bewoners is 30 jaar",
            "Leeftijdsrestrictie 30+ beperkt doelgroep drastisch",
            80,
        ),
        RedFlagPattern::dealbreaker(
            "minimumleeftijd 30 jaar",
            "Leeftijdsrestrictie beperkt verhuurpotentieel",
            80,
        ),
        // Recron terms
        RedFlagPattern::dealbreaker(
            "recron voorwaarden zijn van toepassing",
            "Recron voorwaarden beperken verhuurvrijheid significant",
            85,
        ),
        RedFlagPattern::dealbreaker(
            "recron voorwaarden",
            "Recron regelgeving beperkt operationele vrijheid",
            85,
        ),
        // Privilege clause adds purchase cost for the rental right
        RedFlagPattern::dealbreaker(
            "privilegeclausule",
            "Privilege clausule: extra kosten (vaak \u{20ac}10.000+) voor verhuurrecht",
            90,
        ),
        RedFlagPattern::dealbreaker(
            "dient er door iedere nieuwe eigenaar de privilegeclausule afgenomen te worden",
            "Verplichte privilege clausule bij overdracht",
            90,
        ),
        // Season restrictions
        RedFlagPattern::dealbreaker(
            "seizoenscamping 1 april - 1 oktober",
            "Alleen zomerseizoen (6 maanden) - 50% van jaar niet bruikbaar",
            85,
        ),
        RedFlagPattern::dealbreaker(
            "seizoenscamping april tot oktober",
            "Alleen zomerseizoen - rendement te laag",
            85,
        ),
        RedFlagPattern::dealbreaker(
            "geopend van maart t/m oktober",
            "Park slechts 8 maanden open - beperkt rendement",
            80,
        ),
        // Maintenance state without specification
        RedFlagPattern::dealbreaker(
            "enig onderhoud nodig",
            "Onduidelijke onderhoudskosten - kan zeer hoog uitpakken",
            75,
        ),
        RedFlagPattern::dealbreaker(
            "renovatie noodzakelijk",
            "Grote renovatie nodig - extra kapitaal vereist",
            80,
        ),
        RedFlagPattern::dealbreaker(
            "het chalet heeft enig onderhoud nodig",
            "Onderhoud nodig zonder specificatie - risicovol",
            75,
        ),
    ]
}

pub(super) fn default_warnings() -> Vec<RedFlagPattern> {
    vec![
        // Leasehold / rented ground
        RedFlagPattern::warning(
            "erfpacht",
            "Erfpacht - check voorwaarden, kosten en looptijd zorgvuldig",
            50,
        ),
        RedFlagPattern::warning(
            "huurgrond",
            "Huurgrond - doorlopende kosten, geen eigendom grond, beperkte exit",
            50,
        ),
        RedFlagPattern::warning(
            "geen eigendom grond",
            "Grond niet in eigendom - beperkte controle en exit opties",
            55,
        ),
        // Park costs
        RedFlagPattern::warning(
            "parkkosten",
            "Parkkosten - vraag specificatie op (gas/water/elektra inbegrepen?)",
            35,
        ),
        RedFlagPattern::warning(
            "servicekosten",
            "Servicekosten - vraag exacte breakdown",
            35,
        ),
        RedFlagPattern::warning(
            "hoge parkkosten",
            "Hoge parkkosten vermeld - kan rendement significant drukken",
            60,
        ),
        RedFlagPattern::warning(
            "parkkosten \u{20ac}",
            "Check of parkkosten all-inclusive zijn (energie/water)",
            30,
        ),
        // Owner approval adds a screening step
        RedFlagPattern::warning(
            "parkeigenaar wil voordat koop tot stand komt gesprek",
            "Goedkeuring parkeigenaar vereist - screeningsproces, mogelijk afwijzing",
            45,
        ),
        RedFlagPattern::warning(
            "goedkeuring eigenaar vereist",
            "Eigenaar moet nieuwe koper goedkeuren - extra onzekerheid",
            45,
        ),
        RedFlagPattern::warning(
            "toestemming eigenaar",
            "Toestemming eigenaar nodig - kan proces vertragen",
            40,
        ),
        // Limited rental windows
        RedFlagPattern::warning(
            "chalet mag 20 weken per jaar recreatief verhuurd worden",
            "Beperkt tot 20 weken verhuur per jaar - 60% van jaar niet beschikbaar",
            70,
        ),
        RedFlagPattern::warning(
            "mag 20 weken verhuurd worden",
            "Slechts 20 weken verhuur toegestaan - beperkt rendement",
            70,
        ),
        RedFlagPattern::warning(
            "park is geopend van maart t/m oktober",
            "Park alleen zomerseizoen open (8 mnd) - wintermaanden beperkt",
            55,
        ),
        RedFlagPattern::warning(
            "verblijf op dit park mag vanaf 25 maart tot 31 oktober",
            "Seizoensbeperking maart-oktober - winter niet mogelijk",
            55,
        ),
        RedFlagPattern::warning(
            "geen overnachting in de winter",
            "Wintermaanden geen verhuur mogelijk - rendement impact",
            60,
        ),
        RedFlagPattern::warning(
            "in de overige maanden mag overdag gerecre\u{eb}erd worden maar niet worden overnacht",
            "Geen overnachtingen buiten seizoen - beperkte verhuurperiode",
            60,
        ),
        // Build year as a maintenance proxy
        RedFlagPattern::warning(
            "bouwjaar 2010",
            "Bouwjaar 2010 - check staat, mogelijke renovatie nodig",
            40,
        ),
        RedFlagPattern::warning(
            "bouwjaar 2005",
            "15+ jaar oud - hogere onderhoudskosten te verwachten",
            45,
        ),
        RedFlagPattern::warning(
            "bouwjaar 2000",
            "20+ jaar oud - waarschijnlijk renovatie nodig",
            50,
        ),
        RedFlagPattern::warning(
            "bouwjaar 1995",
            "25+ jaar oud - significante renovatie waarschijnlijk",
            55,
        ),
        RedFlagPattern::warning(
            "bouwjaar 1990",
            "30+ jaar oud - hoge renovatiekosten verwacht",
            60,
        ),
    ]
}
