use crate::models::{CapitalizationMode, SubstitutionRule};

/// Built-in rule declarations, used when no rule file is given
pub fn default_rules() -> Vec<SubstitutionRule> {
    use CapitalizationMode::{Ignore, MatchExact};
    type R = SubstitutionRule;

    vec![
        // Misc nouns
        R::new("cheese", "hardmilk"),
        R::new("milk", "cow juice").output_plural("cow juices"),
        R::new("allegedly", "probably").no_plurals(),
        R::new("new study", "recent rumour").input_plural("new studies").bidirectional(),
        R::new("rebuild", "avenge").bidirectional(),
        R::new("text", "scribble"),
        R::new("writer", "scribbler"),
        R::new("theory", "guesswork").input_plural("theories"),
        R::new("research", "messing around").no_plurals(),
        R::new("creativity", "madness").no_plurals(),
        R::new("idea", "notion"),
        R::new("language", "lingo"),
        R::new("evidence", "ancient legends"),
        R::new("hormones", "jelly beans"),
        R::new("people", "folk"),
        R::new("engineering", "bodging"),
        R::new("authority", "in-chargeness").no_plurals(),
        R::new("productivity", "profitability").bidirectional(),
        R::new("wrongly", "rightly").bidirectional(),
        R::new("elongation", "enlengthening").bidirectional().no_plurals(),
        R::new("essential", "optional").bidirectional(),
        R::new("mandatory", "recommended").bidirectional(),
        R::new("necessary", "impossible").bidirectional(),
        R::new("flood", "surprise bath"),
        R::new("resident", "dweller"),
        R::new("foot", "hand").input_plural("feet").bidirectional(),
        R::new("bucket", "cup").bidirectional(),
        R::new("blood", "custard").bidirectional().no_plurals(),
        R::new("group", "cult"),
        R::new("representative", "deniable agent"),
        R::new("communication", "interference"),
        R::new("communicator", "meddler"),
        R::new("won't", "will").no_plurals().bidirectional(),
        R::new("consulted", "interrogated").no_plurals().bidirectional(),
        R::new("consultation", "interrogation").bidirectional(),
        R::new("brain tumour", "headache").bidirectional(),
        R::new("yes", "no"),
        R::new("should", "shouldn't").bidirectional(),
        R::new("curious", "fearful").bidirectional(),
        R::new("figuratively", "literally").bidirectional(),
        R::new("principles", "quirks").bidirectional(),
        R::new("robust", "shoddy").bidirectional().no_plurals(),
        R::with_alternatives(["verifiable", "verified"], ["legit"])
            .bidirectional()
            .no_plurals(),
        // Question words
        R::new("why", "how").no_plurals(),
        R::new("how", "when").no_plurals(),
        R::new("when", "where").no_plurals(),
        R::new("where", "what").no_plurals(),
        R::new("what", "who").no_plurals(),
        R::new("who", "why").no_plurals(),
        R::new("measurement", "reckoning"),
        R::new("measure", "reckon"),
        // Materials
        R::with_alternatives(["concrete"], ["papier mache", "papier-mâché"]).bidirectional(),
        R::new("philosophy", "pondering"),
        R::new("philosopher", "ponderer"),
        R::new("philosophical", "ponderous"),
        R::new("woke", "awakened").bidirectional(),
        R::new("blessed", "cursed").bidirectional(),
        // Units
        R::new("mile", "furlong").bidirectional(),
        R::with_alternatives(["kilometre", "kilometer"], ["league"]).bidirectional(),
        R::with_alternatives(["litre", "liter"], ["dram"]).bidirectional(),
        // Names
        R::new("charles", "charler"),
        R::new("ben", "benjermy"),
        R::new("benjamin", "benjermy"),
        R::new("larry", "larriott"),
        // Heresy
        R::with_alternatives(["the pope", "pope Francis", "pope"], ["Satan"]).capitalization(Ignore),
        R::new("pope", "Satan").capitalization(Ignore),
        R::new("bible", "1987 Sports Illustrated Swimsuit Issue").capitalization(Ignore),
        R::new("biblical", "literary"),
        // Animals
        R::new("drone", "dog").bidirectional(),
        R::new("bird", "snake").bidirectional(),
        R::new("self driving", "possessed"),
        R::new("self-driving", "possessed"),
        R::new("successfully", "suddenly").bidirectional(),
        R::new("tension", "sexual tension"),
        R::new("optimistic", "delusional").bidirectional(),
        R::new("CEO", "Head Honcho").capitalization(MatchExact),
        // Ships
        R::new("ship", "dinghy").output_plural("dinghies").bidirectional(),
        R::new("yacht", "galleon").bidirectional(),
        R::new("boat", "oil tanker").bidirectional(),
        // Durations
        R::new("second", "year").bidirectional(),
        R::new("minute", "month").bidirectional(),
        R::new("day", "week").bidirectional(),
        // Grammatical
        R::new("may", "must").bidirectional(),
    ]
}
