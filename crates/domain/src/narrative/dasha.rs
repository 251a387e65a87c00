//! Mahadasha and antardasha narrative tables.
//!
//! Every lookup takes the lord as the backend spells it and returns `None`
//! for anything outside the nine grahas; callers omit the section then.

use super::planet::{Planet, Relationship};

/// Structured text for one planetary period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanetNarrative {
    pub overview: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub remedies: &'static [&'static str],
}

const SUN_MAHADASHA: PlanetNarrative = PlanetNarrative {
    overview: "The Sun period brings leadership, visibility and a stronger sense of purpose. Authority figures and government matters come to the fore.",
    strengths: &[
        "Recognition for work done with integrity",
        "Confidence to take charge and set direction",
        "Support from father figures and seniors",
    ],
    challenges: &[
        "Ego clashes with superiors",
        "Strain on heart and eyesight when overworked",
        "Tendency to act alone rather than delegate",
    ],
    remedies: &[
        "Offer water to the rising Sun (Surya Arghya)",
        "Recite the Aditya Hridayam on Sundays",
        "Respect and serve father figures",
        "Donate wheat or jaggery on Sundays",
    ],
};

const MOON_MAHADASHA: PlanetNarrative = PlanetNarrative {
    overview: "The Moon period turns attention to home, emotions and nourishment. Public dealings and caregiving roles become prominent.",
    strengths: &[
        "Emotional intelligence and empathy",
        "Gains through public-facing work",
        "Comfort at home and with mother",
    ],
    challenges: &[
        "Mood swings and restlessness",
        "Sleep and fluid-balance issues",
        "Over-dependence on approval",
    ],
    remedies: &[
        "Chant the Chandra mantra on Mondays",
        "Keep regular sleep and meal times",
        "Donate rice or milk on Mondays",
        "Spend time near water",
    ],
};

const MARS_MAHADASHA: PlanetNarrative = PlanetNarrative {
    overview: "The Mars period is energetic and action-oriented. Property, engineering, sport and competition are highlighted.",
    strengths: &[
        "Courage to start and finish hard tasks",
        "Progress in land, property and technical work",
        "Physical stamina",
    ],
    challenges: &[
        "Impatience and conflict",
        "Accidents and injuries from haste",
        "Friction with siblings",
    ],
    remedies: &[
        "Recite the Hanuman Chalisa on Tuesdays",
        "Channel energy into regular exercise",
        "Donate red lentils on Tuesdays",
        "Practise patience before reacting",
    ],
};

const MERCURY_MAHADASHA: PlanetNarrative = PlanetNarrative {
    overview: "The Mercury period favours learning, communication, trade and analysis. Writing, teaching and commerce move forward.",
    strengths: &[
        "Sharp intellect and quick learning",
        "Business and negotiation skills",
        "Clear written and spoken communication",
    ],
    challenges: &[
        "Nervous tension and overthinking",
        "Scattered focus across too many projects",
        "Skin and nerve sensitivities",
    ],
    remedies: &[
        "Chant the Budha mantra on Wednesdays",
        "Donate green gram on Wednesdays",
        "Keep agreements written and clear",
        "Feed green fodder to cows",
    ],
};

const JUPITER_MAHADASHA: PlanetNarrative = PlanetNarrative {
    overview: "The Jupiter period brings growth through wisdom, teachers and ethics. Education, children and advisory roles are supported.",
    strengths: &[
        "Guidance from mentors",
        "Expansion of knowledge and wealth",
        "Blessings around children and family",
    ],
    challenges: &[
        "Over-optimism and overcommitment",
        "Weight gain and liver strain",
        "Preachiness in relationships",
    ],
    remedies: &[
        "Chant the Guru mantra on Thursdays",
        "Respect teachers and elders",
        "Donate turmeric or yellow items on Thursdays",
        "Study scripture or philosophy regularly",
    ],
};

const VENUS_MAHADASHA: PlanetNarrative = PlanetNarrative {
    overview: "The Venus period emphasises relationships, comfort, art and finance. Partnerships and creative work flourish.",
    strengths: &[
        "Harmony in marriage and partnerships",
        "Creative and aesthetic success",
        "Material comforts and vehicles",
    ],
    challenges: &[
        "Indulgence and overspending",
        "Complications in romantic matters",
        "Kidney and reproductive sensitivities",
    ],
    remedies: &[
        "Chant the Shukra mantra on Fridays",
        "Donate white sweets or clothes on Fridays",
        "Honour women in the family",
        "Keep surroundings clean and beautiful",
    ],
};

const SATURN_MAHADASHA: PlanetNarrative = PlanetNarrative {
    overview: "The Saturn period rewards discipline, patience and service. Progress is gradual but lasting foundations are built.",
    strengths: &[
        "Endurance and long-term results",
        "Authority earned through hard work",
        "Detachment from what no longer serves",
    ],
    challenges: &[
        "Delays and heavy responsibilities",
        "Joint and bone problems",
        "Loneliness or pessimism",
    ],
    remedies: &[
        "Chant the Shani mantra on Saturdays",
        "Serve the elderly and labourers",
        "Donate black sesame or mustard oil on Saturdays",
        "Keep commitments and routines strictly",
    ],
};

const RAHU_MAHADASHA: PlanetNarrative = PlanetNarrative {
    overview: "The Rahu period drives ambition, innovation and unconventional paths. Foreign connections and technology can bring sudden rise.",
    strengths: &[
        "Bold strategies and risk appetite",
        "Success in technology and foreign lands",
        "Ability to break conventions",
    ],
    challenges: &[
        "Confusion, illusion and deception",
        "Addictive or obsessive tendencies",
        "Sudden reversals",
    ],
    remedies: &[
        "Chant the Rahu mantra on Saturdays",
        "Worship Goddess Durga",
        "Donate blankets to the needy",
        "Keep ethical checks while scaling",
    ],
};

const KETU_MAHADASHA: PlanetNarrative = PlanetNarrative {
    overview: "The Ketu period turns inward towards detachment, research and spirituality. Worldly matters simplify.",
    strengths: &[
        "Spiritual insight and intuition",
        "Depth in research and occult study",
        "Freedom from unnecessary attachments",
    ],
    challenges: &[
        "Lack of direction or sudden losses",
        "Isolation and confusion",
        "Hard-to-diagnose health issues",
    ],
    remedies: &[
        "Worship Lord Ganesha",
        "Chant the Ketu mantra on Tuesdays",
        "Feed stray dogs",
        "Practise meditation daily",
    ],
};

/// Full narrative for a mahadasha lord.
pub fn mahadasha_details(lord: &str) -> Option<&'static PlanetNarrative> {
    let narrative = match Planet::lookup(lord)? {
        Planet::Sun => &SUN_MAHADASHA,
        Planet::Moon => &MOON_MAHADASHA,
        Planet::Mars => &MARS_MAHADASHA,
        Planet::Mercury => &MERCURY_MAHADASHA,
        Planet::Jupiter => &JUPITER_MAHADASHA,
        Planet::Venus => &VENUS_MAHADASHA,
        Planet::Saturn => &SATURN_MAHADASHA,
        Planet::Rahu => &RAHU_MAHADASHA,
        Planet::Ketu => &KETU_MAHADASHA,
    };
    Some(narrative)
}

/// Three headline themes for a mahadasha lord.
pub fn mahadasha_themes(lord: &str) -> Option<&'static [&'static str]> {
    let themes: &'static [&'static str] = match Planet::lookup(lord)? {
        Planet::Ketu => &[
            "Simplification, detachment, spiritual inquiry",
            "Research and behind-the-scenes work prosper",
            "Reduce distractions; strengthen inner routines",
        ],
        Planet::Venus => &[
            "Harmony, relationships, aesthetics, and comforts",
            "Finance and creative collaborations are favored",
            "Build win-win partnerships",
        ],
        Planet::Sun => &[
            "Leadership, visibility, authority, and responsibility",
            "Recognition through performance and integrity",
            "Own decisions; lead fairly",
        ],
        Planet::Moon => &[
            "Home, emotions, nourishment, and wellbeing",
            "Caregiving and supportive roles prosper",
            "Stabilize habits and rest",
        ],
        Planet::Mars => &[
            "Action, courage, engineering, and competition",
            "High energy for decisive progress",
            "Channel effort; avoid conflict",
        ],
        Planet::Rahu => &[
            "Ambition, innovation, global networks, technology",
            "Unconventional paths and bold strategies",
            "Keep ethics and checks while scaling",
        ],
        Planet::Jupiter => &[
            "Growth, learning, advisory, mentorship",
            "Expansion through wisdom and prudence",
            "Share knowledge; stay realistic",
        ],
        Planet::Saturn => &[
            "Structure, discipline, accountability, foundations",
            "Gradual progress and long-term building",
            "Pace sustainably; respect constraints",
        ],
        Planet::Mercury => &[
            "Communication, analysis, commerce, and teaching",
            "Detail-oriented improvements and documentation",
            "Clarify agreements; iterate",
        ],
    };
    Some(themes)
}

/// One-line focus an antardasha lord adds to the running mahadasha.
pub fn antardasha_modifier(lord: &str) -> Option<&'static str> {
    let line = match Planet::lookup(lord)? {
        Planet::Ketu => "Simplify and focus on essentials",
        Planet::Venus => "Emphasize harmony and alliances",
        Planet::Sun => "Step up leadership and visibility",
        Planet::Moon => "Mind emotions; nurture support",
        Planet::Mars => "Act decisively; channel energy",
        Planet::Rahu => "Innovate carefully; validate assumptions",
        Planet::Jupiter => "Learn, mentor, expand wisely",
        Planet::Saturn => "Structure and persist with discipline",
        Planet::Mercury => "Communicate clearly; refine details",
    };
    Some(line)
}

/// Shorter narrative for an antardasha lord.
pub fn antardasha_details(lord: &str) -> Option<&'static PlanetNarrative> {
    const SUN: PlanetNarrative = PlanetNarrative {
        overview: "A Sun sub-period raises visibility and calls for confident, fair leadership.",
        strengths: &["Recognition from seniors", "Clarity of purpose"],
        challenges: &["Pride and rigidity", "Friction with authority"],
        remedies: &["Offer water to the Sun at dawn", "Keep promises to elders"],
    };
    const MOON: PlanetNarrative = PlanetNarrative {
        overview: "A Moon sub-period softens the pace and puts family and feelings first.",
        strengths: &["Supportive relationships", "Public goodwill"],
        challenges: &["Emotional ups and downs", "Irregular rest"],
        remedies: &["Drink water from a silver vessel", "Call or visit your mother"],
    };
    const MARS: PlanetNarrative = PlanetNarrative {
        overview: "A Mars sub-period adds drive and urgency to whatever the main period promises.",
        strengths: &["Decisive action", "Property and technical gains"],
        challenges: &["Arguments and haste", "Minor injuries"],
        remedies: &["Recite the Hanuman Chalisa", "Exercise before making decisions"],
    };
    const MERCURY: PlanetNarrative = PlanetNarrative {
        overview: "A Mercury sub-period is good for paperwork, study, trade and negotiation.",
        strengths: &["Clear communication", "Commercial opportunities"],
        challenges: &["Overthinking", "Miscommunication in contracts"],
        remedies: &["Read agreements twice", "Donate green gram on Wednesdays"],
    };
    const JUPITER: PlanetNarrative = PlanetNarrative {
        overview: "A Jupiter sub-period brings counsel, optimism and measured growth.",
        strengths: &["Mentorship", "Financial and family expansion"],
        challenges: &["Overcommitment", "Complacency"],
        remedies: &["Respect teachers", "Donate yellow items on Thursdays"],
    };
    const VENUS: PlanetNarrative = PlanetNarrative {
        overview: "A Venus sub-period sweetens relationships and favours creative and financial deals.",
        strengths: &["Harmony with partners", "Comforts and aesthetics"],
        challenges: &["Overspending", "Indulgence"],
        remedies: &["Wear clean white on Fridays", "Gift sweets to young girls"],
    };
    const SATURN: PlanetNarrative = PlanetNarrative {
        overview: "A Saturn sub-period slows things down and rewards steady, disciplined effort.",
        strengths: &["Lasting results", "Respect earned through duty"],
        challenges: &["Delays", "Fatigue and low mood"],
        remedies: &["Serve the elderly", "Light a sesame-oil lamp on Saturdays"],
    };
    const RAHU: PlanetNarrative = PlanetNarrative {
        overview: "A Rahu sub-period brings sudden openings; verify before committing.",
        strengths: &["Unconventional breakthroughs", "Foreign or digital opportunities"],
        challenges: &["Confusion and deception", "Restlessness"],
        remedies: &["Worship Goddess Durga", "Avoid intoxicants"],
    };
    const KETU: PlanetNarrative = PlanetNarrative {
        overview: "A Ketu sub-period detaches you from distractions and favours inner work.",
        strengths: &["Intuition", "Focus on essentials"],
        challenges: &["Sudden endings", "Lack of motivation"],
        remedies: &["Worship Lord Ganesha", "Meditate daily"],
    };

    let narrative = match Planet::lookup(lord)? {
        Planet::Sun => &SUN,
        Planet::Moon => &MOON,
        Planet::Mars => &MARS,
        Planet::Mercury => &MERCURY,
        Planet::Jupiter => &JUPITER,
        Planet::Venus => &VENUS,
        Planet::Saturn => &SATURN,
        Planet::Rahu => &RAHU,
        Planet::Ketu => &KETU,
    };
    Some(narrative)
}

/// Note on how an antardasha lord sits with its mahadasha lord.
///
/// `None` for unknown lords or a neutral pairing.
pub fn combination_note(mahadasha: &str, antardasha: &str) -> Option<String> {
    let maha = Planet::lookup(mahadasha)?;
    let antar = Planet::lookup(antardasha)?;

    if maha == antar {
        return Some(format!(
            "{maha}-{antar}: the period's own themes are intensified; keep balance."
        ));
    }

    match antar.relationship_to(maha) {
        Relationship::Friend => Some(format!(
            "{antar} supports {maha}'s agenda; a cooperative sub-period."
        )),
        Relationship::Enemy => Some(format!(
            "{antar} pulls against {maha}'s agenda; expect friction and pace decisions."
        )),
        Relationship::Neutral => None,
    }
}
