//! Lucky number, colour and time derived from the day's panchang facts.

use serde::Serialize;

const TIME_SLOTS: [&str; 4] = ["Morning", "Afternoon", "Evening", "Night"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckyFacts {
    pub number: u32,
    pub color: &'static str,
    pub time: &'static str,
}

impl LuckyFacts {
    /// A missing or zero tithi is treated as 1; an unknown weekday gives Saffron.
    pub fn from_parts(tithi: Option<u32>, weekday: Option<&str>) -> Self {
        let tithi = tithi.filter(|t| *t != 0).unwrap_or(1);
        Self {
            number: (tithi % 9) + 1,
            color: weekday.map(color_for_weekday).unwrap_or("Saffron"),
            time: TIME_SLOTS[(tithi % 4) as usize],
        }
    }
}

fn color_for_weekday(weekday: &str) -> &'static str {
    match weekday {
        "Monday" => "White",
        "Tuesday" => "Red",
        "Wednesday" => "Green",
        "Thursday" => "Yellow",
        "Friday" => "Pink",
        "Saturday" => "Blue",
        "Sunday" => "Orange",
        _ => "Saffron",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_from_tithi_and_weekday() {
        let facts = LuckyFacts::from_parts(Some(10), Some("Thursday"));
        assert_eq!(facts.number, 2);
        assert_eq!(facts.color, "Yellow");
        assert_eq!(facts.time, "Evening");
    }

    #[test]
    fn missing_facts_use_defaults() {
        let facts = LuckyFacts::from_parts(None, None);
        assert_eq!(facts.number, 2);
        assert_eq!(facts.color, "Saffron");
        assert_eq!(facts.time, "Afternoon");
    }

    #[test]
    fn zero_tithi_behaves_like_one() {
        assert_eq!(
            LuckyFacts::from_parts(Some(0), Some("Monday")),
            LuckyFacts::from_parts(Some(1), Some("Monday"))
        );
    }

    #[test]
    fn unknown_weekday_is_saffron() {
        assert_eq!(LuckyFacts::from_parts(Some(4), Some("Funday")).color, "Saffron");
        assert_eq!(LuckyFacts::from_parts(Some(4), None).time, "Morning");
    }
}
