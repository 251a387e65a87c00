//! One-line themes for the twelve bhavas.

const HOUSE_THEMES: [&str; 12] = [
    "Self, vitality, and personal direction",
    "Finance, speech, and values",
    "Skills, communication, and initiatives",
    "Home, foundations, and emotional base",
    "Creativity, learning, and expression",
    "Service, routines, and health",
    "Partnerships and contracts",
    "Transformation, research, and shared resources",
    "Higher learning, travel, and guiding principles",
    "Career, status, and responsibility",
    "Gains, networks, and goals",
    "Rest, retreats, and expense management",
];

/// Theme for house 1-12, `None` otherwise.
pub fn house_theme(house: u8) -> Option<&'static str> {
    let index = usize::from(house).checked_sub(1)?;
    HOUSE_THEMES.get(index).copied()
}

/// `"House {n}: {theme}"`, as appended to dasha theme lists.
pub fn house_line(house: u8) -> Option<String> {
    house_theme(house).map(|theme| format!("House {house}: {theme}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn houses_are_one_based() {
        assert_eq!(house_theme(1), Some("Self, vitality, and personal direction"));
        assert_eq!(house_theme(12), Some("Rest, retreats, and expense management"));
        assert_eq!(house_theme(0), None);
        assert_eq!(house_theme(13), None);
    }

    #[test]
    fn house_line_format() {
        assert_eq!(
            house_line(7).as_deref(),
            Some("House 7: Partnerships and contracts")
        );
    }
}
