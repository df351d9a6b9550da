use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// A player. Dark moves first; the numeric values match the wire convention
/// used by external game managers (1 = dark, 2 = light).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Color {
    Dark = 1,
    Light = 2,
}

impl Color {
    const ALL: [Color; 2] = [Color::Dark, Color::Light];

    pub fn opposite(&self) -> Self {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }

    pub fn random() -> Self {
        *Self::ALL.choose(&mut rand::thread_rng()).unwrap()
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        match value {
            1 => Color::Dark,
            2 => Color::Light,
            _ => panic!("Invalid color value: {} (must be 1 or 2)", value),
        }
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Dark => "dark",
            Color::Light => "light",
        };
        write!(f, "{}", color_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Color {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "dark" => Ok(Color::Dark),
            "light" => Ok(Color::Light),
            "random" => Ok(Color::random()),
            _ => Err("invalid color; options are: dark, light, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::Dark.opposite(), Color::Light);
        assert_eq!(Color::Light.opposite(), Color::Dark);
    }

    #[test]
    fn test_random() {
        assert!(Color::ALL.contains(&Color::random()));
    }

    #[test]
    fn test_parse_dark() {
        assert_eq!(Color::Dark, Color::from_str("dark").unwrap());
    }

    #[test]
    fn test_parse_light() {
        assert_eq!(Color::Light, Color::from_str("light").unwrap());
    }

    #[test]
    fn test_parse_random() {
        let rand_color = Color::from_str("random").unwrap();
        assert!(Color::ALL.contains(&rand_color));
    }

    #[test]
    fn test_color_from_u8() {
        assert_eq!(Color::from(1u8), Color::Dark);
        assert_eq!(Color::from(2u8), Color::Light);
    }

    #[test]
    fn test_color_into_u8() {
        assert_eq!(u8::from(Color::Dark), 1);
        assert_eq!(u8::from(Color::Light), 2);
    }
}
