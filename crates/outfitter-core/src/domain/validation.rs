use crate::domain::{
    entities::{Color, Garment, NewGarment, Palette, WeatherSnapshot},
    error::DomainError,
    value_objects::{Category, Subcategory},
};

/// Coldest and hottest temperatures (°F) accepted in a weather snapshot.
const PLAUSIBLE_TEMPERATURE: std::ops::RangeInclusive<i32> = -130..=140;

/// Centralized domain validation.
///
/// The generation engine trusts its inputs; everything entering a wardrobe
/// or a generation request passes through here first.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_garment(garment: &Garment) -> Result<(), DomainError> {
        Self::check_category(garment.subcategory, garment.category)?;
        Self::check_palette(&garment.palette)
    }

    pub fn validate_new_garment(garment: &NewGarment) -> Result<(), DomainError> {
        Self::check_category(garment.subcategory, garment.category)?;
        Self::check_palette(&garment.palette)
    }

    pub fn validate_weather(weather: &WeatherSnapshot) -> Result<(), DomainError> {
        for (name, value) in [
            ("high", weather.high),
            ("low", weather.low),
            ("current", weather.current),
        ] {
            if !PLAUSIBLE_TEMPERATURE.contains(&value) {
                return Err(DomainError::InvalidWeather(format!(
                    "{name} temperature {value}°F is outside {}..={}°F",
                    PLAUSIBLE_TEMPERATURE.start(),
                    PLAUSIBLE_TEMPERATURE.end()
                )));
            }
        }

        if weather.low > weather.high {
            return Err(DomainError::InvalidWeather(format!(
                "low {}°F is above high {}°F",
                weather.low, weather.high
            )));
        }

        if weather.rain > 100 || weather.cloud > 100 {
            return Err(DomainError::InvalidWeather(
                "rain and cloud cover are percentages".into(),
            ));
        }

        Ok(())
    }

    fn check_category(subcategory: Subcategory, category: Category) -> Result<(), DomainError> {
        if subcategory.category() != category {
            return Err(DomainError::CategoryMismatch {
                subcategory: subcategory.to_string(),
                category: category.to_string(),
            });
        }
        Ok(())
    }

    fn check_palette(palette: &Palette) -> Result<(), DomainError> {
        Self::check_color(palette.primary, "primary")?;
        if let Some(accent) = palette.accent {
            Self::check_color(accent, "accent")?;
        }
        Ok(())
    }

    fn check_color(color: Color, which: &str) -> Result<(), DomainError> {
        if !color.is_in_gamut() {
            return Err(DomainError::InvalidColor {
                value: format!("({}, {}, {})", color.r, color.g, color.b),
                reason: format!("{which} color channels must lie in [0, 1]"),
            });
        }
        Ok(())
    }
}
