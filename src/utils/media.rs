//! URL builders for the media site's driver and team imagery. Purely
//! string work; nothing here talks to the network.

/// Generic team-car image, also the base of the season-scoped URLs.
const TEAM_CAR_FALLBACK_IMAGE_URL: &str =
    "https://media.formula1.com/d_team_car_fallback_image.png/content/dam/fom-website/teams/";

/// Media-site slug for a constructor id, for teams with a known page.
fn team_slug(constructor_id: &str) -> Option<&'static str> {
    match constructor_id {
        "red_bull" => Some("red-bull-racing"),
        "ferrari" => Some("ferrari"),
        "mercedes" => Some("mercedes"),
        "mclaren" => Some("mclaren"),
        "aston_martin" => Some("aston-martin"),
        "alpine" => Some("alpine"),
        "williams" => Some("williams"),
        "rb" => Some("rb"),
        "kick" => Some("kick-sauber"),
        "sauber" => Some("kick-sauber"),
        "haas" => Some("haas-f1-team"),
        "alfa" => Some("alfa-romeo-f1-team-stake"),
        "alphatauri" => Some("alphatauri"),
        "toro_rosso" => Some("scuderia-toro-rosso"),
        "racing_point" => Some("racing-point"),
        "renault" => Some("renault"),
        "lotus_f1" => Some("lotus-f1"),
        "force_india" => Some("force-india"),
        _ => None,
    }
}

/// Season-scoped car image for a constructor, or the generic team-car
/// image for ids without a media slug.
pub fn team_logo_url(constructor_id: &str, season: &str) -> String {
    match team_slug(constructor_id) {
        Some(slug) => format!("{TEAM_CAR_FALLBACK_IMAGE_URL}{season}/{slug}.png"),
        None => TEAM_CAR_FALLBACK_IMAGE_URL.to_string(),
    }
}

/// Placeholder headshot labeled with the driver code, else the first
/// three letters of the family name uppercased, else "F1".
pub fn driver_placeholder_url(code: Option<&str>, family_name: Option<&str>) -> String {
    let label = match code {
        Some(code) if !code.is_empty() => code.to_string(),
        _ => family_name
            .filter(|name| !name.is_empty())
            .map(|name| name.chars().take(3).collect::<String>().to_uppercase())
            .unwrap_or_else(|| "F1".to_string()),
    };
    format!("https://via.placeholder.com/200x200/1A1A1A/E10600?text={label}")
}
