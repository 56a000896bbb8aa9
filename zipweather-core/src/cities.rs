/// One entry of the fixed major-cities panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityInfo {
    pub name: &'static str,
    pub zip: &'static str,
    pub emoji: &'static str,
    pub region: &'static str,
}

/// The five cities shown on the dashboard panel, one per US region.
pub const MAJOR_CITIES: [CityInfo; 5] = [
    CityInfo {
        name: "New York",
        zip: "10001",
        emoji: "🗽",
        region: "Northeast",
    },
    CityInfo {
        name: "Miami",
        zip: "33101",
        emoji: "🌴",
        region: "Southeast",
    },
    CityInfo {
        name: "Chicago",
        zip: "60601",
        emoji: "🏙️",
        region: "Midwest",
    },
    CityInfo {
        name: "Dallas",
        zip: "75201",
        emoji: "🤠",
        region: "Southwest",
    },
    CityInfo {
        name: "San Jose",
        zip: "95101",
        emoji: "🌉",
        region: "West Coast",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ZipCode;

    #[test]
    fn panel_zip_codes_are_valid() {
        for city in &MAJOR_CITIES {
            assert!(
                city.zip.parse::<ZipCode>().is_ok(),
                "{} has an invalid panel zip",
                city.name
            );
        }
    }
}
