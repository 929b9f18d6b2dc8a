use crate::models::{AgeGroupShare, AudienceShare, CountryShare, DemographicsProfile, GenderSplit};
use lazy_static::lazy_static;

lazy_static! {
    /// Representative audience shown when the demographics route is unavailable
    /// (it needs an authenticated session). Always the same values.
    pub static ref FALLBACK_DEMOGRAPHICS: DemographicsProfile = DemographicsProfile {
        age_groups: vec![
            age("18-24", 25.4, 28.1),
            age("25-34", 35.2, 38.7),
            age("35-44", 22.8, 20.3),
            age("45-54", 12.1, 9.8),
            age("55+", 4.5, 3.1),
        ],
        gender: GenderSplit {
            male: AudienceShare {
                views_percentage: 68.3,
                watch_time_percentage: 71.2,
            },
            female: AudienceShare {
                views_percentage: 31.7,
                watch_time_percentage: 28.8,
            },
        },
        top_countries: vec![
            country("US", "United States", 32.1, 35.4),
            country("IN", "India", 18.7, 16.2),
            country("GB", "United Kingdom", 8.9, 9.8),
            country("CA", "Canada", 6.4, 7.1),
            country("DE", "Germany", 5.2, 5.8),
        ],
    };
}

fn age(label: &str, views: f64, watch_time: f64) -> AgeGroupShare {
    AgeGroupShare {
        age_group: label.to_string(),
        views_percentage: views,
        watch_time_percentage: watch_time,
    }
}

fn country(code: &str, name: &str, views: f64, watch_time: f64) -> CountryShare {
    CountryShare {
        country_code: code.to_string(),
        country_name: name.to_string(),
        views_percentage: views,
        watch_time_percentage: watch_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_matches_documented_values() {
        let profile = &*FALLBACK_DEMOGRAPHICS;
        assert_eq!(profile.gender.male.views_percentage, 68.3);
        assert_eq!(profile.gender.female.views_percentage, 31.7);
        assert_eq!(profile.age_groups.len(), 5);
        assert_eq!(profile.age_groups[1].age_group, "25-34");
    }

    #[test]
    fn fallback_countries_are_top_five_descending() {
        let countries = &FALLBACK_DEMOGRAPHICS.top_countries;
        assert_eq!(countries.len(), 5);
        assert!(countries
            .windows(2)
            .all(|pair| pair[0].views_percentage >= pair[1].views_percentage));
        assert_eq!(countries[0].country_code, "US");
    }
}
