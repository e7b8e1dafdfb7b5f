/// The fixed iTunes podcast taxonomy used by fyyd
///
/// Discriminants are the stable category codes of the API; they never
/// change at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i64)]
pub enum ItunesCategory {
    Arts = 1,
    Business = 8,
    Comedy = 14,
    Education = 15,
    GamesHobbies = 21,
    GovernmentOrganizations = 27,
    Health = 32,
    KidsFamily = 37,
    Music = 38,
    NewsPolitics = 39,
    ReligionSpirituality = 40,
    ScienceMedicine = 48,
    SocietyCulture = 52,
    SportsRecreation = 57,
    Technology = 62,
    TvFilm = 67,
}

impl ItunesCategory {
    /// All 16 known categories
    pub const ALL: [ItunesCategory; 16] = [
        ItunesCategory::Arts,
        ItunesCategory::Business,
        ItunesCategory::Comedy,
        ItunesCategory::Education,
        ItunesCategory::GamesHobbies,
        ItunesCategory::GovernmentOrganizations,
        ItunesCategory::Health,
        ItunesCategory::KidsFamily,
        ItunesCategory::Music,
        ItunesCategory::NewsPolitics,
        ItunesCategory::ReligionSpirituality,
        ItunesCategory::ScienceMedicine,
        ItunesCategory::SocietyCulture,
        ItunesCategory::SportsRecreation,
        ItunesCategory::Technology,
        ItunesCategory::TvFilm,
    ];

    /// The stable integer code used by the API
    pub fn id(self) -> i64 {
        self as i64
    }

    /// Look up a category by its API code
    pub fn from_id(id: i64) -> Option<ItunesCategory> {
        ItunesCategory::ALL.into_iter().find(|c| c.id() == id)
    }

    /// English display name
    pub fn name(self) -> &'static str {
        match self {
            ItunesCategory::Arts => "Arts",
            ItunesCategory::Business => "Business",
            ItunesCategory::Comedy => "Comedy",
            ItunesCategory::Education => "Education",
            ItunesCategory::GamesHobbies => "Games & Hobbies",
            ItunesCategory::GovernmentOrganizations => "Government & Organizations",
            ItunesCategory::Health => "Health",
            ItunesCategory::KidsFamily => "Kids & Family",
            ItunesCategory::Music => "Music",
            ItunesCategory::NewsPolitics => "News & Politics",
            ItunesCategory::ReligionSpirituality => "Religion & Spirituality",
            ItunesCategory::ScienceMedicine => "Science & Medicine",
            ItunesCategory::SocietyCulture => "Society & Culture",
            ItunesCategory::SportsRecreation => "Sports & Recreation",
            ItunesCategory::Technology => "Technology",
            ItunesCategory::TvFilm => "TV & Film",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable() {
        assert_eq!(ItunesCategory::Arts.id(), 1);
        assert_eq!(ItunesCategory::Comedy.id(), 14);
        assert_eq!(ItunesCategory::Technology.id(), 62);
        assert_eq!(ItunesCategory::TvFilm.id(), 67);
    }

    #[test]
    fn from_id_roundtrips_all_categories() {
        for category in ItunesCategory::ALL {
            assert_eq!(ItunesCategory::from_id(category.id()), Some(category));
        }
    }

    #[test]
    fn from_id_rejects_unknown_codes() {
        assert!(ItunesCategory::from_id(0).is_none());
        assert!(ItunesCategory::from_id(999).is_none());
    }

    #[test]
    fn names_are_nonempty() {
        for category in ItunesCategory::ALL {
            assert!(!category.name().is_empty());
        }
    }
}
