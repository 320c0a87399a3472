//! Game catalog
//!
//! Which games are crawled, in which regions, and the location-service URL
//! for each region page.

/// Location service region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Japan, paged by prefecture
    Jp,
    /// Everywhere else, paged by country
    En,
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Jp, Region::En];

    /// Page ids the location service uses for this region
    pub fn page_ids(&self) -> std::ops::Range<u32> {
        match self {
            Region::Jp => 0..47,
            Region::En => 1000..1020,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Region::Jp => "JP",
            Region::En => "EN",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A game whose cabinets are listed by the location service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    Ongeki,
    Chunithm,
    Maimai,
}

impl Game {
    pub const ALL: [Game; 3] = [Game::Ongeki, Game::Chunithm, Game::Maimai];

    /// Dataset name, also the output file stem
    pub fn name(&self) -> &'static str {
        match self {
            Game::Ongeki => "ongeki",
            Game::Chunithm => "chunithm",
            Game::Maimai => "maimai",
        }
    }

    /// URL template per region; `{id}` is the prefecture or country id
    fn template(&self, region: Region) -> Option<&'static str> {
        match (self, region) {
            (Game::Ongeki, Region::Jp) => {
                Some("https://location.am-all.net/alm/location?gm=88&at={id}&ct=1000")
            }
            (Game::Ongeki, Region::En) => None,
            (Game::Chunithm, Region::Jp) => {
                Some("https://location.am-all.net/alm/location?gm=109&lang=en&ct=1000&at={id}")
            }
            (Game::Chunithm, Region::En) => {
                Some("https://location.am-all.net/alm/location?gm=104&lang=en&ct={id}")
            }
            (Game::Maimai, Region::Jp) => {
                Some("https://location.am-all.net/alm/location?gm=96&lang=en&ct=1000&at={id}")
            }
            (Game::Maimai, Region::En) => {
                Some("https://location.am-all.net/alm/location?gm=98&lang=en&ct={id}")
            }
        }
    }

    pub fn has_region(&self, region: Region) -> bool {
        self.template(region).is_some()
    }

    /// Listing page URL, if the game is offered in the region
    pub fn page_url(&self, region: Region, id: u32) -> Option<String> {
        self.template(region)
            .map(|t| t.replace("{id}", &id.to_string()))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
