//! Static advisory tables.
//!
//! Every table is keyed by a closed enum and returns `'static` slices, so
//! iteration order is fixed at compile time. Keys are matched against the
//! lowercased caller input; anything else is left to the caller's fallback.

/// Soil categories known to the crop recommendation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoilType {
    Clay,
    Sandy,
    Loam,
    Silt,
    Peat,
}

impl SoilType {
    pub const ALL: [Self; 5] = [Self::Clay, Self::Sandy, Self::Loam, Self::Silt, Self::Peat];

    /// Category substituted for unrecognized soil input.
    pub const FALLBACK: Self = Self::Loam;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clay => "clay",
            Self::Sandy => "sandy",
            Self::Loam => "loam",
            Self::Silt => "silt",
            Self::Peat => "peat",
        }
    }

    /// Looks up a soil category by its lowercase key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|soil| soil.as_str() == key)
    }

    #[must_use]
    pub const fn recommended_crops(self) -> &'static [&'static str] {
        match self {
            Self::Clay => &["wheat", "rice", "cabbage", "broccoli"],
            Self::Sandy => &["carrots", "potatoes", "peanuts", "watermelon"],
            Self::Loam => &["corn", "soybeans", "tomatoes", "peppers"],
            Self::Silt => &["lettuce", "spinach", "chard", "strawberries"],
            Self::Peat => &["blueberries", "cranberries", "mint"],
        }
    }
}

/// Seasons derived from the calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

/// Month to season mapping, in lookup order.
pub const SEASON_MONTHS: [(Season, [u32; 3]); 4] = [
    (Season::Winter, [12, 1, 2]),
    (Season::Spring, [3, 4, 5]),
    (Season::Summer, [6, 7, 8]),
    (Season::Fall, [9, 10, 11]),
];

impl Season {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
        }
    }

    /// Maps a calendar month (1-12) to its season. Out of range months have none.
    #[must_use]
    pub fn from_month(month: u32) -> Option<Self> {
        SEASON_MONTHS
            .iter()
            .find(|(_, months)| months.contains(&month))
            .map(|(season, _)| *season)
    }
}

/// A symptom phrase and the diagnosis it points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymptomDiagnosis {
    pub symptom: &'static str,
    pub diagnosis: &'static str,
}

const fn entry(symptom: &'static str, diagnosis: &'static str) -> SymptomDiagnosis {
    SymptomDiagnosis { symptom, diagnosis }
}

const TOMATO_DISEASES: &[SymptomDiagnosis] = &[
    entry("yellow leaves", "Nitrogen deficiency or early blight"),
    entry("black spots", "Late blight"),
    entry("wilting", "Fusarium wilt or bacterial wilt"),
    entry("curling leaves", "Tomato yellow leaf curl virus"),
];

const CORN_DISEASES: &[SymptomDiagnosis] = &[
    entry("grey lesions", "Gray leaf spot"),
    entry("rust colored spots", "Common rust"),
    entry("stunted growth", "Nitrogen deficiency"),
    entry("whitish growth", "Downy mildew"),
];

const WHEAT_DISEASES: &[SymptomDiagnosis] = &[
    entry("yellow pustules", "Stripe rust"),
    entry("brown lesions", "Septoria leaf blotch"),
    entry("black spots", "Black point or smut"),
    entry("wilting", "Take-all disease"),
];

/// Planting, maintenance and harvest guidance for one crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropCalendar {
    pub planting_time: &'static str,
    pub maintenance: &'static str,
    pub harvest_time: &'static str,
    pub current_tasks: &'static [(Season, &'static str)],
}

impl CropCalendar {
    #[must_use]
    pub fn task_for(&self, season: Season) -> Option<&'static str> {
        self.current_tasks
            .iter()
            .find(|(task_season, _)| *task_season == season)
            .map(|(_, task)| *task)
    }
}

const TOMATO_CALENDAR: CropCalendar = CropCalendar {
    planting_time: "spring (after last frost)",
    maintenance: "regular watering, pruning, staking",
    harvest_time: "60-80 days after planting, summer to fall",
    current_tasks: &[
        (Season::Spring, "prepare soil, plant seedlings when soil is warm"),
        (Season::Summer, "regular watering, pruning, watch for diseases"),
        (Season::Fall, "final harvests, remove plants at season end"),
        (Season::Winter, "plan for next season, order seeds"),
    ],
};

const CORN_CALENDAR: CropCalendar = CropCalendar {
    planting_time: "late spring when soil is warm",
    maintenance: "consistent watering, fertilizing when knee-high",
    harvest_time: "80-100 days after planting, summer to fall",
    current_tasks: &[
        (Season::Spring, "prepare soil, plant after last frost when soil is warm"),
        (Season::Summer, "side-dress with nitrogen, ensure consistent moisture"),
        (Season::Fall, "harvest when kernels are plump, remove stalks"),
        (Season::Winter, "soil preparation for next season"),
    ],
};

const WHEAT_CALENDAR: CropCalendar = CropCalendar {
    planting_time: "fall for winter wheat, spring for spring wheat",
    maintenance: "weed control, possible irrigation",
    harvest_time: "summer for winter wheat, late summer for spring wheat",
    current_tasks: &[
        (Season::Spring, "plant spring wheat, monitor winter wheat growth"),
        (Season::Summer, "harvest winter wheat, prepare for storage"),
        (Season::Fall, "plant winter wheat, soil preparation"),
        (Season::Winter, "monitor winter wheat dormancy"),
    ],
};

/// Crops covered by the disease and calendar tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crop {
    Tomato,
    Corn,
    Wheat,
}

impl Crop {
    pub const ALL: [Self; 3] = [Self::Tomato, Self::Corn, Self::Wheat];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tomato => "tomato",
            Self::Corn => "corn",
            Self::Wheat => "wheat",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|crop| crop.as_str() == key)
    }

    /// Symptom phrases in match priority order.
    #[must_use]
    pub const fn diseases(self) -> &'static [SymptomDiagnosis] {
        match self {
            Self::Tomato => TOMATO_DISEASES,
            Self::Corn => CORN_DISEASES,
            Self::Wheat => WHEAT_DISEASES,
        }
    }

    #[must_use]
    pub const fn calendar(self) -> &'static CropCalendar {
        match self {
            Self::Tomato => &TOMATO_CALENDAR,
            Self::Corn => &CORN_CALENDAR,
            Self::Wheat => &WHEAT_CALENDAR,
        }
    }
}

/// Farming styles with a sustainable practice list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FarmingType {
    Conventional,
    Organic,
    Hydroponics,
}

impl FarmingType {
    pub const ALL: [Self; 3] = [Self::Conventional, Self::Organic, Self::Hydroponics];

    /// Style substituted for unrecognized farming input.
    pub const FALLBACK: Self = Self::Conventional;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conventional => "conventional",
            Self::Organic => "organic",
            Self::Hydroponics => "hydroponics",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.as_str() == key)
    }

    #[must_use]
    pub const fn practices(self) -> &'static [&'static str] {
        match self {
            Self::Conventional => &[
                "Implement crop rotation to break pest cycles",
                "Use cover crops to prevent erosion and add nutrients",
                "Practice integrated pest management to reduce chemical use",
                "Install buffer zones around water sources",
                "Use precision agriculture for targeted application of inputs",
            ],
            Self::Organic => &[
                "Use compost and natural amendments for soil fertility",
                "Introduce beneficial insects for pest control",
                "Practice polyculture and companion planting",
                "Use mulch for weed suppression and moisture retention",
                "Rotate grazing for pasture management",
            ],
            Self::Hydroponics => &[
                "Recirculate and filter water to minimize waste",
                "Use LED lighting for energy efficiency",
                "Monitor nutrient levels closely to prevent runoff",
                "Consider aquaponics to create a closed system",
                "Use renewable energy sources to power systems",
            ],
        }
    }
}

/// Farming challenges with targeted solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Challenge {
    WaterConservation,
    SoilErosion,
    PestManagement,
}

impl Challenge {
    pub const ALL: [Self; 3] = [Self::WaterConservation, Self::SoilErosion, Self::PestManagement];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WaterConservation => "water conservation",
            Self::SoilErosion => "soil erosion",
            Self::PestManagement => "pest management",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|challenge| challenge.as_str() == key)
    }

    #[must_use]
    pub const fn solutions(self) -> &'static [&'static str] {
        match self {
            Self::WaterConservation => &[
                "Install drip irrigation systems",
                "Collect rainwater for irrigation",
                "Use soil moisture sensors to optimize watering",
                "Apply mulch to reduce evaporation",
                "Select drought-resistant crop varieties",
            ],
            Self::SoilErosion => &[
                "Plant cover crops during off-seasons",
                "Implement contour farming on sloped land",
                "Create windbreaks with trees or shrubs",
                "Use no-till or minimum tillage practices",
                "Establish grassed waterways in high-flow areas",
            ],
            Self::PestManagement => &[
                "Encourage biodiversity to support beneficial insects",
                "Use trap crops to divert pests from main crops",
                "Implement crop rotation to disrupt pest cycles",
                "Consider row covers for physical protection",
                "Release beneficial insects like ladybugs or predatory mites",
            ],
        }
    }
}
