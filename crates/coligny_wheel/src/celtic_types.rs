//! Celtic calendar enumerations and result type.

/// Scheme selector for [`crate::celtic::celtic_date`].
///
/// The two schemes disagree on cycle anchors (Dec 21 + Monday roll vs a
/// plain Dec 23 roll), month names, and special days. This is an inherited
/// inconsistency, not a configuration knob with a sensible default, so
/// there is deliberately no `Default` impl: callers must pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CelticScheme {
    /// Thirteen fixed 28-day divisions from the solstice-following Monday,
    /// with Leap Day and Floating Day specials.
    FixedDivision,
    /// Thirteen named boundary ranges from Dec 23, with the 1-2 day
    /// Mirabilis wrap.
    SolsticeRange,
}

/// The 13 months of the fixed-division scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DivisionMonth {
    Yule,
    Janus,
    Brigid,
    Flora,
    Maya,
    Juno,
    Solis,
    Terra,
    Lugh,
    Pomona,
    Autumma,
    Frost,
    Aether,
}

/// All 13 division months in cycle order (index 0 = Yule).
pub const ALL_DIVISION_MONTHS: [DivisionMonth; 13] = [
    DivisionMonth::Yule,
    DivisionMonth::Janus,
    DivisionMonth::Brigid,
    DivisionMonth::Flora,
    DivisionMonth::Maya,
    DivisionMonth::Juno,
    DivisionMonth::Solis,
    DivisionMonth::Terra,
    DivisionMonth::Lugh,
    DivisionMonth::Pomona,
    DivisionMonth::Autumma,
    DivisionMonth::Frost,
    DivisionMonth::Aether,
];

impl DivisionMonth {
    /// Display name of the month.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yule => "Yule",
            Self::Janus => "Janus",
            Self::Brigid => "Brigid",
            Self::Flora => "Flora",
            Self::Maya => "Maya",
            Self::Juno => "Juno",
            Self::Solis => "Solis",
            Self::Terra => "Terra",
            Self::Lugh => "Lugh",
            Self::Pomona => "Pomona",
            Self::Autumma => "Autumma",
            Self::Frost => "Frost",
            Self::Aether => "Aether",
        }
    }

    /// 0-based cycle index (Yule=0 .. Aether=12).
    pub const fn index(self) -> u32 {
        match self {
            Self::Yule => 0,
            Self::Janus => 1,
            Self::Brigid => 2,
            Self::Flora => 3,
            Self::Maya => 4,
            Self::Juno => 5,
            Self::Solis => 6,
            Self::Terra => 7,
            Self::Lugh => 8,
            Self::Pomona => 9,
            Self::Autumma => 10,
            Self::Frost => 11,
            Self::Aether => 12,
        }
    }
}

/// The 13 named ranges of the solstice-range scheme plus the Mirabilis
/// wrap day(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeMonth {
    Nivis,
    Gelum,
    Imber,
    Ventus,
    Flora,
    Lumen,
    Solis,
    Fervor,
    Messis,
    Pomona,
    Folium,
    Umbra,
    Aether,
    Mirabilis,
}

/// All 14 range months in cycle order (Mirabilis last).
pub const ALL_RANGE_MONTHS: [RangeMonth; 14] = [
    RangeMonth::Nivis,
    RangeMonth::Gelum,
    RangeMonth::Imber,
    RangeMonth::Ventus,
    RangeMonth::Flora,
    RangeMonth::Lumen,
    RangeMonth::Solis,
    RangeMonth::Fervor,
    RangeMonth::Messis,
    RangeMonth::Pomona,
    RangeMonth::Folium,
    RangeMonth::Umbra,
    RangeMonth::Aether,
    RangeMonth::Mirabilis,
];

impl RangeMonth {
    /// Display name of the range month.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nivis => "Nivis",
            Self::Gelum => "Gelum",
            Self::Imber => "Imber",
            Self::Ventus => "Ventus",
            Self::Flora => "Flora",
            Self::Lumen => "Lumen",
            Self::Solis => "Solis",
            Self::Fervor => "Fervor",
            Self::Messis => "Messis",
            Self::Pomona => "Pomona",
            Self::Folium => "Folium",
            Self::Umbra => "Umbra",
            Self::Aether => "Aether",
            Self::Mirabilis => "Mirabilis",
        }
    }
}

/// Name of the fixed-division leap special day.
pub const LEAP_DAY: &str = "Leap Day";
/// Name of the fixed-division year-end special day.
pub const FLOATING_DAY: &str = "Floating Day";
/// Sentinel month name for dates the fixed-division scheme cannot place.
pub const INVALID_DATE: &str = "Invalid Date";

/// A date expressed in a Celtic scheme.
///
/// `day` is `None` only for the `Invalid Date` sentinel; special days
/// (Leap Day, Floating Day, Mirabilis) carry a real day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelticDate {
    pub month: &'static str,
    pub day: Option<u32>,
}

impl CelticDate {
    /// The out-of-cycle sentinel. A defined result, not an error.
    pub const fn invalid() -> Self {
        Self {
            month: INVALID_DATE,
            day: None,
        }
    }

    /// Whether this is the out-of-cycle sentinel.
    pub const fn is_invalid(&self) -> bool {
        self.day.is_none()
    }
}
