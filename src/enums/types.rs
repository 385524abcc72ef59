//! Closed enumerations for report fields.
//!
//! Every value a report may carry for these fields comes from one of the
//! fixed code sets below; there is no freeform text anywhere in a report.
//! Wire and storage form is the SCREAMING_SNAKE_CASE code.

use strum_macros::{Display, EnumIter, EnumString};

/// Observed enforcement tactics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Tactic {
    /// Agents monitoring an area.
    Surveillance,
    /// Forcible entry without a proper warrant.
    WarrantlessEntry,
    /// Pretending to be someone else (police, landlord, etc.).
    Ruse,
    /// Arresting individuals not originally targeted.
    CollateralArrest,
    /// Physical force used during arrest.
    UseOfForce,
    /// Checkpoints or roving patrols.
    Checkpoint,
    /// Knocking on a door under a false pretense.
    KnockAndTalk,
    /// Asking for IDs with no specific, targeted operation.
    IdCheck,
}

/// General category of the location where the action occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RaidLocationCategory {
    /// Private residence.
    Home,
    /// Public space (park, street, etc.).
    Public,
    /// Workplace or job site.
    Work,
    /// Courthouse or court premises.
    Court,
    /// Medical facility.
    Hospital,
    /// Border crossings or near-border communities.
    Border,
    /// Catch-all for locations not listed.
    Other,
}

/// More specific location context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DetailLocation {
    /// On a street or roadway.
    Street,
    /// During a traffic stop.
    CarStop,
    /// Homeless shelter or charitable facility.
    Shelter,
    /// Probation office.
    Probation,
    /// Parole office.
    Parole,
    /// Specific site of employment (warehouse, factory, etc.).
    Workplace,
    /// Inside a hospital ward or room.
    HospitalWard,
    /// At or within an immigration service center.
    ImmigrationCenter,
    /// Bus station or terminal.
    BusTerminal,
    /// Train station or platform.
    TrainStation,
    /// Airport premises.
    Airport,
    /// Catch-all for other building or facility types.
    OtherFacility,
}

/// Whether the enforcement action succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WasSuccessful {
    /// The action succeeded.
    Yes,
    /// The action did not succeed.
    No,
    /// Outcome not known to the reporter.
    Unknown,
}

/// Non-freeform reference to the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationReference {
    /// A street intersection.
    Intersection,
    /// A bus stop area.
    BusStop,
    /// Station platform or entrance.
    TrainStation,
    /// A numeric ZIP code.
    ZipCode,
    /// A known landmark (monument, park name, etc.).
    Landmark,
    /// No additional reference given.
    None,
}

/// How the reporter learned about the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceOfInfo {
    /// A known media or news source.
    NewsArticle,
    /// The reporter witnessed it firsthand.
    PersonalObservation,
    /// Another community member or group reported it.
    CommunityReport,
    /// Official documents or FOIA data.
    PublicRecord,
}
