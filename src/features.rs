//! Fixed-schema student attributes consumed by the prediction pipeline.
//!
//! The regression model was fitted on a twelve-column table with a fixed
//! column order and no column-name awareness at inference time, so the order
//! in [`FEATURE_NAMES`] is load-bearing: `FeatureRecord::to_vector` is the
//! only place a record is turned into model input, and its layout is pinned
//! by tests.

use std::ops::RangeInclusive;

/// Number of `f32` values per model input vector.
pub const FEATURE_COUNT: usize = 12;

/// Canonical feature order the model and scaler were fitted on.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Age",
    "Gender",
    "Ethnicity",
    "ParentalEducation",
    "StudyTimeWeekly",
    "Absences",
    "Tutoring",
    "ParentalSupport",
    "Extracurricular",
    "Sports",
    "Music",
    "Volunteering",
];

/// Position of `Age` in the canonical vector.
pub const AGE_INDEX: usize = 0;
/// Position of `StudyTimeWeekly` in the canonical vector.
pub const STUDY_TIME_INDEX: usize = 4;
/// Position of `Absences` in the canonical vector.
pub const ABSENCES_INDEX: usize = 5;

/// Names of the features the standard scaler was fitted on, in scaler order.
pub const SCALED_FEATURE_NAMES: [&str; 3] = ["Age", "StudyTimeWeekly", "Absences"];

/// Vector positions of the scaled features, matching [`SCALED_FEATURE_NAMES`].
pub const SCALED_FEATURE_INDEXES: [usize; 3] = [AGE_INDEX, STUDY_TIME_INDEX, ABSENCES_INDEX];

/// Valid range for `Age`.
pub const AGE_RANGE: RangeInclusive<u8> = 15..=18;
/// Valid range for `StudyTimeWeekly` in hours.
pub const STUDY_TIME_RANGE: RangeInclusive<f32> = 0.0..=20.0;
/// Valid range for `Absences`.
pub const ABSENCES_RANGE: RangeInclusive<u8> = 0..=30;

/// Student gender, encoded as fitted (0 = male, 1 = female).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    /// Encoded as 0.
    Male,
    /// Encoded as 1.
    Female,
}

impl Gender {
    /// All variants in encoding order, for choice widgets.
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Display label for the variant.
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Trained integer encoding as a model input value.
    pub fn encoded(self) -> f32 {
        match self {
            Self::Male => 0.0,
            Self::Female => 1.0,
        }
    }
}

/// Student ethnicity category, encoded 0-3 as fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ethnicity {
    /// Encoded as 0.
    Caucasian,
    /// Encoded as 1.
    AfricanAmerican,
    /// Encoded as 2.
    Asian,
    /// Encoded as 3.
    Other,
}

impl Ethnicity {
    /// All variants in encoding order, for choice widgets.
    pub const ALL: [Self; 4] = [
        Self::Caucasian,
        Self::AfricanAmerican,
        Self::Asian,
        Self::Other,
    ];

    /// Display label for the variant.
    pub fn label(self) -> &'static str {
        match self {
            Self::Caucasian => "Caucasian",
            Self::AfricanAmerican => "African American",
            Self::Asian => "Asian",
            Self::Other => "Other",
        }
    }

    /// Trained integer encoding as a model input value.
    pub fn encoded(self) -> f32 {
        match self {
            Self::Caucasian => 0.0,
            Self::AfricanAmerican => 1.0,
            Self::Asian => 2.0,
            Self::Other => 3.0,
        }
    }
}

/// Highest education level of the student's parents, encoded 0-4 as fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentalEducation {
    /// Encoded as 0.
    None,
    /// Encoded as 1.
    HighSchool,
    /// Encoded as 2.
    SomeCollege,
    /// Encoded as 3.
    Bachelors,
    /// Encoded as 4.
    Higher,
}

impl ParentalEducation {
    /// All variants in encoding order, for choice widgets.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::HighSchool,
        Self::SomeCollege,
        Self::Bachelors,
        Self::Higher,
    ];

    /// Display label for the variant.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::HighSchool => "High School",
            Self::SomeCollege => "Some College",
            Self::Bachelors => "Bachelor's",
            Self::Higher => "Higher",
        }
    }

    /// Trained integer encoding as a model input value.
    pub fn encoded(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::HighSchool => 1.0,
            Self::SomeCollege => 2.0,
            Self::Bachelors => 3.0,
            Self::Higher => 4.0,
        }
    }
}

/// Level of parental support, encoded 0-4 as fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentalSupport {
    /// Encoded as 0.
    None,
    /// Encoded as 1.
    Low,
    /// Encoded as 2.
    Moderate,
    /// Encoded as 3.
    High,
    /// Encoded as 4.
    VeryHigh,
}

impl ParentalSupport {
    /// All variants in encoding order, for choice widgets.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Low,
        Self::Moderate,
        Self::High,
        Self::VeryHigh,
    ];

    /// Display label for the variant.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    /// Trained integer encoding as a model input value.
    pub fn encoded(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Low => 1.0,
            Self::Moderate => 2.0,
            Self::High => 3.0,
            Self::VeryHigh => 4.0,
        }
    }
}

/// One student's attributes in the schema the model was trained on.
///
/// Every field is constrained to its trained domain by the input widgets, so
/// construction from the form cannot produce out-of-domain values.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    /// Student age in years (15-18).
    pub age: u8,
    /// Student gender.
    pub gender: Gender,
    /// Ethnicity category.
    pub ethnicity: Ethnicity,
    /// Highest parental education level.
    pub parental_education: ParentalEducation,
    /// Weekly study time in hours (0-20).
    pub study_time_weekly: f32,
    /// Number of absences (0-30).
    pub absences: u8,
    /// Whether the student receives tutoring.
    pub tutoring: bool,
    /// Level of parental support.
    pub parental_support: ParentalSupport,
    /// Whether the student takes part in extracurricular activities.
    pub extracurricular: bool,
    /// Whether the student plays sports.
    pub sports: bool,
    /// Whether the student practices music.
    pub music: bool,
    /// Whether the student volunteers.
    pub volunteering: bool,
}

impl FeatureRecord {
    /// Serialize the record into the canonical model input vector.
    ///
    /// Values land at the positions listed in [`FEATURE_NAMES`]; numeric
    /// features are raw here and standardized later by the pipeline.
    pub fn to_vector(&self) -> [f32; FEATURE_COUNT] {
        [
            f32::from(self.age),
            self.gender.encoded(),
            self.ethnicity.encoded(),
            self.parental_education.encoded(),
            self.study_time_weekly,
            f32::from(self.absences),
            binary(self.tutoring),
            self.parental_support.encoded(),
            binary(self.extracurricular),
            binary(self.sports),
            binary(self.music),
            binary(self.volunteering),
        ]
    }
}

fn binary(flag: bool) -> f32 {
    if flag { 1.0 } else { 0.0 }
}
