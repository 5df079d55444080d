//! Shared state types for the egui UI.

use crate::features::{Ethnicity, FeatureRecord, Gender, ParentalEducation, ParentalSupport};

/// Current values of the twelve input widgets.
///
/// Widget ranges keep every field inside its trained domain, so converting to
/// a [`FeatureRecord`] never needs validation.
#[derive(Debug, Clone, PartialEq)]
pub struct InputFormState {
    /// Student age in years.
    pub age: u8,
    /// Selected gender.
    pub gender: Gender,
    /// Selected ethnicity category.
    pub ethnicity: Ethnicity,
    /// Selected parental education level.
    pub parental_education: ParentalEducation,
    /// Weekly study time in hours.
    pub study_time_weekly: f32,
    /// Number of absences.
    pub absences: u8,
    /// Tutoring toggle.
    pub tutoring: bool,
    /// Selected parental support level.
    pub parental_support: ParentalSupport,
    /// Extracurricular toggle.
    pub extracurricular: bool,
    /// Sports toggle.
    pub sports: bool,
    /// Music toggle.
    pub music: bool,
    /// Volunteering toggle.
    pub volunteering: bool,
}

impl Default for InputFormState {
    fn default() -> Self {
        Self {
            age: 15,
            gender: Gender::Male,
            ethnicity: Ethnicity::Caucasian,
            parental_education: ParentalEducation::None,
            study_time_weekly: 0.0,
            absences: 0,
            tutoring: false,
            parental_support: ParentalSupport::None,
            extracurricular: false,
            sports: false,
            music: false,
            volunteering: false,
        }
    }
}

impl InputFormState {
    /// Assemble the record the pipeline consumes from the current widget values.
    pub fn to_record(&self) -> FeatureRecord {
        FeatureRecord {
            age: self.age,
            gender: self.gender,
            ethnicity: self.ethnicity,
            parental_education: self.parental_education,
            study_time_weekly: self.study_time_weekly,
            absences: self.absences,
            tutoring: self.tutoring,
            parental_support: self.parental_support,
            extracurricular: self.extracurricular,
            sports: self.sports,
            music: self.music,
            volunteering: self.volunteering,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{ABSENCES_RANGE, AGE_RANGE, STUDY_TIME_RANGE};

    #[test]
    fn default_form_is_in_domain() {
        let form = InputFormState::default();
        assert!(AGE_RANGE.contains(&form.age));
        assert!(STUDY_TIME_RANGE.contains(&form.study_time_weekly));
        assert!(ABSENCES_RANGE.contains(&form.absences));
    }

    #[test]
    fn record_mirrors_form_values() {
        let form = InputFormState {
            age: 17,
            gender: Gender::Female,
            parental_support: ParentalSupport::VeryHigh,
            study_time_weekly: 12.5,
            ..InputFormState::default()
        };
        let record = form.to_record();
        assert_eq!(record.age, 17);
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.parental_support, ParentalSupport::VeryHigh);
        assert_eq!(record.study_time_weekly, 12.5);
    }
}
