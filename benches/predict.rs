use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gradecast::features::{
    Ethnicity, FEATURE_COUNT, FeatureRecord, Gender, ParentalEducation, ParentalSupport,
    SCALED_FEATURE_NAMES,
};
use gradecast::model::StandardScaler;
use gradecast::model::gbrt::{GbrtModel, RegressionTree, TreeNode};
use gradecast::pipeline::PredictorContext;

const TREE_COUNT: usize = 200;

fn setup_context() -> PredictorContext {
    let scaler = StandardScaler {
        model_version: 1,
        feature_names: SCALED_FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        means: vec![16.5, 9.8, 14.5],
        scales: vec![1.1, 5.7, 8.4],
    };
    let trees = (0..TREE_COUNT)
        .map(|i| RegressionTree {
            nodes: vec![
                TreeNode {
                    feature_index: (i % FEATURE_COUNT) as u16,
                    threshold: 0.5,
                    left: Some(1),
                    right: Some(2),
                    value: 0.0,
                },
                TreeNode {
                    feature_index: 0,
                    threshold: 0.0,
                    left: None,
                    right: None,
                    value: -0.01,
                },
                TreeNode {
                    feature_index: 0,
                    threshold: 0.0,
                    left: None,
                    right: None,
                    value: 0.01,
                },
            ],
        })
        .collect();
    let model = GbrtModel {
        model_version: 1,
        feature_count: FEATURE_COUNT,
        learning_rate: 0.1,
        init_prediction: 2.0,
        trees,
    };
    PredictorContext::new(scaler, model)
}

fn sample_record() -> FeatureRecord {
    FeatureRecord {
        age: 16,
        gender: Gender::Male,
        ethnicity: Ethnicity::AfricanAmerican,
        parental_education: ParentalEducation::SomeCollege,
        study_time_weekly: 10.0,
        absences: 5,
        tutoring: true,
        parental_support: ParentalSupport::High,
        extracurricular: true,
        sports: false,
        music: false,
        volunteering: true,
    }
}

fn bench_predict(c: &mut Criterion) {
    let context = setup_context();
    let record = sample_record();
    c.bench_function("predict_gpa", |b| {
        b.iter(|| context.predict_gpa(black_box(&record)));
    });
}

criterion_group!(benches, bench_predict);
criterion_main!(benches);
