use std::path::Path;
use std::time::Instant;

use anyhow::{Context, bail};
use log::{info, warn};
use med_predict::{PredictionConfig, PredictionService, RecordSnapshot};

/// Interval (days) used for the demand forecasts
const FORECAST_INTERVAL_DAYS: i64 = 7;

/// Learning:testing proportion for the accuracy run
const ACCURACY_PROPORTIONS: [&str; 2] = ["7", "3"];

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let Some(snapshot_path) = args.get(1) else {
        let program = args.first().map_or("med-predict", String::as_str);
        bail!("usage: {program} <snapshot.json> [config.json]");
    };

    let config = match args.get(2) {
        Some(path) => PredictionConfig::from_json_file(Path::new(path))
            .with_context(|| format!("Failed to load configuration from {path}"))?,
        None => PredictionConfig::default(),
    };
    info!("{config}");

    let snapshot = RecordSnapshot::from_json_file(Path::new(snapshot_path))
        .with_context(|| format!("Failed to load record snapshot from {snapshot_path}"))?;
    let service = PredictionService::new(snapshot, config)?;

    let start = Instant::now();
    let dataset = service.build_dataset().context("Failed to build dataset")?;
    info!("Dataset holds {} labelled vectors ({:?})", dataset.len(), start.elapsed());

    match service.prediction_accuracy(&ACCURACY_PROPORTIONS) {
        Ok(accuracy) => info!(
            "Accuracy at {}:{} split: {:.2}%",
            ACCURACY_PROPORTIONS[0],
            ACCURACY_PROPORTIONS[1],
            accuracy * 100.0
        ),
        Err(e) if e.is_validation_error() => warn!("Rejected accuracy proportions: {e}"),
        Err(e) => warn!("Accuracy not available: {e}"),
    }

    match service.statistic_disease() {
        Ok(Some(disease)) => info!("Most common predicted disease: {disease}"),
        Ok(None) => info!("No disease could be predicted"),
        Err(e) => warn!("Statistic disease not available: {e}"),
    }

    let requests = service
        .future_diagnosis_requests(FORECAST_INTERVAL_DAYS)
        .context("Failed to forecast diagnosis requests")?;
    info!("Forecast diagnosis requests in the next {FORECAST_INTERVAL_DAYS} days: {requests:.2}");

    match service
        .most_wanted_doctor(FORECAST_INTERVAL_DAYS)
        .context("Failed to forecast doctor demand")?
    {
        Some(doctor) => info!(
            "Most wanted doctor in the next {FORECAST_INTERVAL_DAYS} days: {} {} (#{})",
            doctor.first_name, doctor.last_name, doctor.id
        ),
        None => warn!("No doctors in the snapshot"),
    }

    info!("Completed in {:?}", start.elapsed());
    Ok(())
}
