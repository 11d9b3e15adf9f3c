use std::{env, error::Error, fs};

use knet::{
    config::{ExperimentConfig, PlaygroundConfig, ResearchConfig},
    Dataset, DatasetGenerator, Network,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config: PlaygroundConfig = match env::args().nth(1) {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => PlaygroundConfig::default(),
    };

    // One generator for everything, so a seed reproduces the whole run.
    let mut rng = StdRng::seed_from_u64(config.seed);
    for research in &config.researches {
        println!("=== {} ===", research.name);
        run_research(research, &mut rng)?;
        println!();
    }
    Ok(())
}

fn run_research<R>(research: &ResearchConfig, rng: &mut R) -> knet::Result<()>
where
    R: Rng,
{
    let dataset = DatasetGenerator::new(research.group_count).generate_dataset(
        research.property_count,
        research.sample_count,
        rng,
    )?;
    let mut network = Network::new(research.property_count, research.group_count, rng);

    println!("Original dataset:");
    println!("{}", dataset);
    println!();

    for experiment in &research.experiments {
        println!("{}", run_experiment(experiment, &mut network, &dataset, rng)?);
    }
    Ok(())
}

fn run_experiment<R>(
    experiment: &ExperimentConfig,
    network: &mut Network,
    dataset: &Dataset,
    rng: &mut R,
) -> knet::Result<String>
where
    R: Rng,
{
    let mut report = format!(
        "Experiment: EpochCount = {}, L = {}\n",
        experiment.epoch_count, experiment.learning_rate
    );

    network.train(dataset, experiment.epoch_count, experiment.learning_rate, rng);
    report.push_str(&format!("{}\n\n", network));

    let predictions = network.predict_on_dataset(dataset);
    let difference = predictions.compare_datasets(dataset)?;
    report.push_str(&format!("Difference (count = {})\n", difference.len()));
    for d in &difference {
        report.push_str(&format!("{}\n", d));
    }
    Ok(report)
}
