use anyhow::Result;
use clap::Parser;

use frame_animator::cli::Cli;
use frame_animator::{build_initial_scene, AnimationConfig, RayTracer, Timeline};

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level())).init();

    let config = match &cli.config {
        Some(path) => AnimationConfig::load(path)?,
        None => AnimationConfig::default(),
    };
    let config = cli.apply(config);

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }
    config.validate()?;

    let scene = build_initial_scene();
    let rig = config.rig();
    let mut timeline = Timeline::new(
        config.schedule(),
        config.naming(),
        &rig,
        &scene,
        RayTracer::new(config.render),
    );

    if cli.dry_run {
        for (step, path) in timeline.plan() {
            println!(
                "{:>5}  {:?}  {:>6.2}%  {}",
                step.output_index,
                step.pass,
                step.percentage * 100.0,
                path.display()
            );
        }
        return Ok(());
    }

    let summary = timeline.run()?;
    if let Some(last) = &summary.last_path {
        log::info!("last frame: {}", last.display());
    }
    Ok(())
}
