use clap::Parser;
use env_logger::Env;
use log::info;
use sim_core::utils::TimeEstimation;
use sim_core::{
    BatchSummary, Fixture, Match, MatchConfig, MatchSimulator, MatchTactics, MatchTeam,
    RandomSource, SeededRandom, TeamSide, TeamTactics, ThreadRandom, WeightedModifier,
};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser, Debug)]
#[command(name = "matchday")]
#[command(about = "Minute-by-minute football match simulator", long_about = None)]
struct Cli {
    /// Home team name
    #[arg(long, default_value = "Home")]
    home: String,

    /// Away team name
    #[arg(long, default_value = "Away")]
    away: String,

    /// Home formation code (442, 433, 352, 451, 541, 343)
    #[arg(long, env = "MATCH_HOME_FORMATION")]
    home_formation: Option<String>,

    /// Home mentality (defensive, balanced, attacking, all_out_attack)
    #[arg(long, env = "MATCH_HOME_MENTALITY")]
    home_mentality: Option<String>,

    #[arg(long, env = "MATCH_AWAY_FORMATION")]
    away_formation: Option<String>,

    #[arg(long, env = "MATCH_AWAY_MENTALITY")]
    away_mentality: Option<String>,

    #[arg(long, env = "MATCH_MINUTES", default_value_t = 90)]
    minutes: u32,

    #[arg(long, env = "MATCH_SHOT_PROBABILITY", default_value_t = 0.10)]
    shot_probability: f64,

    #[arg(long, env = "MATCH_GOAL_PROBABILITY", default_value_t = 0.30)]
    goal_probability: f64,

    /// Let tactics scale event probabilities with this attack weight
    #[arg(long)]
    attack_weight: Option<f64>,

    /// Opponent press weight, defaults to 0
    #[arg(long, requires = "attack_weight")]
    press_weight: Option<f64>,

    /// Seed for reproducible runs
    #[arg(long, env = "MATCH_SEED")]
    seed: Option<u64>,

    /// Number of matches to play
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    matches: u32,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn config(&self) -> MatchConfig {
        MatchConfig::new()
            .with_total_minutes(self.minutes)
            .with_shot_probability(self.shot_probability)
            .with_goal_probability(self.goal_probability)
    }

    fn tactics(&self) -> Option<MatchTactics> {
        let any_given = self.home_formation.is_some()
            || self.home_mentality.is_some()
            || self.away_formation.is_some()
            || self.away_mentality.is_some();

        if !any_given {
            return None;
        }

        let side = |formation: &Option<String>, mentality: &Option<String>| {
            TeamTactics::from_codes(
                formation.as_deref().unwrap_or("442"),
                mentality.as_deref().unwrap_or("balanced"),
            )
        };

        Some(MatchTactics::new(
            side(&self.home_formation, &self.home_mentality),
            side(&self.away_formation, &self.away_mentality),
        ))
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = cli.config();
    config.validate()?;

    let mut simulator = MatchSimulator::new(config);
    if let Some(attack_weight) = cli.attack_weight {
        let press_weight = cli.press_weight.unwrap_or(0.0);
        simulator = simulator.with_modifier(WeightedModifier::new(attack_weight, press_weight));
    }

    let tactics = cli.tactics();

    if cli.matches == 1 {
        play_single(&cli, &simulator, tactics.as_ref())
    } else {
        play_batch(&cli, &simulator, tactics)
    }
}

fn play_single(
    cli: &Cli,
    simulator: &MatchSimulator,
    tactics: Option<&MatchTactics>,
) -> color_eyre::Result<()> {
    let mut m = MatchSimulator::create(
        MatchTeam::new(1, cli.home.as_str()),
        MatchTeam::new(2, cli.away.as_str()),
    )?;

    match (cli.seed, tactics) {
        (Some(seed), Some(t)) => simulator.simulate_with_tactics(&mut m, &mut SeededRandom::new(seed), t)?,
        (Some(seed), None) => simulator.simulate(&mut m, &mut SeededRandom::new(seed))?,
        (None, Some(t)) => simulator.simulate_with_tactics(&mut m, &mut ThreadRandom, t)?,
        (None, None) => simulator.simulate(&mut m, &mut ThreadRandom)?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&m)?);
        return Ok(());
    }

    if let Some(t) = tactics {
        println!(
            "{} ({}, {}) vs {} ({}, {})",
            m.home().name,
            t.home.formation.display_name(),
            t.home.base_profile().description(),
            m.away().name,
            t.away.formation.display_name(),
            t.away.base_profile().description(),
        );
    }

    println!("{}", m);
    print_stats(&m);

    Ok(())
}

fn play_batch(
    cli: &Cli,
    simulator: &MatchSimulator,
    tactics: Option<MatchTactics>,
) -> color_eyre::Result<()> {
    let seed = cli
        .seed
        .unwrap_or_else(|| (ThreadRandom.next_f64() * u32::MAX as f64) as u64);

    let fixtures: Vec<Fixture> = (0..cli.matches)
        .map(|_| {
            let fixture = Fixture::new(
                MatchTeam::new(1, cli.home.as_str()),
                MatchTeam::new(2, cli.away.as_str()),
            );

            match tactics {
                Some(t) => fixture.with_tactics(t),
                None => fixture,
            }
        })
        .collect();

    let (results, elapsed) =
        TimeEstimation::estimate(|| simulator.simulate_fixtures(&fixtures, seed));

    info!("simulated {} matches in {} ms (seed {})", results.len(), elapsed, seed);

    let summary = BatchSummary::from_results(&results);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let played = summary.played.max(1) as f64;

    println!("matches:   {}", summary.played);
    println!(
        "results:   {} home wins, {} draws, {} away wins",
        summary.home_wins, summary.draws, summary.away_wins
    );
    println!(
        "goals/gm:  {:.2} - {:.2}",
        summary.home_goals as f64 / played,
        summary.away_goals as f64 / played
    );

    if summary.failed > 0 {
        println!("failed:    {}", summary.failed);
    }

    Ok(())
}

fn print_stats(m: &Match) {
    for side in [TeamSide::Home, TeamSide::Away] {
        let stats = m.stats(side);

        println!(
            "{:<12} possession {:>3}%  shots {:>2}  on target {:>2}  pass accuracy {}%",
            m.team(side).name,
            stats.possession,
            stats.shots,
            stats.shots_on_target,
            stats.pass_accuracy
        );
    }
}
