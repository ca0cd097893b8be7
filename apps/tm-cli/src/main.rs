mod prompt;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use tm_app::{
    AppResult, ControlKind, ExportOutcome, ScenarioOverrides, execute_run, execute_sweep,
    resolve_scenario, save_scenario,
};
use tm_results::{format_summary, format_sweep_table, format_table, write_summary_json};
use tm_scenario::Preset;
use tm_sim::{ControlMode, SweepDefinition, SweepParameter};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "thermomodel")]
#[command(about = "Linear vs nonlinear temperature model simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both models and report the trajectories
    Run {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Ask for the step count on stdin
        #[arg(short, long)]
        interactive: bool,
        /// Also write the run summary as JSON
        #[arg(long)]
        summary_json: Option<PathBuf>,
    },
    /// Vary one input over a range and compare final states
    Sweep {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Parameter to vary
        #[arg(long, value_enum)]
        param: SweepParam,
        #[arg(long)]
        start: f64,
        #[arg(long)]
        end: f64,
        /// Number of sweep points (at least 2)
        #[arg(long, default_value_t = 10)]
        points: usize,
    },
    /// List built-in presets
    Presets,
    /// Write a preset as a scenario file
    InitScenario {
        /// Destination YAML file
        path: PathBuf,
        #[arg(long, value_enum, default_value_t = PresetArg::Lab1)]
        preset: PresetArg,
    },
}

#[derive(Args)]
struct ScenarioArgs {
    /// Built-in starting scenario
    #[arg(long, value_enum, default_value_t = PresetArg::Lab1)]
    preset: PresetArg,
    /// Scenario YAML file (replaces the preset)
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Number of simulation steps (1..=1000000)
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    steps: Option<i64>,
    /// Retained-state gain, both models
    #[arg(long, allow_hyphen_values = true)]
    a: Option<f64>,
    /// Linear control gain
    #[arg(long, allow_hyphen_values = true)]
    b: Option<f64>,
    /// Nonlinear quadratic feedback gain
    #[arg(long, allow_hyphen_values = true)]
    b_nl: Option<f64>,
    /// Nonlinear control gain
    #[arg(long, allow_hyphen_values = true)]
    c: Option<f64>,
    /// Nonlinear disturbance gain
    #[arg(long, allow_hyphen_values = true)]
    d: Option<f64>,
    /// Initial temperature
    #[arg(long, allow_hyphen_values = true)]
    y0: Option<f64>,
    /// Constant control value
    #[arg(long, allow_hyphen_values = true)]
    u0: Option<f64>,
    /// Ambient (room) temperature, reported only
    #[arg(long, allow_hyphen_values = true)]
    ambient: Option<f64>,
    #[arg(long, value_enum)]
    control: Option<ControlArg>,
    /// How the nonlinear model sources its control inputs
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// CSV output path
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Skip the CSV export
    #[arg(long)]
    no_export: bool,
    /// Print only the summary
    #[arg(long)]
    no_table: bool,
}

impl ScenarioArgs {
    fn overrides(&self, steps: Option<i64>) -> ScenarioOverrides {
        ScenarioOverrides {
            steps: steps.or(self.steps),
            a: self.a,
            b: self.b,
            b_nl: self.b_nl,
            c: self.c,
            d: self.d,
            y0: self.y0,
            u0: self.u0,
            ambient: self.ambient,
            control: self.control.map(Into::into),
            mode: self.mode.map(Into::into),
            csv: self.output.clone(),
            no_export: self.no_export,
            no_table: self.no_table,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Lab1,
    Lab2,
}

impl From<PresetArg> for Preset {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Lab1 => Preset::Lab1,
            PresetArg::Lab2 => Preset::Lab2,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ControlArg {
    Sinusoidal,
    Constant,
}

impl From<ControlArg> for ControlKind {
    fn from(c: ControlArg) -> Self {
        match c {
            ControlArg::Sinusoidal => ControlKind::Sinusoidal,
            ControlArg::Constant => ControlKind::Constant,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Coupled,
    IndependentConstant,
}

impl From<ModeArg> for ControlMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Coupled => ControlMode::Coupled,
            ModeArg::IndependentConstant => ControlMode::IndependentConstant,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SweepParam {
    A,
    B,
    BNl,
    C,
    D,
    Y0,
}

impl From<SweepParam> for SweepParameter {
    fn from(p: SweepParam) -> Self {
        match p {
            SweepParam::A => SweepParameter::A,
            SweepParam::B => SweepParameter::B,
            SweepParam::BNl => SweepParameter::BNl,
            SweepParam::C => SweepParameter::C,
            SweepParam::D => SweepParameter::D,
            SweepParam::Y0 => SweepParameter::Y0,
        }
    }
}

fn main() -> AppResult<()> {
    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            scenario,
            interactive,
            summary_json,
        } => cmd_run(&scenario, interactive, summary_json.as_deref()),
        Commands::Sweep {
            scenario,
            param,
            start,
            end,
            points,
        } => cmd_sweep(&scenario, param.into(), start, end, points),
        Commands::Presets => cmd_presets(),
        Commands::InitScenario { path, preset } => cmd_init_scenario(&path, preset.into()),
    }
}

fn cmd_run(args: &ScenarioArgs, interactive: bool, summary_json: Option<&Path>) -> AppResult<()> {
    let steps = if interactive {
        Some(prompt::prompt_steps(io::stdin().lock(), io::stdout())?)
    } else {
        None
    };

    let scenario = resolve_scenario(
        args.preset.into(),
        args.scenario.as_deref(),
        &args.overrides(steps),
    )?;

    println!("{}", scenario.name);
    println!(
        "  steps = {}, mode = {}, y0 = {}",
        scenario.steps, scenario.mode, scenario.initial.y0
    );

    let response = execute_run(&scenario)?;

    if scenario.output.print_table {
        println!();
        print!("{}", format_table(&response.rows));
    }
    println!();
    print!("{}", format_summary(&response.summary));

    match &response.export {
        ExportOutcome::Written(receipt) => {
            println!("\n✓ Results saved to: {}", receipt.path.display());
        }
        ExportOutcome::Failed(message) => {
            eprintln!("\nWarning: results were not saved: {}", message);
        }
        ExportOutcome::Skipped => {}
    }

    if let Some(path) = summary_json {
        match write_summary_json(path, &response.summary) {
            Ok(()) => info!(path = %path.display(), "summary written"),
            Err(err) => warn!(error = %err, "summary export failed"),
        }
    }

    println!(
        "\nTiming: compute {:.3}s, export {:.3}s, total {:.3}s",
        response.timing.compute_time_s,
        response.timing.export_time_s,
        response.timing.total_time_s
    );
    Ok(())
}

fn cmd_sweep(
    args: &ScenarioArgs,
    parameter: SweepParameter,
    start: f64,
    end: f64,
    points: usize,
) -> AppResult<()> {
    let mut overrides = args.overrides(None);
    // The sweep writes its own table; the run CSV does not apply.
    let sweep_csv = overrides.csv.take();
    overrides.no_export = true;

    let scenario = resolve_scenario(args.preset.into(), args.scenario.as_deref(), &overrides)?;
    let definition = SweepDefinition::new(parameter, start, end, points)?;
    let response = execute_sweep(&scenario, definition, sweep_csv.as_deref())?;

    print!("{}", format_sweep_table(&response.definition, &response.points));

    match &response.export {
        ExportOutcome::Written(receipt) => {
            println!("\n✓ Sweep saved to: {}", receipt.path.display());
        }
        ExportOutcome::Failed(message) => {
            eprintln!("\nWarning: sweep was not saved: {}", message);
        }
        ExportOutcome::Skipped => {}
    }
    Ok(())
}

fn cmd_presets() -> AppResult<()> {
    println!("Built-in presets:");
    for preset in Preset::all() {
        let s = preset.scenario();
        println!("  {} - {} ({} steps)", preset, preset.description(), s.steps);
    }
    Ok(())
}

fn cmd_init_scenario(path: &Path, preset: Preset) -> AppResult<()> {
    save_scenario(path, &preset.scenario())?;
    println!("✓ Wrote {} scenario to {}", preset, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_flags_map_to_overrides() {
        let cli = Cli::parse_from([
            "thermomodel",
            "run",
            "--preset",
            "lab2",
            "-n",
            "12",
            "--b-nl",
            "0.2",
            "--mode",
            "coupled",
            "--no-export",
        ]);
        let Commands::Run { scenario, .. } = cli.command else {
            panic!("expected run command");
        };
        let o = scenario.overrides(None);
        assert_eq!(o.steps, Some(12));
        assert_eq!(o.b_nl, Some(0.2));
        assert_eq!(o.mode, Some(ControlMode::Coupled));
        assert!(o.no_export);
        assert!(matches!(scenario.preset, PresetArg::Lab2));
    }

    #[test]
    fn negative_steps_reach_validation() {
        let cli = Cli::parse_from(["thermomodel", "run", "--steps", "-4"]);
        let Commands::Run { scenario, .. } = cli.command else {
            panic!("expected run command");
        };
        let err = resolve_scenario(
            scenario.preset.into(),
            None,
            &scenario.overrides(None),
        )
        .unwrap_err();
        assert!(matches!(err, tm_app::AppError::Validation(_)));
    }

    #[test]
    fn sweep_parses_parameter_names() {
        let cli = Cli::parse_from([
            "thermomodel", "sweep", "--param", "b-nl", "--start", "0.0", "--end", "0.2",
        ]);
        let Commands::Sweep { param, points, .. } = cli.command else {
            panic!("expected sweep command");
        };
        assert_eq!(SweepParameter::from(param), SweepParameter::BNl);
        assert_eq!(points, 10);
    }
}
