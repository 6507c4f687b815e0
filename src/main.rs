use std::collections::HashSet;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use power_plan_toolbox::calculators::{
    self, clamp_power_factor, ConductorRun, ElectricalQuantitySet, Phase, PhaseConfig,
    CONDUCTOR_AREA_MAX, CONDUCTOR_AREA_MIN,
};
use power_plan_toolbox::i18n::{self, keys, Translator};
use power_plan_toolbox::projects::ProjectStore;
use power_plan_toolbox::{app, config, report, ui_cli};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "power_plan_cli")]
#[command(about = "Electrician's toolbox: circuit calculators and project component lists", long_about = None)]
struct Cli {
    /// UI language: auto, en or nl
    #[arg(long, global = true, default_value = "auto")]
    lang: String,
    /// Directory holding projects.json (overrides config.toml)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Without a subcommand the interactive menu starts
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PhaseArg {
    Single,
    Three,
}

impl From<PhaseArg> for Phase {
    fn from(value: PhaseArg) -> Self {
        match value {
            PhaseArg::Single => Phase::Single,
            PhaseArg::Three => Phase::Three,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Solve Ohm's law from any two known values
    Ohms {
        #[arg(long)]
        voltage: Option<f64>,
        #[arg(long)]
        current: Option<f64>,
        #[arg(long)]
        resistance: Option<f64>,
        #[arg(long)]
        power: Option<f64>,
    },
    /// Estimate real/apparent power and a breaker size
    Power {
        #[arg(long)]
        voltage: f64,
        #[arg(long)]
        current: f64,
        #[arg(long, value_enum, default_value = "single")]
        phase: PhaseArg,
        /// Power factor, clamped to 0.5-1.0
        #[arg(long, default_value_t = calculators::DEFAULT_POWER_FACTOR)]
        pf: f64,
    },
    /// Single-phase watts from voltage and current
    Watt {
        #[arg(long)]
        voltage: f64,
        #[arg(long)]
        current: f64,
        #[arg(long, default_value_t = 1.0)]
        pf: f64,
    },
    /// Voltage drop over a copper cable run
    Drop {
        /// One-way cable length in metres
        #[arg(long)]
        length: f64,
        #[arg(long)]
        current: f64,
        /// Conductor cross-section in mm², clamped to 1.5-35
        #[arg(long, default_value_t = calculators::DEFAULT_CONDUCTOR_AREA)]
        area: f64,
        #[arg(long, default_value_t = 230.0)]
        supply: f64,
    },
    /// Print the reference sheet
    Reference,
    /// Manage stored projects
    #[command(subcommand)]
    Projects(ProjectCommands),
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// List projects with their ids
    List,
    /// Add an empty project
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        voltage: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Delete projects by id
    Delete {
        #[arg(required = true)]
        ids: Vec<Uuid>,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    env_logger::init();
    if let Err(err) = try_run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    let lang = i18n::resolve_language(&cli.lang, cfg.language_code());
    info!("using language {lang}");
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    match cli.command {
        None => {
            let mut store = ProjectStore::open_dir(&cfg.data_dir)?;
            app::run(&mut cfg, &tr, &mut store)?;
        }
        Some(Commands::Ohms {
            voltage,
            current,
            resistance,
            power,
        }) => {
            let set = ElectricalQuantitySet {
                voltage,
                current,
                resistance,
                power,
            };
            let solution = calculators::solve(&set)
                .map_err(|e| report::calc_error_message(&tr, &e, keys::OHMS_VALIDATION))?;
            print_lines(&report::ohms_lines(&tr, &solution.formatted()));
        }
        Some(Commands::Power {
            voltage,
            current,
            phase,
            pf,
        }) => {
            let estimate = calculators::estimate_power(&PhaseConfig {
                phase: phase.into(),
                voltage,
                current,
                power_factor: clamp_power_factor(pf),
            });
            print_lines(&report::power_lines(&tr, &estimate));
        }
        Some(Commands::Watt {
            voltage,
            current,
            pf,
        }) => {
            let estimate = calculators::compute_watts(voltage, current, clamp_power_factor(pf));
            print_lines(&report::watt_lines(&tr, &estimate));
        }
        Some(Commands::Drop {
            length,
            current,
            area,
            supply,
        }) => {
            let estimate = calculators::estimate_voltage_drop(&ConductorRun {
                length_m: length,
                load_current_a: current,
                conductor_area_mm2: area.clamp(CONDUCTOR_AREA_MIN, CONDUCTOR_AREA_MAX),
                supply_voltage_v: supply,
            });
            print_lines(&report::drop_lines(&tr, &estimate));
        }
        Some(Commands::Reference) => ui_cli::handle_reference(&tr),
        Some(Commands::Projects(cmd)) => {
            let mut store = ProjectStore::open_dir(&cfg.data_dir)?;
            run_project_command(&tr, &mut store, cmd)?;
        }
    }
    Ok(())
}

fn run_project_command(
    tr: &Translator,
    store: &mut ProjectStore,
    cmd: ProjectCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        ProjectCommands::List => {
            if store.projects().is_empty() {
                println!("{}", tr.t(keys::PROJECTS_EMPTY));
            }
            for project in store.projects() {
                let (done, total) = project.acquired_progress();
                println!(
                    "{}  {}  {}",
                    project.id,
                    project.name,
                    tr.tf(
                        keys::PROJECT_PROGRESS,
                        &[("done", done.to_string()), ("total", total.to_string())]
                    )
                );
            }
        }
        ProjectCommands::Add {
            name,
            voltage,
            notes,
        } => match store.add_project(&name, &voltage, &notes, Vec::new())? {
            Some(id) => println!("{} {id}", tr.t(keys::PROJECT_ADDED)),
            None => println!("{}", tr.t(keys::PROJECT_NOT_ADDED)),
        },
        ProjectCommands::Delete { ids } => {
            let ids: HashSet<Uuid> = ids.into_iter().collect();
            let removed = store.delete_projects(&ids)?;
            println!(
                "{}",
                tr.tf(keys::PROJECTS_DELETED, &[("count", removed.to_string())])
            );
        }
    }
    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
