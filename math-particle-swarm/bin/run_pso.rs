use clap::Parser;
use directories::ProjectDirs;
use math_audio_particle_swarm::plot::write_scatter;
use math_audio_particle_swarm::render::{INVALID_INPUT_MESSAGE, render_result};
use math_audio_particle_swarm::{PSOError, RunForm, RunResult};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "run_pso",
    about = "Minimize 3(x1-4)^2 + 5(x2+3)^2 + 7(2x3+1)^2 with a constricted particle swarm"
)]
struct Cli {
    /// Number of particles
    #[arg(long)]
    particles: Option<String>,

    /// Number of iterations
    #[arg(long)]
    iterations: Option<String>,

    /// Inertia (velocity) weight
    #[arg(long)]
    inertia: Option<String>,

    /// Personal-best weight
    #[arg(long)]
    cognitive: Option<String>,

    /// Global-best weight
    #[arg(long)]
    social: Option<String>,

    /// Constriction coefficient
    #[arg(long)]
    constriction: Option<String>,

    /// Load the parameters from a JSON form (flags above override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective parameters as a JSON form and exit
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Optional random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Write a scatter plot of the final particles (default: cache directory)
    #[arg(long, num_args = 0..=1)]
    plot: Option<Option<PathBuf>>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log progress (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn default_plot_path() -> Result<PathBuf, String> {
    let proj_dirs = ProjectDirs::from("org", "spinorama", "math-audio")
        .ok_or("Failed to determine project directories")?;
    Ok(proj_dirs
        .cache_dir()
        .join("plots")
        .join("particle_positions.html"))
}

fn build_form(args: &Cli) -> Result<RunForm, PSOError> {
    let mut form = match &args.config {
        Some(path) => RunForm::from_file(path)?,
        None => RunForm::default(),
    };
    let overrides = [
        (&args.particles, &mut form.particle_count),
        (&args.iterations, &mut form.iterations),
        (&args.inertia, &mut form.inertia),
        (&args.cognitive, &mut form.cognitive),
        (&args.social, &mut form.social),
        (&args.constriction, &mut form.constriction),
    ];
    for (flag, field) in overrides {
        if let Some(text) = flag {
            *field = text.clone();
        }
    }
    Ok(form)
}

fn main() {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let form = build_form(&args).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        process::exit(2);
    });

    if let Some(path) = &args.save_config {
        if let Err(err) = form.to_file(path) {
            eprintln!("Error: {err}");
            process::exit(1);
        }
        println!("Saved parameters to {}", path.display());
        return;
    }

    let request = match form.parse() {
        Ok(request) => request,
        Err(err) => {
            log::debug!("rejected run request: {err}");
            eprintln!("Input error: {INVALID_INPUT_MESSAGE}");
            process::exit(2);
        }
    };

    let result: RunResult = request.run(args.seed).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        process::exit(1);
    });

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        }
    } else {
        println!("{}", render_result(&result));
    }

    if let Some(plot) = &args.plot {
        let path = match plot {
            Some(path) => path.clone(),
            None => default_plot_path().unwrap_or_else(|err| {
                eprintln!("Error: {err}");
                process::exit(1);
            }),
        };
        if let Err(err) = write_scatter(&result.final_positions, &path) {
            eprintln!("Error writing plot: {err}");
            process::exit(1);
        }
        eprintln!("Plot saved to {}", path.display());
    }
}
