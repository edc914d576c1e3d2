// Wed Aug 26 2026 - Alex

use clap::Parser;
use colored::Colorize;
use flixel_project_generator::{
    config::ProjectConfig,
    logging,
    scaffold::{self, ScaffoldPlan},
    ui::banner::Banner,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Sets up basic Flixel project files", long_about = None)]
struct Args {
    #[arg(value_name = "PROJECT")]
    project: String,

    #[arg(long, value_name = "N", default_value_t = 320)]
    width: u32,

    #[arg(long, value_name = "N", default_value_t = 240)]
    height: u32,

    #[arg(long, value_name = "N", default_value_t = 2)]
    zoom: u32,

    #[arg(long, value_name = "SRC", default_value = "src")]
    src: PathBuf,

    #[arg(long, value_name = "PRELOADER", default_value = "Preloader")]
    preloader: String,

    #[arg(long, value_name = "MENUSTATE", default_value = "MenuState")]
    menustate: String,

    #[arg(long, value_name = "PLAYSTATE", default_value = "PlayState")]
    playstate: String,

    #[arg(long)]
    noflex: bool,

    #[arg(long)]
    noact: bool,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let args = Args::parse();

    if !args.no_banner {
        Banner::new("flx")
            .with_subtitle("Flixel project scaffolder")
            .with_version("1.0.0")
            .print();
    }

    logging::init(args.verbose);

    println!("{}", "Flixel Project Generator".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let start_time = Instant::now();

    let config = ProjectConfig {
        project_name: args.project,
        width: args.width,
        height: args.height,
        zoom: args.zoom,
        source_dir: args.src,
        preloader_name: args.preloader,
        menu_state_name: args.menustate,
        play_state_name: args.playstate,
        generate_stylesheet: !args.noflex,
        dry_run: args.noact,
    };

    if let Err(e) = config.validate() {
        eprintln!("{} {}", "[!]".red(), e);
        std::process::exit(1);
    }

    debug!("Resolved config: {:?}", config);

    let plan = match ScaffoldPlan::build(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{} Failed to render templates: {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    if config.dry_run {
        print_dry_run(&config, &plan);
        return;
    }

    println!(
        "{} Generating {} files under '{}'",
        "[*]".blue(),
        plan.file_count(),
        config.source_dir.display()
    );
    println!();

    let progress = if !args.no_progress {
        let pb = ProgressBar::new(plan.file_count() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    for file in &plan.files {
        if let Some(ref pb) = progress {
            pb.set_message(format!("Writing {}", file.path.display()));
        }

        debug!("Writing {} bytes to {}", file.content.len(), file.path.display());

        if let Err(e) = scaffold::write_file(&file.path, &file.content) {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }

        println!("{} Wrote to '{}'", "[+]".green(), file.path.display());

        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }

    if let Some(ref pb) = progress {
        pb.finish_with_message("Complete!");
    }

    let elapsed = start_time.elapsed();

    println!();
    println!("{}", "=".repeat(50).cyan());
    println!(
        "{} Done! {} files written in {:.2}s",
        "[+]".green(),
        plan.file_count(),
        elapsed.as_secs_f64()
    );
}

fn print_dry_run(config: &ProjectConfig, plan: &ScaffoldPlan) {
    println!("{}", "Will run with the following options:".cyan().bold());
    println!("  width      : {}", config.width);
    println!("  height     : {}", config.height);
    println!("  zoom       : {}", config.zoom);
    println!(
        "  noflex     : {}",
        if config.generate_stylesheet { "NO" } else { "YES" }
    );
    println!("  src        : '{}'", config.source_dir.display());
    println!("  preloader  : '{}'", config.preloader_name);
    println!("  play state : '{}'", config.play_state_name);
    println!("  menu state : '{}'", config.menu_state_name);
    println!("  project    : '{}'", config.project_name);
    println!();

    println!("{}", "The following files will be written to:".cyan().bold());
    for file in &plan.files {
        println!("  {}", file.path.display());
    }
    println!();
    println!("{} Dry run, nothing written", "[*]".blue());
}
