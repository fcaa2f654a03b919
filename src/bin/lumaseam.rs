use lumaseam::{
    calculate_energy, carve_many, energy_to_image, format_table, luminosity_image, show_seam,
};

extern crate clap;
extern crate image;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use failure::{format_err, Error};
use image::RgbaImage;
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::process;

fn input_output<'a>(name: &'a str, about: &'a str) -> App<'a, 'a> {
    SubCommand::with_name(name)
        .about(about)
        .arg(
            Arg::with_name("input")
                .help("The image to read")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the extension picks the format")
                .required(true)
                .index(2),
        )
}

fn setup_logger(matches: &ArgMatches) -> Result<(), Error> {
    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(|e| format_err!("cannot start logging: {}", e))
}

fn load(matches: &ArgMatches) -> Result<RgbaImage, Error> {
    let path = matches
        .value_of("input")
        .ok_or_else(|| format_err!("no input image given"))?;
    let image = image::open(path)?.to_rgba();
    info!("read {} ({}x{})", path, image.width(), image.height());
    Ok(image)
}

fn output(matches: &ArgMatches) -> Result<String, Error> {
    matches
        .value_of("output")
        .map(|s| s.to_string())
        .ok_or_else(|| format_err!("no output image given"))
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    match matches.subcommand() {
        ("carve", Some(sub)) => {
            let seams: u32 = sub
                .value_of("seams")
                .ok_or_else(|| format_err!("no seam count given"))?
                .parse()
                .map_err(|e| format_err!("bad seam count: {}", e))?;
            let image = load(sub)?;
            let carved = carve_many(&image, seams)?;
            let path = output(sub)?;
            info!("writing {} ({}x{})", path, carved.width(), carved.height());
            carved.save(&path)?;
        }
        ("seam", Some(sub)) => {
            let shown = show_seam(&load(sub)?)?;
            shown.save(output(sub)?)?;
        }
        ("energy", Some(sub)) => {
            let energy = calculate_energy(&load(sub)?);
            if sub.is_present("table") {
                println!("{}", format_table(&energy));
            }
            energy_to_image(&energy).save(output(sub)?)?;
        }
        ("luminosity", Some(sub)) => {
            luminosity_image(&load(sub)?).save(output(sub)?)?;
        }
        _ => return Err(format_err!("no subcommand given")),
    }
    Ok(())
}

fn main() {
    let matches = App::new("lumaseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Seam carving by luminosity gradient")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .global(true)
                .help("More logging; repeat for more"),
        )
        .subcommand(
            input_output("carve", "Narrow an image by removing seams").arg(
                Arg::with_name("seams")
                    .short("n")
                    .long("seams")
                    .takes_value(true)
                    .required(true)
                    .help("How many columns to carve away"),
            ),
        )
        .subcommand(input_output("seam", "Paint the next seam to be carved in red"))
        .subcommand(
            input_output("energy", "Render the energy of every pixel").arg(
                Arg::with_name("table")
                    .long("table")
                    .help("Also print the energy table to stdout"),
            ),
        )
        .subcommand(input_output("luminosity", "Render the luminosity of every pixel"))
        .get_matches();

    let result = setup_logger(&matches).and_then(|_| run(&matches));
    if let Err(e) = result {
        eprintln!("lumaseam: {}", e);
        process::exit(1);
    }
}
