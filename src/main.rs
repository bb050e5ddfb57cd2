use {cartographer::*, clap::Parser, glam::IVec2};

/// Expands a branching route string into a facility map and reports how far its rooms are from
/// the origin, measured in door crossings.
#[derive(Parser)]
struct Args {
    /// Route string, delimited by `^` and `$`
    route: Option<String>,

    /// Input file path holding the route, used when no route argument is given
    #[arg(short, long, default_value_t)]
    input_file_path: String,

    /// Door-count threshold for the far-room count
    #[arg(short, long, default_value_t = 1000)]
    threshold: usize,

    /// Print the expanded map
    #[arg(short, long)]
    print_map: bool,

    /// Render never-visited cells as `?` instead of `#`
    #[arg(short, long)]
    reveal_unknown: bool,
}

fn run(route: &str, args: &Args) {
    match GridMap::try_from(route.trim_end()) {
        Ok(map) => {
            let analyzer: DistanceAnalyzer = DistanceAnalyzer::new(&map, IVec2::ZERO);

            if args.print_map {
                println!("{}", map.render(!args.reveal_unknown));
            }

            println!(
                "It takes at most {} doors to reach a room.",
                analyzer.max_distance()
            );
            println!(
                "{} rooms require passing through at least {} doors.",
                analyzer.count_at_least(args.threshold),
                args.threshold
            );
        }
        Err(error) => panic!("{error:#?}"),
    }
}

fn main() {
    let args: Args = Args::parse();

    if let Some(route) = args.route.clone() {
        run(&route, &args);
    } else if args.input_file_path.is_empty() {
        eprintln!("Either a route argument or an input file path must be provided.");
    } else if let Err(err) =
        // SAFETY: This operation is unsafe, we're just hoping nobody else touches the file while
        // this program is executing
        unsafe { open_utf8_file(&args.input_file_path, |input: &str| run(input, &args)) }
    {
        eprintln!(
            "Encountered error {} when opening file \"{}\"",
            err, args.input_file_path
        );
    }
}
