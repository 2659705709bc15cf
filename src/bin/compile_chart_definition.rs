use std::fs;
use std::path::PathBuf;

use buridan_charts::api::ChartDefinition;
use buridan_charts::render::{NullRenderer, Renderer};
use buridan_charts::telemetry;

const USAGE: &str =
    "usage: compile_chart_definition --input <definition.json> [--output <tree.json>] [--stats]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    stats: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let _ = telemetry::init_default_tracing();

    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let definition =
        ChartDefinition::from_json_compat_str(&raw).map_err(|err| err.to_string())?;
    let tree = definition.compile().map_err(|err| err.to_string())?;

    if args.stats {
        let mut renderer = NullRenderer::default();
        renderer.render(&tree).map_err(|err| err.to_string())?;
        eprintln!(
            "{} chart: {} nodes",
            definition.kind(),
            renderer.last_node_count
        );
    }

    let payload = tree
        .to_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;
    match args.output {
        Some(path) => fs::write(&path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut stats = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--stats" => stats = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| format!("missing --input\n{USAGE}"))?;
    Ok(CliArgs {
        input,
        output,
        stats,
    })
}
