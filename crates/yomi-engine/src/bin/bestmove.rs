use std::process::ExitCode;

use yomi_core::{parse_fen, Notation, START_POSITION};
use yomi_engine::{AlphaBetaSearcher, TraceObserver};

const DEFAULT_DEPTH: u8 = 3;

fn print_usage() {
    eprintln!("usage: bestmove [FEN] [--depth N] [--notation san|uci] [--stats]");
}

fn main() -> ExitCode {
    env_logger::init();

    let mut fen: Option<String> = None;
    let mut depth = DEFAULT_DEPTH;
    let mut notation = Notation::San;
    let mut stats = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--depth" => {
                let Some(value) = args.next().and_then(|v| v.parse::<u8>().ok()) else {
                    print_usage();
                    return ExitCode::FAILURE;
                };
                depth = value;
            }
            "--notation" => {
                let Some(value) = args.next().and_then(|v| Notation::from_code(&v)) else {
                    print_usage();
                    return ExitCode::FAILURE;
                };
                notation = value;
            }
            "--stats" => stats = true,
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            _ if fen.is_none() => fen = Some(arg),
            _ => {
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    }

    let fen = fen.unwrap_or_else(|| START_POSITION.to_string());
    let position = match parse_fen(&fen) {
        Ok(position) => position,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", position.render());

    let mut searcher = AlphaBetaSearcher::default();
    let mut trace = TraceObserver::new();
    let report = match searcher.best_move_with_observer(&position, depth, notation, &mut trace) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Best move: {} (score {:+.3}, {} nodes)",
        report.notated, report.score, report.nodes
    );

    if stats {
        match serde_json::to_string(&trace.stats()) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("error: {err}"),
        }
    }

    ExitCode::SUCCESS
}
